use anyhow::Result;

use crate::model::ClientConfig;

/// Runs the interactive client until the user quits.
pub fn run(config: ClientConfig) -> Result<()> {
    crate::tui_shell::run(config)
}
