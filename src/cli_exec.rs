use anyhow::{Context, Result};

use activity_signup::controller::ActivityController;
use activity_signup::model::ClientConfig;
use activity_signup::remote::ActivityClient;
use activity_signup::render::{card_lines, render_activities};

use crate::{AuthArgs, Commands};

pub(crate) fn handle_command(command: Commands, config: &ClientConfig) -> Result<()> {
    match command {
        Commands::List { json } => {
            let client = ActivityClient::new(config).context("create activity client")?;
            let list = client.list_activities().context("list activities")?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&list).context("serialize activities json")?
                );
            } else {
                for card in render_activities(&list) {
                    for line in card_lines(&card) {
                        println!("{}", line);
                    }
                }
            }
        }
        Commands::Login { auth } => {
            let mut controller = logged_in(config, &auth)?;
            let name = controller
                .session()
                .map(|s| s.display_name().to_string())
                .unwrap_or_default();
            controller.logout();
            println!("Credentials accepted for {}", name);
        }
        Commands::Signup {
            activity,
            email,
            auth,
        } => {
            let mut controller = logged_in(config, &auth)?;
            let message = controller
                .signup(&activity, &email)
                .with_context(|| format!("sign up {} for {}", email, activity))?;
            println!("{}", message);
        }
        Commands::Unregister {
            activity,
            email,
            auth,
        } => {
            let mut controller = logged_in(config, &auth)?;
            let message = controller
                .unregister(&activity, &email)
                .with_context(|| format!("unregister {} from {}", email, activity))?;
            println!("{}", message);
        }
    }
    Ok(())
}

fn logged_in(config: &ClientConfig, auth: &AuthArgs) -> Result<ActivityController> {
    let mut controller = ActivityController::new(config).context("create activity client")?;
    controller
        .login(&auth.username, &auth.password)
        .context("login")?;
    Ok(controller)
}
