mod activity;
mod config;

pub use self::activity::*;
pub use self::config::*;
