pub mod controller;
pub mod error;
pub mod model;
pub mod remote;
pub mod render;
pub mod session;
pub mod status;
pub mod tui;

mod tui_shell;
