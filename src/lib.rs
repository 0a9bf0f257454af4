pub mod cli;
pub mod config;
pub mod github;
pub mod logging;
pub mod remote;
pub mod ui;
