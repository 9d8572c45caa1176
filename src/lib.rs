pub mod action_handler;
pub mod app;
pub mod config;
pub mod file_io;
pub mod input;
pub mod logging;
pub mod paths;
pub mod search;
pub mod state;
pub mod syntax;
pub mod ui;

mod action;
