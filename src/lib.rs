pub mod app;
pub mod cli;
pub mod clipboard;
pub mod color;
pub mod config;
pub mod db;
pub mod event;
pub mod logging;
pub mod palette;
pub mod source;
pub mod theme;
pub mod tui;
pub mod types;
pub mod ui;
