//! I/O helpers for the lab console: terminal access, config file, screens.

pub mod config;
pub mod console;
pub mod screens;
