//! Command line control panel for the listings dashboard.

pub mod commands;
pub mod config;
pub mod logging;
pub mod session;
pub mod summary;
