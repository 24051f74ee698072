//! CLI library components for the SOC configuration wizard.

pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
