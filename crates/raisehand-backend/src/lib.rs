//! Backend runtime entry point and public API surface.
//!
//! This crate owns the backend lifecycle, routes bridge messages to services,
//! persists the configuration and relays the browser's message feed.

mod app;
mod config;
mod runtime;
mod services;
mod state;

pub use crate::config::{ConfigError, config_path, load_config, save_config};
pub use crate::runtime::run;
