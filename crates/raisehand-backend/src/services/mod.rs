//! Backend service handlers.
//!
//! This module groups async handlers that operate on the shared
//! `AppContext`, perform side effects (filesystem, standard input), and emit
//! responses or notifications back to the frontend.

pub mod config_service;
pub mod feed_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::app::AppContext>;
