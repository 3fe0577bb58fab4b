/// The core backend state that holds the configuration and where it lives.
///
/// It is designed to be wrapped in thread-safe, async-friendly concurrency
/// primitives (see [`SharedState`]) so that service handlers can read it
/// concurrently and occasionally write it.
#[derive(Debug, Clone)]
pub struct State {
    /// The loaded application configuration.
    pub config: raisehand_bridge::config::Config,
    /// File the configuration is persisted to. `None` when the user's
    /// directories could not be resolved, in which case changes only live
    /// for the current run.
    pub config_path: Option<std::path::PathBuf>,
}

/// Thread-safe, async-friendly shared reference to the application [`State`].
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;
