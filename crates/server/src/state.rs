use crate::config::ServerConfig;
use phonebook::Directory;
use std::sync::Arc;

/// Shared application state
///
/// The directory is read-only for the lifetime of the process, so requests
/// share it through an `Arc` with no locking.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// User directory (shared across requests, never mutated)
    pub directory: Arc<Directory>,
}

impl ServerState {
    /// Create server state over the builtin startup dataset
    pub fn new(config: ServerConfig) -> Self {
        Self::with_directory(config, Directory::builtin())
    }

    /// Create server state over an explicit directory. Used by tests to
    /// inject fixture datasets.
    pub fn with_directory(config: ServerConfig, directory: Directory) -> Self {
        Self {
            config: Arc::new(config),
            directory: Arc::new(directory),
        }
    }
}
