//! Application state shared across request handlers.

use compdir_core::config::DirectoryConfig;

/// Shared state: immutable config only. Connections are per-request.
pub(crate) struct AppState {
    pub(crate) config: DirectoryConfig,
}
