//! State shared by the API handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Handler-shared state: the department configuration, loaded once at
/// startup and reference-counted across router clones.
///
/// The catalog and leave policy are read-only for the life of the process;
/// rate or policy edits land in the YAML files and take effect on restart.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps a loaded configuration for sharing with the router.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The loaded rate catalog and leave policy.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
