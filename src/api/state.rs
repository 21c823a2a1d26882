//! Application state for the Salary Tax Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::schedule::ScheduleRegistry;

/// Shared application state.
///
/// Holds the schedule registry behind an `Arc`; the registry is read-only,
/// so handlers share it without any further coordination.
#[derive(Clone)]
pub struct AppState {
    /// The validated schedule registry.
    registry: Arc<ScheduleRegistry>,
}

impl AppState {
    /// Creates a new application state with the given schedule registry.
    pub fn new(registry: ScheduleRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns a reference to the schedule registry.
    pub fn registry(&self) -> &ScheduleRegistry {
        &self.registry
    }
}
