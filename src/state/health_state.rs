use crate::config::database::Database;
use std::sync::Arc;

/// The health probe needs the pool itself; it is absent when the router runs
/// against the in-memory store.
#[derive(Clone, Default)]
pub struct HealthState {
    pub database: Option<Arc<Database>>,
}

impl HealthState {
    pub fn new(database: Option<Arc<Database>>) -> Self {
        Self { database }
    }
}
