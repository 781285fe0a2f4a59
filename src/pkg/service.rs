use crate::db::Store;

pub const GREETING: &str = "hello from service";

/// Service provides business logic on top of a [`Store`].
#[derive(Debug)]
pub struct Service {
    store: Store,
}

impl Service {
    /// Creates a new Service together with its own store.
    pub fn new() -> Self {
        let store = Store::new();
        tracing::debug!("Service created");
        Self { store }
    }

    /// Returns a greeting. Does not touch the store.
    pub fn hello(&self) -> &'static str {
        GREETING
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}
