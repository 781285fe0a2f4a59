use chrono::{DateTime, Utc};

/// Opaque handle to the backing store.
#[derive(Debug, Clone)]
pub struct Store {
    opened_at: DateTime<Utc>,
}

impl Store {
    pub fn new() -> Self {
        let opened_at = Utc::now();
        tracing::debug!("Store opened at {}", opened_at.to_rfc3339());
        Self { opened_at }
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
