//! Audit metadata carried by every persisted record.

use chrono::{DateTime, Utc};

/// Actor recorded in audit columns for writes made by the application.
pub const SYSTEM_ACTOR: &str = "admin";

/// Who created and last updated a record, and when.
#[derive(Debug, Clone, PartialEq)]
pub struct Audit {
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}

impl Audit {
    /// Audit for a record created now by `actor`. Both stamps are identical.
    pub fn stamp_new(actor: &str) -> Self {
        let now = Utc::now();
        Self {
            created_by: actor.to_string(),
            created_at: now,
            updated_by: actor.to_string(),
            updated_at: now,
        }
    }

    /// Marks the record as updated now by `actor`, leaving the creation stamp alone.
    pub fn touch(&mut self, actor: &str) {
        self.updated_by = actor.to_string();
        self.updated_at = Utc::now();
    }
}
