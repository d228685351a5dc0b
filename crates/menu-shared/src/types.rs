//! Common types

use uuid::Uuid;

/// Menu and role identifiers are stored as 32-char lowercase hex strings.
pub type EntityId = String;

pub fn new_id() -> EntityId {
    Uuid::new_v4().simple().to_string()
}
