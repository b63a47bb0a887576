//! Error types surfaced by configuration, the attribute bag and the entity store.

use crate::objects::store::EntityId;
use thiserror::Error;

/// Errors raised while loading or validating simulation tunables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value was present but unusable.
    #[error("invalid configuration `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Errors raised by typed reads from an entity's attribute bag.
#[derive(Debug, Error, PartialEq)]
pub enum AttributeError {
    #[error("attribute `{0}` is not set")]
    Missing(String),
    #[error("attribute `{key}` holds a {found}, expected a {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("entity {0:?} is not registered")]
    UnknownEntity(EntityId),
}
