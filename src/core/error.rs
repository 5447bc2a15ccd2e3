use thiserror::Error;

/// Errors reported by the graph template [registry](crate::registry).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("graph template `{0}` is not registered")]
    NotFound(String),
    #[error("graph template `{0}` is already registered")]
    Duplicate(String),
}
