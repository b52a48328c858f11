//! Error types

/// Errors raised by the node model.
///
/// Content-model violations are compile-time type errors and have no
/// runtime representation; this covers the places where arbitrary
/// strings enter the model instead.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("invalid tag name: {name:?}")]
    InvalidTagName { name: String },
}
