//! Typed transform application.

use tracing::trace;

/// Apply `transform` to `value` and return its output untouched.
///
/// The output type is whatever the transform produces; nothing requires it
/// to be a string.
pub fn apply_transform<F, R>(transform: F, value: &str) -> R
where
    F: FnOnce(&str) -> R,
{
    trace!(len = value.len(), "applying transform");
    transform(value)
}

/// [`apply_transform`] on the empty string.
pub fn apply_transform_default<F, R>(transform: F) -> R
where
    F: FnOnce(&str) -> R,
{
    apply_transform(transform, "")
}
