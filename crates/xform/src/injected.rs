//! Dynamically supplied transforms.
//!
//! When the transform arrives as an arbitrary value rather than a typed
//! function, nothing guarantees it can be called. [`apply_injected`] checks
//! that at the boundary and fails with
//! [`TransformError::InvalidArgument`] before touching the value.

use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::{Builtin, Result, TransformError, apply_transform};

/// Callable accepted by [`Injected::Transform`].
pub type DynTransform = Box<dyn Fn(&str) -> Value + Send + Sync>;

/// Kind of a non-callable argument, reported in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ArgumentKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A transform argument whose shape is only known at runtime.
pub enum Injected {
    Transform(DynTransform),
    Value(Value),
}

impl Injected {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&str) -> Value + Send + Sync + 'static,
    {
        Self::Transform(Box::new(f))
    }

    pub fn is_callable(&self) -> bool { matches!(self, Self::Transform(_)) }

    /// `None` when callable.
    pub fn kind(&self) -> Option<ArgumentKind> {
        match self {
            Self::Transform(_) => None,
            Self::Value(v) => Some(ArgumentKind::of(v)),
        }
    }
}

impl From<Value> for Injected {
    fn from(value: Value) -> Self { Self::Value(value) }
}

impl From<Builtin> for Injected {
    fn from(builtin: Builtin) -> Self { Self::from_fn(move |s| Value::String(builtin.apply(s))) }
}

impl fmt::Debug for Injected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transform(_) => f.write_str("Injected::Transform(..)"),
            Self::Value(v) => f.debug_tuple("Injected::Value").field(v).finish(),
        }
    }
}

/// Apply an injected transform to `value`, or to the empty string when
/// `value` is `None`.
///
/// Whatever JSON value the transform returns is passed back unchanged.
pub fn apply_injected(transform: &Injected, value: Option<&str>) -> Result<Value> {
    match transform {
        Injected::Transform(f) => Ok(apply_transform(&**f, value.unwrap_or_default())),
        Injected::Value(v) => {
            let found = ArgumentKind::of(v);
            debug!(%found, "rejecting non-callable transform");
            Err(TransformError::InvalidArgument { found })
        }
    }
}
