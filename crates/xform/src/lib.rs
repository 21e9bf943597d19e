//! Apply caller-supplied string transforms.
//!
//! The transform is injected by the caller; the utility only forwards the
//! value and hands back whatever the transform returned.
//!
//! # Surface
//!
//! - [`apply_transform`] / [`apply_transform_default`]: typed application
//! - [`apply_injected`]: application of a dynamically supplied argument,
//!   rejecting anything that is not callable
//! - [`Builtin`]: named transforms (`upper`, `lower`, `trim`, `identity`)
//! - [`add`] and [`BASE_VALUE`]: arithmetic helpers
//!
//! The same items are grouped under the [`utils`] namespace.
//!
//! # Example
//!
//! ```
//! use xform::utils;
//!
//! let encrypted = utils::apply_transform(|s: &str| s.to_uppercase(), "my-password-1234");
//! assert_eq!(encrypted, "MY-PASSWORD-1234");
//!
//! assert_eq!(utils::add(1, utils::BASE_VALUE), 21);
//! ```

pub use self::apply::{apply_transform, apply_transform_default};
pub use self::arith::{BASE_VALUE, add};
pub use self::builtin::Builtin;
pub use self::error::{Result, TransformError};
pub use self::injected::{ArgumentKind, DynTransform, Injected, apply_injected};

mod apply;
mod arith;
mod builtin;
mod error;
mod injected;

/// Namespace grouping the transform utility with its helpers.
pub mod utils {
    pub use crate::apply::{apply_transform, apply_transform_default};
    pub use crate::arith::{BASE_VALUE, add};
    pub use crate::builtin::Builtin;
    pub use crate::error::TransformError;
    pub use crate::injected::{Injected, apply_injected};
}
