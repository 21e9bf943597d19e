//! Named transforms.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::TransformError;

static BUILTIN_NAMES: Lazy<HashMap<&'static str, Builtin>> = Lazy::new(|| {
    let mut names: HashMap<_, _> = Builtin::ALL.iter().map(|b| (b.name(), *b)).collect();
    names.insert("encrypt", Builtin::Upper);
    names
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// Upper-case; also answers to `encrypt`.
    Upper,
    Lower,
    /// Strip leading and trailing whitespace.
    Trim,
    Identity,
}

impl Builtin {
    pub const ALL: [Builtin; 4] = [Self::Upper, Self::Lower, Self::Trim, Self::Identity];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Trim => "trim",
            Self::Identity => "identity",
        }
    }

    pub fn apply(&self, input: &str) -> String { (self.as_fn())(input) }

    /// Plain function pointer, usable wherever a transform is expected.
    pub fn as_fn(&self) -> fn(&str) -> String {
        match self {
            Self::Upper => str::to_uppercase,
            Self::Lower => str::to_lowercase,
            Self::Trim => |s| s.trim().to_string(),
            Self::Identity => str::to_string,
        }
    }
}

impl FromStr for Builtin {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BUILTIN_NAMES
            .get(s)
            .copied()
            .ok_or_else(|| TransformError::UnknownTransform(s.to_string()))
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}
