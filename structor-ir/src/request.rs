//! Requested constructor kinds.

use std::{fmt, str::FromStr};

/// A constructor strategy the generator can synthesize.
///
/// The derived ordering is the canonical emission order: all-args
/// constructors always precede builders in generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConstructorKind {
    /// A single `new` function taking every included field.
    AllArgs,
    /// A fluent builder type with one setter per included field.
    Builder,
}

impl ConstructorKind {
    /// All kinds in canonical order.
    pub const ALL: [ConstructorKind; 2] = [ConstructorKind::AllArgs, ConstructorKind::Builder];

    /// Returns the CLI identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructorKind::AllArgs => "allArgs",
            ConstructorKind::Builder => "builder",
        }
    }
}

impl fmt::Display for ConstructorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConstructorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allArgs" => Ok(ConstructorKind::AllArgs),
            "builder" => Ok(ConstructorKind::Builder),
            _ => Err(format!(
                "unexpected constructor type '{}', expected 'allArgs' or 'builder'",
                s
            )),
        }
    }
}

/// A kind was requested more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("constructor type '{0}' was requested more than once")]
pub struct DuplicateKind(pub ConstructorKind);

/// The validated set of constructor kinds for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorRequest {
    kinds: Vec<ConstructorKind>,
}

impl ConstructorRequest {
    /// Validate a list of requested kinds, rejecting duplicates.
    ///
    /// The request order is not significant; see [`ConstructorRequest::kinds`].
    pub fn new(requested: impl IntoIterator<Item = ConstructorKind>) -> Result<Self, DuplicateKind> {
        let mut kinds: Vec<ConstructorKind> = Vec::new();
        for kind in requested {
            if kinds.contains(&kind) {
                return Err(DuplicateKind(kind));
            }
            kinds.push(kind);
        }
        kinds.sort();
        Ok(Self { kinds })
    }

    /// Requested kinds in canonical order (all-args first).
    pub fn kinds(&self) -> &[ConstructorKind] {
        &self.kinds
    }
}

impl Default for ConstructorRequest {
    fn default() -> Self {
        Self {
            kinds: vec![ConstructorKind::AllArgs],
        }
    }
}
