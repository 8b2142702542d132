//! Cost ceilings for a single ordering call.

use serde::{Deserialize, Serialize};

use crate::error::{OrderError, Result};

/// Bounds on the work a single comparison may do.
///
/// Beyond these bounds the engine degrades instead of failing: compounds
/// nested deeper than `max_depth` compare as equal, only the first
/// `max_components` components of a compound are inspected, and an
/// indirection chain longer than `max_indirections` is unorderable.
///
/// Limits deserialize with defaults for missing keys, so they can be embedded
/// in a host application's configuration:
///
/// ```
/// use structsort::Limits;
///
/// let limits: Limits = serde_json::from_str(r#"{ "max_depth": 8 }"#).unwrap();
/// assert_eq!(limits.max_depth, 8);
/// assert_eq!(limits.max_components, Limits::default().max_components);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum compound nesting depth that is compared.
    pub max_depth: usize,
    /// Maximum number of components inspected per compound.
    pub max_components: usize,
    /// Maximum number of indirection layers stripped from one value.
    pub max_indirections: usize,
}

impl Limits {
    /// Default nesting depth.
    pub const DEFAULT_MAX_DEPTH: usize = 64;
    /// Default number of components inspected per compound.
    pub const DEFAULT_MAX_COMPONENTS: usize = 65_536;
    /// Default length of an indirection chain.
    pub const DEFAULT_MAX_INDIRECTIONS: usize = 256;

    /// Checks that every limit is usable.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("max_depth", self.max_depth),
            ("max_components", self.max_components),
            ("max_indirections", self.max_indirections),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(OrderError::InvalidLimit { name, value });
            }
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_components: Self::DEFAULT_MAX_COMPONENTS,
            max_indirections: Self::DEFAULT_MAX_INDIRECTIONS,
        }
    }
}
