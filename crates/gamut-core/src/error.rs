//! Error types for shader-fragment composition.
//!
//! Every failure a fragment registry can introduce into a downstream GLSL
//! compile (name collision, unresolved call, dependency cycle) is modeled
//! here so it surfaces as a typed error at composition time, long before
//! any GLSL compiler sees the assembled text.
//!
//! # Usage
//!
//! ```rust
//! use gamut_core::{Error, Result};
//!
//! fn check_unique(names: &[&str], candidate: &str) -> Result<()> {
//!     if names.contains(&candidate) {
//!         return Err(Error::duplicate_function(candidate));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while registering and composing shader fragments.
///
/// # Categories
///
/// - **Registration errors**: [`DuplicateFunction`](Error::DuplicateFunction),
///   [`MissingDefinition`](Error::MissingDefinition)
/// - **Resolution errors**: [`UnresolvedFunction`](Error::UnresolvedFunction),
///   [`DependencyCycle`](Error::DependencyCycle)
/// - **Configuration errors**: [`InvalidParameter`](Error::InvalidParameter)
#[derive(Debug, Error)]
pub enum Error {
    /// A fragment defining this function name is already registered.
    ///
    /// The composer enforces name uniqueness so the assembled program
    /// never contains two definitions of the same GLSL function.
    #[error("function '{name}' is already defined by a registered fragment")]
    DuplicateFunction {
        /// The colliding function name
        name: String,
    },

    /// A fragment calls a function no registered fragment defines.
    ///
    /// Returned during assembly when the transitive call graph of the
    /// entry function references an unknown name.
    #[error("function '{name}' called by '{referenced_by}' is not registered")]
    UnresolvedFunction {
        /// The unknown function name
        name: String,
        /// The fragment whose body references it
        referenced_by: String,
    },

    /// The fragment call graph contains a cycle.
    ///
    /// GLSL forbids recursion, so any cycle in the call graph would be
    /// rejected by the shader compiler anyway; it is reported here first.
    #[error("dependency cycle through function '{name}'")]
    DependencyCycle {
        /// A function on the detected cycle
        name: String,
    },

    /// A fragment's source does not contain the function it claims to define.
    ///
    /// Downstream composers reference fragments by declared name; a source
    /// body missing that name would produce an unresolvable program.
    #[error("fragment source does not define declared function '{name}'")]
    MissingDefinition {
        /// The declared function name
        name: String,
    },

    /// A generator parameter is outside its valid range.
    #[error("invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Rejected value
        value: f32,
        /// Why the value is invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::DuplicateFunction`] error.
    #[inline]
    pub fn duplicate_function(name: impl Into<String>) -> Self {
        Self::DuplicateFunction { name: name.into() }
    }

    /// Creates an [`Error::UnresolvedFunction`] error.
    #[inline]
    pub fn unresolved_function(
        name: impl Into<String>,
        referenced_by: impl Into<String>,
    ) -> Self {
        Self::UnresolvedFunction {
            name: name.into(),
            referenced_by: referenced_by.into(),
        }
    }

    /// Creates an [`Error::DependencyCycle`] error.
    #[inline]
    pub fn dependency_cycle(name: impl Into<String>) -> Self {
        Self::DependencyCycle { name: name.into() }
    }

    /// Creates an [`Error::MissingDefinition`] error.
    #[inline]
    pub fn missing_definition(name: impl Into<String>) -> Self {
        Self::MissingDefinition { name: name.into() }
    }

    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(name: impl Into<String>, value: f32, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error was raised at registration time.
    #[inline]
    pub fn is_registration_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateFunction { .. } | Self::MissingDefinition { .. }
        )
    }

    /// Returns `true` if this error was raised while resolving the call graph.
    #[inline]
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::UnresolvedFunction { .. } | Self::DependencyCycle { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_function() {
        let err = Error::duplicate_function("gamutMap");
        assert!(err.to_string().contains("gamutMap"));
        assert!(err.is_registration_error());
        assert!(!err.is_resolution_error());
    }

    #[test]
    fn test_unresolved_function() {
        let err = Error::unresolved_function("bt2020ToBt709", "gamutMap");
        let msg = err.to_string();
        assert!(msg.contains("bt2020ToBt709"));
        assert!(msg.contains("gamutMap"));
        assert!(err.is_resolution_error());
    }

    #[test]
    fn test_dependency_cycle() {
        let err = Error::dependency_cycle("a");
        assert!(err.to_string().contains("cycle"));
        assert!(err.is_resolution_error());
    }

    #[test]
    fn test_invalid_parameter() {
        let err = Error::invalid_parameter("knee", 1.5, "must be in [0, 1)");
        let msg = err.to_string();
        assert!(msg.contains("knee"));
        assert!(msg.contains("1.5"));
    }
}
