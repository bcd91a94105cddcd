//! Error types for resident admission.
//!
//! One structured enum covers the basic validation performed by the
//! concrete occupant constructors:
//!
//! - [`ResidencyError`] - rejection reasons for a prospective occupant

use thiserror::Error;

/// Reasons a prospective occupant is rejected at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResidencyError {
    /// The given name was empty or all whitespace.
    #[error("occupant name must not be empty")]
    EmptyName,

    /// The given age is outside the plausible range.
    #[error("implausible age: {0}")]
    ImplausibleAge(u32),
}
