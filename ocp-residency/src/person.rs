//! Concrete occupant types.
//!
//! [`Person`] is the original occupant; [`NewPerson`] is the occupant
//! added later. Both satisfy [`Resident`], so a [`House`] holds either
//! without knowing which one it has.
//!
//! [`House`]: crate::House

use crate::{error::ResidencyError, resident::Resident};

/// Oldest age a constructor accepts.
const MAX_AGE: u32 = 130;

fn validate(name: &str, age: u32) -> Result<(), ResidencyError> {
    if name.trim().is_empty() {
        return Err(ResidencyError::EmptyName);
    }
    if age > MAX_AGE {
        return Err(ResidencyError::ImplausibleAge(age));
    }
    Ok(())
}

/// A named occupant with an age. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    /// Creates a person after basic validation of the given facts.
    pub fn new(name: impl Into<String>, age: u32) -> Result<Self, ResidencyError> {
        let name = name.into();
        validate(&name, age)?;
        Ok(Self { name, age })
    }

    /// The occupant's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The occupant's age in years.
    pub fn age(&self) -> u32 {
        self.age
    }
}

impl Resident for Person {}

/// An occupant type introduced after [`Person`] shipped.
///
/// Carries the same facts plus behavior the original type never had.
/// Implementing [`Resident`] is the only step required for a [`House`]
/// to admit it.
///
/// [`House`]: crate::House
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    name: String,
    age: u32,
}

impl NewPerson {
    /// Creates the occupant after basic validation of the given facts.
    pub fn new(name: impl Into<String>, age: u32) -> Result<Self, ResidencyError> {
        let name = name.into();
        validate(&name, age)?;
        Ok(Self { name, age })
    }

    /// The occupant's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The occupant's age in years.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// A one-line self introduction.
    pub fn introduce(&self) -> String {
        format!("{}, {} years old", self.name, self.age)
    }

    /// Whether the occupant is of legal age.
    pub fn is_adult(&self) -> bool {
        self.age >= 18
    }
}

impl Resident for NewPerson {}
