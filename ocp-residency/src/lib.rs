//! # ocp-residency
//!
//! The residency half of the open-closed principle examples: a [`House`]
//! that admits new kinds of occupants without ever being edited.
//!
//! # The closed design
//!
//! A container declared over one concrete type, say `Vec<Person>`, must
//! change whenever a new kind of occupant appears. Widening `Person`
//! itself instead spreads the change to every other place that type is
//! used.
//!
//! # The open design
//!
//! [`House`] depends on the [`Resident`] capability, and concrete
//! occupant types depend on (implement) that capability. The coupling
//! direction is reversed: variants point at the abstraction, and the
//! container compiles unchanged no matter how many variants exist.
//!
//! ```rust
//! use ocp_residency::{House, NewPerson, Person};
//!
//! let mut house = House::empty();
//! house.add(Person::new("Ana", 34)?);
//! house.add(NewPerson::new("Bo", 29)?);
//!
//! assert_eq!(house.occupancy(), 2);
//! # Ok::<(), ocp_residency::ResidencyError>(())
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod house;
mod person;
mod resident;

// Re-exports
pub use error::ResidencyError;
pub use house::House;
pub use person::{NewPerson, Person};
pub use resident::Resident;
