//! Admitting an occupant type the crate never heard of.

use ocp_residency::{House, Person, Resident};

/// A household pet; not a person at all.
struct Cat;

impl Resident for Cat {}

#[test]
fn a_foreign_occupant_type_moves_in_unchanged() {
    let mut house = House::empty();

    house.add(Person::new("Ana", 34).unwrap());
    house.add(Cat);

    assert_eq!(house.occupancy(), 2);
}

#[test]
fn boxed_and_shared_occupants_are_admissible() {
    use std::sync::Arc;

    let mut house = House::empty();

    house.add(Box::new(Cat));
    house.add(Arc::new(Person::new("Bo", 29).unwrap()));

    assert_eq!(house.occupancy(), 2);
}
