//! Resident capability for house occupancy.

/// A marker capability for anything that may occupy a [`House`].
///
/// The capability requires no members. A house never inspects what its
/// occupants are, so the contract has nothing to promise beyond being a
/// self-contained, thread-safe value.
///
/// # Extension
///
/// A new occupant type implements this trait and becomes admissible to
/// every existing [`House`], with no change to the container or to the
/// other occupant types.
///
/// [`House`]: crate::House
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Resident",
    label = "must be `Send + Sync + 'static`",
    note = "Implement `Resident` to make this type admissible to a `House`."
)]
pub trait Resident: Send + Sync + 'static {}

// Common Resident implementations
impl<T: Resident> Resident for Box<T> {}
impl<T: Resident> Resident for std::sync::Arc<T> {}
