//! # Goal
//! The main goal of this library is to provide exclusive-ownership handles
//! to heap values: a value handed between locals, container elements, and
//! function returns such that exactly one holder is responsible for its
//! destruction at every instant.
//!
//! Primary attribute of the library is that misuse is unrepresentable rather
//! than checked: handles can't be duplicated, transfer is a move, and a
//! vacated handle can't be dereferenced.
//!
//! Secondary attribute is zero overhead. A handle is an address plus its
//! deleter by value, and every operation is a constant-time pointer
//! manipulation plus at most one destructor invocation.
//!
//! # Features
//! - Ownership, through the Own type.
//!      - Responsible for: Who destroys the value?
//! - Destruction strategy, through the Deleter family of types.
//!      - Responsible for: How is the allocation reclaimed?
//! - Heterogeneous storage, through the AnyOwn type.
//!      - Responsible for: Can one container element type point at many payload types?
//!
//! # Architecture
//! There are several pieces that interact with one another:
//! - Deleter - strategy paired with each handle that reclaims its allocation.
//! - Own - typed handle, the sole owner of its payload. Transfer between
//!   owners is a plain move; emptiness lives in `Option<Own>`.
//! - AnyOwn - type-erased handle, constructed only by erasing an Own so its
//!   tag and drop glue are always truthful. The in-transit form for
//!   containers over heterogeneous payloads.
//! - CastError - failed narrowing of an AnyOwn, surrendering it back intact.
//!
//! Ownership is a logical, not a synchronized, guarantee: there is no
//! internal locking and no support for concurrent access to one handle.

//? Important decisions:
//? - No shared or cyclic ownership, no weak handles. A handle either owns
//?   its payload or doesn't exist.
//? - Release hands the raw allocation and the reclamation obligation to the
//?   caller, leaving nothing behind.
//? - An erased handle can't be built from a bare untyped address since the
//?   tag could then lie, and narrowing would be unsound.

mod deleter;
mod own;

#[cfg(feature = "erased")]
mod any;
#[cfg(feature = "erased")]
mod error;

pub use deleter::{BoxDeleter, Deleter};
pub use own::Own;

#[cfg(feature = "erased")]
pub use any::AnyOwn;
#[cfg(feature = "erased")]
pub use error::{CastError, TypeInfo};
