//! Shared building blocks for the rdiv crates.
//!
//! - [`constraint`] expresses numeric invariants such as "strictly positive"
//!   at the type level, so validated inputs can be passed around without
//!   re-checking them.
//! - [`Observer`] lets callers watch (and optionally steer) a long-running
//!   computation without the computation knowing anything about logging.

pub mod constraint;
mod observe;

pub use observe::Observer;
