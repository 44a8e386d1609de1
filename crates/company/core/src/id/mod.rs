//! Typed pool identifiers.
//!
//! [`BoundedId`] is generic over an [`IdTag`] describing one id domain; the
//! company domain lives in [`crate::company::owner`].
pub mod bounded;
pub mod error;

pub use bounded::{BoundedId, IdStorage, IdTag};
pub use error::IdError;
