//! Failure classification
//!
//! Backend calls fail in many shapes: the device is offline, the transport
//! gave up, the GraphQL server returned an `errors` list, or something
//! arbitrary was thrown. This module is the single place where those raw
//! shapes are interpreted. Everything downstream consumes the resulting
//! [`ErrorReport`] and matches on [`ErrorKind`].

mod classifier;
mod failure;
mod report;

pub use classifier::{classify, classify_message, classify_with};
pub use failure::Failure;
pub use report::{ErrorKind, ErrorReport};
