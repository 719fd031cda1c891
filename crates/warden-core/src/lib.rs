//! Warden Core - Foundation types for the Warden extension approval runtime.
//!
//! This crate provides:
//! - Identifier types shared across coordinators and frontends
//! - The inbound action-required payload, tagged by request category
//!
//! The coordinators themselves live in sibling crates (`warden-approval`
//! holds the sampling-confirmation coordinator); this crate only carries the
//! vocabulary they share with the session daemon and the presentation layer.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

pub mod event;
pub mod types;

pub use event::{
    ActionRequired, EMPTY_MESSAGE_PLACEHOLDER, SamplingRequest, ToolConfirmationRequest,
};
pub use types::{RequestId, SessionId};
