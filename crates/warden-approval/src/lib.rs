//! Warden Approval - decision coordination for extension sampling requests.
//!
//! This crate implements the human-in-the-loop decision flow for one
//! category of privileged request: an extension asking permission to
//! forward messages to the language model. The pieces:
//!
//! - **Decision types**: [`DecisionAction`], [`DecisionRecord`]
//! - **Decision store**: [`DecisionStore`], session-scoped and shared by
//!   every coordinator instance in the process
//! - **Coordinator**: [`SamplingCoordinator`], the per-request state
//!   machine, with [`reconcile`] as the single home of the
//!   historical-vs-live precedence rule
//! - **Permission service**: the [`ConfirmationClient`] contract and its
//!   [`HttpConfirmationClient`] implementation
//!
//! # Decision lifecycle
//!
//! A decision is committed to the store synchronously the moment the user
//! acts, then reported to the permission service from a detached task. The
//! store is authoritative for the rest of the session: remounting the UI
//! for the same request id renders the settled state and never re-prompts,
//! and a failed or lost confirmation submission is logged and ignored
//! rather than rolled back.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use warden_approval::{DecisionStore, SamplingCoordinator, UserDecision};
//! use warden_approval::{ApprovalResult, ConfirmationClient, ConfirmationSubmission};
//! use warden_core::{SamplingRequest, SessionId};
//!
//! struct NullClient;
//!
//! #[async_trait::async_trait]
//! impl ConfirmationClient for NullClient {
//!     async fn submit(&self, _submission: ConfirmationSubmission) -> ApprovalResult<()> {
//!         Ok(())
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = Arc::new(DecisionStore::new());
//! let request = SamplingRequest::new("req-1", "github").with_message("hello");
//! let coordinator = SamplingCoordinator::new(
//!     SessionId::new("session-1"),
//!     request,
//!     false,
//!     false,
//!     Arc::clone(&store),
//!     Arc::new(NullClient),
//! );
//!
//! assert!(coordinator.view().is_pending());
//! if let Some(handle) = coordinator.decide(UserDecision::Approve) {
//!     handle.await.unwrap();
//! }
//! assert!(coordinator.view().is_decided());
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

pub mod confirm;
pub mod decision;
/// Error types and results for the approval module.
pub mod error;
pub mod sampling;
pub mod store;

pub use confirm::{
    ArcConfirmationClient, ConfirmationAction, ConfirmationClient, ConfirmationConfig,
    ConfirmationReply, ConfirmationSubmission, HttpConfirmationClient, PrincipalType,
};
pub use decision::{DecisionAction, DecisionRecord};
pub use error::{ApprovalError, ApprovalResult};
pub use sampling::{SamplingCoordinator, SamplingView, TrustSettingsLink, UserDecision, reconcile};
pub use store::DecisionStore;
