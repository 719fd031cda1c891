//! Prelude module - commonly used types for convenient import.
//!
//! Use `use warden_approval::prelude::*;` to import the essential types.
//!
//! # Example
//!
//! ```rust
//! use warden_approval::prelude::*;
//!
//! let store = DecisionStore::new();
//! assert_eq!(store.count(), 0);
//! ```

// Errors
pub use crate::{ApprovalError, ApprovalResult};

// Decisions and the store
pub use crate::{DecisionAction, DecisionRecord, DecisionStore};

// Coordinator and views
pub use crate::{SamplingCoordinator, SamplingView, TrustSettingsLink, UserDecision};

// Permission service
pub use crate::{
    ArcConfirmationClient, ConfirmationAction, ConfirmationClient, ConfirmationConfig,
    ConfirmationSubmission,
};
