//! Prelude module - commonly used types for convenient import.
//!
//! Use `use warden_core::prelude::*;` to import the essential types.
//!
//! # Example
//!
//! ```rust
//! use warden_core::prelude::*;
//!
//! let request = SamplingRequest::new("req-1", "github");
//! assert_eq!(request.id, RequestId::new("req-1"));
//! ```

// Identifiers
pub use crate::{RequestId, SessionId};

// Action-required payloads
pub use crate::{ActionRequired, SamplingRequest, ToolConfirmationRequest};
