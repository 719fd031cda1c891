//! Sampling-confirmation coordinator.
//!
//! A [`SamplingCoordinator`] is bound to exactly one sampling request and
//! owns the observable view of its decision state:
//!
//! 1. Cancelled upstream? Render a cancellation notice, touch nothing.
//! 2. Read the [`DecisionStore`]; a present record is authoritative.
//! 3. No record but the server says the request was already resolved?
//!    Materialize a historical confirmation ([`reconcile`]).
//! 4. Otherwise offer approve/deny; a user action commits to the store
//!    synchronously and notifies the permission service best-effort.
//!
//! Coordinator instances are cheap and disposable — the hosting widget may
//! be created and destroyed repeatedly while the session-scoped store keeps
//! the decision.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::task::JoinHandle;

use warden_core::{ActionRequired, RequestId, SamplingRequest, SessionId};

use crate::confirm::{ConfirmationAction, ConfirmationClient, ConfirmationSubmission};
use crate::decision::{DecisionAction, DecisionRecord};
use crate::store::DecisionStore;

/// Status line for requests settled before this client saw them.
const HISTORICAL_STATUS_LINE: &str = "approval not available";

/// Affordance for opening the extension trust-settings dialog.
///
/// The dialog itself is an external collaborator; it edits the extension's
/// standing trust policy, never the per-request decision already recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustSettingsLink {
    /// Extension whose trust policy the dialog edits.
    pub extension_name: String,
}

/// What the presentation layer should render for one sampling request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SamplingView {
    /// The message thread was cancelled upstream; render a cancellation
    /// notice and nothing else.
    Cancelled,
    /// No decision yet; offer approve and deny.
    Pending {
        /// Extension asking to sample.
        extension_name: String,
        /// Joined message bodies (placeholder when empty).
        preview: String,
    },
    /// Terminal state; offer only the status readout and the
    /// trust-settings affordance.
    Decided {
        /// The recorded action.
        action: DecisionAction,
        /// The record's display label.
        label: String,
        /// Status text: "<extension> sampling <label>" for live decisions,
        /// a not-available notice for historical confirmations.
        status_line: String,
        /// Link to the trust-settings collaborator.
        trust_settings: TrustSettingsLink,
    },
}

impl SamplingView {
    /// Check if this view still offers the approve/deny actions.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Check if this view shows a settled decision.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        matches!(self, Self::Decided { .. })
    }
}

/// The two actions a pending prompt offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserDecision {
    /// Allow the extension to sample, once.
    Approve,
    /// Deny the request.
    Deny,
}

impl UserDecision {
    fn record(self) -> DecisionRecord {
        match self {
            Self::Approve => DecisionRecord::approved(),
            Self::Deny => DecisionRecord::denied(),
        }
    }

    fn wire_action(self) -> ConfirmationAction {
        match self {
            Self::Approve => ConfirmationAction::AllowOnce,
            Self::Deny => ConfirmationAction::Deny,
        }
    }
}

/// Reconcile local decision state against the server-reported
/// "already resolved historically" flag.
///
/// Returns the record to persist, or `None` when nothing must change. The
/// precedence rule lives here and nowhere else: a local record that already
/// reflects a decision always wins, so a stale historical signal can never
/// overwrite a live user decision. Only a request the server reports as
/// resolved, with no local decision, materializes a historical
/// confirmation.
#[must_use]
pub fn reconcile(
    local: Option<&DecisionRecord>,
    resolved_historically: bool,
) -> Option<DecisionRecord> {
    if resolved_historically && !local.is_some_and(|record| record.decided) {
        Some(DecisionRecord::confirmed_historical())
    } else {
        None
    }
}

/// Per-request approval coordinator for extension sampling.
///
/// Bound to exactly one request id for its whole lifetime. The store and
/// client are shared, session-scoped collaborators.
pub struct SamplingCoordinator {
    session_id: SessionId,
    request: SamplingRequest,
    cancelled: bool,
    resolved_historically: bool,
    store: Arc<DecisionStore>,
    client: Arc<dyn ConfirmationClient>,
}

impl SamplingCoordinator {
    /// Create a coordinator for a sampling request.
    ///
    /// `cancelled` and `resolved_historically` are the two caller-supplied
    /// flags from the inbound payload. Unless cancelled, construction runs
    /// the reconciliation effect, so a historically-resolved request is
    /// already `Decided` by the time the first view is taken.
    #[must_use]
    pub fn new(
        session_id: SessionId,
        request: SamplingRequest,
        cancelled: bool,
        resolved_historically: bool,
        store: Arc<DecisionStore>,
        client: Arc<dyn ConfirmationClient>,
    ) -> Self {
        let coordinator = Self {
            session_id,
            request,
            cancelled,
            resolved_historically,
            store,
            client,
        };
        coordinator.run_reconciliation();
        coordinator
    }

    /// Bind a coordinator to an action-required payload.
    ///
    /// Sampling confirmations are the only category this coordinator owns:
    /// every other variant returns `None` without reading or writing
    /// anything, and belongs to a sibling coordinator.
    #[must_use]
    pub fn bind(
        session_id: SessionId,
        event: &ActionRequired,
        cancelled: bool,
        resolved_historically: bool,
        store: Arc<DecisionStore>,
        client: Arc<dyn ConfirmationClient>,
    ) -> Option<Self> {
        let request = event.as_sampling()?.clone();
        Some(Self::new(
            session_id,
            request,
            cancelled,
            resolved_historically,
            store,
            client,
        ))
    }

    /// The request this coordinator is bound to.
    #[must_use]
    pub fn request_id(&self) -> &RequestId {
        &self.request.id
    }

    /// Current renderable state.
    ///
    /// Cancellation is checked first and short-circuits everything else,
    /// including the store read. Otherwise the store is authoritative:
    /// a decided record renders as settled no matter what the historical
    /// flag says.
    #[must_use]
    pub fn view(&self) -> SamplingView {
        if self.cancelled {
            return SamplingView::Cancelled;
        }

        match self.store.get(&self.request.id) {
            Some(record) if record.decided => {
                let status_line = if record.action.is_historical() {
                    HISTORICAL_STATUS_LINE.to_string()
                } else {
                    format!(
                        "{} sampling {}",
                        self.request.extension_name, record.display_label
                    )
                };
                SamplingView::Decided {
                    action: record.action,
                    label: record.display_label,
                    status_line,
                    trust_settings: TrustSettingsLink {
                        extension_name: self.request.extension_name.clone(),
                    },
                }
            },
            _ => SamplingView::Pending {
                extension_name: self.request.extension_name.clone(),
                preview: self.request.preview(),
            },
        }
    }

    /// Apply a user decision.
    ///
    /// Phase 1 commits the record to the store synchronously — the UI is
    /// `Decided` before any network traffic. Phase 2 notifies the
    /// permission service from a detached task whose outcome never affects
    /// the committed state; failures are logged and ignored. The returned
    /// handle exists so callers (and tests) can await the submission; it is
    /// safe to drop, and tearing down the UI leaves the task to finish on
    /// its own.
    ///
    /// Returns `None`, submitting nothing, when the request is cancelled or
    /// already decided — at most one submission per request id ever leaves
    /// this coordinator.
    pub fn decide(&self, decision: UserDecision) -> Option<JoinHandle<()>> {
        if self.cancelled {
            return None;
        }
        if self
            .store
            .get(&self.request.id)
            .is_some_and(|record| record.decided)
        {
            // Terminal for this id.
            return None;
        }

        self.store.set(self.request.id.clone(), decision.record());

        let submission = ConfirmationSubmission::sampling(
            self.session_id.clone(),
            self.request.id.clone(),
            decision.wire_action(),
        );
        let request_id = self.request.id.clone();
        let client = Arc::clone(&self.client);
        Some(tokio::spawn(async move {
            if let Err(error) = client.submit(submission).await {
                tracing::warn!(
                    request_id = %request_id,
                    %error,
                    "sampling confirmation submission failed"
                );
            }
        }))
    }

    /// Update the server-reported historical flag.
    ///
    /// Re-evaluates the reconciliation effect; a no-op once a decision is
    /// recorded locally.
    pub fn set_resolved_historically(&mut self, resolved_historically: bool) {
        self.resolved_historically = resolved_historically;
        self.run_reconciliation();
    }

    /// Update the upstream cancellation flag.
    pub fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
        self.run_reconciliation();
    }

    /// The reconciliation effect: evaluated at construction and whenever
    /// an input changes. Cancelled coordinators touch nothing.
    fn run_reconciliation(&self) {
        if self.cancelled {
            return;
        }
        let local = self.store.get(&self.request.id);
        if let Some(record) = reconcile(local.as_ref(), self.resolved_historically) {
            self.store.set(self.request.id.clone(), record);
        }
    }
}

impl fmt::Debug for SamplingCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SamplingCoordinator")
            .field("session_id", &self.session_id)
            .field("request_id", &self.request.id)
            .field("cancelled", &self.cancelled)
            .field("resolved_historically", &self.resolved_historically)
            .finish_non_exhaustive()
    }
}
