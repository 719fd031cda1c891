//! Decision records for approval-required requests.
//!
//! A [`DecisionRecord`] is the terminal outcome for one request id. It is
//! written once on the first user action (or first historical
//! reconciliation) and stays authoritative for the rest of the session, so
//! a widget remounting for the same request renders the settled state
//! instead of re-prompting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The terminal choice recorded for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionAction {
    /// The user approved the request in this session.
    Approved,
    /// The user denied the request in this session.
    Denied,
    /// The request was already resolved server-side before this client saw
    /// it; no real-time choice was offered.
    ConfirmedHistorical,
}

impl DecisionAction {
    /// The display label for this action.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Denied => "denied",
            Self::ConfirmedHistorical => "confirmed",
        }
    }

    /// Whether this action was materialized from past server-side state
    /// rather than a fresh user choice.
    #[must_use]
    pub fn is_historical(self) -> bool {
        matches!(self, Self::ConfirmedHistorical)
    }
}

impl fmt::Display for DecisionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The decision recorded for one request id.
///
/// `decided` mirrors the reconciliation guard: a record may only be
/// overwritten while the flag was previously false, which in practice
/// means never — every record this crate writes is already decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Whether a terminal decision has been reached.
    pub decided: bool,
    /// The recorded action.
    pub action: DecisionAction,
    /// Label shown in the decided-status readout.
    pub display_label: String,
    /// When the decision was recorded.
    pub decided_at: DateTime<Utc>,
}

impl DecisionRecord {
    /// Build a decided record for an action, labeled with the action's
    /// display label.
    #[must_use]
    pub fn for_action(action: DecisionAction) -> Self {
        Self {
            decided: true,
            action,
            display_label: action.label().to_string(),
            decided_at: Utc::now(),
        }
    }

    /// Record a user approval.
    #[must_use]
    pub fn approved() -> Self {
        Self::for_action(DecisionAction::Approved)
    }

    /// Record a user denial.
    #[must_use]
    pub fn denied() -> Self {
        Self::for_action(DecisionAction::Denied)
    }

    /// Record a historical confirmation (see the reconciliation rule on
    /// [`crate::sampling::reconcile`]).
    #[must_use]
    pub fn confirmed_historical() -> Self {
        Self::for_action(DecisionAction::ConfirmedHistorical)
    }
}

impl fmt::Display for DecisionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(DecisionAction::Approved.label(), "approved");
        assert_eq!(DecisionAction::Denied.label(), "denied");
        assert_eq!(DecisionAction::ConfirmedHistorical.label(), "confirmed");
    }

    #[test]
    fn test_record_constructors() {
        let approved = DecisionRecord::approved();
        assert!(approved.decided);
        assert_eq!(approved.action, DecisionAction::Approved);
        assert_eq!(approved.display_label, "approved");

        let denied = DecisionRecord::denied();
        assert_eq!(denied.to_string(), "denied");

        let historical = DecisionRecord::confirmed_historical();
        assert!(historical.action.is_historical());
        assert_eq!(historical.display_label, "confirmed");
    }

    #[test]
    fn test_action_serializes_snake_case() {
        let json = serde_json::to_string(&DecisionAction::ConfirmedHistorical).unwrap();
        assert_eq!(json, "\"confirmed_historical\"");
    }
}
