//! Order state in the review lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Review state of a reservation order.
///
/// Every newly submitted or re-submitted order starts in `NoAudit`
/// (pending review). An administrator then moves it to `Wait` (approved,
/// awaiting execution), `Finish` (completed) or `Reject` (denied). The
/// transitions are independent and caller-selected; an edit through
/// `update_order` resets any order back to `NoAudit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    /// Initial/pending-review state.
    NoAudit,
    /// Administratively approved, awaiting execution.
    Wait,
    /// Completed order.
    Finish,
    /// Administratively denied order.
    Reject,
}

impl OrderState {
    /// True if the order has not been reviewed yet.
    #[must_use]
    pub const fn is_pending_review(&self) -> bool {
        matches!(self, Self::NoAudit)
    }

    /// True if the order passed review (approved or completed).
    #[must_use]
    pub const fn has_passed_review(&self) -> bool {
        matches!(self, Self::Wait | Self::Finish)
    }

    /// All states, in lifecycle order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::NoAudit, Self::Wait, Self::Finish, Self::Reject]
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAudit => write!(f, "NO_AUDIT"),
            Self::Wait => write!(f, "WAIT"),
            Self::Finish => write!(f, "FINISH"),
            Self::Reject => write!(f, "REJECT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_state_is_pending_review() {
        assert!(OrderState::NoAudit.is_pending_review());
        assert!(!OrderState::Wait.is_pending_review());
        assert!(!OrderState::Finish.is_pending_review());
        assert!(!OrderState::Reject.is_pending_review());
    }

    #[test]
    fn order_state_has_passed_review() {
        assert!(OrderState::Wait.has_passed_review());
        assert!(OrderState::Finish.has_passed_review());
        assert!(!OrderState::NoAudit.has_passed_review());
        assert!(!OrderState::Reject.has_passed_review());
    }

    #[test]
    fn order_state_display() {
        assert_eq!(format!("{}", OrderState::NoAudit), "NO_AUDIT");
        assert_eq!(format!("{}", OrderState::Wait), "WAIT");
        assert_eq!(format!("{}", OrderState::Finish), "FINISH");
        assert_eq!(format!("{}", OrderState::Reject), "REJECT");
    }

    #[test]
    fn order_state_serde() {
        let json = serde_json::to_string(&OrderState::NoAudit).unwrap();
        assert_eq!(json, "\"NO_AUDIT\"");

        let parsed: OrderState = serde_json::from_str("\"REJECT\"").unwrap();
        assert_eq!(parsed, OrderState::Reject);
    }

    #[test]
    fn order_state_all_contains_each_variant() {
        let all = OrderState::all();
        assert_eq!(all.len(), 4);
        assert!(all.contains(&OrderState::NoAudit));
        assert!(all.contains(&OrderState::Reject));
    }
}
