use rust_decimal::Decimal;

use super::AllocationSnapshot;
use crate::money::format_amount;

/// What the caller must do with a submission attempt. Terminal for the
/// attempt; the next submission evaluates from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Over-allocated. Hard stop — there is no proceed-anyway path.
    Blocked,
    /// Under-allocated. Creation needs an explicit user go-ahead.
    Confirm,
    /// Exact match. No dialog; creation goes straight through.
    Proceed,
}

/// The user's answer to a `Confirm` outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmChoice {
    Proceed,
    Adjust,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Decision {
    pub(crate) outcome: Outcome,
    pub(crate) delta: Decimal,
    /// User-facing text. Empty for `Proceed` (nothing to show).
    pub(crate) message: String,
}

impl Decision {
    /// Whether item creation may go ahead. `Blocked` is never approved;
    /// `Confirm` only by an explicit `ConfirmChoice::Proceed` — dismissal
    /// (`None`) and `Adjust` both abandon the creation.
    pub(crate) fn approved(&self, choice: Option<ConfirmChoice>) -> bool {
        match self.outcome {
            Outcome::Blocked => false,
            Outcome::Proceed => true,
            Outcome::Confirm => matches!(choice, Some(ConfirmChoice::Proceed)),
        }
    }
}

/// Turn a snapshot's delta into the decision for this submission attempt.
/// Never fails, never has side effects; rendering the message and acting
/// on the outcome belong to the caller.
pub(crate) fn evaluate(snapshot: &AllocationSnapshot) -> Decision {
    let delta = snapshot.delta;
    let (outcome, message) = if delta > Decimal::ZERO {
        (
            Outcome::Blocked,
            format!(
                "Adding this item would exceed the available budget by {}.",
                format_amount(delta.abs())
            ),
        )
    } else if delta < Decimal::ZERO {
        (
            Outcome::Confirm,
            format!(
                "Adding this item would leave {} unallocated in the budget. \
                 Do you want to proceed?",
                format_amount(delta.abs())
            ),
        )
    } else {
        (Outcome::Proceed, String::new())
    };

    Decision {
        outcome,
        delta,
        message,
    }
}
