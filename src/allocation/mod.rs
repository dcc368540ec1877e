mod policy;

pub(crate) use policy::{evaluate, ConfirmChoice, Decision, Outcome};

use rust_decimal::Decimal;

use crate::models::BudgetItem;

/// Sum of line totals over a plan's current items.
pub(crate) fn total_allocated(items: &[BudgetItem]) -> Decimal {
    items.iter().map(BudgetItem::line_total).sum()
}

/// The funding picture at a single decision point. Built fresh for every
/// evaluation and discarded after; never cached across item-list changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AllocationSnapshot {
    pub(crate) total_allocated: Decimal,
    pub(crate) available_funds: Decimal,
    /// Positive: over budget. Negative: funds left unallocated.
    pub(crate) delta: Decimal,
}

impl AllocationSnapshot {
    fn new(total_allocated: Decimal, available_funds: Decimal) -> Self {
        Self {
            total_allocated,
            available_funds,
            delta: total_allocated - available_funds,
        }
    }

    /// Snapshot of a plan's items as they stand, no candidate.
    pub(crate) fn for_items(items: &[BudgetItem], available_funds: Decimal) -> Self {
        Self::new(total_allocated(items), available_funds)
    }

    /// Snapshot with a candidate item added on top of the existing
    /// allocation. Inputs are assumed form-validated (price ≥ 0.01,
    /// quantity ≥ 1, funds ≥ 0); pure decimal arithmetic, no rounding.
    pub(crate) fn with_candidate(
        existing_total: Decimal,
        unit_price: Decimal,
        quantity: u32,
        available_funds: Decimal,
    ) -> Self {
        let new_item_total = unit_price * Decimal::from(quantity);
        Self::new(existing_total + new_item_total, available_funds)
    }
}
