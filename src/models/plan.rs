use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A funding plan: a ceiling of available funds with a validity period.
/// The backend guarantees at most one active plan per client; this crate
/// consumes that invariant as given.
#[derive(Debug, Clone)]
pub(crate) struct BudgetPlan {
    pub(crate) id: Option<i64>,
    pub(crate) client_id: i64,
    /// Plan serial/code, e.g. "NDIS-2026-0412".
    pub(crate) serial: String,
    pub(crate) available_funds: Decimal,
    pub(crate) active: bool,
    pub(crate) end_date: Option<NaiveDate>,
}

impl BudgetPlan {
    pub(crate) fn new(client_id: i64, serial: String, available_funds: Decimal) -> Self {
        Self {
            id: None,
            client_id,
            serial,
            available_funds,
            active: true,
            end_date: None,
        }
    }

    pub(crate) fn is_expired(&self, today: NaiveDate) -> bool {
        self.end_date.is_some_and(|end| end < today)
    }

    /// Days until the plan ends, negative once past. None for open-ended plans.
    pub(crate) fn days_remaining(&self, today: NaiveDate) -> Option<i64> {
        self.end_date.map(|end| (end - today).num_days())
    }
}

/// The plan funding decisions are evaluated against. First active wins;
/// the backend never hands us more than one.
pub(crate) fn active_plan(plans: &[BudgetPlan]) -> Option<&BudgetPlan> {
    plans.iter().find(|p| p.active)
}
