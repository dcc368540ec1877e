mod item;
mod plan;

pub(crate) use item::{BudgetItem, FieldError, ItemDraft};
pub(crate) use plan::{active_plan, BudgetPlan};
