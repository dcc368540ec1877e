use rust_decimal::Decimal;

/// A line entry drawn against a plan: unit price × quantity.
#[derive(Debug, Clone)]
pub(crate) struct BudgetItem {
    pub(crate) id: Option<i64>,
    pub(crate) plan_id: i64,
    pub(crate) item_code: String,
    pub(crate) description: String,
    pub(crate) category: Option<String>,
    pub(crate) unit_price: Decimal,
    pub(crate) quantity: u32,
}

impl BudgetItem {
    pub(crate) fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// An item as entered in a form, before validation. The allocation policy
/// is never evaluated for a draft that fails `validate`.
#[derive(Debug, Clone, Default)]
pub(crate) struct ItemDraft {
    pub(crate) item_code: String,
    pub(crate) description: String,
    pub(crate) category: Option<String>,
    pub(crate) unit_price: Option<Decimal>,
    pub(crate) quantity: Option<u32>,
}

impl ItemDraft {
    /// Minimum chargeable unit price: one cent.
    const MIN_UNIT_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

    pub(crate) fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        match self.unit_price {
            None => errors.push(FieldError::MissingPrice),
            Some(p) if p < Self::MIN_UNIT_PRICE => errors.push(FieldError::InvalidPrice),
            Some(_) => {}
        }
        match self.quantity {
            None => errors.push(FieldError::MissingQuantity),
            Some(q) if q < 1 => errors.push(FieldError::InvalidQuantity),
            Some(_) => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Promote a validated draft to an item on the given plan.
    pub(crate) fn into_item(self, plan_id: i64) -> Result<BudgetItem, Vec<FieldError>> {
        self.validate()?;
        Ok(BudgetItem {
            id: None,
            plan_id,
            item_code: self.item_code,
            description: self.description,
            category: self.category,
            unit_price: self.unit_price.unwrap_or_default(),
            quantity: self.quantity.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldError {
    MissingPrice,
    InvalidPrice,
    MissingQuantity,
    InvalidQuantity,
    NegativeFunds,
}

impl FieldError {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::MissingPrice => "Unit price is required",
            Self::InvalidPrice => "Unit price must be at least $0.01",
            Self::MissingQuantity => "Quantity is required",
            Self::InvalidQuantity => "Quantity must be at least 1",
            Self::NegativeFunds => "Available funds cannot be negative",
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
