use regex::Regex;
use rust_decimal::Decimal;

/// One orderable line in a provider's item catalog.
#[derive(Debug, Clone)]
pub(crate) struct CatalogEntry {
    pub(crate) item_code: String,
    pub(crate) description: String,
    pub(crate) category: Option<String>,
    pub(crate) unit_price: Decimal,
}

/// A searchable item catalog. All matching is case-insensitive.
pub(crate) struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub(crate) fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub(crate) fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Exact item-code lookup.
    pub(crate) fn get(&self, code: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.item_code.eq_ignore_ascii_case(code))
    }

    /// Substring search over item code and description.
    pub(crate) fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let q = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.item_code.to_lowercase().contains(&q)
                    || e.description.to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Regex search over item code and description. An invalid pattern is
    /// the caller's error to report, not a panic.
    pub(crate) fn search_regex(&self, pattern: &str) -> Result<Vec<&CatalogEntry>, regex::Error> {
        let re = Regex::new(&format!("(?i){pattern}"))?;
        Ok(self
            .entries
            .iter()
            .filter(|e| re.is_match(&e.item_code) || re.is_match(&e.description))
            .collect())
    }

    pub(crate) fn in_category(&self, name: &str) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| {
                e.category
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(name))
            })
            .collect()
    }
}
