use crate::domain::{MenuCatalog, MenuItem, Money};

/// Catalog held entirely in memory, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryCatalog {
    items: Vec<MenuItem>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new(vec![
            MenuItem::new("Latte", Money::from_cents(350)),
            MenuItem::new("Espresso", Money::from_cents(200)),
            MenuItem::new("Cappuccino", Money::from_cents(400)),
        ])
    }
}

impl MenuCatalog for InMemoryCatalog {
    fn list(&self) -> &[MenuItem] {
        &self.items
    }
}
