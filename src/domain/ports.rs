use crate::domain::model::MenuItem;
use crate::utils::error::{Result, ShopError};

/// Read-only source of the items a customer can order.
///
/// Items are addressed by their 1-based position in `list()`, which must stay
/// stable for the lifetime of a session.
pub trait MenuCatalog {
    fn list(&self) -> &[MenuItem];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Resolves a 1-based selection.
    fn get(&self, selection: i64) -> Result<&MenuItem> {
        let items = self.list();
        usize::try_from(selection)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| items.get(idx))
            .ok_or(ShopError::InvalidSelection {
                selection,
                catalog_len: items.len(),
            })
    }
}
