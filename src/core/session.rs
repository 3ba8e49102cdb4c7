use crate::core::receipt::{Addition, CartView, CheckoutOutcome, Receipt};
use crate::domain::{LineItem, MenuCatalog, Money};
use crate::utils::error::{Result, ShopError};
use crate::utils::validation::validate_quantity;
use chrono::Local;

/// Largest quantity accepted for a single line unless configured otherwise.
pub const DEFAULT_MAX_QUANTITY: u32 = 999;

/// One customer's cart against a shared, read-only catalog.
///
/// Every operation is atomic: on error the cart is left exactly as it was.
pub struct OrderSession<'a, C: MenuCatalog + ?Sized> {
    catalog: &'a C,
    cart: Vec<LineItem>,
    total: Money,
    max_quantity: u32,
}

impl<'a, C: MenuCatalog + ?Sized> OrderSession<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self::with_max_quantity(catalog, DEFAULT_MAX_QUANTITY)
    }

    pub fn with_max_quantity(catalog: &'a C, max_quantity: u32) -> Self {
        Self {
            catalog,
            cart: Vec::new(),
            total: Money::ZERO,
            max_quantity,
        }
    }

    pub fn catalog(&self) -> &'a C {
        self.catalog
    }

    pub fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    pub fn len(&self) -> usize {
        self.cart.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Appends `quantity` of the item at 1-based `selection`.
    pub fn add_to_cart(&mut self, selection: i64, quantity: i64) -> Result<Addition> {
        let item = self.catalog.get(selection)?;
        let quantity = validate_quantity(quantity, self.max_quantity)?;
        let line = LineItem::new(item.clone(), quantity)?;
        let total = self
            .total
            .checked_add(line.line_total())
            .ok_or_else(|| ShopError::AmountOverflow {
                context: "cart total".to_string(),
            })?;

        tracing::debug!(
            item = line.name(),
            quantity,
            line_total = %line.line_total(),
            cart_total = %total,
            "Added line to cart"
        );

        let addition = Addition {
            name: line.name().to_string(),
            quantity,
            line_total: line.line_total(),
        };
        self.cart.push(line);
        self.total = total;
        Ok(addition)
    }

    pub fn view_cart(&self) -> CartView {
        if self.cart.is_empty() {
            return CartView::Empty;
        }
        CartView::Items {
            lines: self.cart.clone(),
            total: self.total,
        }
    }

    /// Finalizes the cart into a receipt for `customer_name` and empties it.
    pub fn checkout(&mut self, customer_name: &str) -> CheckoutOutcome {
        if self.cart.is_empty() {
            tracing::debug!(customer = customer_name, "Checkout requested on empty cart");
            return CheckoutOutcome::NothingToCheckout;
        }

        let lines = std::mem::take(&mut self.cart);
        let grand_total = std::mem::replace(&mut self.total, Money::ZERO);
        let receipt = Receipt {
            customer: customer_name.to_string(),
            lines,
            grand_total,
            issued_at: Local::now(),
        };

        tracing::info!(
            customer = customer_name,
            lines = receipt.lines.len(),
            items = receipt.item_count(),
            grand_total = %receipt.grand_total,
            issued_at = %receipt.issued_at.format("%Y-%m-%d %H:%M:%S"),
            "Order checked out"
        );

        CheckoutOutcome::Completed(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryCatalog;
    use crate::domain::MenuItem;

    fn cents(c: i64) -> Money {
        Money::from_cents(c)
    }

    #[test]
    fn test_add_then_view() {
        let catalog = InMemoryCatalog::default();
        let mut session = OrderSession::new(&catalog);

        let added = session.add_to_cart(1, 2).unwrap();
        assert_eq!(added.to_string(), "Added 2 x Latte to cart.");
        assert_eq!(added.line_total, cents(700));

        let view = session.view_cart();
        assert_eq!(view.lines().len(), 1);
        assert_eq!(view.total(), cents(700));
    }

    #[test]
    fn test_rejected_quantity_leaves_cart_alone() {
        let catalog = InMemoryCatalog::default();
        let mut session = OrderSession::with_max_quantity(&catalog, 10);
        assert_eq!(session.max_quantity(), 10);
        assert_eq!(OrderSession::new(&catalog).max_quantity(), DEFAULT_MAX_QUANTITY);

        for quantity in [0, -1, 11] {
            assert!(matches!(
                session.add_to_cart(1, quantity),
                Err(ShopError::InvalidQuantity { max: 10, .. })
            ));
        }
        assert!(session.is_empty());
        assert!(session.add_to_cart(1, 10).is_ok());
    }

    #[test]
    fn test_selection_is_checked_before_quantity() {
        let catalog = InMemoryCatalog::default();
        let mut session = OrderSession::new(&catalog);
        assert!(matches!(
            session.add_to_cart(9, 0),
            Err(ShopError::InvalidSelection { selection: 9, .. })
        ));
    }

    #[test]
    fn test_cart_total_overflow_is_atomic() {
        let catalog = InMemoryCatalog::new(vec![MenuItem::new("Vault", cents(i64::MAX / 4))]);
        let mut session = OrderSession::new(&catalog);

        session.add_to_cart(1, 2).unwrap();
        session.add_to_cart(1, 1).unwrap();
        assert!(matches!(
            session.add_to_cart(1, 2),
            Err(ShopError::AmountOverflow { .. })
        ));
        assert_eq!(session.len(), 2);
        assert_eq!(session.view_cart().total(), cents((i64::MAX / 4) * 3));
    }

    #[test]
    fn test_checkout_resets_running_total() {
        let catalog = InMemoryCatalog::default();
        let mut session = OrderSession::new(&catalog);

        session.add_to_cart(2, 3).unwrap();
        let outcome = session.checkout("Dana");
        assert_eq!(outcome.receipt().unwrap().grand_total, cents(600));

        session.add_to_cart(2, 1).unwrap();
        assert_eq!(session.view_cart().total(), cents(200));
    }
}
