//! Values returned by [`OrderSession`](crate::core::session::OrderSession).
//!
//! Each one renders itself through `Display`; the session never prints.

use crate::domain::{LineItem, Money};
use chrono::{DateTime, Local};
use std::fmt;

/// Outcome of a successful add-to-cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addition {
    pub name: String,
    pub quantity: u32,
    pub line_total: Money,
}

impl fmt::Display for Addition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Added {} x {} to cart.", self.quantity, self.name)
    }
}

/// Snapshot of the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartView {
    Empty,
    Items { lines: Vec<LineItem>, total: Money },
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        matches!(self, CartView::Empty)
    }

    pub fn total(&self) -> Money {
        match self {
            CartView::Empty => Money::ZERO,
            CartView::Items { total, .. } => *total,
        }
    }

    pub fn lines(&self) -> &[LineItem] {
        match self {
            CartView::Empty => &[],
            CartView::Items { lines, .. } => lines,
        }
    }
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartView::Empty => write!(f, "Your cart is empty."),
            CartView::Items { lines, total } => {
                writeln!(f, "Your Cart:")?;
                for (i, line) in lines.iter().enumerate() {
                    writeln!(
                        f,
                        "{}. {} x {} = {}",
                        i + 1,
                        line.name(),
                        line.quantity(),
                        line.line_total()
                    )?;
                }
                write!(f, "Total: {}", total)
            }
        }
    }
}

/// A finalized order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub customer: String,
    pub lines: Vec<LineItem>,
    pub grand_total: Money,
    pub issued_at: DateTime<Local>,
}

impl Receipt {
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity())).sum()
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Checkout for {}:", self.customer)?;
        for line in &self.lines {
            writeln!(
                f,
                "{} for {} ({} x {} = {})",
                line.name(),
                self.customer,
                line.quantity(),
                line.unit_price(),
                line.line_total()
            )?;
        }
        writeln!(f, "Total: {}", self.grand_total)?;
        write!(
            f,
            "Thank you, {}! Your order will be ready soon.",
            self.customer
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    NothingToCheckout,
    Completed(Receipt),
}

impl CheckoutOutcome {
    pub fn receipt(&self) -> Option<&Receipt> {
        match self {
            CheckoutOutcome::NothingToCheckout => None,
            CheckoutOutcome::Completed(receipt) => Some(receipt),
        }
    }
}

impl fmt::Display for CheckoutOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutOutcome::NothingToCheckout => write!(f, "Cart is empty. Nothing to checkout."),
            CheckoutOutcome::Completed(receipt) => fmt::Display::fmt(receipt, f),
        }
    }
}
