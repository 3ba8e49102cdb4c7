use brew_cart::{
    CartView, CheckoutOutcome, InMemoryCatalog, LineItem, MenuCatalog, MenuItem, Money,
    OrderSession, ShopError,
};

fn cents(c: i64) -> Money {
    Money::from_cents(c)
}

fn summed(lines: &[LineItem]) -> Money {
    Money::checked_sum(
        lines
            .iter()
            .map(|l| l.unit_price().checked_mul(l.quantity()).unwrap()),
    )
    .unwrap()
}

#[test]
fn test_latte_and_cappuccino_checkout() {
    let catalog = InMemoryCatalog::default();
    let mut session = OrderSession::new(&catalog);

    session.add_to_cart(1, 2).unwrap();
    session.add_to_cart(3, 1).unwrap();

    let view = session.view_cart();
    let lines: Vec<(&str, u32, Money)> = view
        .lines()
        .iter()
        .map(|l| (l.name(), l.quantity(), l.line_total()))
        .collect();
    assert_eq!(lines, [("Latte", 2, cents(700)), ("Cappuccino", 1, cents(400))]);
    assert_eq!(view.total(), cents(1100));
    assert_eq!(
        view.to_string(),
        "Your Cart:\n1. Latte x 2 = $7.00\n2. Cappuccino x 1 = $4.00\nTotal: $11.00"
    );

    let outcome = session.checkout("Alice");
    let receipt = outcome.receipt().expect("cart was not empty");
    assert_eq!(receipt.grand_total, cents(1100));
    assert_eq!(receipt.customer, "Alice");
    assert_eq!(
        outcome.to_string(),
        "Checkout for Alice:\n\
         Latte for Alice (2 x $3.50 = $7.00)\n\
         Cappuccino for Alice (1 x $4.00 = $4.00)\n\
         Total: $11.00\n\
         Thank you, Alice! Your order will be ready soon."
    );

    assert!(session.is_empty());
    assert!(session.view_cart().is_empty());
    assert_eq!(session.view_cart(), CartView::Empty);
}

#[test]
fn test_checkout_on_empty_cart() {
    let catalog = InMemoryCatalog::default();
    let mut session = OrderSession::new(&catalog);

    let outcome = session.checkout("Bob");
    assert_eq!(outcome, CheckoutOutcome::NothingToCheckout);
    assert_eq!(outcome.to_string(), "Cart is empty. Nothing to checkout.");
    assert!(session.is_empty());
}

#[test]
fn test_out_of_range_selection() {
    let catalog = InMemoryCatalog::default();
    let mut session = OrderSession::new(&catalog);

    let err = session.add_to_cart(5, 1).unwrap_err();
    assert!(matches!(
        err,
        ShopError::InvalidSelection {
            selection: 5,
            catalog_len: 3
        }
    ));
    assert_eq!(session.len(), 0);

    session.add_to_cart(2, 1).unwrap();
    for selection in [0, -7, 4, 100] {
        assert!(session.add_to_cart(selection, 1).is_err());
        assert_eq!(session.len(), 1);
    }
}

#[test]
fn test_cart_total_matches_line_sum() {
    let catalog = InMemoryCatalog::new(vec![
        MenuItem::new("Dime Drip", cents(10)),
        MenuItem::new("Cortado", cents(333)),
        MenuItem::new("Free Water", Money::ZERO),
    ]);
    let mut session = OrderSession::new(&catalog);

    let orders = [(1, 7), (2, 3), (3, 5), (1, 999), (2, 1)];
    for (i, (selection, quantity)) in orders.iter().enumerate() {
        session.add_to_cart(*selection, *quantity).unwrap();
        let view = session.view_cart();
        assert_eq!(view.lines().len(), i + 1);
        assert_eq!(view.total(), summed(view.lines()));
    }
    assert_eq!(session.view_cart().total(), cents(70 + 999 + 9990 + 333));
}

#[test]
fn test_view_cart_is_side_effect_free() {
    let catalog = InMemoryCatalog::default();
    let mut session = OrderSession::new(&catalog);

    assert_eq!(session.view_cart(), session.view_cart());

    session.add_to_cart(2, 4).unwrap();
    let first = session.view_cart();
    assert!(!first.is_empty());
    let second = session.view_cart();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(session.len(), 1);
}

#[test]
fn test_checkout_reports_pre_checkout_total() {
    let catalog = InMemoryCatalog::default();
    let mut session = OrderSession::new(&catalog);

    session.add_to_cart(2, 2).unwrap();
    session.add_to_cart(1, 1).unwrap();
    session.add_to_cart(2, 1).unwrap();
    let before = session.view_cart().total();

    let outcome = session.checkout("Carol");
    assert_eq!(outcome.receipt().unwrap().grand_total, before);
    assert_eq!(outcome.receipt().unwrap().item_count(), 4);
    assert!(session.is_empty());

    // A second checkout has nothing left to do.
    assert_eq!(session.checkout("Carol"), CheckoutOutcome::NothingToCheckout);
}

#[test]
fn test_sessions_share_a_catalog_independently() {
    let catalog = InMemoryCatalog::default();
    let mut first = OrderSession::new(&catalog);
    let mut second = OrderSession::new(&catalog);

    first.add_to_cart(1, 1).unwrap();
    assert_eq!(first.len(), 1);
    assert!(second.is_empty());

    second.add_to_cart(3, 2).unwrap();
    first.checkout("Dee");
    assert!(first.is_empty());
    assert_eq!(second.view_cart().total(), cents(800));
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_quantity_policy() {
    let catalog = InMemoryCatalog::default();
    let mut session = OrderSession::with_max_quantity(&catalog, 5);

    assert!(matches!(
        session.add_to_cart(1, 0),
        Err(ShopError::InvalidQuantity { quantity: 0, max: 5 })
    ));
    assert!(matches!(
        session.add_to_cart(1, -3),
        Err(ShopError::InvalidQuantity { quantity: -3, .. })
    ));
    assert!(matches!(
        session.add_to_cart(1, 6),
        Err(ShopError::InvalidQuantity { quantity: 6, .. })
    ));
    assert!(session.is_empty());
}
