pub mod receipt;
pub mod session;

pub use receipt::{Addition, CartView, CheckoutOutcome, Receipt};
pub use session::{OrderSession, DEFAULT_MAX_QUANTITY};
