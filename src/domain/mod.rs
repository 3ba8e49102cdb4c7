// Domain layer: money, menu/cart models and the catalog port. No I/O here.

pub mod model;
pub mod money;
pub mod ports;

pub use model::{LineItem, MenuItem};
pub use money::Money;
pub use ports::MenuCatalog;
