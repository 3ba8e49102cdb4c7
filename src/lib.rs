pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::InMemoryCatalog;
pub use crate::app::{InteractionLoop, SessionSummary};
pub use crate::config::MenuFile;
pub use crate::core::{CartView, CheckoutOutcome, OrderSession, Receipt};
pub use crate::domain::{LineItem, MenuCatalog, MenuItem, Money};
pub use crate::utils::error::{Result, ShopError};
