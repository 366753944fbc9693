// Trading module
//
// Static trade data and the operation that settles a single trade:
// - Catalog of slots with the sell/buy boundary
// - Price tables validated against the catalog
// - Ledger applying one buy or sell to a player account

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod price_book;

/// Currency amount; wallets never go negative
pub type Money = u32;

pub use catalog::{Catalog, SlotAction};
pub use error::ConfigError;
pub use ledger::{TradeAccount, TradeLedger, TradeOutcome};
pub use price_book::PriceBook;
