use super::Money;
use super::catalog::{Catalog, SlotAction};
use super::error::ConfigError;
use super::price_book::PriceBook;
use log::{debug, info};

/// The player-side account a trade settles against
///
/// Wallet and inventory storage belong to the player; the ledger only reads
/// the current balance and counts and asks for changes through this trait.
pub trait TradeAccount {
    /// How many of `item_id` the account holds
    fn item_count(&self, item_id: &str) -> u32;

    /// Current wallet balance
    fn balance(&self) -> Money;

    /// Changes the held count of `item_id` by `delta`
    fn increment_inventory(&mut self, item_id: &str, delta: i32);

    fn credit(&mut self, amount: Money);

    fn debit(&mut self, amount: Money);
}

/// Result of a single confirm press
///
/// Refusals are routine. They are reported so callers can log or cue
/// them, never as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeOutcome {
    Sold { item_id: String, price: Money },
    Bought { item_id: String, price: Money },
    /// Sell refused: the player holds none of the item
    NothingToSell,
    /// Buy refused: the wallet is short of the purchase price
    CannotAfford,
    /// Sell refused: the sale price would overflow the wallet
    WalletFull,
    /// Buy refused: the held count of the item is at its maximum
    InventoryFull,
}

/// A catalog slot with the price its action trades at
#[derive(Debug, Clone)]
struct PricedSlot {
    item_id: String,
    action: SlotAction,
    price: Money,
}

/// Settles buys and sells against a `TradeAccount`
///
/// Prices are resolved per slot when the ledger is built, so a trade can
/// never hit a missing price. Every check happens before any mutation, so
/// an account sees both the inventory and the wallet change, or neither.
#[derive(Debug, Clone)]
pub struct TradeLedger {
    slots: Vec<PricedSlot>,
}

impl TradeLedger {
    /// Builds a ledger for `catalog`
    ///
    /// Fails if any catalog item lacks a sale or purchase price.
    pub fn new(catalog: &Catalog, prices: &PriceBook) -> Result<Self, ConfigError> {
        prices.validate(catalog)?;

        let slots = catalog
            .items()
            .enumerate()
            .map(|(index, item_id)| -> Result<PricedSlot, ConfigError> {
                let action = catalog.action_at(index);
                let price = match action {
                    SlotAction::Sell => prices
                        .sale_price(item_id)
                        .ok_or_else(|| ConfigError::MissingSalePrice(item_id.to_string()))?,
                    SlotAction::Buy => prices
                        .purchase_price(item_id)
                        .ok_or_else(|| ConfigError::MissingPurchasePrice(item_id.to_string()))?,
                };
                Ok(PricedSlot {
                    item_id: item_id.to_string(),
                    action,
                    price,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TradeLedger { slots })
    }

    /// Performs whichever action the slot at `index` is bound to
    ///
    /// Returns `None` if `index` is outside the catalog.
    pub fn trade_slot(&self, index: usize, account: &mut impl TradeAccount) -> Option<TradeOutcome> {
        let slot = self.slots.get(index)?;

        let outcome = match slot.action {
            SlotAction::Sell => Self::sell(&slot.item_id, slot.price, account),
            SlotAction::Buy => Self::buy(&slot.item_id, slot.price, account),
        };
        Some(outcome)
    }

    /// Sells one `item_id` from the account to the trader
    fn sell(item_id: &str, price: Money, account: &mut impl TradeAccount) -> TradeOutcome {
        if account.item_count(item_id) == 0 {
            debug!("Nothing to sell: no '{}' in inventory", item_id);
            return TradeOutcome::NothingToSell;
        }

        if account.balance().checked_add(price).is_none() {
            debug!("Cannot sell {}: wallet cannot hold {} more", item_id, price);
            return TradeOutcome::WalletFull;
        }

        account.increment_inventory(item_id, -1);
        account.credit(price);
        info!("Sold 1 {} for {}", item_id, price);

        TradeOutcome::Sold {
            item_id: item_id.to_string(),
            price,
        }
    }

    /// Buys one `item_id` from the trader into the account
    fn buy(item_id: &str, price: Money, account: &mut impl TradeAccount) -> TradeOutcome {
        if account.balance() < price {
            debug!(
                "Cannot afford {} (price {}, balance {})",
                item_id,
                price,
                account.balance()
            );
            return TradeOutcome::CannotAfford;
        }

        if account.item_count(item_id).checked_add(1).is_none() {
            debug!("Cannot buy {}: inventory holds the maximum", item_id);
            return TradeOutcome::InventoryFull;
        }

        account.increment_inventory(item_id, 1);
        account.debit(price);
        info!("Bought 1 {} for {}", item_id, price);

        TradeOutcome::Bought {
            item_id: item_id.to_string(),
            price,
        }
    }
}
