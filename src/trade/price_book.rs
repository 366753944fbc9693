use super::Money;
use super::catalog::Catalog;
use super::error::ConfigError;
use std::collections::HashMap;

/// Static sale and purchase prices, keyed by item id
///
/// Sale prices are what the trader pays the player; purchase prices are
/// what the player pays the trader. The two tables are independent.
#[derive(Debug, Clone, Default)]
pub struct PriceBook {
    sale_prices: HashMap<String, Money>,
    purchase_prices: HashMap<String, Money>,
}

impl PriceBook {
    pub fn new(
        sale_prices: HashMap<String, Money>,
        purchase_prices: HashMap<String, Money>,
    ) -> Self {
        PriceBook {
            sale_prices,
            purchase_prices,
        }
    }

    /// Checks that every catalog item has both a sale and a purchase price
    pub fn validate(&self, catalog: &Catalog) -> Result<(), ConfigError> {
        for item in catalog.items() {
            if !self.sale_prices.contains_key(item) {
                return Err(ConfigError::MissingSalePrice(item.to_string()));
            }
            if !self.purchase_prices.contains_key(item) {
                return Err(ConfigError::MissingPurchasePrice(item.to_string()));
            }
        }
        Ok(())
    }

    /// Amount credited to the player for selling one `item_id`
    pub fn sale_price(&self, item_id: &str) -> Option<Money> {
        self.sale_prices.get(item_id).copied()
    }

    /// Amount debited from the player for buying one `item_id`
    pub fn purchase_price(&self, item_id: &str) -> Option<Money> {
        self.purchase_prices.get(item_id).copied()
    }
}
