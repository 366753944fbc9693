//! Trader configuration
//!
//! The trader's catalog, prices, layout constants and the player's starting
//! wallet are data, loaded from JSON at startup. A per-user file in the
//! platform config directory takes precedence over the bundled one; with
//! neither present the built-in defaults are used.

use crate::gui::LayoutMetrics;
use crate::inventory::Inventory;
use crate::player::{Player, Wallet};
use crate::trade::{Catalog, ConfigError, Money, PriceBook};
use log::{info, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Bundled config, relative to the working directory
pub const BUNDLED_CONFIG_PATH: &str = "assets/config/trader.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TraderConfig {
    /// Item id for each slot, top to bottom
    pub catalog: Vec<String>,

    /// Last slot that sells; every later slot buys
    pub sell_boundary: usize,

    /// What the trader pays per item
    pub sale_prices: HashMap<String, Money>,

    /// What the trader charges per item
    pub purchase_prices: HashMap<String, Money>,

    pub layout: LayoutMetrics,

    /// Bitmap font scale for menu text
    pub font_scale: u32,

    /// Cooldown between repeated menu actions while a key is held
    pub debounce_ms: u64,

    pub starting_money: Money,

    pub starting_inventory: HashMap<String, u32>,
}

fn owned_map(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

impl Default for TraderConfig {
    fn default() -> Self {
        TraderConfig {
            catalog: ["wood", "apple", "corn", "tomato", "corn", "tomato"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            sell_boundary: 3,
            sale_prices: owned_map(&[("wood", 4), ("apple", 2), ("corn", 10), ("tomato", 20)]),
            purchase_prices: owned_map(&[("wood", 8), ("apple", 6), ("corn", 4), ("tomato", 5)]),
            layout: LayoutMetrics::default(),
            font_scale: 3,
            debounce_ms: 200,
            starting_money: 200,
            starting_inventory: owned_map(&[("wood", 20), ("apple", 20), ("corn", 20), ("tomato", 20)]),
        }
    }
}

impl TraderConfig {
    /// Loads a config file; missing fields take their default values
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the first candidate file that exists, or the defaults
    ///
    /// A file that exists but fails to load is an error, not a reason to
    /// fall through to the next candidate.
    pub fn load_first(candidates: impl IntoIterator<Item = PathBuf>) -> Result<Self, ConfigError> {
        for path in candidates {
            if path.is_file() {
                info!("Loading trader config from {}", path.display());
                return Self::load_from_file(&path);
            }
        }

        warn!("No trader config found, using built-in defaults");
        Ok(Self::default())
    }

    /// Loads the user's config if present, else the bundled one
    pub fn load() -> Result<Self, ConfigError> {
        let user = user_config_path();
        Self::load_first(user.into_iter().chain([PathBuf::from(BUNDLED_CONFIG_PATH)]))
    }

    /// Validates the catalog and prices and builds the trade tables
    pub fn build(&self) -> Result<(Catalog, PriceBook), ConfigError> {
        let catalog = Catalog::new(self.catalog.clone(), self.sell_boundary)?;
        let prices = PriceBook::new(self.sale_prices.clone(), self.purchase_prices.clone());
        prices.validate(&catalog)?;
        Ok((catalog, prices))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// A player holding the configured starting money and goods
    pub fn starting_player(&self) -> Player {
        Player::new(
            Wallet::new(self.starting_money),
            Inventory::from(self.starting_inventory.clone()),
        )
    }
}

/// `<config dir>/trading_post/trader.json`, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("trading_post").join("trader.json"))
}
