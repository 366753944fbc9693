use super::error::ConfigError;

/// Which action a catalog slot performs when confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAction {
    Sell,
    Buy,
}

impl SlotAction {
    /// Text shown next to the selected row
    pub fn label(&self) -> &'static str {
        match self {
            SlotAction::Sell => "sell",
            SlotAction::Buy => "buy",
        }
    }
}

/// The fixed, ordered list of tradeable slots
///
/// Slots `0..=sell_boundary` sell from the player's inventory; every slot
/// after the boundary buys into it. The same item id may appear on both
/// sides (or twice on one side); each position is its own slot.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<String>,
    sell_boundary: usize,
}

impl Catalog {
    /// Creates a catalog, rejecting an empty list or an out-of-range boundary
    pub fn new(items: Vec<String>, sell_boundary: usize) -> Result<Self, ConfigError> {
        if items.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if sell_boundary >= items.len() {
            return Err(ConfigError::SellBoundaryOutOfRange {
                boundary: sell_boundary,
                len: items.len(),
            });
        }

        Ok(Catalog {
            items,
            sell_boundary,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Item id at a slot, if the index is in range
    pub fn item(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Iterates over item ids in slot order
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Resolves the action for a slot using the sell boundary
    pub fn action_at(&self, index: usize) -> SlotAction {
        if index <= self.sell_boundary {
            SlotAction::Sell
        } else {
            SlotAction::Buy
        }
    }
}
