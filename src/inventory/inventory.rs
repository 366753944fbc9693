use std::collections::HashMap;

/// Item counts keyed by item id
///
/// Trade goods don't occupy slots or stack limits; the trader only ever
/// asks "how many do you have" and moves them one at a time.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    counts: HashMap<String, u32>,
}

impl Inventory {
    /// Counts how many of a specific item are held (0 if never seen)
    pub fn count(&self, item_id: &str) -> u32 {
        self.counts.get(item_id).copied().unwrap_or(0)
    }

    /// Adds `delta` (possibly negative) to an item's count
    ///
    /// Removing more than is held leaves the count at 0.
    pub fn adjust(&mut self, item_id: &str, delta: i32) {
        let count = self.counts.entry(item_id.to_string()).or_insert(0);
        *count = count.saturating_add_signed(delta);
    }
}

impl From<HashMap<String, u32>> for Inventory {
    fn from(counts: HashMap<String, u32>) -> Self {
        Inventory { counts }
    }
}
