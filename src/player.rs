use crate::inventory::Inventory;
use crate::trade::{Money, TradeAccount};

/// The player's money
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wallet {
    balance: Money,
}

impl Wallet {
    pub fn new(balance: Money) -> Self {
        Wallet { balance }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn credit(&mut self, amount: Money) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Removes `amount`, bottoming out at zero
    pub fn debit(&mut self, amount: Money) {
        self.balance = self.balance.saturating_sub(amount);
    }
}

/// Player state the trader reads and mutates
///
/// Besides wallet and inventory this carries the "trade menu open" flag;
/// the menu toggles it on close, and the game loop reads it to decide
/// whether the menu updates and draws.
#[derive(Debug, Clone, Default)]
pub struct Player {
    pub wallet: Wallet,
    pub inventory: Inventory,
    pub trade_menu_open: bool,
}

impl Player {
    pub fn new(wallet: Wallet, inventory: Inventory) -> Self {
        Player {
            wallet,
            inventory,
            trade_menu_open: false,
        }
    }

    pub fn toggle_trade_menu(&mut self) {
        self.trade_menu_open = !self.trade_menu_open;
    }
}

impl TradeAccount for Player {
    fn item_count(&self, item_id: &str) -> u32 {
        self.inventory.count(item_id)
    }

    fn balance(&self) -> Money {
        self.wallet.balance()
    }

    fn increment_inventory(&mut self, item_id: &str, delta: i32) {
        self.inventory.adjust(item_id, delta);
    }

    fn credit(&mut self, amount: Money) {
        self.wallet.credit(amount);
    }

    fn debit(&mut self, amount: Money) {
        self.wallet.debit(amount);
    }
}
