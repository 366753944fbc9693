// Inventory module
//
// Item counts held by the player, keyed by item id.

pub mod inventory;

pub use inventory::Inventory;
