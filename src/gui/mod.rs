//! Screen-Space GUI System
//!
//! UI elements that render at fixed screen positions, independent of world
//! entities. They use screen coordinates, draw on the top layer and keep
//! their own state between frames.
//!
//! # Available Components
//!
//! - [`TradeMenu`] - Buy/sell overlay for trading with an NPC
//!
//! Supporting pieces:
//! - `cursor` - Wrapping row selection
//! - `layout` - Panel and row geometry
//! - [`MenuSurface`] - Drawing primitives the menus render through
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::gui::TradeMenu;
//!
//! // Create menu once
//! let mut trade_menu = TradeMenu::new(catalog, prices, font, metrics, debounce)?;
//!
//! // Each frame while open
//! trade_menu.update(&held, &mut player, Instant::now());
//! trade_menu.render(&mut canvas, &player)?;
//! ```

pub mod cursor;
pub mod layout;
pub mod surface;
pub mod trade_menu;

pub use layout::LayoutMetrics;
pub use surface::MenuSurface;
pub use trade_menu::TradeMenu;
