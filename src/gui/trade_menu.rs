//! Trade Menu Component
//!
//! Modal overlay for buying and selling goods with a trader. The menu owns
//! its selection cursor and debounce timer; the player owns wallet,
//! inventory and the "menu open" flag.
//!
//! # Frame flow
//!
//! 1. `update()` ticks the debounce timer, toggles the open flag on close,
//!    then (outside the cooldown) moves the cursor or settles a trade
//! 2. `render()` lays out the panel and draws every row
//!
//! Both run once per frame, in that order, so a confirm press is always
//! reflected in the same frame's render.

use super::cursor::SelectionCursor;
use super::layout::{LayoutMetrics, MenuGeometry, compute_layout};
use super::surface::MenuSurface;
use crate::input_system::{HeldActions, MenuAction};
use crate::player::Player;
use crate::text::{BitmapFont, TextLabel};
use crate::timer::DebounceTimer;
use crate::trade::{
    Catalog, ConfigError, PriceBook, SlotAction, TradeAccount, TradeLedger, TradeOutcome,
};
use log::debug;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::time::{Duration, Instant};

/// Configuration for trade menu appearance
#[derive(Debug, Clone)]
pub struct TradeMenuStyle {
    /// Row background color
    pub row_color: Color,

    /// Color of item names, counts and the action hint
    pub text_color: Color,

    /// Outline drawn around the selected row
    pub selected_border_color: Color,

    /// Thickness of the selected row outline
    pub selected_border_width: u32,

    /// Corner radius for row backgrounds and outline
    pub corner_radius: u32,

    /// Distance of item name and count from the row's left/right edges
    pub text_inset: i32,

    /// Distance of the action hint from the row's left edge
    pub hint_offset: i32,
}

impl Default for TradeMenuStyle {
    fn default() -> Self {
        TradeMenuStyle {
            row_color: Color::RGB(255, 255, 255),
            text_color: Color::RGB(0, 0, 0),
            selected_border_color: Color::RGB(0, 0, 0),
            selected_border_width: 4,
            corner_radius: 4,
            text_inset: 20,
            hint_offset: 150,
        }
    }
}

/// Buy/sell overlay driven by polled input
///
/// # Example
///
/// ```ignore
/// let mut menu = TradeMenu::new(catalog, prices, font, metrics, Duration::from_millis(200))?;
///
/// // Each frame, while the player has the menu open
/// let held = HeldActions::from_scancodes(event_pump.keyboard_state().pressed_scancodes());
/// menu.update(&held, &mut player, Instant::now());
/// menu.render(&mut canvas, &player)?;
/// ```
pub struct TradeMenu {
    catalog: Catalog,
    ledger: TradeLedger,
    cursor: SelectionCursor,
    timer: DebounceTimer,
    font: BitmapFont,
    metrics: LayoutMetrics,
    style: TradeMenuStyle,
    row_labels: Vec<TextLabel>,
    sell_hint: TextLabel,
    buy_hint: TextLabel,
    geometry: Option<((u32, u32), MenuGeometry)>,
}

impl TradeMenu {
    /// Creates a trade menu with default styling
    ///
    /// Fails if any catalog item lacks a sale or purchase price.
    pub fn new(
        catalog: Catalog,
        prices: PriceBook,
        font: BitmapFont,
        metrics: LayoutMetrics,
        debounce: Duration,
    ) -> Result<Self, ConfigError> {
        let ledger = TradeLedger::new(&catalog, &prices)?;

        let style = TradeMenuStyle::default();
        let row_labels = catalog
            .items()
            .map(|item| font.render(item, style.text_color))
            .collect();
        let sell_hint = font.render(SlotAction::Sell.label(), style.text_color);
        let buy_hint = font.render(SlotAction::Buy.label(), style.text_color);

        Ok(TradeMenu {
            cursor: SelectionCursor::new(catalog.len()),
            catalog,
            ledger,
            timer: DebounceTimer::new(debounce),
            font,
            metrics,
            style,
            row_labels,
            sell_hint,
            buy_hint,
            geometry: None,
        })
    }

    /// Currently highlighted catalog slot
    pub fn selected_index(&self) -> usize {
        self.cursor.current()
    }

    /// Processes one frame of held input
    ///
    /// Close toggles `player.trade_menu_open` on every frame it is held.
    /// Navigation and confirm only act when the debounce timer is inactive,
    /// and each restarts it. Returns the trade outcome if confirm fired.
    pub fn update(
        &mut self,
        input: &HeldActions,
        player: &mut Player,
        now: Instant,
    ) -> Option<TradeOutcome> {
        self.timer.tick(now);

        if input.is_held(MenuAction::Close) {
            player.toggle_trade_menu();
            debug!("Trade menu open: {}", player.trade_menu_open);
        }

        let mut outcome = None;

        if !self.timer.is_active() {
            if input.is_held(MenuAction::Up) {
                self.timer.activate(now);
                self.cursor.move_up();
            }

            if input.is_held(MenuAction::Down) {
                self.timer.activate(now);
                self.cursor.move_down();
            }

            if input.is_held(MenuAction::Confirm) {
                self.timer.activate(now);
                outcome = self.ledger.trade_slot(self.cursor.current(), player);
            }
        }

        self.cursor.rewrap(self.catalog.len());

        outcome
    }

    /// Returns the panel geometry for `viewport`, recomputing only on resize
    fn geometry_for(&mut self, viewport: (u32, u32)) -> MenuGeometry {
        if let Some((cached_viewport, geometry)) = &self.geometry {
            if *cached_viewport == viewport {
                return geometry.clone();
            }
        }

        let heights: Vec<u32> = self.row_labels.iter().map(|l| l.height).collect();
        let geometry = compute_layout(&heights, &self.metrics, viewport);
        self.geometry = Some((viewport, geometry.clone()));
        geometry
    }

    /// Bounds of the whole panel when drawn into `viewport`
    pub fn panel_bounds(&mut self, viewport: (u32, u32)) -> Rect {
        self.geometry_for(viewport).panel
    }

    /// Draws every row of the menu
    pub fn render(
        &mut self,
        surface: &mut impl MenuSurface,
        account: &impl TradeAccount,
    ) -> Result<(), String> {
        let geometry = self.geometry_for(surface.viewport_size());
        let selected = self.cursor.current();

        for (index, row) in geometry.rows.iter().enumerate() {
            let Some(item_id) = self.catalog.item(index) else {
                continue;
            };
            let action = self.catalog.action_at(index);
            let center_y = row.center().y();

            // 1. Background
            surface.draw_rounded_rect(*row, self.style.row_color, 0, self.style.corner_radius)?;

            // 2. Item name
            let label = &self.row_labels[index];
            surface.blit(label, label.mid_left(row.left() + self.style.text_inset, center_y))?;

            // 3. Owned count (sell side only; buy rows show it blank)
            let amount = match action {
                SlotAction::Sell => account.item_count(item_id).to_string(),
                SlotAction::Buy => String::new(),
            };
            let amount_label = self.font.render(&amount, self.style.text_color);
            surface.blit(
                &amount_label,
                amount_label.mid_right(row.right() - self.style.text_inset, center_y),
            )?;

            // 4. Selection outline and action hint
            if index == selected {
                surface.draw_rounded_rect(
                    *row,
                    self.style.selected_border_color,
                    self.style.selected_border_width,
                    self.style.corner_radius,
                )?;

                let hint = match action {
                    SlotAction::Sell => &self.sell_hint,
                    SlotAction::Buy => &self.buy_hint,
                };
                surface.blit(hint, hint.mid_left(row.left() + self.style.hint_offset, center_y))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Inventory;
    use crate::player::Wallet;
    use sdl2::rect::Point;
    use std::collections::HashMap;

    const COOLDOWN: Duration = Duration::from_millis(200);

    #[derive(Default)]
    struct RecordingSurface {
        rects: Vec<(Rect, Color, u32)>,
        blits: Vec<(String, Point)>,
    }

    impl MenuSurface for RecordingSurface {
        fn viewport_size(&self) -> (u32, u32) {
            (1280, 720)
        }

        fn draw_rounded_rect(
            &mut self,
            rect: Rect,
            color: Color,
            border_width: u32,
            _corner_radius: u32,
        ) -> Result<(), String> {
            self.rects.push((rect, color, border_width));
            Ok(())
        }

        fn blit(&mut self, label: &TextLabel, position: Point) -> Result<(), String> {
            self.blits.push((label.text.clone(), position));
            Ok(())
        }
    }

    fn table(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn trader_catalog() -> Catalog {
        let items = ["wood", "apple", "corn", "tomato", "corn", "tomato"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Catalog::new(items, 3).unwrap()
    }

    fn trader_prices() -> PriceBook {
        PriceBook::new(
            table(&[("wood", 4), ("apple", 2), ("corn", 10), ("tomato", 20)]),
            table(&[("wood", 8), ("apple", 6), ("corn", 4), ("tomato", 5)]),
        )
    }

    fn menu() -> TradeMenu {
        TradeMenu::new(
            trader_catalog(),
            trader_prices(),
            BitmapFont::new(3),
            LayoutMetrics::default(),
            COOLDOWN,
        )
        .unwrap()
    }

    fn player(money: u32, items: &[(&str, u32)]) -> Player {
        let mut player = Player::new(Wallet::new(money), Inventory::from(table(items)));
        player.trade_menu_open = true;
        player
    }

    fn held(actions: &[MenuAction]) -> HeldActions {
        actions.iter().copied().collect()
    }

    fn ms(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn test_missing_price_fails_construction() {
        let prices = PriceBook::new(
            table(&[("wood", 4), ("apple", 2), ("corn", 10)]),
            table(&[("wood", 8), ("apple", 6), ("corn", 4), ("tomato", 5)]),
        );
        let result = TradeMenu::new(
            trader_catalog(),
            prices,
            BitmapFont::new(3),
            LayoutMetrics::default(),
            COOLDOWN,
        );
        assert!(matches!(result, Err(ConfigError::MissingSalePrice(ref id)) if id == "tomato"));
    }

    #[test]
    fn test_held_navigation_is_debounced() {
        let mut menu = menu();
        let mut player = player(0, &[]);
        let start = Instant::now();
        let down = held(&[MenuAction::Down]);

        menu.update(&down, &mut player, start);
        menu.update(&down, &mut player, ms(start, 16));
        assert_eq!(menu.selected_index(), 1);

        menu.update(&down, &mut player, ms(start, 200));
        assert_eq!(menu.selected_index(), 2);
    }

    #[test]
    fn test_up_from_top_wraps_to_last_slot() {
        let mut menu = menu();
        let mut player = player(0, &[]);

        menu.update(&held(&[MenuAction::Up]), &mut player, Instant::now());
        assert_eq!(menu.selected_index(), 5);
    }

    #[test]
    fn test_close_ignores_debounce() {
        let mut menu = menu();
        let mut player = player(0, &[]);
        let start = Instant::now();

        // Start a cooldown, then press close on the next two frames
        menu.update(&held(&[MenuAction::Down]), &mut player, start);

        let close = held(&[MenuAction::Close]);
        menu.update(&close, &mut player, ms(start, 16));
        assert!(!player.trade_menu_open);

        menu.update(&close, &mut player, ms(start, 32));
        assert!(player.trade_menu_open);
    }

    #[test]
    fn test_confirm_sells_on_sell_side() {
        let mut menu = menu();
        let mut player = player(10, &[("wood", 2)]);

        let outcome = menu.update(&held(&[MenuAction::Confirm]), &mut player, Instant::now());

        assert!(matches!(outcome, Some(TradeOutcome::Sold { price: 4, .. })));
        assert_eq!(player.inventory.count("wood"), 1);
        assert_eq!(player.wallet.balance(), 14);
    }

    #[test]
    fn test_confirm_buys_on_buy_side() {
        let mut menu = menu();
        let mut player = player(10, &[]);
        let start = Instant::now();

        // Slot 4 is corn on the buy side
        for step in 0..4 {
            menu.update(&held(&[MenuAction::Down]), &mut player, ms(start, step * 200));
        }
        assert_eq!(menu.selected_index(), 4);

        let outcome = menu.update(&held(&[MenuAction::Confirm]), &mut player, ms(start, 800));

        assert!(matches!(outcome, Some(TradeOutcome::Bought { price: 4, .. })));
        assert_eq!(player.wallet.balance(), 6);
        assert_eq!(player.inventory.count("corn"), 1);
    }

    #[test]
    fn test_held_confirm_trades_once_per_window() {
        let mut menu = menu();
        let mut player = player(0, &[("wood", 5)]);
        let start = Instant::now();
        let confirm = held(&[MenuAction::Confirm]);

        for frame in 0..12 {
            menu.update(&confirm, &mut player, ms(start, frame * 16));
        }
        assert_eq!(player.inventory.count("wood"), 4);

        menu.update(&confirm, &mut player, ms(start, 200));
        assert_eq!(player.inventory.count("wood"), 3);
    }

    #[test]
    fn test_refused_trade_changes_nothing() {
        let mut menu = menu();
        let mut player = player(50, &[]);

        let outcome = menu.update(&held(&[MenuAction::Confirm]), &mut player, Instant::now());

        assert_eq!(outcome, Some(TradeOutcome::NothingToSell));
        assert_eq!(player.wallet.balance(), 50);
        assert_eq!(player.inventory.count("wood"), 0);
    }

    #[test]
    fn test_render_draws_every_row_and_one_outline() {
        let mut menu = menu();
        let player = player(0, &[]);
        let mut surface = RecordingSurface::default();

        menu.render(&mut surface, &player).unwrap();

        let fills = surface.rects.iter().filter(|(_, _, border)| *border == 0).count();
        let outlines: Vec<_> = surface.rects.iter().filter(|(_, _, border)| *border > 0).collect();
        assert_eq!(fills, 6);
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].2, 4);
    }

    #[test]
    fn test_render_counts_blank_on_buy_side() {
        let mut menu = menu();
        let player = player(0, &[("wood", 3), ("apple", 1), ("corn", 7), ("tomato", 2)]);
        let mut surface = RecordingSurface::default();

        menu.render(&mut surface, &player).unwrap();

        let texts: Vec<&str> = surface.blits.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "wood", "3", "sell", //
                "apple", "1", //
                "corn", "7", //
                "tomato", "2", //
                "corn", "", //
                "tomato", "",
            ]
        );
    }

    #[test]
    fn test_hint_names_the_action_performed() {
        let mut menu = menu();
        let mut player = player(0, &[]);
        let hint_of = |menu: &mut TradeMenu, player: &Player| {
            let mut surface = RecordingSurface::default();
            menu.render(&mut surface, player).unwrap();
            surface
                .blits
                .into_iter()
                .map(|(t, _)| t)
                .find(|t| t == "sell" || t == "buy")
        };

        // Slot 0 sells
        assert_eq!(hint_of(&mut menu, &player).as_deref(), Some("sell"));

        // Slot 5 buys
        menu.update(&held(&[MenuAction::Up]), &mut player, Instant::now());
        assert_eq!(hint_of(&mut menu, &player).as_deref(), Some("buy"));
    }

    #[test]
    fn test_render_positions_follow_layout() {
        let mut menu = menu();
        let player = player(0, &[]);
        let mut surface = RecordingSurface::default();

        menu.render(&mut surface, &player).unwrap();

        // Scale 3 labels are 21px tall, so rows are 37px and the panel is
        // 272px tall, centered in 1280x720 at (440, 224)
        let (first_row, _, _) = surface.rects[0];
        assert_eq!(first_row, Rect::new(440, 224, 400, 37));

        // "wood" sits 20px in from the left, vertically centered on the row
        let (text, position) = &surface.blits[0];
        assert_eq!(text, "wood");
        assert_eq!(*position, Point::new(460, 224 + 18 - 10));

        // "sell" hint starts 150px in
        let (text, position) = &surface.blits[2];
        assert_eq!(text, "sell");
        assert_eq!(position.x(), 590);
    }

    #[test]
    fn test_panel_bounds_match_rows() {
        let mut menu = menu();
        let panel = menu.panel_bounds((1280, 720));
        assert_eq!(panel, Rect::new(440, 224, 400, 272));
    }

    #[test]
    fn test_render_is_stable_between_frames() {
        let mut menu = menu();
        let player = player(0, &[("corn", 1)]);

        let mut first = RecordingSurface::default();
        let mut second = RecordingSurface::default();
        menu.render(&mut first, &player).unwrap();
        menu.render(&mut second, &player).unwrap();

        assert_eq!(first.rects, second.rects);
        assert_eq!(first.blits, second.blits);
    }
}
