use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Point;

mod config;
mod gui;
mod input_system;
mod inventory;
mod player;
mod text;
mod timer;
mod trade;

use config::TraderConfig;
use gui::{MenuSurface, TradeMenu};
use input_system::HeldActions;
use log::{debug, info, warn};
use std::time::{Duration, Instant};
use text::BitmapFont;
use trade::TradeOutcome;

// Game resolution constants
const GAME_WIDTH: u32 = 640;
const GAME_HEIGHT: u32 = 360;

/// Fixed frame budget (~60 FPS)
const FRAME_TIME: Duration = Duration::from_millis(16);

const BACKGROUND_COLOR: Color = Color::RGB(88, 140, 76);
const HUD_COLOR: Color = Color::RGB(255, 255, 255);

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let scale = (usable_w / GAME_WIDTH as i32).min(usable_h / GAME_HEIGHT as i32);
            scale.clamp(1, 4) as u32
        }
        Err(e) => {
            warn!("Could not detect monitor size ({}), using 2x scale", e);
            2
        }
    }
}

/// Short status line for the last confirm press
fn describe_outcome(outcome: &TradeOutcome) -> String {
    match outcome {
        TradeOutcome::Sold { item_id, price } => format!("SOLD {} +{}", item_id, price),
        TradeOutcome::Bought { item_id, price } => format!("BOUGHT {} -{}", item_id, price),
        TradeOutcome::NothingToSell => "NOTHING TO SELL".to_string(),
        TradeOutcome::CannotAfford => "CANNOT AFFORD".to_string(),
        TradeOutcome::WalletFull => "WALLET FULL".to_string(),
        TradeOutcome::InventoryFull => "INVENTORY FULL".to_string(),
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Trader setup fails fast on any config problem
    let config = TraderConfig::load()?;
    let (catalog, prices) = config.build()?;
    let hud_font = BitmapFont::new(2);
    let mut trade_menu = TradeMenu::new(
        catalog,
        prices,
        BitmapFont::new(config.font_scale),
        config.layout,
        config.debounce(),
    )?;
    let mut player = config.starting_player();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window_scale = calculate_window_scale(&video_subsystem);
    info!(
        "Window scale: {}x ({}x{})",
        window_scale,
        GAME_WIDTH * window_scale,
        GAME_HEIGHT * window_scale
    );

    let window = video_subsystem
        .window("Trading Post", GAME_WIDTH * window_scale, GAME_HEIGHT * window_scale)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Set logical size for automatic pixel-perfect scaling
    canvas
        .set_logical_size(GAME_WIDTH, GAME_HEIGHT)
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;
    let mut status: Option<String> = None;

    info!("Controls: T - trade, W/S or arrows - select, F - buy/sell, ESC - close");

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::T),
                    repeat: false,
                    ..
                } if !player.trade_menu_open => {
                    player.trade_menu_open = true;
                    status = None;
                    info!("Trade menu opened");
                }
                _ => {}
            }
        }

        // The menu polls held keys rather than reading key events
        if player.trade_menu_open {
            let held = HeldActions::from_scancodes(event_pump.keyboard_state().pressed_scancodes());
            if let Some(outcome) = trade_menu.update(&held, &mut player, Instant::now()) {
                debug!("Slot {}: {:?}", trade_menu.selected_index(), outcome);
                status = Some(describe_outcome(&outcome));
            }
        }

        canvas.set_draw_color(BACKGROUND_COLOR);
        canvas.clear();

        let money = hud_font.render(&format!("MONEY: {}", player.wallet.balance()), HUD_COLOR);
        canvas.blit(&money, Point::new(8, 8))?;

        if player.trade_menu_open {
            trade_menu.render(&mut canvas, &player)?;

            if let Some(message) = &status {
                let panel = trade_menu.panel_bounds(canvas.viewport_size());
                let label = hud_font.render(message, HUD_COLOR);
                let x = panel.center().x() - label.width as i32 / 2;
                canvas.blit(&label, Point::new(x, panel.bottom() + 6))?;
            }
        } else {
            let hint = hud_font.render("PRESS T TO TRADE", HUD_COLOR);
            let x = (GAME_WIDTH - hint.width) as i32 / 2;
            canvas.blit(&hint, Point::new(x, GAME_HEIGHT as i32 - 30))?;
        }

        canvas.present();
        std::thread::sleep(FRAME_TIME);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_outcome() {
        let sold = TradeOutcome::Sold {
            item_id: "corn".to_string(),
            price: 10,
        };
        assert_eq!(describe_outcome(&sold), "SOLD corn +10");
        assert_eq!(describe_outcome(&TradeOutcome::CannotAfford), "CANNOT AFFORD");
        assert_eq!(describe_outcome(&TradeOutcome::WalletFull), "WALLET FULL");
    }
}
