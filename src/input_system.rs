use sdl2::keyboard::Scancode;
use std::collections::HashSet;

/// Actions the trade menu responds to
///
/// Keys are polled every frame rather than read as press events, so the
/// menu sees which actions are *held*, not which were just pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Toggle the menu's active flag
    Close,
    /// Move the selection up one row
    Up,
    /// Move the selection down one row
    Down,
    /// Buy or sell the selected slot
    Confirm,
}

/// Maps a physical key to its menu action
///
/// Bindings are fixed:
/// - Escape: close
/// - Up / W: up
/// - Down / S: down
/// - F: confirm
pub fn menu_binding(scancode: Scancode) -> Option<MenuAction> {
    match scancode {
        Scancode::Escape => Some(MenuAction::Close),
        Scancode::Up | Scancode::W => Some(MenuAction::Up),
        Scancode::Down | Scancode::S => Some(MenuAction::Down),
        Scancode::F => Some(MenuAction::Confirm),
        _ => None,
    }
}

/// Snapshot of the menu actions held down this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldActions {
    held: HashSet<MenuAction>,
}

impl HeldActions {
    /// Builds the snapshot from the scancodes currently pressed
    ///
    /// Typically fed from `event_pump.keyboard_state().pressed_scancodes()`.
    pub fn from_scancodes(scancodes: impl IntoIterator<Item = Scancode>) -> Self {
        scancodes.into_iter().filter_map(menu_binding).collect()
    }

    pub fn is_held(&self, action: MenuAction) -> bool {
        self.held.contains(&action)
    }
}

impl FromIterator<MenuAction> for HeldActions {
    fn from_iter<I: IntoIterator<Item = MenuAction>>(iter: I) -> Self {
        HeldActions {
            held: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_letter_bindings_agree() {
        assert_eq!(menu_binding(Scancode::Up), Some(MenuAction::Up));
        assert_eq!(menu_binding(Scancode::W), Some(MenuAction::Up));
        assert_eq!(menu_binding(Scancode::Down), Some(MenuAction::Down));
        assert_eq!(menu_binding(Scancode::S), Some(MenuAction::Down));
    }

    #[test]
    fn test_close_and_confirm_bindings() {
        assert_eq!(menu_binding(Scancode::Escape), Some(MenuAction::Close));
        assert_eq!(menu_binding(Scancode::F), Some(MenuAction::Confirm));
        assert_eq!(menu_binding(Scancode::Return), None);
    }

    #[test]
    fn test_snapshot_from_scancodes() {
        let held = HeldActions::from_scancodes([Scancode::W, Scancode::F, Scancode::Space]);

        assert!(held.is_held(MenuAction::Up));
        assert!(held.is_held(MenuAction::Confirm));
        assert!(!held.is_held(MenuAction::Down));
        assert!(!held.is_held(MenuAction::Close));
    }

    #[test]
    fn test_unbound_keys_give_empty_snapshot() {
        let held = HeldActions::from_scancodes([Scancode::A, Scancode::Space]);
        assert_eq!(held, HeldActions::default());
    }
}
