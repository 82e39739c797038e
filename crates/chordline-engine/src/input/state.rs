use super::types::{InputEvent, Modifiers, PointerButtonEvent, PointerMoveEvent};

/// Input state the platform layer needs to translate the next event.
///
/// winit reports button presses without a position and keys without
/// modifiers, so the last known values are kept here.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { modifiers, .. } => {
                self.modifiers = *modifiers;
            }

            InputEvent::PointerButton(PointerButtonEvent { x, y, modifiers, .. }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;
            }

            InputEvent::Focused(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyState, MouseButton, MouseButtonState};

    fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn pointer_move_updates_position() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        assert_eq!(s.pointer_pos, Some((3.0, 4.0)));
    }

    #[test]
    fn pointer_left_clears_position() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        s.apply_event(&InputEvent::PointerLeft);
        assert_eq!(s.pointer_pos, None);
    }

    #[test]
    fn button_event_records_position() {
        let mut s = InputState::default();
        s.apply_event(&button(MouseButtonState::Pressed, 1.0, 2.0));
        assert_eq!(s.pointer_pos, Some((1.0, 2.0)));
    }

    // ── modifiers ─────────────────────────────────────────────────────────

    #[test]
    fn key_event_tracks_modifiers() {
        let mut s = InputState::default();
        let mods = Modifiers { ctrl: true, ..Default::default() };
        s.apply_event(&InputEvent::Key {
            key: Key::R,
            state: KeyState::Pressed,
            modifiers: mods,
            repeat: false,
        });
        assert_eq!(s.modifiers, mods);
    }

    #[test]
    fn focus_change_keeps_state() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        s.apply_event(&InputEvent::Focused(false));
        assert_eq!(s.pointer_pos, Some((3.0, 4.0)));
    }
}
