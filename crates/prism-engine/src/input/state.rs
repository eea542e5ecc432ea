use super::types::{InputEvent, PointerButtonEvent, PointerMoveEvent};

/// Input state the runtime needs between events.
///
/// Only the pointer position is kept: button events carry it so a click can
/// be placed on the selector.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in surface pixels.
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y })
            | InputEvent::PointerButton(PointerButtonEvent { x, y, .. }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { .. } => {}
        }
    }
}
