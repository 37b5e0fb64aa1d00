bitflags::bitflags! {
    #[repr(transparent)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        const LEFT  = 1 << 0;
        const RIGHT = 1 << 1;
        const JUMP  = 1 << 2;
    }
}

/// Logical keys the simulation reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Jump,
}

impl Key {
    pub const ALL: [Key; 3] = [Key::Left, Key::Right, Key::Jump];

    /// Maps a DOM `KeyboardEvent.key` value. Keys owned by the surrounding
    /// page (visibility toggle etc.) map to `None`.
    pub fn from_dom_key(key: &str) -> Option<Key> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Jump),
            _ => None,
        }
    }

    #[inline]
    pub fn button(self) -> Buttons {
        match self {
            Key::Left => Buttons::LEFT,
            Key::Right => Buttons::RIGHT,
            Key::Jump => Buttons::JUMP,
        }
    }
}

/// What one tick reads from the input table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub held: Buttons,
    pub jump_pressed: bool,
}

impl FrameInput {
    /// -1, 0 or 1. Holding both directions cancels out.
    #[inline]
    pub fn move_dir(&self) -> i32 {
        (self.held.contains(Buttons::RIGHT) as i32) - (self.held.contains(Buttons::LEFT) as i32)
    }
}

/// Held-key table written by key handlers and drained once per tick.
///
/// Jump is edge-triggered: a press latches until the next `take_frame`, so
/// a tap that is pressed and released between two ticks still counts.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    held: Buttons,
    jump_pressed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        if key == Key::Jump {
            self.jump_pressed = true;
        }
        self.held.insert(key.button());
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(key.button());
    }

    #[inline]
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(key.button())
    }

    pub fn held(&self) -> Buttons {
        self.held
    }

    /// Replaces the held table with `bits`, emitting press/release
    /// transitions for every key that changed. Unknown bits are dropped.
    pub fn apply_bits(&mut self, bits: u8) {
        let next = Buttons::from_bits_truncate(bits);
        for key in Key::ALL {
            let b = key.button();
            match (self.held.contains(b), next.contains(b)) {
                (false, true) => self.press(key),
                (true, false) => self.release(key),
                _ => {}
            }
        }
    }

    pub fn take_frame(&mut self) -> FrameInput {
        let frame = FrameInput {
            held: self.held,
            jump_pressed: self.jump_pressed,
        };
        self.jump_pressed = false;
        frame
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{Buttons, InputState, Key};

    #[test]
    fn press_and_release_toggle_held() {
        let mut input = InputState::new();
        input.press(Key::Left);
        assert!(input.is_held(Key::Left));
        input.release(Key::Left);
        assert!(!input.is_held(Key::Left));
    }

    #[test]
    fn both_or_neither_direction_is_zero() {
        let mut input = InputState::new();
        assert_eq!(input.take_frame().move_dir(), 0);

        input.press(Key::Left);
        assert_eq!(input.take_frame().move_dir(), -1);

        input.press(Key::Right);
        assert_eq!(input.take_frame().move_dir(), 0);

        input.release(Key::Left);
        assert_eq!(input.take_frame().move_dir(), 1);
    }

    #[test]
    fn jump_edge_latches_until_taken() {
        let mut input = InputState::new();
        input.press(Key::Jump);
        input.release(Key::Jump);

        let frame = input.take_frame();
        assert!(frame.jump_pressed);
        assert!(!frame.held.contains(Buttons::JUMP));
        assert!(!input.take_frame().jump_pressed);
    }

    #[test]
    fn holding_jump_does_not_repeat_the_edge() {
        let mut input = InputState::new();
        input.apply_bits(Buttons::JUMP.bits());
        assert!(input.take_frame().jump_pressed);

        input.apply_bits(Buttons::JUMP.bits());
        let frame = input.take_frame();
        assert!(!frame.jump_pressed);
        assert!(frame.held.contains(Buttons::JUMP));
    }

    #[test]
    fn dom_keys_map_to_logical_keys() {
        assert_eq!(Key::from_dom_key("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom_key("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_dom_key("ArrowUp"), Some(Key::Jump));
        assert_eq!(Key::from_dom_key("h"), None);
        assert_eq!(Key::from_dom_key("ArrowDown"), None);
    }

    #[test]
    fn unknown_bits_are_ignored() {
        let mut input = InputState::new();
        input.apply_bits(0b1111_1010);
        assert_eq!(input.held(), Buttons::RIGHT);
    }
}
