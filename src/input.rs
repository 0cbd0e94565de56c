use std::collections::HashSet;

use winit::keyboard::KeyCode;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Escape,
    Space,
}

/// Map a Winit KeyCode to a Button; keys the shell does not consume map to None
pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
    match keycode {
        KeyCode::Escape => Some(Button::Escape),
        KeyCode::Space => Some(Button::Space),
        _ => None,
    }
}

/// What the shell should do with the current frame's input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    /// Escape is held: exit the loop
    Close,
    /// Space is held: flip the window between maximized and restored
    ToggleMaximize,
    /// Nothing to do
    Continue,
}

/// Tracks which consumed buttons are currently held down.
///
/// Updated from keyboard events as they arrive; queried once per frame.
/// Holding a key keeps it in the set across repeat events, so the per-frame
/// decision re-triggers every poll, matching the original toggle behavior.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Button>,
}

impl InputState {
    /// Create a new state with no buttons held
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
        }
    }

    /// Record a button transition. Repeat presses are no-ops.
    pub fn set_down(&mut self, button: Button, pressed: bool) {
        if pressed {
            self.held.insert(button);
        } else {
            self.held.remove(&button);
        }
    }

    /// Check if a button is currently held
    pub fn is_down(&self, button: Button) -> bool {
        self.held.contains(&button)
    }
}

/// Per-frame input decision. Escape wins over Space; neither held means
/// the frame proceeds unchanged.
pub fn frame_action(input: &InputState) -> FrameAction {
    if input.is_down(Button::Escape) {
        FrameAction::Close
    } else if input.is_down(Button::Space) {
        FrameAction::ToggleMaximize
    } else {
        FrameAction::Continue
    }
}
