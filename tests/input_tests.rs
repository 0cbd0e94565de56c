use window_shell::input::{frame_action, Button, FrameAction, InputState};

#[cfg(test)]
mod input_tests {
    use super::*;

    /// Apply one frame's decision to a maximized flag the way the shell
    /// does: the state is re-queried, then flipped.
    fn apply_toggle(input: &InputState, maximized: &mut bool) {
        if frame_action(input) == FrameAction::ToggleMaximize {
            *maximized = !*maximized;
        }
    }

    #[test]
    fn test_idle_input_continues() {
        let input = InputState::new();
        assert_eq!(frame_action(&input), FrameAction::Continue);
    }

    #[test]
    fn test_escape_closes_from_any_state() {
        let mut input = InputState::new();
        input.set_down(Button::Escape, true);
        assert_eq!(frame_action(&input), FrameAction::Close);

        // Also with space held at the same time
        input.set_down(Button::Space, true);
        assert_eq!(frame_action(&input), FrameAction::Close);
    }

    #[test]
    fn test_space_maximizes_a_restored_window() {
        let mut input = InputState::new();
        input.set_down(Button::Space, true);

        let mut maximized = false;
        apply_toggle(&input, &mut maximized);
        assert!(maximized, "restored window should maximize");
    }

    #[test]
    fn test_space_restores_a_maximized_window() {
        let mut input = InputState::new();
        input.set_down(Button::Space, true);

        let mut maximized = true;
        apply_toggle(&input, &mut maximized);
        assert!(!maximized, "maximized window should restore");
    }

    #[test]
    fn test_held_space_oscillates_every_poll() {
        let mut input = InputState::new();
        input.set_down(Button::Space, true);

        let mut maximized = false;
        for poll in 0..10 {
            apply_toggle(&input, &mut maximized);
            // Odd polls leave the window maximized, even polls restored
            assert_eq!(maximized, poll % 2 == 0, "poll {poll}");
        }
    }

    #[test]
    fn test_released_space_stops_toggling() {
        let mut input = InputState::new();
        input.set_down(Button::Space, true);

        let mut maximized = false;
        apply_toggle(&input, &mut maximized);
        assert!(maximized);

        input.set_down(Button::Space, false);
        apply_toggle(&input, &mut maximized);
        apply_toggle(&input, &mut maximized);
        assert!(maximized, "state must not change after release");
    }

    #[test]
    fn test_repeat_events_do_not_stack() {
        let mut input = InputState::new();

        // Key repeat delivers pressed events while held
        input.set_down(Button::Space, true);
        input.set_down(Button::Space, true);
        input.set_down(Button::Space, true);
        assert_eq!(frame_action(&input), FrameAction::ToggleMaximize);

        input.set_down(Button::Space, false);
        assert_eq!(frame_action(&input), FrameAction::Continue);
    }
}
