use crate::input::Button;

/// Capability hooks the event loop dispatches into.
///
/// The shell implements all three; the windowing library's events are
/// translated into these calls instead of free-standing callbacks.
pub trait ShellHooks {
    /// A resize was reported; width and height are framebuffer pixels
    fn on_resize(&mut self, width: u32, height: u32);

    /// A consumed key changed state
    fn on_key(&mut self, button: Button, pressed: bool);

    /// The user asked the OS to close the window
    fn on_close(&mut self);
}
