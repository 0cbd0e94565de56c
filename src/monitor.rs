use winit::event_loop::ActiveEventLoop;
use winit::monitor::MonitorHandle;

/// Size used when no monitor can be interrogated
pub const FALLBACK_WIDTH: u32 = 1600;
pub const FALLBACK_HEIGHT: u32 = 1200;

/// Current video mode of the monitor the window will cover
#[derive(Debug, Clone, Copy)]
pub struct DisplayMode {
    pub width: u32,
    pub height: u32,
    pub refresh_rate_millihertz: Option<u32>,
}

impl DisplayMode {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            refresh_rate_millihertz: None,
        }
    }

    /// Fixed size for headless or uncooperative platforms
    pub fn fallback() -> Self {
        Self::new(FALLBACK_WIDTH, FALLBACK_HEIGHT)
    }

    /// Read the monitor's current resolution and refresh rate.
    /// Returns None if the monitor reports a zero dimension.
    pub fn from_monitor(monitor: &MonitorHandle) -> Option<Self> {
        let size = monitor.size();
        if size.width == 0 || size.height == 0 {
            return None;
        }
        Some(Self {
            width: size.width,
            height: size.height,
            refresh_rate_millihertz: monitor.refresh_rate_millihertz(),
        })
    }

    /// Detect the mode to size the window to: primary monitor first, then
    /// any monitor, then the fallback.
    pub fn detect(event_loop: &ActiveEventLoop) -> Self {
        event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next())
            .and_then(|monitor| Self::from_monitor(&monitor))
            .unwrap_or_else(Self::fallback)
    }

    /// Refresh rate in whole hertz, when the platform reports one
    pub fn refresh_rate_hz(&self) -> Option<u32> {
        self.refresh_rate_millihertz.map(|mhz| mhz / 1000)
    }
}
