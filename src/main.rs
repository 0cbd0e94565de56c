use std::process;

use winit::event_loop::{ControlFlow, EventLoop};

use window_shell::WindowShell;

/// Process exit code for any initialization failure
const FAILURE_EXIT_CODE: i32 = -1;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(FAILURE_EXIT_CODE);
    }
}

fn run() -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    log::info!("controls: Escape quits, Space toggles maximize/restore");

    let mut shell = WindowShell::new();
    event_loop.run_app(&mut shell)?;
    shell.into_result()
}
