use crate::constants::MAIN_HOST_WINDOW;
use crate::drivers::{InputDriver, OutputDriver};
use crate::error::WiredeckError;
use crate::event::{HostWindowId, InputEvent};
use crate::event_loop::EventLoop;
use crate::input::InputSnapshot;
use crate::render::DrawList;
use crate::window::WindowManager;

/// Frame orchestrator: owns the window manager, the input snapshot and the
/// running flag, and sequences one frame at a time.
#[derive(Debug)]
pub struct Runtime {
    windows: WindowManager,
    input: InputSnapshot,
    host_window: HostWindowId,
    running: bool,
}

impl Runtime {
    pub fn new(windows: WindowManager) -> Self {
        Self {
            windows,
            input: InputSnapshot::new(),
            host_window: MAIN_HOST_WINDOW,
            running: true,
        }
    }

    pub fn with_host_window(mut self, host_window: HostWindowId) -> Self {
        self.host_window = host_window;
        self
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn input(&self) -> &InputSnapshot {
        &self.input
    }

    /// Cleared by a quit notification; checked before each new frame.
    pub fn running(&self) -> bool {
        self.running
    }

    pub fn begin_frame(&mut self) {
        self.input.reset_frame();
    }

    pub fn ingest(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.stop("quit requested"),
            InputEvent::WindowClose(host) if host == self.host_window => {
                self.stop("host window closed")
            }
            InputEvent::WindowClose(_) => {}
            InputEvent::PointerMove { x, y } => self.input.record_motion(x, y),
            InputEvent::PointerButtonDown(button) => {
                if let Some(key) = button.key() {
                    self.input.record_button_event(key, true);
                }
            }
            InputEvent::PointerButtonUp(button) => {
                if let Some(key) = button.key() {
                    self.input.record_button_event(key, false);
                }
            }
        }
    }

    fn stop(&mut self, reason: &str) {
        if self.running {
            tracing::info!(reason, "stopping");
        }
        self.running = false;
    }

    /// Refresh the viewport, run interaction front to back, then paint back
    /// to front.
    pub fn update_and_paint(&mut self, width: i32, height: i32) -> DrawList {
        self.windows.set_viewport(width, height);
        self.windows.update(&mut self.input);
        let mut commands = DrawList::new();
        self.windows.paint(&mut commands);
        commands
    }

    /// One frame with an already collected batch of events.
    pub fn run_frame<I>(&mut self, events: I, viewport: (i32, i32)) -> DrawList
    where
        I: IntoIterator<Item = InputEvent>,
    {
        self.begin_frame();
        for event in events {
            self.ingest(event);
        }
        self.update_and_paint(viewport.0, viewport.1)
    }
}

/// Drive frames until a quit notification is seen.
///
/// The frame that carries the quit still completes and is presented.
pub fn run_app<D, O>(runtime: &mut Runtime, input: D, output: &mut O) -> Result<(), WiredeckError>
where
    D: InputDriver,
    O: OutputDriver,
{
    let mut event_loop = EventLoop::new(input);
    while runtime.running() {
        runtime.begin_frame();
        for event in event_loop.next_batch()? {
            runtime.ingest(event);
        }
        let (width, height) = output.viewport()?;
        let commands = runtime.update_and_paint(width, height);
        output.present(&commands)?;
    }
    Ok(())
}
