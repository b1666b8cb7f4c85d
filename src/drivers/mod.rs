pub mod console;

use ::crossterm::event::Event;
use std::io;
use std::time::Duration;

use crate::render::DrawList;

/// Source of raw terminal events.
pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    /// Blocks until an event is available.
    fn read(&mut self) -> io::Result<Event>;
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }
}

/// Rasterizer and presenter for a frame's draw list.
pub trait OutputDriver {
    fn enter(&mut self) -> io::Result<()>;
    fn exit(&mut self) -> io::Result<()>;
    /// Current drawable size as `(width, height)`.
    fn viewport(&mut self) -> io::Result<(i32, i32)>;
    fn present(&mut self, commands: &DrawList) -> io::Result<()>;
}

impl<T: OutputDriver + ?Sized> OutputDriver for &mut T {
    fn enter(&mut self) -> io::Result<()> {
        (**self).enter()
    }

    fn exit(&mut self) -> io::Result<()> {
        (**self).exit()
    }

    fn viewport(&mut self) -> io::Result<(i32, i32)> {
        (**self).viewport()
    }

    fn present(&mut self, commands: &DrawList) -> io::Result<()> {
        (**self).present(commands)
    }
}
