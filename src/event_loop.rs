use std::io;
use std::time::Duration;

use crate::drivers::InputDriver;
use crate::event::{InputEvent, translate};

/// Gathers the input for one frame.
///
/// The application is idle until input arrives: `next_batch` blocks for
/// the first event without a timeout, then drains whatever else is already
/// queued without blocking. Events that arrive after the drain finds the
/// queue empty belong to the next frame.
pub struct EventLoop<D> {
    driver: D,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Wait for at least one raw event and return the translated batch.
    ///
    /// The batch may be empty when only untracked events (resize, plain
    /// keys) were queued; the frame still runs so a resize is redrawn.
    pub fn next_batch(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut batch = Vec::new();
        let first = self.driver.read()?;
        translate(&first, &mut batch);
        let mut raw = 1usize;
        while self.driver.poll(Duration::ZERO)? {
            let event = self.driver.read()?;
            translate(&event, &mut batch);
            raw += 1;
        }
        tracing::trace!(raw, translated = batch.len(), "drained input");
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use std::collections::VecDeque;

    /// Serves queued events; a `None` entry ends the current burst so the
    /// next `poll` reports an empty queue.
    struct Scripted {
        queue: VecDeque<Option<Event>>,
    }

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            match self.queue.front() {
                Some(Some(_)) => Ok(true),
                Some(None) => {
                    self.queue.pop_front();
                    Ok(false)
                }
                None => Ok(false),
            }
        }

        fn read(&mut self) -> io::Result<Event> {
            while let Some(next) = self.queue.pop_front() {
                if let Some(event) = next {
                    return Ok(event);
                }
            }
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "script ended"))
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Option<Event> {
        Some(Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    #[test]
    fn batch_stops_at_burst_boundary() {
        let mut event_loop = EventLoop::new(Scripted {
            queue: VecDeque::from(vec![
                mouse(MouseEventKind::Moved, 1, 1),
                mouse(MouseEventKind::Down(MouseButton::Left), 2, 2),
                None,
                mouse(MouseEventKind::Moved, 9, 9),
            ]),
        });
        let first = event_loop.next_batch().unwrap();
        assert_eq!(first.len(), 3);
        let second = event_loop.next_batch().unwrap();
        assert_eq!(second, vec![InputEvent::PointerMove { x: 9, y: 9 }]);
    }

    #[test]
    fn untracked_events_yield_an_empty_batch() {
        let mut event_loop = EventLoop::new(Scripted {
            queue: VecDeque::from(vec![Some(Event::Resize(100, 40))]),
        });
        assert!(event_loop.next_batch().unwrap().is_empty());
    }

    #[test]
    fn exhausted_driver_reports_error() {
        let mut event_loop = EventLoop::new(Scripted {
            queue: VecDeque::new(),
        });
        assert!(event_loop.next_batch().is_err());
    }
}
