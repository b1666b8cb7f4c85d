use std::io;

use thiserror::Error;

use crate::window::WindowId;

/// Runtime failures surfaced by the frame loop.
#[derive(Debug, Error)]
pub enum WiredeckError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Broken window-manager invariants. These are programmer errors; a
/// correct caller never observes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("window {0} appears more than once in the window order")]
    DuplicateInOrder(WindowId),
    #[error("window {0} is registered but missing from the window order")]
    MissingFromOrder(WindowId),
    #[error("window {0} is not registered")]
    UnknownWindow(WindowId),
    #[error("window order references unregistered window {0}")]
    UnknownInOrder(WindowId),
    #[error("dock parent chain starting at window {0} does not terminate")]
    DockCycle(WindowId),
    #[error("window {window} is docked to unregistered window {parent}")]
    UnknownDockParent { window: WindowId, parent: WindowId },
}
