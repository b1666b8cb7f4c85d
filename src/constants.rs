//! Shared crate-wide constants.

/// Rows reserved for a window's top bar, below the top border.
pub const DEFAULT_TOP_BAR_HEIGHT: i32 = 1;

/// Thickness of the outline drawn around every window.
pub const DEFAULT_BORDER_THICKNESS: i32 = 1;

/// Size of the center dock drop target.
///
/// Units: terminal cells. The slot is a drop target, not a content
/// region, so it only needs to be large enough to aim at.
pub const DEFAULT_DOCK_SLOT_WIDTH: i32 = 10;
pub const DEFAULT_DOCK_SLOT_HEIGHT: i32 = 5;

/// Identifier of the host surface the runtime draws into. `WindowClose`
/// notifications for any other host id are ignored.
pub const MAIN_HOST_WINDOW: u32 = 1;
