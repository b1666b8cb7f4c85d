use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use indoc::indoc;
use tracing::Level;

use wiredeck::config::UiConfig;
use wiredeck::constants::{
    DEFAULT_BORDER_THICKNESS, DEFAULT_DOCK_SLOT_HEIGHT, DEFAULT_DOCK_SLOT_WIDTH,
    DEFAULT_TOP_BAR_HEIGHT,
};
use wiredeck::drivers::OutputDriver;
use wiredeck::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use wiredeck::error::WiredeckError;
use wiredeck::geometry::Rect;
use wiredeck::runner::{Runtime, run_app};
use wiredeck::term_color::ColorMode;
use wiredeck::theme;
use wiredeck::tracing_sub;
use wiredeck::window::WindowManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    Auto,
    Truecolor,
    Indexed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "wiredeck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Draggable, dockable panels in the terminal",
    after_help = indoc!("
        Drag a panel by its top bar. Drop it on the center marker to dock it
        to the whole screen; drag a docked panel's top bar to pull it free.

        Ctrl+Q or Ctrl+C quits.
    ")
)]
struct Args {
    /// Rows reserved for each panel's top bar.
    #[arg(long, value_name = "CELLS", default_value_t = DEFAULT_TOP_BAR_HEIGHT)]
    top_bar_height: i32,

    /// Thickness of the outline around each panel.
    #[arg(long, value_name = "CELLS", default_value_t = DEFAULT_BORDER_THICKNESS)]
    border_thickness: i32,

    /// Width of the center dock target.
    #[arg(long, value_name = "CELLS", default_value_t = DEFAULT_DOCK_SLOT_WIDTH)]
    dock_width: i32,

    /// Height of the center dock target.
    #[arg(long, value_name = "CELLS", default_value_t = DEFAULT_DOCK_SLOT_HEIGHT)]
    dock_height: i32,

    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    color_mode: ColorArg,

    /// Append logs to this file. Logs are dropped when unset.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

impl Args {
    fn ui_config(&self) -> UiConfig {
        UiConfig {
            top_bar_height: self.top_bar_height,
            border_thickness: self.border_thickness,
            dock_slot_width: self.dock_width,
            dock_slot_height: self.dock_height,
        }
    }

    fn color_mode(&self) -> ColorMode {
        match self.color_mode {
            ColorArg::Auto => ColorMode::detect(),
            ColorArg::Truecolor => ColorMode::TrueColor,
            ColorArg::Indexed => ColorMode::Indexed,
        }
    }
}

fn main() -> Result<(), WiredeckError> {
    let args = Args::parse();
    tracing_sub::init(args.log_file.as_deref(), args.log_level.into())?;

    let mut windows = WindowManager::new(args.ui_config());
    windows.add_window(Rect::new(2, 1, 36, 12), theme::RED);
    windows.add_window(Rect::new(24, 8, 30, 14), theme::GREEN);
    windows.add_window(Rect::new(46, 3, 28, 10), theme::BLUE);
    let mut runtime = Runtime::new(windows);

    let mut output = ConsoleOutputDriver::new(args.color_mode())?;
    output.enter()?;
    let result = run_app(&mut runtime, ConsoleInputDriver::new(), &mut output);
    output.exit()?;

    result
}
