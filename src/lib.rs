//! Retained-mode panel manager: a fixed set of windows with z-order, drag
//! and dock, driven by a per-frame input snapshot and producing a list of
//! filled rectangles per frame.

pub mod config;
pub mod constants;
pub mod drivers;
pub mod error;
pub mod event;
pub mod event_loop;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod render;
pub mod runner;
pub mod term_color;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
