//! Terminal rendering for the cube solver.
//!
//! Rendering goes through a plain framebuffer rather than a widget toolkit:
//! `CubeView` draws a `SessionSnapshot` into a `FrameBuffer`, and
//! `TerminalRenderer` flushes it to the terminal with per-row diffing.
//!
//! - `core` stays free of terminal concerns
//! - stickers are drawn 2 columns wide to keep faces roughly square

pub mod cube_view;
pub mod fb;
pub mod render_throttle;
pub mod renderer;

pub use cube_solver_core as core;
pub use cube_solver_types as types;

pub use cube_view::{color_rgb, sticker_glyph, AnchorY, CubeLayout, CubeView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_frame_into, TerminalRenderer};
