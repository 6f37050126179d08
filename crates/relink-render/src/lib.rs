#![forbid(unsafe_code)]

//! Rendering surface for Relink widgets.
//!
//! Widgets draw into a [`Buffer`] of [`Cell`]s; a host application presents
//! the buffer however it likes (ANSI writer, test harness, pixel canvas).
//! The [`path`] module rasterizes orthogonal connector paths with
//! box-drawing glyphs, merging strokes where paths cross.

pub mod buffer;
pub mod cell;
pub mod path;

pub use buffer::Buffer;
pub use cell::Cell;
pub use path::Stroke;
