#![forbid(unsafe_code)]

//! Shared vocabulary for Relink: cell-grid geometry and canonical input
//! events.
//!
//! Everything above this crate (rendering, widgets, the facade) speaks in
//! these types. The crate is deliberately a leaf: no rendering, no styling,
//! no terminal I/O.

pub mod event;
pub mod geometry;

pub use event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use geometry::{Point, Rect};
