#![forbid(unsafe_code)]

//! Relink public facade crate.
//!
//! Re-exports the stable surface of the internal crates and offers a small
//! prelude for day-to-day usage. Host applications own the terminal (or any
//! other presentation surface); Relink hands them a rendered [`Buffer`] and
//! consumes canonical [`Event`]s.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use relink_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use relink_core::geometry::{Point, Rect};

// --- Render re-exports -----------------------------------------------------

pub use relink_render::buffer::Buffer;
pub use relink_render::cell::Cell;
pub use relink_render::path::Stroke;

// --- Style re-exports ------------------------------------------------------

pub use relink_style::{Ansi16, Color, Rgb, Style, StyleFlags};

// --- Widget re-exports -----------------------------------------------------

#[cfg(feature = "state-persistence")]
pub use relink_widgets::connector::ConnectorSnapshot;
pub use relink_widgets::{
    AnchorMap, Arm, Block, BorderType, Borders, Connector, ConnectorState, Item, ItemId,
    MouseResult, Pairing, PairingSession, Rosters, SelectOutcome, Side, StatefulWidget, Widget,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for host applications embedding Relink.
///
/// The connector itself never fails — invalid input degrades to no-ops —
/// so this covers the fallible edges a host owns, such as persisting and
/// reloading state snapshots.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while persisting or loading state.
    Io(std::io::Error),
    /// A stored snapshot could not be decoded.
    Snapshot(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Snapshot(msg) => write!(f, "snapshot: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for Relink host APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::{
        Buffer, Connector, ConnectorState, Event, Item, ItemId, KeyCode, KeyEvent, MouseEvent,
        MouseResult, Rect, SelectOutcome, Side, StatefulWidget, Style, Widget,
    };
}
