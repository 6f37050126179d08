#![forbid(unsafe_code)]

//! Style types for Relink.
//!
//! # Role
//! `relink-style` is the shared vocabulary for colors and text attributes.
//! Widgets compute styles, the render crate stores them in cells. Keeping the
//! vocabulary here lets both sides agree without a dependency on rendering.
//!
//! # This crate provides
//! - [`Color`] with ANSI-16 and 24-bit RGB variants.
//! - [`StyleFlags`] for text attributes.
//! - [`Style`] with patch (cascade) semantics: unset fields inherit.

pub mod color;
pub mod style;

pub use color::{Ansi16, Color, Rgb};
pub use style::{Style, StyleFlags};
