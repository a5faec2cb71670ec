//! Core types shared across the digirain crates.
//!
//! The rain engine never talks to a terminal directly. It paints through the
//! [`Surface`] capability defined here, which keeps it testable with a
//! recording fake and lets the binary supply a terminal-backed canvas.

mod color;
mod surface;
mod variant;

pub use color::{ParseColorError, Rgb};
pub use surface::{DrawError, Surface};
pub use variant::{DEFAULT_DENSITY, DEFAULT_SPEED, VariantSpec, spawn_chance};
