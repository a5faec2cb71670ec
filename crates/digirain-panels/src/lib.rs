//! Menu, content panels and text effects for the digirain front end.
//!
//! Everything here is a pure function of input events or elapsed time, so the
//! binary can drive it from its frame loop without timers of its own.

mod glitch;
mod menu;
mod sections;
mod typing;

pub use glitch::{
    GLITCH_DURATION_MS, GLITCH_PERIOD_MS, SCANLINE_PERIOD_MS, is_glitching, scanline_row,
};
pub use menu::Menu;
pub use sections::{ACCESS_GRANTED, Section, section_for};
pub use typing::{TYPING_INTERVAL_MS, TypingText};
