//! Terminal session and frame output.
//!
//! Two concerns live here: owning the raw-mode/alternate-screen lifetime
//! ([`Session`]) and turning a glyph grid into one full-screen ANSI repaint
//! ([`encode_frame_into`] / [`TerminalRenderer`]).
//!
//! Goals:
//! - Frame encoding is pure over any `Write` sink so it can be tested
//!   byte-for-byte
//! - The terminal is restored on every exit path, including panics

pub mod buffer;
pub mod frame;
pub mod session;

pub use harvester_types as types;

pub use buffer::ScreenBuffer;
pub use frame::{encode_frame_into, TerminalRenderer, Viewport};
pub use session::{install_panic_hook, Session};
