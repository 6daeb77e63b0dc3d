//! Bracketlight highlights matching brackets on an interactive shell
//! command line.
//!
//! As the cursor moves, the bracket under it is matched with its partner
//! and the pair is highlighted in place on the terminal. Only the
//! characters whose highlight changes are rewritten, using relative cursor
//! moves that stay correct when the line wraps over several rows.
//!
//! The core produces [`TerminalOp`] values and performs no I/O; [`ansi`]
//! turns them into escape sequences.
//!
//! ```no_run
//! use bracketlight::{Config, Key, Screen, Session};
//!
//! fn main() {
//!     let config = Config::default();
//!     let mut session = Session::new("f(a, [b])", Screen::new(2, 80), &config);
//!
//!     let ops = session.press(Key::Left);
//!     let out = bracketlight::ansi::encode(&ops, &config.style);
//!     print!("{}", out);
//! }
//! ```
//!
#![allow(unknown_lints)]

#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod tlog;

#[macro_use]
mod tools;

pub mod ansi;
pub mod config;
pub mod ctime;
pub mod emitter;
pub mod keys;
pub mod libs;
pub mod matcher;
pub mod position;
pub mod rcfile;
pub mod session;
pub mod tracker;
pub mod types;

pub use config::Config;
pub use emitter::Emitter;
pub use keys::{parse_keys, Key};
pub use session::Session;
pub use tools::prompt_width;
pub use tracker::Tracker;
pub use types::{
    ActivePolicy, BracketKind, BracketPosition, Highlight, MatchedPair, MoveStyle, Paint,
    Role, Screen, TerminalOp, Transition,
};
