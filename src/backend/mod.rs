//! Concrete presentation backends
//!
//! - `terminal`: interactive dialogs on the terminal using dialoguer
//! - `automatic`: scripted answers for headless runs and tests

pub mod automatic;
pub mod terminal;

pub use automatic::{AutomaticBackend, Presentation};
pub use terminal::TerminalBackend;
