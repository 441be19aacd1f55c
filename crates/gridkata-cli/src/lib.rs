//! gridkata-cli: command-line runner for the array-fundamentals drills.
//!
//! The drill runners live in [`drills`] so integration tests can exercise
//! them directly; `main.rs` only parses arguments and dispatches.
pub mod drills;
