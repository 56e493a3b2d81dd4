//! The tracking & progression engine.
//!
//! Everything in this module is a pure, synchronous function of its explicit
//! inputs: no clock reads, no store access, no hidden state. "Today" and
//! "now" are parameters so tests can replay arbitrary date sequences.

pub mod bmi;
pub mod progression;
pub mod stats;
pub mod streak;
pub mod tracking;
pub mod units;
