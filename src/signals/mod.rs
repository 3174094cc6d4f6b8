//! Signal types and traits.
//!
//! This module provides the core signal abstractions used throughout the
//! library:
//! - `Signal` trait for all signal sources and combinators
//! - `Param` type for fixed or modulated parameters
//! - `ConstantSignal` for fixed values
//! - `FnSignal` for closures over time

mod signal;

pub use signal::{ConstantSignal, FnSignal, Param, Signal, signal_fn};
