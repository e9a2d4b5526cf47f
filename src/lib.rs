#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Frequency and unit-conversion helpers shared across modules.
pub mod constants;
/// Shared numerical primitives anchored on `num-complex`.
pub mod math;
/// Strongly typed unit markers and quantity newtypes.
pub mod units;
/// Error types shared between modules.
pub mod errors;
/// Filter branch modeling and the steady-state calculator.
pub mod filter;
/// Display-string report built from a calculation result.
pub mod report;
/// Parameter-file I/O and result artifact writers.
pub mod io;

/// Common exports for downstream users.
pub mod prelude;
