//! Encoding and writing of embeddable shader artifacts.
//!
//! Compiled SPIR-V is stored as a comma-separated sequence of hex byte
//! literals so the engine build can paste it into a byte-array initializer.
//! Writes are content-aware: an artifact file's modification time changes
//! only when its content actually changes.

#![warn(missing_docs)]

pub mod encode;
pub mod writer;

pub use encode::hex_literals;
pub use writer::{write_if_changed, WriteOutcome};
