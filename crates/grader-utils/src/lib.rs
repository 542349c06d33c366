//! Byte-level helpers shared by the input crates.

pub mod archive;
pub mod encoding;
