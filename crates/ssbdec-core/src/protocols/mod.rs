//! Barcode payload decoding modules.
//!
//! Each format follows a layered structure:
//! - `layout`: field widths and derived sizes (source of truth)
//! - `reader`: safe bit access and packing conventions
//! - `parser`: domain-level decoding (no direct bit indexing)
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure and contain no I/O; sources and the decode layer handle
//! file access and report assembly.

pub mod ssb;
