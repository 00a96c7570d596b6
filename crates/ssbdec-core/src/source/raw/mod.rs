//! Raw payload file source.
//!
//! This module provides a `PayloadSource` backed by already-extracted
//! barcode payload files: either one raw binary payload per file, or a hex
//! text file carrying one payload per line. It handles file I/O and format
//! sniffing, emitting raw payload events for the decode pipeline.

pub mod error;
pub mod parser;
pub mod reader;

pub use parser::RawFileSource;
