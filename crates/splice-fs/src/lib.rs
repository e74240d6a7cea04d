//! Document persistence for splice
//!
//! Reads a resource in full, remembers how it was encoded, and commits the
//! edited text back atomically without transcoding.

pub mod checksum;
pub mod document;
pub mod encoding;
pub mod error;
pub mod io;

pub use checksum::Fingerprint;
pub use document::Document;
pub use encoding::TextEncoding;
pub use error::{Error, Result};
pub use io::RobustnessConfig;
