//! Scanner API
//!
//! Public surface of the scanner: the repository walker, the file decoding
//! helpers and the scan errors.

pub use crate::scanner::decode::{decode, decode_latin9, is_binary, read_file};
pub use crate::scanner::error::{ScanError, ScanResult};
pub use crate::scanner::walker::{is_hidden, RepositoryScanner};
