//! Scanner Component
//!
//! Walks the working tree of a repository and hands every visible file to a
//! visitor, decoded once. Hidden directories are never entered and hidden
//! files are never read.
//!
//! ## Decoding
//!
//! Files are decoded as UTF-8, then as ISO-8859-15. Files that are neither
//! are sampled: binary files are reduced to their ASCII bytes, text in an
//! unknown encoding is an error.

pub(crate) mod decode;
pub(crate) mod error;
pub(crate) mod walker;

pub mod api;

#[cfg(test)]
mod tests;
