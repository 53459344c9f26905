#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `fingerprint` drives the MD5 digest engine from [`checksums`] over whole
//! byte streams and files: open, read sequentially until end-of-stream,
//! finalize once. The digest identifies file contents for integrity and
//! identity comparison.
//!
//! # Errors
//!
//! The engine itself cannot fail; every error this crate surfaces wraps an
//! [`std::io::Error`] raised while opening or reading the input, tagged with
//! the path involved. See [`FingerprintError`].
//!
//! # Examples
//!
//! ```
//! use fingerprint::fingerprint_reader;
//!
//! let mut reader = &b"abc"[..];
//! let digest = fingerprint_reader(&mut reader).unwrap();
//! assert_eq!(digest.to_string(), "900150983cd24fb0d6963f7d28e17f72");
//! ```

mod error;
mod file;
mod generation;

pub use error::FingerprintError;
pub use file::FileFingerprint;
pub use generation::{
    fingerprint_file, fingerprint_file_in, fingerprint_reader, fingerprint_reader_with_buffer,
};
