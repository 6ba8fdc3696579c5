//! relpath-core: rewrite path lists relative to a target directory
//!
//! Build systems like to hand out absolute paths. Tools downstream often want
//! them relative to some output directory instead. This crate does that
//! conversion, one line at a time, without ever asking the filesystem what is
//! really there.
//!
//! ## Pieces
//!
//! - [`normalize`]: lexical `.`/`..` resolution and anchoring to a working directory
//! - [`relativize`]: the [`Relativizer`](relativize::Relativizer) and the free
//!   [`relative_path`](relativize::relative_path) helper
//! - [`lines`]: streaming readers over list files and standard input
//! - [`output`]: plain and NDJSON writers plus the run loop
//!
//! ## Example
//!
//! ```rust
//! use std::path::{Path, PathBuf};
//! use relpath_core::relativize::Relativizer;
//!
//! let relativizer = Relativizer::new("/a/b", "/");
//! assert_eq!(relativizer.relativize("/a/c/d.txt"), PathBuf::from("../c/d.txt"));
//! assert_eq!(relativizer.relativize_path(Path::new("/a/b")), PathBuf::from("."));
//! ```
//!
//! Symlinks are never resolved and paths are never checked for existence.

pub mod error;
pub mod lines;
pub mod normalize;
pub mod output;
pub mod relativize;

pub use error::{RelpathError, Result};
