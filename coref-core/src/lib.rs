//! # coref-core
//!
//! Core types shared by the coref crates.
//!
//! This crate provides:
//! - **Mentions**: `Mention`, `MentionClass`, the immutable value type the
//!   clustering pipeline uses as graph and map keys
//! - **Documents**: `AnnotatedDocument`, the record handed over by an upstream
//!   mention detector
//! - **Errors**: `Error`, `Result`

#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod mention;

pub use document::AnnotatedDocument;
pub use error::{Error, Result};
pub use mention::{Mention, MentionClass};
