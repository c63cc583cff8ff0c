#![forbid(unsafe_code)]

//! Number formatting for propbind.
//!
//! This crate provides:
//! - [`PrettyFormat`] for compact, human-friendly rendering of numbers
//! - [`PrettyNumber`] for formatting scalars and (nested) sequences alike
//! - [`pretty_number`] as the default-configured entry point

pub mod number;

pub use number::{PrettyFormat, PrettyNumber, pretty_number};
