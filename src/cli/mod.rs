//! Command-line interface module
//!
//! Implements the note creation pipeline driven by the clap arguments in
//! `main.rs`.

pub mod new;
