//! Command implementations behind the `cus` binary.
//!
//! Each command lives in [`commands`] with an `execute` entry point; the
//! binary only parses arguments, sets up logging and reports errors.

pub mod commands;
