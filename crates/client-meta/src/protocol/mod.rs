//! Protocol-level utilities for the Client-Meta-Information header.

pub mod constants;
pub mod formatter;
pub mod parser;

pub use constants::*;
pub use formatter::*;
pub use parser::*;
