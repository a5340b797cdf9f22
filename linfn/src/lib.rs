#![deny(warnings)]

//! Parsing and evaluation of single-variable linear functions.
//!
//! ```
//! let f: linfn::LinearFunction = "3 - 2x".parse().unwrap();
//! assert_eq!(f.slope(), -2.0);
//! assert_eq!(f.intercept(), 3.0);
//! assert_eq!(f.root(), 1.5);
//! assert!(f.decreasing());
//! assert!(!linfn::is_valid("0x+3"));
//! ```

pub mod scanner;
pub mod grammar;
mod parser;
mod function;
mod error;

pub use error::{ParseError, Result};
pub use function::LinearFunction;
pub use grammar::{Grammar, is_valid};
pub use parser::parse;

#[cfg(test)]
mod scanner_test;
