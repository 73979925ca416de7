//! Command-line front end for U-Pallet.
//!
//! This crate provides:
//! - Pallet job definitions, including the stock AZ job
//! - JSON job and CSV order parsing
//! - Text reports of allocation results

mod job;
mod parser;
mod report;

pub use job::{JobInfo, PalletJob};
pub use parser::{JobParser, ParseError};
pub use report::{render_report, Report};
