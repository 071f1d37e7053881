//! # nmapr engine
//!
//! Runs nmap and turns its XML report into [`nmapr_common::network`] models.
//!
//! The pipeline has three stages, each in its own module:
//! * [`command`]: builds the argument list from [`nmapr_common::config::ScanOptions`].
//! * [`executor`]: runs the argument list as a process, bounded by a timeout.
//! * [`report`]: decodes the `-oX` report into hosts.
//!
//! [`scanner::Nmap`] chains them together.

pub mod command;
pub mod error;
pub mod executor;
pub mod report;
pub mod scanner;

pub use error::{Result, ScanError};
pub use scanner::Nmap;
