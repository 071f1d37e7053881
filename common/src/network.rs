//! # Scan Result Model
//!
//! Value objects decoded from an nmap XML report. A [`host::Host`] owns its
//! addresses, hostnames and ports; nothing mutates them after the report
//! parser has built them.

pub mod address;
pub mod host;
pub mod hostname;
pub mod port;
pub mod service;
