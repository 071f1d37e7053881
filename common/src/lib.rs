//! Shared types for `nmapr`.
//!
//! * [`network`]: the parsed scan result tree (hosts, addresses, ports, ...).
//! * [`config`]: the options that shape an nmap invocation.
//! * [`output`]: the report file handed to nmap through `-oX`.

pub mod config;
pub mod network;
pub mod output;
