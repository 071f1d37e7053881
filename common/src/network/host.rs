//! # Host Model
//!
//! The primary entity of a scan result: one endpoint and everything nmap
//! reported about it.

use super::address::Address;
use super::hostname::Hostname;
use super::port::Port;

/// A scanned host.
///
/// Addresses behave like an insertion-ordered map keyed by
/// [`Address::value`]. Hostnames and ports keep report order and are never
/// deduplicated or sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    addresses: Vec<Address>,
    status: String,
    hostnames: Vec<Hostname>,
    ports: Vec<Port>,
}

impl Host {
    /// Builds a host from the entries in report order.
    ///
    /// NOTE: an address whose value was already seen replaces the earlier
    /// entry (last write wins) and keeps its position. This drops data when
    /// nmap reports the same value twice with different types or vendors;
    /// the behaviour is kept for compatibility with existing consumers.
    pub fn new(
        addresses: impl IntoIterator<Item = Address>,
        status: impl Into<String>,
        hostnames: Vec<Hostname>,
        ports: Vec<Port>,
    ) -> Self {
        let mut keyed: Vec<Address> = Vec::new();
        for address in addresses {
            match keyed.iter_mut().find(|known| known.value() == address.value()) {
                Some(slot) => *slot = address,
                None => keyed.push(address),
            }
        }

        Self {
            addresses: keyed,
            status: status.into(),
            hostnames,
            ports,
        }
    }

    /// All addresses, unique by value, in the order they first appeared.
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Looks up an address by its value.
    pub fn address(&self, value: &str) -> Option<&Address> {
        self.addresses.iter().find(|a| a.value() == value)
    }

    /// The `state` of the host's `<status>` element ("up", "down", ...).
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn hostnames(&self) -> &[Hostname] {
        &self.hostnames
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn ipv4_addresses(&self) -> impl Iterator<Item = &Address> {
        self.addresses.iter().filter(|a| a.is_ipv4())
    }

    pub fn ipv6_addresses(&self) -> impl Iterator<Item = &Address> {
        self.addresses.iter().filter(|a| a.is_ipv6())
    }

    pub fn mac_addresses(&self) -> impl Iterator<Item = &Address> {
        self.addresses.iter().filter(|a| a.is_mac())
    }

    pub fn open_ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(|p| p.is_open())
    }

    pub fn closed_ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(|p| p.is_closed())
    }
}
