use std::fmt;

/// A single address reported for a host (`<address addr=".." addrtype=".."/>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    value: String,
    kind: String,
    vendor: String,
}

impl Address {
    pub const IPV4: &'static str = "ipv4";
    pub const IPV6: &'static str = "ipv6";
    pub const MAC: &'static str = "mac";

    pub fn new(value: impl Into<String>, kind: impl Into<String>, vendor: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: kind.into(),
            vendor: vendor.into(),
        }
    }

    /// The literal address, also the key of the address within its host.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The `addrtype` reported by nmap, e.g. "ipv4" or "mac".
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Hardware vendor, only present on MAC addresses. Empty otherwise.
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn is_ipv4(&self) -> bool {
        self.kind == Self::IPV4
    }

    pub fn is_ipv6(&self) -> bool {
        self.kind == Self::IPV6
    }

    pub fn is_mac(&self) -> bool {
        self.kind == Self::MAC
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
