use std::fmt;

use super::service::Service;

pub const STATE_OPEN: &str = "open";
pub const STATE_CLOSED: &str = "closed";

/// One `<port>` entry of a host.
///
/// `id` stays a string: nmap reports IP protocol numbers in the same
/// attribute when running protocol scans.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Port {
    id: String,
    protocol: String,
    state: String,
    service: Service,
}

impl Port {
    pub fn new(
        id: impl Into<String>,
        protocol: impl Into<String>,
        state: impl Into<String>,
        service: Service,
    ) -> Self {
        Self {
            id: id.into(),
            protocol: protocol.into(),
            state: state.into(),
            service,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    pub fn is_open(&self) -> bool {
        self.state == STATE_OPEN
    }

    pub fn is_closed(&self) -> bool {
        self.state == STATE_CLOSED
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.id, self.protocol)
    }
}
