use crate::terminal::colors;
use colored::*;
use nmapr_common::network::address::Address;
use nmapr_common::network::hostname::Hostname;
use nmapr_common::network::port::Port;

type Detail = (String, ColoredString);

pub fn state_color(state: &str) -> Color {
    match state {
        "up" | "open" => colors::STATE_GOOD,
        "down" | "closed" => colors::STATE_BAD,
        _ => colors::STATE_UNSURE,
    }
}

pub fn status_to_detail(status: &str) -> Detail {
    let status = if status.is_empty() { "unknown" } else { status };
    ("Status".to_string(), status.color(state_color(status)))
}

fn address_key(address: &Address) -> String {
    match address.kind() {
        Address::IPV4 => "IPv4".to_string(),
        Address::IPV6 => "IPv6".to_string(),
        Address::MAC => "MAC".to_string(),
        "" => "Addr".to_string(),
        other => other.to_string(),
    }
}

pub fn addresses_to_details(addresses: &[Address]) -> Vec<Detail> {
    let mut details = Vec::with_capacity(addresses.len());
    for address in addresses {
        let color = match address.kind() {
            Address::IPV4 => colors::IPV4_ADDR,
            Address::IPV6 => colors::IPV6_ADDR,
            Address::MAC => colors::MAC_ADDR,
            _ => colors::TEXT_DEFAULT,
        };
        details.push((address_key(address), address.value().color(color)));

        if !address.vendor().is_empty() {
            details.push(("Vendor".to_string(), address.vendor().normal()));
        }
    }
    details
}

pub fn hostnames_to_details(hostnames: &[Hostname]) -> Vec<Detail> {
    hostnames
        .iter()
        .map(|hostname| {
            let value = match hostname.kind() {
                "" => hostname.name().normal(),
                kind => format!("{} ({})", hostname.name(), kind.color(colors::SEPARATOR)).normal(),
            };
            ("Name".to_string(), value)
        })
        .collect()
}

/// `22/tcp` → `open ssh OpenSSH 9.6`
pub fn port_to_detail(port: &Port) -> Detail {
    let service = port.service();
    let mut value = port.state().color(state_color(port.state())).to_string();
    for part in [service.name(), service.product(), service.version()] {
        if !part.is_empty() {
            value.push(' ');
            value.push_str(part);
        }
    }
    (port.to_string(), value.normal())
}
