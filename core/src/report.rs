//! # nmap XML Report Decoder
//!
//! Decodes the document nmap writes with `-oX` into [`Host`] models.
//!
//! Decoding is tolerant: any attribute or element the model expects but the
//! report leaves out becomes an empty string or an empty list. Only an
//! unreadable file or a document that is not well-formed XML is an error, and
//! in that case no host is returned at all.

use std::path::{Path, PathBuf};

use nmapr_common::network::address::Address;
use nmapr_common::network::host::Host;
use nmapr_common::network::hostname::Hostname;
use nmapr_common::network::port::Port;
use nmapr_common::network::service::Service;
use roxmltree::{Document, Node, ParsingOptions};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read report {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed report: {0}")]
    Malformed(#[from] roxmltree::Error),
}

/// Reads and decodes the report at `path`.
pub fn parse_file(path: &Path) -> Result<Vec<Host>, ParseError> {
    let xml = std::fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_str(&xml)
}

/// Decodes a report held in memory.
///
/// Every `<host>` directly under the root element yields one [`Host`], in
/// document order.
pub fn parse_str(xml: &str) -> Result<Vec<Host>, ParseError> {
    // nmap reports start with `<!DOCTYPE nmaprun>`.
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;

    let doc = Document::parse_with_options(xml, options)?;

    let hosts: Vec<Host> = children(doc.root_element(), "host").map(parse_host).collect();

    debug!("Decoded {} hosts from report", hosts.len());
    Ok(hosts)
}

fn parse_host(node: Node) -> Host {
    let status = child(node, "status")
        .map(|status| attr(status, "state"))
        .unwrap_or_default();

    let hostnames: Vec<Hostname> = child(node, "hostnames")
        .map(|list| children(list, "hostname").map(parse_hostname).collect())
        .unwrap_or_default();

    let ports: Vec<Port> = child(node, "ports")
        .map(|list| children(list, "port").map(parse_port).collect())
        .unwrap_or_default();

    Host::new(parse_addresses(node), status, hostnames, ports)
}

/// `address` elements are matched at any depth below the host.
fn parse_addresses(node: Node) -> Vec<Address> {
    node.descendants()
        .filter(|n| n.has_tag_name("address"))
        .map(|n| Address::new(attr(n, "addr"), attr(n, "addrtype"), attr(n, "vendor")))
        .collect()
}

fn parse_hostname(node: Node) -> Hostname {
    Hostname::new(attr(node, "name"), attr(node, "type"))
}

fn parse_port(node: Node) -> Port {
    let state = child(node, "state")
        .map(|state| attr(state, "state"))
        .unwrap_or_default();

    let service = child(node, "service")
        .map(|svc| Service::new(attr(svc, "name"), attr(svc, "product"), attr(svc, "version")))
        .unwrap_or_default();

    Port::new(attr(node, "portid"), attr(node, "protocol"), state, service)
}

/// First direct child element named `tag`.
fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(tag))
}

fn children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |n| n.has_tag_name(tag))
}

fn attr(node: Node, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}
