//! Floating IPs.

use crate::models::locations::Location;
use hcloud_core::ids::{FloatingIpId, ServerId};
use hcloud_core::timestamp::{self, Timestamp};
use hcloud_core::types::{Action, DnsPtr, Labels, ListParams, Meta, Protection};
use serde::{Deserialize, Serialize};

hcloud_core::wire_enum! {
    /// IP protocol version of a floating or primary IP.
    pub enum IpType {
        /// IPv4 address
        Ipv4 => "ipv4",
        /// IPv6 network
        Ipv6 => "ipv6",
    }
}

/// A floating IP that can be moved between servers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloatingIp {
    /// Floating IP id
    pub id: FloatingIpId,
    /// Unique name
    #[serde(default)]
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Address (IPv4) or network (IPv6)
    pub ip: String,
    /// Protocol version
    #[serde(rename = "type")]
    pub kind: IpType,
    /// Server the IP is assigned to
    #[serde(default)]
    pub server: Option<ServerId>,
    /// Reverse DNS entries
    #[serde(default)]
    pub dns_ptr: Vec<DnsPtr>,
    /// Home location, where the IP is routed when unassigned
    pub home_location: Location,
    /// Whether the IP is blocked
    #[serde(default)]
    pub blocked: bool,
    /// Protection flags
    #[serde(default)]
    pub protection: Protection,
    /// Labels
    #[serde(default)]
    pub labels: Labels,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created: Timestamp,
}

/// Envelope holding a single floating IP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloatingIpResponse {
    /// The floating IP
    pub floating_ip: FloatingIp,
}

/// Paginated floating IP list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloatingIpList {
    /// Floating IPs
    #[serde(default)]
    pub floating_ips: Vec<FloatingIp>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}

/// Parameters of `GET /floating_ips`.
pub type FloatingIpListParams = ListParams;

/// Request body of `POST /floating_ips`.
///
/// One of `home_location` or `server` must be set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateFloatingIpRequest {
    /// Protocol version
    #[serde(rename = "type")]
    pub kind: IpType,
    /// Name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Home location name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_location: Option<String>,
    /// Server to assign the IP to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerId>,
    /// Labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

impl CreateFloatingIpRequest {
    /// Create a request for an IP of the given version homed in `location`.
    #[must_use]
    pub fn in_location(kind: IpType, location: impl Into<String>) -> Self {
        Self {
            kind,
            name: None,
            description: None,
            home_location: Some(location.into()),
            server: None,
            labels: None,
        }
    }
}

/// Response of `POST /floating_ips`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateFloatingIpResponse {
    /// The created floating IP
    pub floating_ip: FloatingIp,
    /// Assignment action, when created for a server
    #[serde(default)]
    pub action: Option<Action>,
}

/// Request body of `PUT /floating_ips/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateFloatingIpRequest {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

/// Request body of the `assign` action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignFloatingIpRequest {
    /// Target server
    pub server: ServerId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_body() {
        let request = CreateFloatingIpRequest::in_location(IpType::Ipv4, "fsn1");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"type":"ipv4","home_location":"fsn1"}"#
        );
    }

    #[test]
    fn ip_type_unknown_value() {
        let kind: IpType = serde_json::from_str(r#""ipv8""#).unwrap();
        assert!(kind.is_unrecognized());
        assert_eq!(serde_json::to_string(&kind).unwrap(), r#""ipv8""#);
    }
}
