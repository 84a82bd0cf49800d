//! Firewalls.

use hcloud_core::ids::{FirewallId, ServerId};
use hcloud_core::timestamp::{self, Timestamp};
use hcloud_core::types::{Action, Labels, ListParams, Meta};
use serde::{Deserialize, Serialize};

hcloud_core::wire_enum! {
    /// Traffic direction of a rule.
    pub enum RuleDirection {
        /// Incoming traffic
        In => "in",
        /// Outgoing traffic
        Out => "out",
    }
}

hcloud_core::wire_enum! {
    /// Protocol matched by a rule.
    pub enum RuleProtocol {
        /// TCP
        Tcp => "tcp",
        /// UDP
        Udp => "udp",
        /// ICMP
        Icmp => "icmp",
        /// ESP
        Esp => "esp",
        /// GRE
        Gre => "gre",
    }
}

hcloud_core::wire_enum! {
    /// Kind of resource a firewall is applied to.
    pub enum FirewallResourceType {
        /// A single server
        Server => "server",
        /// All servers matching a label selector
        LabelSelector => "label_selector",
    }
}

/// A firewall rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirewallRule {
    /// Direction
    pub direction: RuleDirection,
    /// Protocol
    pub protocol: RuleProtocol,
    /// Port or port range, e.g. `80` or `1024-5000`; only for tcp/udp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Source networks in CIDR notation, for `in` rules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_ips: Vec<String>,
    /// Destination networks in CIDR notation, for `out` rules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destination_ips: Vec<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FirewallRule {
    /// Allow incoming traffic from `sources`.
    #[must_use]
    pub fn inbound(protocol: RuleProtocol, port: Option<&str>, sources: Vec<String>) -> Self {
        Self {
            direction: RuleDirection::In,
            protocol,
            port: port.map(str::to_string),
            source_ips: sources,
            destination_ips: Vec::new(),
            description: None,
        }
    }

    /// Allow outgoing traffic to `destinations`.
    #[must_use]
    pub fn outbound(protocol: RuleProtocol, port: Option<&str>, destinations: Vec<String>) -> Self {
        Self {
            direction: RuleDirection::Out,
            protocol,
            port: port.map(str::to_string),
            source_ips: Vec::new(),
            destination_ips: destinations,
            description: None,
        }
    }
}

/// Server reference of a firewall resource.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirewallServerRef {
    /// Server id
    pub id: ServerId,
}

/// Label selector of a firewall resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirewallLabelSelector {
    /// Label selector expression
    pub selector: String,
}

/// A resource a firewall is applied to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirewallResource {
    /// Resource kind
    #[serde(rename = "type")]
    pub kind: FirewallResourceType,
    /// Server, for `server` resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<FirewallServerRef>,
    /// Selector, for `label_selector` resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<FirewallLabelSelector>,
}

impl FirewallResource {
    /// Refer to a single server.
    #[must_use]
    pub const fn server(id: ServerId) -> Self {
        Self {
            kind: FirewallResourceType::Server,
            server: Some(FirewallServerRef { id }),
            label_selector: None,
        }
    }

    /// Refer to all servers matching `selector`.
    #[must_use]
    pub fn label_selector(selector: impl Into<String>) -> Self {
        Self {
            kind: FirewallResourceType::LabelSelector,
            server: None,
            label_selector: Some(FirewallLabelSelector {
                selector: selector.into(),
            }),
        }
    }
}

/// A firewall and where it is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Firewall {
    /// Firewall id
    pub id: FirewallId,
    /// Name
    pub name: String,
    /// Labels
    #[serde(default)]
    pub labels: Labels,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created: Timestamp,
    /// Rules
    #[serde(default)]
    pub rules: Vec<FirewallRule>,
    /// Resources the firewall is applied to
    #[serde(default)]
    pub applied_to: Vec<FirewallResource>,
}

/// Envelope holding a single firewall.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirewallResponse {
    /// The firewall
    pub firewall: Firewall,
}

/// Paginated firewall list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirewallList {
    /// Firewalls
    #[serde(default)]
    pub firewalls: Vec<Firewall>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}

/// Parameters of `GET /firewalls`.
pub type FirewallListParams = ListParams;

/// Request body of `POST /firewalls`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateFirewallRequest {
    /// Name
    pub name: String,
    /// Labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    /// Initial rules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<FirewallRule>,
    /// Resources to apply the firewall to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apply_to: Vec<FirewallResource>,
}

/// Response of `POST /firewalls`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateFirewallResponse {
    /// The created firewall
    pub firewall: Firewall,
    /// Actions applying the firewall
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// Request body of `PUT /firewalls/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateFirewallRequest {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

/// Request body of the `set_rules` action.
///
/// The list replaces all existing rules; an empty list removes them. It is
/// therefore always serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetRulesRequest {
    /// New rules
    pub rules: Vec<FirewallRule>,
}

/// Request body of the `apply_to_resources` action.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplyToResourcesRequest {
    /// Resources to apply the firewall to
    pub apply_to: Vec<FirewallResource>,
}

/// Request body of the `remove_from_resources` action.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoveFromResourcesRequest {
    /// Resources to remove the firewall from
    pub remove_from: Vec<FirewallResource>,
}
