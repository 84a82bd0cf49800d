//! Private networks.

use hcloud_core::ids::{LoadBalancerId, NetworkId, ServerId};
use hcloud_core::timestamp::{self, Timestamp};
use hcloud_core::types::{Labels, ListParams, Meta, Protection};
use serde::{Deserialize, Serialize};

hcloud_core::wire_enum! {
    /// Kind of subnet.
    pub enum SubnetType {
        /// Cloud servers and load balancers
        Cloud => "cloud",
        /// Legacy alias of `cloud`
        Server => "server",
        /// Connection to a dedicated-server vSwitch
        Vswitch => "vswitch",
    }
}

/// A subnet of a network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subnet {
    /// Kind of subnet
    #[serde(rename = "type")]
    pub kind: SubnetType,
    /// IP range in CIDR notation; picked automatically when unset on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_range: Option<String>,
    /// Network zone, e.g. `eu-central`
    pub network_zone: String,
    /// Gateway of the subnet (read-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    /// vSwitch id for `vswitch` subnets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vswitch_id: Option<i64>,
}

/// A static route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Route {
    /// Destination network in CIDR notation
    pub destination: String,
    /// Gateway IP inside the network
    pub gateway: String,
}

/// A private network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Network {
    /// Network id
    pub id: NetworkId,
    /// Name
    pub name: String,
    /// IP range in CIDR notation
    pub ip_range: String,
    /// Subnets
    #[serde(default)]
    pub subnets: Vec<Subnet>,
    /// Routes
    #[serde(default)]
    pub routes: Vec<Route>,
    /// Attached servers
    #[serde(default)]
    pub servers: Vec<ServerId>,
    /// Attached load balancers
    #[serde(default)]
    pub load_balancers: Vec<LoadBalancerId>,
    /// Protection flags
    #[serde(default)]
    pub protection: Protection,
    /// Labels
    #[serde(default)]
    pub labels: Labels,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created: Timestamp,
    /// Whether routes are exported to a connected vSwitch
    #[serde(default)]
    pub expose_routes_to_vswitch: bool,
}

/// Envelope holding a single network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkResponse {
    /// The network
    pub network: Network,
}

/// Paginated network list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkList {
    /// Networks
    #[serde(default)]
    pub networks: Vec<Network>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}

/// Parameters of `GET /networks`.
pub type NetworkListParams = ListParams;

/// Request body of `POST /networks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateNetworkRequest {
    /// Name
    pub name: String,
    /// IP range in CIDR notation
    pub ip_range: String,
    /// Initial subnets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<Subnet>,
    /// Initial routes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<Route>,
    /// Labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    /// Export routes to a connected vSwitch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expose_routes_to_vswitch: Option<bool>,
}

/// Request body of `PUT /networks/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateNetworkRequest {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    /// Export routes to a connected vSwitch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expose_routes_to_vswitch: Option<bool>,
}

/// Request body of the `delete_subnet` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteSubnetRequest {
    /// IP range of the subnet to delete
    pub ip_range: String,
}

/// Request body of the `change_ip_range` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeIpRangeRequest {
    /// New, larger IP range
    pub ip_range: String,
}
