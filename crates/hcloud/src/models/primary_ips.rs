//! Primary IPs.

use crate::models::floating_ips::IpType;
use crate::models::locations::Datacenter;
use hcloud_core::ids::PrimaryIpId;
use hcloud_core::timestamp::{self, Timestamp};
use hcloud_core::types::{Action, DnsPtr, Labels, ListParams, Meta, Protection};
use hcloud_core::{QueryParams, UrlBuilder};
use serde::{Deserialize, Serialize};

hcloud_core::wire_enum! {
    /// Kind of resource a primary IP is assigned to.
    pub enum AssigneeType {
        /// Server
        Server => "server",
    }
}

/// A primary IP bound to a datacenter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrimaryIp {
    /// Primary IP id
    pub id: PrimaryIpId,
    /// Unique name
    pub name: String,
    /// Address (IPv4) or network (IPv6)
    pub ip: String,
    /// Protocol version
    #[serde(rename = "type")]
    pub kind: IpType,
    /// Id of the resource the IP is assigned to
    #[serde(default)]
    pub assignee_id: Option<i64>,
    /// Kind of the assignee
    pub assignee_type: AssigneeType,
    /// Delete the IP together with its assignee
    #[serde(default)]
    pub auto_delete: bool,
    /// Whether the IP is blocked
    #[serde(default)]
    pub blocked: bool,
    /// Datacenter the IP belongs to
    pub datacenter: Datacenter,
    /// Reverse DNS entries
    #[serde(default)]
    pub dns_ptr: Vec<DnsPtr>,
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

/// Envelope holding a single primary IP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrimaryIpResponse {
    /// The primary IP
    pub primary_ip: PrimaryIp,
}

/// Paginated primary IP list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrimaryIpList {
    /// Primary IPs
    #[serde(default)]
    pub primary_ips: Vec<PrimaryIp>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}

/// Parameters of `GET /primary_ips`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimaryIpListParams {
    /// Common list parameters
    pub common: ListParams,
    /// Filter by exact address
    pub ip: Option<String>,
}

impl QueryParams for PrimaryIpListParams {
    fn apply(&self, builder: UrlBuilder) -> UrlBuilder {
        self.common
            .apply(builder)
            .query_param_if_present("ip", self.ip.as_deref())
    }
}

/// Request body of `POST /primary_ips`.
///
/// One of `datacenter` or `assignee_id` must be set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePrimaryIpRequest {
    /// Name
    pub name: String,
    /// Protocol version
    #[serde(rename = "type")]
    pub kind: IpType,
    /// Kind of the assignee
    pub assignee_type: AssigneeType,
    /// Resource to assign the IP to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,
    /// Datacenter name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<String>,
    /// Delete the IP together with its assignee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_delete: Option<bool>,
    /// Labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

/// Response of `POST /primary_ips`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatePrimaryIpResponse {
    /// The created primary IP
    pub primary_ip: PrimaryIp,
    /// Assignment action, when created for a resource
    #[serde(default)]
    pub action: Option<Action>,
}

/// Request body of `PUT /primary_ips/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatePrimaryIpRequest {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Delete the IP together with its assignee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_delete: Option<bool>,
    /// Replacement labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

/// Request body of the `assign` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignPrimaryIpRequest {
    /// Resource to assign the IP to
    pub assignee_id: i64,
    /// Kind of the assignee
    pub assignee_type: AssigneeType,
}
