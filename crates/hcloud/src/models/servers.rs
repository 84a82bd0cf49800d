//! Servers and their actions.

use crate::models::images::{Image, ImageType, Iso};
use crate::models::locations::Datacenter;
use crate::models::placement_groups::PlacementGroup;
use crate::models::server_types::ServerType;
use hcloud_core::ids::{
    FirewallId, FloatingIpId, LoadBalancerId, NetworkId, PlacementGroupId, PrimaryIpId, ServerId,
    SshKeyId, VolumeId,
};
use hcloud_core::timestamp::{self, Timestamp};
use hcloud_core::types::{Action, DnsPtr, Labels, ListParams, Meta, Protection};
use hcloud_core::{QueryParams, UrlBuilder};
use serde::{Deserialize, Serialize};

hcloud_core::wire_enum! {
    /// Server state.
    pub enum ServerStatus {
        /// Running
        Running => "running",
        /// Being initialized after creation
        Initializing => "initializing",
        /// Booting
        Starting => "starting",
        /// Shutting down
        Stopping => "stopping",
        /// Powered off
        Off => "off",
        /// Being deleted
        Deleting => "deleting",
        /// Migrating to another host
        Migrating => "migrating",
        /// Being rebuilt
        Rebuilding => "rebuilding",
        /// State unknown to the API
        Unknown => "unknown",
    }
}

hcloud_core::wire_enum! {
    /// Rescue system flavour.
    pub enum RescueType {
        /// 64-bit Linux rescue system
        Linux64 => "linux64",
    }
}

/// Public IPv4 of a server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ipv4 {
    /// Primary IP id
    #[serde(default)]
    pub id: Option<PrimaryIpId>,
    /// Address
    pub ip: String,
    /// Whether the address is blocked
    #[serde(default)]
    pub blocked: bool,
    /// Reverse DNS entry
    #[serde(default)]
    pub dns_ptr: String,
}

/// Public IPv6 network of a server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ipv6 {
    /// Primary IP id
    #[serde(default)]
    pub id: Option<PrimaryIpId>,
    /// Network in CIDR notation
    pub ip: String,
    /// Whether the network is blocked
    #[serde(default)]
    pub blocked: bool,
    /// Reverse DNS entries
    #[serde(default)]
    pub dns_ptr: Vec<DnsPtr>,
}

/// Firewall applied to a server's public interface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerFirewall {
    /// Firewall id
    pub id: FirewallId,
    /// `applied` or `pending`
    #[serde(default)]
    pub status: String,
}

/// Public networking of a server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicNet {
    /// IPv4 address
    #[serde(default)]
    pub ipv4: Option<Ipv4>,
    /// IPv6 network
    #[serde(default)]
    pub ipv6: Option<Ipv6>,
    /// Assigned floating IPs
    #[serde(default)]
    pub floating_ips: Vec<FloatingIpId>,
    /// Applied firewalls
    #[serde(default)]
    pub firewalls: Vec<ServerFirewall>,
}

/// Attachment of a server to a private network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrivateNet {
    /// Network id
    pub network: NetworkId,
    /// Primary address in the network
    pub ip: String,
    /// Additional alias addresses
    #[serde(default)]
    pub alias_ips: Vec<String>,
    /// MAC address of the interface
    #[serde(default)]
    pub mac_address: String,
}

/// A cloud server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Server {
    /// Server id
    pub id: ServerId,
    /// Name
    pub name: String,
    /// State
    pub status: ServerStatus,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created: Timestamp,
    /// Public networking
    #[serde(default)]
    pub public_net: PublicNet,
    /// Private network attachments
    #[serde(default)]
    pub private_net: Vec<PrivateNet>,
    /// Hardware type
    pub server_type: ServerType,
    /// Datacenter the server runs in
    pub datacenter: Datacenter,
    /// Image the server was created from
    #[serde(default)]
    pub image: Option<Image>,
    /// Attached ISO
    #[serde(default)]
    pub iso: Option<Iso>,
    /// Whether the rescue system is enabled for the next boot
    #[serde(default)]
    pub rescue_enabled: bool,
    /// Whether the server is locked by a running action
    #[serde(default)]
    pub locked: bool,
    /// Time window in which backups are taken
    #[serde(default)]
    pub backup_window: Option<String>,
    /// Outgoing traffic of the current billing period, in bytes
    #[serde(default)]
    pub outgoing_traffic: Option<u64>,
    /// Incoming traffic of the current billing period, in bytes
    #[serde(default)]
    pub ingoing_traffic: Option<u64>,
    /// Free traffic included, in bytes
    #[serde(default)]
    pub included_traffic: Option<u64>,
    /// Protection flags
    #[serde(default)]
    pub protection: Protection,
    /// Labels
    #[serde(default)]
    pub labels: Labels,
    /// Attached volumes
    #[serde(default)]
    pub volumes: Vec<VolumeId>,
    /// Load balancers targeting this server
    #[serde(default)]
    pub load_balancers: Vec<LoadBalancerId>,
    /// Primary disk size in GB
    #[serde(default)]
    pub primary_disk_size: Option<u64>,
    /// Placement group the server belongs to
    #[serde(default)]
    pub placement_group: Option<PlacementGroup>,
}

/// Envelope holding a single server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerResponse {
    /// The server
    pub server: Server,
}

/// Paginated server list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerList {
    /// Servers
    #[serde(default)]
    pub servers: Vec<Server>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}

/// Parameters of `GET /servers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerListParams {
    /// Common list parameters
    pub common: ListParams,
    /// Filter by status
    pub status: Option<ServerStatus>,
}

impl QueryParams for ServerListParams {
    fn apply(&self, builder: UrlBuilder) -> UrlBuilder {
        self.common
            .apply(builder)
            .query_param_if_present("status", self.status.as_ref())
    }
}

/// Public interface options when creating a server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateServerPublicNet {
    /// Attach a public IPv4
    #[serde(default = "enabled")]
    pub enable_ipv4: bool,
    /// Attach a public IPv6
    #[serde(default = "enabled")]
    pub enable_ipv6: bool,
    /// Existing primary IPv4 to use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<PrimaryIpId>,
    /// Existing primary IPv6 to use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<PrimaryIpId>,
}

const fn enabled() -> bool {
    true
}

impl Default for CreateServerPublicNet {
    fn default() -> Self {
        Self {
            enable_ipv4: true,
            enable_ipv6: true,
            ipv4: None,
            ipv6: None,
        }
    }
}

/// Firewall reference when creating a server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirewallRef {
    /// Firewall id
    pub firewall: FirewallId,
}

/// Request body of `POST /servers`.
///
/// `server_type` and `image` accept either an id or a name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateServerRequest {
    /// Name
    pub name: String,
    /// Server type id or name
    pub server_type: String,
    /// Image id or name
    pub image: String,
    /// Location name; mutually exclusive with `datacenter`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Datacenter name; mutually exclusive with `location`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<String>,
    /// Start the server after creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_after_create: Option<bool>,
    /// SSH key ids or names to inject
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<String>,
    /// Volumes to attach
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<VolumeId>,
    /// Networks to attach
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<NetworkId>,
    /// Firewalls to apply
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub firewalls: Vec<FirewallRef>,
    /// Cloud-init user data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    /// Mount attached volumes automatically
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automount: Option<bool>,
    /// Labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    /// Placement group to add the server to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement_group: Option<PlacementGroupId>,
    /// Public interface options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_net: Option<CreateServerPublicNet>,
}

/// Response of `POST /servers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateServerResponse {
    /// The created server
    pub server: Server,
    /// Creation action
    pub action: Action,
    /// Follow-up actions
    #[serde(default)]
    pub next_actions: Vec<Action>,
    /// Root password, set when no SSH key was given
    #[serde(default)]
    pub root_password: Option<String>,
}

/// Request body of `PUT /servers/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateServerRequest {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

/// Response of `DELETE /servers/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteServerResponse {
    /// Deletion action
    pub action: Action,
}

/// Response of the `reset_password` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResetPasswordResponse {
    /// New root password
    pub root_password: String,
    /// The action
    pub action: Action,
}

/// Request body of the `enable_rescue` action.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnableRescueRequest {
    /// Rescue system flavour
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RescueType>,
    /// SSH keys to inject into the rescue system
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<SshKeyId>,
}

/// Response of the `enable_rescue` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnableRescueResponse {
    /// Root password of the rescue system, set when no SSH key was given
    #[serde(default)]
    pub root_password: Option<String>,
    /// The action
    pub action: Action,
}

/// Request body of the `rebuild` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RebuildRequest {
    /// Image id or name
    pub image: String,
}

/// Response of the `rebuild` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RebuildResponse {
    /// The action
    pub action: Action,
    /// New root password, set when the image has no SSH key
    #[serde(default)]
    pub root_password: Option<String>,
}

/// Request body of the `change_type` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeTypeRequest {
    /// Target server type id or name
    pub server_type: String,
    /// Grow the disk too; a server with a grown disk cannot be downgraded
    pub upgrade_disk: bool,
}

impl ChangeTypeRequest {
    /// Create a request for the given target type.
    #[must_use]
    pub fn new(server_type: impl Into<String>, upgrade_disk: bool) -> Self {
        Self {
            server_type: server_type.into(),
            upgrade_disk,
        }
    }
}

/// Request body of the `create_image` action.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateImageRequest {
    /// Description of the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `snapshot` or `backup`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ImageType>,
    /// Labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

/// Response of the `create_image` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateImageResponse {
    /// The new image
    pub image: Image,
    /// The action
    pub action: Action,
}

/// Request body of the `attach_iso` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttachIsoRequest {
    /// ISO id or name
    pub iso: String,
}

/// Response of the `request_console` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestConsoleResponse {
    /// VNC-over-websocket URL
    pub wss_url: String,
    /// VNC password
    pub password: String,
    /// The action
    pub action: Action,
}

/// Request body of the `attach_to_network` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttachToNetworkRequest {
    /// Network to attach to
    pub network: NetworkId,
    /// Address to request; picked automatically when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Additional alias addresses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alias_ips: Vec<String>,
}

/// Request body of the `detach_from_network` action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetachFromNetworkRequest {
    /// Network to detach from
    pub network: NetworkId,
}

/// Request body of the `add_to_placement_group` action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddToPlacementGroupRequest {
    /// Placement group to join
    pub placement_group: PlacementGroupId,
}
