//! Load balancers, their targets and services.

use crate::models::locations::Location;
use crate::models::pricing::PricePerLocation;
use hcloud_core::ids::{CertificateId, LoadBalancerId, LoadBalancerTypeId, NetworkId, ServerId};
use hcloud_core::timestamp::{self, Timestamp};
use hcloud_core::types::{Action, Labels, ListParams, Meta, Protection};
use serde::{Deserialize, Serialize};

hcloud_core::wire_enum! {
    /// Balancing algorithm.
    pub enum AlgorithmType {
        /// Rotate through targets
        RoundRobin => "round_robin",
        /// Pick the target with the fewest open connections
        LeastConnections => "least_connections",
    }
}

hcloud_core::wire_enum! {
    /// Kind of load balancer target.
    pub enum TargetType {
        /// A single server
        Server => "server",
        /// All servers matching a label selector
        LabelSelector => "label_selector",
        /// An IP address
        Ip => "ip",
    }
}

hcloud_core::wire_enum! {
    /// Protocol of a service or health check.
    pub enum LbProtocol {
        /// Plain TCP
        Tcp => "tcp",
        /// HTTP
        Http => "http",
        /// HTTPS
        Https => "https",
    }
}

hcloud_core::wire_enum! {
    /// Health of a target on a listen port.
    pub enum HealthStatusValue {
        /// Passing health checks
        Healthy => "healthy",
        /// Failing health checks
        Unhealthy => "unhealthy",
        /// Not yet checked
        Unknown => "unknown",
    }
}

/// Balancing algorithm wrapper as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Algorithm {
    /// Algorithm type
    #[serde(rename = "type")]
    pub kind: AlgorithmType,
}

/// Target server reference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetServer {
    /// Server id
    pub id: ServerId,
}

/// Target label selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetLabelSelector {
    /// Label selector expression
    pub selector: String,
}

/// Target IP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetIp {
    /// IP address
    pub ip: String,
}

/// Health of a target on one listen port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    /// Listen port of the service
    pub listen_port: u16,
    /// Health
    pub status: HealthStatusValue,
}

/// A load balancer target as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadBalancerTarget {
    /// Target kind
    #[serde(rename = "type")]
    pub kind: TargetType,
    /// Server, for `server` targets
    #[serde(default)]
    pub server: Option<TargetServer>,
    /// Selector, for `label_selector` targets
    #[serde(default)]
    pub label_selector: Option<TargetLabelSelector>,
    /// Address, for `ip` targets
    #[serde(default)]
    pub ip: Option<TargetIp>,
    /// Route traffic over the private network
    #[serde(default)]
    pub use_private_ip: bool,
    /// Per-port health
    #[serde(default)]
    pub health_status: Vec<HealthStatus>,
    /// Servers resolved from a label selector
    #[serde(default)]
    pub targets: Vec<LoadBalancerTarget>,
}

/// Request body of the `add_target` and `remove_target` actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetRequest {
    /// Target kind
    #[serde(rename = "type")]
    pub kind: TargetType,
    /// Server, for `server` targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<TargetServer>,
    /// Selector, for `label_selector` targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<TargetLabelSelector>,
    /// Address, for `ip` targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<TargetIp>,
    /// Route traffic over the private network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_private_ip: Option<bool>,
}

impl TargetRequest {
    /// Target a single server.
    #[must_use]
    pub const fn server(id: ServerId) -> Self {
        Self {
            kind: TargetType::Server,
            server: Some(TargetServer { id }),
            label_selector: None,
            ip: None,
            use_private_ip: None,
        }
    }

    /// Target all servers matching `selector`.
    #[must_use]
    pub fn label_selector(selector: impl Into<String>) -> Self {
        Self {
            kind: TargetType::LabelSelector,
            server: None,
            label_selector: Some(TargetLabelSelector {
                selector: selector.into(),
            }),
            ip: None,
            use_private_ip: None,
        }
    }

    /// Target an IP address.
    #[must_use]
    pub fn ip(ip: impl Into<String>) -> Self {
        Self {
            kind: TargetType::Ip,
            server: None,
            label_selector: None,
            ip: Some(TargetIp { ip: ip.into() }),
            use_private_ip: None,
        }
    }

    /// Route traffic over the private network.
    #[must_use]
    pub const fn with_private_ip(mut self, use_private_ip: bool) -> Self {
        self.use_private_ip = Some(use_private_ip);
        self
    }
}

/// HTTP settings of a health check.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthCheckHttp {
    /// Host header to send
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Request path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Expected response body substring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Accepted status codes, e.g. `2??`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_codes: Vec<String>,
    /// Use HTTPS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
}

/// Health check of a service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthCheck {
    /// Protocol
    pub protocol: LbProtocol,
    /// Port checked on the targets
    pub port: u16,
    /// Interval in seconds
    pub interval: u32,
    /// Timeout in seconds
    pub timeout: u32,
    /// Failed checks before a target is unhealthy
    pub retries: u32,
    /// HTTP settings, for `http` checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HealthCheckHttp>,
}

/// HTTP settings of a service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceHttp {
    /// Sticky-session cookie name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_name: Option<String>,
    /// Sticky-session cookie lifetime in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_lifetime: Option<u32>,
    /// Certificates for `https` services
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certificates: Vec<CertificateId>,
    /// Redirect HTTP to HTTPS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_http: Option<bool>,
    /// Enable sticky sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticky_sessions: Option<bool>,
}

/// A service exposed by a load balancer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadBalancerService {
    /// Protocol
    pub protocol: LbProtocol,
    /// Port the load balancer listens on
    pub listen_port: u16,
    /// Port traffic is forwarded to
    pub destination_port: u16,
    /// Use the PROXY protocol
    #[serde(default)]
    pub proxyprotocol: bool,
    /// Health check
    pub health_check: HealthCheck,
    /// HTTP settings, for `http`/`https` services
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<ServiceHttp>,
}

/// Request body of the `update_service` action.
///
/// Only `listen_port` is required; it selects the service to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateServiceRequest {
    /// Listen port of the service to update
    pub listen_port: u16,
    /// New protocol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<LbProtocol>,
    /// New destination port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_port: Option<u16>,
    /// Use the PROXY protocol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxyprotocol: Option<bool>,
    /// New health check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check: Option<HealthCheck>,
    /// New HTTP settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<ServiceHttp>,
}

/// Request body of the `delete_service` action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteServiceRequest {
    /// Listen port of the service to delete
    pub listen_port: u16,
}

/// A load balancer type (plan).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadBalancerType {
    /// Load balancer type id
    pub id: LoadBalancerTypeId,
    /// Unique name, e.g. `lb11`
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Maximum concurrent connections
    pub max_connections: u64,
    /// Maximum number of services
    pub max_services: u32,
    /// Maximum number of targets
    pub max_targets: u32,
    /// Maximum number of certificates
    pub max_assigned_certificates: u32,
    /// When the type was deprecated
    #[serde(default, with = "timestamp::option")]
    pub deprecated: Option<Timestamp>,
    /// Prices per location
    #[serde(default)]
    pub prices: Vec<PricePerLocation>,
}

/// Envelope holding a single load balancer type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadBalancerTypeResponse {
    /// The load balancer type
    pub load_balancer_type: LoadBalancerType,
}

/// Paginated load balancer type list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadBalancerTypeList {
    /// Load balancer types
    #[serde(default)]
    pub load_balancer_types: Vec<LoadBalancerType>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}

/// Public IPv4 of a load balancer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LbIpv4 {
    /// Address
    #[serde(default)]
    pub ip: Option<String>,
    /// Reverse DNS entry
    #[serde(default)]
    pub dns_ptr: Option<String>,
}

/// Public IPv6 of a load balancer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LbIpv6 {
    /// Address
    #[serde(default)]
    pub ip: Option<String>,
    /// Reverse DNS entry
    #[serde(default)]
    pub dns_ptr: Option<String>,
}

/// Public interface of a load balancer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LbPublicNet {
    /// Whether the public interface is enabled
    #[serde(default)]
    pub enabled: bool,
    /// IPv4 address
    #[serde(default)]
    pub ipv4: LbIpv4,
    /// IPv6 address
    #[serde(default)]
    pub ipv6: LbIpv6,
}

/// Attachment of a load balancer to a private network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LbPrivateNet {
    /// Network id
    pub network: NetworkId,
    /// Address in the network
    pub ip: String,
}

/// A load balancer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadBalancer {
    /// Load balancer id
    pub id: LoadBalancerId,
    /// Name
    pub name: String,
    /// Public interface
    #[serde(default)]
    pub public_net: LbPublicNet,
    /// Private network attachments
    #[serde(default)]
    pub private_net: Vec<LbPrivateNet>,
    /// Location
    pub location: Location,
    /// Plan
    pub load_balancer_type: LoadBalancerType,
    /// Protection flags
    #[serde(default)]
    pub protection: Protection,
    /// Labels
    #[serde(default)]
    pub labels: Labels,
    /// Targets
    #[serde(default)]
    pub targets: Vec<LoadBalancerTarget>,
    /// Services
    #[serde(default)]
    pub services: Vec<LoadBalancerService>,
    /// Balancing algorithm
    pub algorithm: Algorithm,
    /// Outgoing traffic of the current billing period, in bytes
    #[serde(default)]
    pub outgoing_traffic: Option<u64>,
    /// Incoming traffic of the current billing period, in bytes
    #[serde(default)]
    pub ingoing_traffic: Option<u64>,
    /// Free traffic included, in bytes
    #[serde(default)]
    pub included_traffic: Option<u64>,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created: Timestamp,
}

/// Envelope holding a single load balancer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadBalancerResponse {
    /// The load balancer
    pub load_balancer: LoadBalancer,
}

/// Paginated load balancer list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadBalancerList {
    /// Load balancers
    #[serde(default)]
    pub load_balancers: Vec<LoadBalancer>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}

/// Parameters of `GET /load_balancers`.
pub type LoadBalancerListParams = ListParams;

/// Request body of `POST /load_balancers`.
///
/// One of `location` or `network_zone` must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateLoadBalancerRequest {
    /// Name
    pub name: String,
    /// Load balancer type id or name
    pub load_balancer_type: String,
    /// Balancing algorithm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
    /// Location name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Network zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_zone: Option<String>,
    /// Network to attach to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkId>,
    /// Enable the public interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_interface: Option<bool>,
    /// Initial services
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<LoadBalancerService>,
    /// Initial targets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<TargetRequest>,
    /// Labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

/// Response of `POST /load_balancers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateLoadBalancerResponse {
    /// The created load balancer
    pub load_balancer: LoadBalancer,
    /// Creation action
    pub action: Action,
}

/// Request body of `PUT /load_balancers/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateLoadBalancerRequest {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

/// Request body of the `change_type` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeLoadBalancerTypeRequest {
    /// Target load balancer type id or name
    pub load_balancer_type: String,
}

/// Request body of the `attach_to_network` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttachLoadBalancerToNetworkRequest {
    /// Network to attach to
    pub network: NetworkId,
    /// Address to request; picked automatically when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

/// Request body of the `detach_from_network` action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetachLoadBalancerFromNetworkRequest {
    /// Network to detach from
    pub network: NetworkId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_request_shapes() {
        assert_eq!(
            serde_json::to_string(&TargetRequest::server(ServerId::new(80))).unwrap(),
            r#"{"type":"server","server":{"id":80}}"#
        );
        assert_eq!(
            serde_json::to_string(&TargetRequest::label_selector("env=prod").with_private_ip(true))
                .unwrap(),
            r#"{"type":"label_selector","label_selector":{"selector":"env=prod"},"use_private_ip":true}"#
        );
        assert_eq!(
            serde_json::to_string(&TargetRequest::ip("203.0.113.1")).unwrap(),
            r#"{"type":"ip","ip":{"ip":"203.0.113.1"}}"#
        );
    }

    #[test]
    fn service_decodes_with_health_check() {
        let json = r#"{
            "protocol": "http", "listen_port": 80, "destination_port": 8080, "proxyprotocol": false,
            "health_check": {"protocol": "http", "port": 8080, "interval": 15, "timeout": 10, "retries": 3,
                "http": {"domain": "example.com", "path": "/", "response": null, "status_codes": ["2??"], "tls": false}},
            "http": {"cookie_name": "HCLBSTICKY", "cookie_lifetime": 300, "certificates": [], "redirect_http": false, "sticky_sessions": false}
        }"#;
        let service: LoadBalancerService = serde_json::from_str(json).unwrap();
        assert_eq!(service.protocol, LbProtocol::Http);
        assert_eq!(service.health_check.retries, 3);
        let http = service.health_check.http.unwrap();
        assert_eq!(http.status_codes, vec!["2??".to_string()]);
        assert!(http.response.is_none());
    }

    #[test]
    fn update_service_only_sends_changes() {
        let request = UpdateServiceRequest {
            listen_port: 443,
            destination_port: Some(8443),
            ..UpdateServiceRequest::default()
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"listen_port":443,"destination_port":8443}"#
        );
    }
}
