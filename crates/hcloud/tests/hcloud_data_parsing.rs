//! Integration tests for parsing Hetzner Cloud API data.
//!
//! These tests validate that the hcloud models deserialize complete API
//! responses, tolerate fields they do not know, and survive a serialize and
//! deserialize cycle unchanged.

use hcloud::models::{
    CertificateResponse, DatacenterResponse, HealthStatusValue, ImageResponse, ImageType,
    LbProtocol, LoadBalancerResponse, LocationResponse, MetricsResponse, NetworkResponse,
    PlacementGroupResponse, PricingResponse, PrimaryIpResponse, ServerResponse, ServerStatus,
    ServerTypeResponse, SshKeyResponse, TargetType, VolumeResponse,
};
use hcloud::{ActionList, ActionStatus, ErrorCode, ResourceType, ServerId};
use hcloud_core::error::ErrorResponse;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::fs;
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

#[test]
fn test_deserialize_full_server() {
    let json_data = load_fixture("server.json");
    let response: ServerResponse = serde_json::from_str(&json_data)
        .unwrap_or_else(|e| panic!("Failed to deserialize server: {}\nJSON: {}", e, json_data));
    let server = response.server;

    assert_eq!(server.id, ServerId::new(42));
    assert_eq!(server.status, ServerStatus::Running);
    assert_eq!(server.backup_window.as_deref(), Some("22-02"));
    assert_eq!(server.labels.get("example.com/my").map(String::as_str), Some("label"));

    // Public networking
    let ipv4 = server.public_net.ipv4.as_ref().expect("server should have ipv4");
    assert_eq!(ipv4.ip, "1.2.3.4");
    assert_eq!(ipv4.dns_ptr, "server01.example.com");
    let ipv6 = server.public_net.ipv6.as_ref().expect("server should have ipv6");
    assert_eq!(ipv6.dns_ptr[0].dns_ptr, "server.example.com");
    assert_eq!(server.public_net.floating_ips.len(), 1);
    assert_eq!(server.public_net.firewalls[0].status, "applied");
    assert_eq!(server.private_net[0].mac_address, "86:00:ff:2a:7d:e1");

    // Nested resources
    assert_eq!(server.server_type.name, "cpx11");
    assert_eq!(server.server_type.prices[0].price_hourly.net, "1.0000000000");
    assert_eq!(server.datacenter.location.network_zone, "eu-central");
    assert_eq!(server.datacenter.server_types.available.len(), 3);
    let image = server.image.as_ref().expect("server should have an image");
    assert_eq!(image.kind, ImageType::Snapshot);
    assert!(image.deprecated.is_some());
    assert!(image.deleted.is_none());
    assert_eq!(
        server.placement_group.as_ref().map(|group| group.servers.clone()),
        Some(vec![ServerId::new(42)])
    );
    assert_eq!(server.protection.rebuild, Some(false));
}

#[test]
fn test_missing_optional_fields_default() {
    let json_data = load_fixture("server_minimal.json");
    let server = serde_json::from_str::<ServerResponse>(&json_data)
        .unwrap()
        .server;

    assert_eq!(server.status, ServerStatus::Initializing);
    assert!(server.image.is_none());
    assert!(server.iso.is_none());
    assert!(server.placement_group.is_none());
    assert!(server.public_net.ipv4.is_none());
    assert!(server.private_net.is_empty());
    assert!(server.labels.is_empty());
    assert!(!server.protection.delete);
    assert!(server.outgoing_traffic.is_none());
    assert!(server.server_type.prices.is_empty());
    assert_eq!(server.datacenter.location.name, "nbg1");
    assert_eq!(server.created.timestamp(), 1_685_606_400);
}

#[test]
fn test_server_survives_round_trip() {
    for fixture in ["server.json", "server_minimal.json"] {
        let original: ServerResponse = serde_json::from_str(&load_fixture(fixture)).unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let decoded: ServerResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, original, "{fixture} changed after a round trip");
    }
}

/// Decode a fixture, encode it again and check nothing was lost.
fn assert_round_trip<T>(fixture: &str)
where
    T: DeserializeOwned + Serialize + PartialEq + Debug,
{
    let json_data = load_fixture(fixture);
    let original: T = serde_json::from_str(&json_data)
        .unwrap_or_else(|e| panic!("Failed to deserialize {fixture}: {e}"));
    let json = serde_json::to_string(&original).unwrap();
    let decoded: T = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, original, "{fixture} changed after a round trip");
}

#[test]
fn test_resource_responses_survive_round_trip() {
    let cases: &[(&str, fn(&str))] = &[
        ("volume.json", assert_round_trip::<VolumeResponse>),
        ("network.json", assert_round_trip::<NetworkResponse>),
        ("certificate.json", assert_round_trip::<CertificateResponse>),
        ("primary_ip.json", assert_round_trip::<PrimaryIpResponse>),
        ("ssh_key.json", assert_round_trip::<SshKeyResponse>),
        ("placement_group.json", assert_round_trip::<PlacementGroupResponse>),
        ("pricing.json", assert_round_trip::<PricingResponse>),
        ("metrics.json", assert_round_trip::<MetricsResponse>),
        ("image.json", assert_round_trip::<ImageResponse>),
        ("server_type.json", assert_round_trip::<ServerTypeResponse>),
        ("location.json", assert_round_trip::<LocationResponse>),
        ("datacenter.json", assert_round_trip::<DatacenterResponse>),
    ];
    for &(fixture, check) in cases {
        check(fixture);
    }
}

#[test]
fn test_resource_fixtures_decode_nested_values() {
    let network: NetworkResponse = serde_json::from_str(&load_fixture("network.json")).unwrap();
    assert_eq!(network.network.subnets[1].vswitch_id, Some(1000));
    assert_eq!(network.network.created.timestamp_subsec_millis(), 250);

    let metrics: MetricsResponse = serde_json::from_str(&load_fixture("metrics.json")).unwrap();
    let cpu = &metrics.metrics.time_series["cpu"];
    assert_eq!(cpu.values[1], (1_435_781_471.622, "43.5".to_string()));

    let pricing: PricingResponse = serde_json::from_str(&load_fixture("pricing.json")).unwrap();
    assert_eq!(
        pricing.pricing.server_types[0].prices[0].included_traffic,
        Some(21_990_232_555_520)
    );
    assert!(pricing.pricing.floating_ips[0].prices[0].price_hourly.is_none());
}

#[test]
fn test_deserialize_load_balancer() {
    let json_data = load_fixture("load_balancer.json");
    let load_balancer = serde_json::from_str::<LoadBalancerResponse>(&json_data)
        .unwrap()
        .load_balancer;

    assert!(load_balancer.public_net.enabled);
    assert_eq!(load_balancer.load_balancer_type.max_targets, 25);
    assert_eq!(load_balancer.targets.len(), 2);

    let server_target = &load_balancer.targets[0];
    assert_eq!(server_target.kind, TargetType::Server);
    assert!(server_target.use_private_ip);
    assert_eq!(server_target.health_status[0].status, HealthStatusValue::Healthy);

    // Label selector targets expand to the servers they match
    let selector_target = &load_balancer.targets[1];
    assert_eq!(selector_target.kind, TargetType::LabelSelector);
    assert_eq!(selector_target.targets.len(), 1);
    assert_eq!(
        selector_target.targets[0].health_status[0].status,
        HealthStatusValue::Unrecognized("draining".to_string())
    );

    let service = &load_balancer.services[0];
    assert_eq!(service.protocol, LbProtocol::Https);
    assert_eq!(service.health_check.protocol, LbProtocol::Http);
    let http = service.http.as_ref().expect("https service should have http options");
    assert_eq!(http.cookie_lifetime, Some(300));
    assert_eq!(http.certificates.len(), 1);

    let json = serde_json::to_string(&load_balancer).unwrap();
    assert_eq!(serde_json::from_str::<hcloud::models::LoadBalancer>(&json).unwrap(), load_balancer);
}

#[test]
fn test_action_list_with_pagination() {
    let json_data = load_fixture("action_list.json");
    let list: ActionList = serde_json::from_str(&json_data).unwrap();

    assert_eq!(list.actions.len(), 2);
    assert_eq!(list.actions[0].status, ActionStatus::Success);
    assert!(list.actions[0].error.is_none());

    let failed = &list.actions[1];
    assert_eq!(failed.status, ActionStatus::Error);
    assert_eq!(failed.error.as_ref().map(|e| e.code.as_str()), Some("action_failed"));
    assert_eq!(failed.resources[1].kind, ResourceType::Volume);
    assert_eq!(
        failed.resources[2].kind,
        ResourceType::Unrecognized("storage_box".to_string())
    );

    let pagination = &list.meta.pagination;
    assert_eq!(pagination.page, 1);
    assert_eq!(pagination.previous_page, None);
    assert_eq!(pagination.next_page, Some(2));
    assert_eq!(pagination.total_entries, Some(100));
}

#[test]
fn test_error_envelope_with_field_details() {
    let json_data = load_fixture("error_invalid_input.json");
    let envelope: ErrorResponse = serde_json::from_str(&json_data).unwrap();

    assert_eq!(envelope.error.code, ErrorCode::InvalidInput);
    assert_eq!(
        envelope.error.field_messages("broken_field"),
        Some(&["is too long".to_string()][..])
    );

    let json = serde_json::to_string(&envelope).unwrap();
    assert_eq!(serde_json::from_str::<ErrorResponse>(&json).unwrap(), envelope);
}
