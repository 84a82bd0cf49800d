//! Endpoint surface of [`HcloudClient`](crate::HcloudClient).
//!
//! Each module adds the methods for one resource. Every method performs
//! exactly one request. Single-object envelopes are unwrapped; list responses
//! are returned whole so pagination metadata stays available.

pub mod actions;
pub mod certificates;
pub mod firewalls;
pub mod floating_ips;
pub mod images;
pub mod load_balancers;
pub mod locations;
pub mod networks;
pub mod placement_groups;
pub mod pricing;
pub mod primary_ips;
pub mod server_types;
pub mod servers;
pub mod ssh_keys;
pub mod volumes;
