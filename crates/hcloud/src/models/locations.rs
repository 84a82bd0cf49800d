//! Locations and datacenters.

use hcloud_core::ids::{DatacenterId, LocationId, ServerTypeId};
use hcloud_core::types::Meta;
use serde::{Deserialize, Serialize};

/// A physical location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    /// Location id
    pub id: LocationId,
    /// Unique name, e.g. `fsn1`
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// ISO 3166-1 alpha-2 country code
    #[serde(default)]
    pub country: String,
    /// City
    #[serde(default)]
    pub city: String,
    /// Latitude
    #[serde(default)]
    pub latitude: f64,
    /// Longitude
    #[serde(default)]
    pub longitude: f64,
    /// Network zone the location belongs to
    #[serde(default)]
    pub network_zone: String,
}

/// Server types offered in a datacenter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatacenterServerTypes {
    /// Types supported in this datacenter
    #[serde(default)]
    pub supported: Vec<ServerTypeId>,
    /// Types currently available for creation
    #[serde(default)]
    pub available: Vec<ServerTypeId>,
    /// Types currently available as migration targets
    #[serde(default)]
    pub available_for_migration: Vec<ServerTypeId>,
}

/// A datacenter within a location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Datacenter {
    /// Datacenter id
    pub id: DatacenterId,
    /// Unique name, e.g. `fsn1-dc14`
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Location of the datacenter
    pub location: Location,
    /// Server type availability
    #[serde(default)]
    pub server_types: DatacenterServerTypes,
}

/// Envelope holding a single location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationResponse {
    /// The location
    pub location: Location,
}

/// Paginated location list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationList {
    /// Locations
    #[serde(default)]
    pub locations: Vec<Location>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}

/// Envelope holding a single datacenter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatacenterResponse {
    /// The datacenter
    pub datacenter: Datacenter,
}

/// Paginated datacenter list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatacenterList {
    /// Datacenters
    #[serde(default)]
    pub datacenters: Vec<Datacenter>,
    /// Recommended datacenter for new resources
    #[serde(default)]
    pub recommendation: Option<DatacenterId>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}
