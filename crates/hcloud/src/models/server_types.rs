//! Server types.

use crate::models::pricing::PricePerLocation;
use hcloud_core::ids::ServerTypeId;
use hcloud_core::timestamp::{self, Timestamp};
use hcloud_core::types::Meta;
use serde::{Deserialize, Serialize};

hcloud_core::wire_enum! {
    /// CPU architecture.
    pub enum Architecture {
        /// x86 (64 bit)
        X86 => "x86",
        /// ARM (64 bit)
        Arm => "arm",
    }
}

/// Deprecation announcement for a type or image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deprecation {
    /// When the deprecation was announced
    #[serde(with = "timestamp")]
    pub announced: Timestamp,
    /// After this point the resource can no longer be ordered
    #[serde(with = "timestamp")]
    pub unavailable_after: Timestamp,
}

/// A server type (plan).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerType {
    /// Server type id
    pub id: ServerTypeId,
    /// Unique name, e.g. `cx22`
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Number of CPU cores
    #[serde(default)]
    pub cores: u32,
    /// Memory in GB
    #[serde(default)]
    pub memory: f64,
    /// Disk size in GB
    #[serde(default)]
    pub disk: u64,
    /// `local` or `network`
    #[serde(default)]
    pub storage_type: String,
    /// `shared` or `dedicated`
    #[serde(default)]
    pub cpu_type: String,
    /// CPU architecture
    #[serde(default)]
    pub architecture: Option<Architecture>,
    /// Whether the type is deprecated
    #[serde(default)]
    pub deprecated: Option<bool>,
    /// Deprecation details
    #[serde(default)]
    pub deprecation: Option<Deprecation>,
    /// Prices per location
    #[serde(default)]
    pub prices: Vec<PricePerLocation>,
}

/// Envelope holding a single server type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerTypeResponse {
    /// The server type
    pub server_type: ServerType,
}

/// Paginated server type list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerTypeList {
    /// Server types
    #[serde(default)]
    pub server_types: Vec<ServerType>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}
