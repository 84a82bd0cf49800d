//! Volumes (block storage).

use crate::models::locations::Location;
use hcloud_core::ids::{ServerId, VolumeId};
use hcloud_core::timestamp::{self, Timestamp};
use hcloud_core::types::{Action, Labels, ListParams, Meta, Protection};
use hcloud_core::{QueryParams, UrlBuilder};
use serde::{Deserialize, Serialize};

hcloud_core::wire_enum! {
    /// Volume state.
    pub enum VolumeStatus {
        /// Being created
        Creating => "creating",
        /// Ready to use
        Available => "available",
    }
}

/// A block storage volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Volume {
    /// Volume id
    pub id: VolumeId,
    /// Name
    pub name: String,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created: Timestamp,
    /// Server the volume is attached to
    #[serde(default)]
    pub server: Option<ServerId>,
    /// Location of the volume
    pub location: Location,
    /// Size in GB
    pub size: u32,
    /// Device path on the server
    #[serde(default)]
    pub linux_device: Option<String>,
    /// Protection flags
    #[serde(default)]
    pub protection: Protection,
    /// Labels
    #[serde(default)]
    pub labels: Labels,
    /// State
    pub status: VolumeStatus,
    /// Filesystem format, if formatted on creation
    #[serde(default)]
    pub format: Option<String>,
}

/// Envelope holding a single volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolumeResponse {
    /// The volume
    pub volume: Volume,
}

/// Paginated volume list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolumeList {
    /// Volumes
    #[serde(default)]
    pub volumes: Vec<Volume>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}

/// Parameters of `GET /volumes`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeListParams {
    /// Common list parameters
    pub common: ListParams,
    /// Filter by status
    pub status: Option<VolumeStatus>,
}

impl QueryParams for VolumeListParams {
    fn apply(&self, builder: UrlBuilder) -> UrlBuilder {
        self.common
            .apply(builder)
            .query_param_if_present("status", self.status.as_ref())
    }
}

/// Request body of `POST /volumes`.
///
/// Exactly one of `location` or `server` must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateVolumeRequest {
    /// Name
    pub name: String,
    /// Size in GB
    pub size: u32,
    /// Location name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Server to attach the volume to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerId>,
    /// Mount the volume after attaching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automount: Option<bool>,
    /// Filesystem to format with, `ext4` or `xfs`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

/// Response of `POST /volumes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateVolumeResponse {
    /// The created volume
    pub volume: Volume,
    /// Creation action
    #[serde(default)]
    pub action: Option<Action>,
    /// Follow-up actions, e.g. attaching
    #[serde(default)]
    pub next_actions: Vec<Action>,
}

/// Request body of `PUT /volumes/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateVolumeRequest {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

/// Request body of the `attach` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttachVolumeRequest {
    /// Server to attach to
    pub server: ServerId,
    /// Mount the volume after attaching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automount: Option<bool>,
}

/// Request body of the `resize` action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResizeVolumeRequest {
    /// New size in GB; must be larger than the current size
    pub size: u32,
}
