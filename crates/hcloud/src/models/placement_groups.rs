//! Placement groups.

use hcloud_core::ids::{PlacementGroupId, ServerId};
use hcloud_core::timestamp::{self, Timestamp};
use hcloud_core::types::{Action, Labels, ListParams, Meta};
use hcloud_core::{QueryParams, UrlBuilder};
use serde::{Deserialize, Serialize};

hcloud_core::wire_enum! {
    /// Placement strategy.
    pub enum PlacementGroupType {
        /// Spread servers over distinct physical hosts
        Spread => "spread",
    }
}

/// A group of servers placed according to a strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacementGroup {
    /// Placement group id
    pub id: PlacementGroupId,
    /// Name
    pub name: String,
    /// Labels
    #[serde(default)]
    pub labels: Labels,
    /// Placement strategy
    #[serde(rename = "type")]
    pub kind: PlacementGroupType,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created: Timestamp,
    /// Servers in the group
    #[serde(default)]
    pub servers: Vec<ServerId>,
}

/// Envelope holding a single placement group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacementGroupResponse {
    /// The placement group
    pub placement_group: PlacementGroup,
}

/// Paginated placement group list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacementGroupList {
    /// Placement groups
    #[serde(default)]
    pub placement_groups: Vec<PlacementGroup>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}

/// Parameters of `GET /placement_groups`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementGroupListParams {
    /// Common list parameters
    pub common: ListParams,
    /// Filter by type
    pub kind: Option<PlacementGroupType>,
}

impl QueryParams for PlacementGroupListParams {
    fn apply(&self, builder: UrlBuilder) -> UrlBuilder {
        self.common
            .apply(builder)
            .query_param_if_present("type", self.kind.as_ref())
    }
}

/// Request body of `POST /placement_groups`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePlacementGroupRequest {
    /// Name
    pub name: String,
    /// Placement strategy
    #[serde(rename = "type")]
    pub kind: PlacementGroupType,
    /// Labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

/// Response of `POST /placement_groups`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatePlacementGroupResponse {
    /// The created placement group
    pub placement_group: PlacementGroup,
    /// Action, if one was started
    #[serde(default)]
    pub action: Option<Action>,
}

/// Request body of `PUT /placement_groups/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatePlacementGroupRequest {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}
