//! Shared Hetzner Cloud domain types.
//!
//! Actions, pagination metadata and the small value types that appear across
//! several resources (protection flags, labels, resource references).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ids::ActionId;
use crate::query::{QueryParams, UrlBuilder};
use crate::timestamp::{self, Timestamp};

/// Default API origin.
pub const DEFAULT_API_URL: &str = "https://api.hetzner.cloud/v1";

/// Key/value labels attached to resources.
pub type Labels = BTreeMap<String, String>;

wire_enum! {
    /// Progress state of an [`Action`].
    pub enum ActionStatus {
        /// Still being processed
        Running => "running",
        /// Completed successfully
        Success => "success",
        /// Failed
        Error => "error",
    }
}

wire_enum! {
    /// Type of a resource referenced by an action or attachment.
    pub enum ResourceType {
        /// Server
        Server => "server",
        /// Volume
        Volume => "volume",
        /// Image
        Image => "image",
        /// Network
        Network => "network",
        /// Floating IP
        FloatingIp => "floating_ip",
        /// Primary IP
        PrimaryIp => "primary_ip",
        /// Load balancer
        LoadBalancer => "load_balancer",
        /// Firewall
        Firewall => "firewall",
        /// Placement group
        PlacementGroup => "placement_group",
        /// Certificate
        Certificate => "certificate",
        /// ISO image
        Iso => "iso",
    }
}

/// Reference to a resource affected by an action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceRef {
    /// Resource id
    pub id: i64,
    /// Resource type
    #[serde(rename = "type")]
    pub kind: ResourceType,
}

/// Failure details of an action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionError {
    /// Fixed machine-readable code
    pub code: String,
    /// Humanized error message
    pub message: String,
}

/// An asynchronous operation the API is performing.
///
/// The client reports actions as returned; it never polls them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Action {
    /// Action id
    pub id: ActionId,
    /// Command executed in the action
    pub command: String,
    /// Status of the action
    pub status: ActionStatus,
    /// Progress in percent
    #[serde(default)]
    pub progress: u8,
    /// Point in time when the action was started
    #[serde(with = "timestamp")]
    pub started: Timestamp,
    /// Point in time when the action finished, if it has
    #[serde(default, with = "timestamp::option")]
    pub finished: Option<Timestamp>,
    /// Resources the action relates to
    #[serde(default)]
    pub resources: Vec<ResourceRef>,
    /// Error details, set when status is `error`
    #[serde(default)]
    pub error: Option<ActionError>,
}

impl Action {
    /// Returns true once the action reached a terminal state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.status, ActionStatus::Success | ActionStatus::Error)
    }
}

/// Envelope holding a single action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionResponse {
    /// The action
    pub action: Action,
}

/// Envelope holding several actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionsResponse {
    /// The actions
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// Envelope for paginated action lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionList {
    /// The actions on this page
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}

/// Metadata block of list responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meta {
    /// Pagination of the current page
    #[serde(default)]
    pub pagination: Pagination,
}

/// Describes a single page of a list response. The client does not auto-page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number
    #[serde(default)]
    pub page: u32,
    /// Maximum number of entries per page
    #[serde(default)]
    pub per_page: u32,
    /// Previous page, if any
    #[serde(default)]
    pub previous_page: Option<u32>,
    /// Next page, if any
    #[serde(default)]
    pub next_page: Option<u32>,
    /// Last page, if known
    #[serde(default)]
    pub last_page: Option<u32>,
    /// Total number of entries, if known
    #[serde(default)]
    pub total_entries: Option<u32>,
}

impl Pagination {
    /// Returns true if there is a page after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next_page.is_some()
    }
}

/// Delete/rebuild protection flags.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Protection {
    /// Prevent the resource from being deleted
    #[serde(default)]
    pub delete: bool,
    /// Prevent the resource from being rebuilt (servers only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rebuild: Option<bool>,
}

/// Request body for `change_protection` actions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeProtectionRequest {
    /// New delete protection flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<bool>,
    /// New rebuild protection flag (servers only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rebuild: Option<bool>,
}

/// Request body for reverse DNS changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeDnsPtrRequest {
    /// IP address the pointer is set for
    pub ip: String,
    /// Hostname the IP should resolve to; `None` resets to the default
    pub dns_ptr: Option<String>,
}

/// Reverse DNS entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DnsPtr {
    /// IP address
    pub ip: String,
    /// Hostname
    pub dns_ptr: String,
}

/// Sort direction for list parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

/// Common list parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Page to load
    pub page: Option<u32>,
    /// Entries per page
    pub per_page: Option<u32>,
    /// Filter by exact name
    pub name: Option<String>,
    /// Label selector, e.g. `env=prod`
    pub label_selector: Option<String>,
    /// Sort field, optionally suffixed with `:asc` / `:desc`
    pub sort: Option<String>,
}

impl ListParams {
    /// Filter by name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter by label selector.
    #[must_use]
    pub fn with_label_selector(mut self, selector: impl Into<String>) -> Self {
        self.label_selector = Some(selector.into());
        self
    }

    /// Select a page.
    #[must_use]
    pub const fn with_page(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }

    /// Sort by a field.
    #[must_use]
    pub fn with_sort(mut self, field: &str, order: SortOrder) -> Self {
        let suffix = match order {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        };
        self.sort = Some(format!("{field}:{suffix}"));
        self
    }
}

impl QueryParams for ListParams {
    fn apply(&self, builder: UrlBuilder) -> UrlBuilder {
        builder
            .query_param_if_present("name", self.name.as_deref())
            .query_param_if_present("label_selector", self.label_selector.as_deref())
            .query_param_if_present("sort", self.sort.as_deref())
            .query_param_if_present("page", self.page)
            .query_param_if_present("per_page", self.per_page)
    }
}
