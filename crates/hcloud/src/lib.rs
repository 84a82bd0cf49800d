//! Hetzner Cloud API client.
//!
//! Provides typed request/response structures and an asynchronous client for
//! servers, volumes, networks, load balancers, firewalls, floating and primary
//! IPs, images, SSH keys, placement groups, certificates and pricing.
//!
//! ```no_run
//! # async fn example() -> hcloud::Result<()> {
//! use hcloud::models::ServerListParams;
//! use hcloud::HcloudClient;
//!
//! let client = HcloudClient::new("my-api-token")?;
//! let servers = client.list_servers(&ServerListParams::default()).await?;
//! for server in servers.servers {
//!     println!("{} {}", server.id, server.name);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod api;
pub mod client;
pub mod composite;
pub mod models;

pub use client::{HcloudClient, HcloudClientBuilder};
pub use composite::CHANGE_TYPE_POWER_OFF_DELAY;
pub use hcloud_core::error::{ApiError, ErrorCode, ErrorDetails, FieldError};
pub use hcloud_core::ids::*;
pub use hcloud_core::types::{
    Action, ActionError, ActionList, ActionResponse, ActionStatus, ChangeDnsPtrRequest,
    ChangeProtectionRequest, Labels, ListParams, Meta, Pagination, Protection, ResourceRef,
    ResourceType, SortOrder,
};
pub use hcloud_core::{Error, QueryParams};
pub use tokio_util::sync::CancellationToken;

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = hcloud_core::Result<T>;
