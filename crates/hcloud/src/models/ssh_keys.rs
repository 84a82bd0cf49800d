//! SSH keys.

use hcloud_core::ids::SshKeyId;
use hcloud_core::timestamp::{self, Timestamp};
use hcloud_core::types::{Labels, ListParams, Meta};
use hcloud_core::{QueryParams, UrlBuilder};
use serde::{Deserialize, Serialize};

/// A public key that can be injected into servers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SshKey {
    /// SSH key id
    pub id: SshKeyId,
    /// Unique name
    pub name: String,
    /// MD5 fingerprint of the public key
    pub fingerprint: String,
    /// Public key in OpenSSH format
    pub public_key: String,
    /// Labels
    #[serde(default)]
    pub labels: Labels,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created: Timestamp,
}

/// Envelope holding a single SSH key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SshKeyResponse {
    /// The SSH key
    pub ssh_key: SshKey,
}

/// Paginated SSH key list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SshKeyList {
    /// SSH keys
    #[serde(default)]
    pub ssh_keys: Vec<SshKey>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}

/// Parameters of `GET /ssh_keys`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SshKeyListParams {
    /// Common list parameters
    pub common: ListParams,
    /// Filter by fingerprint
    pub fingerprint: Option<String>,
}

impl QueryParams for SshKeyListParams {
    fn apply(&self, builder: UrlBuilder) -> UrlBuilder {
        self.common
            .apply(builder)
            .query_param_if_present("fingerprint", self.fingerprint.as_deref())
    }
}

/// Request body of `POST /ssh_keys`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateSshKeyRequest {
    /// Name
    pub name: String,
    /// Public key in OpenSSH format
    pub public_key: String,
    /// Labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

/// Request body of `PUT /ssh_keys/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateSshKeyRequest {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}
