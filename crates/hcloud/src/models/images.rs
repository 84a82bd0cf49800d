//! Images and ISOs.

use crate::models::server_types::{Architecture, Deprecation};
use hcloud_core::ids::{ImageId, IsoId, ServerId};
use hcloud_core::timestamp::{self, Timestamp};
use hcloud_core::types::{Labels, ListParams, Meta, Protection};
use hcloud_core::{QueryParams, UrlBuilder};
use serde::{Deserialize, Serialize};

hcloud_core::wire_enum! {
    /// Kind of image.
    pub enum ImageType {
        /// Operating system image maintained by the provider
        System => "system",
        /// Application image maintained by the provider
        App => "app",
        /// Snapshot created by a user
        Snapshot => "snapshot",
        /// Automatic backup of a server
        Backup => "backup",
        /// Image kept while a server is being rebuilt
        Temporary => "temporary",
    }
}

hcloud_core::wire_enum! {
    /// Availability of an image.
    pub enum ImageStatus {
        /// Ready to use
        Available => "available",
        /// Being created
        Creating => "creating",
        /// Not usable
        Unavailable => "unavailable",
    }
}

/// Source server of a snapshot or backup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedFrom {
    /// Server id
    pub id: ServerId,
    /// Server name at creation time
    pub name: String,
}

/// An image that servers can be created from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// Image id
    pub id: ImageId,
    /// Kind of image
    #[serde(rename = "type")]
    pub kind: ImageType,
    /// Availability
    pub status: ImageStatus,
    /// Unique name, only set for system images
    #[serde(default)]
    pub name: Option<String>,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Size of the image file in GB
    #[serde(default)]
    pub image_size: Option<f64>,
    /// Size of the disk contained in the image in GB
    #[serde(default)]
    pub disk_size: f64,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created: Timestamp,
    /// Source server of snapshots and backups
    #[serde(default)]
    pub created_from: Option<CreatedFrom>,
    /// Server a backup is bound to
    #[serde(default)]
    pub bound_to: Option<ServerId>,
    /// Operating system flavor
    #[serde(default)]
    pub os_flavor: String,
    /// Operating system version
    #[serde(default)]
    pub os_version: Option<String>,
    /// Whether the image supports rapid deploy
    #[serde(default)]
    pub rapid_deploy: Option<bool>,
    /// Protection flags
    #[serde(default)]
    pub protection: Protection,
    /// When the image was deprecated
    #[serde(default, with = "timestamp::option")]
    pub deprecated: Option<Timestamp>,
    /// When the image was deleted
    #[serde(default, with = "timestamp::option")]
    pub deleted: Option<Timestamp>,
    /// Labels
    #[serde(default)]
    pub labels: Labels,
    /// CPU architecture
    #[serde(default)]
    pub architecture: Option<Architecture>,
}

/// Envelope holding a single image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageResponse {
    /// The image
    pub image: Image,
}

/// Paginated image list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageList {
    /// Images
    #[serde(default)]
    pub images: Vec<Image>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}

/// Parameters of `GET /images`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageListParams {
    /// Common list parameters
    pub common: ListParams,
    /// Filter by image type
    pub kind: Option<ImageType>,
    /// Filter by status
    pub status: Option<ImageStatus>,
    /// Filter by the server a backup is bound to
    pub bound_to: Option<ServerId>,
    /// Include deprecated images
    pub include_deprecated: Option<bool>,
    /// Filter by architecture
    pub architecture: Option<Architecture>,
}

impl QueryParams for ImageListParams {
    fn apply(&self, builder: UrlBuilder) -> UrlBuilder {
        self.common
            .apply(builder)
            .query_param_if_present("type", self.kind.as_ref())
            .query_param_if_present("status", self.status.as_ref())
            .query_param_if_present("bound_to", self.bound_to)
            .query_param_if_present("include_deprecated", self.include_deprecated)
            .query_param_if_present("architecture", self.architecture.as_ref())
    }
}

/// Request body of `PUT /images/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateImageRequest {
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Convert a backup into a snapshot
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ImageType>,
    /// Replacement labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

/// An ISO image that can be attached to servers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Iso {
    /// ISO id
    pub id: IsoId,
    /// Unique name
    #[serde(default)]
    pub name: Option<String>,
    /// Description
    #[serde(default)]
    pub description: String,
    /// `public` or `private`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// CPU architecture
    #[serde(default)]
    pub architecture: Option<Architecture>,
    /// Deprecation details
    #[serde(default)]
    pub deprecation: Option<Deprecation>,
}

/// Envelope holding a single ISO.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IsoResponse {
    /// The ISO
    pub iso: Iso,
}

/// Paginated ISO list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IsoList {
    /// ISOs
    #[serde(default)]
    pub isos: Vec<Iso>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_render_filters() {
        let params = ImageListParams {
            kind: Some(ImageType::Snapshot),
            bound_to: Some(ServerId::new(4)),
            include_deprecated: Some(false),
            ..ImageListParams::default()
        };
        let uri = params.apply(UrlBuilder::new("/images").unwrap()).to_uri();
        assert_eq!(uri, "/images?type=snapshot&bound_to=4&include_deprecated=false");
    }

    #[test]
    fn update_request_skips_unset_fields() {
        let request = UpdateImageRequest {
            kind: Some(ImageType::Snapshot),
            ..UpdateImageRequest::default()
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"type":"snapshot"}"#
        );
    }
}
