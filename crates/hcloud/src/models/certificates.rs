//! TLS certificates for load balancers.

use hcloud_core::ids::{CertificateId, LoadBalancerId};
use hcloud_core::timestamp::{self, Timestamp};
use hcloud_core::types::{Action, Labels, ListParams, Meta};
use hcloud_core::{QueryParams, UrlBuilder};
use serde::{Deserialize, Serialize};

hcloud_core::wire_enum! {
    /// Origin of a certificate.
    pub enum CertificateType {
        /// Uploaded by the user
        Uploaded => "uploaded",
        /// Issued and renewed by the provider
        Managed => "managed",
    }
}

hcloud_core::wire_enum! {
    /// Issuance or renewal state of a managed certificate.
    pub enum CertificateStatusValue {
        /// In progress
        Pending => "pending",
        /// Completed
        Completed => "completed",
        /// Failed
        Failed => "failed",
        /// Not yet known
        Unknown => "unknown",
    }
}

/// Issuance state of a managed certificate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CertificateStatus {
    /// Issuance state
    #[serde(default)]
    pub issuance: Option<CertificateStatusValue>,
    /// Renewal state
    #[serde(default)]
    pub renewal: Option<CertificateStatusValue>,
    /// Failure details of the last attempt
    #[serde(default)]
    pub error: Option<hcloud_core::types::ActionError>,
}

/// A service using a certificate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CertificateUsage {
    /// Resource type, currently always `load_balancer`
    #[serde(rename = "type")]
    pub kind: String,
    /// Load balancer id
    pub id: LoadBalancerId,
}

/// A TLS certificate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Certificate {
    /// Certificate id
    pub id: CertificateId,
    /// Name
    pub name: String,
    /// Labels
    #[serde(default)]
    pub labels: Labels,
    /// Origin
    #[serde(rename = "type", default)]
    pub kind: Option<CertificateType>,
    /// PEM-encoded certificate chain
    #[serde(default)]
    pub certificate: Option<String>,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created: Timestamp,
    /// Start of validity
    #[serde(default, with = "timestamp::option")]
    pub not_valid_before: Option<Timestamp>,
    /// End of validity
    #[serde(default, with = "timestamp::option")]
    pub not_valid_after: Option<Timestamp>,
    /// Domains covered
    #[serde(default)]
    pub domain_names: Vec<String>,
    /// SHA-256 fingerprint
    #[serde(default)]
    pub fingerprint: Option<String>,
    /// Managed certificate state
    #[serde(default)]
    pub status: Option<CertificateStatus>,
    /// Services using the certificate
    #[serde(default)]
    pub used_by: Vec<CertificateUsage>,
}

/// Envelope holding a single certificate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CertificateResponse {
    /// The certificate
    pub certificate: Certificate,
}

/// Paginated certificate list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CertificateList {
    /// Certificates
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: Meta,
}

/// Parameters of `GET /certificates`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateListParams {
    /// Common list parameters
    pub common: ListParams,
    /// Filter by origin
    pub kind: Option<CertificateType>,
}

impl QueryParams for CertificateListParams {
    fn apply(&self, builder: UrlBuilder) -> UrlBuilder {
        self.common
            .apply(builder)
            .query_param_if_present("type", self.kind.as_ref())
    }
}

/// Request body of `POST /certificates`.
///
/// Uploaded certificates need `certificate` and `private_key`; managed ones
/// need `domain_names`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateCertificateRequest {
    /// Name
    pub name: String,
    /// Origin; defaults to `uploaded`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CertificateType>,
    /// PEM-encoded certificate chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    /// PEM-encoded private key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Domains for a managed certificate
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domain_names: Vec<String>,
    /// Labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

/// Response of `POST /certificates`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateCertificateResponse {
    /// The created certificate
    pub certificate: Certificate,
    /// Issuance action, for managed certificates
    #[serde(default)]
    pub action: Option<Action>,
}

/// Request body of `PUT /certificates/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateCertificateRequest {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn managed_certificate_decodes() {
        let json = r#"{
            "id": 897, "name": "my website cert", "labels": {},
            "type": "managed", "certificate": null,
            "created": "2019-01-08T12:10:00+00:00",
            "not_valid_before": null, "not_valid_after": null,
            "domain_names": ["example.com", "webmail.example.com"],
            "fingerprint": null,
            "status": {"issuance": "pending", "renewal": "unavailable", "error": null},
            "used_by": [{"id": 4711, "type": "load_balancer"}]
        }"#;
        let certificate: Certificate = serde_json::from_str(json).unwrap();
        assert_eq!(certificate.kind, Some(CertificateType::Managed));
        let status = certificate.status.unwrap();
        assert_eq!(status.issuance, Some(CertificateStatusValue::Pending));
        assert_eq!(
            status.renewal,
            Some(CertificateStatusValue::Unrecognized("unavailable".into()))
        );
        assert_eq!(certificate.used_by[0].id, LoadBalancerId::new(4711));
    }
}
