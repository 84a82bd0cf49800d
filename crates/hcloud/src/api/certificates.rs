//! Certificate endpoints.

use crate::client::HcloudClient;
use crate::models::{
    Certificate, CertificateList, CertificateListParams, CertificateResponse,
    CreateCertificateRequest, CreateCertificateResponse, UpdateCertificateRequest,
};
use crate::Result;
use hcloud_core::ids::CertificateId;
use hcloud_core::types::Action;

impl HcloudClient {
    /// List certificates.
    pub async fn list_certificates(&self, params: &CertificateListParams) -> Result<CertificateList> {
        self.get_json(self.list_url("certificates", params)?).await
    }

    /// Fetch a single certificate.
    pub async fn get_certificate(&self, id: CertificateId) -> Result<Certificate> {
        let url = self.url(&format!("certificates/{id}"))?;
        let response: CertificateResponse = self.get_json(url).await?;
        Ok(response.certificate)
    }

    /// Upload a certificate or request a managed one.
    pub async fn create_certificate(
        &self,
        request: &CreateCertificateRequest,
    ) -> Result<CreateCertificateResponse> {
        self.post_json(self.url("certificates")?, request).await
    }

    /// Change the name or labels of a certificate.
    pub async fn update_certificate(
        &self,
        id: CertificateId,
        request: &UpdateCertificateRequest,
    ) -> Result<Certificate> {
        let url = self.url(&format!("certificates/{id}"))?;
        let response: CertificateResponse = self.put_json(url, request).await?;
        Ok(response.certificate)
    }

    /// Delete a certificate.
    pub async fn delete_certificate(&self, id: CertificateId) -> Result<()> {
        self.delete_json(self.url(&format!("certificates/{id}"))?).await
    }

    /// Retry issuance or renewal of a failed managed certificate.
    pub async fn retry_certificate_issuance(&self, id: CertificateId) -> Result<Action> {
        let url = self.url(&format!("certificates/{id}/actions/retry"))?;
        self.post_action::<()>(url, None).await
    }
}
