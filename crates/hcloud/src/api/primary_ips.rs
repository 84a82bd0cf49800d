//! Primary IP endpoints.

use crate::client::HcloudClient;
use crate::models::{
    AssignPrimaryIpRequest, CreatePrimaryIpRequest, CreatePrimaryIpResponse, PrimaryIp,
    PrimaryIpList, PrimaryIpListParams, PrimaryIpResponse, UpdatePrimaryIpRequest,
};
use crate::Result;
use hcloud_core::ids::PrimaryIpId;
use hcloud_core::types::{Action, ChangeDnsPtrRequest, ChangeProtectionRequest};
use hcloud_core::UrlBuilder;

impl HcloudClient {
    fn primary_ip_action_url(&self, id: PrimaryIpId, action: &str) -> Result<UrlBuilder> {
        self.url(&format!("primary_ips/{id}/actions/{action}"))
    }

    /// List primary IPs.
    pub async fn list_primary_ips(&self, params: &PrimaryIpListParams) -> Result<PrimaryIpList> {
        self.get_json(self.list_url("primary_ips", params)?).await
    }

    /// Fetch a single primary IP.
    pub async fn get_primary_ip(&self, id: PrimaryIpId) -> Result<PrimaryIp> {
        let url = self.url(&format!("primary_ips/{id}"))?;
        let response: PrimaryIpResponse = self.get_json(url).await?;
        Ok(response.primary_ip)
    }

    /// Create a primary IP.
    pub async fn create_primary_ip(
        &self,
        request: &CreatePrimaryIpRequest,
    ) -> Result<CreatePrimaryIpResponse> {
        self.post_json(self.url("primary_ips")?, request).await
    }

    /// Change the name, auto-delete flag or labels of a primary IP.
    pub async fn update_primary_ip(
        &self,
        id: PrimaryIpId,
        request: &UpdatePrimaryIpRequest,
    ) -> Result<PrimaryIp> {
        let url = self.url(&format!("primary_ips/{id}"))?;
        let response: PrimaryIpResponse = self.put_json(url, request).await?;
        Ok(response.primary_ip)
    }

    /// Delete an unassigned primary IP.
    pub async fn delete_primary_ip(&self, id: PrimaryIpId) -> Result<()> {
        self.delete_json(self.url(&format!("primary_ips/{id}"))?).await
    }

    /// Assign a primary IP to a powered-off server.
    pub async fn assign_primary_ip(
        &self,
        id: PrimaryIpId,
        request: &AssignPrimaryIpRequest,
    ) -> Result<Action> {
        self.post_action(self.primary_ip_action_url(id, "assign")?, Some(request))
            .await
    }

    /// Unassign a primary IP from its powered-off server.
    pub async fn unassign_primary_ip(&self, id: PrimaryIpId) -> Result<Action> {
        self.post_action::<()>(self.primary_ip_action_url(id, "unassign")?, None)
            .await
    }

    /// Change the reverse DNS entry of a primary IP.
    pub async fn change_primary_ip_dns_ptr(
        &self,
        id: PrimaryIpId,
        request: &ChangeDnsPtrRequest,
    ) -> Result<Action> {
        self.post_action(self.primary_ip_action_url(id, "change_dns_ptr")?, Some(request))
            .await
    }

    /// Change delete protection of a primary IP.
    pub async fn change_primary_ip_protection(
        &self,
        id: PrimaryIpId,
        request: &ChangeProtectionRequest,
    ) -> Result<Action> {
        self.post_action(self.primary_ip_action_url(id, "change_protection")?, Some(request))
            .await
    }
}
