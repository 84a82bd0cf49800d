//! Floating IP endpoints.

use crate::client::HcloudClient;
use crate::models::{
    AssignFloatingIpRequest, CreateFloatingIpRequest, CreateFloatingIpResponse, FloatingIp,
    FloatingIpList, FloatingIpListParams, FloatingIpResponse, UpdateFloatingIpRequest,
};
use crate::Result;
use hcloud_core::ids::FloatingIpId;
use hcloud_core::types::{Action, ChangeDnsPtrRequest, ChangeProtectionRequest};
use hcloud_core::UrlBuilder;

impl HcloudClient {
    fn floating_ip_action_url(&self, id: FloatingIpId, action: &str) -> Result<UrlBuilder> {
        self.url(&format!("floating_ips/{id}/actions/{action}"))
    }

    /// List floating IPs.
    pub async fn list_floating_ips(&self, params: &FloatingIpListParams) -> Result<FloatingIpList> {
        self.get_json(self.list_url("floating_ips", params)?).await
    }

    /// Fetch a single floating IP.
    pub async fn get_floating_ip(&self, id: FloatingIpId) -> Result<FloatingIp> {
        let url = self.url(&format!("floating_ips/{id}"))?;
        let response: FloatingIpResponse = self.get_json(url).await?;
        Ok(response.floating_ip)
    }

    /// Create a floating IP.
    pub async fn create_floating_ip(
        &self,
        request: &CreateFloatingIpRequest,
    ) -> Result<CreateFloatingIpResponse> {
        self.post_json(self.url("floating_ips")?, request).await
    }

    /// Change the name, description or labels of a floating IP.
    pub async fn update_floating_ip(
        &self,
        id: FloatingIpId,
        request: &UpdateFloatingIpRequest,
    ) -> Result<FloatingIp> {
        let url = self.url(&format!("floating_ips/{id}"))?;
        let response: FloatingIpResponse = self.put_json(url, request).await?;
        Ok(response.floating_ip)
    }

    /// Delete a floating IP.
    pub async fn delete_floating_ip(&self, id: FloatingIpId) -> Result<()> {
        self.delete_json(self.url(&format!("floating_ips/{id}"))?).await
    }

    /// Assign a floating IP to a server.
    pub async fn assign_floating_ip(
        &self,
        id: FloatingIpId,
        request: &AssignFloatingIpRequest,
    ) -> Result<Action> {
        self.post_action(self.floating_ip_action_url(id, "assign")?, Some(request))
            .await
    }

    /// Unassign a floating IP.
    pub async fn unassign_floating_ip(&self, id: FloatingIpId) -> Result<Action> {
        self.post_action::<()>(self.floating_ip_action_url(id, "unassign")?, None)
            .await
    }

    /// Change the reverse DNS entry of a floating IP.
    pub async fn change_floating_ip_dns_ptr(
        &self,
        id: FloatingIpId,
        request: &ChangeDnsPtrRequest,
    ) -> Result<Action> {
        self.post_action(self.floating_ip_action_url(id, "change_dns_ptr")?, Some(request))
            .await
    }

    /// Change delete protection of a floating IP.
    pub async fn change_floating_ip_protection(
        &self,
        id: FloatingIpId,
        request: &ChangeProtectionRequest,
    ) -> Result<Action> {
        self.post_action(self.floating_ip_action_url(id, "change_protection")?, Some(request))
            .await
    }
}
