//! Network endpoints.

use crate::client::HcloudClient;
use crate::models::{
    ChangeIpRangeRequest, CreateNetworkRequest, DeleteSubnetRequest, Network, NetworkList,
    NetworkListParams, NetworkResponse, Route, Subnet, UpdateNetworkRequest,
};
use crate::Result;
use hcloud_core::ids::NetworkId;
use hcloud_core::types::{Action, ChangeProtectionRequest};
use hcloud_core::UrlBuilder;

impl HcloudClient {
    fn network_action_url(&self, id: NetworkId, action: &str) -> Result<UrlBuilder> {
        self.url(&format!("networks/{id}/actions/{action}"))
    }

    /// List networks.
    pub async fn list_networks(&self, params: &NetworkListParams) -> Result<NetworkList> {
        self.get_json(self.list_url("networks", params)?).await
    }

    /// Fetch a single network.
    pub async fn get_network(&self, id: NetworkId) -> Result<Network> {
        let url = self.url(&format!("networks/{id}"))?;
        let response: NetworkResponse = self.get_json(url).await?;
        Ok(response.network)
    }

    /// Create a network.
    pub async fn create_network(&self, request: &CreateNetworkRequest) -> Result<Network> {
        let response: NetworkResponse = self.post_json(self.url("networks")?, request).await?;
        Ok(response.network)
    }

    /// Change the name, labels or route export of a network.
    pub async fn update_network(&self, id: NetworkId, request: &UpdateNetworkRequest) -> Result<Network> {
        let url = self.url(&format!("networks/{id}"))?;
        let response: NetworkResponse = self.put_json(url, request).await?;
        Ok(response.network)
    }

    /// Delete a network.
    pub async fn delete_network(&self, id: NetworkId) -> Result<()> {
        self.delete_json(self.url(&format!("networks/{id}"))?).await
    }

    /// Add a subnet.
    pub async fn add_subnet(&self, id: NetworkId, subnet: &Subnet) -> Result<Action> {
        self.post_action(self.network_action_url(id, "add_subnet")?, Some(subnet))
            .await
    }

    /// Delete a subnet. Nothing may be attached to it.
    pub async fn delete_subnet(&self, id: NetworkId, request: &DeleteSubnetRequest) -> Result<Action> {
        self.post_action(self.network_action_url(id, "delete_subnet")?, Some(request))
            .await
    }

    /// Add a static route.
    pub async fn add_route(&self, id: NetworkId, route: &Route) -> Result<Action> {
        self.post_action(self.network_action_url(id, "add_route")?, Some(route))
            .await
    }

    /// Delete a static route.
    pub async fn delete_route(&self, id: NetworkId, route: &Route) -> Result<Action> {
        self.post_action(self.network_action_url(id, "delete_route")?, Some(route))
            .await
    }

    /// Grow the IP range of a network.
    pub async fn change_ip_range(&self, id: NetworkId, request: &ChangeIpRangeRequest) -> Result<Action> {
        self.post_action(self.network_action_url(id, "change_ip_range")?, Some(request))
            .await
    }

    /// Change delete protection of a network.
    pub async fn change_network_protection(
        &self,
        id: NetworkId,
        request: &ChangeProtectionRequest,
    ) -> Result<Action> {
        self.post_action(self.network_action_url(id, "change_protection")?, Some(request))
            .await
    }
}
