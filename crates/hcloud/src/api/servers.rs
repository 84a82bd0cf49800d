//! Server endpoints and server actions.

use crate::client::HcloudClient;
use crate::models::{
    ActionListParams, AddToPlacementGroupRequest, AttachIsoRequest, AttachToNetworkRequest,
    ChangeTypeRequest, CreateImageRequest, CreateImageResponse, CreateServerRequest,
    CreateServerResponse, DeleteServerResponse, DetachFromNetworkRequest, EnableRescueRequest,
    EnableRescueResponse, MetricsParams, MetricsResponse, Metrics, RebuildRequest, RebuildResponse,
    RequestConsoleResponse, ResetPasswordResponse, Server, ServerList, ServerListParams,
    ServerResponse, UpdateServerRequest,
};
use crate::Result;
use hcloud_core::ids::{ActionId, ServerId};
use hcloud_core::types::{
    Action, ActionList, ActionResponse, ChangeDnsPtrRequest, ChangeProtectionRequest,
};
use hcloud_core::UrlBuilder;

impl HcloudClient {
    fn server_action_url(&self, id: ServerId, action: &str) -> Result<UrlBuilder> {
        self.url(&format!("servers/{id}/actions/{action}"))
    }

    /// List servers.
    pub async fn list_servers(&self, params: &ServerListParams) -> Result<ServerList> {
        self.get_json(self.list_url("servers", params)?).await
    }

    /// Fetch a single server.
    pub async fn get_server(&self, id: ServerId) -> Result<Server> {
        let url = self.url(&format!("servers/{id}"))?;
        let response: ServerResponse = self.get_json(url).await?;
        Ok(response.server)
    }

    /// Create a server.
    pub async fn create_server(&self, request: &CreateServerRequest) -> Result<CreateServerResponse> {
        self.post_json(self.url("servers")?, request).await
    }

    /// Change the name or labels of a server.
    pub async fn update_server(&self, id: ServerId, request: &UpdateServerRequest) -> Result<Server> {
        let url = self.url(&format!("servers/{id}"))?;
        let response: ServerResponse = self.put_json(url, request).await?;
        Ok(response.server)
    }

    /// Delete a server.
    pub async fn delete_server(&self, id: ServerId) -> Result<Action> {
        let url = self.url(&format!("servers/{id}"))?;
        let response: DeleteServerResponse = self.delete_json(url).await?;
        Ok(response.action)
    }

    /// Fetch CPU, disk or network metrics of a server.
    pub async fn get_server_metrics(&self, id: ServerId, params: &MetricsParams) -> Result<Metrics> {
        let url = self.list_url(&format!("servers/{id}/metrics"), params)?;
        let response: MetricsResponse = self.get_json(url).await?;
        Ok(response.metrics)
    }

    /// List actions of a server.
    pub async fn list_server_actions(
        &self,
        id: ServerId,
        params: &ActionListParams,
    ) -> Result<ActionList> {
        self.get_json(self.list_url(&format!("servers/{id}/actions"), params)?).await
    }

    /// Fetch a single action of a server.
    pub async fn get_server_action(&self, id: ServerId, action_id: ActionId) -> Result<Action> {
        let url = self.url(&format!("servers/{id}/actions/{action_id}"))?;
        let response: ActionResponse = self.get_json(url).await?;
        Ok(response.action)
    }

    /// Start a server.
    pub async fn power_on(&self, id: ServerId) -> Result<Action> {
        self.post_action::<()>(self.server_action_url(id, "poweron")?, None)
            .await
    }

    /// Cut power to a server. This is a hard stop and may lose data.
    pub async fn power_off(&self, id: ServerId) -> Result<Action> {
        self.post_action::<()>(self.server_action_url(id, "poweroff")?, None)
            .await
    }

    /// Send an ACPI reboot request.
    pub async fn reboot(&self, id: ServerId) -> Result<Action> {
        self.post_action::<()>(self.server_action_url(id, "reboot")?, None)
            .await
    }

    /// Hard-reset a server.
    pub async fn reset(&self, id: ServerId) -> Result<Action> {
        self.post_action::<()>(self.server_action_url(id, "reset")?, None)
            .await
    }

    /// Send an ACPI shutdown request.
    pub async fn shutdown(&self, id: ServerId) -> Result<Action> {
        self.post_action::<()>(self.server_action_url(id, "shutdown")?, None)
            .await
    }

    /// Reset the root password. The server must be running.
    pub async fn reset_password(&self, id: ServerId) -> Result<ResetPasswordResponse> {
        self.post_empty(self.server_action_url(id, "reset_password")?)
            .await
    }

    /// Boot into the rescue system on the next reboot.
    ///
    /// Passing `None` sends no body and lets the API pick its defaults.
    pub async fn enable_rescue(
        &self,
        id: ServerId,
        request: Option<&EnableRescueRequest>,
    ) -> Result<EnableRescueResponse> {
        let url = self.server_action_url(id, "enable_rescue")?;
        match request {
            Some(request) => self.post_json(url, request).await,
            None => self.post_empty(url).await,
        }
    }

    /// Disable the rescue system.
    pub async fn disable_rescue(&self, id: ServerId) -> Result<Action> {
        self.post_action::<()>(self.server_action_url(id, "disable_rescue")?, None)
            .await
    }

    /// Reinstall a server from an image. All data on the disk is lost.
    pub async fn rebuild(&self, id: ServerId, request: &RebuildRequest) -> Result<RebuildResponse> {
        self.post_json(self.server_action_url(id, "rebuild")?, request)
            .await
    }

    /// Change the server type. The server must be powered off.
    pub async fn change_type(&self, id: ServerId, request: &ChangeTypeRequest) -> Result<Action> {
        self.post_action(self.server_action_url(id, "change_type")?, Some(request))
            .await
    }

    /// Create a snapshot or backup image of a server's disk.
    pub async fn create_image(
        &self,
        id: ServerId,
        request: &CreateImageRequest,
    ) -> Result<CreateImageResponse> {
        self.post_json(self.server_action_url(id, "create_image")?, request)
            .await
    }

    /// Enable daily backups.
    pub async fn enable_backup(&self, id: ServerId) -> Result<Action> {
        self.post_action::<()>(self.server_action_url(id, "enable_backup")?, None)
            .await
    }

    /// Disable backups. Existing backups are deleted.
    pub async fn disable_backup(&self, id: ServerId) -> Result<Action> {
        self.post_action::<()>(self.server_action_url(id, "disable_backup")?, None)
            .await
    }

    /// Attach an ISO to the virtual CD drive.
    pub async fn attach_iso(&self, id: ServerId, request: &AttachIsoRequest) -> Result<Action> {
        self.post_action(self.server_action_url(id, "attach_iso")?, Some(request))
            .await
    }

    /// Detach the attached ISO.
    pub async fn detach_iso(&self, id: ServerId) -> Result<Action> {
        self.post_action::<()>(self.server_action_url(id, "detach_iso")?, None)
            .await
    }

    /// Change the reverse DNS entry of a server address.
    pub async fn change_server_dns_ptr(
        &self,
        id: ServerId,
        request: &ChangeDnsPtrRequest,
    ) -> Result<Action> {
        self.post_action(self.server_action_url(id, "change_dns_ptr")?, Some(request))
            .await
    }

    /// Change delete/rebuild protection.
    pub async fn change_server_protection(
        &self,
        id: ServerId,
        request: &ChangeProtectionRequest,
    ) -> Result<Action> {
        self.post_action(self.server_action_url(id, "change_protection")?, Some(request))
            .await
    }

    /// Request a VNC console session.
    pub async fn request_console(&self, id: ServerId) -> Result<RequestConsoleResponse> {
        self.post_empty(self.server_action_url(id, "request_console")?)
            .await
    }

    /// Attach a server to a private network.
    pub async fn attach_server_to_network(
        &self,
        id: ServerId,
        request: &AttachToNetworkRequest,
    ) -> Result<Action> {
        self.post_action(self.server_action_url(id, "attach_to_network")?, Some(request))
            .await
    }

    /// Detach a server from a private network.
    pub async fn detach_server_from_network(
        &self,
        id: ServerId,
        request: &DetachFromNetworkRequest,
    ) -> Result<Action> {
        self.post_action(self.server_action_url(id, "detach_from_network")?, Some(request))
            .await
    }

    /// Add a server to a placement group. The server must be powered off.
    pub async fn add_to_placement_group(
        &self,
        id: ServerId,
        request: &AddToPlacementGroupRequest,
    ) -> Result<Action> {
        self.post_action(self.server_action_url(id, "add_to_placement_group")?, Some(request))
            .await
    }

    /// Remove a server from its placement group.
    pub async fn remove_from_placement_group(&self, id: ServerId) -> Result<Action> {
        self.post_action::<()>(self.server_action_url(id, "remove_from_placement_group")?, None)
            .await
    }
}
