//! Volume endpoints.

use crate::client::HcloudClient;
use crate::models::{
    AttachVolumeRequest, CreateVolumeRequest, CreateVolumeResponse, ResizeVolumeRequest,
    UpdateVolumeRequest, Volume, VolumeList, VolumeListParams, VolumeResponse,
};
use crate::Result;
use hcloud_core::ids::VolumeId;
use hcloud_core::types::{Action, ChangeProtectionRequest};
use hcloud_core::UrlBuilder;

impl HcloudClient {
    fn volume_action_url(&self, id: VolumeId, action: &str) -> Result<UrlBuilder> {
        self.url(&format!("volumes/{id}/actions/{action}"))
    }

    /// List volumes.
    pub async fn list_volumes(&self, params: &VolumeListParams) -> Result<VolumeList> {
        self.get_json(self.list_url("volumes", params)?).await
    }

    /// Fetch a single volume.
    pub async fn get_volume(&self, id: VolumeId) -> Result<Volume> {
        let url = self.url(&format!("volumes/{id}"))?;
        let response: VolumeResponse = self.get_json(url).await?;
        Ok(response.volume)
    }

    /// Create a volume, optionally attached to a server.
    pub async fn create_volume(&self, request: &CreateVolumeRequest) -> Result<CreateVolumeResponse> {
        self.post_json(self.url("volumes")?, request).await
    }

    /// Change the name or labels of a volume.
    pub async fn update_volume(&self, id: VolumeId, request: &UpdateVolumeRequest) -> Result<Volume> {
        let url = self.url(&format!("volumes/{id}"))?;
        let response: VolumeResponse = self.put_json(url, request).await?;
        Ok(response.volume)
    }

    /// Delete a detached volume.
    pub async fn delete_volume(&self, id: VolumeId) -> Result<()> {
        self.delete_json(self.url(&format!("volumes/{id}"))?).await
    }

    /// Attach a volume to a server in the same location.
    pub async fn attach_volume(&self, id: VolumeId, request: &AttachVolumeRequest) -> Result<Action> {
        self.post_action(self.volume_action_url(id, "attach")?, Some(request))
            .await
    }

    /// Detach a volume from its server.
    pub async fn detach_volume(&self, id: VolumeId) -> Result<Action> {
        self.post_action::<()>(self.volume_action_url(id, "detach")?, None)
            .await
    }

    /// Grow a volume.
    pub async fn resize_volume(&self, id: VolumeId, request: &ResizeVolumeRequest) -> Result<Action> {
        self.post_action(self.volume_action_url(id, "resize")?, Some(request))
            .await
    }

    /// Change delete protection of a volume.
    pub async fn change_volume_protection(
        &self,
        id: VolumeId,
        request: &ChangeProtectionRequest,
    ) -> Result<Action> {
        self.post_action(self.volume_action_url(id, "change_protection")?, Some(request))
            .await
    }
}
