//! Image and ISO endpoints.

use crate::client::HcloudClient;
use crate::models::{
    Image, ImageList, ImageListParams, ImageResponse, Iso, IsoList, IsoResponse,
    UpdateImageRequest,
};
use crate::Result;
use hcloud_core::ids::{ImageId, IsoId};
use hcloud_core::types::{Action, ChangeProtectionRequest, ListParams};

impl HcloudClient {
    /// List images.
    pub async fn list_images(&self, params: &ImageListParams) -> Result<ImageList> {
        self.get_json(self.list_url("images", params)?).await
    }

    /// Fetch a single image.
    pub async fn get_image(&self, id: ImageId) -> Result<Image> {
        let url = self.url(&format!("images/{id}"))?;
        let response: ImageResponse = self.get_json(url).await?;
        Ok(response.image)
    }

    /// Update the description, type or labels of an image.
    pub async fn update_image(&self, id: ImageId, request: &UpdateImageRequest) -> Result<Image> {
        let url = self.url(&format!("images/{id}"))?;
        let response: ImageResponse = self.put_json(url, request).await?;
        Ok(response.image)
    }

    /// Delete a snapshot or backup image.
    pub async fn delete_image(&self, id: ImageId) -> Result<()> {
        self.delete_json(self.url(&format!("images/{id}"))?).await
    }

    /// Change delete protection of an image.
    pub async fn change_image_protection(
        &self,
        id: ImageId,
        request: &ChangeProtectionRequest,
    ) -> Result<Action> {
        let url = self.url(&format!("images/{id}/actions/change_protection"))?;
        self.post_action(url, Some(request)).await
    }

    /// List ISOs.
    pub async fn list_isos(&self, params: &ListParams) -> Result<IsoList> {
        self.get_json(self.list_url("isos", params)?).await
    }

    /// Fetch a single ISO.
    pub async fn get_iso(&self, id: IsoId) -> Result<Iso> {
        let url = self.url(&format!("isos/{id}"))?;
        let response: IsoResponse = self.get_json(url).await?;
        Ok(response.iso)
    }
}
