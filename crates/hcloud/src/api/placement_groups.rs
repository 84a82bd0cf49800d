//! Placement group endpoints.

use crate::client::HcloudClient;
use crate::models::{
    CreatePlacementGroupRequest, CreatePlacementGroupResponse, PlacementGroup, PlacementGroupList,
    PlacementGroupListParams, PlacementGroupResponse, UpdatePlacementGroupRequest,
};
use crate::Result;
use hcloud_core::ids::PlacementGroupId;

impl HcloudClient {
    /// List placement groups.
    pub async fn list_placement_groups(
        &self,
        params: &PlacementGroupListParams,
    ) -> Result<PlacementGroupList> {
        self.get_json(self.list_url("placement_groups", params)?).await
    }

    /// Fetch a single placement group.
    pub async fn get_placement_group(&self, id: PlacementGroupId) -> Result<PlacementGroup> {
        let url = self.url(&format!("placement_groups/{id}"))?;
        let response: PlacementGroupResponse = self.get_json(url).await?;
        Ok(response.placement_group)
    }

    /// Create a placement group.
    pub async fn create_placement_group(
        &self,
        request: &CreatePlacementGroupRequest,
    ) -> Result<CreatePlacementGroupResponse> {
        self.post_json(self.url("placement_groups")?, request).await
    }

    /// Change the name or labels of a placement group.
    pub async fn update_placement_group(
        &self,
        id: PlacementGroupId,
        request: &UpdatePlacementGroupRequest,
    ) -> Result<PlacementGroup> {
        let url = self.url(&format!("placement_groups/{id}"))?;
        let response: PlacementGroupResponse = self.put_json(url, request).await?;
        Ok(response.placement_group)
    }

    /// Delete a placement group.
    pub async fn delete_placement_group(&self, id: PlacementGroupId) -> Result<()> {
        self.delete_json(self.url(&format!("placement_groups/{id}"))?).await
    }
}
