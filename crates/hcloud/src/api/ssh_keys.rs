//! SSH key endpoints.

use crate::client::HcloudClient;
use crate::models::{
    CreateSshKeyRequest, SshKey, SshKeyList, SshKeyListParams, SshKeyResponse, UpdateSshKeyRequest,
};
use crate::Result;
use hcloud_core::ids::SshKeyId;

impl HcloudClient {
    /// List SSH keys.
    pub async fn list_ssh_keys(&self, params: &SshKeyListParams) -> Result<SshKeyList> {
        self.get_json(self.list_url("ssh_keys", params)?).await
    }

    /// Fetch a single SSH key.
    pub async fn get_ssh_key(&self, id: SshKeyId) -> Result<SshKey> {
        let url = self.url(&format!("ssh_keys/{id}"))?;
        let response: SshKeyResponse = self.get_json(url).await?;
        Ok(response.ssh_key)
    }

    /// Upload a public key.
    pub async fn create_ssh_key(&self, request: &CreateSshKeyRequest) -> Result<SshKey> {
        let response: SshKeyResponse = self.post_json(self.url("ssh_keys")?, request).await?;
        Ok(response.ssh_key)
    }

    /// Change the name or labels of an SSH key.
    pub async fn update_ssh_key(&self, id: SshKeyId, request: &UpdateSshKeyRequest) -> Result<SshKey> {
        let url = self.url(&format!("ssh_keys/{id}"))?;
        let response: SshKeyResponse = self.put_json(url, request).await?;
        Ok(response.ssh_key)
    }

    /// Delete an SSH key.
    pub async fn delete_ssh_key(&self, id: SshKeyId) -> Result<()> {
        self.delete_json(self.url(&format!("ssh_keys/{id}"))?).await
    }
}
