//! Server type endpoints.

use crate::client::HcloudClient;
use crate::models::{ServerType, ServerTypeList, ServerTypeResponse};
use crate::Result;
use hcloud_core::ids::ServerTypeId;
use hcloud_core::types::ListParams;

impl HcloudClient {
    /// List server types.
    pub async fn list_server_types(&self, params: &ListParams) -> Result<ServerTypeList> {
        self.get_json(self.list_url("server_types", params)?).await
    }

    /// Fetch a single server type.
    pub async fn get_server_type(&self, id: ServerTypeId) -> Result<ServerType> {
        let url = self.url(&format!("server_types/{id}"))?;
        let response: ServerTypeResponse = self.get_json(url).await?;
        Ok(response.server_type)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::test_client;
    use crate::models::Architecture;
    use crate::{ListParams, ServerTypeId};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn list_server_types_by_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/server_types"))
            .and(query_param("name", "cax11"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "server_types": [{
                    "id": 45, "name": "cax11", "description": "CAX11", "cores": 2,
                    "memory": 4.0, "disk": 40, "storage_type": "local", "cpu_type": "shared",
                    "architecture": "arm", "deprecated": false, "deprecation": null,
                    "prices": [{
                        "location": "fsn1",
                        "price_hourly": {"net": "0.0052", "gross": "0.0062"},
                        "price_monthly": {"net": "3.2900", "gross": "3.9200"},
                        "included_traffic": 21_990_232_555_520_u64,
                        "price_per_tb_traffic": {"net": "1.0000", "gross": "1.1900"}
                    }]
                }]
            })))
            .mount(&server)
            .await;

        let list = test_client(&server)
            .list_server_types(&ListParams::default().with_name("cax11"))
            .await
            .unwrap();
        let cax11 = &list.server_types[0];
        assert_eq!(cax11.id, ServerTypeId::new(45));
        assert_eq!(cax11.architecture, Some(Architecture::Arm));
        assert_eq!(cax11.prices[0].price_monthly.gross, "3.9200");
        assert_eq!(cax11.prices[0].included_traffic, Some(21_990_232_555_520));
    }

    #[tokio::test]
    async fn get_server_type_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/server_types/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "server_type": {"id": 1, "name": "cx22", "cores": 2, "memory": 4.0, "disk": 40}
            })))
            .mount(&server)
            .await;

        let server_type = test_client(&server)
            .get_server_type(ServerTypeId::new(1))
            .await
            .unwrap();
        assert_eq!(server_type.name, "cx22");
        assert!(server_type.prices.is_empty());
        assert!(server_type.deprecation.is_none());
    }
}
