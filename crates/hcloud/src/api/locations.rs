//! Location and datacenter endpoints.

use crate::client::HcloudClient;
use crate::models::{
    Datacenter, DatacenterList, DatacenterResponse, Location, LocationList, LocationResponse,
};
use crate::Result;
use hcloud_core::ids::{DatacenterId, LocationId};
use hcloud_core::types::ListParams;

impl HcloudClient {
    /// List locations.
    pub async fn list_locations(&self, params: &ListParams) -> Result<LocationList> {
        self.get_json(self.list_url("locations", params)?).await
    }

    /// Fetch a single location.
    pub async fn get_location(&self, id: LocationId) -> Result<Location> {
        let url = self.url(&format!("locations/{id}"))?;
        let response: LocationResponse = self.get_json(url).await?;
        Ok(response.location)
    }

    /// List datacenters, including the recommended one.
    pub async fn list_datacenters(&self, params: &ListParams) -> Result<DatacenterList> {
        self.get_json(self.list_url("datacenters", params)?).await
    }

    /// Fetch a single datacenter.
    pub async fn get_datacenter(&self, id: DatacenterId) -> Result<Datacenter> {
        let url = self.url(&format!("datacenters/{id}"))?;
        let response: DatacenterResponse = self.get_json(url).await?;
        Ok(response.datacenter)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::test_client;
    use crate::{DatacenterId, ListParams, LocationId, ServerTypeId};
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn location_json() -> Value {
        json!({
            "id": 1, "name": "fsn1", "description": "Falkenstein DC Park 1",
            "country": "DE", "city": "Falkenstein", "latitude": 50.47612,
            "longitude": 12.370071, "network_zone": "eu-central"
        })
    }

    #[tokio::test]
    async fn get_location() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/locations/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "location": location_json() })))
            .mount(&server)
            .await;

        let location = test_client(&server).get_location(LocationId::new(1)).await.unwrap();
        assert_eq!(location.network_zone, "eu-central");
    }

    #[tokio::test]
    async fn list_datacenters_with_recommendation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/datacenters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "datacenters": [{
                    "id": 2, "name": "fsn1-dc8", "description": "Falkenstein 1 DC 8",
                    "location": location_json(),
                    "server_types": {"supported": [1, 2], "available": [1], "available_for_migration": []}
                }],
                "recommendation": 2
            })))
            .mount(&server)
            .await;

        let list = test_client(&server)
            .list_datacenters(&ListParams::default())
            .await
            .unwrap();
        assert_eq!(list.recommendation, Some(DatacenterId::new(2)));
        assert_eq!(
            list.datacenters[0].server_types.available,
            vec![ServerTypeId::new(1)]
        );
    }
}
