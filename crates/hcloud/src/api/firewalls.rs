//! Firewall endpoints.

use crate::client::HcloudClient;
use crate::models::{
    ApplyToResourcesRequest, CreateFirewallRequest, CreateFirewallResponse, Firewall,
    FirewallList, FirewallListParams, FirewallResponse, RemoveFromResourcesRequest,
    SetRulesRequest, UpdateFirewallRequest,
};
use crate::Result;
use hcloud_core::ids::FirewallId;
use hcloud_core::types::{Action, ActionsResponse};
use hcloud_core::UrlBuilder;

impl HcloudClient {
    fn firewall_action_url(&self, id: FirewallId, action: &str) -> Result<UrlBuilder> {
        self.url(&format!("firewalls/{id}/actions/{action}"))
    }

    /// List firewalls.
    pub async fn list_firewalls(&self, params: &FirewallListParams) -> Result<FirewallList> {
        self.get_json(self.list_url("firewalls", params)?).await
    }

    /// Fetch a single firewall.
    pub async fn get_firewall(&self, id: FirewallId) -> Result<Firewall> {
        let url = self.url(&format!("firewalls/{id}"))?;
        let response: FirewallResponse = self.get_json(url).await?;
        Ok(response.firewall)
    }

    /// Create a firewall.
    pub async fn create_firewall(&self, request: &CreateFirewallRequest) -> Result<CreateFirewallResponse> {
        self.post_json(self.url("firewalls")?, request).await
    }

    /// Change the name or labels of a firewall.
    pub async fn update_firewall(&self, id: FirewallId, request: &UpdateFirewallRequest) -> Result<Firewall> {
        let url = self.url(&format!("firewalls/{id}"))?;
        let response: FirewallResponse = self.put_json(url, request).await?;
        Ok(response.firewall)
    }

    /// Delete a firewall that is not applied anywhere.
    pub async fn delete_firewall(&self, id: FirewallId) -> Result<()> {
        self.delete_json(self.url(&format!("firewalls/{id}"))?).await
    }

    /// Replace all rules of a firewall.
    pub async fn set_firewall_rules(&self, id: FirewallId, request: &SetRulesRequest) -> Result<Vec<Action>> {
        let response: ActionsResponse = self
            .post_json(self.firewall_action_url(id, "set_rules")?, request)
            .await?;
        Ok(response.actions)
    }

    /// Apply a firewall to servers or label selectors.
    pub async fn apply_firewall_to_resources(
        &self,
        id: FirewallId,
        request: &ApplyToResourcesRequest,
    ) -> Result<Vec<Action>> {
        let response: ActionsResponse = self
            .post_json(self.firewall_action_url(id, "apply_to_resources")?, request)
            .await?;
        Ok(response.actions)
    }

    /// Remove a firewall from servers or label selectors.
    pub async fn remove_firewall_from_resources(
        &self,
        id: FirewallId,
        request: &RemoveFromResourcesRequest,
    ) -> Result<Vec<Action>> {
        let response: ActionsResponse = self
            .post_json(self.firewall_action_url(id, "remove_from_resources")?, request)
            .await?;
        Ok(response.actions)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::{action_json, test_client};
    use crate::models::{
        ApplyToResourcesRequest, CreateFirewallRequest, FirewallResource, FirewallRule,
        RuleDirection, RuleProtocol, SetRulesRequest,
    };
    use crate::{FirewallId, ServerId};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn create_firewall_with_rules() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/firewalls"))
            .and(body_json(json!({
                "name": "web",
                "rules": [{"direction": "in", "protocol": "tcp", "port": "80", "source_ips": ["0.0.0.0/0", "::/0"]}]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "firewall": {
                    "id": 38, "name": "web", "labels": {}, "created": "2016-01-30T23:50:00+00:00",
                    "rules": [{"direction": "in", "protocol": "tcp", "port": "80",
                        "source_ips": ["0.0.0.0/0", "::/0"], "destination_ips": [], "description": null}],
                    "applied_to": []
                },
                "actions": [action_json()]
            })))
            .mount(&server)
            .await;

        let request = CreateFirewallRequest {
            name: "web".into(),
            rules: vec![FirewallRule::inbound(
                RuleProtocol::Tcp,
                Some("80"),
                vec!["0.0.0.0/0".into(), "::/0".into()],
            )],
            ..CreateFirewallRequest::default()
        };
        let response = test_client(&server).create_firewall(&request).await.unwrap();
        assert_eq!(response.firewall.rules[0].direction, RuleDirection::In);
        assert_eq!(response.actions.len(), 1);
    }

    #[tokio::test]
    async fn clear_rules_sends_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/firewalls/38/actions/set_rules"))
            .and(body_json(json!({"rules": []})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "actions": [action_json(), action_json()] })))
            .mount(&server)
            .await;

        let actions = test_client(&server)
            .set_firewall_rules(FirewallId::new(38), &SetRulesRequest::default())
            .await
            .unwrap();
        assert_eq!(actions.len(), 2);
    }

    #[tokio::test]
    async fn apply_to_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/firewalls/38/actions/apply_to_resources"))
            .and(body_json(json!({"apply_to": [{"type": "server", "server": {"id": 42}}]})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "actions": [action_json()] })))
            .mount(&server)
            .await;

        let request = ApplyToResourcesRequest {
            apply_to: vec![FirewallResource::server(ServerId::new(42))],
        };
        test_client(&server)
            .apply_firewall_to_resources(FirewallId::new(38), &request)
            .await
            .unwrap();
    }
}
