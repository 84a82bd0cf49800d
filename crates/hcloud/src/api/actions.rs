//! Global action endpoints.

use crate::client::HcloudClient;
use crate::models::ActionListParams;
use crate::Result;
use hcloud_core::ids::ActionId;
use hcloud_core::types::{Action, ActionList, ActionResponse};

impl HcloudClient {
    /// Fetch a single action.
    pub async fn get_action(&self, id: ActionId) -> Result<Action> {
        let url = self.url(&format!("actions/{id}"))?;
        let response: ActionResponse = self.get_json(url).await?;
        Ok(response.action)
    }

    /// List actions.
    pub async fn list_actions(&self, params: &ActionListParams) -> Result<ActionList> {
        self.get_json(self.list_url("actions", params)?).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::{action_json, test_client};
    use crate::models::ActionListParams;
    use crate::{ActionId, ActionStatus, Error, ErrorCode};
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn get_action_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/actions/13"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "action": action_json() })))
            .mount(&server)
            .await;

        let action = test_client(&server).get_action(ActionId::new(13)).await.unwrap();
        assert_eq!(action.id, ActionId::new(13));
        assert_eq!(action.status, ActionStatus::Running);
    }

    #[tokio::test]
    async fn get_action_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/actions/999999"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {
                    "code": "not_found",
                    "message": "action with ID '999999' not found",
                    "details": null
                }
            })))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .get_action(ActionId::new(999_999))
            .await
            .unwrap_err();
        match err {
            Error::Api { status, error } => {
                assert_eq!(status, 404);
                assert_eq!(error.code, ErrorCode::NotFound);
                assert_eq!(error.message, "action with ID '999999' not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_actions_with_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/actions"))
            .and(query_param("status", "running"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "actions": [action_json()],
                "meta": {"pagination": {"page": 2, "per_page": 25, "previous_page": 1,
                    "next_page": null, "last_page": 2, "total_entries": 26}}
            })))
            .mount(&server)
            .await;

        let params = ActionListParams {
            common: crate::ListParams::default().with_page(2, 25),
            status: Some(ActionStatus::Running),
            ..ActionListParams::default()
        };
        let list = test_client(&server).list_actions(&params).await.unwrap();
        assert_eq!(list.actions.len(), 1);
        assert_eq!(list.meta.pagination.total_entries, Some(26));
        assert!(!list.meta.pagination.has_next());
    }
}
