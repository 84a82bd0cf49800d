//! Action list filters.

use hcloud_core::ids::ActionId;
use hcloud_core::types::{ActionStatus, ListParams};
use hcloud_core::{QueryParams, UrlBuilder};

/// Parameters of `GET /actions` and the per-resource action lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionListParams {
    /// Common list parameters; `name` and `label_selector` are ignored by the API
    pub common: ListParams,
    /// Filter by action id
    pub id: Option<ActionId>,
    /// Filter by status
    pub status: Option<ActionStatus>,
}

impl QueryParams for ActionListParams {
    fn apply(&self, builder: UrlBuilder) -> UrlBuilder {
        self.common
            .apply(builder)
            .query_param_if_present("id", self.id)
            .query_param_if_present("status", self.status.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_status_and_id() {
        let params = ActionListParams {
            id: Some(ActionId::new(13)),
            status: Some(ActionStatus::Running),
            ..ActionListParams::default()
        };
        let uri = params.apply(UrlBuilder::new("/actions").unwrap()).to_uri();
        assert_eq!(uri, "/actions?id=13&status=running");
    }
}
