//! Multi-step server workflows.
//!
//! Each workflow issues a fixed sequence of requests and stops at the first
//! failure. Actions returned by the API are not polled.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::client::HcloudClient;
use crate::models::{ChangeTypeRequest, EnableRescueRequest, EnableRescueResponse};
use crate::{Action, Error, Result, ServerId};

/// Wait between powering a server off and requesting the type change.
///
/// The API rejects `change_type` with `locked` while the power-off action is
/// still running; this delay gives it time to settle.
pub const CHANGE_TYPE_POWER_OFF_DELAY: Duration = Duration::from_secs(7);

impl HcloudClient {
    /// Enable the rescue system and reset the server so it boots into it.
    ///
    /// If enabling rescue fails, no reset is sent. If the reset fails, its
    /// error is returned even though rescue mode is already enabled; the
    /// caller can retry with [`HcloudClient::reset`].
    pub async fn enable_rescue_and_reset(
        &self,
        id: ServerId,
        request: Option<&EnableRescueRequest>,
    ) -> Result<EnableRescueResponse> {
        let rescue = self.enable_rescue(id, request).await?;
        info!(server = %id, action = %rescue.action.id, "Rescue mode enabled, resetting server");

        if let Err(err) = self.reset(id).await {
            warn!(server = %id, error = %err, "Reset after enabling rescue mode failed");
            return Err(err);
        }

        Ok(rescue)
    }

    /// Power a server off, wait [`CHANGE_TYPE_POWER_OFF_DELAY`] and change its
    /// type.
    pub async fn change_server_type(&self, id: ServerId, request: &ChangeTypeRequest) -> Result<Action> {
        self.change_server_type_with_cancel(id, request, &CancellationToken::new())
            .await
    }

    /// Like [`HcloudClient::change_server_type`], but stops during the delay
    /// when `cancel` fires.
    ///
    /// A cancelled call returns [`Error::Cancelled`] and never sends the type
    /// change. The server stays powered off.
    pub async fn change_server_type_with_cancel(
        &self,
        id: ServerId,
        request: &ChangeTypeRequest,
        cancel: &CancellationToken,
    ) -> Result<Action> {
        let power_off = self.power_off(id).await?;
        info!(
            server = %id,
            action = %power_off.id,
            delay_secs = CHANGE_TYPE_POWER_OFF_DELAY.as_secs(),
            "Server powering off, waiting before type change"
        );

        tokio::select! {
            () = cancel.cancelled() => {
                info!(server = %id, "Server type change cancelled");
                return Err(Error::Cancelled(format!(
                    "Type change of server {id} cancelled after power-off"
                )));
            }
            () = tokio::time::sleep(CHANGE_TYPE_POWER_OFF_DELAY) => {}
        }

        let action = self.change_type(id, request).await?;
        info!(server = %id, server_type = %request.server_type, action = %action.id, "Server type change requested");
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::ACTION_JSON;
    use crate::ErrorCode;
    use async_trait::async_trait;
    use hcloud_core::transport::{HttpRequest, HttpResponse, Transport};
    use reqwest::{Method, StatusCode};
    use std::sync::{Arc, Mutex};
    use tokio::time::Instant;

    mockall::mock! {
        pub Transport {}

        #[async_trait]
        impl Transport for Transport {
            async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
        }
    }

    type CallLog = Arc<Mutex<Vec<(String, Instant)>>>;

    fn client(transport: MockTransport) -> HcloudClient {
        HcloudClient::builder("test-token")
            .unwrap()
            .with_api_url("https://api.test/v1")
            .with_transport(Arc::new(transport))
            .build()
            .unwrap()
    }

    fn action_body() -> String {
        format!(r#"{{"action": {ACTION_JSON}}}"#)
    }

    fn locked_body() -> String {
        r#"{"error": {"code": "locked", "message": "server is locked", "details": null}}"#.to_string()
    }

    /// Records every request path and answers from `respond`.
    fn recording_transport<F>(log: &CallLog, respond: F) -> MockTransport
    where
        F: Fn(&str) -> HttpResponse + Send + 'static,
    {
        let log = Arc::clone(log);
        let mut transport = MockTransport::new();
        transport.expect_send().returning(move |request| {
            assert_eq!(request.method, Method::POST);
            let path = request.url.trim_start_matches("https://api.test/v1").to_string();
            log.lock().unwrap().push((path.clone(), Instant::now()));
            Ok(respond(&path))
        });
        transport
    }

    fn paths(log: &CallLog) -> Vec<String> {
        log.lock().unwrap().iter().map(|(path, _)| path.clone()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn change_type_waits_after_power_off() {
        let log = CallLog::default();
        let transport = recording_transport(&log, |_| {
            HttpResponse::new(StatusCode::CREATED, action_body())
        });

        let action = client(transport)
            .change_server_type(ServerId::new(42), &ChangeTypeRequest::new("cx32", false))
            .await
            .unwrap();
        assert_eq!(action.command, "start_server");

        let calls = log.lock().unwrap().clone();
        assert_eq!(
            paths(&log),
            vec![
                "/servers/42/actions/poweroff".to_string(),
                "/servers/42/actions/change_type".to_string()
            ]
        );
        assert!(calls[1].1 - calls[0].1 >= CHANGE_TYPE_POWER_OFF_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn change_type_cancelled_during_delay() {
        let log = CallLog::default();
        let transport = recording_transport(&log, |_| {
            HttpResponse::new(StatusCode::CREATED, action_body())
        });
        let client = client(transport);
        let cancel = CancellationToken::new();

        let task = {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                client
                    .change_server_type_with_cancel(
                        ServerId::new(42),
                        &ChangeTypeRequest::new("cx32", false),
                        &cancel,
                    )
                    .await
            })
        };

        tokio::time::sleep(Duration::from_secs(3)).await;
        cancel.cancel();

        let err = task.await.unwrap().unwrap_err();
        assert!(matches!(err, Error::Cancelled(_)));
        assert_eq!(paths(&log), vec!["/servers/42/actions/poweroff".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn change_type_skipped_when_power_off_fails() {
        let log = CallLog::default();
        let transport = recording_transport(&log, |_| {
            HttpResponse::new(StatusCode::LOCKED, locked_body())
        });

        let err = client(transport)
            .change_server_type(ServerId::new(42), &ChangeTypeRequest::new("cx32", false))
            .await
            .unwrap_err();
        assert_eq!(err.api_code(), Some(&ErrorCode::Locked));
        assert_eq!(paths(&log).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn change_type_locked_is_returned() {
        let log = CallLog::default();
        let transport = recording_transport(&log, |path| {
            if path.ends_with("change_type") {
                HttpResponse::new(StatusCode::LOCKED, locked_body())
            } else {
                HttpResponse::new(StatusCode::CREATED, action_body())
            }
        });

        let err = client(transport)
            .change_server_type(ServerId::new(42), &ChangeTypeRequest::new("cx32", false))
            .await
            .unwrap_err();
        assert_eq!(err.api_code(), Some(&ErrorCode::Locked));
        assert_eq!(paths(&log).len(), 2);
    }

    #[tokio::test]
    async fn rescue_then_reset() {
        let log = CallLog::default();
        let transport = recording_transport(&log, |path| {
            if path.ends_with("enable_rescue") {
                HttpResponse::new(
                    StatusCode::CREATED,
                    format!(r#"{{"root_password": "secret", "action": {ACTION_JSON}}}"#),
                )
            } else {
                HttpResponse::new(StatusCode::CREATED, action_body())
            }
        });

        let response = client(transport)
            .enable_rescue_and_reset(ServerId::new(7), None)
            .await
            .unwrap();
        assert_eq!(response.root_password.as_deref(), Some("secret"));
        assert_eq!(
            paths(&log),
            vec![
                "/servers/7/actions/enable_rescue".to_string(),
                "/servers/7/actions/reset".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn rescue_failure_skips_reset() {
        let log = CallLog::default();
        let transport = recording_transport(&log, |_| {
            HttpResponse::new(StatusCode::LOCKED, locked_body())
        });

        let err = client(transport)
            .enable_rescue_and_reset(ServerId::new(7), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api { status: 423, .. }));
        assert_eq!(paths(&log), vec!["/servers/7/actions/enable_rescue".to_string()]);
    }

    #[tokio::test]
    async fn reset_failure_is_propagated() {
        let log = CallLog::default();
        let transport = recording_transport(&log, |path| {
            if path.ends_with("reset") {
                HttpResponse::new(StatusCode::BAD_GATEWAY, "upstream unavailable")
            } else {
                HttpResponse::new(
                    StatusCode::CREATED,
                    format!(r#"{{"root_password": null, "action": {ACTION_JSON}}}"#),
                )
            }
        });

        let err = client(transport)
            .enable_rescue_and_reset(ServerId::new(7), None)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            Error::Transport {
                status: Some(502),
                body: "upstream unavailable".into()
            }
        );
        assert_eq!(paths(&log).len(), 2);
    }
}
