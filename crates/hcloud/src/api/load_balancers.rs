//! Load balancer endpoints.

use crate::client::HcloudClient;
use crate::models::{
    Algorithm, AttachLoadBalancerToNetworkRequest, ChangeLoadBalancerTypeRequest,
    CreateLoadBalancerRequest, CreateLoadBalancerResponse, DeleteServiceRequest,
    DetachLoadBalancerFromNetworkRequest, LoadBalancer, LoadBalancerList, LoadBalancerListParams,
    LoadBalancerResponse, LoadBalancerService, LoadBalancerTypeList, Metrics, MetricsParams,
    MetricsResponse, TargetRequest, UpdateLoadBalancerRequest, UpdateServiceRequest,
};
use crate::Result;
use hcloud_core::ids::LoadBalancerId;
use hcloud_core::types::{Action, ChangeProtectionRequest, ListParams};
use hcloud_core::UrlBuilder;

impl HcloudClient {
    fn load_balancer_action_url(&self, id: LoadBalancerId, action: &str) -> Result<UrlBuilder> {
        self.url(&format!("load_balancers/{id}/actions/{action}"))
    }

    /// List load balancers.
    pub async fn list_load_balancers(
        &self,
        params: &LoadBalancerListParams,
    ) -> Result<LoadBalancerList> {
        self.get_json(self.list_url("load_balancers", params)?).await
    }

    /// Fetch a single load balancer.
    pub async fn get_load_balancer(&self, id: LoadBalancerId) -> Result<LoadBalancer> {
        let url = self.url(&format!("load_balancers/{id}"))?;
        let response: LoadBalancerResponse = self.get_json(url).await?;
        Ok(response.load_balancer)
    }

    /// Create a load balancer.
    pub async fn create_load_balancer(
        &self,
        request: &CreateLoadBalancerRequest,
    ) -> Result<CreateLoadBalancerResponse> {
        self.post_json(self.url("load_balancers")?, request).await
    }

    /// Change the name or labels of a load balancer.
    pub async fn update_load_balancer(
        &self,
        id: LoadBalancerId,
        request: &UpdateLoadBalancerRequest,
    ) -> Result<LoadBalancer> {
        let url = self.url(&format!("load_balancers/{id}"))?;
        let response: LoadBalancerResponse = self.put_json(url, request).await?;
        Ok(response.load_balancer)
    }

    /// Delete a load balancer.
    pub async fn delete_load_balancer(&self, id: LoadBalancerId) -> Result<()> {
        self.delete_json(self.url(&format!("load_balancers/{id}"))?).await
    }

    /// Fetch connection and bandwidth metrics of a load balancer.
    pub async fn get_load_balancer_metrics(
        &self,
        id: LoadBalancerId,
        params: &MetricsParams,
    ) -> Result<Metrics> {
        let url = self.list_url(&format!("load_balancers/{id}/metrics"), params)?;
        let response: MetricsResponse = self.get_json(url).await?;
        Ok(response.metrics)
    }

    /// Add a target.
    pub async fn add_target(&self, id: LoadBalancerId, target: &TargetRequest) -> Result<Action> {
        self.post_action(self.load_balancer_action_url(id, "add_target")?, Some(target))
            .await
    }

    /// Remove a target.
    pub async fn remove_target(&self, id: LoadBalancerId, target: &TargetRequest) -> Result<Action> {
        self.post_action(self.load_balancer_action_url(id, "remove_target")?, Some(target))
            .await
    }

    /// Add a service.
    pub async fn add_service(
        &self,
        id: LoadBalancerId,
        service: &LoadBalancerService,
    ) -> Result<Action> {
        self.post_action(self.load_balancer_action_url(id, "add_service")?, Some(service))
            .await
    }

    /// Update the service listening on `request.listen_port`.
    pub async fn update_service(
        &self,
        id: LoadBalancerId,
        request: &UpdateServiceRequest,
    ) -> Result<Action> {
        self.post_action(self.load_balancer_action_url(id, "update_service")?, Some(request))
            .await
    }

    /// Delete the service listening on `request.listen_port`.
    pub async fn delete_service(
        &self,
        id: LoadBalancerId,
        request: &DeleteServiceRequest,
    ) -> Result<Action> {
        self.post_action(self.load_balancer_action_url(id, "delete_service")?, Some(request))
            .await
    }

    /// Change the balancing algorithm.
    pub async fn change_algorithm(&self, id: LoadBalancerId, algorithm: &Algorithm) -> Result<Action> {
        self.post_action(self.load_balancer_action_url(id, "change_algorithm")?, Some(algorithm))
            .await
    }

    /// Change the load balancer type.
    pub async fn change_load_balancer_type(
        &self,
        id: LoadBalancerId,
        request: &ChangeLoadBalancerTypeRequest,
    ) -> Result<Action> {
        self.post_action(self.load_balancer_action_url(id, "change_type")?, Some(request))
            .await
    }

    /// Attach a load balancer to a private network.
    pub async fn attach_load_balancer_to_network(
        &self,
        id: LoadBalancerId,
        request: &AttachLoadBalancerToNetworkRequest,
    ) -> Result<Action> {
        self.post_action(self.load_balancer_action_url(id, "attach_to_network")?, Some(request))
            .await
    }

    /// Detach a load balancer from a private network.
    pub async fn detach_load_balancer_from_network(
        &self,
        id: LoadBalancerId,
        request: &DetachLoadBalancerFromNetworkRequest,
    ) -> Result<Action> {
        self.post_action(self.load_balancer_action_url(id, "detach_from_network")?, Some(request))
            .await
    }

    /// Enable the public interface.
    pub async fn enable_public_interface(&self, id: LoadBalancerId) -> Result<Action> {
        self.post_action::<()>(self.load_balancer_action_url(id, "enable_public_interface")?, None)
            .await
    }

    /// Disable the public interface. The load balancer must be in a network.
    pub async fn disable_public_interface(&self, id: LoadBalancerId) -> Result<Action> {
        self.post_action::<()>(self.load_balancer_action_url(id, "disable_public_interface")?, None)
            .await
    }

    /// Change delete protection of a load balancer.
    pub async fn change_load_balancer_protection(
        &self,
        id: LoadBalancerId,
        request: &ChangeProtectionRequest,
    ) -> Result<Action> {
        self.post_action(self.load_balancer_action_url(id, "change_protection")?, Some(request))
            .await
    }

    /// List load balancer types.
    pub async fn list_load_balancer_types(&self, params: &ListParams) -> Result<LoadBalancerTypeList> {
        self.get_json(self.list_url("load_balancer_types", params)?).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::{action_json, test_client};
    use crate::models::{
        Algorithm, AlgorithmType, DeleteServiceRequest, HealthStatusValue, TargetRequest,
        TargetType,
    };
    use crate::{ListParams, LoadBalancerId, ServerId};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn get_load_balancer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/load_balancers/4711"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "load_balancer": {
                    "id": 4711, "name": "Web Frontend",
                    "public_net": {"enabled": true,
                        "ipv4": {"ip": "131.232.99.1", "dns_ptr": "example.com"},
                        "ipv6": {"ip": "2001:db8::1", "dns_ptr": "example.com"}},
                    "private_net": [{"network": 4711, "ip": "10.0.255.1"}],
                    "location": {"id": 1, "name": "fsn1"},
                    "load_balancer_type": {"id": 1, "name": "lb11", "description": "LB11",
                        "max_connections": 20000, "max_services": 5, "max_targets": 25,
                        "max_assigned_certificates": 10, "deprecated": null, "prices": []},
                    "protection": {"delete": false}, "labels": {},
                    "targets": [{"type": "server", "server": {"id": 80},
                        "health_status": [{"listen_port": 443, "status": "healthy"}],
                        "use_private_ip": false}],
                    "services": [],
                    "algorithm": {"type": "round_robin"},
                    "outgoing_traffic": 123456, "ingoing_traffic": 123456,
                    "included_traffic": 10000, "created": "2016-01-30T23:50:00+00:00"
                }
            })))
            .mount(&server)
            .await;

        let lb = test_client(&server)
            .get_load_balancer(LoadBalancerId::new(4711))
            .await
            .unwrap();
        assert_eq!(lb.algorithm.kind, AlgorithmType::RoundRobin);
        assert_eq!(lb.targets[0].kind, TargetType::Server);
        assert_eq!(lb.targets[0].server.unwrap().id, ServerId::new(80));
        assert_eq!(lb.targets[0].health_status[0].status, HealthStatusValue::Healthy);
        assert!(lb.public_net.enabled);
    }

    #[tokio::test]
    async fn target_and_service_actions() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/load_balancers/4711/actions/add_target"))
            .and(body_json(json!({"type": "server", "server": {"id": 80}, "use_private_ip": true})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "action": action_json() })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/load_balancers/4711/actions/delete_service"))
            .and(body_json(json!({"listen_port": 443})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "action": action_json() })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/load_balancers/4711/actions/change_algorithm"))
            .and(body_json(json!({"type": "least_connections"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "action": action_json() })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let id = LoadBalancerId::new(4711);
        client
            .add_target(id, &TargetRequest::server(ServerId::new(80)).with_private_ip(true))
            .await
            .unwrap();
        client
            .delete_service(id, &DeleteServiceRequest { listen_port: 443 })
            .await
            .unwrap();
        client
            .change_algorithm(
                id,
                &Algorithm {
                    kind: AlgorithmType::LeastConnections,
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn list_load_balancer_types() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/load_balancer_types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "load_balancer_types": [{"id": 1, "name": "lb11", "max_connections": 20000,
                    "max_services": 5, "max_targets": 25, "max_assigned_certificates": 10}]
            })))
            .mount(&server)
            .await;

        let list = test_client(&server)
            .list_load_balancer_types(&ListParams::default())
            .await
            .unwrap();
        assert_eq!(list.load_balancer_types[0].max_targets, 25);
    }
}
