use super::{api_path, create_test_client};
use crate::PanelError;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn node_envelope(id: u64, name: &str) -> Value {
    json!({
        "object": "node",
        "attributes": {
            "id": id,
            "uuid": "1046d1d1-b8ef-4771-82b1-2bdd1d5ba6a8",
            "public": true,
            "name": name,
            "description": "",
            "location_id": 1,
            "fqdn": format!("{}.example.com", name),
            "scheme": "https",
            "behind_proxy": false,
            "maintenance_mode": false,
            "memory": 16384,
            "memory_overallocate": 0,
            "disk": 102400,
            "disk_overallocate": -1,
            "upload_size": 100,
            "daemon_listen": 8080,
            "daemon_sftp": 2022,
            "daemon_base": "/var/lib/pterodactyl/volumes",
            "created_at": "2024-01-01T00:00:00+00:00",
            "updated_at": "2024-01-01T00:00:00+00:00"
        }
    })
}

fn allocation_envelope(id: u64, port: u16, assigned: bool) -> Value {
    json!({
        "object": "allocation",
        "attributes": {
            "id": id,
            "ip": "10.0.0.5",
            "alias": null,
            "port": port,
            "notes": null,
            "assigned": assigned
        }
    })
}

#[tokio::test]
async fn test_nodes_list_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("nodes")))
        .and(header("Accept", "application/vnd.pterodactyl.v1+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [node_envelope(1, "wings-a"), node_envelope(2, "wings-b")]
        })))
        .mount(&mock_server)
        .await;

    let nodes = client.nodes().await.unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].fqdn, "wings-a.example.com");
    assert_eq!(nodes[1].disk_overallocate, -1);
    assert_eq!(nodes[1].daemon_sftp, 2022);
}

#[tokio::test]
async fn test_node_lookup() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("nodes/1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(node_envelope(1, "wings-a")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("nodes/99")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let node = client.node(1).await.unwrap().unwrap();
    assert_eq!(node.name, "wings-a");
    assert!(client.node(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_free_allocations_skip_assigned() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("nodes/1/allocations")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [
                allocation_envelope(10, 25565, true),
                allocation_envelope(11, 25566, false),
                allocation_envelope(12, 25567, true),
                allocation_envelope(13, 25568, false)
            ]
        })))
        .mount(&mock_server)
        .await;

    let free = client.free_allocations(1).await.unwrap();
    let ports: Vec<u16> = free.iter().map(|a| a.port).collect();
    assert_eq!(ports, vec![25566, 25568]);
    assert!(free.iter().all(|a| !a.assigned));
}

#[tokio::test]
async fn test_connection_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("nodes")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "list", "data": []})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    client.test_connection().await.unwrap();
}

#[tokio::test]
async fn test_connection_rejected_token() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("nodes")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{"code": "AuthenticationException", "status": "401", "detail": "Unauthenticated."}]
        })))
        .mount(&mock_server)
        .await;

    let result = client.test_connection().await;
    assert!(matches!(result, Err(PanelError::Api { status: 401, .. })));
}

#[tokio::test]
async fn test_nodes_list_undecodable_body() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("nodes")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let result = client.nodes().await;
    assert!(matches!(result, Err(PanelError::Decode { .. })));
}
