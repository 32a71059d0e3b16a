use super::{
    api_path, create_test_client, egg_envelope, egg_with_variables_envelope, server_envelope,
};
use crate::{FeatureLimits, Limits, NewServer, PanelError};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param, query_param_is_missing},
};

fn limits() -> Limits {
    Limits {
        memory: 1024,
        swap: -1,
        disk: 2048,
        io: 500,
        cpu: 100,
        threads: None,
    }
}

fn new_server() -> NewServer {
    NewServer::new("survival", 3, 1, 17, 517, limits()).external_id("order-7")
}

async fn mount_egg(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(api_path("nests/1/eggs/17")))
        .and(query_param_is_missing("include"))
        .respond_with(ResponseTemplate::new(200).set_body_json(egg_envelope()))
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("nests/1/eggs/17")))
        .and(query_param("include", "variables"))
        .respond_with(ResponseTemplate::new(200).set_body_json(egg_with_variables_envelope()))
        .mount(mock_server)
        .await;
}

/// Method, path and query of every request the mock server saw, in order.
async fn request_log(mock_server: &MockServer) -> Vec<String> {
    mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| match request.url.query() {
            Some(query) => format!("{} {}?{}", request.method, request.url.path(), query),
            None => format!("{} {}", request.method, request.url.path()),
        })
        .collect()
}

#[tokio::test]
async fn test_create_server_payload() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_egg(&mock_server).await;

    Mock::given(method("POST"))
        .and(path(api_path("servers")))
        .respond_with(ResponseTemplate::new(201).set_body_json(server_envelope(42, "order-7")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = client.create_server(&new_server()).await.unwrap();
    assert_eq!(created.id, 42);

    let requests = mock_server.received_requests().await.unwrap();
    let post = requests
        .iter()
        .find(|request| request.method.as_str() == "POST")
        .unwrap();
    let payload: Value = serde_json::from_slice(&post.body).unwrap();

    assert_eq!(payload["docker_image"], "alpine");
    assert_eq!(payload["startup"], "echo hi");
    assert_eq!(payload["environment"], json!({"PORT": "25565"}));
    assert_eq!(payload["feature_limits"]["databases"], Value::Null);
    assert_eq!(payload["feature_limits"]["allocations"], Value::Null);
    assert_eq!(payload["allocation"], json!({"default": 517}));
    assert_eq!(payload["limits"]["swap"], -1);
    assert_eq!(payload["external_id"], "order-7");
    assert_eq!(payload["oom_disabled"], true);
    assert_eq!(payload["start_on_completion"], false);

    assert_eq!(
        request_log(&mock_server).await,
        vec![
            "GET /api/application/nests/1/eggs/17".to_string(),
            "GET /api/application/nests/1/eggs/17?include=variables".to_string(),
            "POST /api/application/servers".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_create_server_explicit_feature_limits() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_egg(&mock_server).await;

    Mock::given(method("POST"))
        .and(path(api_path("servers")))
        .respond_with(ResponseTemplate::new(201).set_body_json(server_envelope(42, "order-7")))
        .mount(&mock_server)
        .await;

    let server = new_server().feature_limits(FeatureLimits {
        databases: Some(1),
        allocations: Some(2),
        backups: None,
    });
    client.create_server(&server).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let post = requests
        .iter()
        .find(|request| request.method.as_str() == "POST")
        .unwrap();
    let payload: Value = serde_json::from_slice(&post.body).unwrap();
    assert_eq!(
        payload["feature_limits"],
        json!({"databases": 1, "allocations": 2})
    );
}

#[tokio::test]
async fn test_create_server_zero_valued_response() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_egg(&mock_server).await;

    Mock::given(method("POST"))
        .and(path(api_path("servers")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"attributes": {}})))
        .mount(&mock_server)
        .await;

    let result = client.create_server(&new_server()).await;
    assert!(matches!(result, Err(PanelError::AnomalousResponse(_))));
}

#[tokio::test]
async fn test_create_server_no_satisfying_node() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_egg(&mock_server).await;

    Mock::given(method("POST"))
        .and(path(api_path("servers")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{
                "code": "NoViableAllocationException",
                "status": "400",
                "detail": "No allocation satisfying the requirements was found."
            }]
        })))
        .mount(&mock_server)
        .await;

    let err = client.create_server(&new_server()).await.unwrap_err();
    assert!(matches!(err, PanelError::NoSatisfyingNode { .. }));
    assert!(err.to_string().contains("NoViableAllocationException"));
}

#[tokio::test]
async fn test_create_server_other_status() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_egg(&mock_server).await;

    Mock::given(method("POST"))
        .and(path(api_path("servers")))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid limits"))
        .mount(&mock_server)
        .await;

    let result = client.create_server(&new_server()).await;
    assert!(matches!(result, Err(PanelError::Api { status: 422, .. })));
}

#[tokio::test]
async fn test_create_server_missing_egg_sends_no_post() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("nests/1/eggs/17")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = client.create_server(&new_server()).await;
    assert!(matches!(
        result,
        Err(PanelError::NotFound { resource: "egg", .. })
    ));
}

#[tokio::test]
async fn test_create_server_rejects_blank_name_before_any_request() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let server = NewServer::new("  ", 3, 1, 17, 517, limits());
    let result = client.create_server(&server).await;
    assert!(matches!(result, Err(PanelError::Validation { .. })));
    assert!(request_log(&mock_server).await.is_empty());
}

#[tokio::test]
async fn test_update_startup_then_reinstall() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_egg(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(api_path("servers/external/order-7")))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_envelope(42, "order-7")))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(api_path("servers/42/startup")))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_envelope(42, "order-7")))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("servers/42/reinstall")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.update_server_startup("order-7", None).await.unwrap();

    assert_eq!(
        request_log(&mock_server).await,
        vec![
            "GET /api/application/servers/external/order-7".to_string(),
            "GET /api/application/nests/1/eggs/17".to_string(),
            "GET /api/application/nests/1/eggs/17?include=variables".to_string(),
            "PATCH /api/application/servers/42/startup".to_string(),
            "POST /api/application/servers/42/reinstall".to_string(),
        ]
    );

    let requests = mock_server.received_requests().await.unwrap();
    let patch = requests
        .iter()
        .find(|request| request.method.as_str() == "PATCH")
        .unwrap();
    let payload: Value = serde_json::from_slice(&patch.body).unwrap();
    assert_eq!(payload["startup"], "echo hi");
    assert_eq!(payload["image"], "alpine");
    assert_eq!(payload["egg"], 17);
    assert_eq!(payload["environment"], json!({"PORT": "25565"}));
    assert_eq!(payload["skip_scripts"], false);
}

#[tokio::test]
async fn test_update_startup_failure_skips_reinstall() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_egg(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(api_path("servers/external/order-7")))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_envelope(42, "order-7")))
        .mount(&mock_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(api_path("servers/42/startup")))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid environment"))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("servers/42/reinstall")))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client.update_server_startup("order-7", None).await.unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert!(err.to_string().contains("42"));
}

#[tokio::test]
async fn test_update_startup_unknown_server() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("servers/external/order-404")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = client.update_server_startup("order-404", None).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(request_log(&mock_server).await.len(), 1);
}
