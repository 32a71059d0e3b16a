use super::{api_path, create_test_client, egg_envelope, egg_with_variables_envelope};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param, query_param_is_missing},
};

#[tokio::test]
async fn test_nests_list_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("nests")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{
                "object": "nest",
                "attributes": {
                    "id": 1,
                    "uuid": "58ac4a6b-e6a3-4c1b-bb50-0d6b27e3f2a4",
                    "author": "support@pterodactyl.io",
                    "name": "Minecraft",
                    "description": "Minecraft - the classic game from Mojang.",
                    "created_at": "2024-01-01T00:00:00+00:00",
                    "updated_at": "2024-01-01T00:00:00+00:00"
                }
            }]
        })))
        .mount(&mock_server)
        .await;

    let nests = client.nests().await.unwrap();
    assert_eq!(nests.len(), 1);
    assert_eq!(nests[0].name, "Minecraft");
}

#[tokio::test]
async fn test_eggs_and_egg() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("nests/1/eggs")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [egg_envelope()]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("nests/1/eggs/17")))
        .and(query_param_is_missing("include"))
        .respond_with(ResponseTemplate::new(200).set_body_json(egg_envelope()))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("nests/1/eggs/18")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let eggs = client.eggs(1).await.unwrap();
    assert_eq!(eggs.len(), 1);
    assert_eq!(eggs[0].docker_image, "alpine");

    let egg = client.egg(1, 17).await.unwrap().unwrap();
    assert_eq!(egg.startup, "echo hi");
    assert_eq!(egg.nest, 1);

    assert!(client.egg(1, 18).await.unwrap().is_none());
}

#[tokio::test]
async fn test_egg_environment_defaults() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let mut egg = egg_with_variables_envelope();
    egg["attributes"]["relationships"]["variables"]["data"]
        .as_array_mut()
        .unwrap()
        .push(json!({
            "object": "egg_variable",
            "attributes": {
                "id": 2,
                "name": "Motd",
                "env_variable": "MOTD",
                "default_value": null,
                "rules": "nullable|string"
            }
        }));

    Mock::given(method("GET"))
        .and(path(api_path("nests/1/eggs/17")))
        .and(query_param("include", "variables"))
        .respond_with(ResponseTemplate::new(200).set_body_json(egg))
        .expect(1)
        .mount(&mock_server)
        .await;

    let environment = client.egg_environment(1, 17).await.unwrap().unwrap();
    assert_eq!(environment.len(), 2);
    assert_eq!(environment["PORT"], "25565");
    assert_eq!(environment["MOTD"], "");
}

#[tokio::test]
async fn test_egg_environment_absent_egg() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("nests/1/eggs/99")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    assert!(client.egg_environment(1, 99).await.unwrap().is_none());
}
