#![allow(clippy::unwrap_used)]
// Integration tests for `PortalClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shoreline_api::types::{ManagerCreate, RegionCreate};
use shoreline_api::{Error, PortalClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, PortalClient) {
    let server = MockServer::start().await;
    let client = PortalClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn region_body(id: &str, slug: &str, manager_ids: &[&str]) -> serde_json::Value {
    let managers: Vec<_> = manager_ids
        .iter()
        .map(|m| json!({"id": m, "name": "Pat", "email": "pat@shoreline.dev"}))
        .collect();
    json!({
        "id": id,
        "slug": slug,
        "locations": {"north-tower": "North Tower"},
        "managers": managers,
        "created": "2024-06-01T08:00:00Z"
    })
}

// ── List / create ───────────────────────────────────────────────────

#[tokio::test]
async fn list_regions_parses_payload() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/regions/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([region_body("r1", "north-beach", &["m1"])])),
        )
        .mount(&server)
        .await;

    let regions = client.list_regions().await.unwrap();

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].slug, "north-beach");
    assert_eq!(regions[0].locations.get("north-tower").unwrap(), "North Tower");
    assert_eq!(regions[0].managers[0].id, "m1");
}

#[tokio::test]
async fn create_region_sends_body_and_parses_response() {
    let (server, client) = setup().await;

    let mut locations = indexmap::IndexMap::new();
    locations.insert("a".to_owned(), "Pool A".to_owned());
    let body = RegionCreate {
        slug: "east-cove".into(),
        locations,
        managers: None,
    };

    Mock::given(method("POST"))
        .and(path("/regions/"))
        .and(body_json(json!({
            "slug": "east-cove",
            "locations": {"a": "Pool A"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(region_body("r9", "east-cove", &[])))
        .mount(&server)
        .await;

    let created = client.create_region(&body).await.unwrap();
    assert_eq!(created.id, "r9");
    assert_eq!(created.slug, "east-cove");
}

#[tokio::test]
async fn create_manager_serializes_region_slugs() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/managers/"))
        .and(body_json(json!({
            "name": "Jo",
            "email": "jo@shoreline.dev",
            "region_slugs": ["north-beach"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "m7",
            "name": "Jo",
            "email": "jo@shoreline.dev",
            "regions": [{"id": "r1", "slug": "north-beach"}],
            "created": "2024-06-01T08:00:00Z"
        })))
        .mount(&server)
        .await;

    let manager = client
        .create_manager(&ManagerCreate {
            name: "Jo".into(),
            email: "jo@shoreline.dev".into(),
            region_slugs: vec!["north-beach".into()],
        })
        .await
        .unwrap();

    assert_eq!(manager.id, "m7");
    assert_eq!(manager.regions[0].slug, "north-beach");
}

// ── Relationship assignment ─────────────────────────────────────────

#[tokio::test]
async fn assign_manager_posts_compound_path_and_returns_region() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/regions/r1/managers/m1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(region_body("r1", "north-beach", &["m1"])))
        .mount(&server)
        .await;

    let region = client.assign_manager("r1", "m1").await.unwrap();
    assert_eq!(region.managers.len(), 1);
    assert_eq!(region.managers[0].id, "m1");
}

#[tokio::test]
async fn unassign_manager_deletes_compound_path_and_returns_region() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/regions/r1/managers/m1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(region_body("r1", "north-beach", &[])))
        .mount(&server)
        .await;

    let region = client.unassign_manager("r1", "m1").await.unwrap();
    assert!(region.managers.is_empty());
}

// ── Delete / 204 handling ───────────────────────────────────────────

#[tokio::test]
async fn delete_incident_accepts_204_with_no_body() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/incident/i3"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client.delete_incident("i3").await.unwrap();
}

// ── Error normalization ─────────────────────────────────────────────

#[tokio::test]
async fn string_detail_becomes_the_message() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/regions/"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"detail": "slug exists"})))
        .mount(&server)
        .await;

    let err = client
        .create_region(&RegionCreate {
            slug: "dup".into(),
            locations: indexmap::IndexMap::new(),
            managers: None,
        })
        .await
        .unwrap_err();

    match err {
        Error::Api { status, ref message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "slug exists");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
    assert!(err.is_conflict());
}

#[tokio::test]
async fn list_detail_joins_messages() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/managers/"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{"msg": "field required"}, {"msg": "value is not a valid email"}]
        })))
        .mount(&server)
        .await;

    let err = client
        .create_manager(&ManagerCreate {
            name: "x".into(),
            email: "bad".into(),
            region_slugs: vec!["s".into()],
        })
        .await
        .unwrap_err();

    match err {
        Error::Api { status: 422, message } => {
            assert_eq!(message, "field required, value is not a valid email");
        }
        other => panic!("expected 422 Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_body_falls_back_to_status_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/lifeguards/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.list_lifeguards().await.unwrap_err();
    match err {
        Error::Api { status: 500, message } => {
            assert_eq!(message, "Request failed with status 500");
        }
        other => panic!("expected 500 Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_success_body_with_multibyte_text_is_a_deserialization_error() {
    let (server, client) = setup().await;

    // non-JSON 200 whose 200th byte lands inside a two-byte char
    let body = format!("{}é maintenance page", "x".repeat(199));
    Mock::given(method("GET"))
        .and(path("/regions/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let err = client.list_regions().await.unwrap_err();
    match err {
        Error::Deserialization { message, .. } => {
            assert!(message.contains("body preview"), "message: {message}");
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn lifeguard_phone_lookup_hits_dedicated_path() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/lifeguards/phone/555-0100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "l1",
            "name": "Sam",
            "phone": "555-0100",
            "region_id": "r1",
            "created": "2024-06-01T08:00:00Z"
        })))
        .mount(&server)
        .await;

    let guard = client.get_lifeguard_by_phone("555-0100").await.unwrap();
    assert_eq!(guard.id, "l1");
    assert_eq!(guard.region_id, "r1");
}
