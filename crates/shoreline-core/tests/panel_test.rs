// Integration tests for the panel controllers against a mock portal.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use serde_json::json;
use shoreline_api::transport::TransportConfig;
use shoreline_api::PortalClient;
use shoreline_core::{
    DataStore, EntityId, IncidentPanel, LifeguardPanel, ManagerPanel, RegionPanel, StoreEvent,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> PortalClient {
    PortalClient::new(&server.uri(), &TransportConfig::default()).unwrap()
}

fn region_json(id: &str, slug: &str, manager_ids: &[&str]) -> serde_json::Value {
    json!({
        "id": id,
        "slug": slug,
        "locations": {"main": "Main Tower"},
        "managers": manager_ids
            .iter()
            .map(|m| json!({"id": m, "name": "Jane Doe", "email": "jane@example.com"}))
            .collect::<Vec<_>>(),
        "created": "2024-06-01T08:00:00Z",
    })
}

fn manager_json(id: &str, name: &str, region: (&str, &str)) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "email": "jane@example.com",
        "regions": [{"id": region.0, "slug": region.1}],
        "created": "2024-06-01T08:00:00Z",
    })
}

fn incident_json(id: &str, group: &str, date: &str) -> serde_json::Value {
    json!({
        "id": id,
        "group_id": group,
        "person_involved_name": "Jane Doe",
        "date_of_incident": date,
        "region_id": "r1",
        "employee_completing_report": "On-duty Lead",
        "incident_summary": "minor abrasion",
        "state": "done",
        "created": "2024-06-01T12:00:00Z",
    })
}

async fn mock_list(server: &MockServer, route: &str, items: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(items))
        .mount(server)
        .await;
}

// ── Region panel ─────────────────────────────────────────────────────

#[tokio::test]
async fn slug_conflict_surfaces_inline_and_leaves_store_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/regions/"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"detail": "slug exists"})))
        .mount(&server)
        .await;

    let store = Arc::new(DataStore::new());
    let mut panel = RegionPanel::new(client(&server), Arc::clone(&store));
    panel.draft.slug = "north-beach".into();
    panel.draft.locations = vec![("a".into(), "Pool A".into())];

    panel.create().await;

    assert_eq!(panel.form_error(), Some("slug exists"));
    assert_eq!(store.region_count(), 0);
    // the failed draft is left in place for correction
    assert_eq!(panel.draft.slug, "north-beach");
}

#[tokio::test]
async fn region_with_no_locations_is_rejected_without_a_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/regions/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(DataStore::new());
    let mut panel = RegionPanel::new(client(&server), Arc::clone(&store));
    panel.draft.slug = "north-beach".into();

    panel.create().await;

    assert!(panel.form_error().is_some());
    assert_eq!(store.region_count(), 0);
}

#[tokio::test]
async fn created_region_appears_locally_without_a_refetch() {
    let server = MockServer::start().await;
    // only the POST is mounted; any list fetch would 404 and fail the test
    Mock::given(method("POST"))
        .and(path("/regions/"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(region_json("r1", "north-beach", &[])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(DataStore::new());
    let mut panel = RegionPanel::new(client(&server), Arc::clone(&store));
    panel.draft.slug = "north-beach".into();
    panel.draft.locations = vec![("a".into(), "Pool A".into())];

    panel.create().await;

    assert_eq!(panel.form_error(), None);
    assert_eq!(panel.draft.slug, "");
    let regions = store.regions_snapshot();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].slug, "north-beach");
}

#[tokio::test]
async fn failed_refresh_keeps_stale_data_visible() {
    let server = MockServer::start().await;
    mock_list(&server, "/managers/", vec![]).await;
    Mock::given(method("GET"))
        .and(path("/regions/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(vec![region_json("r1", "north-beach", &[])]),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/regions/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = Arc::new(DataStore::new());
    let mut panel = RegionPanel::new(client(&server), Arc::clone(&store));

    panel.refresh().await;
    assert_eq!(store.region_count(), 1);
    assert_eq!(panel.error(), None);

    panel.refresh().await;
    assert!(panel.error().is_some());
    // prior data still there
    assert_eq!(store.region_count(), 1);
}

// ── Manager panel ────────────────────────────────────────────────────

#[tokio::test]
async fn manager_with_no_regions_is_rejected_without_a_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/managers/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(DataStore::new());
    let mut panel = ManagerPanel::new(client(&server), Arc::clone(&store));
    panel.draft.name = "Jane Doe".into();
    panel.draft.email = "jane@example.com".into();

    panel.create().await;

    assert!(panel.form_error().is_some());
    assert_eq!(store.manager_count(), 0);
}

#[tokio::test]
async fn validation_detail_list_is_joined_into_the_form_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/managers/"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{"msg": "field required"}, {"msg": "value is not a valid email"}]
        })))
        .mount(&server)
        .await;

    let store = Arc::new(DataStore::new());
    let mut panel = ManagerPanel::new(client(&server), Arc::clone(&store));
    panel.draft.name = "Jane Doe".into();
    panel.draft.email = "not-an-email".into();
    panel.draft.region_slugs = vec!["north-beach".into()];

    panel.create().await;

    assert_eq!(
        panel.form_error(),
        Some("field required, value is not a valid email")
    );
}

// ── Assignment staleness ─────────────────────────────────────────────

#[tokio::test]
async fn assignment_updates_the_region_while_the_manager_view_stays_stale() {
    let server = MockServer::start().await;

    // initial state: m1 unassigned
    mock_list(&server, "/regions/", vec![region_json("r1", "north-beach", &[])]).await;
    mock_list(
        &server,
        "/managers/",
        vec![manager_json("m1", "Jane Doe", ("r9", "elsewhere"))],
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/regions/r1/managers/m1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(region_json("r1", "north-beach", &["m1"])),
        )
        .mount(&server)
        .await;

    let store = Arc::new(DataStore::new());
    let mut regions = RegionPanel::new(client(&server), Arc::clone(&store));
    let mut managers = ManagerPanel::new(client(&server), Arc::clone(&store));
    regions.refresh().await;

    let mut events = store.subscribe_events();
    regions
        .toggle_manager(&EntityId::from("r1"), &EntityId::from("m1"))
        .await
        .unwrap();

    // the region row reflects the server response immediately
    let region = store.region_by_id(&EntityId::from("r1")).unwrap();
    assert!(region.has_manager(&EntityId::from("m1")));
    assert_eq!(events.try_recv().unwrap(), StoreEvent::RegionsChanged);
    assert_eq!(events.try_recv().unwrap(), StoreEvent::ManagersChanged);

    // the manager's own region list is stale until its panel re-fetches
    let stale = store.manager_by_id(&EntityId::from("m1")).unwrap();
    assert_eq!(stale.regions.len(), 1);
    assert_eq!(stale.regions[0].slug, "elsewhere");

    managers.handle_event(StoreEvent::RegionsChanged).await;
    assert!(store.manager_by_id(&EntityId::from("m1")).is_some());
}

// ── Lifeguard panel ──────────────────────────────────────────────────

#[tokio::test]
async fn phone_lookup_upserts_and_unknown_region_label_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lifeguards/phone/555-0100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "l1",
            "name": "Sam Reef",
            "phone": "555-0100",
            "region_id": "r-unloaded",
            "created": "2024-06-01T08:00:00Z",
        })))
        .mount(&server)
        .await;

    let store = Arc::new(DataStore::new());
    let mut panel = LifeguardPanel::new(client(&server), Arc::clone(&store));

    let found = panel.find_by_phone("555-0100").await.unwrap();
    assert_eq!(found.name, "Sam Reef");
    assert_eq!(store.lifeguard_count(), 1);
    assert_eq!(panel.region_label(&found), "Unknown");
}

#[tokio::test]
async fn phone_lookup_miss_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lifeguards/phone/555-0199"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "lifeguard not found"})),
        )
        .mount(&server)
        .await;

    let store = Arc::new(DataStore::new());
    let mut panel = LifeguardPanel::new(client(&server), store);

    let err = panel.find_by_phone("555-0199").await.unwrap_err();
    assert_eq!(err.to_string(), "Lifeguard not found: 555-0199");
}

// ── Incident panel ───────────────────────────────────────────────────

#[tokio::test]
async fn deleting_the_last_incident_of_an_expanded_group_removes_the_group() {
    let server = MockServer::start().await;
    mock_list(&server, "/regions/", vec![region_json("r1", "north-beach", &[])]).await;
    mock_list(
        &server,
        "/incident/",
        vec![
            incident_json("i1", "g1", "2024-05-01"),
            incident_json("i2", "g2", "2024-05-02"),
        ],
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path("/incident/i1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let store = Arc::new(DataStore::new());
    let mut panel = IncidentPanel::new(client(&server), Arc::clone(&store));
    panel.refresh().await;

    panel.toggle_group("g1");
    assert!(panel.is_expanded("g1"));
    assert_eq!(panel.grouped().len(), 2);

    panel.delete_incident(&EntityId::from("i1")).await.unwrap();

    let groups = panel.grouped();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].group_id, "g2");
    assert!(!panel.is_expanded("g1"));
    // the other group's incidents are untouched
    assert_eq!(store.incident_count(), 1);
}

#[tokio::test]
async fn incident_filters_narrow_the_grouped_view() {
    let server = MockServer::start().await;
    mock_list(&server, "/regions/", vec![region_json("r1", "north-beach", &[])]).await;
    mock_list(
        &server,
        "/incident/",
        vec![
            incident_json("i1", "g1", "2024-05-01"),
            incident_json("i2", "g1", "2024-05-03"),
            incident_json("i3", "g2", "2024-05-02"),
        ],
    )
    .await;

    let store = Arc::new(DataStore::new());
    let mut panel = IncidentPanel::new(client(&server), store);
    panel.refresh().await;

    assert_eq!(panel.grouped().len(), 2);

    panel.filters.date = Some("2024-05-02".parse().unwrap());
    let groups = panel.grouped();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].incidents[0].id.as_str(), "i3");

    panel.filters.person = Some("nobody".into());
    assert!(panel.grouped().is_empty());
}
