// Surface tests for the `shoreline` binary.

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn shoreline() -> Command {
    let mut cmd = Command::cargo_bin("shoreline").unwrap();
    // keep the ambient environment out of the tests
    cmd.env_remove("SHORELINE_PORTAL")
        .env_remove("SHORELINE_OUTPUT")
        .env_remove("SHORELINE_TIMEOUT")
        .env("HOME", "/nonexistent");
    cmd
}

#[test]
fn help_lists_the_entity_commands() {
    shoreline()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("regions"))
        .stdout(predicate::str::contains("managers"))
        .stdout(predicate::str::contains("lifeguards"))
        .stdout(predicate::str::contains("incidents"));
}

#[test]
fn regions_help_shows_assignment_commands() {
    shoreline()
        .args(["regions", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("assign"))
        .stdout(predicate::str::contains("unassign"))
        .stdout(predicate::str::contains("set-locations"));
}

#[test]
fn incidents_list_help_shows_the_four_filters() {
    shoreline()
        .args(["incidents", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--person"))
        .stdout(predicate::str::contains("--date"))
        .stdout(predicate::str::contains("--region"))
        .stdout(predicate::str::contains("--status"));
}

#[test]
fn missing_portal_url_is_a_usage_error() {
    shoreline()
        .args(["regions", "list"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No portal URL configured"));
}

#[test]
fn manager_create_requires_a_region_before_any_call() {
    // the portal URL points nowhere; client-side validation must fire
    // before a connection is ever attempted
    shoreline()
        .args([
            "--portal",
            "http://127.0.0.1:1",
            "managers",
            "create",
            "--name",
            "Jane Doe",
            "--email",
            "jane@example.com",
            "--regions",
            "",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("at least one region"));
}

#[test]
fn region_create_requires_a_location_before_any_call() {
    shoreline()
        .args([
            "--portal",
            "http://127.0.0.1:1",
            "regions",
            "create",
            "--slug",
            "north-beach",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("at least one location"));
}

#[test]
fn malformed_location_pair_is_rejected() {
    shoreline()
        .args([
            "--portal",
            "http://127.0.0.1:1",
            "regions",
            "create",
            "--slug",
            "north-beach",
            "--location",
            "no-equals-sign",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("expected KEY=LABEL"));
}

#[test]
fn completions_generate_without_a_portal() {
    shoreline()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shoreline"));
}

#[tokio::test(flavor = "multi_thread")]
async fn regions_list_renders_a_table_from_the_portal() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/regions/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": "r1",
            "slug": "north-beach",
            "locations": {"a": "Pool A"},
            "managers": [],
            "created": "2024-06-01T08:00:00Z",
        }])))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        shoreline()
            .args(["--portal", &uri, "regions", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("north-beach"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn portal_rejection_detail_reaches_stderr() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/regions/"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(serde_json::json!({"detail": "slug exists"})),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        shoreline()
            .args([
                "--portal",
                &uri,
                "regions",
                "create",
                "--slug",
                "north-beach",
                "--location",
                "a=Pool A",
            ])
            .assert()
            .failure()
            .code(6)
            .stderr(predicate::str::contains("slug exists"));
    })
    .await
    .unwrap();
}
