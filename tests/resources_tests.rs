//! Billing, emojis, gitignore and dependency submission tests against a mock GitHub API

mod support;

use gh_managers::types::{
    BillingAccount, Dependency, Detector, Job, Manifest, Snapshot, SnapshotStatus,
};
use support::MockServer;

#[tokio::test]
async fn test_actions_billing_for_org() {
    let server = MockServer::respond(
        200,
        r#"{"total_minutes_used":305,"total_paid_minutes_used":0,"included_minutes":3000,"minutes_used_breakdown":{"UBUNTU":205,"MACOS":10,"WINDOWS":90}}"#,
    )
    .await;
    let usage = server
        .github()
        .billing()
        .actions(&BillingAccount::Org("octo-org".to_string()))
        .await
        .unwrap();
    assert_eq!(usage.total_minutes_used, 305.0);
    assert_eq!(usage.minutes_used_breakdown["WINDOWS"], 90.0);
    assert_eq!(
        server.request().await.path(),
        "/orgs/octo-org/settings/billing/actions"
    );
}

#[tokio::test]
async fn test_packages_billing_for_user() {
    let server = MockServer::respond(
        200,
        r#"{"total_gigabytes_bandwidth_used":50,"total_paid_gigabytes_bandwidth_used":40,"included_gigabytes_bandwidth":10}"#,
    )
    .await;
    let usage = server
        .github()
        .billing()
        .packages(&BillingAccount::User("octocat".to_string()))
        .await
        .unwrap();
    assert_eq!(usage.included_gigabytes_bandwidth, 10.0);
    assert_eq!(
        server.request().await.path(),
        "/users/octocat/settings/billing/packages"
    );
}

#[tokio::test]
async fn test_shared_storage_billing() {
    let server = MockServer::respond(
        200,
        r#"{"days_left_in_billing_cycle":20,"estimated_paid_storage_for_month":15,"estimated_storage_for_month":40}"#,
    )
    .await;
    let usage = server
        .github()
        .billing()
        .shared_storage(&BillingAccount::Org("octo-org".to_string()))
        .await
        .unwrap();
    assert_eq!(usage.days_left_in_billing_cycle, 20);
    assert_eq!(
        server.request().await.path(),
        "/orgs/octo-org/settings/billing/shared-storage"
    );
}

#[tokio::test]
async fn test_get_emojis() {
    let server = MockServer::respond(
        200,
        r#"{"+1":"https://github.githubassets.com/images/icons/emoji/unicode/1f44d.png?v8","-1":"https://github.githubassets.com/images/icons/emoji/unicode/1f44e.png?v8"}"#,
    )
    .await;
    let emojis = server.github().emojis().get_emojis().await.unwrap();
    assert_eq!(emojis.len(), 2);
    assert!(emojis["+1"].ends_with("1f44d.png?v8"));
    assert_eq!(server.request().await.path(), "/emojis");
}

#[tokio::test]
async fn test_gitignore_list_and_get() {
    let server = MockServer::respond(200, r#"["Actionscript","Android","Rust"]"#).await;
    let names = server.github().gitignore().list_templates().await.unwrap();
    assert_eq!(names, vec!["Actionscript", "Android", "Rust"]);
    assert_eq!(server.request().await.path(), "/gitignore/templates");

    let server = MockServer::respond(
        200,
        r##"{"name":"C","source":"# Object files\n*.o\n"}"##,
    )
    .await;
    let template = server.github().gitignore().get_template("C").await.unwrap();
    assert_eq!(template.name, "C");
    assert!(template.source.contains("*.o"));
    assert_eq!(server.request().await.path(), "/gitignore/templates/C");
}

#[tokio::test]
async fn test_gitignore_raw_template() {
    let server = MockServer::respond_with(200, "text/plain", "# Object files\n*.o\n").await;
    let source = server
        .github()
        .gitignore()
        .get_template_raw("C")
        .await
        .unwrap();
    assert_eq!(source, "# Object files\n*.o\n");
    assert_eq!(
        server.request().await.header("accept"),
        Some("application/vnd.github.raw+json")
    );
}

fn snapshot() -> Snapshot {
    Snapshot::new(
        "ce587453ced02b1526dfb4cb910479d431683101",
        "refs/heads/main",
        Job::new("ci_build").with_html_url("https://example.com/run/1"),
        Detector::new("cargo-detector", "0.1.0", "https://example.com"),
    )
    .with_manifest(
        Manifest::new("Cargo.lock")
            .with_source_location("Cargo.lock")
            .with_dependency(Dependency::direct("pkg:cargo/serde@1.0.200")),
    )
}

#[tokio::test]
async fn test_create_snapshot() {
    let server = MockServer::respond(
        201,
        r#"{"id":12345,"created_at":"2018-05-04T01:14:52Z","message":"Dependency results for the repo have been successfully updated.","result":"SUCCESS"}"#,
    )
    .await;
    let result = server
        .github()
        .dependency_submission()
        .create_snapshot(("octocat", "Hello-World"), &snapshot())
        .await
        .unwrap();
    assert_eq!(result.id, 12345);
    assert_eq!(result.result, SnapshotStatus::Success);

    let request = server.request().await;
    assert_eq!(request.method, "POST");
    assert_eq!(
        request.path(),
        "/repos/octocat/Hello-World/dependency-graph/snapshots"
    );
    let body = request.json();
    assert_eq!(body["ref"], "refs/heads/main");
    assert_eq!(body["job"]["correlator"], "ci_build");
    assert_eq!(
        body["manifests"]["Cargo.lock"]["resolved"]["pkg:cargo/serde@1.0.200"]["relationship"],
        "direct"
    );
}

#[tokio::test]
async fn test_invalid_snapshot_is_not_sent() {
    let server = MockServer::respond(201, "{}").await;
    let mut invalid = snapshot();
    invalid.sha = "main".to_string();
    let err = server
        .github()
        .dependency_submission()
        .create_snapshot(("octocat", "Hello-World"), &invalid)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("invalid dependency snapshot"));
    server.assert_no_request().await;
}
