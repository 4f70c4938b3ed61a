//! Collaborators manager tests against a mock GitHub API

mod support;

use gh_managers::ListOptions;
use gh_managers::types::{Affiliation, CollaboratorFilter, Permission};
use support::{MockServer, repository_json, user_json};

#[tokio::test]
async fn test_list_collaborators_with_filters() {
    let server = MockServer::respond(
        200,
        r#"[{"login":"octocat","id":1,"type":"User","site_admin":false,"permissions":{"pull":true,"triage":true,"push":true,"maintain":false,"admin":false},"role_name":"write"}]"#,
    )
    .await;
    let filter = CollaboratorFilter::default()
        .affiliation(Affiliation::Direct)
        .permission(Permission::Push);
    let collaborators = server
        .github()
        .collaborators()
        .list_collaborators(("octocat", "Hello-World"), &filter, ListOptions::new().per_page(10))
        .await
        .unwrap();
    assert_eq!(collaborators[0].user.login, "octocat");
    assert_eq!(collaborators[0].role_name.as_deref(), Some("write"));

    let request = server.request().await;
    assert_eq!(request.path(), "/repos/octocat/Hello-World/collaborators");
    assert_eq!(
        request.query(),
        Some("affiliation=direct&permission=push&per_page=10")
    );
}

#[tokio::test]
async fn test_is_collaborator() {
    let server = MockServer::respond(204, "").await;
    assert!(
        server
            .github()
            .collaborators()
            .is_collaborator(("octocat", "Hello-World"), "monalisa")
            .await
            .unwrap()
    );
    assert_eq!(
        server.request().await.path(),
        "/repos/octocat/Hello-World/collaborators/monalisa"
    );

    let server = MockServer::respond(404, "").await;
    assert!(
        !server
            .github()
            .collaborators()
            .is_collaborator(("octocat", "Hello-World"), "stranger")
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_add_collaborator_creates_invitation() {
    let body = format!(
        r#"{{"id":1,"repository":{},"invitee":{},"inviter":{},"permissions":"write","created_at":"2016-06-13T14:52:50-05:00","url":"https://api.github.com/user/repository_invitations/1296269","html_url":"https://github.com/octocat/Hello-World/invitations"}}"#,
        repository_json("octocat", "Hello-World", 1296269),
        user_json("monalisa", 2),
        user_json("octocat", 1)
    );
    let server = MockServer::respond(201, &body).await;
    let invitation = server
        .github()
        .collaborators()
        .add_collaborator(("octocat", "Hello-World"), "monalisa", Some(&Permission::Maintain))
        .await
        .unwrap()
        .expect("invitation expected for 201");
    assert_eq!(invitation.permissions, "write");
    assert_eq!(invitation.invitee.unwrap().login, "monalisa");

    let request = server.request().await;
    assert_eq!(request.method, "PUT");
    assert_eq!(request.json(), serde_json::json!({"permission": "maintain"}));
}

#[tokio::test]
async fn test_add_existing_collaborator_returns_none() {
    let server = MockServer::respond(204, "").await;
    let invitation = server
        .github()
        .collaborators()
        .add_collaborator(("octocat", "Hello-World"), "monalisa", None)
        .await
        .unwrap();
    assert!(invitation.is_none());

    let request = server.request().await;
    assert_eq!(request.json(), serde_json::json!({}));
}

#[tokio::test]
async fn test_add_collaborator_with_custom_role() {
    let server = MockServer::respond(204, "").await;
    server
        .github()
        .collaborators()
        .add_collaborator(
            ("octocat", "Hello-World"),
            "monalisa",
            Some(&Permission::Custom("security-auditor".to_string())),
        )
        .await
        .unwrap();
    assert_eq!(
        server.request().await.json(),
        serde_json::json!({"permission": "security-auditor"})
    );
}

#[tokio::test]
async fn test_remove_collaborator() {
    let server = MockServer::respond(204, "").await;
    assert!(
        server
            .github()
            .collaborators()
            .remove_collaborator(("octocat", "Hello-World"), "monalisa")
            .await
            .unwrap()
    );
    assert_eq!(server.request().await.method, "DELETE");
}

#[tokio::test]
async fn test_get_permission() {
    let server = MockServer::respond(
        200,
        r#"{"permission":"admin","role_name":"admin","user":{"login":"octocat","id":1,"type":"User","site_admin":false}}"#,
    )
    .await;
    let permission = server
        .github()
        .collaborators()
        .get_permission(("octocat", "Hello-World"), "octocat")
        .await
        .unwrap();
    assert_eq!(permission.permission, "admin");
    assert_eq!(permission.user.unwrap().user.login, "octocat");
    assert_eq!(
        server.request().await.path(),
        "/repos/octocat/Hello-World/collaborators/octocat/permission"
    );
}
