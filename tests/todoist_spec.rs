//! Todoist client contract tests against a mock server.

use chrono::NaiveDate;
use daily_read::clients::{format_task_content, ClientError, TodoistClient};
use daily_read::models::Article;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn due() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 17).expect("valid date")
}

mod create_task {
    use super::*;

    #[tokio::test]
    async fn posts_content_project_and_due_date_with_bearer_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tasks"))
            .and(header("Authorization", "Bearer todoist-token"))
            .and(body_json(json!({
                "content": "[📰 Foo](https://getpocket.com/read/42) [3 mins]",
                "project_id": "2328700616",
                "due_date": "2024-05-17"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "8001",
                "content": "[📰 Foo](https://getpocket.com/read/42) [3 mins]",
                "project_id": "2328700616",
                "due": {"date": "2024-05-17", "string": "May 17", "is_recurring": false}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = TodoistClient::new(server.uri(), "todoist-token", "2328700616");
        let content = format_task_content(&Article::new("42", "Foo", 625));

        let task = client
            .create_task(&content, due())
            .await
            .expect("Create failed");

        assert_eq!(task.id, "8001");
        assert_eq!(task.project_id, "2328700616");
        assert_eq!(task.content, content);
    }

    #[tokio::test]
    async fn bad_request_is_reported_with_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(400).set_body_string("project_id is invalid"))
            .mount(&server)
            .await;

        let client = TodoistClient::new(server.uri(), "todoist-token", "nope");
        let err = client
            .create_task("Read something", due())
            .await
            .expect_err("Expected failure");

        match err {
            ClientError::BadRequest(body) => assert_eq!(body, "project_id is invalid"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn forbidden_token_is_unauthorized() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = TodoistClient::new(server.uri(), "", "2328700616");
        let result = client.create_task("Read something", due()).await;

        assert!(matches!(result, Err(ClientError::Unauthorized)));
    }
}
