#[cfg(test)]
mod rest_client_tests {
    use obsidian_remote_client::*;
    use serde_json::json;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const KEY: &str = "test-key";

    fn client_for(server: &MockServer) -> RestVaultClient {
        let addr = server.address();
        let mut config = VaultConfig::new(KEY);
        config.protocol = Protocol::Http;
        config.host = addr.ip().to_string();
        config.port = addr.port();
        RestVaultClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_list_files_in_vault_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vault/"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"files": ["a.md", "daily/"]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let files = client_for(&server).list_files_in_vault().await.unwrap();
        assert_eq!(files, vec!["a.md".to_string(), "daily/".to_string()]);
    }

    #[tokio::test]
    async fn test_list_files_in_dir_uses_trailing_slash() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vault/projects/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"files": ["x.md"]})))
            .mount(&server)
            .await;

        let files = client_for(&server).list_files_in_dir("projects").await.unwrap();
        assert_eq!(files, vec!["x.md".to_string()]);
    }

    #[tokio::test]
    async fn test_get_file_contents_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vault/notes/todo.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("abc"))
            .mount(&server)
            .await;

        let text = client_for(&server)
            .get_file_contents("notes/todo.md")
            .await
            .unwrap();
        assert_eq!(text, "abc");
    }

    #[tokio::test]
    async fn test_error_body_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vault/missing.md"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"errorCode": 40400, "message": "File not found"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_file_contents("missing.md")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Error 40400: File not found");
    }

    #[tokio::test]
    async fn test_error_without_body_uses_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).delete_file("a.md").await.unwrap_err();
        assert_eq!(err.to_string(), "Error -1: <unknown>");
    }

    #[tokio::test]
    async fn test_search_passes_query_and_context_length() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search/simple/"))
            .and(query_param("query", "meeting"))
            .and(query_param("contextLength", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "filename": "m.md",
                    "score": 1.5,
                    "matches": [{"context": "the meeting", "match": {"start": 4, "end": 11}}]
                }
            ])))
            .mount(&server)
            .await;

        let hits = client_for(&server).search("meeting", 50).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].filename, "m.md");
        assert_eq!(hits[0].matches[0].span.end, 11);
    }

    #[tokio::test]
    async fn test_complex_search_uses_jsonlogic_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search/"))
            .and(header("Content-Type", "application/vnd.olrapi.jsonlogic+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"filename": "a.md"}])))
            .mount(&server)
            .await;

        let query = json!({"glob": ["*.md", {"var": "path"}]});
        let result = client_for(&server).search_json(&query).await.unwrap();
        assert_eq!(result[0]["filename"], "a.md");
    }

    #[tokio::test]
    async fn test_append_posts_markdown_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/vault/inbox.md"))
            .and(header("Content-Type", "text/markdown"))
            .and(body_string("- new item"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .append_content("inbox.md", "- new item")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_patch_sends_target_headers() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/vault/plan.md"))
            .and(header("Operation", "append"))
            .and(header("Target-Type", "heading"))
            .and(header("Target", "Goals%3A%3AQ1"))
            .and(body_string("ship it"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let patch = PatchSpec {
            operation: PatchOperation::Append,
            target_type: TargetType::Heading,
            target: "Goals::Q1".to_string(),
            content: "ship it".to_string(),
        };
        client_for(&server)
            .patch_content("plan.md", &patch)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_periodic_note_metadata_sets_accept_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/periodic/daily/"))
            .and(header("Accept", "application/vnd.olrapi.note+json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"tags\":[]}"))
            .mount(&server)
            .await;

        let text = client_for(&server)
            .get_periodic_note(Period::Daily, NoteFormat::Metadata)
            .await
            .unwrap();
        assert_eq!(text, "{\"tags\":[]}");
    }

    #[tokio::test]
    async fn test_recent_periodic_notes_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/periodic/weekly/recent"))
            .and(query_param("limit", "3"))
            .and(query_param("includeContent", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"path": "w.md"}])))
            .mount(&server)
            .await;

        let notes = client_for(&server)
            .get_recent_periodic_notes(Period::Weekly, 3, true)
            .await
            .unwrap();
        assert_eq!(notes[0]["path"], "w.md");
    }

    #[tokio::test]
    async fn test_recent_changes_posts_dql() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search/"))
            .and(header("Content-Type", "application/vnd.olrapi.dataview.dql+txt"))
            .and(body_string(
                "TABLE file.mtime\nWHERE file.mtime >= date(today) - dur(7 days)\nSORT file.mtime DESC\nLIMIT 5",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let changes = client_for(&server).get_recent_changes(5, 7).await.unwrap();
        assert_eq!(changes, json!([]));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let mut config = VaultConfig::new(KEY);
        config.protocol = Protocol::Http;
        config.port = 1;
        let client = RestVaultClient::new(&config).unwrap();

        let err = client.list_files_in_vault().await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }
}
