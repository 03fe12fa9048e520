//! `ReqwestSource` against a local mock of the API.

#[cfg(test)]
mod tests {
    use byline_cli::source::ReqwestSource;
    use byline_shared::{ArticleQuery, ArticleSource, FetchError};
    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn article_json(id: &str, user_id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": format!("Article {id}"),
            "description": "Lead",
            "content": "Body",
            "image": "https://example.com/img.png",
            "company": "ACME",
            "publishedAt": "2020-11-17T19:48:15.337Z",
            "userId": user_id,
        })
    }

    #[tokio::test]
    async fn articles_page_sends_page_and_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles"))
            .and(query_param("page", "2"))
            .and(query_param("limit", "3"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([article_json("4", "1"), article_json("5", "2")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let source = ReqwestSource::new(server.uri()).expect("build source");
        let articles = source.articles_page(2, 3).await.expect("fetch page");

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, "4");
        assert_eq!(articles[1].user_id, "2");
        assert_eq!(articles[0].published_at.as_deref(), Some("2020-11-17T19:48:15.337Z"));
    }

    #[tokio::test]
    async fn numeric_ids_and_null_fields_decode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 7,
                "name": "Ada",
                "avatar": null,
                "birthdate": null,
                "bio": "Writes things",
            })))
            .mount(&server)
            .await;

        let source = ReqwestSource::new(server.uri()).expect("build source");
        let author = source.author("7").await.expect("fetch author");

        assert_eq!(author.id, "7");
        assert_eq!(author.avatar, "");
        assert_eq!(author.birthdate, "");
        assert_eq!(author.last_article, None);
    }

    #[tokio::test]
    async fn author_articles_forward_sort_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/1/articles"))
            .and(query_param("sortBy", "publishedAt"))
            .and(query_param("order", "desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([article_json("9", "1")])))
            .expect(1)
            .mount(&server)
            .await;

        let source = ReqwestSource::new(server.uri()).expect("build source");
        let articles = source
            .articles_by_author("1", &ArticleQuery::latest_first())
            .await
            .expect("fetch author articles");

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, "9");
    }

    #[tokio::test]
    async fn non_success_status_maps_to_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(404).set_body_string("\"Not found\""))
            .mount(&server)
            .await;

        let source = ReqwestSource::new(server.uri()).expect("build source");
        let err = source.authors().await.expect_err("404 should fail");

        assert_eq!(err, FetchError::Status(404));
    }

    #[tokio::test]
    async fn html_body_maps_to_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let source = ReqwestSource::new(server.uri()).expect("build source");
        let err = source.articles_page(1, 3).await.expect_err("html should fail");

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_host_maps_to_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind free port");
        let uri = format!("http://{}", listener.local_addr().expect("local addr"));
        drop(listener);

        let source = ReqwestSource::new(uri).expect("build source");
        let err = source.authors().await.expect_err("nothing is listening");

        assert!(matches!(err, FetchError::Network(_)));
    }

    #[tokio::test]
    async fn trailing_slash_in_base_is_ignored() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let source = ReqwestSource::new(format!("{}/", server.uri())).expect("build source");
        let authors = source.authors().await.expect("fetch authors");

        assert!(authors.is_empty());
    }
}
