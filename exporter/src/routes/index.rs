use axum::{extract::State, response::Html};

use crate::state::SharedState;

/// `GET /`
///
/// Static landing page pointing at the telemetry path.
pub async fn index(State(state): State<SharedState>) -> Html<String> {
    Html(format!(
        "<html>\n\
         <head><title>Cosmos Exporter</title></head>\n\
         <body>\n\
         <h1>Cosmos Exporter</h1>\n\
         <p><a href='{}'>Metrics</a></p>\n\
         </body>\n\
         </html>\n",
        state.telemetry_path
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};

    use crate::routes::tests::{StubNode, app, body_text, get};

    #[tokio::test]
    async fn index_links_to_the_telemetry_path() {
        let resp = get(app(StubNode::Healthy, "/node/metrics"), "/").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.headers()[header::CONTENT_TYPE]
                .to_str()
                .expect("content type")
                .starts_with("text/html")
        );

        let page = body_text(resp).await;
        assert!(page.contains("<a href='/node/metrics'>Metrics</a>"), "{page}");
    }
}
