use axum::{extract::State, http::header, response::IntoResponse};

use crate::state::SharedState;

/// Content type of the Prometheus text exposition format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// `GET {telemetry_path}`
///
/// Scrapes the node and renders the result. Gathering blocks on network
/// I/O, so it runs on the blocking pool. The response is always `200 OK`:
/// a failed scrape shows up as `up 0`, never as an HTTP error.
pub async fn metrics(State(state): State<SharedState>) -> impl IntoResponse {
    let registry = state.metrics.clone();

    let body = match tokio::task::spawn_blocking(move || registry.gather_text()).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "metrics gather task failed");
            String::new()
        }
    };

    ([(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], body)
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};

    use super::PROMETHEUS_CONTENT_TYPE;
    use crate::config::parse_telemetry_path;
    use crate::routes::tests::{StubNode, app, body_text, get};

    #[tokio::test]
    async fn healthy_node_exposes_all_gauges() {
        let resp = get(app(StubNode::Healthy, "/metrics"), "/metrics").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], PROMETHEUS_CONTENT_TYPE);

        let text = body_text(resp).await;
        assert!(text.contains("cosmos_up 1\n"), "{text}");
        assert!(text.contains("cosmos_latest_block_height{node=\"localhost\"} 12345\n"), "{text}");
        assert!(text.contains("cosmos_time_diff{node=\"localhost\"} "), "{text}");
        assert!(text.contains("cosmos_peers_num{node=\"localhost\"} 7\n"), "{text}");
    }

    #[tokio::test]
    async fn failing_status_endpoint_still_answers_ok() {
        let resp = get(app(StubNode::HttpStatus(500), "/metrics"), "/metrics").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let text = body_text(resp).await;
        assert!(text.contains("cosmos_up 0\n"), "{text}");
        let samples: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(samples, vec!["cosmos_up 0"]);
    }

    #[tokio::test]
    async fn failing_peers_endpoint_omits_peer_count() {
        let resp = get(app(StubNode::PeersDown, "/metrics"), "/metrics").await;
        let text = body_text(resp).await;

        assert!(text.contains("cosmos_up 1\n"), "{text}");
        assert!(text.contains("cosmos_latest_block_height{node=\"localhost\"} 12345\n"), "{text}");
        assert!(text.contains("cosmos_time_diff"), "{text}");
        assert!(!text.contains("cosmos_peers_num"), "{text}");
    }

    #[tokio::test]
    async fn every_accepted_telemetry_path_is_routable() {
        for path in ["/metrics", "/node/metrics", "/a-b_c.d/~e"] {
            let path = parse_telemetry_path(path).expect("accepted path");
            let resp = get(app(StubNode::Healthy, &path), &path).await;
            assert_eq!(resp.status(), StatusCode::OK, "{path}");
        }
    }

    #[tokio::test]
    async fn telemetry_path_is_configurable() {
        let router = app(StubNode::Healthy, "/node/metrics");
        let resp = get(router.clone(), "/node/metrics").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = get(router, "/metrics").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
