//! Folio Preview Server
//!
//! Axum-based server that renders the site from a live, in-memory store and
//! exposes the admin function surface as a JSON API.

pub mod routes;
pub mod state;
pub mod websocket;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use folio_render::{PageDocument, Site};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/sections", get(routes::sections::list_sections))
        .route("/refresh", post(routes::sections::refresh))
        .route("/projects/{category}", get(routes::projects::list_active))
        .route("/projects/{category}", post(routes::projects::add_project))
        .route("/projects/{category}/{title}", delete(routes::projects::remove_project))
        .route("/projects/{category}/{title}/status", put(routes::projects::set_status))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/api", api_routes)
        .route("/ws", get(websocket::ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the preview server until interrupted.
pub async fn run_server(site: Site<PageDocument>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(site);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Preview server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use folio_core::{Portfolio, ProjectCategory, SiteConfig, WebProject};
    use tower::ServiceExt;

    fn app_with(config: SiteConfig) -> (Router, AppState) {
        let site = Site::from_config(config, PageDocument::standard()).unwrap();
        let state = AppState::new(site);
        (create_router(state.clone()), state)
    }

    fn empty_config() -> SiteConfig {
        SiteConfig {
            portfolio: Portfolio::new(),
            ..SiteConfig::default()
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_page() {
        let (app, _) = app_with(SiteConfig::default());
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("No web projects available at the moment."));
    }

    #[tokio::test]
    async fn test_add_project_makes_section_visible() {
        let (app, state) = app_with(empty_config());
        let record = serde_json::to_value(folio_core::ProjectRecord::from(WebProject::new(
            "Shop",
            "Storefront",
            "Commerce",
            "https://shop.test",
        )))
        .unwrap();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/projects/web", record))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let report = body_json(response).await;
        assert_eq!(report["visible"], serde_json::json!(["web"]));

        let response = app
            .oneshot(Request::builder().uri("/api/projects/web").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let projects = body_json(response).await;
        assert_eq!(projects[0]["title"], "Shop");

        let site = state.site.lock().await;
        assert_eq!(site.presenter().grid(ProjectCategory::Web).unwrap().item_count(), 1);
    }

    #[tokio::test]
    async fn test_add_project_rejects_mismatched_category() {
        let (app, _) = app_with(empty_config());
        let record = serde_json::json!({
            "type": "web",
            "title": "Shop",
            "live_url": "https://shop.test",
            "status": "active"
        });
        let response = app
            .oneshot(json_request("POST", "/api/projects/bot", record))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_status_update_and_remove() {
        let (app, state) = app_with(SiteConfig::default());

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/projects/bot/Example%20Bot/status",
                serde_json::json!({ "status": "active" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["visible"], serde_json::json!(["bot"]));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/projects/bot/Example%20Bot")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let site = state.site.lock().await;
        assert!(site.store().projects(ProjectCategory::Bot).is_empty());
        assert_eq!(site.render_count(), 3);
    }

    #[tokio::test]
    async fn test_invalid_status_is_rejected() {
        let (app, _) = app_with(SiteConfig::default());
        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/projects/web/Example%20Web%20Project/status",
                serde_json::json!({ "status": "archived" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_category() {
        let (app, _) = app_with(SiteConfig::default());

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/projects/games").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/projects/games/Anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_refresh_and_sections() {
        let (app, _) = app_with(SiteConfig::default());

        let response = app
            .clone()
            .oneshot(Request::builder().method("POST").uri("/api/refresh").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(response).await["pass"], 2);

        let response = app
            .oneshot(Request::builder().uri("/api/sections").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["visible"], serde_json::json!([]));
        assert_eq!(body["render_count"], 2);
    }

    #[tokio::test]
    async fn test_ws_requires_upgrade() {
        let (app, _) = app_with(SiteConfig::default());
        let response = app
            .oneshot(Request::builder().uri("/ws").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_ws_forwards_one_message_per_change() {
        use futures::StreamExt;
        use std::time::Duration;

        let (app, state) = app_with(empty_config());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = app.clone();
        tokio::spawn(async move {
            axum::serve(listener, server).await.unwrap();
        });

        let (mut socket, _) = tokio_tungstenite::connect_async(format!("ws://{}/ws", addr))
            .await
            .unwrap();

        // The site holds one receiver; wait for the socket to add its own.
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                let count = state.site.lock().await.store().subscriber_count();
                if count >= 2 {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .unwrap();

        let record = serde_json::to_value(folio_core::ProjectRecord::from(WebProject::new(
            "Shop",
            "Storefront",
            "Commerce",
            "https://shop.test",
        )))
        .unwrap();
        let response = app
            .oneshot(json_request("POST", "/api/projects/web", record))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let message = tokio::time::timeout(Duration::from_secs(5), socket.next())
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        let change: serde_json::Value = serde_json::from_str(message.to_text().unwrap()).unwrap();
        assert_eq!(change["type"], "ProjectAdded");
        assert_eq!(change["data"]["category"], "web");
        assert_eq!(change["data"]["title"], "Shop");

        let extra = tokio::time::timeout(Duration::from_millis(200), socket.next()).await;
        assert!(extra.is_err(), "expected a single message, got {:?}", extra);
    }

    #[tokio::test]
    async fn test_ws_disconnect_releases_subscription() {
        use std::time::Duration;

        let (app, state) = app_with(empty_config());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let subscribers = |target: usize| {
            let state = state.clone();
            async move {
                tokio::time::timeout(Duration::from_secs(5), async {
                    while state.site.lock().await.store().subscriber_count() != target {
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    }
                })
                .await
                .is_ok()
            }
        };

        let (mut socket, _) = tokio_tungstenite::connect_async(format!("ws://{}/ws", addr))
            .await
            .unwrap();
        assert!(subscribers(2).await);

        socket.close(None).await.unwrap();
        assert!(subscribers(1).await);
    }
}
