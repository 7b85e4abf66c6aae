//! Documentation endpoints
//!
//! Serves Swagger UI and the raw OpenAPI document.
//! Protected by the X-Docs-Key header when DOCS_API_KEY is set; returns 404
//! when unauthorized to hide endpoint existence.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use utoipa::OpenApi;

use crate::docs::RelayApiDoc;

/// Middleware guarding the docs endpoints
///
/// Allows access when DOCS_API_KEY is not set (dev mode).
pub async fn docs_auth_middleware(request: Request, next: Next) -> Result<Response, Response> {
    let expected_key = std::env::var("DOCS_API_KEY").ok().filter(|k| !k.is_empty());

    let Some(expected) = expected_key else {
        return Ok(next.run(request).await);
    };

    let provided_key = request
        .headers()
        .get("X-Docs-Key")
        .and_then(|v| v.to_str().ok());

    match provided_key {
        Some(provided) if provided == expected => Ok(next.run(request).await),
        _ => Err(StatusCode::NOT_FOUND.into_response()),
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(RelayApiDoc::openapi())
}

async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// Create the docs router
///
/// Routes:
/// - GET /docs - Swagger UI
/// - GET /docs/openapi.json - Raw OpenAPI document
///
/// Generic over state so it can be merged into the stateful main router.
pub fn create_docs_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/docs", get(swagger_ui))
        .route("/docs/openapi.json", get(openapi_json))
        .layer(axum::middleware::from_fn(docs_auth_middleware))
}

/// Swagger UI page loading its assets from the unpkg CDN
const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Provider Relay - Documentation</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: "/docs/openapi.json",
                dom_id: '#swagger-ui',
                deepLinking: true
            });
        };
    </script>
</body>
</html>"#;
