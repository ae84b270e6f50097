//! Public pages served without authentication.

use axum::{
    response::{Html, IntoResponse},
    Json,
};
use serde_json::json;

fn html_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - PetLodge</title>
</head>
<body>
    <header>
        <a href="/">PetLodge</a>
        <nav>
            <a href="/about">About</a>
            <a href="/api/docs">API docs</a>
        </nav>
    </header>
    <main>
{content}
    </main>
</body>
</html>"#
    )
}

/// Home page handler.
pub async fn home() -> impl IntoResponse {
    Html(html_shell(
        "Home",
        r#"        <h1>Welcome to PetLodge</h1>
        <p>Board your pets with people who care. Register an account to
        manage your pets and book their stays.</p>"#,
    ))
}

/// About page handler.
pub async fn about() -> impl IntoResponse {
    Html(html_shell(
        "About",
        r#"        <h1>About PetLodge</h1>
        <p>PetLodge is a small boarding service. Owners register their pets,
        book stays with a check-in and check-out date, and can cancel a
        booking at any time before the stay begins.</p>"#,
    ))
}

/// Liveness probe for deployment health checks.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
