use axum::response::Html;

pub const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Fixed page with no per-request work; the cheapest tier of the workload.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Static HTML page", content_type = "text/html", body = String),
    ),
    tag = "Pages"
)]
pub async fn static_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
