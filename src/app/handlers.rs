//! Route handlers of the image API.

use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::app::query::{HubQuery, MiniQuery, QueryPairs};
use crate::core::generate_svg;
use crate::domain::model::MINI_BANKS;
use crate::utils::error::Result;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub backend: &'static str,
    pub database: &'static str,
    pub connection_status: &'static str,
}

/// A rendered SVG document served as `image/svg+xml`.
#[derive(Debug)]
pub struct SvgImage(pub String);

impl IntoResponse for SvgImage {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], self.0).into_response()
    }
}

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "niomag backend is running",
    })
}

/// Liveness check. No database is involved, which the payload states explicitly.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        backend: "ok",
        database: "not-required",
        connection_status: "ok",
    })
}

pub async fn image_hub(Query(pairs): Query<QueryPairs>) -> Result<SvgImage> {
    let query = HubQuery::from(pairs);
    let pack = query.pack()?;
    let color = query.color()?;
    Ok(SvgImage(generate_svg(pack.banks(), color.as_str())))
}

pub async fn image_mini(Query(pairs): Query<QueryPairs>) -> Result<SvgImage> {
    let query = MiniQuery::from(pairs);
    let color = query.color()?;
    Ok(SvgImage(generate_svg(MINI_BANKS, color.as_str())))
}

pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "detail": "Not Found" })),
    )
}
