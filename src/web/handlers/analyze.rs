// POST /api/analyze: analyze one video.
//
// Body: { "videoId": "..." } or { "url": "..." }. Either field may hold a
// URL or a bare id. Returns the merged video record and the score.
//
// Not-found maps to 404, bad input to 400, upstream failure to 502 and
// upstream timeout to 504 so the client can tell "fix your input" from
// "try again".

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::warn;

use crate::web::{api_error, AppState};

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub video_id: Option<String>,
    pub url: Option<String>,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let raw = request
        .video_id
        .filter(|s| !s.trim().is_empty())
        .or(request.url)
        .unwrap_or_default();

    match state.analyzer.analyze_input(&raw).await {
        Ok(analysis) => {
            let channel_age_years = analysis.video.channel_age_whole_years();
            Json(serde_json::json!({
                "video": analysis.video,
                "analysis": analysis.result,
                "tier": analysis.result.tier().label(),
                "channel_age_years": channel_age_years,
            }))
            .into_response()
        }
        Err(e) => {
            warn!(error = %e, input = %raw, "Analysis failed");
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            api_error(status, &e.to_string())
        }
    }
}
