// src/presentation/http/controllers/branches.rs
use crate::application::{dto::BranchDto, queries::branches::LookupBranchQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult, IntoPageResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views;
use axum::{
    Extension, Json,
    extract::Path,
    http::{HeaderMap, header},
    response::{Html, IntoResponse, Response},
};

#[utoipa::path(
    get,
    path = "/api/ifsc/{code}",
    params(
        ("code" = String, Path, description = "IFSC code; case and punctuation are ignored")
    ),
    responses(
        (status = 200, description = "Branch details.", body = BranchDto),
        (status = 404, description = "IFSC code not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 503, description = "Database unavailable.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Query failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Branches"
)]
pub async fn get_branch(
    Extension(state): Extension<HttpState>,
    Path(code): Path<String>,
) -> HttpResult<Json<BranchDto>> {
    state
        .services
        .branch_queries
        .lookup_branch(LookupBranchQuery { code })
        .await
        .into_http()
        .map(Json)
}

/// HTML branch page; answers with the JSON representation when the client
/// prefers `application/json`.
pub async fn branch_page(
    Extension(state): Extension<HttpState>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Response {
    let result = state
        .services
        .branch_queries
        .lookup_branch(LookupBranchQuery { code })
        .await;

    if prefers_json(&headers) {
        return result.into_http().map(Json).into_response();
    }

    result
        .into_page()
        .map(|branch| Html(views::branch_page(&state.site_base_url, &branch)))
        .into_response()
}

/// JSON wins only when the client rates it strictly above HTML; ties go to
/// the page.
fn prefers_json(headers: &HeaderMap) -> bool {
    let Some(accept) = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let json = quality(accept, "application", "json");
    json > 0.0 && json > quality(accept, "text", "html")
}

/// q-value the `Accept` header assigns to `kind/subtype`, taken from the most
/// specific matching range. Unmatched types rate 0.
fn quality(accept: &str, kind: &str, subtype: &str) -> f32 {
    let mut best: Option<(u8, f32)> = None;
    for range in accept.split(',') {
        let mut params = range.split(';');
        let Some((range_kind, range_subtype)) =
            params.next().and_then(|media| media.trim().split_once('/'))
        else {
            continue;
        };

        let specificity = if range_kind.eq_ignore_ascii_case(kind) {
            if range_subtype.eq_ignore_ascii_case(subtype) {
                2
            } else if range_subtype == "*" {
                1
            } else {
                continue;
            }
        } else if range_kind == "*" && range_subtype == "*" {
            0
        } else {
            continue;
        };

        let q = params
            .filter_map(|param| param.trim().strip_prefix("q="))
            .find_map(|value| value.trim().parse::<f32>().ok())
            .unwrap_or(1.0);

        if best.is_none_or(|(seen, _)| specificity > seen) {
            best = Some((specificity, q));
        }
    }
    best.map_or(0.0, |(_, q)| q)
}
