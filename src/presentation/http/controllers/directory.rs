use crate::application::queries::branches::{
    BankDirectoryQuery, CityDirectoryQuery, StateDirectoryQuery,
};
use crate::presentation::http::error::{IntoPageResult, PageResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views;
use axum::{Extension, extract::Path, response::Html};

pub async fn home(Extension(state): Extension<HttpState>) -> Html<String> {
    Html(views::home_page(&state.site_base_url))
}

pub async fn list_banks(Extension(state): Extension<HttpState>) -> PageResult<Html<String>> {
    let banks = state.services.branch_queries.list_banks().await.into_page()?;
    Ok(Html(views::banks_page(&state.site_base_url, &banks)))
}

pub async fn bank_page(
    Extension(state): Extension<HttpState>,
    Path(bank_slug): Path<String>,
) -> PageResult<Html<String>> {
    let page = state
        .services
        .branch_queries
        .bank_directory(BankDirectoryQuery { bank_slug })
        .await
        .into_page()?;
    Ok(Html(views::bank_page(&state.site_base_url, &page)))
}

pub async fn state_page(
    Extension(state): Extension<HttpState>,
    Path((bank_slug, state_slug)): Path<(String, String)>,
) -> PageResult<Html<String>> {
    let page = state
        .services
        .branch_queries
        .state_directory(StateDirectoryQuery {
            bank_slug,
            state_slug,
        })
        .await
        .into_page()?;
    Ok(Html(views::state_page(&state.site_base_url, &page)))
}

pub async fn city_page(
    Extension(state): Extension<HttpState>,
    Path((bank_slug, state_slug, city_slug)): Path<(String, String, String)>,
) -> PageResult<Html<String>> {
    let page = state
        .services
        .branch_queries
        .city_directory(CityDirectoryQuery {
            bank_slug,
            state_slug,
            city_slug,
        })
        .await
        .into_page()?;
    Ok(Html(views::city_page(&state.site_base_url, &page)))
}
