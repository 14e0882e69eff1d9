// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Absolute origin used for canonical links, without a trailing slash.
    pub site_base_url: Arc<str>,
}
