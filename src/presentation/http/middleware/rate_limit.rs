// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

type ApiLimiter = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

const REPLENISH_PER_SECOND: u64 = 5;
const BURST: u32 = 30;

/// Per-client-IP limiter for the JSON lookup API. Requires the server to be
/// started with connect info so the peer address is available.
pub fn api_rate_limit_layer() -> ApiLimiter {
    static LIMITER: OnceLock<ApiLimiter> = OnceLock::new();

    LIMITER
        .get_or_init(|| {
            let config = GovernorConfigBuilder::default()
                .per_second(REPLENISH_PER_SECOND)
                .burst_size(BURST)
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("rate limit quota is non-zero");
            GovernorLayer::new(config)
        })
        .clone()
}
