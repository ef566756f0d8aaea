//! 配線: 標準アダプタで SearchUseCase を組み立て、Config を SearchParams に解決する

use std::sync::Arc;

use common::adapter::{wire_logger, EnvResolver, Log, ReqwestHttpClient, StdEnvResolver};
use common::error::Error;

use crate::cli::Config;
use crate::domain::SearchParams;
use crate::usecase::SearchUseCase;

/// SearXNG のベース URL を指定する環境変数
pub const BASE_URL_ENV: &str = "SEARXNG_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8888";

const USER_AGENT: &str = concat!("packs-searxng-search/", env!("CARGO_PKG_VERSION"));

pub struct App {
    pub use_case: SearchUseCase,
    pub logger: Arc<dyn Log>,
    pub params: SearchParams,
}

/// ベース URL: --base > $SEARXNG_BASE_URL > http://localhost:8888
pub fn resolve_params(config: &Config, env: &dyn EnvResolver) -> SearchParams {
    let base_url = config
        .base
        .clone()
        .or_else(|| env.var(BASE_URL_ENV))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    SearchParams {
        query: config.query.clone(),
        base_url,
        language: config.lang.clone(),
        safesearch: config.safesearch,
        count: config.count,
        timeout: config.timeout,
    }
}

pub fn wire_search(config: &Config) -> Result<App, Error> {
    let env = StdEnvResolver;
    let logger = wire_logger(&env, "searxng-search", config.verbose);
    let http = Arc::new(ReqwestHttpClient::new(USER_AGENT, Arc::clone(&logger))?);
    Ok(App {
        use_case: SearchUseCase::new(http, Arc::clone(&logger)),
        logger,
        params: resolve_params(config, &env),
    })
}
