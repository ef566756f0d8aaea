//! 配線: 標準アダプタで StockReportUseCase を組み立てる

use std::sync::Arc;

use common::adapter::{wire_logger, Log, ReqwestHttpClient, StdEnvResolver};
use common::error::Error;

use crate::usecase::StockReportUseCase;

const USER_AGENT: &str = concat!("packs-stock-report/", env!("CARGO_PKG_VERSION"));

pub struct App {
    pub use_case: StockReportUseCase,
    pub logger: Arc<dyn Log>,
}

pub fn wire_stock_report(verbose: bool) -> Result<App, Error> {
    let logger = wire_logger(&StdEnvResolver, "stock-report", verbose);
    let http = Arc::new(ReqwestHttpClient::new(USER_AGENT, Arc::clone(&logger))?);
    Ok(App {
        use_case: StockReportUseCase::new(http, Arc::clone(&logger)),
        logger,
    })
}
