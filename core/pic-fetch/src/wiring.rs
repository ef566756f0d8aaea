//! 配線: 標準アダプタで PicFetchUseCase を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{
    wire_logger, EnvResolver, Log, ReqwestHttpClient, StdClock, StdEnvResolver, StdFileSystem,
};
use common::error::Error;

use crate::cli::Config;
use crate::usecase::PicFetchUseCase;

/// 保存先ディレクトリを指定する環境変数
pub const OUT_DIR_ENV: &str = "PIC_FETCH_OUT_DIR";

const USER_AGENT: &str = concat!("packs-pic-fetch/", env!("CARGO_PKG_VERSION"));

pub struct App {
    pub use_case: PicFetchUseCase,
    pub logger: Arc<dyn Log>,
}

/// 保存先: --out-dir > $PIC_FETCH_OUT_DIR > <cwd>/out/pic-api
pub fn resolve_out_dir(config: &Config, env: &dyn EnvResolver) -> PathBuf {
    if let Some(dir) = &config.out_dir {
        return dir.clone();
    }
    if let Some(dir) = env.var(OUT_DIR_ENV) {
        return PathBuf::from(dir);
    }
    env.current_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("out")
        .join("pic-api")
}

pub fn wire_pic_fetch(config: &Config) -> Result<App, Error> {
    let env = StdEnvResolver;
    let logger = wire_logger(&env, "pic-fetch", config.verbose);
    let http = Arc::new(ReqwestHttpClient::new(USER_AGENT, Arc::clone(&logger))?);
    let use_case = PicFetchUseCase::new(
        http,
        Arc::new(StdFileSystem),
        Arc::new(StdClock),
        Arc::clone(&logger),
        resolve_out_dir(config, &env),
    );
    Ok(App { use_case, logger })
}
