//! 画像取得ユースケース: 分類 → プロバイダ呼び出し → ダウンロード → 保存

use crate::domain::{classify, names_anime, ImageLink, Mode, ProviderFailure, ProviderResponse};
use common::error::Error;
use common::ports::outbound::{Clock, FileSystem, HttpClient, Log, LogLevel, LogRecord};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Lolicon API v2 のエンドポイント
pub const PROVIDER_URL: &str = "https://api.lolicon.app/setu/v2";

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// `ext` が無いときの拡張子
const DEFAULT_EXT: &str = "png";

pub struct PicFetchUseCase {
    http: Arc<dyn HttpClient>,
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
    out_dir: PathBuf,
}

impl PicFetchUseCase {
    pub fn new(
        http: Arc<dyn HttpClient>,
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        log: Arc<dyn Log>,
        out_dir: PathBuf,
    ) -> Self {
        Self {
            http,
            fs,
            clock,
            log,
            out_dir,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// プロバイダに 1 回問い合わせ、画像 URL と保存ファイル名を返す。
    /// 失敗はすべて ProviderFailure として返し、エラーを外へ伝播しない。
    pub fn request_image(&self, mode: Mode) -> Result<ImageLink, ProviderFailure> {
        let url = format!("{}?r18={}", PROVIDER_URL, mode.r18_param());
        let doc = self.http.get_json(&url, PROVIDER_TIMEOUT).map_err(|e| {
            self.warn("provider request failed", &url, &e.to_string());
            ProviderFailure::Request(e.to_string())
        })?;
        let resp: ProviderResponse = serde_json::from_value(doc).map_err(|e| {
            self.warn("provider response malformed", &url, &e.to_string());
            ProviderFailure::Request(e.to_string())
        })?;

        let image = resp
            .data
            .and_then(|d| d.into_iter().next())
            .ok_or(ProviderFailure::Empty)?;
        let ext = image
            .ext
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_EXT.to_string());
        Ok(ImageLink {
            url: image.urls.original,
            filename: format!("lolicon_{}.{}", self.clock.now_secs(), ext),
        })
    }

    /// 画像を出力ディレクトリへストリーミング保存し、保存先パスを返す。
    /// 失敗時は書きかけのファイルを残さない。
    pub fn download(&self, url: &str, filename: &str) -> Result<PathBuf, Error> {
        self.fs.create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(filename);
        let written = {
            let mut file = self.fs.create(&path)?;
            self.http
                .download(url, DOWNLOAD_TIMEOUT, &mut file)
                .and_then(|n| {
                    file.flush().map_err(|e| {
                        Error::io_msg(format!("Failed to write '{}': {}", path.display(), e))
                    })?;
                    Ok(n)
                })
        };
        let written = match written {
            Ok(n) => n,
            Err(e) => {
                self.warn("download failed", url, &e.to_string());
                if let Err(rm) = self.fs.remove_file(&path) {
                    self.warn("partial file not removed", url, &rm.to_string());
                }
                return Err(e);
            }
        };
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "image saved")
                .layer("usecase")
                .field("path", path.display().to_string())
                .field("bytes", written),
        );
        Ok(path)
    }

    /// 1 回分の実行。状況と結果を `out` に 1 行ずつ書き出す。
    ///
    /// 成人向けモードは二次元キーワードを含むクエリでのみ有効。それ以外は常に通常モード。
    pub fn run(&self, query: &str, r18_flag: bool, out: &mut dyn Write) -> Result<i32, Error> {
        let mode = if names_anime(query) {
            let mode = classify(query, r18_flag);
            emit(
                out,
                &format!("正在匹配 Lolicon API (R18: {})...", mode.is_restricted()),
            )?;
            mode
        } else {
            Mode::Normal
        };

        let link = match self.request_image(mode) {
            Ok(link) => link,
            Err(failure) => {
                emit(out, &format!("未能获取到图片链接: {}", failure))?;
                return Ok(0);
            }
        };

        emit(out, &format!("获取链接成功: {}", link.url))?;
        match self.download(&link.url, &link.filename) {
            Ok(path) => emit(out, &path.display().to_string())?,
            Err(e) => emit(out, &format!("下载失败: {}", e))?,
        }
        Ok(0)
    }

    fn warn(&self, message: &str, url: &str, error: &str) {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Warn, message)
                .layer("usecase")
                .kind("error")
                .field("url", url)
                .field("error", error),
        );
    }
}

fn emit(out: &mut dyn Write, line: &str) -> Result<(), Error> {
    writeln!(out, "{}", line).map_err(|e| Error::io_msg(format!("Failed to write output: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::{NoopLog, StdFileSystem};
    use serde_json::json;
    use std::sync::Mutex;

    struct FixedClock(u64);

    impl Clock for FixedClock {
        fn now_ms(&self) -> u64 {
            self.0
        }
    }

    /// get は固定の JSON（または失敗）、download は固定バイト列を返すスタブ
    struct StubHttp {
        json: Result<serde_json::Value, String>,
        image: Result<Vec<u8>, String>,
        status: Option<(u16, String)>,
        requested: Mutex<Vec<String>>,
    }

    impl StubHttp {
        fn new(json: Result<serde_json::Value, String>, image: Result<Vec<u8>, String>) -> Self {
            Self {
                json,
                image,
                status: None,
                requested: Mutex::new(Vec::new()),
            }
        }

        /// 画像取得だけが HTTP ステータスエラーになる
        fn failing_download(error: Error) -> Self {
            let status = match error {
                Error::HttpStatus { status, reason } => Some((status, reason)),
                _ => None,
            };
            Self {
                status,
                ..Self::new(Ok(ok_doc()), Ok(vec![]))
            }
        }
    }

    impl HttpClient for StubHttp {
        fn get(&self, url: &str, _timeout: Duration) -> Result<Vec<u8>, Error> {
            self.requested.lock().unwrap().push(url.to_string());
            match &self.json {
                Ok(v) => Ok(serde_json::to_vec(v).unwrap()),
                Err(msg) => Err(Error::transport(msg.clone())),
            }
        }

        fn download(&self, url: &str, _timeout: Duration, dest: &mut dyn Write) -> Result<u64, Error> {
            self.requested.lock().unwrap().push(url.to_string());
            if let Some((status, reason)) = &self.status {
                return Err(Error::HttpStatus {
                    status: *status,
                    reason: reason.clone(),
                });
            }
            match &self.image {
                Ok(bytes) => {
                    dest.write_all(bytes).unwrap();
                    Ok(bytes.len() as u64)
                }
                Err(msg) => Err(Error::transport(msg.clone())),
            }
        }
    }

    fn use_case(http: Arc<StubHttp>, out_dir: PathBuf) -> PicFetchUseCase {
        PicFetchUseCase::new(
            http,
            Arc::new(StdFileSystem),
            Arc::new(FixedClock(1_700_000_000_123)),
            Arc::new(NoopLog),
            out_dir,
        )
    }

    fn ok_doc() -> serde_json::Value {
        json!({
            "error": "",
            "data": [{
                "pid": 1,
                "urls": { "original": "https://i.pixiv.re/img-original/1.jpg" },
                "ext": "jpg"
            }]
        })
    }

    #[test]
    fn test_request_image_builds_link() {
        let dir = tempfile::tempdir().unwrap();
        let http = Arc::new(StubHttp::new(Ok(ok_doc()), Ok(vec![])));
        let uc = use_case(http.clone(), dir.path().to_path_buf());

        let link = uc.request_image(Mode::Restricted).unwrap();
        assert_eq!(link.url, "https://i.pixiv.re/img-original/1.jpg");
        assert_eq!(link.filename, "lolicon_1700000000.jpg");
        assert_eq!(
            http.requested.lock().unwrap()[0],
            "https://api.lolicon.app/setu/v2?r18=1"
        );
    }

    #[test]
    fn test_request_image_defaults_ext_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let doc = json!({ "data": [{ "urls": { "original": "https://x/a" } }] });
        let http = Arc::new(StubHttp::new(Ok(doc), Ok(vec![])));
        let uc = use_case(http, dir.path().to_path_buf());
        let link = uc.request_image(Mode::Normal).unwrap();
        assert_eq!(link.filename, "lolicon_1700000000.png");
    }

    #[test]
    fn test_request_image_empty_data_is_soft_failure() {
        let dir = tempfile::tempdir().unwrap();
        for doc in [json!({ "data": [] }), json!({ "error": "" }), json!({ "data": null })] {
            let http = Arc::new(StubHttp::new(Ok(doc), Ok(vec![])));
            let uc = use_case(http, dir.path().to_path_buf());
            assert_eq!(uc.request_image(Mode::Normal), Err(ProviderFailure::Empty));
        }
    }

    #[test]
    fn test_request_image_transport_error_is_captured() {
        let dir = tempfile::tempdir().unwrap();
        let http = Arc::new(StubHttp::new(Err("connection refused".to_string()), Ok(vec![])));
        let uc = use_case(http, dir.path().to_path_buf());
        assert_eq!(
            uc.request_image(Mode::Normal),
            Err(ProviderFailure::Request("connection refused".to_string()))
        );
    }

    #[test]
    fn test_request_image_malformed_entry_is_captured() {
        let dir = tempfile::tempdir().unwrap();
        let doc = json!({ "data": [{ "urls": {} }] });
        let http = Arc::new(StubHttp::new(Ok(doc), Ok(vec![])));
        let uc = use_case(http, dir.path().to_path_buf());
        assert!(matches!(
            uc.request_image(Mode::Normal),
            Err(ProviderFailure::Request(_))
        ));
    }

    #[test]
    fn test_download_creates_out_dir_and_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("out").join("pic-api");
        let http = Arc::new(StubHttp::new(Ok(ok_doc()), Ok(b"\x89PNG".to_vec())));
        let uc = use_case(http, out_dir.clone());

        let path = uc.download("https://x/a.png", "lolicon_1.png").unwrap();
        assert_eq!(path, out_dir.join("lolicon_1.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"\x89PNG");
    }

    #[test]
    fn test_download_failure_is_error_value() {
        let dir = tempfile::tempdir().unwrap();
        let http = Arc::new(StubHttp::new(Ok(ok_doc()), Err("timed out".to_string())));
        let uc = use_case(http, dir.path().to_path_buf());
        let err = uc.download("https://x/a.png", "a.png").unwrap_err();
        assert_eq!(err.to_string(), "timed out");
    }

    #[test]
    fn test_download_failure_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("pic-api");
        let http = Arc::new(StubHttp::failing_download(Error::HttpStatus {
            status: 404,
            reason: "Not Found".to_string(),
        }));
        let uc = use_case(http, out_dir.clone());

        let mut out = Vec::new();
        uc.run("cat", false, &mut out).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .ends_with("下载失败: HTTP 404 Not Found\n"));
        let left: Vec<_> = std::fs::read_dir(&out_dir).unwrap().collect();
        assert!(left.is_empty(), "files left: {:?}", left);
    }

    #[test]
    fn test_run_success_output() {
        let dir = tempfile::tempdir().unwrap();
        let http = Arc::new(StubHttp::new(Ok(ok_doc()), Ok(b"img".to_vec())));
        let uc = use_case(http.clone(), dir.path().to_path_buf());

        let mut out = Vec::new();
        let code = uc.run("二次元 色图", false, &mut out).unwrap();
        assert_eq!(code, 0);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "正在匹配 Lolicon API (R18: true)...");
        assert_eq!(lines[1], "获取链接成功: https://i.pixiv.re/img-original/1.jpg");
        assert_eq!(
            lines[2],
            dir.path().join("lolicon_1700000000.jpg").display().to_string()
        );
        assert_eq!(
            http.requested.lock().unwrap()[0],
            "https://api.lolicon.app/setu/v2?r18=1"
        );
    }

    #[test]
    fn test_run_plain_query_has_no_status_line() {
        let dir = tempfile::tempdir().unwrap();
        let http = Arc::new(StubHttp::new(Ok(ok_doc()), Ok(b"img".to_vec())));
        let uc = use_case(http.clone(), dir.path().to_path_buf());

        let mut out = Vec::new();
        uc.run("cat", false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("获取链接成功: "));
        assert_eq!(
            http.requested.lock().unwrap()[0],
            "https://api.lolicon.app/setu/v2?r18=0"
        );
    }

    #[test]
    fn test_run_non_anime_query_ignores_restricted_request() {
        let dir = tempfile::tempdir().unwrap();
        let http = Arc::new(StubHttp::new(Ok(ok_doc()), Ok(b"img".to_vec())));
        let uc = use_case(http.clone(), dir.path().to_path_buf());

        let mut out = Vec::new();
        uc.run("cat", true, &mut out).unwrap();
        uc.run("r18 girl", false, &mut out).unwrap();
        let requested = http.requested.lock().unwrap();
        assert_eq!(requested[0], "https://api.lolicon.app/setu/v2?r18=0");
        assert_eq!(requested[2], "https://api.lolicon.app/setu/v2?r18=0");
        assert!(!String::from_utf8(out).unwrap().contains("正在匹配"));
    }

    #[test]
    fn test_run_anime_query_honors_flag() {
        let dir = tempfile::tempdir().unwrap();
        let http = Arc::new(StubHttp::new(Ok(ok_doc()), Ok(b"img".to_vec())));
        let uc = use_case(http.clone(), dir.path().to_path_buf());

        let mut out = Vec::new();
        uc.run("anime", true, &mut out).unwrap();
        assert_eq!(
            http.requested.lock().unwrap()[0],
            "https://api.lolicon.app/setu/v2?r18=1"
        );
        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with("正在匹配 Lolicon API (R18: true)...\n"));
    }

    #[test]
    fn test_run_provider_failure_output() {
        let dir = tempfile::tempdir().unwrap();
        let http = Arc::new(StubHttp::new(Ok(json!({ "data": [] })), Ok(vec![])));
        let uc = use_case(http, dir.path().to_path_buf());

        let mut out = Vec::new();
        let code = uc.run("cat", false, &mut out).unwrap();
        assert_eq!(code, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "未能获取到图片链接: API 返回数据为空\n"
        );
    }

    #[test]
    fn test_run_download_failure_output() {
        let dir = tempfile::tempdir().unwrap();
        let http = Arc::new(StubHttp::new(Ok(ok_doc()), Err("HTTP 404 Not Found".to_string())));
        let uc = use_case(http, dir.path().to_path_buf());

        let mut out = Vec::new();
        uc.run("cat", false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("下载失败: HTTP 404 Not Found\n"), "got: {}", text);
    }
}
