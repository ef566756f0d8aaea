//! reqwest (blocking) を使う HttpClient 実装

use crate::error::Error;
use crate::ports::outbound::{HttpClient, Log, LogLevel, LogRecord};
use reqwest::blocking::{Client, Response};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

/// reqwest::blocking::Client を委譲する HttpClient 実装
pub struct ReqwestHttpClient {
    client: Client,
    log: Arc<dyn Log>,
}

impl ReqwestHttpClient {
    /// User-Agent を固定したクライアントを作成する
    pub fn new(user_agent: &str, log: Arc<dyn Log>) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::system(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, log })
    }

    fn send(&self, url: &str, timeout: Duration) -> Result<Response, Error> {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Debug, "http request")
                .layer("adapter")
                .kind("http")
                .field("url", url)
                .field("timeout_secs", timeout.as_secs_f64()),
        );
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .map_err(|e| self.request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            let _ = self.log.log(
                &LogRecord::new(LogLevel::Warn, "http status error")
                    .layer("adapter")
                    .kind("http")
                    .field("url", url)
                    .field("status", status.as_u16()),
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }
        Ok(response)
    }

    /// reqwest のエラーを分類する（URL 不正は引数エラー、それ以外は通信エラー）
    fn request_error(&self, url: &str, e: reqwest::Error) -> Error {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Warn, "http request failed")
                .layer("adapter")
                .kind("http")
                .field("url", url)
                .field("error", e.to_string()),
        );
        if e.is_builder() {
            Error::invalid_argument(format!("Invalid request URL '{}': {}", url, e))
        } else {
            Error::transport(e.to_string())
        }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, Error> {
        let response = self.send(url, timeout)?;
        let body = response
            .bytes()
            .map_err(|e| self.request_error(url, e))?;
        Ok(body.to_vec())
    }

    fn download(&self, url: &str, timeout: Duration, dest: &mut dyn Write) -> Result<u64, Error> {
        let mut response = self.send(url, timeout)?;
        response
            .copy_to(dest)
            .map_err(|e| self.request_error(url, e))
    }
}
