//! 画像取得のドメイン型

use serde::Deserialize;
use std::fmt;

/// 成人向けモードに切り替えるキーワード（小文字化したクエリに対する部分一致）
pub const RESTRICTED_KEYWORDS: &[&str] = &["色图", "r18"];

/// 二次元画像を求めるクエリとみなすキーワード
pub const ANIME_KEYWORDS: &[&str] = &["二次元", "色图", "anime"];

/// プロバイダへの問い合わせモード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// 成人向け（R18）
    Restricted,
}

impl Mode {
    pub fn is_restricted(self) -> bool {
        self == Mode::Restricted
    }

    /// API の `r18` クエリパラメータ値
    pub fn r18_param(self) -> u8 {
        match self {
            Mode::Normal => 0,
            Mode::Restricted => 1,
        }
    }
}

/// クエリを分類する。明示フラグかキーワードを含めば Restricted。
pub fn classify(query: &str, explicit_flag: bool) -> Mode {
    let q = query.to_lowercase();
    if explicit_flag || RESTRICTED_KEYWORDS.iter().any(|k| q.contains(k)) {
        Mode::Restricted
    } else {
        Mode::Normal
    }
}

/// 二次元画像を求めるクエリか
pub fn names_anime(query: &str) -> bool {
    let q = query.to_lowercase();
    ANIME_KEYWORDS.iter().any(|k| q.contains(k))
}

/// 取得した画像リンクと保存ファイル名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLink {
    pub url: String,
    pub filename: String,
}

/// プロバイダ呼び出しの失敗（例外ではなく値として返す）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderFailure {
    /// `data` が無い・空
    Empty,
    /// 通信・解析の失敗（診断メッセージ）
    Request(String),
}

impl fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderFailure::Empty => write!(f, "API 返回数据为空"),
            ProviderFailure::Request(msg) => write!(f, "{}", msg),
        }
    }
}

/// Lolicon API v2 のレスポンス（使うフィールドのみ）
#[derive(Debug, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub data: Option<Vec<ProviderImage>>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderImage {
    pub urls: ProviderUrls,
    #[serde(default)]
    pub ext: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderUrls {
    pub original: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_explicit_flag() {
        assert_eq!(classify("风景", true), Mode::Restricted);
        assert_eq!(classify("", true), Mode::Restricted);
    }

    #[test]
    fn test_classify_keywords() {
        assert_eq!(classify("来张色图", false), Mode::Restricted);
        assert_eq!(classify("anime R18 girl", false), Mode::Restricted);
        assert_eq!(classify("r18", false), Mode::Restricted);
    }

    #[test]
    fn test_classify_normal() {
        assert_eq!(classify("二次元", false), Mode::Normal);
        assert_eq!(classify("anime landscape", false), Mode::Normal);
        assert_eq!(classify("r1 8", false), Mode::Normal);
        assert_eq!(classify("", false), Mode::Normal);
    }

    #[test]
    fn test_names_anime() {
        assert!(names_anime("二次元 壁纸"));
        assert!(names_anime("ANIME"));
        assert!(names_anime("色图"));
        assert!(!names_anime("cat"));
    }

    #[test]
    fn test_mode_param() {
        assert_eq!(Mode::Normal.r18_param(), 0);
        assert_eq!(Mode::Restricted.r18_param(), 1);
        assert!(Mode::Restricted.is_restricted());
    }

    #[test]
    fn test_provider_failure_display() {
        assert_eq!(ProviderFailure::Empty.to_string(), "API 返回数据为空");
        assert_eq!(
            ProviderFailure::Request("timed out".to_string()).to_string(),
            "timed out"
        );
    }
}
