//! packs 共通ライブラリ
//!
//! `pic-fetch` / `searxng-search` / `stock-report` / `daily-report` で共有される
//! エラー型・Outbound ポート・標準アダプターを提供します。

/// エラーハンドリング
pub mod error;

/// Outbound ポート（trait）
pub mod ports;

/// ポートの標準実装
pub mod adapter;
