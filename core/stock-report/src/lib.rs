//! 上証指数と業種セクターの騰落をプレーンテキストにまとめる

pub mod domain;
pub mod format;
pub mod usecase;
pub mod wiring;
