//! ユーティリティモジュール

pub mod favorites;
pub mod fetch_guard;
pub mod log_trace;
pub mod settings;
pub mod storage;
