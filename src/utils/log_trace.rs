//! 診断ログ
//! 直近のログをメモリ上に保持しつつブラウザのコンソールにも出力する。
//! フッターの「Export log」でJSONとしてダウンロードできる

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use wasm_bindgen::prelude::*;

const MAX_LOG_ENTRIES: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub category: String, // "api", "favorites", "settings", "ui"
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

pub struct LogTrace {
    logs: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogTrace {
    pub fn new(capacity: usize) -> Self {
        LogTrace {
            logs: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// 上限を超えたら古いものから捨てる
    pub fn push(&mut self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        while self.logs.len() >= self.capacity {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);
    }

    pub fn get_logs_json(&self) -> String {
        let logs: Vec<&LogEntry> = self.logs.iter().collect();
        serde_json::to_string_pretty(&logs).unwrap_or_else(|_| "[]".to_string())
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.logs.len()
    }
}

// グローバルなログインスタンス
thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::new(MAX_LOG_ENTRIES));
}

fn record(level: LogLevel, category: &str, message: &str, data: Option<serde_json::Value>) {
    let timestamp = js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default();

    let line: JsValue = format!("[{}] {}", category, message).into();
    match level {
        LogLevel::Error => web_sys::console::error_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Debug => web_sys::console::debug_1(&line),
        LogLevel::Info => web_sys::console::log_1(&line),
    }

    let entry = LogEntry {
        timestamp,
        level,
        category: category.to_string(),
        message: message.to_string(),
        data,
    };
    LOG_TRACE.with(|trace| trace.borrow_mut().push(entry));
}

pub fn log_debug(category: &str, message: &str) {
    record(LogLevel::Debug, category, message, None);
}

pub fn log_info(category: &str, message: &str) {
    record(LogLevel::Info, category, message, None);
}

pub fn log_info_with_data(category: &str, message: &str, data: serde_json::Value) {
    record(LogLevel::Info, category, message, Some(data));
}

pub fn log_warn(category: &str, message: &str) {
    record(LogLevel::Warn, category, message, None);
}

pub fn log_error(category: &str, message: &str) {
    record(LogLevel::Error, category, message, None);
}

pub fn get_logs_json() -> String {
    LOG_TRACE.with(|trace| trace.borrow().get_logs_json())
}

/// ログをJSONファイルとしてダウンロード
pub fn download_logs() {
    let json_str = get_logs_json();
    let timestamp = js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default();
    let filename = format!("art_gallery_log_{}.json", timestamp.replace(':', "-").replace('.', "-"));

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&JsValue::from_str(&json_str));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");

    if let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options) {
        if let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) {
            if let Ok(a) = document.create_element("a") {
                let _ = a.set_attribute("href", &url);
                let _ = a.set_attribute("download", &filename);
                if let Some(element) = a.dyn_ref::<web_sys::HtmlElement>() {
                    element.click();
                }
            }
            let _ = web_sys::Url::revoke_object_url(&url);
        }
    }
}
