//! アプリ設定
//!
//! 既定値 → localStorage の保存値 → URLパラメータ（`?source=artic&limit=8&all=1`）の順で上書きし、
//! URLで指定された値は保存し直す

use leptos::use_context;
use serde::{Deserialize, Serialize};

use super::log_trace::{log_info, log_warn};
use super::storage::{BrowserStorage, KeyValueStore, StorageError};
use crate::api::{artic::MAX_PAGE_LIMIT, Collection, ListRequest};

pub const SETTINGS_KEY: &str = "art_gallery:settings";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub collection: Collection,
    /// 検索語が指定されていないときの一覧クエリ
    pub query: String,
    pub limit: usize,
    pub include_no_image: bool,
    pub card_image_width: u32,
    pub detail_image_width: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            collection: Collection::Met,
            query: "painting".to_string(),
            limit: 12,
            include_no_image: false,
            card_image_width: 600,
            detail_image_width: 1200,
        }
    }
}

impl AppConfig {
    pub fn load(store: &impl KeyValueStore) -> Result<AppConfig, StorageError> {
        match store.get(SETTINGS_KEY)? {
            Some(raw) if !raw.is_empty() => {
                serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
                    key: SETTINGS_KEY.to_string(),
                    reason: e.to_string(),
                })
            }
            _ => Ok(AppConfig::default()),
        }
    }

    pub fn save(&self, store: &impl KeyValueStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string());
        store.set(SETTINGS_KEY, &json)
    }

    /// URLクエリ文字列の設定を反映する。何か変わったら true
    pub fn apply_query(&mut self, search: &str) -> bool {
        let before = self.clone();
        for (key, value) in parse_query(search) {
            match key.as_str() {
                "source" => {
                    if let Some(collection) = Collection::parse(&value) {
                        self.collection = collection;
                    }
                }
                "limit" => {
                    if let Ok(limit) = value.parse::<usize>() {
                        if (1..=MAX_PAGE_LIMIT).contains(&limit) {
                            self.limit = limit;
                        }
                    }
                }
                "all" => match value.as_str() {
                    "1" | "true" | "yes" => self.include_no_image = true,
                    "0" | "false" | "no" => self.include_no_image = false,
                    _ => {}
                },
                _ => {}
            }
        }
        *self != before
    }

    /// 一覧リクエストを組み立てる。検索語があれば既定クエリより優先
    pub fn list_request(&self, search_term: Option<String>) -> ListRequest {
        let query = search_term
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .unwrap_or_else(|| self.query.clone());
        ListRequest {
            query,
            limit: self.limit,
            include_no_image: self.include_no_image,
        }
    }
}

fn parse_query(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = value.replace('+', " ");
            let value = urlencoding::decode(&value).ok()?.into_owned();
            Some((key.to_string(), value))
        })
        .collect()
}

/// ブラウザ環境で設定を読み込む
pub fn load_config() -> AppConfig {
    let store = BrowserStorage;
    let mut config = AppConfig::load(&store).unwrap_or_else(|e| {
        log_warn("settings", &format!("設定の読み込みに失敗したため既定値を使用: {}", e));
        AppConfig::default()
    });

    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    if config.apply_query(&search) {
        log_info("settings", &format!("URLパラメータで設定を更新: {:?}", config.collection));
        if let Err(e) = config.save(&store) {
            log_warn("settings", &format!("設定の保存に失敗: {}", e));
        }
    }
    config
}

/// ルートで提供された設定
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
