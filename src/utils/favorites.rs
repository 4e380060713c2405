//! お気に入り集合
//!
//! 文字列IDの集合を JSON 配列として1つのキーに保存する。
//! 数値IDと文字列IDは `ArtworkId` で同一視される。並びは追加順

use super::storage::{KeyValueStore, StorageError};
use crate::models::ArtworkId;

pub const FAVORITES_KEY: &str = "artofchicago:favorites";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoriteSet {
    ids: Vec<ArtworkId>,
}

impl FavoriteSet {
    /// 保存値を読み込む。配列以外は空集合、数値要素は文字列に正規化、
    /// 文字列/数値以外の要素は無視する
    pub fn from_json(raw: &str) -> Result<FavoriteSet, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let mut set = FavoriteSet::default();
        if let serde_json::Value::Array(items) = value {
            for item in items {
                let id = match item {
                    serde_json::Value::String(s) => ArtworkId::from(s),
                    serde_json::Value::Number(n) => ArtworkId::from_number(&n),
                    _ => continue,
                };
                if !id.is_empty() && !set.contains(&id) {
                    set.ids.push(id);
                }
            }
        }
        Ok(set)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn contains(&self, id: &ArtworkId) -> bool {
        self.ids.contains(id)
    }

    /// 所属を反転し、反転後に含まれていれば true
    pub fn toggle(&mut self, id: ArtworkId) -> bool {
        match self.ids.iter().position(|existing| *existing == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        }
    }

    pub fn ids(&self) -> Vec<ArtworkId> {
        self.ids.clone()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn load(store: &impl KeyValueStore) -> Result<FavoriteSet, StorageError> {
        match store.get(FAVORITES_KEY)? {
            Some(raw) if !raw.is_empty() => {
                FavoriteSet::from_json(&raw).map_err(|e| StorageError::Corrupt {
                    key: FAVORITES_KEY.to_string(),
                    reason: e.to_string(),
                })
            }
            _ => Ok(FavoriteSet::default()),
        }
    }

    pub fn save(&self, store: &impl KeyValueStore) -> Result<(), StorageError> {
        store.set(FAVORITES_KEY, &self.to_json())
    }
}
