//! お気に入りコンテキスト
//!
//! ルートで1度だけ読み込み、全ページで共有する。
//! 他のタブでの変更は `storage` イベントで検知して読み直す

use gloo::events::EventListener;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;

use crate::models::ArtworkId;
use crate::utils::favorites::{FavoriteSet, FAVORITES_KEY};
use crate::utils::log_trace::{log_debug, log_info};
use crate::utils::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct FavoritesContext {
    set: RwSignal<FavoriteSet>,
}

impl FavoritesContext {
    pub fn is_favorite(&self, id: &ArtworkId) -> bool {
        self.set.with(|set| set.contains(id))
    }

    /// 所属を反転してすぐに保存する
    pub fn toggle(&self, id: &ArtworkId) {
        self.set.update(|set| {
            let added = set.toggle(id.clone());
            log_info("favorites", &format!("{} {}", if added { "追加" } else { "削除" }, id));
            if let Err(e) = set.save(&BrowserStorage) {
                log_debug("favorites", &format!("保存に失敗: {}", e));
            }
        });
    }

    pub fn ids(&self) -> Vec<ArtworkId> {
        self.set.with(FavoriteSet::ids)
    }

    pub fn count(&self) -> usize {
        self.set.with(FavoriteSet::len)
    }
}

/// 読み込みに失敗したら「お気に入りなし」として扱う
fn load_favorites() -> FavoriteSet {
    FavoriteSet::load(&BrowserStorage).unwrap_or_else(|e| {
        log_debug("favorites", &format!("読み込みに失敗: {}", e));
        FavoriteSet::default()
    })
}

/// `storage` イベントのキーがお気に入りか。`clear()` 由来の `None` は対象外
fn is_favorites_change(key: Option<&str>) -> bool {
    key == Some(FAVORITES_KEY)
}

/// 他のタブでの変更を検知して読み直すリスナーを登録する
fn watch_storage(set: RwSignal<FavoriteSet>) -> Option<EventListener> {
    let window = web_sys::window()?;
    Some(EventListener::new(&window, "storage", move |event| {
        let key = event.dyn_ref::<StorageEvent>().and_then(StorageEvent::key);
        if is_favorites_change(key.as_deref()) {
            log_debug("favorites", "他のタブでの変更を反映");
            set.set(load_favorites());
        }
    }))
}

pub fn provide_favorites() {
    let set = create_rw_signal(load_favorites());

    if let Some(listener) = watch_storage(set) {
        on_cleanup(move || drop(listener));
    }

    provide_context(FavoritesContext { set });
}

pub fn use_favorites() -> FavoritesContext {
    use_context::<FavoritesContext>().expect("FavoritesContext not found")
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::utils::settings::SETTINGS_KEY;
    use crate::utils::storage::KeyValueStore;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn dispatch_storage_event(key: &str) {
        let init = web_sys::StorageEventInit::new();
        init.set_key(Some(key));
        let event = StorageEvent::new_with_event_init_dict("storage", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_storage_event_reloads_favorites() {
        let runtime = create_runtime();
        BrowserStorage.set(FAVORITES_KEY, "[]").unwrap();

        let set = create_rw_signal(load_favorites());
        let favorites = FavoritesContext { set };
        let _listener = watch_storage(set).unwrap();
        let id = ArtworkId::from(436535u64);
        assert!(!favorites.is_favorite(&id));

        // 別タブが書き込んだ想定
        BrowserStorage.set(FAVORITES_KEY, "[436535]").unwrap();
        dispatch_storage_event(SETTINGS_KEY);
        assert!(!favorites.is_favorite(&id));

        dispatch_storage_event(FAVORITES_KEY);
        assert!(favorites.is_favorite(&id));
        assert_eq!(favorites.count(), 1);

        BrowserStorage.set(FAVORITES_KEY, "[]").unwrap();
        runtime.dispose();
    }
}
