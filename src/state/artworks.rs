//! 作品取得フック
//!
//! 入力が変わるたびに前回のリクエストを中断して取り直す。
//! コンポーネント破棄時も中断し、古い応答は状態に書き込まない

use leptos::*;
use std::future::Future;
use web_sys::{AbortController, AbortSignal};

use super::FetchState;
use crate::api::{ApiError, Collection, ListRequest};
use crate::models::{Artwork, ArtworkId};
use crate::utils::fetch_guard::FetchGuard;
use crate::utils::log_trace::{log_error, log_info_with_data, log_warn};

type Guard = StoredValue<FetchGuard<AbortController>>;

fn new_guard() -> Guard {
    let guard = store_value(FetchGuard::default());
    on_cleanup(move || {
        guard.try_update_value(|g| g.cancel());
    });
    guard
}

/// 前回分を中断して取得を開始し、最新の世代の結果だけを反映する
fn start<T, F, Fut>(guard: Guard, state: FetchState<T>, fetch: F)
where
    T: 'static,
    F: FnOnce(Option<AbortSignal>) -> Fut,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(AbortController::signal);
    let Some(ticket) = guard.try_update_value(|g| g.begin(controller)) else {
        return;
    };

    state.loading.set(true);
    state.error.set(None);

    let fut = fetch(signal);
    spawn_local(async move {
        let result = fut.await;
        // 新しい取得が始まった／破棄された後の応答は捨てる
        if !guard.try_update_value(|g| g.finish(ticket)).unwrap_or(false) {
            return;
        }
        match result {
            Ok(data) => state.data.set(data),
            Err(e) if e.is_aborted() => {}
            Err(e) => {
                log_error("api", &e.to_string());
                state.error.set(Some(e.to_string()));
            }
        }
        state.loading.set(false);
    });
}

/// 作品一覧
pub fn use_artworks(collection: Collection, request: Signal<ListRequest>) -> FetchState<Vec<Artwork>> {
    let state = FetchState::new(Vec::new());
    let guard = new_guard();

    create_effect(move |_| {
        let request = request.get();
        start(guard, state, move |signal| async move {
            let artworks = collection.fetch_listing(&request, signal.as_ref()).await?;
            log_info_with_data(
                "api",
                "作品一覧を取得",
                serde_json::json!({
                    "collection": collection,
                    "query": request.query,
                    "limit": request.limit,
                    "count": artworks.len(),
                }),
            );
            Ok(artworks)
        });
    });

    state
}

/// 作品1件。IDがなければ何もしない
pub fn use_artwork(collection: Collection, id: Signal<Option<ArtworkId>>) -> FetchState<Option<Artwork>> {
    let state = FetchState::new(None);
    let guard = new_guard();

    create_effect(move |_| {
        let Some(artwork_id) = id.get() else {
            guard.try_update_value(|g| g.cancel());
            state.loading.set(false);
            return;
        };
        start(guard, state, move |signal| async move {
            collection.fetch_artwork(&artwork_id, signal.as_ref()).await.map(Some)
        });
    });

    state
}

/// お気に入りIDの作品をまとめて取得。取得できなかったIDは落とす
pub fn use_favorite_artworks(
    collection: Collection,
    ids: Signal<Vec<ArtworkId>>,
) -> FetchState<Vec<Artwork>> {
    let state = FetchState::new(Vec::new());
    let guard = new_guard();

    create_effect(move |_| {
        let ids = ids.get();
        if ids.is_empty() {
            guard.try_update_value(|g| g.cancel());
            state.data.set(Vec::new());
            state.error.set(None);
            state.loading.set(false);
            return;
        }
        start(guard, state, move |signal| async move {
            let batch = collection.fetch_batch(&ids, signal.as_ref()).await?;
            for (id, err) in &batch.failures {
                log_warn("api", &format!("お気に入り {} を取得できませんでした: {}", id, err));
            }
            Ok(batch.artworks)
        });
    });

    state
}
