//! リアクティブ状態
//!
//! 取得系フックは共通の `{data, loading, error}` を返す

pub mod artworks;
pub mod favorites;

use leptos::*;

/// 取得状態
pub struct FetchState<T: 'static> {
    pub data: RwSignal<T>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: 'static> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FetchState<T> {}

impl<T: 'static> FetchState<T> {
    pub fn new(initial: T) -> Self {
        FetchState {
            data: create_rw_signal(initial),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
        }
    }
}
