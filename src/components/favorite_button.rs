//! お気に入りボタン

use leptos::*;

use crate::models::ArtworkId;
use crate::state::favorites::use_favorites;

/// ハートのトグルボタン
///
/// カードのリンク内に置かれるので、クリックは遷移させずに止める
#[component]
pub fn FavoriteButton(id: ArtworkId) -> impl IntoView {
    let favorites = use_favorites();
    let id = store_value(id);
    let active = move || id.with_value(|id| favorites.is_favorite(id));

    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        id.with_value(|id| favorites.toggle(id));
    };

    view! {
        <button
            class="favorite-btn"
            aria-pressed=move || active().to_string()
            title=move || if active() { "Remove favorite" } else { "Add favorite" }
            on:click=on_click
        >
            <span class=move || if active() { "favorite-icon active" } else { "favorite-icon" }>"♥"</span>
        </button>
    }
}
