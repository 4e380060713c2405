//! お気に入り一覧ページ

use leptos::*;
use leptos_router::A;

use crate::components::{ArtworkCard, StatusLine};
use crate::state::artworks::use_favorite_artworks;
use crate::state::favorites::use_favorites;
use crate::utils::settings::use_config;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let config = use_config();
    let card_width = config.card_image_width;
    let favorites = use_favorites();

    let ids = create_memo(move |_| favorites.ids());
    let arts = use_favorite_artworks(config.collection, ids.into());

    let ready = move || !arts.loading.get() && arts.error.get().is_none();

    view! {
        <main class="startpage-container">
            <A href="/" class="startpage-back">"← Back to list"</A>
            <h1 class="startpage-title">"Favorites"</h1>

            <StatusLine loading=arts.loading error=arts.error loading_text="Loading favorites…" />

            <Show when=ready>
                <Show
                    when=move || !arts.data.with(Vec::is_empty)
                    fallback=|| view! { <div class="startpage-empty">"No favorites yet."</div> }
                >
                    <div class="startpage-grid">
                        <For
                            each=move || arts.data.get()
                            key=|art| art.id.clone()
                            children=move |art| view! { <ArtworkCard artwork=art width=card_width /> }
                        />
                    </div>
                </Show>
            </Show>
        </main>
    }
}
