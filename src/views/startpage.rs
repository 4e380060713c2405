//! トップページ（作品一覧と検索）

use leptos::*;
use leptos_router::{use_navigate, use_query_map, NavigateOptions};

use crate::components::{ArtworkCard, StatusLine};
use crate::state::artworks::use_artworks;
use crate::utils::settings::use_config;

#[component]
pub fn Startpage() -> impl IntoView {
    let config = use_config();
    let collection = config.collection;
    let card_width = config.card_image_width;

    let query = use_query_map();
    let request = create_memo(move |_| {
        let term = query.with(|q| q.get("q").cloned());
        config.list_request(term)
    });
    let artworks = use_artworks(collection, request.into());

    let (search_input, set_search_input) = create_signal(
        query.with_untracked(|q| q.get("q").cloned()).unwrap_or_default(),
    );
    let navigate = use_navigate();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let term = search_input.get_untracked();
        let term = term.trim();
        let path = if term.is_empty() {
            "/".to_string()
        } else {
            format!("/?q={}", urlencoding::encode(term))
        };
        navigate(&path, NavigateOptions::default());
    };

    let ready = move || !artworks.loading.get() && artworks.error.get().is_none();

    view! {
        <main class="startpage-container">
            <h1 class="startpage-title">{collection.label()} " — Artworks"</h1>

            <form class="search-form" on:submit=on_submit>
                <input
                    type="search"
                    placeholder="Search the collection"
                    prop:value=move || search_input.get()
                    on:input=move |ev| set_search_input.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>

            <StatusLine
                loading=artworks.loading
                error=artworks.error
                loading_text="Loading artworks…"
            />

            <Show when=ready>
                <Show
                    when=move || !artworks.data.with(Vec::is_empty)
                    fallback=|| view! { <div class="startpage-empty">"No artworks found."</div> }
                >
                    <div class="startpage-grid">
                        <For
                            each=move || artworks.data.get()
                            key=|art| art.id.clone()
                            children=move |art| view! {
                                <ArtworkCard artwork=art width=card_width show_favorite=true />
                            }
                        />
                    </div>
                </Show>
            </Show>
        </main>
    }
}
