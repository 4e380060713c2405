//! 作品詳細ページ

use leptos::*;
use leptos_router::{use_params_map, A};

use crate::components::FavoriteButton;
use crate::models::{Artwork, ArtworkId};
use crate::state::artworks::use_artwork;
use crate::utils::settings::use_config;

/// 空欄を置き換える
fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

#[component]
pub fn SingleArt() -> impl IntoView {
    let config = use_config();
    let detail_width = config.detail_image_width;

    let params = use_params_map();
    let id = create_memo(move |_| {
        params
            .with(|p| p.get("id").map(|raw| ArtworkId::from(raw.as_str())))
            .filter(|id| !id.is_empty())
    });
    let art = use_artwork(config.collection, id.into());

    move || {
        if art.loading.get() {
            return view! { <div class="startpage-loading">"Loading..."</div> }.into_view();
        }
        if let Some(e) = art.error.get() {
            return view! { <div class="startpage-error">"Error: " {e}</div> }.into_view();
        }
        match art.data.get() {
            Some(artwork) => view! { <ArtworkDetail artwork=artwork width=detail_width /> }.into_view(),
            None => view! { <div class="startpage-error">"Artwork not found"</div> }.into_view(),
        }
    }
}

#[component]
fn ArtworkDetail(artwork: Artwork, width: u32) -> impl IntoView {
    let image = match artwork.image_url(width) {
        Some(src) => view! {
            <img src=src alt=artwork.title.clone() class="singleart-image" />
        }
        .into_view(),
        None => view! { <div class="startpage-no-image">"No image"</div> }.into_view(),
    };

    view! {
        <main class="startpage-container">
            <A href="/" class="startpage-back">"← Back to list"</A>
            <h1 class="startpage-title">
                {artwork.title.clone()}
                <FavoriteButton id=artwork.id.clone() />
            </h1>
            <div class="singleart-layout">
                {image}
                <div class="singleart-info">
                    <div><strong>"Artist:"</strong> " " {or_placeholder(&artwork.artist, "Unknown")}</div>
                    <div><strong>"Date:"</strong> " " {or_placeholder(&artwork.date, "—")}</div>
                    <div><strong>"Medium:"</strong> " " {or_placeholder(&artwork.medium, "—")}</div>
                    <div><strong>"Dimensions:"</strong> " " {or_placeholder(&artwork.dimensions, "—")}</div>
                    <div><strong>"Credit:"</strong> " " {or_placeholder(&artwork.credit_line, "—")}</div>
                </div>
            </div>
        </main>
    }
}
