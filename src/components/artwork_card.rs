//! 作品カード

use leptos::*;
use leptos_router::A;
use web_sys::HtmlImageElement;

use super::FavoriteButton;
use crate::models::Artwork;

/// 一覧グリッドの1枚。画像が読めなければサムネイルに1度だけ差し替える
#[component]
pub fn ArtworkCard(
    artwork: Artwork,
    width: u32,
    #[prop(optional)] show_favorite: bool,
) -> impl IntoView {
    let href = format!("/art/{}", artwork.id);
    let alt = artwork.alt_text();
    let fallback = artwork.fallback_image();

    let image = match artwork.image_url(width) {
        Some(src) => view! {
            {show_favorite.then(|| view! { <FavoriteButton id=artwork.id.clone() /> })}
            <img
                src=src
                alt=alt
                class="startpage-image"
                on:error=move |ev| {
                    let Some(fallback) = fallback.as_deref() else { return };
                    let img: HtmlImageElement = event_target(&ev);
                    if img.src() != fallback {
                        img.set_src(fallback);
                    }
                }
            />
        }
        .into_view(),
        None => view! { <div class="startpage-no-image">"No image"</div> }.into_view(),
    };

    view! {
        <A href=href class="startpage-card-link">
            <article class="startpage-card">
                {image}
                <div class="startpage-meta">
                    <strong class="startpage-art-title">{artwork.title}</strong>
                    <div class="startpage-artist">{artwork.artist}</div>
                    <div class="startpage-date">{artwork.date}</div>
                </div>
            </article>
        </A>
    }
}
