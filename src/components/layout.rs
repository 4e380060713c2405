//! ナビゲーションとフッター

use leptos::*;
use leptos_router::A;

use crate::state::favorites::use_favorites;
use crate::utils::log_trace::download_logs;
use crate::utils::settings::use_config;

#[component]
pub fn Nav() -> impl IntoView {
    let favorites = use_favorites();

    view! {
        <header class="app-header">
            <nav class="tabs">
                <A href="/" exact=true active_class="active">"Artworks"</A>
                <A href="/favorites" active_class="active">
                    "Favorites"
                    {move || match favorites.count() {
                        0 => String::new(),
                        n => format!(" ({})", n),
                    }}
                </A>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_config();

    view! {
        <footer class="app-footer">
            <span class="source">"Data: " {config.collection.label()}</span>
            <button class="log-export" on:click=move |_| download_logs()>"Export log"</button>
        </footer>
    }
}
