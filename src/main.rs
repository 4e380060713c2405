use leptos::*;
use leptos_router::*;

mod api;
mod components;
mod models;
mod state;
mod utils;
mod views;

use components::{Footer, Nav};
use state::favorites::provide_favorites;
use utils::log_trace::log_info;
use utils::settings::load_config;
use views::{FavoritesPage, NotFound, SingleArt, Startpage};

// ============================================
// メインアプリ（ルーティング）
// ============================================

#[component]
fn App() -> impl IntoView {
    let config = load_config();
    log_info("ui", &format!("起動: {}", config.collection.label()));
    provide_context(config);
    provide_favorites();

    view! {
        <Router>
            <div class="app">
                <Nav />
                <Routes>
                    <Route path="/" view=Startpage />
                    <Route path="/art/:id" view=SingleArt />
                    <Route path="/favorites" view=FavoritesPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
