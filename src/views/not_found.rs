//! 404ページ

use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="startpage-container">
            <h1 class="startpage-title">"404 — Page Not Found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <p>
                <A href="/" class="startpage-back">"← Back to home"</A>
            </p>
        </main>
    }
}
