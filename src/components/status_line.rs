//! 読み込み中／エラー表示

use leptos::*;

#[component]
pub fn StatusLine(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    loading_text: &'static str,
) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! {
            <div class="startpage-error">"Error: " {e}</div>
        })}
        {move || loading.get().then(|| view! {
            <div class="startpage-loading">{loading_text}</div>
        })}
    }
}
