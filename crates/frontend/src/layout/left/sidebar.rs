//! Left rail shown on every page: logo and a "back" button

use crate::domain::a001_orphanage::ui::create::LISTING_ROUTE;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let go_back = move |_| {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    };

    view! {
        <aside class="app-sidebar">
            <a href=LISTING_ROUTE class="app-sidebar__logo" title="Início">
                {icon("logo")}
            </a>

            <footer>
                <button type="button" title="Voltar" on:click=go_back>
                    {icon("arrow-left")}
                </button>
            </footer>
        </aside>
    }
}
