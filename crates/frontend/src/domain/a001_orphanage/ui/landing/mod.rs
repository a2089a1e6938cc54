//! Placeholder for the orphanage listing route

use crate::layout::left::Sidebar;
use crate::routes::routes::CREATE_ORPHANAGE_ROUTE;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn OrphanagesLanding() -> impl IntoView {
    view! {
        <div id="page-landing">
            <Sidebar />

            <main>
                <h1>"Orfanatos"</h1>
                <p>"Cadastre um orfanato para que ele apareça no mapa."</p>
                <a href=CREATE_ORPHANAGE_ROUTE class="button button--primary">
                    {icon("plus")}
                    "Cadastrar orfanato"
                </a>
            </main>
        </div>
    }
}
