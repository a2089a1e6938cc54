use crate::domain::a001_orphanage::ui::create::{CreateOrphanage, LISTING_ROUTE};
use crate::domain::a001_orphanage::ui::landing::OrphanagesLanding;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub const CREATE_ORPHANAGE_ROUTE: &str = "/orphanages/create";

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Página não encontrada"</h2>
            <a href=LISTING_ROUTE>"Voltar ao início"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=OrphanagesLanding />
                <Route path=path!("/app") view=OrphanagesLanding />
                <Route path=path!("/orphanages/create") view=CreateOrphanage />
            </Routes>
        </Router>
    }
}
