use crate::config::AppConfig;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Build-time configuration (API base, map tiles) for the whole app.
    provide_context(AppConfig::load());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
