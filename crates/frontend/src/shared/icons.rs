use leptos::prelude::*;

pub fn icon(name: &str) -> AnyView {
    match name {
        "plus" => view! {
            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <line x1="12" y1="5" x2="12" y2="19"/>
                <line x1="5" y1="12" x2="19" y2="12"/>
            </svg>
        }.into_any(),
        "arrow-left" => view! {
            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <line x1="19" y1="12" x2="5" y2="12"/>
                <polyline points="12 19 5 12 12 5"/>
            </svg>
        }.into_any(),
        // Filled pin, tip at the bottom center of the box
        "map-pin" => view! {
            <svg width="40" height="48" viewBox="0 0 40 48" aria-hidden="true">
                <path d="M20 0C9 0 0 8.7 0 19.5 0 34 20 48 20 48s20-14 20-28.5C40 8.7 31 0 20 0z" fill="#15c3d6"/>
                <circle cx="20" cy="19" r="7" fill="#ffffff"/>
            </svg>
        }.into_any(),
        "logo" => view! {
            <svg width="48" height="56" viewBox="0 0 40 48" aria-hidden="true">
                <path d="M20 0C9 0 0 8.7 0 19.5 0 34 20 48 20 48s20-14 20-28.5C40 8.7 31 0 20 0z" fill="#ffd666"/>
                <path d="M14 18a6 6 0 0 1 12 0v8H14z" fill="#ffffff"/>
            </svg>
        }.into_any(),
        _ => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <circle cx="12" cy="12" r="10"/>
                <path d="M12 8v4l3 3"/>
            </svg>
        }.into_any(),
    }
}
