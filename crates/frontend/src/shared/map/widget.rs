use super::projection::Viewport;
use super::tiles::TileSource;
use crate::shared::icons::icon;
use contracts::domain::a001_orphanage::GeoPoint;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Width used until the container has been measured
const FALLBACK_WIDTH: f64 = 600.0;
/// Pointer travel (px) after which a press counts as a drag, not a click
const DRAG_THRESHOLD_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy)]
struct DragState {
    start_x: f64,
    start_y: f64,
    origin: Viewport,
    moved: bool,
}

/// Map surface that reports the clicked coordinates.
///
/// The map can be dragged and zoomed; a press that turned into a drag does not
/// produce a pick. A marker is drawn at `marker` when it is set.
#[component]
pub fn MapPicker(
    /// Initial center of the map
    center: GeoPoint,
    /// Initial zoom level
    zoom: u8,
    /// Tile provider
    tiles: TileSource,
    /// Point to mark on the map
    #[prop(into)]
    marker: Signal<Option<GeoPoint>>,
    /// Called with the coordinates of every click on the map
    on_pick: Callback<GeoPoint>,
    /// Height in pixels (280 by default)
    #[prop(optional)]
    height: Option<u32>,
) -> impl IntoView {
    let height = f64::from(height.unwrap_or(280));
    let viewport = RwSignal::new(Viewport::new(center, zoom, FALLBACK_WIDTH, height));
    let container = NodeRef::<leptos::html::Div>::new();
    let drag = RwSignal::new(None::<DragState>);
    let suppress_click = StoredValue::new(false);

    let measure = move || {
        if let Some(el) = container.get_untracked() {
            let width = f64::from(el.client_width());
            if width > 0.0 {
                viewport.update(|v| v.width = width);
            }
        }
    };

    Effect::new(move |_| {
        if container.get().is_some() {
            measure();
        }
    });

    let resize = window_event_listener(leptos::ev::resize, move |_| measure());
    on_cleanup(move || resize.remove());

    let on_mousedown = move |ev: MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        drag.set(Some(DragState {
            start_x: f64::from(ev.client_x()),
            start_y: f64::from(ev.client_y()),
            origin: viewport.get_untracked(),
            moved: false,
        }));
    };

    let on_mousemove = move |ev: MouseEvent| {
        let Some(mut state) = drag.get_untracked() else {
            return;
        };
        let dx = f64::from(ev.client_x()) - state.start_x;
        let dy = f64::from(ev.client_y()) - state.start_y;
        if !state.moved && dx.hypot(dy) < DRAG_THRESHOLD_PX {
            return;
        }
        state.moved = true;
        drag.set(Some(state));
        let width = viewport.with_untracked(|v| v.width);
        viewport.set(Viewport {
            width,
            ..state.origin.panned(dx, dy)
        });
    };

    let on_mouseup = move |_: MouseEvent| {
        if let Some(state) = drag.get_untracked() {
            suppress_click.set_value(state.moved);
        }
        drag.set(None);
    };

    let on_click = move |ev: MouseEvent| {
        if suppress_click.get_value() {
            suppress_click.set_value(false);
            return;
        }
        let Some(el) = container.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let x = f64::from(ev.client_x()) - rect.left();
        let y = f64::from(ev.client_y()) - rect.top();
        let point = viewport.with_untracked(|v| v.screen_to_geo(x, y));
        on_pick.run(point);
    };

    let zoom_by = move |delta: i8| {
        move |ev: MouseEvent| {
            ev.stop_propagation();
            viewport.update(|v| *v = v.zoomed(delta));
        }
    };

    let attribution = tiles.attribution.clone();

    view! {
        <div
            class=move || {
                if drag.with(|d| d.is_some_and(|s| s.moved)) {
                    "map-picker map-picker--dragging"
                } else {
                    "map-picker"
                }
            }
            node_ref=container
            style=format!("height: {}px;", height)
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:mouseup=on_mouseup
            on:mouseleave=move |_| drag.set(None)
            on:click=on_click
        >
            {move || {
                viewport
                    .with(|v| v.visible_tiles())
                    .into_iter()
                    .map(|tile| {
                        view! {
                            <img
                                class="map-picker__tile"
                                src=tiles.tile_url(tile.coord)
                                alt=""
                                draggable="false"
                                style=format!("left: {:.1}px; top: {:.1}px;", tile.left, tile.top)
                            />
                        }
                    })
                    .collect_view()
            }}

            {move || {
                marker.get().map(|point| {
                    let p = viewport.with(|v| v.geo_to_screen(point));
                    view! {
                        <div
                            class="map-picker__marker"
                            style=format!("left: {:.1}px; top: {:.1}px;", p.x, p.y)
                        >
                            {icon("map-pin")}
                        </div>
                    }
                })
            }}

            <div
                class="map-picker__zoom"
                on:mousedown=|ev: MouseEvent| ev.stop_propagation()
            >
                <button type="button" title="Aproximar" on:click=zoom_by(1)>"+"</button>
                <button type="button" title="Afastar" on:click=zoom_by(-1)>"−"</button>
            </div>

            <div class="map-picker__attribution">{attribution}</div>
        </div>
    }
}
