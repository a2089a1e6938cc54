use super::state::weekend_button_classes;
use super::view_model::CreateOrphanageVm;
use crate::config::use_app_config;
use crate::layout::left::Sidebar;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;
use crate::shared::map::MapPicker;
use contracts::domain::a001_orphanage::{ABOUT_MAX_CHARS, ENDPOINT};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::{Spinner, SpinnerSize};

#[component]
pub fn CreateOrphanage() -> impl IntoView {
    let config = use_app_config();
    let vm = CreateOrphanageVm::new();
    let navigate = use_navigate();
    let endpoint_url = config.api_url(ENDPOINT);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        vm.submit_command(endpoint_url.clone(), move |route| {
            navigate(route, Default::default())
        });
    };

    let is_submitting = move || vm.form.with(|f| f.is_submitting());
    let weekend_classes = move || vm.form.with(|f| weekend_button_classes(f.open_on_weekends()));

    view! {
        <div id="page-create-orphanage">
            <Sidebar />

            <main>
                <form on:submit=on_submit class="create-orphanage-form">
                    {move || {
                        vm.form
                            .with(|f| f.error().map(str::to_string))
                            .map(|e| view! { <div class="alert alert--error">{e}</div> })
                    }}

                    <fieldset>
                        <legend>"Dados"</legend>

                        <MapPicker
                            center=config.map_center
                            zoom=config.map_zoom
                            tiles=config.tiles.clone()
                            marker=Signal::derive(move || vm.form.with(|f| f.position()))
                            on_pick=Callback::new(move |point| vm.pick_position(point))
                        />

                        <Input
                            id="name"
                            label="Nome"
                            value=Signal::derive(move || vm.form.with(|f| f.name().to_string()))
                            on_input=Callback::new(move |v| vm.form.update(|f| f.set_name(v)))
                        />

                        <Textarea
                            id="about"
                            label="Sobre"
                            hint=format!("Máximo de {} caracteres", ABOUT_MAX_CHARS)
                            maxlength=ABOUT_MAX_CHARS
                            value=Signal::derive(move || vm.form.with(|f| f.about().to_string()))
                            on_input=Callback::new(move |v| vm.form.update(|f| f.set_about(v)))
                        />

                        <div class="input-block">
                            <label for="image[]">"Fotos"</label>

                            <div class="images-container">
                                <For
                                    each=move || vm.preview_urls()
                                    key=|url| url.clone()
                                    children=move |url: String| {
                                        view! {
                                            <img
                                                src=url
                                                alt=move || vm.form.with(|f| f.name().to_string())
                                            />
                                        }
                                    }
                                />
                                <label for="image[]" class="new-image">
                                    {icon("plus")}
                                </label>
                            </div>

                            <input
                                multiple
                                type="file"
                                id="image[]"
                                accept="image/*"
                                on:change=move |ev| {
                                    let input: web_sys::HtmlInputElement = event_target(&ev);
                                    vm.select_images_command(input.files());
                                }
                            />
                        </div>
                    </fieldset>

                    <fieldset>
                        <legend>"Visitação"</legend>

                        <Textarea
                            id="instructions"
                            label="Instruções"
                            value=Signal::derive(move || vm.form.with(|f| f.instructions().to_string()))
                            on_input=Callback::new(move |v| vm.form.update(|f| f.set_instructions(v)))
                        />

                        <Input
                            id="opening_hours"
                            label="Horário de funcionamento"
                            value=Signal::derive(move || vm.form.with(|f| f.opening_hours().to_string()))
                            on_input=Callback::new(move |v| vm.form.update(|f| f.set_opening_hours(v)))
                        />

                        <div class="input-block">
                            <label for="open_on_weekends">"Atende fim de semana"</label>

                            <div class="button-select" id="open_on_weekends">
                                <button
                                    type="button"
                                    class=move || weekend_classes().0
                                    on:click=move |_| vm.form.update(|f| f.set_open_on_weekends(true))
                                >
                                    "Sim"
                                </button>
                                <button
                                    type="button"
                                    class=move || weekend_classes().1
                                    on:click=move |_| vm.form.update(|f| f.set_open_on_weekends(false))
                                >
                                    "Não"
                                </button>
                            </div>
                        </div>
                    </fieldset>

                    <Button
                        class="confirm-button"
                        button_type="submit"
                        disabled=Signal::derive(is_submitting)
                    >
                        {move || {
                            if is_submitting() {
                                view! {
                                    <Spinner size=SpinnerSize::Small />
                                    "Enviando..."
                                }
                                    .into_any()
                            } else {
                                view! { "Confirmar" }.into_any()
                            }
                        }}
                    </Button>
                </form>
            </main>
        </div>
    }
}
