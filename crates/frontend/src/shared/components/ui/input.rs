use leptos::prelude::*;

/// Text input with label and optional hint
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Small text rendered inside the label, after the label text
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Maximum number of characters the browser lets the user type
    #[prop(optional)]
    maxlength: Option<usize>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="input-block">
            {move || label.get().map(|l| view! {
                <label for=input_id>
                    {l}
                    {move || hint.get().map(|h| view! { <span>{h}</span> })}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type="text"
                prop:value=move || value.get()
                maxlength=maxlength.map(|m| m.to_string())
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
