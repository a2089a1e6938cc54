use leptos::prelude::*;

/// Textarea component with label support
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Small text rendered inside the label, after the label text
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Maximum number of characters the browser lets the user type
    #[prop(optional)]
    maxlength: Option<usize>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();

    view! {
        <div class="input-block">
            {move || label.get().map(|l| view! {
                <label for=textarea_id>
                    {l}
                    {move || hint.get().map(|h| view! { <span>{h}</span> })}
                </label>
            })}
            <textarea
                id=textarea_id
                class="form__textarea"
                maxlength=maxlength.map(|m| m.to_string())
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
