//! Text input with a label above it.

use leptos::prelude::*;

#[component]
pub fn LabelledInput(
    label: &'static str,
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="labelled-input">
            <label class="labelled-input__label">
                {label}
                <input
                    class="labelled-input__field"
                    type=input_type
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </label>
        </div>
    }
}
