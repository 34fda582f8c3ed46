//! Single credential input
//!
//! Text box with its warning message and the button that clears it.

use leptos::prelude::*;

use crate::core::{Field, FormState};

/// One credential input with its warning and clear button
#[component]
pub fn CredentialField(
    /// Which form field this input edits
    field: Field,
    /// Input type (text, password)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    placeholder: &'static str,
    /// Snapshot of the form the field reads from
    form: RwSignal<FormState>,
    /// Input event callback
    on_input: Callback<(Field, String)>,
    /// Blur event callback
    on_blur: Callback<()>,
    /// Clear button callback
    on_clear: Callback<Field>,
) -> impl IntoView {
    let invalid = move || form.with(|f| f.validity(field).is_invalid());

    view! {
        <div class="input-group" class:input-group-warning=invalid>
            <label class="input-label" class:input-label-warning=invalid>
                <input
                    type=input_type
                    name=field.to_string()
                    placeholder=placeholder
                    class:input-warning=invalid
                    prop:value=move || form.with(|f| f.value(field).to_string())
                    on:input=move |ev| on_input.run((field, event_target_value(&ev)))
                    on:blur=move |_| on_blur.run(())
                />
                <Show when=invalid>
                    <button
                        type="button"
                        class="clear-button"
                        aria-label="Clear"
                        on:click=move |_| on_clear.run(field)
                    >
                        "×"
                    </button>
                    <span class="warning-icon">"!"</span>
                </Show>
            </label>
            <Show when=invalid>
                <p class="warning-text">{field.warning()}</p>
            </Show>
        </div>
    }
}
