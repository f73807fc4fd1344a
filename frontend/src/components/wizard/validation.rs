//! Step 4: link to the published post.

use leptos::*;

#[component]
pub fn ValidationStep(
    #[prop(into)] post_url: Signal<String>,
    #[prop(into)] can_advance: Signal<bool>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] on_next: Callback<()>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="wizard-screen">
            <label class="field">
                <span class="field-label">"Link da publicação"</span>
                <input
                    type="url"
                    placeholder="https://..."
                    required
                    prop:value=post_url
                    on:input=move |ev| on_change.call(event_target_value(&ev))
                />
            </label>

            <div class="wizard-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| on_back.call(())>
                    "Voltar"
                </button>
                <button
                    type="button"
                    class="btn btn-primary"
                    disabled=move || !can_advance.get()
                    on:click=move |_| on_next.call(())
                >
                    "Validar"
                </button>
            </div>
        </div>
    }
}
