//! Step 2: the handle on the chosen network.

use collabhub::SocialNetwork;
use leptos::*;

#[component]
pub fn UsernameStep(
    platform: Option<SocialNetwork>,
    #[prop(into)] username: Signal<String>,
    #[prop(into)] can_advance: Signal<bool>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] on_next: Callback<()>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let network = platform.map(|p| p.label()).unwrap_or("sua rede");
    let preview = move || {
        platform
            .filter(|_| can_advance.get())
            .map(|p| username.with(|u| p.profile_url(u)))
    };

    view! {
        <div class="wizard-screen">
            <label class="field">
                <span class="field-label">{format!("Seu usuário no {}", network)}</span>
                <input
                    type="text"
                    placeholder="@seuperfil"
                    required
                    prop:value=username
                    on:input=move |ev| on_change.call(event_target_value(&ev))
                />
            </label>

            {move || preview().map(|url| view! { <div class="field-hint">{url}</div> })}

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
                    "Continuar"
                </button>
            </div>
        </div>
    }
}
