//! Step 5: done.

use collabhub::SocialNetwork;
use leptos::*;

#[component]
pub fn SuccessStep(
    platform: Option<SocialNetwork>,
    handle: String,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_restart: Callback<()>,
) -> impl IntoView {
    let network = platform.map(|p| p.label()).unwrap_or("sua rede");

    view! {
        <div class="wizard-screen wizard-success">
            <div class="success-icon">"🎉"</div>
            <p>{format!("Recebemos sua publicação de @{} no {}.", handle, network)}</p>
            <p class="subtitle">"Vamos conferir e avisar você por e-mail."</p>

            <div class="wizard-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| on_back.call(())>
                    "Voltar"
                </button>
                <button type="button" class="btn btn-primary" on:click=move |_| on_restart.call(())>
                    "Conectar outra conta"
                </button>
            </div>
        </div>
    }
}
