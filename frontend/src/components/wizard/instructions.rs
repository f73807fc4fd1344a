//! Step 3: post the validation image with the verification caption.

use collabhub::SocialNetwork;
use leptos::*;

use crate::components::Notifier;
use crate::services::{copy_text, download_file};
use crate::{VALIDATION_IMAGE_FILENAME, VALIDATION_IMAGE_URL};

#[component]
pub fn InstructionsStep(
    platform: Option<SocialNetwork>,
    code: String,
    caption: String,
    notifier: Notifier,
    #[prop(into)] on_next: Callback<()>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let network = platform.map(|p| p.label()).unwrap_or("sua rede");
    let caption = store_value(caption);

    let on_copy = move |_| {
        let text = caption.get_value();
        spawn_local(async move {
            match copy_text(&text).await {
                Ok(()) => notifier.success("Legenda copiada!"),
                Err(e) => notifier.error(format!("Não foi possível copiar: {}", e)),
            }
        });
    };

    let on_download = move |_| {
        spawn_local(async move {
            match download_file(VALIDATION_IMAGE_URL, VALIDATION_IMAGE_FILENAME).await {
                Ok(()) => notifier.success("Imagem salva!"),
                Err(e) => notifier.error(format!("Não foi possível baixar a imagem: {}", e)),
            }
        });
    };

    view! {
        <div class="wizard-screen">
            <ol class="instructions">
                <li>"Baixe a imagem de validação."</li>
                <li>{format!("Publique a imagem no seu {} com a legenda abaixo.", network)}</li>
                <li>"Volte aqui e cole o link da publicação."</li>
            </ol>

            <div class="verification-code">{code}</div>
            <pre class="caption">{caption.get_value()}</pre>

            <div class="wizard-actions">
                <button type="button" class="btn btn-secondary" on:click=on_copy>
                    "Copiar legenda"
                </button>
                <button type="button" class="btn btn-secondary" on:click=on_download>
                    "Baixar imagem"
                </button>
            </div>

            <div class="wizard-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| on_back.call(())>
                    "Voltar"
                </button>
                <button type="button" class="btn btn-primary" on:click=move |_| on_next.call(())>
                    "Já publiquei"
                </button>
            </div>
        </div>
    }
}
