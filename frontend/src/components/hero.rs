//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Influenciadores e marcas, sem intermediários"</h1>
            <p class="subtitle">
                "Feche campanhas, acompanhe cada etapa e receba com segurança. "
                "Descubra quanto vale o seu perfil e garanta seu lugar na lista de espera."
            </p>
            <a href="#waitlist" class="btn btn-primary">"Quero participar"</a>
        </div>
    }
}
