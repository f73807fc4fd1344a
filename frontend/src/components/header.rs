use leptos::*;
use leptos_router::*;

use crate::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">{APP_NAME}</A>
                <span class="badge">"beta"</span>
            </div>
            <nav class="header-right">
                <A href="/" class="nav-link" exact=true>"Início"</A>
                <A href="/conectar" class="nav-link">"Conectar conta"</A>
                <A href="/campanha" class="nav-link">"Campanha"</A>
            </nav>
        </header>
    }
}
