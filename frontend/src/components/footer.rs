//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2025 CollabHub • Feito com " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="https://www.instagram.com/collabhub/" class="footer-link" target="_blank">
                    "Instagram"
                </a>
                <a href="https://www.tiktok.com/@collabhub" class="footer-link" target="_blank">
                    "TikTok"
                </a>
                <a href="mailto:contato@collabhub.com.br" class="footer-link">
                    "Contato"
                </a>
            </div>
        </footer>
    }
}
