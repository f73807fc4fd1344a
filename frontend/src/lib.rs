//! CollabHub - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the influencer/brand collaboration platform:
//! earnings estimator, waitlist signup, social account connection and
//! campaign progress.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation)                                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /          Hero, EarningsEstimator, WaitlistSection     │
//! │  ├── /conectar  ConnectWizard                                │
//! │  └── /campanha  CampaignPage                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer, Notifications                                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Toast, AppError)
//! - [`components`] - UI components
//! - [`services`] - API submission, clipboard, download
//!
//! The logic each screen renders lives in the `collabhub` crate.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Notifications
    Toast, ToastLevel,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 CollabHub - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (toasts, set_toasts) = create_signal(Vec::<Toast>::new());
    let notifier = Notifier::new(set_toasts);

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Header/>
            <main class="container">
                <Routes>
                    <Route path="/" view=move || view! { <LandingPage notifier=notifier/> }/>
                    <Route path="/conectar" view=move || view! { <ConnectWizard notifier=notifier/> }/>
                    <Route path="/campanha" view=CampaignPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
        <Notifications toasts=toasts notifier=notifier/>
    }
}

#[component]
fn LandingPage(notifier: Notifier) -> impl IntoView {
    view! {
        <Hero/>
        <EarningsEstimator/>
        <WaitlistSection notifier=notifier/>
    }
}
