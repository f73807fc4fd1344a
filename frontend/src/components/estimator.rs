//! Earnings estimator: follower count in, post/story/reels values out.

use collabhub::{estimate_display, FollowerCount};
use leptos::*;

/// The three estimated values for a follower count.
///
/// Shows the placeholder while the count is unset.
#[component]
pub fn EarningsEstimate(#[prop(into)] followers: Signal<FollowerCount>) -> impl IntoView {
    let display = create_memo(move |_| estimate_display(followers.get()));
    let is_placeholder = move || display.with(|d| d.is_placeholder());

    view! {
        <div class="estimate-grid" class:estimate-empty=is_placeholder>
            <div class="estimate-card">
                <div class="estimate-label">"Post no feed"</div>
                <div class="estimate-value">{move || display.with(|d| d.post.clone())}</div>
            </div>
            <div class="estimate-card">
                <div class="estimate-label">"Story"</div>
                <div class="estimate-value">{move || display.with(|d| d.story.clone())}</div>
            </div>
            <div class="estimate-card">
                <div class="estimate-label">"Reels"</div>
                <div class="estimate-value">{move || display.with(|d| d.reels.clone())}</div>
            </div>
        </div>
    }
}

/// Standalone estimator with its own follower input.
#[component]
pub fn EarningsEstimator() -> impl IntoView {
    let (raw, set_raw) = create_signal(String::new());
    let parsed = create_memo(move |_| raw.with(|r| FollowerCount::parse_input(r)));

    let followers = Signal::derive(move || parsed.get().unwrap_or_default());
    let hint = move || parsed.get().err().map(|e| e.to_string());

    view! {
        <section class="estimator-section">
            <h2>"Quanto vale o seu perfil?"</h2>
            <p class="subtitle">"Digite quantos seguidores você tem e veja uma estimativa por publicação."</p>

            <label class="field">
                <span class="field-label">"Seguidores"</span>
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="Ex.: 10.000"
                    prop:value=raw
                    on:input=move |ev| set_raw.set(event_target_value(&ev))
                />
            </label>

            <Show
                when=move || hint().is_some()
                fallback=|| view! { }
            >
                <div class="field-hint error-message">{move || hint().unwrap_or_default()}</div>
            </Show>

            <EarningsEstimate followers=followers/>
        </section>
    }
}
