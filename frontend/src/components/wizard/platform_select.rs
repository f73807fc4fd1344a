//! Step 1: who is connecting, and which network.

use collabhub::{AccountKind, SocialNetwork};
use leptos::*;

#[component]
pub fn PlatformSelectStep(
    #[prop(into)] kind: Signal<AccountKind>,
    #[prop(into)] on_type_select: Callback<AccountKind>,
    #[prop(into)] on_platform_select: Callback<SocialNetwork>,
) -> impl IntoView {
    view! {
        <div class="wizard-screen">
            <div class="kind-toggle">
                {[AccountKind::Influencer, AccountKind::Brand]
                    .into_iter()
                    .map(|k| {
                        view! {
                            <button
                                type="button"
                                class="chip"
                                class:selected=move || kind.get() == k
                                on:click=move |_| on_type_select.call(k)
                            >
                                {k.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="platform-grid">
                {SocialNetwork::CONNECTABLE
                    .into_iter()
                    .map(|platform| {
                        view! {
                            <button
                                type="button"
                                class=format!("platform-tile platform-{}", platform.id())
                                on:click=move |_| on_platform_select.call(platform)
                            >
                                {platform.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
