//! Social account connection wizard.
//!
//! [`ConnectWizard`] owns the [`WizardState`] and is the only place that
//! moves between steps. The step screens are stateless: they receive the
//! data they show and report user actions through callbacks.
//!
//! - [`PlatformSelectStep`] - account kind and network
//! - [`UsernameStep`] - handle on the network
//! - [`InstructionsStep`] - verification caption and image
//! - [`ValidationStep`] - link to the published post
//! - [`SuccessStep`] - confirmation

mod platform_select;
mod username;
mod instructions;
mod validation;
mod success;

pub use platform_select::*;
pub use username::*;
pub use instructions::*;
pub use validation::*;
pub use success::*;

use collabhub::{AccountKind, SocialNetwork, WizardAction, WizardState, WizardStep};
use leptos::*;

use crate::components::Notifier;

#[component]
pub fn ConnectWizard(notifier: Notifier) -> impl IntoView {
    let state = create_rw_signal(WizardState::new());
    let step = create_memo(move |_| state.with(|s| s.step()));

    let go = move |action: WizardAction| {
        let mut outcome = None;
        state.update(|s| {
            let result = s.apply(action);
            if result == Ok(WizardStep::Instructions) {
                s.ensure_code(&mut rand::thread_rng());
            }
            outcome = Some(result);
        });
        if let Some(Err(e)) = outcome {
            log::warn!("⚠️ {}", e);
            notifier.error(e.to_string());
        }
    };

    let on_next = Callback::new(move |_: ()| go(WizardAction::Next));
    let on_back = Callback::new(move |_: ()| go(WizardAction::Back));
    let on_restart = Callback::new(move |_: ()| state.update(|s| s.reset()));

    let on_type_select = Callback::new(move |kind: AccountKind| {
        state.update(|s| s.select_kind(kind));
    });
    let on_platform_select = Callback::new(move |platform: SocialNetwork| {
        log::info!("🔗 Connecting {}", platform);
        let mut outcome = None;
        state.update(|s| outcome = Some(s.select_platform(platform)));
        if let Some(Err(e)) = outcome {
            notifier.error(e.to_string());
        }
    });

    let on_username = Callback::new(move |value: String| state.update(|s| s.draft.username = value));
    let on_post_url = Callback::new(move |value: String| state.update(|s| s.draft.post_url = value));

    let kind = Signal::derive(move || state.with(|s| s.draft.kind));
    let username = Signal::derive(move || state.with(|s| s.draft.username.clone()));
    let post_url = Signal::derive(move || state.with(|s| s.draft.post_url.clone()));
    let can_advance = Signal::derive(move || state.with(|s| s.can_advance()));

    // Untracked: screens are rebuilt only when the step changes, not on every keystroke
    let platform = move || state.with_untracked(|s| s.draft.platform);

    let screen = move || match step.get() {
        WizardStep::PlatformSelect => view! {
            <PlatformSelectStep
                kind=kind
                on_type_select=on_type_select
                on_platform_select=on_platform_select
            />
        }
        .into_view(),
        WizardStep::Username => view! {
            <UsernameStep
                platform=platform()
                username=username
                can_advance=can_advance
                on_change=on_username
                on_next=on_next
                on_back=on_back
            />
        }
        .into_view(),
        WizardStep::Instructions => {
            let (code, caption) = state.with_untracked(|s| {
                let code = s.draft.verification_code.clone();
                (
                    code.as_ref().map(|c| c.to_string()).unwrap_or_default(),
                    code.map(|c| c.caption(s.draft.platform)).unwrap_or_default(),
                )
            });
            view! {
                <InstructionsStep
                    platform=platform()
                    code=code
                    caption=caption
                    notifier=notifier
                    on_next=on_next
                    on_back=on_back
                />
            }
            .into_view()
        }
        WizardStep::Validation => view! {
            <ValidationStep
                post_url=post_url
                can_advance=can_advance
                on_change=on_post_url
                on_next=on_next
                on_back=on_back
            />
        }
        .into_view(),
        WizardStep::Success => view! {
            <SuccessStep
                platform=platform()
                handle=state.with_untracked(|s| s.draft.handle().to_string())
                on_back=on_back
                on_restart=on_restart
            />
        }
        .into_view(),
    };

    view! {
        <section class="wizard">
            <div class="wizard-header">
                <span class="wizard-counter">
                    {move || format!("Passo {} de {}", step.get().number(), WizardStep::ALL.len())}
                </span>
                <h2>{move || step.get().title()}</h2>
            </div>
            {screen}
        </section>
    }
}
