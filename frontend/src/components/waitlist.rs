//! Waitlist signup form.
//!
//! The form data lives in the parent; this component edits it through the
//! signal and submits it. While a submission is pending the button is
//! disabled and further submits are ignored.
//!
//! The follower input keeps its own text: a count that does not parse stays
//! on screen with a hint instead of being replaced by the last valid count.

use collabhub::{SocialNetwork, SubmissionGate, WaitlistField, WaitlistFormData};
use leptos::*;

use crate::components::{EarningsEstimate, Notifier};
use crate::services::submit_waitlist;
use crate::API_BASE_URL;

#[component]
pub fn WaitlistForm(
    /// Form data, owned by the parent
    form: RwSignal<WaitlistFormData>,
    notifier: Notifier,
    /// Called after the API accepted the signup
    #[prop(optional, into)]
    on_submitted: Option<Callback<()>>,
) -> impl IntoView {
    let gate = store_value(SubmissionGate::new());
    let (submitting, set_submitting) = create_signal(false);

    let (followers_raw, set_followers_raw) = create_signal(
        form.with_untracked(|f| f.followers.get().map(|n| n.to_string()).unwrap_or_default()),
    );
    let (followers_hint, set_followers_hint) = create_signal(None::<String>);
    let followers = Signal::derive(move || form.with(|f| f.followers));

    let on_field = move |field: WaitlistField| {
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            if field != WaitlistField::Followers {
                form.update(|f| {
                    let _ = f.set_field(field, value);
                });
                return;
            }
            set_followers_raw.set(value.clone());
            let mut outcome = Ok(());
            form.update(|f| outcome = f.set_field(field, value));
            set_followers_hint.set(outcome.err().map(|e| e.to_string()));
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        if let Some(hint) = followers_hint.get_untracked() {
            notifier.error(hint);
            return;
        }
        let payload = match form.with(|f| f.to_payload()) {
            Ok(payload) => payload,
            Err(e) => {
                notifier.error(e.to_string());
                return;
            }
        };

        let pending = gate.with_value(|g| {
            g.submit(async move { submit_waitlist(&payload, API_BASE_URL).await })
        });
        let Some(pending) = pending else {
            return;
        };
        set_submitting.set(true);
        log::info!("📤 Submitting waitlist signup...");

        spawn_local(async move {
            match pending.await {
                Ok(()) => {
                    notifier.success("Pronto! Você está na lista de espera.");
                    set_followers_raw.set(String::new());
                    if let Some(cb) = on_submitted {
                        cb.call(());
                    }
                }
                Err(e) => {
                    notifier.error(format!("Não foi possível enviar: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="waitlist-form" on:submit=on_submit>
            <label class="field">
                <span class="field-label">"Nome *"</span>
                <input
                    type="text"
                    required
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=on_field(WaitlistField::Name)
                />
            </label>

            <label class="field">
                <span class="field-label">"E-mail *"</span>
                <input
                    type="email"
                    required
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=on_field(WaitlistField::Email)
                />
            </label>

            <label class="field">
                <span class="field-label">"Instagram *"</span>
                <input
                    type="text"
                    required
                    placeholder="@seuperfil"
                    prop:value=move || form.with(|f| f.instagram.clone())
                    on:input=on_field(WaitlistField::Instagram)
                />
            </label>

            <label class="field">
                <span class="field-label">"Seguidores"</span>
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="Ex.: 10.000"
                    prop:value=followers_raw
                    on:input=on_field(WaitlistField::Followers)
                />
            </label>

            <Show
                when=move || followers_hint.with(Option::is_some)
                fallback=|| view! { }
            >
                <div class="field-hint error-message">
                    {move || followers_hint.get().unwrap_or_default()}
                </div>
            </Show>

            <EarningsEstimate followers=followers/>

            <fieldset class="field">
                <legend class="field-label">"Outras redes"</legend>
                <div class="chip-list">
                    {SocialNetwork::auxiliary()
                        .map(|network| {
                            let selected = move || form.with(|f| f.networks().contains(&network));
                            view! {
                                <button
                                    type="button"
                                    class="chip"
                                    class:selected=selected
                                    on:click=move |_| form.update(|f| f.toggle_network(network))
                                >
                                    {network.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </fieldset>

            <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Enviando..." } else { "Entrar na lista" }}
            </button>
        </form>
    }
}

/// Waitlist section of the landing page; owns the form data.
#[component]
pub fn WaitlistSection(notifier: Notifier) -> impl IntoView {
    let form = create_rw_signal(WaitlistFormData::default());
    let on_submitted = Callback::new(move |_: ()| form.update(|f| f.clear()));

    view! {
        <section class="waitlist-section" id="waitlist">
            <h2>"Entre na lista de espera"</h2>
            <p class="subtitle">"Seja um dos primeiros a fechar campanhas pela CollabHub."</p>
            <WaitlistForm form=form notifier=notifier on_submitted=on_submitted/>
        </section>
    }
}
