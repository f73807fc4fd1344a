//! Campaign progress tracker.

use collabhub::{progress, Campaign, CampaignStage};
use leptos::*;

/// Six-step tracker, recomputed from the stage on every change.
#[component]
pub fn CampaignProgress(#[prop(into)] stage: MaybeSignal<CampaignStage>) -> impl IntoView {
    view! {
        <ol class="campaign-steps">
            {move || {
                progress(stage.get())
                    .into_iter()
                    .map(|p| {
                        view! {
                            <li class=format!("campaign-step {}", p.status.css_class())>
                                <div class="step-marker">{p.status.marker()}</div>
                                <div class="step-body">
                                    <div class="step-label">{p.step.label}</div>
                                    <div class="step-description">{p.step.description}</div>
                                </div>
                                {p.has_connector.then(|| view! {
                                    <div class=p.status.connector_class()></div>
                                })}
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ol>
    }
}

/// Sample campaign page with a stage picker.
#[component]
pub fn CampaignPage() -> impl IntoView {
    let (campaign, set_campaign) = create_signal(Campaign {
        id: "demo".to_string(),
        title: "Coleção de Verão".to_string(),
        brand: "Marca Exemplo".to_string(),
        status: CampaignStage::Delivery,
    });
    let stage = Signal::derive(move || campaign.with(|c| c.status));

    let on_stage_change = move |ev: ev::Event| {
        match event_target_value(&ev).parse::<CampaignStage>() {
            Ok(status) => set_campaign.update(|c| c.status = status),
            Err(e) => log::warn!("{}", e),
        }
    };

    view! {
        <section class="campaign-section">
            <div class="campaign-header">
                <h2>{move || campaign.with(|c| c.title.clone())}</h2>
                <span class="badge">{move || campaign.with(|c| c.brand.clone())}</span>
            </div>

            <label class="field">
                <span class="field-label">"Etapa atual"</span>
                <select on:change=on_stage_change>
                    {CampaignStage::ALL
                        .into_iter()
                        .map(|s| {
                            view! {
                                <option value=s.id() selected=move || stage.get() == s>
                                    {s.id()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>

            <CampaignProgress stage=stage/>
        </section>
    }
}
