//! Campaign lifecycle and the progress tracker derived from it.
//!
//! A campaign moves through six ranked stages. Each step of the tracker is
//! compared by rank against the campaign's current stage:
//!
//! ```text
//! proposal → production → prepayment → delivery → validation → payment
//!   rank 0      rank 1       rank 2      rank 3       rank 4      rank 5
//! ```
//!
//! Lower rank is completed, equal rank is current, higher rank is upcoming,
//! so exactly one step is ever current.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::CampaignError;

// =============================================================================
// Stages
// =============================================================================

/// Stage of a campaign, ordered by [`CampaignStage::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStage {
    Proposal,
    Production,
    Prepayment,
    Delivery,
    Validation,
    Payment,
}

impl CampaignStage {
    /// All stages in rank order.
    pub const ALL: [CampaignStage; 6] = [
        CampaignStage::Proposal,
        CampaignStage::Production,
        CampaignStage::Prepayment,
        CampaignStage::Delivery,
        CampaignStage::Validation,
        CampaignStage::Payment,
    ];

    pub fn rank(&self) -> u8 {
        match self {
            Self::Proposal => 0,
            Self::Production => 1,
            Self::Prepayment => 2,
            Self::Delivery => 3,
            Self::Validation => 4,
            Self::Payment => 5,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Proposal => "proposal",
            Self::Production => "production",
            Self::Prepayment => "prepayment",
            Self::Delivery => "delivery",
            Self::Validation => "validation",
            Self::Payment => "payment",
        }
    }
}

impl PartialOrd for CampaignStage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CampaignStage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for CampaignStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CampaignStage {
    type Err = CampaignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|stage| stage.id() == wanted)
            .ok_or_else(|| CampaignError::UnknownStage(s.trim().to_string()))
    }
}

/// A campaign as delivered by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub status: CampaignStage,
}

impl Campaign {
    pub fn progress(&self) -> Vec<StepProgress> {
        progress(self.status)
    }
}

// =============================================================================
// Step Status
// =============================================================================

/// How a tracker step is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

impl StepStatus {
    /// CSS class; completed is green, current is blue, upcoming is gray.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Completed => "step-completed",
            Self::Current => "step-current",
            Self::Upcoming => "step-upcoming",
        }
    }

    /// Class of the connector drawn after a step with this status.
    pub fn connector_class(&self) -> &'static str {
        match self {
            Self::Completed => "step-connector completed",
            Self::Current | Self::Upcoming => "step-connector",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Self::Completed => "✓",
            Self::Current => "●",
            Self::Upcoming => "○",
        }
    }
}

/// Status of `step` when the campaign sits at `current`.
pub fn status_for(step: CampaignStage, current: CampaignStage) -> StepStatus {
    match step.rank().cmp(&current.rank()) {
        Ordering::Less => StepStatus::Completed,
        Ordering::Equal => StepStatus::Current,
        Ordering::Greater => StepStatus::Upcoming,
    }
}

// =============================================================================
// Step Descriptors
// =============================================================================

/// Fixed text for one tracker step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepDescriptor {
    pub stage: CampaignStage,
    pub label: &'static str,
    pub description: &'static str,
}

/// The six tracker steps in rank order.
pub const CAMPAIGN_STEPS: [StepDescriptor; 6] = [
    StepDescriptor {
        stage: CampaignStage::Proposal,
        label: "Proposta",
        description: "A marca envia a proposta e o influenciador aceita",
    },
    StepDescriptor {
        stage: CampaignStage::Production,
        label: "Produção",
        description: "O influenciador produz o conteúdo combinado",
    },
    StepDescriptor {
        stage: CampaignStage::Prepayment,
        label: "Pré-pagamento",
        description: "A marca deposita o valor da campanha",
    },
    StepDescriptor {
        stage: CampaignStage::Delivery,
        label: "Entrega",
        description: "O conteúdo é publicado nas redes",
    },
    StepDescriptor {
        stage: CampaignStage::Validation,
        label: "Validação",
        description: "A marca confere as publicações",
    },
    StepDescriptor {
        stage: CampaignStage::Payment,
        label: "Pagamento",
        description: "O valor é liberado para o influenciador",
    },
];

/// One rendered tracker step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    pub step: StepDescriptor,
    pub status: StepStatus,
    /// Whether a connector follows this step.
    pub has_connector: bool,
}

/// Derive every step's status from the campaign's current stage.
pub fn progress(current: CampaignStage) -> Vec<StepProgress> {
    let last = CAMPAIGN_STEPS.len() - 1;
    CAMPAIGN_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| StepProgress {
            step: *step,
            status: status_for(step.stage, current),
            has_connector: i < last,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_progress() {
        let steps = progress(CampaignStage::Delivery);
        let statuses: Vec<_> = steps.iter().map(|s| (s.step.stage, s.status)).collect();
        assert_eq!(
            statuses,
            vec![
                (CampaignStage::Proposal, StepStatus::Completed),
                (CampaignStage::Production, StepStatus::Completed),
                (CampaignStage::Prepayment, StepStatus::Completed),
                (CampaignStage::Delivery, StepStatus::Current),
                (CampaignStage::Validation, StepStatus::Upcoming),
                (CampaignStage::Payment, StepStatus::Upcoming),
            ]
        );
    }

    #[test]
    fn test_exactly_one_current_for_every_stage() {
        for current in CampaignStage::ALL {
            let steps = progress(current);
            let currents: Vec<_> = steps
                .iter()
                .filter(|s| s.status == StepStatus::Current)
                .collect();
            assert_eq!(currents.len(), 1);
            assert_eq!(currents[0].step.stage, current);

            for s in &steps {
                let expected = match s.step.stage.cmp(&current) {
                    Ordering::Less => StepStatus::Completed,
                    Ordering::Equal => StepStatus::Current,
                    Ordering::Greater => StepStatus::Upcoming,
                };
                assert_eq!(s.status, expected);
            }
        }
    }

    #[test]
    fn test_steps_are_in_rank_order() {
        for (i, step) in CAMPAIGN_STEPS.iter().enumerate() {
            assert_eq!(step.stage.rank() as usize, i);
        }
        let steps = progress(CampaignStage::Proposal);
        assert!(steps[..5].iter().all(|s| s.has_connector));
        assert!(!steps[5].has_connector);
    }

    #[test]
    fn test_stage_parsing() {
        assert_eq!("Delivery".parse::<CampaignStage>(), Ok(CampaignStage::Delivery));
        assert_eq!(
            "shipping".parse::<CampaignStage>(),
            Err(CampaignError::UnknownStage("shipping".into()))
        );
    }

    #[test]
    fn test_campaign_deserialization() {
        let json = r#"{"id":"c-1","title":"Verão","brand":"Acme","status":"prepayment"}"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.status, CampaignStage::Prepayment);
        assert_eq!(campaign.progress()[2].status, StepStatus::Current);
    }

    #[test]
    fn test_connector_follows_left_step() {
        assert_eq!(StepStatus::Completed.connector_class(), "step-connector completed");
        assert_eq!(StepStatus::Current.connector_class(), "step-connector");
    }
}
