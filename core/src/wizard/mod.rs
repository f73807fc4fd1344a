//! Social account connection wizard.
//!
//! Five screens walked strictly in order. The whole flow is one transition
//! table over `(step, action)`; screens only ask for a transition and the
//! table decides whether it happens.
//!
//! ```text
//!  PlatformSelect ⇄ Username ⇄ Instructions ⇄ Validation ⇄ Success
//!        │              │                          │
//!   needs platform  needs username            needs post URL
//! ```
//!
//! No skips, no cycles. Back is refused on the first step and Next on the
//! last one. A refused transition leaves [`WizardState`] untouched.

mod code;

pub use code::VerificationCode;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{WizardError, WizardResult};
use crate::models::{AccountKind, SocialNetwork};

// =============================================================================
// Steps and Actions
// =============================================================================

/// Wizard screens in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    PlatformSelect,
    Username,
    Instructions,
    Validation,
    Success,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::PlatformSelect,
        WizardStep::Username,
        WizardStep::Instructions,
        WizardStep::Validation,
        WizardStep::Success,
    ];

    /// 1-based position, for the "step 2 of 5" indicator.
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::PlatformSelect => "Escolha a rede social",
            Self::Username => "Informe seu usuário",
            Self::Instructions => "Publique o código de verificação",
            Self::Validation => "Valide sua publicação",
            Self::Success => "Conta conectada!",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PlatformSelect => "platform-select",
            Self::Username => "username",
            Self::Instructions => "instructions",
            Self::Validation => "validation",
            Self::Success => "success",
        };
        f.write_str(name)
    }
}

/// What a screen asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardAction {
    Next,
    Back,
}

// =============================================================================
// Draft
// =============================================================================

/// Everything the wizard collects on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDraft {
    pub kind: AccountKind,
    pub platform: Option<SocialNetwork>,
    pub username: String,
    pub verification_code: Option<VerificationCode>,
    pub post_url: String,
}

impl ConnectionDraft {
    /// Username without surrounding blanks or a leading `@`.
    pub fn handle(&self) -> &str {
        self.username.trim().trim_start_matches('@')
    }

    pub fn has_username(&self) -> bool {
        !self.handle().trim().is_empty()
    }

    pub fn has_post_url(&self) -> bool {
        !self.post_url.trim().is_empty()
    }
}

// =============================================================================
// Transition Table
// =============================================================================

/// Where `action` leads from `step`, given what was collected so far.
pub fn transition(
    step: WizardStep,
    action: WizardAction,
    draft: &ConnectionDraft,
) -> WizardResult<WizardStep> {
    use WizardAction::{Back, Next};
    use WizardStep::*;

    match (step, action) {
        (PlatformSelect, Back) => Err(WizardError::NoPreviousStep(step)),
        (PlatformSelect, Next) if draft.platform.is_none() => Err(WizardError::PlatformRequired),
        (PlatformSelect, Next) => Ok(Username),

        (Username, Back) => Ok(PlatformSelect),
        (Username, Next) if !draft.has_username() => Err(WizardError::UsernameRequired),
        (Username, Next) => Ok(Instructions),

        (Instructions, Back) => Ok(Username),
        (Instructions, Next) => Ok(Validation),

        (Validation, Back) => Ok(Instructions),
        (Validation, Next) if !draft.has_post_url() => Err(WizardError::PostUrlRequired),
        (Validation, Next) => Ok(Success),

        (Success, Back) => Ok(Validation),
        (Success, Next) => Err(WizardError::NoNextStep(step)),
    }
}

// =============================================================================
// State
// =============================================================================

/// Wizard position plus collected data, owned by the parent flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    step: WizardStep,
    pub draft: ConnectionDraft,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::PlatformSelect,
            draft: ConnectionDraft::default(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Apply `action`; on refusal the state is unchanged.
    pub fn apply(&mut self, action: WizardAction) -> WizardResult<WizardStep> {
        let from = self.step;
        match transition(from, action, &self.draft) {
            Ok(to) => {
                log::debug!("wizard: {} --{:?}--> {}", from, action, to);
                self.step = to;
                Ok(to)
            }
            Err(e) => {
                log::debug!("wizard: {} --{:?}--> refused: {}", from, action, e);
                Err(e)
            }
        }
    }

    pub fn next(&mut self) -> WizardResult<WizardStep> {
        self.apply(WizardAction::Next)
    }

    pub fn back(&mut self) -> WizardResult<WizardStep> {
        self.apply(WizardAction::Back)
    }

    pub fn can_advance(&self) -> bool {
        transition(self.step, WizardAction::Next, &self.draft).is_ok()
    }

    pub fn can_go_back(&self) -> bool {
        transition(self.step, WizardAction::Back, &self.draft).is_ok()
    }

    pub fn select_kind(&mut self, kind: AccountKind) {
        self.draft.kind = kind;
    }

    /// Record the platform and move on to the username screen.
    pub fn select_platform(&mut self, platform: SocialNetwork) -> WizardResult<WizardStep> {
        if self.step != WizardStep::PlatformSelect {
            return Err(WizardError::PlatformLocked);
        }
        self.draft.platform = Some(platform);
        self.next()
    }

    /// Verification code for the instructions screen, generated on first use.
    pub fn ensure_code<R: rand::Rng>(&mut self, rng: &mut R) -> &VerificationCode {
        self.draft
            .verification_code
            .get_or_insert_with(|| VerificationCode::generate(rng))
    }

    /// Start over, e.g. to connect another account.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn draft(platform: Option<SocialNetwork>, username: &str, post_url: &str) -> ConnectionDraft {
        ConnectionDraft {
            platform,
            username: username.to_string(),
            post_url: post_url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_back_unavailable_on_first_step() {
        let state = WizardState::new();
        assert!(!state.can_go_back());
        assert_eq!(
            transition(WizardStep::PlatformSelect, WizardAction::Back, &state.draft),
            Err(WizardError::NoPreviousStep(WizardStep::PlatformSelect))
        );
    }

    #[test]
    fn test_username_required() {
        for blank in ["", "   ", "\t", "@", " @ "] {
            let d = draft(Some(SocialNetwork::Instagram), blank, "");
            assert_eq!(
                transition(WizardStep::Username, WizardAction::Next, &d),
                Err(WizardError::UsernameRequired),
                "username {:?}",
                blank
            );
        }
        let d = draft(Some(SocialNetwork::Instagram), "maria", "");
        assert_eq!(
            transition(WizardStep::Username, WizardAction::Next, &d),
            Ok(WizardStep::Instructions)
        );
    }

    #[test]
    fn test_post_url_required() {
        let d = draft(Some(SocialNetwork::Instagram), "maria", "  ");
        assert_eq!(
            transition(WizardStep::Validation, WizardAction::Next, &d),
            Err(WizardError::PostUrlRequired)
        );
        let d = draft(Some(SocialNetwork::Instagram), "maria", "https://instagram.com/p/abc");
        assert_eq!(
            transition(WizardStep::Validation, WizardAction::Next, &d),
            Ok(WizardStep::Success)
        );
    }

    #[test]
    fn test_no_forward_from_success() {
        let d = draft(Some(SocialNetwork::Instagram), "maria", "https://x");
        assert_eq!(
            transition(WizardStep::Success, WizardAction::Next, &d),
            Err(WizardError::NoNextStep(WizardStep::Success))
        );
    }

    #[test]
    fn test_transitions_are_linear() {
        let d = draft(Some(SocialNetwork::YouTube), "maria", "https://youtu.be/x");
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            if let Ok(next) = transition(*step, WizardAction::Next, &d) {
                assert_eq!(next, WizardStep::ALL[i + 1]);
            }
            if let Ok(prev) = transition(*step, WizardAction::Back, &d) {
                assert_eq!(prev, WizardStep::ALL[i - 1]);
            }
        }
    }

    #[test]
    fn test_full_walk_and_refusal_keeps_state() {
        let mut state = WizardState::new();
        assert_eq!(state.next(), Err(WizardError::PlatformRequired));
        assert_eq!(state.step(), WizardStep::PlatformSelect);

        state.select_kind(AccountKind::Brand);
        assert_eq!(state.select_platform(SocialNetwork::Instagram), Ok(WizardStep::Username));

        assert_eq!(state.next(), Err(WizardError::UsernameRequired));
        assert_eq!(state.step(), WizardStep::Username);

        state.draft.username = "@acme".into();
        assert!(state.can_advance());
        assert_eq!(state.next(), Ok(WizardStep::Instructions));

        let code = state.ensure_code(&mut StdRng::seed_from_u64(3)).clone();
        assert_eq!(state.ensure_code(&mut StdRng::seed_from_u64(99)), &code);

        assert_eq!(state.next(), Ok(WizardStep::Validation));
        assert!(!state.can_advance());
        state.draft.post_url = "https://instagram.com/p/xyz".into();
        assert_eq!(state.next(), Ok(WizardStep::Success));
        assert!(!state.can_advance());
        assert!(state.can_go_back());

        assert_eq!(state.draft.handle(), "acme");
        assert_eq!(state.draft.kind, AccountKind::Brand);

        state.reset();
        assert_eq!(state, WizardState::new());
    }

    #[test]
    fn test_select_platform_only_from_first_step() {
        let mut state = WizardState::new();
        state.select_platform(SocialNetwork::TikTok).unwrap();
        assert_eq!(
            state.select_platform(SocialNetwork::YouTube),
            Err(WizardError::PlatformLocked)
        );
        assert_eq!(state.draft.platform, Some(SocialNetwork::TikTok));
    }

    #[test]
    fn test_back_keeps_collected_data() {
        let mut state = WizardState::new();
        state.select_platform(SocialNetwork::Instagram).unwrap();
        state.draft.username = "maria".into();
        state.next().unwrap();
        state.back().unwrap();
        state.back().unwrap();
        assert_eq!(state.step(), WizardStep::PlatformSelect);
        assert_eq!(state.draft.username, "maria");
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(WizardStep::PlatformSelect.number(), 1);
        assert_eq!(WizardStep::Success.number(), 5);
    }
}
