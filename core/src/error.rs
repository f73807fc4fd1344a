//! Error types for the CollabHub logic layer.
//!
//! One enum per concern, plus a top-level [`CollabError`]:
//!
//! - [`FollowerCountError`] - Follower count input parsing
//! - [`CampaignError`] - Campaign stage parsing
//! - [`WizardError`] - Blocked connection wizard transitions
//! - [`WaitlistError`] - Waitlist record validation
//!
//! Conversion into [`CollabError`] is automatic via `From`, so `?` works
//! across module boundaries (the CLI relies on this).
//!
//! Messages are pt-BR: the web app shows them to users as-is.

use thiserror::Error;

use crate::waitlist::WaitlistField;
use crate::wizard::WizardStep;

// =============================================================================
// Follower Count Errors
// =============================================================================

/// Errors while reading a follower count typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FollowerCountError {
    /// A minus sign was typed.
    #[error("O número de seguidores não pode ser negativo: {0}")]
    Negative(String),

    /// Something other than digits and separators.
    #[error("Número de seguidores inválido: {0} (use só números, ex.: 10.000)")]
    Invalid(String),

    /// Does not fit in a u64.
    #[error("Número de seguidores grande demais: {0}")]
    TooLarge(String),
}

// =============================================================================
// Campaign Errors
// =============================================================================

/// Errors while reading campaign data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CampaignError {
    /// Stage identifier not in the ranked list.
    #[error("Etapa de campanha desconhecida: {0}")]
    UnknownStage(String),
}

// =============================================================================
// Wizard Errors
// =============================================================================

/// A wizard transition that the transition table refuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// Back from the first step.
    #[error("Não há etapa antes de \"{}\"", .0.title())]
    NoPreviousStep(WizardStep),

    /// Next from the last step.
    #[error("Não há etapa depois de \"{}\"", .0.title())]
    NoNextStep(WizardStep),

    /// Next from platform select before choosing a platform.
    #[error("Escolha uma rede social para continuar")]
    PlatformRequired,

    /// Platform picked from a screen other than platform select.
    #[error("Volte à primeira etapa para trocar de rede social")]
    PlatformLocked,

    /// Next from the username step with a blank username.
    #[error("Informe seu nome de usuário para continuar")]
    UsernameRequired,

    /// Next from the validation step with a blank post URL.
    #[error("Cole o link da sua publicação para continuar")]
    PostUrlRequired,
}

// =============================================================================
// Waitlist Errors
// =============================================================================

/// Errors from the waitlist form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitlistError {
    /// Required field left blank.
    #[error("Preencha o campo obrigatório: {}", .0.label())]
    MissingField(WaitlistField),

    /// Email does not look like an address.
    #[error("E-mail inválido: {0}")]
    InvalidEmail(String),
}

// =============================================================================
// Top-level Error
// =============================================================================

/// Any error raised by the logic layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollabError {
    /// Follower count error.
    #[error("Seguidores: {0}")]
    Followers(#[from] FollowerCountError),

    /// Campaign error.
    #[error("Campanha: {0}")]
    Campaign(#[from] CampaignError),

    /// Wizard error.
    #[error("Conexão de conta: {0}")]
    Wizard(#[from] WizardError),

    /// Waitlist error.
    #[error("Lista de espera: {0}")]
    Waitlist(#[from] WaitlistError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for follower count parsing.
pub type FollowerCountResult<T> = Result<T, FollowerCountError>;

/// Result type for campaign operations.
pub type CampaignResult<T> = Result<T, CampaignError>;

/// Result type for wizard transitions.
pub type WizardResult<T> = Result<T, WizardError>;

/// Result type for waitlist operations.
pub type WaitlistResult<T> = Result<T, WaitlistError>;

/// Result type for anything in the crate.
pub type CollabResult<T> = Result<T, CollabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let err: CollabError = WizardError::UsernameRequired.into();
        assert!(err.to_string().contains("nome de usuário"));

        let err: CollabError = CampaignError::UnknownStage("shipping".into()).into();
        assert!(err.to_string().contains("shipping"));
    }

    #[test]
    fn test_wizard_error_names_step() {
        let msg = WizardError::NoPreviousStep(WizardStep::PlatformSelect).to_string();
        assert!(msg.contains(WizardStep::PlatformSelect.title()));
    }

    #[test]
    fn test_user_facing_messages_are_portuguese() {
        assert_eq!(
            WizardError::UsernameRequired.to_string(),
            "Informe seu nome de usuário para continuar"
        );
        assert_eq!(
            WaitlistError::MissingField(WaitlistField::Email).to_string(),
            "Preencha o campo obrigatório: e-mail"
        );
        assert!(FollowerCountError::Invalid("1.5".into())
            .to_string()
            .starts_with("Número de seguidores inválido"));
    }
}
