//! # CollabHub - logic behind the influencer/brand web components
//!
//! Everything here is pure and synchronous except the waitlist
//! [`SubmissionGate`], which wraps whatever future the caller uses to
//! reach the submission endpoint. The Leptos frontend renders these types;
//! the `collabhub` binary prints them.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  estimator   │   │   campaign   │   │    wizard    │   │   waitlist   │
//! │ followers→R$ │   │ stage→status │   │ step table   │   │ form + gate  │
//! └──────┬───────┘   └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!        └──────────────────┴────── models / config / error ──────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error enums and result aliases
//! - [`config`] - Rates and display constants
//! - [`models`] - Social networks, account kind, follower count
//! - [`estimator`] - Post/story/reels earnings estimate
//! - [`campaign`] - Campaign stages and progress tracker
//! - [`wizard`] - Account connection wizard transitions
//! - [`waitlist`] - Waitlist record, payload and submission gate

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Components
pub mod campaign;
pub mod estimator;
pub mod waitlist;
pub mod wizard;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{
    CampaignError, CollabError, CollabResult, FollowerCountError, WaitlistError, WizardError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{join_networks, split_networks, AccountKind, FollowerCount, SocialNetwork};

// =============================================================================
// Re-exports - Estimator
// =============================================================================

pub use estimator::{
    estimate, estimate_display, estimate_from_input, format_brl, EstimateDisplay, Estimation,
};

// =============================================================================
// Re-exports - Campaign
// =============================================================================

pub use campaign::{
    progress, status_for, Campaign, CampaignStage, StepDescriptor, StepProgress, StepStatus,
    CAMPAIGN_STEPS,
};

// =============================================================================
// Re-exports - Wizard
// =============================================================================

pub use wizard::{
    transition, ConnectionDraft, VerificationCode, WizardAction, WizardState, WizardStep,
};

// =============================================================================
// Re-exports - Waitlist
// =============================================================================

pub use waitlist::{
    SubmissionGate, SubmissionTicket, WaitlistField, WaitlistFormData, WaitlistPayload,
};
