//! Waitlist signup record.
//!
//! [`WaitlistFormData`] mirrors the form fields exactly as typed; the parent
//! owns it and the form only edits it. [`WaitlistPayload`] is what actually
//! goes to the submission endpoint: trimmed, `@` stripped, networks split.
//!
//! # Example
//!
//! ```rust
//! use collabhub::{FollowerCount, SocialNetwork, WaitlistFormData};
//!
//! let mut form = WaitlistFormData {
//!     name: " Maria Souza ".into(),
//!     email: "maria@example.com".into(),
//!     instagram: "@mariasouza".into(),
//!     followers: FollowerCount::Count(15_000),
//!     ..Default::default()
//! };
//! form.set_networks(&[SocialNetwork::TikTok]);
//!
//! let payload = form.to_payload().unwrap();
//! assert_eq!(payload.instagram, "mariasouza");
//! assert_eq!(payload.other_networks, vec!["tiktok".to_string()]);
//! ```

mod gate;

pub use gate::{SubmissionGate, SubmissionTicket};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FollowerCountResult, WaitlistError, WaitlistResult};
use crate::models::{join_networks, split_networks, FollowerCount, SocialNetwork};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

/// Form fields, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistFormData {
    pub name: String,
    pub email: String,
    /// Instagram handle, with or without `@`.
    pub instagram: String,
    pub followers: FollowerCount,
    /// Comma-joined network identifiers, e.g. `"tiktok,youtube"`.
    pub other_networks: String,
}

/// Identifies a field in change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitlistField {
    Name,
    Email,
    Instagram,
    Followers,
}

impl WaitlistField {
    /// Name shown in form errors.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "nome",
            Self::Email => "e-mail",
            Self::Instagram => "Instagram",
            Self::Followers => "seguidores",
        }
    }
}

impl WaitlistFormData {
    /// Apply a text change coming from an input element.
    ///
    /// A follower count that does not parse leaves the previous value and
    /// returns the parse error, so the caller can keep the typed text and
    /// show it as a hint.
    pub fn set_field(&mut self, field: WaitlistField, value: String) -> FollowerCountResult<()> {
        match field {
            WaitlistField::Name => self.name = value,
            WaitlistField::Email => self.email = value,
            WaitlistField::Instagram => self.instagram = value,
            WaitlistField::Followers => self.followers = FollowerCount::parse_input(&value)?,
        }
        Ok(())
    }

    /// Replace the auxiliary network selection.
    pub fn set_networks(&mut self, networks: &[SocialNetwork]) {
        self.other_networks = join_networks(networks);
    }

    pub fn networks(&self) -> Vec<SocialNetwork> {
        split_networks(&self.other_networks)
    }

    /// Add or remove one network, as a chip click does.
    pub fn toggle_network(&mut self, network: SocialNetwork) {
        let mut networks = self.networks();
        if let Some(pos) = networks.iter().position(|n| *n == network) {
            networks.remove(pos);
        } else {
            networks.push(network);
        }
        self.set_networks(&networks);
    }

    /// Same checks the `required` markers enforce in the browser.
    pub fn validate(&self) -> WaitlistResult<()> {
        if self.name.trim().is_empty() {
            return Err(WaitlistError::MissingField(WaitlistField::Name));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(WaitlistError::MissingField(WaitlistField::Email));
        }
        if !EMAIL_RE.is_match(email) {
            return Err(WaitlistError::InvalidEmail(email.to_string()));
        }
        if self.instagram.trim().trim_start_matches('@').is_empty() {
            return Err(WaitlistError::MissingField(WaitlistField::Instagram));
        }
        Ok(())
    }

    /// Validate and compose the record for the submission handler.
    pub fn to_payload(&self) -> WaitlistResult<WaitlistPayload> {
        self.validate()?;
        Ok(WaitlistPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            instagram: self.instagram.trim().trim_start_matches('@').to_string(),
            followers: self.followers.get(),
            other_networks: self.networks().iter().map(|n| n.id().to_string()).collect(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Record sent to the waitlist endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistPayload {
    pub name: String,
    pub email: String,
    pub instagram: String,
    pub followers: Option<u64>,
    pub other_networks: Vec<String>,
}
