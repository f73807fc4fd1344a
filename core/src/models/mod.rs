//! Domain models shared by every screen.
//!
//! - [`SocialNetwork`] - Networks a creator can be on
//! - [`AccountKind`] - Whether the account belongs to an influencer or a brand
//! - [`FollowerCount`] - Follower count with an explicit "not entered" state

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FollowerCountError, FollowerCountResult};

// =============================================================================
// Social Networks
// =============================================================================

/// A social network known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Instagram,
    TikTok,
    YouTube,
    Twitter,
    Kwai,
    Facebook,
    LinkedIn,
    Twitch,
}

impl SocialNetwork {
    /// Every network, in display order.
    pub const ALL: [SocialNetwork; 8] = [
        SocialNetwork::Instagram,
        SocialNetwork::TikTok,
        SocialNetwork::YouTube,
        SocialNetwork::Twitter,
        SocialNetwork::Kwai,
        SocialNetwork::Facebook,
        SocialNetwork::LinkedIn,
        SocialNetwork::Twitch,
    ];

    /// Networks the connection wizard can link.
    pub const CONNECTABLE: [SocialNetwork; 3] = [
        SocialNetwork::Instagram,
        SocialNetwork::TikTok,
        SocialNetwork::YouTube,
    ];

    /// Auxiliary networks offered by the waitlist form (Instagram has its own field).
    pub fn auxiliary() -> impl Iterator<Item = SocialNetwork> {
        Self::ALL.into_iter().filter(|n| *n != SocialNetwork::Instagram)
    }

    /// Stable identifier used in payloads and comma-joined lists.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::TikTok => "tiktok",
            Self::YouTube => "youtube",
            Self::Twitter => "twitter",
            Self::Kwai => "kwai",
            Self::Facebook => "facebook",
            Self::LinkedIn => "linkedin",
            Self::Twitch => "twitch",
        }
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::TikTok => "TikTok",
            Self::YouTube => "YouTube",
            Self::Twitter => "X (Twitter)",
            Self::Kwai => "Kwai",
            Self::Facebook => "Facebook",
            Self::LinkedIn => "LinkedIn",
            Self::Twitch => "Twitch",
        }
    }

    /// Parse an identifier, case-insensitively. Accepts "x" for Twitter.
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_lowercase().as_str() {
            "instagram" => Some(Self::Instagram),
            "tiktok" => Some(Self::TikTok),
            "youtube" => Some(Self::YouTube),
            "twitter" | "x" => Some(Self::Twitter),
            "kwai" => Some(Self::Kwai),
            "facebook" => Some(Self::Facebook),
            "linkedin" => Some(Self::LinkedIn),
            "twitch" => Some(Self::Twitch),
            _ => None,
        }
    }

    /// Where the user finds the profile handle, used in wizard hints.
    pub fn profile_url(&self, username: &str) -> String {
        let handle = username.trim().trim_start_matches('@');
        match self {
            Self::Instagram => format!("https://instagram.com/{}", handle),
            Self::TikTok => format!("https://tiktok.com/@{}", handle),
            Self::YouTube => format!("https://youtube.com/@{}", handle),
            Self::Twitter => format!("https://x.com/{}", handle),
            Self::Kwai => format!("https://kwai.com/@{}", handle),
            Self::Facebook => format!("https://facebook.com/{}", handle),
            Self::LinkedIn => format!("https://linkedin.com/in/{}", handle),
            Self::Twitch => format!("https://twitch.tv/{}", handle),
        }
    }
}

impl fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Join network identifiers the way the waitlist record stores them.
pub fn join_networks(networks: &[SocialNetwork]) -> String {
    networks
        .iter()
        .map(|n| n.id())
        .collect::<Vec<_>>()
        .join(",")
}

/// Split a comma-joined list back into networks, skipping unknown entries.
pub fn split_networks(joined: &str) -> Vec<SocialNetwork> {
    let mut networks = Vec::new();
    for network in joined.split(',').filter_map(SocialNetwork::from_id) {
        if !networks.contains(&network) {
            networks.push(network);
        }
    }
    networks
}

// =============================================================================
// Account Kind
// =============================================================================

/// Who is linking the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    #[default]
    Influencer,
    Brand,
}

impl AccountKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Influencer => "Sou influenciador",
            Self::Brand => "Sou marca",
        }
    }
}

// =============================================================================
// Follower Count
// =============================================================================

/// Number of followers, or nothing entered yet.
///
/// `Unset` is not zero: the estimator shows a placeholder for it instead of
/// formatting an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub enum FollowerCount {
    #[default]
    Unset,
    Count(u64),
}

impl FollowerCount {
    pub fn get(&self) -> Option<u64> {
        match self {
            Self::Unset => None,
            Self::Count(n) => Some(*n),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Read the text of a numeric input.
    ///
    /// Blank text is `Unset`. Dots, commas, spaces and underscores are taken
    /// as thousands separators ("1.000" and "1,000" are both a thousand), but
    /// only in well-formed groups of three: "1.5" and "10.00" are rejected.
    pub fn parse_input(raw: &str) -> FollowerCountResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::Unset);
        }
        if trimmed.starts_with('-') {
            return Err(FollowerCountError::Negative(trimmed.to_string()));
        }

        let invalid = || FollowerCountError::Invalid(trimmed.to_string());

        let digits = match trimmed.chars().find(|c| is_group_separator(*c)) {
            None => trimmed.to_string(),
            Some(sep) => {
                // One separator kind only, then "1-3 digits" followed by groups of exactly 3
                let mut groups = trimmed.split(sep);
                let head = groups.next().unwrap_or_default();
                if !(1..=3).contains(&head.len()) {
                    return Err(invalid());
                }
                let mut digits = head.to_string();
                for group in groups {
                    if group.len() != 3 {
                        return Err(invalid());
                    }
                    digits.push_str(group);
                }
                digits
            }
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        digits
            .parse::<u64>()
            .map(Self::Count)
            .map_err(|_| FollowerCountError::TooLarge(trimmed.to_string()))
    }
}

fn is_group_separator(c: char) -> bool {
    matches!(c, '.' | ',' | ' ' | '_' | '\u{a0}')
}

impl From<Option<u64>> for FollowerCount {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Unset, Self::Count)
    }
}

impl From<FollowerCount> for Option<u64> {
    fn from(value: FollowerCount) -> Self {
        value.get()
    }
}

impl FromStr for FollowerCount {
    type Err = FollowerCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_input(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_follower_input() {
        assert_eq!(FollowerCount::parse_input(""), Ok(FollowerCount::Unset));
        assert_eq!(FollowerCount::parse_input("   "), Ok(FollowerCount::Unset));
        assert_eq!(FollowerCount::parse_input("0"), Ok(FollowerCount::Count(0)));
        assert_eq!(FollowerCount::parse_input("1.000"), Ok(FollowerCount::Count(1000)));
        assert_eq!(FollowerCount::parse_input("12,500"), Ok(FollowerCount::Count(12_500)));
        assert_eq!(FollowerCount::parse_input(" 2 000 000 "), Ok(FollowerCount::Count(2_000_000)));
    }

    #[test]
    fn test_parse_follower_input_rejects_garbage() {
        assert!(matches!(
            FollowerCount::parse_input("-5"),
            Err(FollowerCountError::Negative(_))
        ));
        assert!(matches!(
            FollowerCount::parse_input("10k"),
            Err(FollowerCountError::Invalid(_))
        ));
        assert!(matches!(
            FollowerCount::parse_input("..."),
            Err(FollowerCountError::Invalid(_))
        ));
        assert!(matches!(
            FollowerCount::parse_input("99999999999999999999999"),
            Err(FollowerCountError::TooLarge(_))
        ));
    }

    #[test]
    fn test_parse_follower_input_rejects_misplaced_separators() {
        for raw in ["1.5", "10.00", "12,5", "1 2 3", "1.000,000", "1234.567", ".100", "1.000."] {
            assert!(
                matches!(FollowerCount::parse_input(raw), Err(FollowerCountError::Invalid(_))),
                "{raw:?} should be rejected"
            );
        }
        assert_eq!(FollowerCount::parse_input("1.000"), Ok(FollowerCount::Count(1_000)));
        assert_eq!(FollowerCount::parse_input("2 000 000"), Ok(FollowerCount::Count(2_000_000)));
        assert_eq!(FollowerCount::parse_input("1_234_567"), Ok(FollowerCount::Count(1_234_567)));
    }

    #[test]
    fn test_follower_count_serializes_as_nullable_number() {
        assert_eq!(serde_json::to_string(&FollowerCount::Count(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&FollowerCount::Unset).unwrap(), "null");
        let back: FollowerCount = serde_json::from_str("null").unwrap();
        assert!(back.is_unset());
    }

    #[test]
    fn test_network_lists_round_trip_through_comma_string() {
        let joined = join_networks(&[SocialNetwork::TikTok, SocialNetwork::YouTube]);
        assert_eq!(joined, "tiktok,youtube");
        assert_eq!(
            split_networks("tiktok, X ,unknown,tiktok"),
            vec![SocialNetwork::TikTok, SocialNetwork::Twitter]
        );
        assert!(split_networks("").is_empty());
    }

    #[test]
    fn test_auxiliary_networks_exclude_instagram() {
        let aux: Vec<_> = SocialNetwork::auxiliary().collect();
        assert_eq!(aux.len(), SocialNetwork::ALL.len() - 1);
        assert!(!aux.contains(&SocialNetwork::Instagram));
    }

    #[test]
    fn test_profile_url_strips_at_sign() {
        assert_eq!(
            SocialNetwork::Instagram.profile_url("@maria"),
            "https://instagram.com/maria"
        );
        assert_eq!(
            SocialNetwork::TikTok.profile_url("maria"),
            "https://tiktok.com/@maria"
        );
    }
}
