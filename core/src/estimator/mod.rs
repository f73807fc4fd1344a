//! Social media earnings estimator.
//!
//! Maps a follower count to what a creator could charge for a feed post,
//! a story and a reels video:
//!
//! ```text
//! post  = followers * 0.035
//! story = post * 0.7
//! reels = post * 1.5 + post
//! ```
//!
//! The reels line is kept exactly as product wrote it. It is described as a
//! "+150%" bonus but the bonus is added to the post value, which lands at
//! 2.5x a post rather than 1.5x. Do not simplify it without confirmation.
//!
//! # Example
//!
//! ```rust
//! use collabhub::{estimate, FollowerCount};
//!
//! let result = estimate(FollowerCount::Count(1000)).unwrap();
//! assert_eq!(result.display().post, "R$ 35,00");
//! assert!(estimate(FollowerCount::Unset).is_none());
//! ```

mod currency;

pub use currency::format_brl;

use serde::Serialize;

use crate::config::{AMOUNT_PLACEHOLDER, POST_RATE_PER_FOLLOWER, REELS_BONUS_FACTOR, STORY_FACTOR};
use crate::error::FollowerCountResult;
use crate::models::FollowerCount;

/// Estimated amounts in BRL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimation {
    pub post: f64,
    pub story: f64,
    pub reels: f64,
}

impl Estimation {
    /// Apply the rate table to a concrete follower count.
    pub fn from_followers(followers: u64) -> Self {
        let post = post_value(followers);
        Self {
            post,
            story: story_value(post),
            reels: reels_value(post),
        }
    }

    /// Currency-formatted amounts.
    pub fn display(&self) -> EstimateDisplay {
        EstimateDisplay {
            post: format_brl(self.post),
            story: format_brl(self.story),
            reels: format_brl(self.reels),
        }
    }
}

/// The three amounts as they appear on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimateDisplay {
    pub post: String,
    pub story: String,
    pub reels: String,
}

impl EstimateDisplay {
    /// Neutral state shown before a follower count is entered.
    pub fn placeholder() -> Self {
        Self {
            post: AMOUNT_PLACEHOLDER.to_string(),
            story: AMOUNT_PLACEHOLDER.to_string(),
            reels: AMOUNT_PLACEHOLDER.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}

pub fn post_value(followers: u64) -> f64 {
    followers as f64 * POST_RATE_PER_FOLLOWER
}

pub fn story_value(post: f64) -> f64 {
    post * STORY_FACTOR
}

pub fn reels_value(post: f64) -> f64 {
    let bonus = post * REELS_BONUS_FACTOR;
    post + bonus
}

/// Estimate for a follower count; `None` when nothing was entered.
pub fn estimate(followers: FollowerCount) -> Option<Estimation> {
    followers.get().map(Estimation::from_followers)
}

/// Display values for a follower count, falling back to the placeholder.
pub fn estimate_display(followers: FollowerCount) -> EstimateDisplay {
    estimate(followers)
        .map(|e| e.display())
        .unwrap_or_else(EstimateDisplay::placeholder)
}

/// Parse raw input text and estimate in one go.
pub fn estimate_from_input(raw: &str) -> FollowerCountResult<Option<Estimation>> {
    FollowerCount::parse_input(raw).map(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_thousand_followers() {
        let display = estimate_display(FollowerCount::Count(1000));
        assert_eq!(display.post, "R$ 35,00");
        assert_eq!(display.story, "R$ 24,50");
        assert_eq!(display.reels, "R$ 87,50");
    }

    #[test]
    fn test_unset_renders_placeholder() {
        let display = estimate_display(FollowerCount::Unset);
        assert!(display.is_placeholder());
        assert_ne!(display.post, "R$ 0,00");
        assert!(!display.post.contains("NaN"));
        assert!(estimate(FollowerCount::Unset).is_none());
    }

    #[test]
    fn test_zero_is_not_unset() {
        let display = estimate_display(FollowerCount::Count(0));
        assert_eq!(display.post, "R$ 0,00");
        assert!(!display.is_placeholder());
    }

    #[test]
    fn test_formula_ratios_hold() {
        for n in [0u64, 1, 7, 1000, 12_345, 250_000, 9_876_543] {
            let e = Estimation::from_followers(n);
            let post = n as f64 * 0.035;
            assert!(close(e.post, post), "post for {}", n);
            assert!(close(e.story, 0.7 * post), "story for {}", n);
            assert!(close(e.reels, 2.5 * post), "reels for {}", n);
        }
    }

    #[test]
    fn test_estimate_from_input() {
        let e = estimate_from_input("10.000").unwrap().unwrap();
        assert_eq!(e.display().post, "R$ 350,00");
        assert_eq!(estimate_from_input("").unwrap(), None);
        assert!(estimate_from_input("-10").is_err());
    }

    #[test]
    fn test_huge_counts_keep_reels_apart_from_post() {
        let ten_pow_19 = estimate_display(FollowerCount::Count(10_u64.pow(19)));
        assert_ne!(ten_pow_19.post, ten_pow_19.reels);
        let amount = |s: &str| -> f64 {
            s.trim_start_matches("R$ ").replace('.', "").replace(',', ".").parse().unwrap()
        };
        assert!(close(amount(&ten_pow_19.post), 3.5e17));
        assert!(close(amount(&ten_pow_19.reels), 2.5 * amount(&ten_pow_19.post)));

        let max = estimate_display(FollowerCount::Count(u64::MAX));
        assert_ne!(max.post, max.reels);
        assert_ne!(max.reels, ten_pow_19.reels);
    }
}
