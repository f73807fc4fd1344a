//! Constants shared by the logic layer.
//!
//! These are product decisions, not user settings. Browser-side settings
//! (API URL, toast timing) live in the frontend crate's `config` module.

/// Estimated earnings per follower for one feed post, in BRL.
pub const POST_RATE_PER_FOLLOWER: f64 = 0.035;

/// Story value as a fraction of the post value.
pub const STORY_FACTOR: f64 = 0.7;

/// Reels bonus applied on top of the post value.
///
/// Labelled "+150%" by product, but the estimator adds it to the post value
/// (`post * 1.5 + post`), so reels come out at 2.5x a post.
pub const REELS_BONUS_FACTOR: f64 = 1.5;

/// Currency symbol used for every displayed amount.
pub const CURRENCY_SYMBOL: &str = "R$";

/// Shown in place of an amount when no follower count was entered.
pub const AMOUNT_PLACEHOLDER: &str = "R$ --";

/// Prefix of the code a user posts to prove account ownership.
pub const VERIFICATION_CODE_PREFIX: &str = "CH-";

/// Random bytes behind a verification code (two hex digits each).
pub const VERIFICATION_CODE_BYTES: usize = 3;
