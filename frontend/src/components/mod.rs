//! UI Components for the CollabHub application.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Hero`] - Landing title and call to action
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`EarningsEstimator`] / [`EarningsEstimate`] - Follower count to post/story/reels values
//! - [`CampaignProgress`] - Six-stage campaign tracker
//! - [`ConnectWizard`] - Social account connection flow
//! - [`WaitlistForm`] - Waitlist signup
//! - [`Notifications`] - Transient toasts

mod header;
mod hero;
mod footer;
mod estimator;
mod campaign_progress;
mod waitlist;
mod notifications;
pub mod wizard;

pub use header::*;
pub use hero::*;
pub use footer::*;
pub use estimator::*;
pub use campaign_progress::*;
pub use waitlist::*;
pub use notifications::*;
pub use wizard::ConnectWizard;
