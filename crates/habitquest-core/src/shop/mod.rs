//! Points store: purchasable rewards and the themes some of them unlock.

pub mod rewards;
pub mod themes;

pub use rewards::{Reward, RewardCategory};
pub use themes::{Theme, DEFAULT_THEME_ID};
