mod reward;

pub use self::reward::{CustomerRewardResponse, RewardCalculationResponse, RewardSummaryResponse};
