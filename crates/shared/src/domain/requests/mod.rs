mod reward;
mod transaction;

pub use self::reward::{CalculateRewardsRequest, TransactionRequest};
pub use self::transaction::CreateTransactionRequest;
