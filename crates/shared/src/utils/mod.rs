mod gracefull;
mod logs;
mod metrics;
mod month;

pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::metrics::{Method, MethodLabels, Metrics, Status};
pub use self::month::{MONTH_KEY_FORMAT, month_key};
