pub mod day_summary;
pub mod report;
pub mod sample;
pub mod session;

pub use day_summary::DaySummary;
pub use report::{DailyPoint, PersonMonthlyReport};
pub use sample::{ParsedLog, RawSample, parse_log};
pub use session::Session;
