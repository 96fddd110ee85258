use chrono::NaiveDate;

pub trait ClockPort: Send + Sync {
    /// Current calendar date (UTC).
    fn today(&self) -> NaiveDate;
}
