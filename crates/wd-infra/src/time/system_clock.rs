use chrono::{NaiveDate, Utc};
use wd_core::ports::ClockPort;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
