use chrono::{Local, NaiveDate};
use splitbill_application::Clock;

/// Local calendar date of the host.
#[derive(Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
