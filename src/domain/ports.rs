use crate::domain::model::OutputFormat;
use chrono::NaiveDateTime;

/// Source of "now" for requests made without an explicit date.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub trait ConfigProvider {
    /// Hour given to dates typed without a time; it becomes the cipher offset.
    fn default_hour(&self) -> u32;
    fn output_format(&self) -> OutputFormat;
}
