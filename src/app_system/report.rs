use std::fmt::{Display, Formatter, Result};
use std::time::Duration;
use crate::domain::ProductRecord;

/// Outcome of a timed load, ready to be printed.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub duration: Duration,
    pub record: ProductRecord,
}

impl Report {
    pub fn new(duration: Duration, record: ProductRecord) -> Self {
        Self { duration, record }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "\n\nfull duration: {:?}\nfetched product data:\n\n{:?}\n",
            self.duration, self.record
        )
    }
}
