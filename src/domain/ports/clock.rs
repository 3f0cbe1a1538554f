//! Clock port - source of the current time
//!
//! Every timestamp the store writes (creation, status changes,
//! realization) comes from here, so tests can pin time.

use chrono::{DateTime, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
