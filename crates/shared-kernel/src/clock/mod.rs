// crates/shared-kernel/src/clock/mod.rs

use chrono::{DateTime, Utc};

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

/// Source du temps injectée (émission de jetons, horodatages)
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
