pub mod errors;
pub mod schedule;

pub use errors::FeeError;
pub use schedule::FeeSchedule;
