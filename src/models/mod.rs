pub mod schedule;
pub mod session;
pub mod template;

pub use schedule::{NewSchedule, Schedule};
pub use session::{Session, UpcomingSession};
pub use template::{NewTemplate, Template};
