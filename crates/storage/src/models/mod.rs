mod booking;
mod class;
mod member;
mod status;
mod trainer;
mod workout_record;

pub use booking::{Booking, BookingStatus};
pub use class::GymClass;
pub use member::{Member, MembershipType};
pub use status::{ParseEnumError, Status};
pub use trainer::Trainer;
pub use workout_record::WorkoutRecord;
