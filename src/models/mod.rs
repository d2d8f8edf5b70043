pub mod day_summary;
pub mod gym_class;
pub mod member;
pub mod role;
pub mod session;
pub mod visit;
