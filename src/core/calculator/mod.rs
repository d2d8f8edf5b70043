pub mod occupancy;
pub mod stay;
pub mod visits;
