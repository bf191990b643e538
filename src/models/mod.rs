pub mod photo;
pub mod place;
pub mod restaurant;
pub mod review;
