pub mod player;
pub mod report;
pub mod review;
