pub mod catalog;
pub mod clients;
pub mod jobs;
pub mod staff;
