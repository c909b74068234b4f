pub mod activity;
pub mod error;
pub mod extractors;
pub mod presence;
