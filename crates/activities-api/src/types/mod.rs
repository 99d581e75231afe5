//! Type exports

pub mod activity;

pub use activity::Activity;
