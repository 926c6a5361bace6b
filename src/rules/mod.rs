//! Abalone rules.
//!
//! - `push`: validation and execution of push-line moves
//! - `engine`: move enumeration and application on `Game`
//!
//! The rules never choose moves. They answer "is this legal", "what does it
//! do" and "what can be played".

pub mod engine;
pub mod push;

pub use push::{plan_push, PushPlan};
