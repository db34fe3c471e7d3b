//! Asynchronous tasks for quadbot operation.
//!
//! - [`motion_task`]: owns the gait engine and executes motion commands one at a time.
//!
//! Tasks are spawned from `main.rs` and fed through Embassy channels.
pub mod motion_task;
