//! Controller layer: UI actions, reducer-like state transitions, and the action queue.

pub mod events;
pub mod orchestration;
pub mod reducer;
