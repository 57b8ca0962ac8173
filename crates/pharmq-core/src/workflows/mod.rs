//! High-level, user-facing procedures. Each workflow ties the engine and
//! core layers together into one complete scientific task.

pub mod ground_state;
