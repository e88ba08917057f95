#![forbid(unsafe_code)]

pub mod error;
pub mod flow;
pub mod format;
pub mod model;
pub mod session;

pub use error::Error;
pub use flow::{FlowSequencer, Milestone, Milestones, Stage, StageChange};
