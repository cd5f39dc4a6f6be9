//! Staged simulated workflows.
//!
//! A workflow walks `Idle -> stage 0 -> ... -> stage n -> Settled` on timers,
//! then asks a [`provider::ResultProvider`] for the result. Components own one
//! [`runner::WorkflowRunner`] per trigger control.

pub mod machine;
pub mod provider;
pub mod runner;
pub mod scheduler;

pub use machine::{Outcome, RunId, Stage, Transition, WorkflowState};
pub use provider::{Echo, Fixture, RequiredInput, ResultProvider};
pub use runner::WorkflowRunner;
pub use scheduler::{BrowserScheduler, Scheduler};
