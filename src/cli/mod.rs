//! Workflow layer between argument parsing and the core modules

pub mod orchestration;

pub use orchestration::{run_pr_workflow, PrWorkflowArgs, WorkflowResult};
