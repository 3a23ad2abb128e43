//! Command-line workflows, independent of argument parsing
//!
//! - `request` - completes a bump request from CLI tokens and prompts
//! - `orchestration` - the `version` and `publish` workflows

pub mod orchestration;
pub mod request;

pub use orchestration::{
    run_publish_workflow, run_version_workflow, PublishResult, PublishStatus,
    PublishWorkflowArgs, VersionWorkflowArgs, WorkflowContext,
};
pub use request::complete_request;
