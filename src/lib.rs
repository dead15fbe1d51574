pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod project;
pub mod pull_request;
pub mod runner;
pub mod ui;

pub use error::{ErrorCategory, GitPrError, Result};
