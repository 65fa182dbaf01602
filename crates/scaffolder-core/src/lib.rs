//! Scaffolder Core - Shared library for Node.js project scaffolding CLIs
//!
//! This library provides the core functionality for generating frontend and
//! backend Node.js projects from a short series of numbered menus.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Runtime detection, menu prompts, file manifests,
//!   and the frontend/backend generators
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait, `GenerateConfig`, and the
//!   `Workflow` state machine driving a `ProjectScaffolder`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-framed runner (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based interactive runner
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{FsScaffolder, GenerateConfig, Prompter, Workflow};
//!
//! let config = GenerateConfig::new(std::env::current_dir()?);
//! let mut scaffolder = FsScaffolder::new(config);
//! let mut prompter = Prompter::new(std::io::stdin().lock(), std::io::stdout());
//! let summary = Workflow::new(&mut prompter, &mut scaffolder)
//!     .run_with_progress(|report| {
//!         println!("created {}", report.project);
//!         Ok(())
//!     })?;
//! ```

pub mod config;
pub mod error;
pub mod product;
pub mod prompt;
pub mod runtime;
pub mod scaffold;
pub mod templates;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::GenerateConfig;
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use prompt::{Choice, Prompter};
pub use runtime::{check_node, Language, RuntimeInfo};
pub use scaffold::{FsScaffolder, ProjectScaffolder, ScaffoldReport, Target};
pub use templates::FileManifest;
pub use workflow::{Workflow, WorkflowSummary};

#[cfg(feature = "tui")]
pub use tui::run;
