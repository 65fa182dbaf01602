//! Runtime detection and external tool execution
//!
//! This module provides:
//! - Node.js runtime detection
//! - Running external generators such as `create-react-app`

pub mod check;
pub mod tool;

pub use check::{check_node, check_tool, require_runtime, Language, RuntimeInfo};
pub use tool::{ToolConfig, ToolManager};
