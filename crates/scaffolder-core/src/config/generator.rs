//! Generator launcher resolution

use crate::product::ProductConfig;

/// Resolve the launcher program, honoring the product's override variable
pub fn resolve_launcher<C: ProductConfig>(config: &C) -> String {
    launcher_from(std::env::var(config.launcher_env()).ok(), config.default_launcher())
}

fn launcher_from(env_value: Option<String>, default: &str) -> String {
    match env_value {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}
