//! Interactive generate command
//!
//! Status output is framed with cliclack; the numbered menus themselves are
//! plain lines on stdout so answers can be typed or piped in.

use crate::config::GenerateConfig;
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::prompt::Prompter;
use crate::runtime::check::{self, Language};
use crate::scaffold::{FsScaffolder, ScaffoldReport, Target};
use crate::workflow::{Workflow, WorkflowSummary};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Preselect TypeScript (the extension menu can still change it)
    pub typescript: bool,
}

/// Run the generate command with interactive prompts
pub fn run<C: ProductConfig>(config: &C, args: GenerateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Nothing downstream works without the runtime
    check_dependencies(config)?;

    // Step 2: Resolve where and how to generate
    let base_dir = std::env::current_dir().context("Failed to determine the current directory")?;
    let language = Language::from_typescript_flag(args.typescript);
    if args.typescript {
        cliclack::log::info(format!(
            "{} preselected with --typescript",
            language.display_name()
        ))?;
    }
    let generate_config = GenerateConfig::from_product(config, base_dir.clone());
    if generate_config.launcher != config.default_launcher() {
        cliclack::log::info(format!(
            "Using {} to run frontend generators",
            generate_config.launcher
        ))?;
    }

    // Step 3: Menus and generation
    let summary = select_and_generate(generate_config)?;

    // Step 4: Show next steps
    print_next_steps(config, &base_dir, &summary)?;

    Ok(())
}

fn check_dependencies<C: ProductConfig>(config: &C) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start(format!("Checking for {}...", config.runtime_name()));

    let info = check::check_tool(config.runtime_binary(), config.runtime_name());

    match check::require_runtime(info, config.runtime_install_url()) {
        Ok(info) => {
            let location = info
                .path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            spinner.stop(format!(
                "{} is installed ({}) {}",
                info.name,
                info.version.as_deref().unwrap_or("unknown version"),
                location.dimmed()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop(format!("{} is not installed", config.runtime_name()));
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!(
                "Please install {} and try again.",
                config.runtime_name()
            );
        }
    }
}

fn select_and_generate(config: GenerateConfig) -> Result<WorkflowSummary> {
    let base_dir = config.base_dir.clone();
    let mut scaffolder = FsScaffolder::new(config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    let result = Workflow::new(&mut prompter, &mut scaffolder)
        .run_with_progress(|report| Ok(print_report(&base_dir, report)?));

    match result {
        Ok(summary) => Ok(summary),
        Err(e) => {
            cliclack::log::error(format!("{}", e))?;
            match e {
                ScaffoldError::InputClosed => anyhow::bail!("Setup cancelled."),
                _ => anyhow::bail!("Project generation failed."),
            }
        }
    }
}

fn print_report(base_dir: &Path, report: &ScaffoldReport) -> std::io::Result<()> {
    for dir in &report.created_dirs {
        cliclack::log::info(format!("Created directory: {}", relative(base_dir, dir).display()))?;
    }
    for file in &report.created_files {
        cliclack::log::info(format!("Created file: {}", relative(base_dir, file).display()))?;
    }

    match report.target {
        Target::Frontend(framework) => cliclack::log::success(format!(
            "{} frontend project created at: {}",
            framework.display_name(),
            report.project.cyan()
        ))?,
        Target::Backend {
            framework,
            language,
        } => cliclack::log::success(format!(
            "{} backend project ({}) created at: {}",
            framework.display_name(),
            language.display_name(),
            report.project.cyan()
        ))?,
    }

    Ok(())
}

fn relative<'a>(base_dir: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(base_dir).unwrap_or(path)
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    base_dir: &Path,
    summary: &WorkflowSummary,
) -> Result<()> {
    let projects: Vec<PathBuf> = summary
        .reports
        .iter()
        .map(|r| relative(base_dir, &r.root).to_path_buf())
        .collect();
    let project_refs: Vec<&Path> = projects.iter().map(PathBuf::as_path).collect();
    let steps = config.next_steps(&project_refs, summary.language);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
