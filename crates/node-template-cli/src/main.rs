//! node-template-cli - Full-stack Node.js project generator

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use scaffolder_core::runtime::Language;
use scaffolder_core::tui::GenerateArgs;
use scaffolder_core::ProductConfig;
use std::path::Path;

/// Node template product configuration
#[derive(Clone)]
pub struct NodeTemplateConfig;

impl ProductConfig for NodeTemplateConfig {
    fn display_name(&self) -> &'static str {
        "Node Template"
    }

    fn runtime_install_url(&self) -> &'static str {
        "https://nodejs.org/en/download/"
    }

    fn launcher_env(&self) -> &'static str {
        "NODE_TEMPLATE_LAUNCHER"
    }

    fn next_steps(&self, projects: &[&Path], language: Language) -> Vec<String> {
        let mut steps = Vec::new();

        for project in projects {
            steps.push(format!("cd {} && npm install", project.display()));
        }

        if let Some(backend) = projects
            .iter()
            .find(|p| p.ends_with(self.backend_project_name()))
        {
            let runner = match language {
                Language::TypeScript => "npx tsx",
                Language::JavaScript => "node",
            };
            steps.push(format!(
                "Start the backend: {} {}",
                runner,
                backend.join("src").join(format!("index.{}", language.extension())).display()
            ));
        }

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "node-template-cli")]
#[command(about = "A CLI for generating full-stack Node.js project templates")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generates a full-stack project template
    Generate(CliGenerateArgs),
}

#[derive(Parser, Debug)]
pub struct CliGenerateArgs {
    /// Generate project with TypeScript
    #[arg(short = 't', long)]
    pub typescript: bool,
}

impl From<CliGenerateArgs> for GenerateArgs {
    fn from(args: CliGenerateArgs) -> Self {
        GenerateArgs {
            typescript: args.typescript,
        }
    }
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = NodeTemplateConfig;

    match args.command {
        Some(Command::Generate(generate_args)) => {
            let result = scaffolder_core::run(&config, generate_args.into());

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        None => {
            Args::command().print_help()?;
            Ok(())
        }
    }
}
