//! The generate command's selection flow
//!
//! `SelectExtension -> SelectProjectType -> {SelectFrontend, SelectBackend, both}`.
//! Each project is generated as soon as its framework is chosen, so a
//! full-stack run finishes the frontend before the backend menu is shown.
//! The first error ends the run; nothing generated earlier is rolled back.

use crate::error::Result;
use crate::prompt::{BackendFramework, FrontendFramework, ProjectType, Prompter};
use crate::runtime::check::Language;
use crate::scaffold::{ProjectScaffolder, ScaffoldReport, Target};
use std::io::{BufRead, Write};

/// Drives the menus and hands each selection to a scaffolder
pub struct Workflow<'a, R, W, S> {
    prompter: &'a mut Prompter<R, W>,
    scaffolder: &'a mut S,
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSummary {
    pub language: Language,
    pub project_type: ProjectType,
    /// Reports in generation order
    pub reports: Vec<ScaffoldReport>,
}

impl<'a, R, W, S> Workflow<'a, R, W, S>
where
    R: BufRead,
    W: Write,
    S: ProjectScaffolder,
{
    pub fn new(prompter: &'a mut Prompter<R, W>, scaffolder: &'a mut S) -> Self {
        Self {
            prompter,
            scaffolder,
        }
    }

    /// Run the whole flow. The extension menu always decides the language,
    /// whatever was preselected on the command line.
    pub fn run(&mut self) -> Result<WorkflowSummary> {
        self.run_with_progress(|_| Ok(()))
    }

    /// Like [`run`](Self::run), handing each report to `on_report` as soon
    /// as its project exists, before the next menu is shown. Reports already
    /// delivered stay delivered when a later step fails.
    pub fn run_with_progress<F>(&mut self, mut on_report: F) -> Result<WorkflowSummary>
    where
        F: FnMut(&ScaffoldReport) -> Result<()>,
    {
        let language: Language = self.prompter.choose()?;
        let project_type: ProjectType = self.prompter.choose()?;

        let mut reports = Vec::new();

        if project_type.includes_frontend() {
            let framework: FrontendFramework = self.prompter.choose()?;
            let report = self.scaffolder.scaffold(&Target::Frontend(framework))?;
            on_report(&report)?;
            reports.push(report);
        }

        if project_type.includes_backend() {
            let framework: BackendFramework = self.prompter.choose()?;
            let report = self.scaffolder.scaffold(&Target::Backend {
                framework,
                language,
            })?;
            on_report(&report)?;
            reports.push(report);
        }

        Ok(WorkflowSummary {
            language,
            project_type,
            reports,
        })
    }
}
