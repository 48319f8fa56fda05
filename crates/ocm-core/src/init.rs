//! The `init` run: install both assets, then merge the config for local installs.

use crate::assets::{self, Asset, AssetSource};
use crate::config::merge_config;
use crate::error::Result;
use crate::install::install_asset;
use crate::paths;
use crate::prompt::Console;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitOptions {
    /// Answer yes to every overwrite and recovery prompt.
    pub force: bool,
    /// Installing into the per-user directory; the config merge is skipped.
    pub global: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Updated,
    /// The user declined, nothing written.
    Skipped,
    /// The config already registers the context file, nothing written.
    AlreadyConfigured,
}

impl Outcome {
    pub fn changed(self) -> bool {
        matches!(self, Outcome::Created | Outcome::Updated)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Asset(Asset),
    Config,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Asset(asset) => asset.name,
            Step::Config => "config",
        }
    }

    pub fn path(&self, target: &Path) -> PathBuf {
        match self {
            Step::Asset(asset) => asset.dest_path(target),
            Step::Config => paths::config_path(target),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    pub path: PathBuf,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default)]
pub struct InitSummary {
    pub steps: Vec<StepReport>,
}

impl InitSummary {
    pub fn any_changed(&self) -> bool {
        self.steps.iter().any(|s| s.outcome.changed())
    }
}

/// Steps for a run, in execution order.
pub fn plan(options: InitOptions) -> Vec<Step> {
    let mut steps: Vec<Step> = assets::ALL.into_iter().map(Step::Asset).collect();
    if !options.global {
        steps.push(Step::Config);
    }
    steps
}

/// Run every planned step against `target`, one at a time.
///
/// Declined prompts only affect their own step. A missing bundled asset or
/// an I/O failure aborts the run.
pub fn run_init(
    target: &Path,
    options: InitOptions,
    source: &dyn AssetSource,
    console: &mut dyn Console,
) -> Result<InitSummary> {
    tracing::debug!(target = %target.display(), ?options, "starting init");
    let mut summary = InitSummary::default();

    for step in plan(options) {
        let outcome = match step {
            Step::Asset(asset) => install_asset(target, &asset, source, options.force, console)?,
            Step::Config => merge_config(target, options.force, console)?,
        };
        let report = StepReport {
            step,
            path: step.path(target),
            outcome,
        };
        console.report(&report);
        summary.steps.push(report);
    }

    Ok(summary)
}
