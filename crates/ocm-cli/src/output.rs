use ocm_core::paths::{CONFIG_FILE, CONTEXT_INSTRUCTION_PATH};
use ocm_core::{InitSummary, Outcome, Step, StepReport};
use owo_colors::OwoColorize;
use std::path::Path;

pub fn print_banner(target: &Path) {
    println!();
    println!("{}", "OpenCode Context Manager".cyan());
    println!("{}", "Installing skill and command files...".dimmed());
    println!("{}", format!("Target: {}", target.display()).dimmed());
    println!();
}

/// Status line for one finished step, without color.
pub fn status_line(target: &Path, report: &StepReport) -> String {
    let shown = report
        .path
        .strip_prefix(target)
        .unwrap_or(report.path.as_path())
        .display();

    match (report.step, report.outcome) {
        (Step::Config, Outcome::Created) => format!("  Created: {CONFIG_FILE}"),
        (Step::Config, Outcome::Updated) => {
            format!("  Updated: {CONFIG_FILE} (added context to instructions)")
        }
        (Step::Config, Outcome::Skipped) => format!("  Skipped: {CONFIG_FILE} update"),
        (_, Outcome::AlreadyConfigured) => {
            format!("  Already configured: {CONTEXT_INSTRUCTION_PATH} in instructions")
        }
        (Step::Asset(_), Outcome::Created) => format!("  Created: {shown}"),
        (Step::Asset(_), Outcome::Updated) => format!("  Updated: {shown}"),
        (Step::Asset(_), Outcome::Skipped) => format!("  Skipped: {shown}"),
    }
}

pub fn print_step(target: &Path, report: &StepReport) {
    let line = status_line(target, report);
    if report.outcome.changed() {
        println!("{}", line.green());
    } else {
        println!("{}", line.dimmed());
    }
}

pub fn print_summary(summary: &InitSummary) {
    println!();
    if summary.any_changed() {
        println!("{}", "Done!".green());
        println!();
        println!("Next steps:");
        println!(
            "  1. Run {} in OpenCode to generate your context file",
            "/context-update".cyan()
        );
        println!("  2. The context will be automatically included in every prompt");
        println!();
        println!(
            "{}",
            format!("Output location: {CONTEXT_INSTRUCTION_PATH}").dimmed()
        );
    } else {
        println!(
            "{}",
            "Nothing to do - everything is already set up.".dimmed()
        );
    }
    println!();
}
