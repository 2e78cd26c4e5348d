//! Convert command implementation

use crate::config::Config;
use anyhow::{Context, Result};
use colored::Colorize;
use hc_ast::outline;
use hc_intern::Interner;
use hc_lower::{DiagnosticLog, LoweringContext, Unsupported, VhdlDeclParsers, lower_design_file};
use hc_syntax::SyntaxNode;
use indexmap::IndexMap;
use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub fn run(input: &Path, config: &Config, out: &mut impl Write) -> Result<()> {
    debug!(input = %input.display(), hierarchy_only = config.lower.hierarchy_only, "converting");
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read syntax tree: {}", input.display()))?;
    let root = SyntaxNode::from_json(&source)
        .with_context(|| format!("Failed to load syntax tree: {}", input.display()))?;

    let parsers = VhdlDeclParsers;
    let interner = Interner::new();
    let mut log = DiagnosticLog::new();
    let lowered = {
        let mut ctx = LoweringContext::new(&parsers, &mut log)
            .with_interner(interner.clone())
            .with_options(config.lower);
        lower_design_file(&mut ctx, &root)
    };
    let packages = match lowered {
        Ok(packages) => packages,
        Err(err) => {
            let rendered = render(&err)?;
            anyhow::bail!("Failed to lower {}\n{rendered}", input.display());
        }
    };

    writeln!(
        out,
        "{} {} package(s) from {}",
        "Lowered".green().bold(),
        packages.len(),
        input.display()
    )?;
    for package in &packages {
        writeln!(out)?;
        write!(out, "{}", outline(package, &interner))?;
    }

    let entries = log.entries();
    if entries.is_empty() {
        writeln!(out, "\n{} No unsupported constructs", "Success:".green().bold())?;
        return Ok(());
    }

    writeln!(
        out,
        "\n{} {} construct(s) skipped:",
        "Unsupported".yellow().bold(),
        entries.len()
    )?;
    for (label, count) in summarize(entries) {
        writeln!(out, "  {count:>4}  {label}")?;
    }
    if config.diagnostics.verbose {
        for entry in entries {
            writeln!(out)?;
            write!(out, "{}", render(&entry.to_diagnostic())?)?;
        }
    }

    if config.diagnostics.deny_unsupported {
        anyhow::bail!(
            "{} unsupported construct(s) skipped in {}",
            entries.len(),
            input.display()
        );
    }
    Ok(())
}

/// Skip counts per reporting label, in first-seen order
fn summarize(entries: &[Unsupported]) -> IndexMap<&str, usize> {
    let mut summary = IndexMap::new();
    for entry in entries {
        *summary.entry(entry.label.as_str()).or_insert(0) += 1;
    }
    summary
}

fn render(diagnostic: &dyn Diagnostic) -> Result<String> {
    let mut rendered = String::new();
    GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
        .render_report(&mut rendered, diagnostic)?;
    Ok(rendered)
}
