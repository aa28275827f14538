//! Explain command - show the desugared form of a constraint expression.

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use semcheck::rewrite::{rewrite_carets, rewrite_range};
use semcheck::ConstraintSet;

use crate::config::SemcheckConfig;

#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Constraint expression, or @name from semcheck.toml
    pub constraint: String,
}

fn render(set: &ConstraintSet) -> Vec<String> {
    set.groups()
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" AND ")
        })
        .collect()
}

pub fn execute(args: ExplainArgs, config: &SemcheckConfig) -> Result<i32> {
    let expression = config.resolve(&args.constraint)?;
    let rewritten = rewrite_carets(&rewrite_range(expression));
    let set = ConstraintSet::parse(expression)
        .with_context(|| format!("Invalid constraint \"{}\"", expression))?;

    println!("{} {}", style("input:").bold(), expression);
    println!("{} {}", style("rewritten:").bold(), rewritten.trim());
    for (i, group) in render(&set).iter().enumerate() {
        let prefix = if i == 0 { "   " } else { "OR " };
        println!("{}{}", prefix, group);
    }

    Ok(0)
}
