//! Check command - test versions against a constraint expression.

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use semcheck::{ConstraintSet, Version};

use crate::config::SemcheckConfig;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Constraint expression, or @name from semcheck.toml
    pub constraint: String,

    /// Versions to check
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Only set the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parse every version and check it against `set`, in input order.
fn evaluate(set: &ConstraintSet, versions: &[String]) -> Result<Vec<(Version, bool)>> {
    versions
        .iter()
        .map(|raw| {
            let version = Version::parse(raw).with_context(|| format!("Invalid version \"{}\"", raw))?;
            let satisfied = set.check(&version);
            Ok((version, satisfied))
        })
        .collect()
}

pub fn execute(args: CheckArgs, config: &SemcheckConfig) -> Result<i32> {
    let expression = config.resolve(&args.constraint)?;
    let set = ConstraintSet::parse(expression)
        .with_context(|| format!("Invalid constraint \"{}\"", expression))?;

    let results = evaluate(&set, &args.versions)?;

    if !args.quiet {
        for (version, satisfied) in &results {
            if *satisfied {
                println!("{} {}", style("✓").green(), version);
            } else {
                println!("{} {}", style("✗").red(), version);
            }
        }
    }

    let all = results.iter().all(|(_, satisfied)| *satisfied);
    Ok(if all { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_evaluate_in_order() {
        let set = ConstraintSet::parse(">=1.1, <2, !=1.2.3 || > 3").unwrap();
        let results = evaluate(&set, &strings(&["3.1.2", "1.2.3", "v1.5"])).unwrap();
        let flags: Vec<bool> = results.iter().map(|(_, ok)| *ok).collect();
        assert_eq!(flags, vec![true, false, true]);
        assert_eq!(results[2].0.to_string(), "1.5.0");
    }

    #[test]
    fn test_evaluate_rejects_bad_version() {
        let set = ConstraintSet::parse("^1.x").unwrap();
        assert!(evaluate(&set, &strings(&["1.0.0", "foo"])).is_err());
    }

    #[test]
    fn test_execute_exit_codes() {
        let config = SemcheckConfig::default();
        let args = CheckArgs {
            constraint: "^1.2".to_string(),
            versions: strings(&["1.2.0", "1.9.9"]),
            quiet: true,
        };
        assert_eq!(execute(args, &config).unwrap(), 0);

        let args = CheckArgs {
            constraint: "^1.2".to_string(),
            versions: strings(&["1.2.0", "2.0.0"]),
            quiet: true,
        };
        assert_eq!(execute(args, &config).unwrap(), 1);

        let args = CheckArgs {
            constraint: ">= bar".to_string(),
            versions: strings(&["1.0.0"]),
            quiet: true,
        };
        assert!(execute(args, &config).is_err());
    }
}
