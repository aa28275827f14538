//! Compare command - order two versions.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use clap::Args;

use semcheck::Version;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    pub left: String,

    /// Right-hand version
    pub right: String,
}

fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

pub fn execute(args: CompareArgs) -> Result<i32> {
    let left = Version::parse(&args.left).with_context(|| format!("Invalid version \"{}\"", args.left))?;
    let right = Version::parse(&args.right).with_context(|| format!("Invalid version \"{}\"", args.right))?;

    println!("{} {} {}", left, symbol(left.cmp(&right)), right);
    Ok(0)
}
