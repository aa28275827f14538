//! Lexical desugaring of hyphen and caret ranges
//!
//! Both passes work on raw expression text and never build a [`Version`]:
//! partial or wildcarded versions are left for the constraint parser to
//! normalize. The hyphen pass must run before the caret pass.
//!
//! [`Version`]: crate::Version

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Markers accepted in place of a version component.
pub const WILDCARDS: &[&str] = &["x", "X", "*"];

lazy_static! {
    // A version that may still carry wildcards or miss trailing components.
    static ref LOOSE_VERSION: String = String::from(
        r"[vV]?[0-9xX*]+(?:\.[0-9xX*]+)?(?:\.[0-9xX*]+)?(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?"
    );

    // Hyphen Range
    static ref HYPHEN_RE: Regex = Regex::new(&format!(
        r"\s*(?P<from>{})\s*-\s*(?P<to>{})\s*",
        *LOOSE_VERSION, *LOOSE_VERSION
    )).unwrap();

    // Caret Range
    static ref CARET_RE: Regex = Regex::new(
        r"\^(?P<version>[vV]?(?P<major>[0-9xX*]+)(?:\.(?P<minor>[0-9xX*]+))?(?:\.(?P<patch>[0-9xX*]+))?(?P<pre>-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?)"
    ).unwrap();
}

/// Characters after which a version is an operand rather than a range start.
const OPERAND_PREFIX_CHARS: &[char] = &['<', '>', '=', '!', '~', '^'];

/// Whether a caret token may end where `rest` begins.
fn ends_token(rest: &str) -> bool {
    match rest.chars().next() {
        None => true,
        Some(c) => c.is_whitespace() || c == ',' || c == '|',
    }
}

/// Whether `s` is exactly one of the wildcard markers `x`, `X` or `*`.
pub fn is_x(s: &str) -> bool {
    WILDCARDS.contains(&s)
}

/// Rewrite every `A - B` hyphen range into `>= A, <= B`.
///
/// Whitespace around a matched range is consumed together with it; all other
/// text is copied through unchanged.
pub fn rewrite_range(expression: &str) -> String {
    let rewritten = HYPHEN_RE.replace_all(expression, |caps: &Captures| {
        // An operand such as `>=1.0.0-0.3.7` carries a prerelease, not a range
        let start = caps.get(0).map_or(0, |m| m.start());
        if expression[..start].ends_with(OPERAND_PREFIX_CHARS) {
            return caps[0].to_string();
        }

        format!(">= {}, <= {}", &caps["from"], &caps["to"])
    });

    if rewritten != expression {
        log::trace!("Rewrote hyphen ranges: \"{}\" => \"{}\"", expression, rewritten);
    }

    rewritten.into_owned()
}

/// Rewrite every `^A` caret range into `>= A, < (major+1)`.
///
/// Wildcarded components in the lower bound are replaced by `0` and anything
/// after them except the prerelease is dropped. A wildcard major yields the
/// unbounded `>=0.0.0`.
pub fn rewrite_carets(expression: &str) -> String {
    let rewritten = CARET_RE.replace_all(expression, |caps: &Captures| {
        // A token that runs past the version (`^1.2.3.4`) is not a caret range
        let end = caps.get(0).map_or(expression.len(), |m| m.end());
        if !ends_token(&expression[end..]) {
            return caps[0].to_string();
        }

        let major = &caps["major"];
        if is_x(major) {
            return ">=0.0.0".to_string();
        }

        // Leave anything we cannot bump for the parser to report
        let next_major = match major.parse::<u64>().ok().and_then(|m| m.checked_add(1)) {
            Some(next) => next,
            None => return caps[0].to_string(),
        };

        let pre = caps.name("pre").map_or("", |m| m.as_str());
        let minor = caps.name("minor").map(|m| m.as_str());
        let patch = caps.name("patch").map(|m| m.as_str());

        match (minor, patch) {
            (Some(minor), _) if is_x(minor) => {
                format!(">= {}.0{}, < {}", major, pre, next_major)
            }
            (Some(minor), Some(patch)) if is_x(patch) => {
                format!(">= {}.{}.0{}, < {}", major, minor, pre, next_major)
            }
            _ => format!(">= {}, < {}", &caps["version"], next_major),
        }
    });

    if rewritten != expression {
        log::trace!("Rewrote caret ranges: \"{}\" => \"{}\"", expression, rewritten);
    }

    rewritten.into_owned()
}
