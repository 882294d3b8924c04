use crate::artifacts::resolve::{CONFLICT_BLOCK_REGEX, OURS_MARKER, SEPARATOR_MARKER};
use anyhow::Context;
use derive_new::new;
use regex::{Captures, Regex};

/// Rewrites merge-conflict blocks inside arbitrary text, keeping only the
/// local ("ours"/HEAD) side of each one.
///
/// The resolver is a pure text transformation: it performs no I/O and never
/// fails. Anything that is not a well-formed conflict block is preserved
/// byte-for-byte, so malformed or partial marker sequences pass through
/// untouched and resolving already-resolved text is a no-op.
pub struct ConflictResolver {
    pattern: Regex,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Resolution {
    pub output: String,
    pub blocks_resolved: usize,
}

impl ConflictResolver {
    pub fn try_new() -> anyhow::Result<Self> {
        let pattern = Regex::new(CONFLICT_BLOCK_REGEX)
            .with_context(|| format!("invalid conflict block regex: {CONFLICT_BLOCK_REGEX}"))?;

        Ok(ConflictResolver { pattern })
    }

    pub fn resolve(&self, text: &str) -> Resolution {
        // Fast path: without both markers no block can match, skip the scan
        if !Self::may_contain_conflicts(text) {
            return Resolution::new(text.to_string(), 0);
        }

        let mut blocks_resolved = 0;
        let output = self.pattern.replace_all(text, |caps: &Captures| {
            let ours_text = &caps[1];

            // An unmatched start marker inside the ours segment means the
            // block is malformed, leave the whole region as it was
            if ours_text.lines().any(|line| line.starts_with(OURS_MARKER)) {
                return caps[0].to_string();
            }

            blocks_resolved += 1;
            format!("{}\n", ours_text.trim())
        });

        Resolution::new(output.into_owned(), blocks_resolved)
    }

    fn may_contain_conflicts(text: &str) -> bool {
        text.contains(OURS_MARKER) && text.contains(SEPARATOR_MARKER)
    }
}
