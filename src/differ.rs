//! Plan diffing
//!
//! Compares a previously written plan with a fresh compile so a reviewer can
//! see which routes and rules a domain map edit actually changes.

use serde::Serialize;
use similar::{ChangeTag, TextDiff};

use crate::compiler::CompiledDomainMap;

/// Type of change in a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffTag {
    Delete,
    Insert,
    Equal,
}

impl From<ChangeTag> for DiffTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Delete => DiffTag::Delete,
            ChangeTag::Insert => DiffTag::Insert,
            ChangeTag::Equal => DiffTag::Equal,
        }
    }
}

impl DiffTag {
    fn sign(self) -> char {
        match self {
            DiffTag::Delete => '-',
            DiffTag::Insert => '+',
            DiffTag::Equal => ' ',
        }
    }
}

/// A single line of the plan diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    pub tag: DiffTag,
    /// 1-based line in the previous plan
    pub old_line: Option<usize>,
    /// 1-based line in the fresh plan
    pub new_line: Option<usize>,
    pub content: String,
}

/// Outcome of comparing two plan renderings
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDiff {
    pub lines: Vec<DiffLine>,
    pub additions: usize,
    pub deletions: usize,
    /// Fingerprint recorded in the previous plan, if it had one
    pub previous_fingerprint: Option<String>,
    pub current_fingerprint: String,
}

impl PlanDiff {
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }

    /// True when the recorded fingerprint still matches the fresh plan
    pub fn fingerprint_matches(&self) -> bool {
        self.previous_fingerprint.as_deref() == Some(self.current_fingerprint.as_str())
    }

    /// Insertions and deletions only
    pub fn changed_lines(&self) -> impl Iterator<Item = &DiffLine> {
        self.lines.iter().filter(|l| l.tag != DiffTag::Equal)
    }

    /// e.g. "+5, -3"
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.additions, self.deletions)
    }

    /// Changed lines prefixed with `+`/`-`
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.changed_lines() {
            out.push(line.tag.sign());
            out.push_str(&line.content);
            if !line.content.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }
}

/// Line diff between a stored plan and a fresh compile
pub fn diff_plans(previous: &str, current: &CompiledDomainMap) -> PlanDiff {
    let rendered = current.to_json_pretty();
    let text_diff = TextDiff::from_lines(previous, rendered.as_str());

    let mut result = PlanDiff {
        previous_fingerprint: recorded_fingerprint(previous),
        current_fingerprint: current.fingerprint.to_string(),
        ..PlanDiff::default()
    };

    for change in text_diff.iter_all_changes() {
        let tag = DiffTag::from(change.tag());
        match tag {
            DiffTag::Delete => result.deletions += 1,
            DiffTag::Insert => result.additions += 1,
            DiffTag::Equal => {}
        }
        result.lines.push(DiffLine {
            tag,
            old_line: change.old_index().map(|i| i + 1),
            new_line: change.new_index().map(|i| i + 1),
            content: change.value().to_string(),
        });
    }

    tracing::debug!(
        additions = result.additions,
        deletions = result.deletions,
        "plan diff computed"
    );
    result
}

fn recorded_fingerprint(plan: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(plan).ok()?;
    value.get("fingerprint")?.as_str().map(str::to_string)
}
