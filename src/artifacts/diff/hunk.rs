use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, Edit, MyersDiff};
use colored::{ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HunkKind {
    Equal,
    Added,
    Removed,
}

/// A run of consecutive lines sharing one kind, terminators included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    pub kind: HunkKind,
    pub text: String,
}

impl Hunk {
    pub fn new(kind: HunkKind, text: impl Into<String>) -> Self {
        Hunk {
            kind,
            text: text.into(),
        }
    }

    /// Hunk text prefixed per line with `+`, `-` or a space, and colored
    pub fn to_colored_lines(&self) -> Vec<ColoredString> {
        self.text
            .split_inclusive('\n')
            .map(|line| match self.kind {
                HunkKind::Added => format!("+{line}").green(),
                HunkKind::Removed => format!("-{line}").red(),
                HunkKind::Equal => format!(" {line}").normal(),
            })
            .collect()
    }
}

/// Split `text` into lines that keep their `\n`
///
/// A final line without a terminator is still a line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Line-level edit script between `old_text` and `new_text`
///
/// Concatenating every non-`Removed` hunk gives `new_text`, and every
/// non-`Added` hunk gives `old_text`. Inside one changed region the removed
/// lines come before the added ones. Identical texts, empty ones included,
/// give a single `Equal` hunk.
pub fn diff_lines(old_text: &str, new_text: &str) -> Vec<Hunk> {
    if old_text == new_text {
        return vec![Hunk::new(HunkKind::Equal, old_text)];
    }
    if old_text.is_empty() {
        return vec![Hunk::new(HunkKind::Added, new_text)];
    }
    if new_text.is_empty() {
        return vec![Hunk::new(HunkKind::Removed, old_text)];
    }

    let old_lines = split_lines(old_text);
    let new_lines = split_lines(new_text);
    let edits = MyersDiff::new(&old_lines, &new_lines).diff();

    group_edits(edits)
}

fn group_edits(edits: Vec<Edit<&str>>) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut equal = String::new();
    let mut removed = String::new();
    let mut added = String::new();

    for edit in edits {
        match edit {
            Edit::Equal { value } => {
                flush_change(&mut hunks, &mut removed, &mut added);
                equal.push_str(value);
            }
            Edit::Delete { value } => {
                flush(&mut hunks, HunkKind::Equal, &mut equal);
                removed.push_str(value);
            }
            Edit::Insert { value } => {
                flush(&mut hunks, HunkKind::Equal, &mut equal);
                added.push_str(value);
            }
        }
    }

    flush(&mut hunks, HunkKind::Equal, &mut equal);
    flush_change(&mut hunks, &mut removed, &mut added);

    hunks
}

fn flush_change(hunks: &mut Vec<Hunk>, removed: &mut String, added: &mut String) {
    flush(hunks, HunkKind::Removed, removed);
    flush(hunks, HunkKind::Added, added);
}

fn flush(hunks: &mut Vec<Hunk>, kind: HunkKind, buffer: &mut String) {
    if !buffer.is_empty() {
        hunks.push(Hunk::new(kind, std::mem::take(buffer)));
    }
}
