use crate::path::model::{Path, SubPath};

/// Structural compatibility of a (start, end) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Morphability {
    /// One of the two paths is not set yet.
    None,
    Unmorphable,
    Morphable,
}

/// Which path of the pair a diagnostic refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Start,
    End,
}

impl Side {
    /// Suffix used in user-facing sub-path labels (`#1a`, `#1b`).
    pub fn letter(self) -> char {
        match self {
            Self::Start => 'a',
            Self::End => 'b',
        }
    }
}

/// First sub-path whose command counts differ between start and end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MorphDiagnostic {
    pub sub_path_index: usize,
    /// The side with fewer commands, i.e. the one that needs points added.
    pub fewer: Side,
    pub difference: usize,
}

impl MorphDiagnostic {
    pub fn message(&self) -> String {
        let points = if self.difference == 1 {
            "1 point".to_owned()
        } else {
            format!("{} points", self.difference)
        };
        format!(
            "Add {points} to subpath #{}{}",
            self.sub_path_index + 1,
            self.fewer.letter()
        )
    }
}

fn same_structure(a: SubPath<'_>, b: SubPath<'_>) -> bool {
    a.len() == b.len() && a.kinds().eq(b.kinds())
}

/// True iff both paths have identical sub-path and command-kind structure.
///
/// Point values and split flags are ignored.
pub fn is_morphable(start: &Path, end: &Path) -> bool {
    start.sub_path_count() == end.sub_path_count()
        && start
            .sub_paths()
            .zip(end.sub_paths())
            .all(|(a, b)| same_structure(a, b))
}

pub fn classify(start: Option<&Path>, end: Option<&Path>) -> Morphability {
    match (start, end) {
        (Some(start), Some(end)) => {
            if is_morphable(start, end) {
                Morphability::Morphable
            } else {
                Morphability::Unmorphable
            }
        }
        _ => Morphability::None,
    }
}

/// Reports only the first sub-path, in index order, whose command counts differ.
///
/// Later mismatching sub-paths are not reported; callers re-run this after each fix.
pub fn diagnose(start: &Path, end: &Path) -> Option<MorphDiagnostic> {
    start
        .sub_paths()
        .zip(end.sub_paths())
        .enumerate()
        .find_map(|(sub_path_index, (a, b))| {
            if a.len() == b.len() {
                return None;
            }
            Some(MorphDiagnostic {
                sub_path_index,
                fewer: if a.len() < b.len() {
                    Side::Start
                } else {
                    Side::End
                },
                difference: a.len().abs_diff(b.len()),
            })
        })
}

/// Hints shown while a pair is morphable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct MorphHints {
    pub has_closed_sub_path: bool,
    pub has_split_command: bool,
}

impl MorphHints {
    pub fn of(start: &Path, end: &Path) -> Self {
        Self {
            has_closed_sub_path: start.has_closed_sub_path() || end.has_closed_sub_path(),
            has_split_command: start.has_split_command() || end.has_split_command(),
        }
    }
}

/// One-line status text for the current pair.
pub fn status_message(start: Option<&Path>, end: Option<&Path>) -> String {
    let (Some(start), Some(end)) = (start, end) else {
        return String::new();
    };
    if !is_morphable(start, end) {
        return diagnose(start, end)
            .map(|d| d.message())
            .unwrap_or_else(|| "Unmorphable".to_owned());
    }
    let hints = MorphHints::of(start, end);
    let mut msg = String::from("Reverse");
    if hints.has_closed_sub_path {
        msg.push_str("/shift");
    }
    msg.push_str(" the points below");
    if hints.has_split_command {
        msg.push_str(" or drag the orange points above");
    }
    msg.push_str(" to alter the animation");
    msg
}

#[cfg(test)]
#[path = "../../tests/unit/morph/check.rs"]
mod tests;
