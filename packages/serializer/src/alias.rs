//! Human-readable aliases for generated class names
//!
//! Component identifiers of the form `Stem__Name-suffix` act as delimiters in
//! the working set joined with spaces: every class name that follows one (up
//! to the next delimiter) belongs to that identifier's bucket. Buckets are
//! grouped by stem, so a component extending another one shows up as a second
//! bucket of the same stem and its classes get `_extN` aliases.

use regex::Regex;
use std::sync::OnceLock;

fn delimiter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[^_\s]+__[a-zA-Z0-9]+-[a-zA-Z0-9]+").expect("delimiter pattern is valid")
    })
}

/// `(stem, suffix)` of a delimiter match: its first two `-` parts
fn split_delimiter(delimiter: &str) -> Option<(&str, &str)> {
    let mut parts = delimiter.split('-');
    match (parts.next(), parts.next()) {
        (Some(stem), Some(suffix)) => Some((stem, suffix)),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub suffix: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemGroup {
    pub stem: String,
    pub buckets: Vec<Bucket>,
}

/// Stem -> suffix -> ordered class names, built from one working set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    groups: Vec<StemGroup>,
}

#[derive(Debug, PartialEq)]
struct Segment {
    stem: String,
    suffix: String,
    members: Vec<String>,
}

/// Split the space-joined working set at delimiter matches
///
/// Matches are found anywhere in the joined text, not per token. Text between
/// two matches extends the open segment only when it starts with a space;
/// anything else (names before the first delimiter, or the rest of a token
/// whose leading part matched) closes it, and the names that follow belong to
/// no segment.
fn segments(class_names: &[String]) -> Vec<Segment> {
    let joined = class_names.join(" ");
    let mut segments: Vec<Segment> = Vec::new();
    let mut open = false;
    let mut last = 0;

    for found in delimiter_pattern().find_iter(&joined) {
        extend_segment(&joined[last..found.start()], &mut segments, &mut open);
        if let Some((stem, suffix)) = split_delimiter(found.as_str()) {
            segments.push(Segment {
                stem: stem.to_string(),
                suffix: suffix.to_string(),
                members: Vec::new(),
            });
            open = true;
        }
        last = found.end();
    }
    extend_segment(&joined[last..], &mut segments, &mut open);

    segments
}

fn extend_segment(gap: &str, segments: &mut [Segment], open: &mut bool) {
    if gap.is_empty() {
        return;
    }
    if !gap.starts_with(' ') {
        *open = false;
        return;
    }
    if !*open {
        return;
    }
    if let Some(current) = segments.last_mut() {
        current
            .members
            .extend(gap.split_whitespace().map(str::to_string));
    }
}

impl AliasMap {
    pub fn build(class_names: &[String]) -> Self {
        let mut groups: Vec<StemGroup> = Vec::new();

        for segment in segments(class_names) {
            let group_index = match groups.iter().position(|g| g.stem == segment.stem) {
                Some(index) => index,
                None => {
                    groups.push(StemGroup {
                        stem: segment.stem,
                        buckets: Vec::new(),
                    });
                    groups.len() - 1
                }
            };

            // A suffix seen again keeps its bucket position but starts over
            let buckets = &mut groups[group_index].buckets;
            match buckets.iter_mut().find(|b| b.suffix == segment.suffix) {
                Some(bucket) => bucket.members = segment.members,
                None => buckets.push(Bucket {
                    suffix: segment.suffix,
                    members: segment.members,
                }),
            }
        }

        Self { groups }
    }

    pub fn groups(&self) -> &[StemGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Alias for `class_name`, or `None` when it cannot be resolved
    ///
    /// Hyphenated names collapse to the text before the first hyphen.
    /// Other names are looked up by bucket and position:
    /// `stem`, `stem-N`, `stem_extK`, `stem_extK-N`. When a name sits in
    /// several buckets the last one wins.
    pub fn alias_for(&self, class_name: &str) -> Option<String> {
        if let Some((stem, _)) = class_name.split_once('-') {
            return (!stem.is_empty()).then(|| stem.to_string());
        }

        self.groups
            .iter()
            .flat_map(|group| {
                group
                    .buckets
                    .iter()
                    .enumerate()
                    .filter_map(move |(bucket_index, bucket)| {
                        bucket
                            .members
                            .iter()
                            .position(|member| member == class_name)
                            .map(|member_index| format_alias(&group.stem, bucket_index, member_index))
                    })
            })
            .last()
    }
}

fn format_alias(stem: &str, bucket_index: usize, member_index: usize) -> String {
    match (bucket_index, member_index) {
        (0, 0) => stem.to_string(),
        (0, n) => format!("{}-{}", stem, n),
        (k, 0) => format!("{}_ext{}", stem, k),
        (k, n) => format!("{}_ext{}-{}", stem, k, n),
    }
}
