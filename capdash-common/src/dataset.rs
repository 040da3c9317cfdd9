//! Dataset key namespace
//!
//! The storage bucket doubles as a labeled anomaly-detection dataset:
//!
//! ```text
//! {category}/{split}/{label}/{filename}
//! ```
//!
//! where `category` is the selected model name, `split` is `train` or
//! `test`, and `label` is `good` or an anomaly label. The conventional
//! layout trains on normal-only samples, so labeling routes
//! normal -> train/good and anomaly -> test/anomaly.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// Dataset partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Test,
}

impl Split {
    /// Canonical key path segment
    pub fn as_segment(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Split> {
        match segment {
            "train" => Some(Split::Train),
            "test" => Some(Split::Test),
            _ => None,
        }
    }
}

/// Sample label bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Good,
    Anomaly,
}

impl Label {
    /// Canonical key path segment
    pub fn as_segment(&self) -> &'static str {
        match self {
            Label::Good => "good",
            Label::Anomaly => "anomaly",
        }
    }

    /// Split a freshly labeled sample is routed to (normal-only training).
    pub fn target_split(&self) -> Split {
        match self {
            Label::Good => Split::Train,
            Label::Anomaly => Split::Test,
        }
    }
}

/// Build a storage key for one labeled sample.
///
/// Produces `{category}/{split}/{label}/{prefix}_{unix_seconds}.jpg`.
/// Uniqueness is only one-second granular: two uploads with the same
/// prefix in the same second collide and the later one overwrites the
/// earlier. Accepted limitation of the naming scheme.
pub fn build_key(category: &str, split: Split, label: Label, prefix: &str) -> String {
    let unix_seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!(
        "{}/{}/{}/{}_{}.jpg",
        category,
        split.as_segment(),
        label.as_segment(),
        prefix,
        unix_seconds
    )
}

/// Classify a storage key back into its (split, label) bucket.
///
/// Returns `None` for keys that do not fit the tracked layout:
/// - directory placeholders (trailing `/`) and keys with fewer than 4
///   segments;
/// - unknown split segments;
/// - `train/<non-good>` keys. Only good/anomaly buckets are tracked and
///   train holds normal samples only, so these fall through. Known
///   asymmetry of the layout, kept deliberately.
///
/// Under `test`, any non-`good` label segment counts as an anomaly,
/// including the `bad/<sub-label>/...` form with five or more segments.
pub fn classify_key(key: &str) -> Option<(Split, Label)> {
    if key.ends_with('/') {
        return None;
    }
    let segments: Vec<&str> = key.split('/').collect();
    if segments.len() < 4 {
        return None;
    }
    let split = Split::from_segment(segments[1])?;
    match (split, segments[2]) {
        (_, "good") => Some((split, Label::Good)),
        (Split::Test, _) => Some((Split::Test, Label::Anomaly)),
        (Split::Train, _) => None,
    }
}

/// Keys of one split, bucketed by label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitKeys {
    pub good: Vec<String>,
    pub anomaly: Vec<String>,
}

/// Read-only dataset summary reconstructed from a raw bucket listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStructure {
    pub train: SplitKeys,
    pub test: SplitKeys,
}

impl DatasetStructure {
    /// Bucket every conforming key; non-conforming keys are ignored.
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut structure = DatasetStructure::default();
        for key in keys {
            let Some((split, label)) = classify_key(&key) else {
                continue;
            };
            let split_keys = match split {
                Split::Train => &mut structure.train,
                Split::Test => &mut structure.test,
            };
            match label {
                Label::Good => split_keys.good.push(key),
                Label::Anomaly => split_keys.anomaly.push(key),
            }
        }
        structure
    }
}
