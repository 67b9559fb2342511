use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Periodic note granularity understood by the Periodic Notes plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::Daily,
        Period::Weekly,
        Period::Monthly,
        Period::Quarterly,
        Period::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Quarterly => "quarterly",
            Period::Yearly => "yearly",
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid period: {}. Must be one of: {}",
                    s,
                    join_names(Period::ALL.iter().map(|p| p.as_str()))
                )
            })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Representation requested for a periodic note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteFormat {
    /// Raw markdown.
    #[default]
    Content,
    /// JSON with frontmatter, tags and file stats.
    Metadata,
}

impl NoteFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteFormat::Content => "content",
            NoteFormat::Metadata => "metadata",
        }
    }
}

impl FromStr for NoteFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content" => Ok(NoteFormat::Content),
            "metadata" => Ok(NoteFormat::Metadata),
            other => Err(format!(
                "Invalid type: {}. Must be one of: content, metadata",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOperation {
    Append,
    Prepend,
    Replace,
}

impl PatchOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchOperation::Append => "append",
            PatchOperation::Prepend => "prepend",
            PatchOperation::Replace => "replace",
        }
    }
}

impl FromStr for PatchOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "append" => Ok(PatchOperation::Append),
            "prepend" => Ok(PatchOperation::Prepend),
            "replace" => Ok(PatchOperation::Replace),
            other => Err(format!(
                "Invalid operation: {}. Must be one of: append, prepend, replace",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    Heading,
    Block,
    Frontmatter,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Heading => "heading",
            TargetType::Block => "block",
            TargetType::Frontmatter => "frontmatter",
        }
    }
}

impl FromStr for TargetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heading" => Ok(TargetType::Heading),
            "block" => Ok(TargetType::Block),
            "frontmatter" => Ok(TargetType::Frontmatter),
            other => Err(format!(
                "Invalid target_type: {}. Must be one of: heading, block, frontmatter",
                other
            )),
        }
    }
}

/// Where and how to insert content relative to an anchor inside a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSpec {
    pub operation: PatchOperation,
    pub target_type: TargetType,
    /// Heading path (`H1::H2`), block reference id or frontmatter field.
    pub target: String,
    pub content: String,
}

/// One file matched by a simple search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub matches: Vec<SearchMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    #[serde(default)]
    pub context: String,
    #[serde(default, rename = "match")]
    pub span: SearchSpan,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSpan {
    #[serde(default)]
    pub start: u64,
    #[serde(default)]
    pub end: u64,
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_parses_known_names() {
        for p in Period::ALL {
            assert_eq!(p.as_str().parse::<Period>().unwrap(), p);
        }
    }

    #[test]
    fn period_displays_as_path_segment() {
        assert_eq!(format!("/periodic/{}/", Period::Quarterly), "/periodic/quarterly/");
    }

    #[test]
    fn period_rejects_unknown_name() {
        let err = "hourly".parse::<Period>().unwrap_err();
        assert_eq!(
            err,
            "Invalid period: hourly. Must be one of: daily, weekly, monthly, quarterly, yearly"
        );
    }

    #[test]
    fn search_hit_tolerates_missing_fields() {
        let hit: SearchHit = serde_json::from_value(serde_json::json!({
            "filename": "a.md",
            "matches": [{"context": "abc"}]
        }))
        .unwrap();
        assert_eq!(hit.score, 0.0);
        assert_eq!(hit.matches[0].span, SearchSpan::default());
    }
}
