use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub String);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberTag {
    pub id: String,
    pub label: String,
}

/// Directory profile of a referred community member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub job_title: String,
    pub role_title: String,
    pub headline: String,
    pub services_summary: String,
    pub tags: Vec<MemberTag>,
    pub joined_on: NaiveDate,
    /// Unpublished profiles are never returned by search.
    pub published: bool,
}

impl Member {
    /// Free-text fields consulted by the directory search.
    pub fn searchable_fields(&self) -> [&str; 5] {
        [
            &self.name,
            &self.job_title,
            &self.role_title,
            &self.headline,
            &self.services_summary,
        ]
    }

    pub fn has_any_tag(&self, tag_ids: &[String]) -> bool {
        self.tags
            .iter()
            .any(|tag| tag_ids.iter().any(|selected| selected == &tag.id))
    }
}
