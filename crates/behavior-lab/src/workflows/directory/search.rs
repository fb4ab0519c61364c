use super::domain::{Member, MemberId, MemberTag};
use super::seed::seed_members;
use std::collections::HashSet;

/// Filter published members by free text and tags.
///
/// The query is matched case-insensitively as a substring of any searchable
/// field; surrounding whitespace is ignored and an empty query matches
/// everyone. When tags are selected a member must carry at least one of them.
/// Both filters must pass.
pub fn search_members<'a>(
    members: &'a [Member],
    query: &str,
    selected_tag_ids: &[String],
) -> Vec<&'a Member> {
    let needle = query.trim().to_lowercase();

    members
        .iter()
        .filter(|member| member.published)
        .filter(|member| {
            needle.is_empty()
                || member
                    .searchable_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .filter(|member| selected_tag_ids.is_empty() || member.has_any_tag(selected_tag_ids))
        .collect()
}

/// In-memory member directory. Read-only once built.
#[derive(Debug, Clone)]
pub struct MemberDirectory {
    members: Vec<Member>,
}

impl MemberDirectory {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub fn seeded() -> Self {
        Self::new(seed_members())
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn published(&self) -> impl Iterator<Item = &Member> + '_ {
        self.members.iter().filter(|member| member.published)
    }

    pub fn search(&self, query: &str, selected_tag_ids: &[String]) -> Vec<&Member> {
        search_members(&self.members, query, selected_tag_ids)
    }

    pub fn find(&self, id: &MemberId) -> Option<&Member> {
        self.published().find(|member| &member.id == id)
    }

    /// Distinct tags across published members, in first-seen order.
    pub fn tags(&self) -> Vec<MemberTag> {
        let mut seen = HashSet::new();
        self.published()
            .flat_map(|member| member.tags.iter())
            .filter(|tag| seen.insert(tag.id.clone()))
            .cloned()
            .collect()
    }
}

impl Default for MemberDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}
