use behavior_lab::workflows::directory::{search_members, MemberDirectory, MemberId};
use proptest::prelude::*;

const TAG_IDS: [&str; 9] = [
    "management",
    "hr",
    "real_estate",
    "finance",
    "marketing",
    "it",
    "legal",
    "branding",
    "unknown",
];

fn tags(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

fn ids(members: &[&behavior_lab::workflows::directory::Member]) -> Vec<String> {
    members.iter().map(|member| member.id.to_string()).collect()
}

#[test]
fn keyword_finds_the_real_estate_advisor() {
    let directory = MemberDirectory::seeded();
    let found = directory.search("不動産", &[]);

    assert_eq!(ids(&found), vec!["m-002"]);
    assert_eq!(found[0].job_title, "不動産投資アドバイザー");
}

#[test]
fn keyword_and_tags_must_both_match() {
    let directory = MemberDirectory::seeded();

    let marketing = directory.search("", &tags(&["marketing"]));
    assert_eq!(ids(&marketing), vec!["m-003", "m-006"]);

    let narrowed = directory.search("ブランド", &tags(&["marketing"]));
    assert_eq!(ids(&narrowed), vec!["m-006"]);

    let mismatch = directory.search("不動産", &tags(&["marketing"]));
    assert!(mismatch.is_empty());
}

#[test]
fn selected_tags_are_alternatives() {
    let directory = MemberDirectory::seeded();
    let found = directory.search("", &tags(&["legal", "real_estate"]));
    assert_eq!(ids(&found), vec!["m-002", "m-004"]);
}

#[test]
fn keyword_matching_ignores_case_and_padding() {
    let directory = MemberDirectory::seeded();
    assert_eq!(ids(&directory.search("  seo ", &[])), vec!["m-003"]);
    assert_eq!(ids(&directory.search("cto", &[])), vec!["m-005"]);
}

#[test]
fn unpublished_members_stay_hidden() {
    let mut members = MemberDirectory::seeded().members().to_vec();
    members[1].published = false;
    let directory = MemberDirectory::new(members);

    assert!(directory.search("不動産", &[]).is_empty());
    assert!(directory.find(&MemberId("m-002".to_string())).is_none());
    assert!(directory.tags().iter().all(|tag| tag.id != "real_estate"));
}

#[test]
fn tag_catalog_lists_each_tag_once() {
    let directory = MemberDirectory::seeded();
    let catalog: Vec<String> = directory.tags().into_iter().map(|tag| tag.id).collect();
    assert_eq!(catalog, tags(&TAG_IDS[..8]));
}

proptest! {
    #[test]
    fn adding_filters_never_widens_results(
        query in prop::sample::select(vec!["", "不動産", "マーケ", "支援", "dx", "xyz"]),
        selected in prop::sample::subsequence(TAG_IDS.to_vec(), 0..=3)
    ) {
        let directory = MemberDirectory::seeded();
        let members = directory.members();
        let selected = tags(&selected);

        let everyone = search_members(members, "", &[]);
        let by_query = search_members(members, query, &[]);
        let by_both = search_members(members, query, &selected);

        prop_assert!(by_query.len() <= everyone.len());
        prop_assert!(by_both.len() <= by_query.len());
        for member in &by_both {
            prop_assert!(by_query.iter().any(|other| other.id == member.id));
            prop_assert!(selected.is_empty() || member.has_any_tag(&selected));
        }
    }

    #[test]
    fn search_results_keep_directory_order(query in "\\PC{0,4}") {
        let directory = MemberDirectory::seeded();
        let positions: Vec<usize> = directory
            .search(&query, &[])
            .iter()
            .filter_map(|found| directory.members().iter().position(|m| m.id == found.id))
            .collect();

        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
