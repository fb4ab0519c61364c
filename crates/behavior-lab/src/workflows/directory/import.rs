use super::domain::{Member, MemberId, MemberTag};
use super::search::MemberDirectory;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum DirectoryError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidDate { member: String, value: String },
    InvalidTag { member: String, value: String },
    DuplicateMember(String),
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryError::Io(err) => write!(f, "failed to read member roster: {}", err),
            DirectoryError::Csv(err) => write!(f, "invalid member roster CSV: {}", err),
            DirectoryError::InvalidDate { member, value } => write!(
                f,
                "member {} has joined_on '{}', expected YYYY-MM-DD",
                member, value
            ),
            DirectoryError::InvalidTag { member, value } => write!(
                f,
                "member {} has tag '{}', expected id:label",
                member, value
            ),
            DirectoryError::DuplicateMember(id) => {
                write!(f, "member {} appears more than once in the roster", id)
            }
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectoryError::Io(err) => Some(err),
            DirectoryError::Csv(err) => Some(err),
            DirectoryError::InvalidDate { .. }
            | DirectoryError::InvalidTag { .. }
            | DirectoryError::DuplicateMember(_) => None,
        }
    }
}

impl From<std::io::Error> for DirectoryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DirectoryError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One roster row. Tags are `id:label` pairs separated by `|`.
#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    name: String,
    #[serde(default)]
    job_title: String,
    #[serde(default)]
    role_title: String,
    #[serde(default)]
    headline: String,
    #[serde(default)]
    services_summary: String,
    #[serde(default)]
    tags: String,
    joined_on: String,
    #[serde(default = "default_published", deserialize_with = "lenient_bool")]
    published: bool,
}

fn default_published() -> bool {
    true
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(value) => !matches!(
            value.to_ascii_lowercase().as_str(),
            "false" | "no" | "0" | "n"
        ),
    })
}

impl RosterRow {
    fn into_member(self) -> Result<Member, DirectoryError> {
        let joined_on = NaiveDate::parse_from_str(self.joined_on.trim(), "%Y-%m-%d").map_err(
            |_| DirectoryError::InvalidDate {
                member: self.id.clone(),
                value: self.joined_on.clone(),
            },
        )?;

        let tags = parse_tags(&self.id, &self.tags)?;

        Ok(Member {
            id: MemberId(self.id),
            name: self.name,
            job_title: self.job_title,
            role_title: self.role_title,
            headline: self.headline,
            services_summary: self.services_summary,
            tags,
            joined_on,
            published: self.published,
        })
    }
}

fn parse_tags(member: &str, raw: &str) -> Result<Vec<MemberTag>, DirectoryError> {
    raw.split('|')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((id, label)) if !id.trim().is_empty() && !label.trim().is_empty() => {
                Ok(MemberTag {
                    id: id.trim().to_string(),
                    label: label.trim().to_string(),
                })
            }
            _ => Err(DirectoryError::InvalidTag {
                member: member.to_string(),
                value: entry.to_string(),
            }),
        })
        .collect()
}

impl MemberDirectory {
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut members: Vec<Member> = Vec::new();
        for row in csv_reader.deserialize::<RosterRow>() {
            let member = row?.into_member()?;
            if members.iter().any(|existing| existing.id == member.id) {
                return Err(DirectoryError::DuplicateMember(member.id.0));
            }
            members.push(member);
        }

        Ok(Self::new(members))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let directory = Self::from_csv_reader(file)?;
        info!(
            path = %path.display(),
            members = directory.members().len(),
            "member roster imported"
        );
        Ok(directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "id,name,job_title,role_title,headline,services_summary,tags,joined_on,published\n";

    #[test]
    fn imports_roster_rows() {
        let csv = format!(
            "{HEADER}m-101,山本 翔,税理士,代表,中小企業の財務を支える,決算・税務相談,finance:財務|legal:法務,2024-07-01,true\n\
m-102,中村 彩,キャリアコーチ,講師,,1on1コーチング,hr:人材育成,2024-08-12,false\n"
        );

        let directory = MemberDirectory::from_csv_reader(csv.as_bytes()).expect("roster imports");
        assert_eq!(directory.members().len(), 2);

        let first = &directory.members()[0];
        assert_eq!(first.id, MemberId("m-101".to_string()));
        assert_eq!(first.tags.len(), 2);
        assert_eq!(first.tags[1].label, "法務");
        assert_eq!(
            first.joined_on,
            NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date")
        );
        assert!(first.published);
        assert!(!directory.members()[1].published);
        assert_eq!(directory.search("", &[]).len(), 1);
    }

    #[test]
    fn missing_published_column_defaults_to_visible() {
        let csv = "id,name,joined_on\nm-201,小林 誠,2024-02-02\n";
        let directory = MemberDirectory::from_csv_reader(csv.as_bytes()).expect("roster imports");
        assert!(directory.members()[0].published);
        assert!(directory.members()[0].tags.is_empty());
    }

    #[test]
    fn rejects_malformed_tags() {
        let csv = format!("{HEADER}m-301,加藤 仁,,,,,marketing,2024-01-01,true\n");
        match MemberDirectory::from_csv_reader(csv.as_bytes()) {
            Err(DirectoryError::InvalidTag { member, value }) => {
                assert_eq!(member, "m-301");
                assert_eq!(value, "marketing");
            }
            other => panic!("expected tag error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_dates_and_duplicates() {
        let csv = format!("{HEADER}m-401,吉田 恵,,,,,,01/02/2024,true\n");
        assert!(matches!(
            MemberDirectory::from_csv_reader(csv.as_bytes()),
            Err(DirectoryError::InvalidDate { .. })
        ));

        let csv = format!(
            "{HEADER}m-501,松本 亮,,,,,,2024-01-01,true\nm-501,松本 亮,,,,,,2024-01-01,true\n"
        );
        assert!(matches!(
            MemberDirectory::from_csv_reader(csv.as_bytes()),
            Err(DirectoryError::DuplicateMember(id)) if id == "m-501"
        ));
    }
}
