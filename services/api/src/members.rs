use crate::infra::load_directory_from;
use behavior_lab::error::AppError;
use behavior_lab::workflows::directory::{Member, MemberDirectory};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct MemberSearchArgs {
    /// Keyword matched against name, titles, headline, and services
    #[arg(long, short)]
    pub(crate) query: Option<String>,
    /// Tag id to filter by; repeat to match any of several tags
    #[arg(long = "tag", short)]
    pub(crate) tags: Vec<String>,
    /// Roster CSV to search instead of the built-in directory
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_member_search(args: MemberSearchArgs) -> Result<(), AppError> {
    let directory = match &args.csv {
        Some(path) => load_directory_from(path)?,
        None => MemberDirectory::seeded(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_search_results(&directory, &args, &mut out)?;
    Ok(())
}

pub(crate) fn write_search_results<W: Write>(
    directory: &MemberDirectory,
    args: &MemberSearchArgs,
    out: &mut W,
) -> io::Result<usize> {
    let query = args.query.as_deref().unwrap_or_default();
    let matches = directory.search(query, &args.tags);

    if matches.is_empty() {
        writeln!(out, "該当する会員が見つかりませんでした。")?;
        return Ok(0);
    }

    writeln!(out, "{}件の会員が見つかりました。", matches.len())?;
    for member in &matches {
        write_member(member, out)?;
    }
    Ok(matches.len())
}

fn write_member<W: Write>(member: &Member, out: &mut W) -> io::Result<()> {
    let tags = member
        .tags
        .iter()
        .map(|tag| tag.label.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(
        out,
        "\n[{}] {} ({} / {})",
        member.id, member.name, member.job_title, member.role_title
    )?;
    writeln!(out, "  {}", member.headline)?;
    writeln!(out, "  提供サービス: {}", member.services_summary)?;
    if !tags.is_empty() {
        writeln!(out, "  タグ: {}", tags)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: MemberSearchArgs) -> (usize, String) {
        let directory = MemberDirectory::seeded();
        let mut out = Vec::new();
        let count = write_search_results(&directory, &args, &mut out).expect("write succeeds");
        (count, String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn keyword_search_prints_matching_members() {
        let (count, text) = run(MemberSearchArgs {
            query: Some("不動産".to_string()),
            ..MemberSearchArgs::default()
        });

        assert_eq!(count, 1);
        assert!(text.contains("鈴木 美咲"));
        assert!(text.contains("1件の会員が見つかりました。"));
    }

    #[test]
    fn no_filters_lists_the_whole_directory() {
        let (count, _) = run(MemberSearchArgs::default());
        assert_eq!(count, MemberDirectory::seeded().published().count());
    }

    #[test]
    fn unmatched_search_reports_no_results() {
        let (count, text) = run(MemberSearchArgs {
            query: Some("存在しないキーワード".to_string()),
            tags: vec!["hr".to_string()],
            ..MemberSearchArgs::default()
        });

        assert_eq!(count, 0);
        assert!(text.contains("該当する会員が見つかりませんでした。"));
    }
}
