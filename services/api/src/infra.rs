use behavior_lab::config::DirectoryConfig;
use behavior_lab::error::AppError;
use behavior_lab::workflows::directory::MemberDirectory;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Comma-separated diagnostic answers given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnswerList(pub(crate) Vec<u8>);

pub(crate) fn parse_answer_list(raw: &str) -> Result<AnswerList, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            value
                .parse::<u8>()
                .map_err(|err| format!("'{value}' is not an answer between 1 and 5 ({err})"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(AnswerList)
}

pub(crate) fn load_directory(config: &DirectoryConfig) -> Result<MemberDirectory, AppError> {
    match &config.roster_csv {
        Some(path) => load_directory_from(path),
        None => Ok(MemberDirectory::seeded()),
    }
}

pub(crate) fn load_directory_from(path: &Path) -> Result<MemberDirectory, AppError> {
    Ok(MemberDirectory::from_path(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_answers() {
        assert_eq!(
            parse_answer_list("4, 5,3,,1"),
            Ok(AnswerList(vec![4, 5, 3, 1]))
        );
        assert!(parse_answer_list("4,five").is_err());
    }

    #[test]
    fn falls_back_to_seeded_directory() {
        let directory = load_directory(&DirectoryConfig::default()).expect("seeded directory");
        assert_eq!(directory.members().len(), 6);
    }

    #[test]
    fn missing_roster_file_is_reported() {
        let config = DirectoryConfig {
            roster_csv: Some("/nonexistent/members.csv".into()),
        };
        assert!(matches!(
            load_directory(&config),
            Err(AppError::Directory(_))
        ));
    }
}
