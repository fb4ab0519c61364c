use crate::infra::{parse_answer_list, AnswerList};
use behavior_lab::error::AppError;
use behavior_lab::workflows::diagnostic::{
    build_report, DiagnosticError, DiagnosticReport, DiagnosticSession, QuestionBank,
};
use clap::Args;
use std::io::{self, BufRead, Write};

#[derive(Args, Debug, Default)]
pub(crate) struct DiagnoseArgs {
    /// Comma-separated answers (1-5) in question order. Unlisted questions count as 3.
    /// Prompts interactively when omitted.
    #[arg(long, value_parser = parse_answer_list)]
    pub(crate) answers: Option<AnswerList>,
}

pub(crate) fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = match args.answers {
        Some(AnswerList(answers)) => Some(scripted_report(&QuestionBank::standard(), &answers)?),
        None => {
            let mut session = DiagnosticSession::standard();
            let stdin = io::stdin();
            run_interactive(&mut session, stdin.lock(), &mut out)?
        }
    };

    match report {
        Some(report) => render_report(&report, &mut out)?,
        None => writeln!(out, "\n診断を中断しました。")?,
    }
    Ok(())
}

/// Score answers given in question order without walking the session.
pub(crate) fn scripted_report(
    bank: &QuestionBank,
    answers: &[u8],
) -> Result<DiagnosticReport, AppError> {
    let raw = answers
        .iter()
        .enumerate()
        .map(|(index, score)| (index as u32 + 1, i64::from(*score)));
    let sheet = bank.answer_sheet(raw)?;
    Ok(build_report(&sheet, bank))
}

/// Walk the session on a line-oriented terminal: `1`-`5` answers, `b` goes
/// back, `q` quits. Returns `None` when the user quits or input ends early.
pub(crate) fn run_interactive<R, W>(
    session: &mut DiagnosticSession,
    input: R,
    out: &mut W,
) -> Result<Option<DiagnosticReport>, AppError>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    session.start();

    writeln!(out, "組織行動診断 ({}問)", session.bank().len())?;
    writeln!(out, "各設問に 1 (あてはまらない) から 5 (とてもあてはまる) で回答してください。")?;

    while let Some(question) = session.current_question().copied() {
        if let Some(step) = session.current_step() {
            writeln!(
                out,
                "\n[{}/{}] {}  Q{}. {}",
                step.step, step.total_steps, step.domain_label, question.id, question.text
            )?;
        }
        write!(out, "回答 (1-5, b=戻る, q=終了) > ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;

        match line.trim() {
            "q" | "Q" => return Ok(None),
            "b" | "B" => {
                if !session.go_back() {
                    writeln!(out, "最初の設問です。")?;
                }
            }
            raw => match raw.parse::<u8>() {
                Ok(score) => match session.answer(question.id, score) {
                    Ok(_) => {}
                    Err(DiagnosticError::ScoreOutOfRange { .. }) => {
                        writeln!(out, "1から5の数字で回答してください。")?;
                    }
                    Err(err) => return Err(err.into()),
                },
                Err(_) => writeln!(out, "1から5の数字で回答してください。")?,
            },
        }
    }

    Ok(session.report())
}

pub(crate) fn render_report<W: Write>(report: &DiagnosticReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n総合スコア: {} ({})", report.overall_score, report.overall_label)?;
    writeln!(out, "{}", report.overall_comment)?;

    writeln!(out, "\n領域別スコア")?;
    for entry in &report.domains {
        let bar = "#".repeat(usize::from(entry.score / 5));
        writeln!(
            out,
            "- {:<12} {:>3} {:<20} [{}]",
            entry.label, entry.score, bar, entry.tier_label
        )?;
    }

    writeln!(out, "\nアドバイス")?;
    for entry in &report.domains {
        writeln!(out, "■ {}: {}", entry.label, entry.advice)?;
    }

    let strongest = report.domain(report.strongest_domain);
    let focus = report.domain(report.focus_domain);
    if let (Some(strongest), Some(focus)) = (strongest, focus) {
        writeln!(
            out,
            "\n強み: {} ({}) / 重点課題: {} ({})",
            strongest.label, strongest.score, focus.label, focus.score
        )?;
    }

    Ok(())
}
