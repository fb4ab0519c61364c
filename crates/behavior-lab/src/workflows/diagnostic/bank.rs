use super::domain::{AnswerSheet, DiagnosticError, Domain, LikertScore, Question, QuestionId};
use serde::Serialize;

const fn question(id: u32, domain: Domain, text: &'static str) -> Question {
    Question {
        id: QuestionId(id),
        domain,
        text,
    }
}

const STANDARD_QUESTIONS: [Question; 18] = [
    question(
        1,
        Domain::DecisionMaking,
        "重要な判断をする前に、複数の選択肢を並べて比較している",
    ),
    question(
        2,
        Domain::DecisionMaking,
        "思い込みや感情に流されず、データや根拠にもとづいて決めている",
    ),
    question(
        3,
        Domain::DecisionMaking,
        "決めたことを振り返り、次の意思決定に活かしている",
    ),
    question(
        4,
        Domain::HabitDesign,
        "望ましい行動が自然に続くよう、きっかけや仕組みを用意している",
    ),
    question(
        5,
        Domain::HabitDesign,
        "新しい習慣は小さなステップから始めるようにしている",
    ),
    question(
        6,
        Domain::HabitDesign,
        "チームの良い習慣を定着させるための振り返りの場がある",
    ),
    question(
        7,
        Domain::Communication,
        "相手の立場や背景を踏まえて、伝え方を工夫している",
    ),
    question(
        8,
        Domain::Communication,
        "メンバーが安心して意見や懸念を口にできる雰囲気がある",
    ),
    question(
        9,
        Domain::Communication,
        "会議や報告の目的とゴールが事前に共有されている",
    ),
    question(
        10,
        Domain::Leadership,
        "メンバーがビジョンや方針を自分の言葉で説明できる",
    ),
    question(
        11,
        Domain::Leadership,
        "メンバーの強みを理解し、仕事の任せ方に活かしている",
    ),
    question(
        12,
        Domain::Leadership,
        "自ら率先して行動し、周囲の手本になっている",
    ),
    question(
        13,
        Domain::Motivation,
        "メンバーが仕事の意義や目的を実感できている",
    ),
    question(
        14,
        Domain::Motivation,
        "成果や努力が適切に承認され、フィードバックされている",
    ),
    question(
        15,
        Domain::Motivation,
        "メンバーが自分で工夫し選択できる裁量がある",
    ),
    question(
        16,
        Domain::EnvironmentDesign,
        "集中すべき仕事に取り組みやすい物理的・デジタル環境が整っている",
    ),
    question(
        17,
        Domain::EnvironmentDesign,
        "望ましい行動を選びやすくするデフォルトや導線を設計している",
    ),
    question(
        18,
        Domain::EnvironmentDesign,
        "必要な情報やツールが整理され、すぐにアクセスできる",
    ),
];

/// Ordered, immutable set of diagnostic questions grouped by domain.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

/// Position of a question within the domain step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainStep {
    pub domain: Domain,
    pub domain_label: &'static str,
    /// 1-based step number.
    pub step: usize,
    pub total_steps: usize,
}

impl QuestionBank {
    pub const QUESTIONS_PER_DOMAIN: usize = 3;

    pub fn standard() -> Self {
        Self {
            questions: STANDARD_QUESTIONS.to_vec(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions_for(&self, domain: Domain) -> impl Iterator<Item = &Question> + '_ {
        self.questions
            .iter()
            .filter(move |question| question.domain == domain)
    }

    pub fn step_for(&self, index: usize) -> Option<DomainStep> {
        self.question_at(index).map(|question| DomainStep {
            domain: question.domain,
            domain_label: question.domain.label(),
            step: question.domain.index() + 1,
            total_steps: Domain::COUNT,
        })
    }

    /// Validate raw `(question id, score)` pairs coming from outside the crate.
    pub fn answer_sheet<I>(&self, raw: I) -> Result<AnswerSheet, DiagnosticError>
    where
        I: IntoIterator<Item = (u32, i64)>,
    {
        let mut sheet = AnswerSheet::new();
        for (id, score) in raw {
            let id = QuestionId(id);
            if self.question(id).is_none() {
                return Err(DiagnosticError::UnknownQuestion { id });
            }
            sheet.record(id, LikertScore::new(score)?);
        }
        Ok(sheet)
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_bank_has_unique_sequential_ids() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.len(), 18);

        let ids: HashSet<QuestionId> = bank.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), 18);
        for (index, question) in bank.questions().iter().enumerate() {
            assert_eq!(question.id, QuestionId(index as u32 + 1));
        }
    }

    #[test]
    fn each_domain_owns_three_questions() {
        let bank = QuestionBank::standard();
        for domain in Domain::ordered() {
            assert_eq!(
                bank.questions_for(domain).count(),
                QuestionBank::QUESTIONS_PER_DOMAIN,
                "{domain:?} should own three questions"
            );
        }
    }

    #[test]
    fn question_order_follows_domain_order() {
        let bank = QuestionBank::standard();
        let domain_indices: Vec<usize> =
            bank.questions().iter().map(|q| q.domain.index()).collect();
        let mut sorted = domain_indices.clone();
        sorted.sort_unstable();
        assert_eq!(domain_indices, sorted);
    }

    #[test]
    fn step_indicator_tracks_domain() {
        let bank = QuestionBank::standard();
        let first = bank.step_for(0).expect("first step");
        assert_eq!(first.step, 1);
        assert_eq!(first.domain, Domain::DecisionMaking);

        let last = bank.step_for(17).expect("last step");
        assert_eq!(last.step, 6);
        assert_eq!(last.total_steps, 6);
        assert!(bank.step_for(18).is_none());
    }

    #[test]
    fn answer_sheet_validates_ids_and_scores() {
        let bank = QuestionBank::standard();
        let sheet = bank
            .answer_sheet([(1, 5), (18, 1)])
            .expect("valid answers");
        assert_eq!(sheet.len(), 2);

        assert_eq!(
            bank.answer_sheet([(19, 3)]),
            Err(DiagnosticError::UnknownQuestion { id: QuestionId(19) })
        );
        assert_eq!(
            bank.answer_sheet([(2, -1)]),
            Err(DiagnosticError::ScoreOutOfRange { score: -1 })
        );
    }
}
