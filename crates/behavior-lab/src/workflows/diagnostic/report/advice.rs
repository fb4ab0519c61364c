use super::super::domain::Domain;
use super::views::{OverallTier, Tier};

pub(crate) fn domain_advice(domain: Domain, tier: Tier) -> &'static str {
    match (domain, tier) {
        (Domain::DecisionMaking, Tier::High) => {
            "根拠にもとづく判断が組織に根づいています。判断基準を言語化してチームに共有し、メンバー自身が同じ質で決められる状態を目指しましょう。"
        }
        (Domain::DecisionMaking, Tier::Mid) => {
            "判断の型はできつつあります。重要な意思決定では選択肢を最低3つ書き出し、事前に評価基準を決めてから比較する習慣を取り入れましょう。"
        }
        (Domain::DecisionMaking, Tier::Low) => {
            "直感や前例に頼った判断が多い傾向です。まずは週に一度、主要な決定とその理由を記録し、結果と照らして振り返る時間を設けましょう。"
        }
        (Domain::HabitDesign, Tier::High) => {
            "望ましい行動を支える仕組みが機能しています。成功している習慣をテンプレート化し、新しいメンバーのオンボーディングに組み込みましょう。"
        }
        (Domain::HabitDesign, Tier::Mid) => {
            "習慣化の意識はありますが定着にばらつきがあります。行動のきっかけを既存のルーティンに結びつけ、最初の一歩をできるだけ小さく設計しましょう。"
        }
        (Domain::HabitDesign, Tier::Low) => {
            "良い行動が個人の意志に依存しています。続けたい行動をひとつに絞り、毎日同じ時間と場所で実行できるトリガーを用意することから始めましょう。"
        }
        (Domain::Communication, Tier::High) => {
            "心理的安全性の高い対話ができています。異なる意見を歓迎する場を意図的に増やし、議論の質をさらに高めましょう。"
        }
        (Domain::Communication, Tier::Mid) => {
            "情報共有はできていますが、本音が出にくい場面があるかもしれません。会議の冒頭で目的とゴールを共有し、発言の少ないメンバーに意見を求める工夫をしましょう。"
        }
        (Domain::Communication, Tier::Low) => {
            "意見や懸念が表に出にくい状態です。1on1を定例化し、まずは上司側が傾聴と感謝を言葉にすることで安心して話せる土台をつくりましょう。"
        }
        (Domain::Leadership, Tier::High) => {
            "ビジョンと行動が一致したリーダーシップが発揮されています。次世代のリーダー候補に権限を委ね、育成の機会をつくりましょう。"
        }
        (Domain::Leadership, Tier::Mid) => {
            "方向性は示せていますが、浸透には余地があります。方針を具体的な行動例に落とし込み、メンバーの強みに合わせた任せ方を意識しましょう。"
        }
        (Domain::Leadership, Tier::Low) => {
            "ビジョンや期待がメンバーに十分伝わっていない可能性があります。チームの目的を一文で言語化し、定期的に繰り返し伝えることから始めましょう。"
        }
        (Domain::Motivation, Tier::High) => {
            "メンバーが意義と裁量を感じながら働けています。成長実感を高めるため、挑戦的な目標と学習の機会を組み合わせましょう。"
        }
        (Domain::Motivation, Tier::Mid) => {
            "意欲はあるものの、承認や意味づけが不足している場面があります。成果だけでなくプロセスへのフィードバックをこまめに伝えましょう。"
        }
        (Domain::Motivation, Tier::Low) => {
            "仕事の意義や裁量が感じにくい状態です。業務が顧客や社会にどうつながるかを共有し、小さな裁量から任せてみましょう。"
        }
        (Domain::EnvironmentDesign, Tier::High) => {
            "行動を後押しする環境が整っています。デフォルト設定や導線の効果を定期的に測定し、継続的に改善しましょう。"
        }
        (Domain::EnvironmentDesign, Tier::Mid) => {
            "環境づくりに取り組めていますが、まだ摩擦が残っています。よく使う情報やツールへのアクセス手順を見直し、迷う場面を減らしましょう。"
        }
        (Domain::EnvironmentDesign, Tier::Low) => {
            "環境が望ましい行動の妨げになっている可能性があります。集中を妨げる要因を洗い出し、望ましい選択がデフォルトになる仕組みを設計しましょう。"
        }
    }
}

pub(crate) fn overall_comment(tier: OverallTier) -> &'static str {
    match tier {
        OverallTier::Excellent => {
            "組織行動の土台が非常に高いレベルで整っています。強みを仕組みとして言語化し、組織全体へ展開することでさらなる成果につなげられます。"
        }
        OverallTier::Good => {
            "全体としてバランスよく整っています。スコアの低い領域に焦点を当てて改善を進めることで、チームの力を一段と引き出せるでしょう。"
        }
        OverallTier::Developing => {
            "いくつかの領域に伸びしろがあります。まずは最もスコアの低い領域からひとつ施策を選び、小さく試して効果を確かめていきましょう。"
        }
        OverallTier::NeedsAttention => {
            "組織行動の仕組みづくりはこれからの段階です。行動科学の基本に立ち返り、専門家と一緒に優先順位を整理することをおすすめします。"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_domain_and_tier_has_distinct_advice() {
        let mut seen = HashSet::new();
        for domain in Domain::ordered() {
            for tier in [Tier::High, Tier::Mid, Tier::Low] {
                let advice = domain_advice(domain, tier);
                assert!(!advice.is_empty());
                assert!(seen.insert(advice), "advice for {domain:?}/{tier:?} is duplicated");
            }
        }
        assert_eq!(seen.len(), 18);
    }
}
