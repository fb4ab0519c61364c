use super::domain::{Member, MemberId, MemberTag};
use chrono::NaiveDate;

fn tag(id: &str, label: &str) -> MemberTag {
    MemberTag {
        id: id.to_string(),
        label: label.to_string(),
    }
}

struct SeedMember {
    id: &'static str,
    name: &'static str,
    job_title: &'static str,
    role_title: &'static str,
    headline: &'static str,
    services_summary: &'static str,
    tags: &'static [(&'static str, &'static str)],
    joined_on: (i32, u32, u32),
}

const SEED_MEMBERS: [SeedMember; 6] = [
    SeedMember {
        id: "m-001",
        name: "佐藤 健一",
        job_title: "経営コンサルタント",
        role_title: "代表取締役",
        headline: "行動科学で中小企業の組織変革を支援",
        services_summary: "組織診断、経営戦略の立案、管理職向け研修",
        tags: &[("management", "経営"), ("hr", "人材育成")],
        joined_on: (2023, 4, 1),
    },
    SeedMember {
        id: "m-002",
        name: "鈴木 美咲",
        job_title: "不動産投資アドバイザー",
        role_title: "取締役",
        headline: "不動産を活用した堅実な資産形成をサポート",
        services_summary: "不動産投資の相談、物件選定、収益シミュレーション",
        tags: &[("real_estate", "不動産"), ("finance", "財務・資金調達")],
        joined_on: (2023, 6, 15),
    },
    SeedMember {
        id: "m-003",
        name: "高橋 直樹",
        job_title: "Webマーケター",
        role_title: "マーケティング責任者",
        headline: "データドリブンな集客でEC売上を伸ばす",
        services_summary: "広告運用、SEO対策、SNSマーケティング",
        tags: &[("marketing", "マーケティング"), ("it", "IT・DX")],
        joined_on: (2023, 9, 1),
    },
    SeedMember {
        id: "m-004",
        name: "田中 優子",
        job_title: "社会保険労務士",
        role_title: "所長",
        headline: "働きやすい職場づくりを制度面から支える",
        services_summary: "就業規則の作成、助成金申請、労務相談",
        tags: &[("hr", "人材育成"), ("legal", "法務・労務")],
        joined_on: (2024, 1, 10),
    },
    SeedMember {
        id: "m-005",
        name: "伊藤 大輔",
        job_title: "ITコンサルタント",
        role_title: "CTO",
        headline: "業務のDX化で生産性向上を実現",
        services_summary: "システム導入支援、業務効率化、クラウド移行",
        tags: &[("it", "IT・DX"), ("management", "経営")],
        joined_on: (2024, 3, 22),
    },
    SeedMember {
        id: "m-006",
        name: "渡辺 さくら",
        job_title: "ブランディングディレクター",
        role_title: "クリエイティブディレクター",
        headline: "共感を生むブランドストーリーを設計",
        services_summary: "ブランド戦略、ロゴ・Webデザイン、広報支援",
        tags: &[("marketing", "マーケティング"), ("branding", "ブランディング")],
        joined_on: (2024, 5, 8),
    },
];

/// The six published members the directory ships with.
pub fn seed_members() -> Vec<Member> {
    SEED_MEMBERS
        .iter()
        .filter_map(|seed| {
            let (year, month, day) = seed.joined_on;
            let joined_on = NaiveDate::from_ymd_opt(year, month, day)?;
            Some(Member {
                id: MemberId(seed.id.to_string()),
                name: seed.name.to_string(),
                job_title: seed.job_title.to_string(),
                role_title: seed.role_title.to_string(),
                headline: seed.headline.to_string(),
                services_summary: seed.services_summary.to_string(),
                tags: seed.tags.iter().map(|(id, label)| tag(id, label)).collect(),
                joined_on,
                published: true,
            })
        })
        .collect()
}
