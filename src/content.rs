/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Site content: the data model for the three sections and the catalog the
//! server functions in `hooks` serve from. Components treat everything here
//! as an immutable snapshot.

use crate::language::Bilingual;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: Bilingual,
    pub phone: String,
    pub email: String,
    pub address: Bilingual,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: u32,
    pub question: Bilingual,
    pub answer: Bilingual,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: u32,
    /// Symbolic icon name, resolved against `icons::IconKind::from_name`.
    pub icon: Option<String>,
    pub name: Bilingual,
    /// Newline-delimited bullet lines.
    pub description: Bilingual,
}

pub fn company_info() -> CompanyInfo {
    CompanyInfo {
        name: Bilingual::new("サンライズソーラー株式会社", "日升太阳能株式会社"),
        phone: "03-1234-5678".to_string(),
        email: "info@sunrise-solar.jp".to_string(),
        address: Bilingual::new(
            "東京都千代田区丸の内1-2-3 サンライズビル5F",
            "东京都千代田区丸之内1-2-3 日升大厦5层",
        ),
    }
}

pub fn faqs() -> Vec<FaqItem> {
    vec![
        FaqItem {
            id: 1,
            question: Bilingual::new(
                "点検はどのくらいの頻度で行うべきですか？",
                "应该多久检查一次？",
            ),
            answer: Bilingual::new(
                "年2回（春・秋）の定期点検をおすすめしています。台風や大雪の後には臨時点検のご依頼も承ります。",
                "我们建议每年进行2次（春季・秋季）定期检查。台风或大雪过后也可以申请临时检查。",
            ),
        },
        FaqItem {
            id: 2,
            question: Bilingual::new("対応エリアを教えてください。", "服务范围覆盖哪些地区？"),
            answer: Bilingual::new(
                "東京・神奈川・埼玉・千葉の関東一円に対応しています。その他の地域もまずはご相談ください。",
                "服务范围覆盖东京・神奈川・埼玉・千叶等关东地区。其他地区也请先与我们联系。",
            ),
        },
        FaqItem {
            id: 3,
            question: Bilingual::new("費用の目安はどのくらいですか？", "费用大概是多少？"),
            answer: Bilingual::new(
                "定期点検は1回3万円から、パネル清掃は1枚500円からが目安です。設備の規模に応じて無料でお見積りします。",
                "定期检查每次3万日元起，面板清洗每块500日元起。我们会根据设备规模免费提供报价。",
            ),
        },
        FaqItem {
            id: 4,
            question: Bilingual::new(
                "パネルが故障した場合はどうすればいいですか？",
                "面板故障时该怎么办？",
            ),
            answer: Bilingual::new(
                "まずはお電話ください。現地調査のうえ、修理・交換とメーカー保証の申請まで一括で対応します。",
                "请先致电我们。现场调查后，从维修・更换到厂商保修申请都可以一并处理。",
            ),
        },
        FaqItem {
            id: 5,
            question: Bilingual::new("中国語での対応は可能ですか？", "可以用中文咨询吗？"),
            answer: Bilingual::new(
                "はい。中国語対応スタッフが在籍しており、お電話・メールとも中国語でご相談いただけます。",
                "可以。我们有中文服务人员，电话和邮件都可以用中文咨询。",
            ),
        },
    ]
}

pub fn services() -> Vec<ServiceItem> {
    vec![
        ServiceItem {
            id: 1,
            icon: Some("Search".to_string()),
            name: Bilingual::new("定期点検", "定期检查"),
            description: Bilingual::new(
                "年2回の定期点検\nパネル・配線の目視確認\n発電量レポートの提出",
                "每年2次定期检查\n面板与配线的目视检查\n提交发电量报告",
            ),
        },
        ServiceItem {
            id: 2,
            icon: Some("Droplets".to_string()),
            name: Bilingual::new("パネル清掃", "面板清洗"),
            description: Bilingual::new(
                "純水による高圧洗浄\n鳥害・汚れの除去\n発電効率の回復",
                "纯水高压清洗\n清除鸟害与污垢\n恢复发电效率",
            ),
        },
        ServiceItem {
            id: 3,
            icon: Some("Wrench".to_string()),
            name: Bilingual::new("修理・交換対応", "维修・更换"),
            description: Bilingual::new(
                "パワコン故障対応\nパネル交換の手配\nメーカー保証申請の代行",
                "逆变器故障处理\n安排面板更换\n代办厂商保修申请",
            ),
        },
        ServiceItem {
            id: 4,
            icon: Some("ShieldCheck".to_string()),
            name: Bilingual::new("保守契約", "维护合同"),
            description: Bilingual::new(
                "24時間の遠隔監視\nトラブル時の駆けつけ対応\n年次報告書の作成",
                "24小时远程监控\n故障时上门处理\n编制年度报告",
            ),
        },
        ServiceItem {
            id: 5,
            icon: Some("Zap".to_string()),
            name: Bilingual::new("発電量モニタリング", "发电量监测"),
            description: Bilingual::new(
                "遠隔監視システムの導入\n異常の早期検知\n月次レポートの配信",
                "引进远程监控系统\n及早发现异常\n发送月度报告",
            ),
        },
        ServiceItem {
            id: 6,
            icon: Some("Leaf".to_string()),
            name: Bilingual::new("除草・防草対策", "除草・防草措施"),
            description: Bilingual::new(
                "防草シートの施工\n定期的な除草作業\n影の原因となる樹木の剪定",
                "铺设防草布\n定期除草作业\n修剪造成阴影的树木",
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    #[test]
    fn catalog_is_fully_bilingual() {
        for faq in faqs() {
            assert!(!faq.question.get(Language::Ja).is_empty());
            assert!(!faq.question.get(Language::Zh).is_empty());
            assert!(!faq.answer.get(Language::Ja).is_empty());
            assert!(!faq.answer.get(Language::Zh).is_empty());
        }
        for service in services() {
            assert!(!service.name.get(Language::Zh).is_empty());
            assert!(!service.description.get(Language::Zh).is_empty());
        }
    }

    #[test]
    fn service_descriptions_are_bullet_lines() {
        for service in services() {
            assert!(service.description.get(Language::Ja).lines().count() > 1);
        }
    }
}
