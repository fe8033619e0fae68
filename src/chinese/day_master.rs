//! 日元（日主）簡述

use super::Stem;

/// 無法識別日干時的回傳文本。
pub const UNKNOWN_DAY_MASTER: &str = "未知日元";

/// 依天干之序。
const DESCRIPTIONS: [&str; 10] = [
    "甲木日元：正直仁慈，进取心强，如大树般稳重。",
    "乙木日元：温柔含蓄，适应力强，如花草般柔韧。",
    "丙火日元：热情豪爽，积极乐观，如太阳般温暖。",
    "丁火日元：细腻温和，富有同情心，如烛火般照亮他人。",
    "戊土日元：诚实厚重，沉稳踏实，如高山般可靠。",
    "己土日元：包容涵养，多才多艺，如田园般滋养万物。",
    "庚金日元：刚毅果断，讲义气，如刀剑般锋利。",
    "辛金日元：温润秀气，重感情，如珠宝般珍贵。",
    "壬水日元：聪明机智，宽宏大度，如江河般奔流不息。",
    "癸水日元：平静柔和，内敛深沉，如雨露般润泽万物。",
];

/// 取得日干的日元簡述。
///
/// # 用例
///
/// ```
/// use bazi::chinese::Stem;
/// use bazi::chinese::day_master::describe_day_master;
///
/// assert!(describe_day_master(Stem::Wu).starts_with("戊土日元"));
/// ```
pub fn describe_day_master(day_stem: Stem) -> &'static str {
    DESCRIPTIONS[day_stem.index()]
}

/// 同 [`describe_day_master`]，日干取自日柱文本首字，無法識別時返回
/// [`UNKNOWN_DAY_MASTER`]。
pub fn describe_day_master_text(day_pillar: &str) -> &'static str {
    day_pillar
        .chars()
        .next()
        .and_then(Stem::from_char)
        .map_or(UNKNOWN_DAY_MASTER, describe_day_master)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_stem_described() {
        for stem in Stem::ALL {
            let text = describe_day_master(stem);
            assert!(text.starts_with(stem.symbol()), "{text}");
            assert!(text.contains(stem.element().symbol()), "{text}");
        }
    }

    #[test]
    fn text_lookup() {
        assert_eq!(describe_day_master(Stem::Gui), describe_day_master_text("癸亥"));
        assert_eq!(describe_day_master(Stem::Jia), describe_day_master_text("甲"));
        for text in ["", "子丑", "x"] {
            assert_eq!(UNKNOWN_DAY_MASTER, describe_day_master_text(text), "{text:?}");
        }
    }
}
