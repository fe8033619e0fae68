//! 干支、生肖等符號表及格式化

/// 十天干，第 `0..=9` 項分別為甲到癸。
pub const STEMS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

/// 十二地支，第 `0..=11` 項分別為子到亥。
pub const BRANCHES: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

/// 十二生肖，與地支同序。
pub const ANIMALS: [char; 12] = [
    '鼠', '牛', '虎', '兔', '龙', '蛇', '马', '羊', '猴', '鸡', '狗', '猪',
];

pub(crate) const STEM_PINYIN: [&str; 10] = [
    "jia", "yi", "bing", "ding", "wu", "ji", "geng", "xin", "ren", "gui",
];

pub(crate) const BRANCH_PINYIN: [&str; 12] = [
    "zi", "chou", "yin", "mao", "chen", "si", "wu", "wei", "shen", "you", "xu", "hai",
];

/// 依序號取天干，序號可為任意整數，按 10 取模。
///
/// # 用例
///
/// ```
/// use bazi::chinese::fmt;
///
/// assert_eq!('甲', fmt::stem_symbol(0));
/// assert_eq!('癸', fmt::stem_symbol(-1));
/// ```
pub fn stem_symbol(index: i64) -> char {
    STEMS[index.rem_euclid(10) as usize]
}

/// 依序號取地支，序號可為任意整數，按 12 取模。
///
/// # 用例
///
/// ```
/// use bazi::chinese::fmt;
///
/// assert_eq!('子', fmt::branch_symbol(12));
/// assert_eq!('亥', fmt::branch_symbol(-1));
/// ```
pub fn branch_symbol(index: i64) -> char {
    BRANCHES[index.rem_euclid(12) as usize]
}

/// 干支序號轉為文本形式，`1..=60` 分別為甲子到癸亥。
///
/// # 用例
///
/// ```
/// use bazi::chinese;
///
/// assert_eq!("乙巳", chinese::fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    let idx = i64::from(num) - 1;
    [stem_symbol(idx), branch_symbol(idx)].iter().collect()
}
