// src/models.rs
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// The ten heavenly stems 天干, in cycle order (甲 = 0 .. 癸 = 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All ten stems in cycle order, for index lookups.
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// 0-based cycle index (甲 = 0 .. 癸 = 9).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: i64) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Parse the glyph form; `None` for anything that is not one of the ten.
    pub fn from_glyph(s: &str) -> Option<Self> {
        ALL_STEMS.iter().copied().find(|stem| stem.glyph() == s)
    }

    pub const fn element(self) -> FiveElement {
        match self {
            Self::Jia | Self::Yi => FiveElement::Wood,
            Self::Bing | Self::Ding => FiveElement::Fire,
            Self::Wu | Self::Ji => FiveElement::Earth,
            Self::Geng | Self::Xin => FiveElement::Metal,
            Self::Ren | Self::Gui => FiveElement::Water,
        }
    }

    /// Yang stems sit at even cycle indices (甲丙戊庚壬).
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }
}

impl Serialize for HeavenlyStem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.glyph())
    }
}

/// The twelve earthly branches 地支, in cycle order (子 = 0 .. 亥 = 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    WuHorse,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in cycle order.
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::WuHorse,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// 0-based cycle index (子 = 0 .. 亥 = 11).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::WuHorse => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    pub fn from_glyph(s: &str) -> Option<Self> {
        ALL_BRANCHES.iter().copied().find(|b| b.glyph() == s)
    }

    /// The branch six positions away (對沖).
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() as i64 + 6)
    }

    pub const fn element(self) -> FiveElement {
        match self {
            Self::Zi | Self::Hai => FiveElement::Water,
            Self::Yin | Self::Mao => FiveElement::Wood,
            Self::Si | Self::WuHorse => FiveElement::Fire,
            Self::Shen | Self::You => FiveElement::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => FiveElement::Earth,
        }
    }
}

impl Serialize for EarthlyBranch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.glyph())
    }
}

/// The five elements 五行.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiveElement {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

pub const ALL_ELEMENTS: [FiveElement; 5] = [
    FiveElement::Metal,
    FiveElement::Wood,
    FiveElement::Water,
    FiveElement::Fire,
    FiveElement::Earth,
];

impl FiveElement {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Metal => "金",
            Self::Wood => "木",
            Self::Water => "水",
            Self::Fire => "火",
            Self::Earth => "土",
        }
    }

    /// 相生: the element this one produces.
    pub const fn produces(self) -> Self {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// 相剋: the element this one controls.
    pub const fn controls(self) -> Self {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// The element that produces this one.
    pub const fn produced_by(self) -> Self {
        match self {
            Self::Fire => Self::Wood,
            Self::Earth => Self::Fire,
            Self::Metal => Self::Earth,
            Self::Water => Self::Metal,
            Self::Wood => Self::Water,
        }
    }

    /// The element that controls this one.
    pub const fn controlled_by(self) -> Self {
        match self {
            Self::Earth => Self::Wood,
            Self::Water => Self::Earth,
            Self::Fire => Self::Water,
            Self::Metal => Self::Fire,
            Self::Wood => Self::Metal,
        }
    }
}

impl Serialize for FiveElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.glyph())
    }
}

/// Occurrence counts of each element over the eight stem/branch symbols
/// of a chart. Always sums to 8 for a valid chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FiveElementsCount {
    #[serde(rename = "金")]
    pub metal: u8,
    #[serde(rename = "木")]
    pub wood: u8,
    #[serde(rename = "水")]
    pub water: u8,
    #[serde(rename = "火")]
    pub fire: u8,
    #[serde(rename = "土")]
    pub earth: u8,
}

impl FiveElementsCount {
    pub fn get(&self, element: FiveElement) -> u8 {
        match element {
            FiveElement::Metal => self.metal,
            FiveElement::Wood => self.wood,
            FiveElement::Water => self.water,
            FiveElement::Fire => self.fire,
            FiveElement::Earth => self.earth,
        }
    }

    pub fn add(&mut self, element: FiveElement) {
        match element {
            FiveElement::Metal => self.metal += 1,
            FiveElement::Wood => self.wood += 1,
            FiveElement::Water => self.water += 1,
            FiveElement::Fire => self.fire += 1,
            FiveElement::Earth => self.earth += 1,
        }
    }

    pub fn total(&self) -> u8 {
        self.metal + self.wood + self.water + self.fire + self.earth
    }
}

/// The ten gods 十神: a stem's relationship to the day master, by
/// production/control cycle crossed with yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    BiJian,
    JieCai,
    ShiShen,
    ShangGuan,
    PianCai,
    ZhengCai,
    QiSha,
    ZhengGuan,
    PianYin,
    ZhengYin,
}

impl TenGod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫財",
            Self::ShiShen => "食神",
            Self::ShangGuan => "傷官",
            Self::PianCai => "偏財",
            Self::ZhengCai => "正財",
            Self::QiSha => "七殺",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }
}

impl Serialize for TenGod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// One of the four temporal slots a pillar occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "時柱",
        }
    }
}

impl Serialize for PillarPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Marker classification, in sort order: 吉 < 中 < 凶.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShenShaType {
    Auspicious,
    Neutral,
    Inauspicious,
}

impl ShenShaType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auspicious => "吉",
            Self::Neutral => "中",
            Self::Inauspicious => "凶",
        }
    }
}

impl Serialize for ShenShaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Birth data as submitted by the caller. Immutable per request.
#[derive(Debug, Clone, Deserialize)]
pub struct BirthInfo {
    pub gender: Gender,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// City registry key; the default city is used when absent.
    #[serde(default)]
    pub city: Option<String>,
}

/// Static city registry record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct City {
    pub name: &'static str,
    pub key: &'static str,
    /// Decimal degrees, east-positive.
    pub longitude: f64,
    /// IANA timezone identifier.
    pub iana: &'static str,
}

/// One stem-branch pair with its derived annotations.
#[derive(Debug, Clone, Serialize)]
pub struct Pillar {
    pub heavenly_stem: HeavenlyStem,
    pub earthly_branch: EarthlyBranch,
    pub hidden_stems: Vec<HeavenlyStem>,
    pub nayin: Option<&'static str>,
    /// Relationship of this pillar's stem to the day master; always `None`
    /// on the day pillar itself.
    pub ten_god: Option<TenGod>,
    /// One entry per hidden stem, in hidden-stem order.
    pub hidden_stem_ten_gods: Vec<TenGod>,
}

/// Corrected civil time plus the correction metadata that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct TrueSolarTimeResult {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub is_dst: bool,
    pub dst_offset_minutes: i64,
    pub longitude_offset_minutes: f64,
    pub equation_of_time_minutes: f64,
    pub utc_time: DateTime<Utc>,
    pub mean_solar_time: DateTime<FixedOffset>,
    pub true_solar_time: DateTime<FixedOffset>,
}

/// One emitted marker. `positions` is never empty: a rule with no matching
/// pillar emits nothing at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaZiShenSha {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub shen_sha_type: ShenShaType,
    pub description: &'static str,
    pub positions: Vec<PillarPosition>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayMasterInfo {
    pub stem: HeavenlyStem,
    pub element: FiveElement,
    /// e.g. "甲木".
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayMasterStrength {
    pub is_strong: bool,
    pub same_type_count: u8,
    pub different_type_count: u8,
    pub strength_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavorableElements {
    pub favorable: Vec<FiveElement>,
    pub unfavorable: Vec<FiveElement>,
    pub explanation: String,
}

/// The aggregated calculation result handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct BaZiResult {
    pub solar_date: String,
    pub lunar_date: String,
    pub year_pillar: Pillar,
    pub month_pillar: Pillar,
    pub day_pillar: Pillar,
    pub hour_pillar: Pillar,
    pub gender: Gender,
    pub five_elements: FiveElementsCount,
    pub missing_elements: Vec<FiveElement>,
    pub strongest_elements: Vec<FiveElement>,
    pub day_master: DayMasterInfo,
    pub day_master_strength: DayMasterStrength,
    pub favorable_elements: FavorableElements,
    pub shen_sha: Vec<BaZiShenSha>,
    pub true_solar_time: TrueSolarTimeResult,
}
