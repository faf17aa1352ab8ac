// src/services/shen_sha/mod.rs
//
// 神煞規則引擎。所有規則互相獨立，只讀四柱八字；查表型規則由
// `RuleKind` 驅動，組合型規則以自定函數求值。結果按吉、中、凶穩定排序。

mod tables;

use log::warn;

use crate::models::{
    BaZiShenSha, EarthlyBranch, HeavenlyStem, PillarPosition, ShenShaType, ALL_POSITIONS,
};
use crate::services::sexagenary::{void_branches, FourPillars, StemBranch};
use tables::*;

use EarthlyBranch::{Chen, Xu};
use PillarPosition::{Day, Hour, Month, Year};
use ShenShaType::{Auspicious, Inauspicious, Neutral};

/// Chart view the rules evaluate against: the eight symbols plus
/// position-indexed access helpers.
struct ChartContext {
    pillars: [StemBranch; 4],
}

impl ChartContext {
    fn new(pillars: &FourPillars) -> Self {
        Self { pillars: [pillars.year, pillars.month, pillars.day, pillars.hour] }
    }

    fn branches(&self) -> impl Iterator<Item = (EarthlyBranch, PillarPosition)> + '_ {
        self.pillars.iter().zip(ALL_POSITIONS).map(|(p, pos)| (p.branch, pos))
    }

    fn stems(&self) -> impl Iterator<Item = (HeavenlyStem, PillarPosition)> + '_ {
        self.pillars.iter().zip(ALL_POSITIONS).map(|(p, pos)| (p.stem, pos))
    }

    fn pillar(&self, position: PillarPosition) -> StemBranch {
        match position {
            Year => self.pillars[0],
            Month => self.pillars[1],
            Day => self.pillars[2],
            Hour => self.pillars[3],
        }
    }

    fn day_stem(&self) -> HeavenlyStem {
        self.pillars[2].stem
    }

    fn year_branch(&self) -> EarthlyBranch {
        self.pillars[0].branch
    }

    fn month_branch(&self) -> EarthlyBranch {
        self.pillars[1].branch
    }

    fn day_branch(&self) -> EarthlyBranch {
        self.pillars[2].branch
    }

    fn hour_branch(&self) -> EarthlyBranch {
        self.pillars[3].branch
    }

    fn branch_positions(&self, target: EarthlyBranch) -> Vec<PillarPosition> {
        self.branches().filter(|&(b, _)| b == target).map(|(_, p)| p).collect()
    }

    fn branch_positions_multi(&self, targets: &[EarthlyBranch]) -> Vec<PillarPosition> {
        self.branches().filter(|(b, _)| targets.contains(b)).map(|(_, p)| p).collect()
    }

    /// 同時以兩個目標查（桃花、驛馬等日支年支並查），柱位去重。
    fn branch_positions_dual(
        &self,
        first: Option<EarthlyBranch>,
        second: Option<EarthlyBranch>,
    ) -> Vec<PillarPosition> {
        let mut positions = Vec::new();
        for (branch, position) in self.branches() {
            if Some(branch) == first || Some(branch) == second {
                if !positions.contains(&position) {
                    positions.push(position);
                }
            }
        }
        positions
    }

    fn branch_positions_exclude(
        &self,
        target: EarthlyBranch,
        exclude: PillarPosition,
    ) -> Vec<PillarPosition> {
        self.branches()
            .filter(|&(b, p)| b == target && p != exclude)
            .map(|(_, p)| p)
            .collect()
    }

    fn stem_positions(&self, target: HeavenlyStem) -> Vec<PillarPosition> {
        self.stems().filter(|&(s, _)| s == target).map(|(_, p)| p).collect()
    }

    fn branch_count(&self, target: EarthlyBranch) -> usize {
        self.branches().filter(|&(b, _)| b == target).count()
    }
}

fn lookup<K: PartialEq + Copy, V: Copy>(table: &[(K, V)], key: K) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// The structural shapes the lookup-driven rules share. Combinatorial rules
/// fall back to `Custom`.
enum RuleKind {
    /// 以日干查表，看四柱地支是否為目標支
    DayStemBranch(&'static [(HeavenlyStem, EarthlyBranch)]),
    /// 以日干查表，目標為一組地支
    DayStemBranchSet(&'static [(HeavenlyStem, &'static [EarthlyBranch])]),
    /// 以日支與年支並查（三合局表）
    DayYearBranch(&'static [(EarthlyBranch, EarthlyBranch)]),
    /// 以年支查表
    YearBranch { table: &'static [(EarthlyBranch, EarthlyBranch)], exclude_year: bool },
    /// 以日支查表
    DayBranch(&'static [(EarthlyBranch, EarthlyBranch)]),
    /// 以月支查表，看四柱天干
    MonthBranchStem(&'static [(EarthlyBranch, HeavenlyStem)]),
    /// 以月支查表，看四柱地支
    MonthBranch(&'static [(EarthlyBranch, EarthlyBranch)]),
    /// 日柱干支在固定名單中
    DayPillarIn(&'static [(HeavenlyStem, EarthlyBranch)]),
    /// 時柱干支在固定名單中
    HourPillarIn(&'static [(HeavenlyStem, EarthlyBranch)]),
    /// 四柱天干依序出現指定三干（三奇）
    StemSequence(&'static [HeavenlyStem; 3]),
    Custom(fn(&ChartContext) -> Vec<PillarPosition>),
}

impl RuleKind {
    fn evaluate(&self, ctx: &ChartContext) -> Vec<PillarPosition> {
        match self {
            Self::DayStemBranch(table) => match lookup(table, ctx.day_stem()) {
                Some(target) => ctx.branch_positions(target),
                None => Vec::new(),
            },
            Self::DayStemBranchSet(table) => match lookup(table, ctx.day_stem()) {
                Some(targets) => ctx.branch_positions_multi(targets),
                None => Vec::new(),
            },
            Self::DayYearBranch(table) => ctx.branch_positions_dual(
                lookup(table, ctx.day_branch()),
                lookup(table, ctx.year_branch()),
            ),
            Self::YearBranch { table, exclude_year } => {
                match lookup(table, ctx.year_branch()) {
                    Some(target) if *exclude_year => ctx.branch_positions_exclude(target, Year),
                    Some(target) => ctx.branch_positions(target),
                    None => Vec::new(),
                }
            }
            Self::DayBranch(table) => match lookup(table, ctx.day_branch()) {
                Some(target) => ctx.branch_positions(target),
                None => Vec::new(),
            },
            Self::MonthBranchStem(table) => match lookup(table, ctx.month_branch()) {
                Some(target) => ctx.stem_positions(target),
                None => Vec::new(),
            },
            Self::MonthBranch(table) => match lookup(table, ctx.month_branch()) {
                Some(target) => ctx.branch_positions(target),
                None => Vec::new(),
            },
            Self::DayPillarIn(list) => {
                let day = ctx.pillar(Day);
                if list.contains(&(day.stem, day.branch)) {
                    vec![Day]
                } else {
                    Vec::new()
                }
            }
            Self::HourPillarIn(list) => {
                let hour = ctx.pillar(Hour);
                if list.contains(&(hour.stem, hour.branch)) {
                    vec![Hour]
                } else {
                    Vec::new()
                }
            }
            Self::StemSequence(order) => {
                let stems: Vec<HeavenlyStem> = ctx.stems().map(|(s, _)| s).collect();
                for i in 0..stems.len() - 2 {
                    if stems[i] == order[0] && stems[i + 1] == order[1] && stems[i + 2] == order[2]
                    {
                        return vec![ALL_POSITIONS[i], ALL_POSITIONS[i + 1], ALL_POSITIONS[i + 2]];
                    }
                }
                Vec::new()
            }
            Self::Custom(eval) => eval(ctx),
        }
    }
}

struct Rule {
    name: &'static str,
    shen_sha_type: ShenShaType,
    description: &'static str,
    kind: RuleKind,
}

// ---------------------------------------------------------------------------
// 組合型規則
// ---------------------------------------------------------------------------

/// 天德貴人：以月支查，目標或為干（看四柱天干）或為支（看四柱地支）
fn tiande(ctx: &ChartContext) -> Vec<PillarPosition> {
    match lookup(&TIANDE, ctx.month_branch()) {
        Some(Symbol::Stem(stem)) => ctx.stem_positions(stem),
        Some(Symbol::Branch(branch)) => ctx.branch_positions(branch),
        None => Vec::new(),
    }
}

/// 天羅地網：辰（天羅）與戌（地網）須同時出現
fn tianluo_diwang(ctx: &ChartContext) -> Vec<PillarPosition> {
    let tianluo = ctx.branch_positions(Chen);
    let diwang = ctx.branch_positions(Xu);
    if tianluo.is_empty() || diwang.is_empty() {
        return Vec::new();
    }
    let mut combined = tianluo;
    for position in diwang {
        if !combined.contains(&position) {
            combined.push(position);
        }
    }
    combined
}

/// 天赦：月支在季節組且日柱恰為對應干支
fn tianshe(ctx: &ChartContext) -> Vec<PillarPosition> {
    let day = ctx.pillar(Day);
    for (season, stem, branch) in TIANSHE {
        if season.contains(&ctx.month_branch()) && day.stem == stem && day.branch == branch {
            return vec![Day];
        }
    }
    Vec::new()
}

/// 截空：日柱所在旬的空亡支，見於任何柱
fn kongwang(ctx: &ChartContext) -> Vec<PillarPosition> {
    let voids = void_branches(ctx.pillar(Day));
    ctx.branch_positions_multi(&voids)
}

/// 月破：日支或時支沖月支
fn yuepo(ctx: &ChartContext) -> Vec<PillarPosition> {
    let target = ctx.month_branch().opposite();
    let mut positions = Vec::new();
    if ctx.day_branch() == target {
        positions.push(Day);
    }
    if ctx.hour_branch() == target {
        positions.push(Hour);
    }
    positions
}

/// 隔角：年支所隔兩位之支，年柱除外
fn gejiao(ctx: &ChartContext) -> Vec<PillarPosition> {
    let Some(targets) = lookup(&GEJIAO, ctx.year_branch()) else {
        return Vec::new();
    };
    ctx.branches()
        .filter(|(b, p)| targets.contains(b) && *p != Year)
        .map(|(_, p)| p)
        .collect()
}

/// 元辰：陽年表與陰年表並查（未傳性別，兩表皆檢）
fn yuanchen(ctx: &ChartContext) -> Vec<PillarPosition> {
    ctx.branch_positions_dual(
        lookup(&YUANCHEN_YANG, ctx.year_branch()),
        lookup(&YUANCHEN_YIN, ctx.year_branch()),
    )
}

/// 建祿：祿神在月支
fn jianlu(ctx: &ChartContext) -> Vec<PillarPosition> {
    match lookup(&LUSHEN, ctx.day_stem()) {
        Some(target) if ctx.month_branch() == target => vec![Month],
        _ => Vec::new(),
    }
}

/// 歸祿：祿神在時支
fn guilu(ctx: &ChartContext) -> Vec<PillarPosition> {
    match lookup(&LUSHEN, ctx.day_stem()) {
        Some(target) if ctx.hour_branch() == target => vec![Hour],
        _ => Vec::new(),
    }
}

/// 專祿：祿神在日支
fn zhuanlu(ctx: &ChartContext) -> Vec<PillarPosition> {
    match lookup(&LUSHEN, ctx.day_stem()) {
        Some(target) if ctx.day_branch() == target => vec![Day],
        _ => Vec::new(),
    }
}

/// 歲破：沖年支之支，年柱除外
fn suipo(ctx: &ChartContext) -> Vec<PillarPosition> {
    ctx.branch_positions_exclude(ctx.year_branch().opposite(), Year)
}

/// 大耗：歲破後一位
fn dahao(ctx: &ChartContext) -> Vec<PillarPosition> {
    let target = EarthlyBranch::from_index(ctx.year_branch().opposite().index() as i64 + 1);
    ctx.branch_positions(target)
}

/// 小耗：歲破前一位
fn xiaohao(ctx: &ChartContext) -> Vec<PillarPosition> {
    let target = EarthlyBranch::from_index(ctx.year_branch().opposite().index() as i64 + 11);
    ctx.branch_positions(target)
}

/// 四廢：該季無氣之日柱
fn sifei(ctx: &ChartContext) -> Vec<PillarPosition> {
    use EarthlyBranch::*;
    let season: &[(HeavenlyStem, EarthlyBranch); 2] = match ctx.month_branch() {
        Yin | Mao | Chen => &SIFEI_SPRING,
        Si | WuHorse | Wei => &SIFEI_SUMMER,
        Shen | You | Xu => &SIFEI_AUTUMN,
        Hai | Zi | Chou => &SIFEI_WINTER,
    };
    let day = ctx.pillar(Day);
    if season.contains(&(day.stem, day.branch)) {
        vec![Day]
    } else {
        Vec::new()
    }
}

/// 三刑（恃勢）：寅巳申之支佔滿三柱以上
fn sanxing_yin_si_shen(ctx: &ChartContext) -> Vec<PillarPosition> {
    let positions: Vec<PillarPosition> = ctx
        .branches()
        .filter(|(b, _)| SANXING_YIN_SI_SHEN.contains(b))
        .map(|(_, p)| p)
        .collect();
    if positions.len() >= 3 {
        positions
    } else {
        Vec::new()
    }
}

/// 三刑（無恩）：丑戌未之支佔滿三柱以上
fn sanxing_chou_xu_wei(ctx: &ChartContext) -> Vec<PillarPosition> {
    let positions: Vec<PillarPosition> = ctx
        .branches()
        .filter(|(b, _)| SANXING_CHOU_XU_WEI.contains(b))
        .map(|(_, p)| p)
        .collect();
    if positions.len() >= 3 {
        positions
    } else {
        Vec::new()
    }
}

/// 子卯相刑：子卯之支見於兩柱以上
fn zi_mao_xing(ctx: &ChartContext) -> Vec<PillarPosition> {
    let positions: Vec<PillarPosition> = ctx
        .branches()
        .filter(|(b, _)| SANXING_ZI_MAO.contains(b))
        .map(|(_, p)| p)
        .collect();
    if positions.len() >= 2 {
        positions
    } else {
        Vec::new()
    }
}

/// 自刑：辰午酉亥之支重複出現
fn zixing(ctx: &ChartContext) -> Vec<PillarPosition> {
    let mut positions = Vec::new();
    for (branch, position) in ctx.branches() {
        if ZIXING.contains(&branch)
            && ctx.branch_count(branch) >= 2
            && !positions.contains(&position)
        {
            positions.push(position);
        }
    }
    positions
}

/// 六害：某柱之支與他柱之支相害
fn liuhai(ctx: &ChartContext) -> Vec<PillarPosition> {
    let mut positions = Vec::new();
    for (branch, position) in ctx.branches() {
        let Some(harm) = lookup(&LIUHAI, branch) else {
            continue;
        };
        let harmed = ctx
            .branches()
            .any(|(other, other_position)| other == harm && other_position != position);
        if harmed && !positions.contains(&position) {
            positions.push(position);
        }
    }
    positions
}

/// 飛刃：羊刃對沖之支
fn feiren(ctx: &ChartContext) -> Vec<PillarPosition> {
    match lookup(&YANGREN, ctx.day_stem()) {
        Some(blade) => ctx.branch_positions(blade.opposite()),
        None => Vec::new(),
    }
}

/// 伏吟：地支重複，依首見順序列出重複支所在柱
fn fuyin(ctx: &ChartContext) -> Vec<PillarPosition> {
    let mut seen: Vec<EarthlyBranch> = Vec::new();
    for (branch, _) in ctx.branches() {
        if !seen.contains(&branch) {
            seen.push(branch);
        }
    }
    let mut positions = Vec::new();
    for branch in seen {
        let matches: Vec<PillarPosition> = ctx.branch_positions(branch);
        if matches.len() >= 2 {
            positions.extend(matches);
        }
    }
    positions
}

/// 反吟：兩柱地支對沖
fn fanyin(ctx: &ChartContext) -> Vec<PillarPosition> {
    let branches: Vec<(EarthlyBranch, PillarPosition)> = ctx.branches().collect();
    let mut positions = Vec::new();
    for i in 0..branches.len() {
        for j in i + 1..branches.len() {
            if branches[i].0.opposite() == branches[j].0 {
                for position in [branches[i].1, branches[j].1] {
                    if !positions.contains(&position) {
                        positions.push(position);
                    }
                }
            }
        }
    }
    positions
}

/// 截路空亡：時支落於日旬空亡
fn jielu_kongwang(ctx: &ChartContext) -> Vec<PillarPosition> {
    let voids = void_branches(ctx.pillar(Day));
    if voids.contains(&ctx.hour_branch()) {
        vec![Hour]
    } else {
        Vec::new()
    }
}

/// 歲刑：年支所刑之支，年柱除外
fn suixing(ctx: &ChartContext) -> Vec<PillarPosition> {
    let Some(targets) = lookup(&SUIXING, ctx.year_branch()) else {
        return Vec::new();
    };
    ctx.branches()
        .filter(|(b, p)| targets.contains(b) && *p != Year)
        .map(|(_, p)| p)
        .collect()
}

/// 牆內桃花：日支本身即桃花
fn qiangnei_taohua(ctx: &ChartContext) -> Vec<PillarPosition> {
    match lookup(&TAOHUA, ctx.day_branch()) {
        Some(target) if ctx.day_branch() == target => vec![Day],
        _ => Vec::new(),
    }
}

/// 牆外桃花：時支為桃花
fn qiangwai_taohua(ctx: &ChartContext) -> Vec<PillarPosition> {
    let target = lookup(&TAOHUA, ctx.day_branch()).or(lookup(&TAOHUA, ctx.year_branch()));
    match target {
        Some(target) if ctx.hour_branch() == target => vec![Hour],
        _ => Vec::new(),
    }
}

/// 遍野桃花：月支為桃花
fn bianye_taohua(ctx: &ChartContext) -> Vec<PillarPosition> {
    let by_day = lookup(&TAOHUA, ctx.day_branch());
    let by_year = lookup(&TAOHUA, ctx.year_branch());
    if Some(ctx.month_branch()) == by_day || Some(ctx.month_branch()) == by_year {
        vec![Month]
    } else {
        Vec::new()
    }
}

/// 倒插桃花：年支為桃花
fn daocha_taohua(ctx: &ChartContext) -> Vec<PillarPosition> {
    match lookup(&TAOHUA, ctx.day_branch()) {
        Some(target) if ctx.year_branch() == target => vec![Year],
        _ => Vec::new(),
    }
}

/// 沐浴咸池：沐浴位同時是桃花位
fn muyu_xianchi(ctx: &ChartContext) -> Vec<PillarPosition> {
    let Some(muyu) = lookup(&MUYU, ctx.day_stem()) else {
        return Vec::new();
    };
    let by_day = lookup(&TAOHUA, ctx.day_branch());
    let by_year = lookup(&TAOHUA, ctx.year_branch());
    if Some(muyu) == by_day || Some(muyu) == by_year {
        ctx.branch_positions(muyu)
    } else {
        Vec::new()
    }
}

/// 裸體桃花：沐浴位在日支或時支
fn luoti_taohua(ctx: &ChartContext) -> Vec<PillarPosition> {
    let Some(muyu) = lookup(&MUYU, ctx.day_stem()) else {
        return Vec::new();
    };
    let mut positions = Vec::new();
    if ctx.day_branch() == muyu {
        positions.push(Day);
    }
    if ctx.hour_branch() == muyu {
        positions.push(Hour);
    }
    positions
}

/// 滾浪桃花：桃花與驛馬同柱
fn gunlang_taohua(ctx: &ChartContext) -> Vec<PillarPosition> {
    let taohua = [lookup(&TAOHUA, ctx.day_branch()), lookup(&TAOHUA, ctx.year_branch())];
    let yima = [lookup(&YIMA, ctx.day_branch()), lookup(&YIMA, ctx.year_branch())];
    ctx.branches()
        .filter(|(b, _)| taohua.contains(&Some(*b)) && yima.contains(&Some(*b)))
        .map(|(_, p)| p)
        .collect()
}

// ---------------------------------------------------------------------------
// 規則登記表：依傳統求值順序排列
// ---------------------------------------------------------------------------

static RULES: &[Rule] = &[
    Rule { name: "天乙貴人", shen_sha_type: Auspicious, description: "逢凶化吉、遇難呈祥，主貴人相助", kind: RuleKind::DayStemBranchSet(&TIANYI_GUIREN) },
    Rule { name: "文昌貴人", shen_sha_type: Auspicious, description: "主聰明智慧、學業有成、利於考試", kind: RuleKind::DayStemBranch(&WENCHANG) },
    Rule { name: "桃花", shen_sha_type: Neutral, description: "主人緣佳、異性緣好，但須防桃色糾紛", kind: RuleKind::DayYearBranch(&TAOHUA) },
    Rule { name: "驛馬", shen_sha_type: Neutral, description: "主奔波勞碌、適合外出發展、有遷移變動", kind: RuleKind::DayYearBranch(&YIMA) },
    Rule { name: "華蓋", shen_sha_type: Neutral, description: "主聰明孤傲、適合藝術宗教、喜獨處研究", kind: RuleKind::DayYearBranch(&HUAGAI) },
    Rule { name: "將星", shen_sha_type: Auspicious, description: "主領導能力強、有權威、適合管理職位", kind: RuleKind::DayYearBranch(&JIANGXING) },
    Rule { name: "祿神", shen_sha_type: Auspicious, description: "主衣食無憂、財祿豐厚、福氣綿長", kind: RuleKind::DayStemBranch(&LUSHEN) },
    Rule { name: "羊刃", shen_sha_type: Inauspicious, description: "主性格剛烈、易有血光之災、須防意外傷害", kind: RuleKind::DayStemBranch(&YANGREN) },
    Rule { name: "天德貴人", shen_sha_type: Auspicious, description: "主逢凶化吉、一生平安、有貴人扶持", kind: RuleKind::Custom(tiande) },
    Rule { name: "月德貴人", shen_sha_type: Auspicious, description: "主品德高尚、處事平順、有福德庇佑", kind: RuleKind::MonthBranchStem(&YUEDE) },
    Rule { name: "金輿", shen_sha_type: Auspicious, description: "主出行平安、有車馬之福、利於交通", kind: RuleKind::DayStemBranch(&JINYU) },
    Rule { name: "劫煞", shen_sha_type: Inauspicious, description: "主易有劫難、須防小人暗害、謹慎理財", kind: RuleKind::DayYearBranch(&JIESHA) },
    Rule { name: "亡神", shen_sha_type: Inauspicious, description: "主心神不寧、易有是非口舌、須防暗耗", kind: RuleKind::DayYearBranch(&WANGSHEN) },
    Rule { name: "孤辰", shen_sha_type: Inauspicious, description: "主孤獨寂寞、男命克妻、宜晚婚", kind: RuleKind::YearBranch { table: &GUCHEN, exclude_year: true } },
    Rule { name: "寡宿", shen_sha_type: Inauspicious, description: "主孤獨寂寞、女命克夫、宜晚婚", kind: RuleKind::YearBranch { table: &GUASU, exclude_year: true } },
    Rule { name: "天廚貴人", shen_sha_type: Auspicious, description: "主食祿豐厚、衣食無缺、生活富足", kind: RuleKind::DayStemBranch(&TIANCHU) },
    Rule { name: "福星貴人", shen_sha_type: Auspicious, description: "主福氣臨門、一生平安、遇事有救", kind: RuleKind::DayStemBranch(&FUXING) },
    Rule { name: "國印貴人", shen_sha_type: Auspicious, description: "主掌印信權柄、適合公職、有官運", kind: RuleKind::DayStemBranch(&GUOYIN) },
    Rule { name: "學堂", shen_sha_type: Auspicious, description: "主聰明好學、學業有成、文采出眾", kind: RuleKind::DayStemBranch(&XUETANG) },
    Rule { name: "詞館", shen_sha_type: Auspicious, description: "主文采斐然、能言善辯、利於文職", kind: RuleKind::DayStemBranch(&CIGUAN) },
    Rule { name: "魁罡", shen_sha_type: Neutral, description: "主性格剛毅、有膽識魄力、但須防剛愎自用", kind: RuleKind::DayPillarIn(&KUIGANG) },
    Rule { name: "天羅地網", shen_sha_type: Inauspicious, description: "主易遇困阻、諸事不順、須防官非訴訟", kind: RuleKind::Custom(tianluo_diwang) },
    Rule { name: "災煞", shen_sha_type: Inauspicious, description: "主災禍臨身、須防水火之災、謹慎行事", kind: RuleKind::DayYearBranch(&ZAISHA) },
    Rule { name: "天煞", shen_sha_type: Inauspicious, description: "主意外災禍、須防飛來橫禍、宜謹慎", kind: RuleKind::DayYearBranch(&TIANSHA) },
    Rule { name: "地煞", shen_sha_type: Inauspicious, description: "主地面災害、須防跌傷摔傷、出行謹慎", kind: RuleKind::DayYearBranch(&DISHA) },
    Rule { name: "紅艷煞", shen_sha_type: Neutral, description: "主風流多情、異性緣佳、但須防感情糾葛", kind: RuleKind::DayStemBranch(&HONGYAN) },
    Rule { name: "流霞煞", shen_sha_type: Inauspicious, description: "主血光之災、女命須防難產、男命防意外", kind: RuleKind::DayStemBranch(&LIUXIA) },
    Rule { name: "血刃", shen_sha_type: Inauspicious, description: "主血光之災、須防刀傷手術、謹慎行事", kind: RuleKind::DayStemBranch(&XUEREN) },
    Rule { name: "天醫", shen_sha_type: Auspicious, description: "主適合醫療行業、身體康健、逢病可癒", kind: RuleKind::MonthBranch(&TIANYI_DOCTOR) },
    Rule { name: "太極貴人", shen_sha_type: Auspicious, description: "主近貴得福、智慧超群、適合玄學研究", kind: RuleKind::DayStemBranchSet(&TAIJI) },
    Rule { name: "天上三奇", shen_sha_type: Auspicious, description: "主天賦異稟、聰明絕頂、適合研究學問", kind: RuleKind::StemSequence(&SANQI_TIAN) },
    Rule { name: "地上三奇", shen_sha_type: Auspicious, description: "主得地利之便、事業順遂、財運亨通", kind: RuleKind::StemSequence(&SANQI_DI) },
    Rule { name: "人中三奇", shen_sha_type: Auspicious, description: "主人緣廣闊、貴人相助、處世圓融", kind: RuleKind::StemSequence(&SANQI_REN) },
    Rule { name: "天喜", shen_sha_type: Auspicious, description: "主喜事臨門、婚姻美滿、添丁進財", kind: RuleKind::YearBranch { table: &TIANXI, exclude_year: false } },
    Rule { name: "紅鸞", shen_sha_type: Auspicious, description: "主姻緣和合、喜事連連、利於婚嫁", kind: RuleKind::YearBranch { table: &HONGLUAN, exclude_year: false } },
    Rule { name: "天赦", shen_sha_type: Auspicious, description: "主逢凶化吉、罪過可赦、貴人相助", kind: RuleKind::Custom(tianshe) },
    Rule { name: "陰陽差錯", shen_sha_type: Inauspicious, description: "主婚姻不順、夫妻易有隔閡、感情多波折", kind: RuleKind::DayPillarIn(&YINYANG_CHACUO) },
    Rule { name: "十惡大敗", shen_sha_type: Inauspicious, description: "主錢財難聚、事業多阻、須防破敗", kind: RuleKind::DayPillarIn(&SHIE_DABAI) },
    Rule { name: "月德合", shen_sha_type: Auspicious, description: "主品德高尚、處事平順、為月德之合神", kind: RuleKind::MonthBranchStem(&YUEDE_HE) },
    Rule { name: "天德合", shen_sha_type: Auspicious, description: "主逢凶化吉、貴人相助、為天德之合神", kind: RuleKind::MonthBranchStem(&TIANDE_HE) },
    Rule { name: "六秀日", shen_sha_type: Auspicious, description: "主聰明秀氣、才華出眾、氣質非凡", kind: RuleKind::DayPillarIn(&LIUXIU) },
    Rule { name: "八專日", shen_sha_type: Neutral, description: "主專一之氣、性格執著、感情專注但須防固執", kind: RuleKind::DayPillarIn(&BAZHUAN) },
    Rule { name: "弔客", shen_sha_type: Inauspicious, description: "主喪服之事、須防親友有難、宜謹慎行事", kind: RuleKind::YearBranch { table: &DIAOKE, exclude_year: false } },
    Rule { name: "天狗", shen_sha_type: Inauspicious, description: "主是非口舌、易有意外、須防血光之災", kind: RuleKind::YearBranch { table: &TIANGOU, exclude_year: false } },
    Rule { name: "截空", shen_sha_type: Inauspicious, description: "主空虛不實、事多阻滯、但亦主超脫世俗", kind: RuleKind::Custom(kongwang) },
    Rule { name: "沐浴", shen_sha_type: Neutral, description: "主風流多情、桃花旺盛、須防感情糾紛", kind: RuleKind::DayStemBranch(&MUYU) },
    Rule { name: "月破", shen_sha_type: Inauspicious, description: "主諸事不順、易有破敗、不宜進取", kind: RuleKind::Custom(yuepo) },
    Rule { name: "隔角", shen_sha_type: Inauspicious, description: "主六親緣薄、易有隔閡、人際關係需注意", kind: RuleKind::Custom(gejiao) },
    Rule { name: "元辰", shen_sha_type: Inauspicious, description: "主耗散破敗、諸事不順、須謹慎理財", kind: RuleKind::Custom(yuanchen) },
    Rule { name: "玉堂貴人", shen_sha_type: Auspicious, description: "主福祿雙全、名利雙收、有貴人提攜", kind: RuleKind::DayStemBranch(&YUTANG) },
    Rule { name: "文曲貴人", shen_sha_type: Auspicious, description: "主文采出眾、才思敏捷、利於科舉考試", kind: RuleKind::DayStemBranch(&WENQU) },
    Rule { name: "建祿", shen_sha_type: Auspicious, description: "主自立成家、財祿豐盈、事業有成", kind: RuleKind::Custom(jianlu) },
    Rule { name: "歸祿", shen_sha_type: Auspicious, description: "主晚年富貴、子孫賢孝、福祿歸身", kind: RuleKind::Custom(guilu) },
    Rule { name: "專祿", shen_sha_type: Auspicious, description: "主專心事業、財祿專一、不宜投機", kind: RuleKind::Custom(zhuanlu) },
    Rule { name: "歲破", shen_sha_type: Inauspicious, description: "主破耗損財、諸事不順、宜守不宜攻", kind: RuleKind::Custom(suipo) },
    Rule { name: "大耗", shen_sha_type: Inauspicious, description: "主財物耗損、破財敗業、須防盜竊", kind: RuleKind::Custom(dahao) },
    Rule { name: "小耗", shen_sha_type: Inauspicious, description: "主小破財、暗中耗損、宜節儉", kind: RuleKind::Custom(xiaohao) },
    Rule { name: "喪門", shen_sha_type: Inauspicious, description: "主喪服之事、須防孝服、家宅不寧", kind: RuleKind::YearBranch { table: &SANGMEN, exclude_year: false } },
    Rule { name: "披麻", shen_sha_type: Inauspicious, description: "主麻煩纏身、須防孝服、憂患多見", kind: RuleKind::YearBranch { table: &PIMA, exclude_year: false } },
    Rule { name: "白虎", shen_sha_type: Inauspicious, description: "主血光意外、須防刀傷車禍、宜謹慎行事", kind: RuleKind::YearBranch { table: &BAIHU, exclude_year: false } },
    Rule { name: "官符", shen_sha_type: Inauspicious, description: "主官非訴訟、須防口舌是非、避免爭執", kind: RuleKind::YearBranch { table: &GUANFU, exclude_year: false } },
    Rule { name: "五鬼", shen_sha_type: Inauspicious, description: "主小人暗害、是非口舌、須防陰謀詭計", kind: RuleKind::YearBranch { table: &WUGUI, exclude_year: false } },
    Rule { name: "死符", shen_sha_type: Inauspicious, description: "主疾病纏身、健康不佳、須注意保養", kind: RuleKind::YearBranch { table: &SIFU, exclude_year: false } },
    Rule { name: "龍德", shen_sha_type: Auspicious, description: "主逢凶化吉、龍德庇佑、遇難呈祥", kind: RuleKind::MonthBranch(&LONGDE) },
    Rule { name: "孤鸞煞", shen_sha_type: Inauspicious, description: "主婚姻不順、夫妻易分離、宜晚婚", kind: RuleKind::DayPillarIn(&GULUAN) },
    Rule { name: "四廢", shen_sha_type: Inauspicious, description: "主力不從心、事業多阻、難有成就", kind: RuleKind::Custom(sifei) },
    Rule { name: "天元坐煞", shen_sha_type: Inauspicious, description: "主性格急躁、易有衝突、須防意外", kind: RuleKind::DayPillarIn(&TIANYUAN_ZUOSHA) },
    Rule { name: "金神", shen_sha_type: Neutral, description: "主性格剛毅、有煞氣、須見火制化為吉", kind: RuleKind::HourPillarIn(&JINSHEN) },
    Rule { name: "三刑", shen_sha_type: Inauspicious, description: "主刑傷災禍、須防意外傷害、宜謹慎行事", kind: RuleKind::Custom(sanxing_yin_si_shen) },
    Rule { name: "三刑", shen_sha_type: Inauspicious, description: "主刑傷災禍、六親不和、宜修養德行", kind: RuleKind::Custom(sanxing_chou_xu_wei) },
    Rule { name: "子卯相刑", shen_sha_type: Inauspicious, description: "主無禮之刑、易有口舌是非", kind: RuleKind::Custom(zi_mao_xing) },
    Rule { name: "自刑", shen_sha_type: Inauspicious, description: "主自我刑傷、心性不定、易鑽牛角尖", kind: RuleKind::Custom(zixing) },
    Rule { name: "六害", shen_sha_type: Inauspicious, description: "主六親不和、易有害人之事、防小人", kind: RuleKind::Custom(liuhai) },
    Rule { name: "貫索", shen_sha_type: Inauspicious, description: "主牢獄之災、官非纏身、須防訴訟", kind: RuleKind::YearBranch { table: &GUANSUO, exclude_year: false } },
    Rule { name: "飛廉", shen_sha_type: Inauspicious, description: "主奔波勞碌、東奔西走、難得安寧", kind: RuleKind::YearBranch { table: &FEILIAN, exclude_year: false } },
    Rule { name: "羅睺", shen_sha_type: Inauspicious, description: "主陰謀詭計、暗中破害、須防小人", kind: RuleKind::YearBranch { table: &LUOHOU, exclude_year: false } },
    Rule { name: "計都", shen_sha_type: Inauspicious, description: "主計謀多端、心機深沉、須防陰謀", kind: RuleKind::YearBranch { table: &JIDU, exclude_year: false } },
    Rule { name: "天哭", shen_sha_type: Inauspicious, description: "主悲傷哭泣、憂鬱多愁、須防憂患", kind: RuleKind::YearBranch { table: &TIANKU, exclude_year: false } },
    Rule { name: "天虛", shen_sha_type: Inauspicious, description: "主虛耗不實、事多落空、難有實效", kind: RuleKind::YearBranch { table: &TIANXU, exclude_year: false } },
    Rule { name: "紫微", shen_sha_type: Auspicious, description: "主尊貴顯赫、權威在握、利於仕途", kind: RuleKind::YearBranch { table: &ZIWEI, exclude_year: false } },
    Rule { name: "鳳閣", shen_sha_type: Auspicious, description: "主文采風流、氣質優雅、利於文職", kind: RuleKind::MonthBranch(&FENGGE) },
    Rule { name: "月將", shen_sha_type: Auspicious, description: "主領導統御、權威在握、利於管理", kind: RuleKind::MonthBranch(&YUEJIANG) },
    Rule { name: "豹尾", shen_sha_type: Inauspicious, description: "主凶惡暴戾、易有血光、須防意外", kind: RuleKind::YearBranch { table: &BAOWEI, exclude_year: false } },
    Rule { name: "黃幡", shen_sha_type: Inauspicious, description: "主喪服之事、須防孝服、家宅不安", kind: RuleKind::YearBranch { table: &HUANGFAN, exclude_year: false } },
    Rule { name: "飛刃", shen_sha_type: Inauspicious, description: "主血光意外、須防刀傷手術、宜謹慎", kind: RuleKind::Custom(feiren) },
    Rule { name: "伏吟", shen_sha_type: Inauspicious, description: "主重複不順、事多反覆、難有進展", kind: RuleKind::Custom(fuyin) },
    Rule { name: "反吟", shen_sha_type: Inauspicious, description: "主變動不安、事多反覆、宜靜不宜動", kind: RuleKind::Custom(fanyin) },
    Rule { name: "鐵掃帚", shen_sha_type: Inauspicious, description: "主破財敗業、錢財難聚、宜節儉", kind: RuleKind::MonthBranch(&TIESAZHOU_MALE) },
    Rule { name: "截路空亡", shen_sha_type: Inauspicious, description: "主前路受阻、難有發展", kind: RuleKind::Custom(jielu_kongwang) },
    Rule { name: "九醜", shen_sha_type: Inauspicious, description: "主容貌不佳、氣質欠佳、宜修養德行", kind: RuleKind::DayPillarIn(&JIUCHOU) },
    Rule { name: "闌干", shen_sha_type: Inauspicious, description: "主阻隔不通、事多障礙、難有突破", kind: RuleKind::YearBranch { table: &LANGAN, exclude_year: false } },
    Rule { name: "暴敗", shen_sha_type: Inauspicious, description: "主突然敗落、錢財難守、宜謹慎", kind: RuleKind::DayPillarIn(&BAOBAI) },
    Rule { name: "浮沉", shen_sha_type: Inauspicious, description: "主浮沉不定、事業起伏、難有穩定", kind: RuleKind::YearBranch { table: &FUCHEN, exclude_year: false } },
    Rule { name: "指背", shen_sha_type: Inauspicious, description: "主背後是非、易遭誹謗、須防小人", kind: RuleKind::YearBranch { table: &ZHIBEI, exclude_year: false } },
    Rule { name: "捲舌", shen_sha_type: Inauspicious, description: "主口舌是非、言語不慎、易惹爭端", kind: RuleKind::YearBranch { table: &JUANSHE, exclude_year: false } },
    Rule { name: "伏屍", shen_sha_type: Inauspicious, description: "主疾病纏身、健康不佳、須注意保養", kind: RuleKind::YearBranch { table: &FUSHI, exclude_year: false } },
    Rule { name: "吞陷煞", shen_sha_type: Inauspicious, description: "主陷入困境、難以自拔、須謹慎行事", kind: RuleKind::DayStemBranch(&TUNXIAN) },
    Rule { name: "破碎煞", shen_sha_type: Inauspicious, description: "主破財損物、器物易損、宜小心保管", kind: RuleKind::YearBranch { table: &POSUI, exclude_year: false } },
    Rule { name: "往亡", shen_sha_type: Inauspicious, description: "主出行不利、易有意外、宜減少遠行", kind: RuleKind::DayBranch(&WANGWANG) },
    Rule { name: "歸忌", shen_sha_type: Inauspicious, description: "主回歸不利、返程多阻、宜慎重選擇", kind: RuleKind::DayBranch(&GUIJI) },
    Rule { name: "天火", shen_sha_type: Inauspicious, description: "主火災之患、須防火燭、注意用火安全", kind: RuleKind::DayStemBranch(&TIANHUO) },
    Rule { name: "劍鋒煞", shen_sha_type: Inauspicious, description: "主刀劍之災、須防意外傷害、宜謹慎", kind: RuleKind::DayStemBranch(&JIANFENG) },
    Rule { name: "懸針煞", shen_sha_type: Inauspicious, description: "主性格執著、易鑽牛角尖、須防固執", kind: RuleKind::DayPillarIn(&XUANZHEN) },
    Rule { name: "平頭煞", shen_sha_type: Inauspicious, description: "主干支相剋、內外不和、多有矛盾", kind: RuleKind::DayPillarIn(&PINGTOU) },
    Rule { name: "六厄", shen_sha_type: Inauspicious, description: "主災厄連連、困難重重、須謹慎應對", kind: RuleKind::YearBranch { table: &LIUE, exclude_year: false } },
    Rule { name: "歲刑", shen_sha_type: Inauspicious, description: "主刑傷災禍、須防意外、宜謹慎", kind: RuleKind::Custom(suixing) },
    Rule { name: "牆內桃花", shen_sha_type: Neutral, description: "主配偶貌美、夫妻恩愛、家庭和睦", kind: RuleKind::Custom(qiangnei_taohua) },
    Rule { name: "牆外桃花", shen_sha_type: Neutral, description: "主外遇之象、須防感情糾葛", kind: RuleKind::Custom(qiangwai_taohua) },
    Rule { name: "遍野桃花", shen_sha_type: Neutral, description: "主風流成性、桃花氾濫、宜自律", kind: RuleKind::Custom(bianye_taohua) },
    Rule { name: "倒插桃花", shen_sha_type: Neutral, description: "主早年桃花、少年風流、宜注意感情", kind: RuleKind::Custom(daocha_taohua) },
    Rule { name: "沐浴咸池", shen_sha_type: Neutral, description: "主桃花旺盛、異性緣佳、須防感情糾紛", kind: RuleKind::Custom(muyu_xianchi) },
    Rule { name: "裸體桃花", shen_sha_type: Neutral, description: "主桃花外露、易招桃色是非", kind: RuleKind::Custom(luoti_taohua) },
    Rule { name: "滾浪桃花", shen_sha_type: Neutral, description: "主桃花奔波、四處留情、宜自律", kind: RuleKind::Custom(gunlang_taohua) },
];

/// Evaluate the full rule battery against four typed pillars. Pure; the
/// output order is the rule-registry order, stably re-sorted 吉 < 中 < 凶.
pub fn calculate_shen_sha(pillars: &FourPillars) -> Vec<BaZiShenSha> {
    let ctx = ChartContext::new(pillars);

    let mut list: Vec<BaZiShenSha> = Vec::new();
    for rule in RULES {
        let positions = rule.kind.evaluate(&ctx);
        if !positions.is_empty() {
            list.push(BaZiShenSha {
                name: rule.name,
                shen_sha_type: rule.shen_sha_type,
                description: rule.description,
                positions,
            });
        }
    }

    // 吉神在前，中性次之，凶神在後；同類保持求值順序
    list.sort_by_key(|entry| entry.shen_sha_type);
    list
}

/// Untyped pillar data as it arrives from the calendar boundary.
#[derive(Debug, Clone)]
pub struct RawPillar {
    pub heavenly_stem: String,
    pub earthly_branch: String,
}

/// Fail-soft entry point for raw symbol data: any unrecognized stem or
/// branch among the eight inputs yields an empty list (whole-or-nothing)
/// with a non-fatal diagnostic, never a panic.
pub fn calculate_shen_sha_raw(
    year: &RawPillar,
    month: &RawPillar,
    day: &RawPillar,
    hour: &RawPillar,
) -> Vec<BaZiShenSha> {
    let mut stems = Vec::with_capacity(4);
    for (value, name) in [
        (&year.heavenly_stem, "年干"),
        (&month.heavenly_stem, "月干"),
        (&day.heavenly_stem, "日干"),
        (&hour.heavenly_stem, "時干"),
    ] {
        match HeavenlyStem::from_glyph(value) {
            Some(stem) => stems.push(stem),
            None => {
                warn!("神煞計算警告：無效的{}「{}」", name, value);
                return Vec::new();
            }
        }
    }

    let mut branches = Vec::with_capacity(4);
    for (value, name) in [
        (&year.earthly_branch, "年支"),
        (&month.earthly_branch, "月支"),
        (&day.earthly_branch, "日支"),
        (&hour.earthly_branch, "時支"),
    ] {
        match EarthlyBranch::from_glyph(value) {
            Some(branch) => branches.push(branch),
            None => {
                warn!("神煞計算警告：無效的{}「{}」", name, value);
                return Vec::new();
            }
        }
    }

    let pillars = FourPillars {
        year: StemBranch { stem: stems[0], branch: branches[0] },
        month: StemBranch { stem: stems[1], branch: branches[1] },
        day: StemBranch { stem: stems[2], branch: branches[2] },
        hour: StemBranch { stem: stems[3], branch: branches[3] },
    };
    calculate_shen_sha(&pillars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EarthlyBranch as B, HeavenlyStem as S};

    fn pillars(pairs: [(S, B); 4]) -> FourPillars {
        let p = |(stem, branch)| StemBranch { stem, branch };
        FourPillars {
            year: p(pairs[0]),
            month: p(pairs[1]),
            day: p(pairs[2]),
            hour: p(pairs[3]),
        }
    }

    fn find<'a>(list: &'a [BaZiShenSha], name: &str) -> Option<&'a BaZiShenSha> {
        list.iter().find(|s| s.name == name)
    }

    #[test]
    fn tianyi_guiren_for_jia_day_stem() {
        // 日干甲，年支丑 → 天乙貴人在年柱
        let result = calculate_shen_sha(&pillars([
            (S::Bing, B::Chou),
            (S::Ding, B::Yin),
            (S::Jia, B::Chen),
            (S::Wu, B::Si),
        ]));
        let entry = find(&result, "天乙貴人").expect("天乙貴人");
        assert_eq!(entry.shen_sha_type, ShenShaType::Auspicious);
        assert!(entry.positions.contains(&PillarPosition::Year));
    }

    #[test]
    fn tianyi_guiren_for_xin_day_stem() {
        // 日干辛見午、寅
        let result = calculate_shen_sha(&pillars([
            (S::Bing, B::WuHorse),
            (S::Ding, B::Yin),
            (S::Xin, B::Chen),
            (S::Wu, B::Si),
        ]));
        let entry = find(&result, "天乙貴人").expect("天乙貴人");
        assert!(entry.positions.contains(&PillarPosition::Year));
        assert!(entry.positions.contains(&PillarPosition::Month));
    }

    #[test]
    fn wenchang_for_jia_day_stem() {
        // 日干甲見巳
        let result = calculate_shen_sha(&pillars([
            (S::Bing, B::Si),
            (S::Ding, B::Mao),
            (S::Jia, B::Chen),
            (S::Wu, B::WuHorse),
        ]));
        let entry = find(&result, "文昌貴人").expect("文昌貴人");
        assert_eq!(entry.positions, vec![PillarPosition::Year]);
    }

    #[test]
    fn taohua_and_yima_from_water_triad() {
        // 日支子（申子辰局）：見酉為桃花、見寅為驛馬
        let result = calculate_shen_sha(&pillars([
            (S::Bing, B::You),
            (S::Ding, B::Yin),
            (S::Jia, B::Zi),
            (S::Wu, B::Chen),
        ]));
        let taohua = find(&result, "桃花").expect("桃花");
        assert!(taohua.positions.contains(&PillarPosition::Year));
        let yima = find(&result, "驛馬").expect("驛馬");
        assert!(yima.positions.contains(&PillarPosition::Month));
    }

    #[test]
    fn yang_ren_only_for_yang_stems() {
        // 日干甲見卯有羊刃
        let with_blade = calculate_shen_sha(&pillars([
            (S::Bing, B::Mao),
            (S::Ding, B::Si),
            (S::Jia, B::Chen),
            (S::Wu, B::WuHorse),
        ]));
        assert!(find(&with_blade, "羊刃").is_some());

        // 日干乙（陰干）無羊刃
        let without = calculate_shen_sha(&pillars([
            (S::Bing, B::Mao),
            (S::Ding, B::Si),
            (S::Yi, B::Chen),
            (S::Wu, B::WuHorse),
        ]));
        assert!(find(&without, "羊刃").is_none());
    }

    #[test]
    fn kuigang_fires_on_day_pillar_only() {
        let result = calculate_shen_sha(&pillars([
            (S::Jia, B::Zi),
            (S::Bing, B::Yin),
            (S::Geng, B::Chen),
            (S::Ding, B::Hai),
        ]));
        let entry = find(&result, "魁罡").expect("魁罡");
        assert_eq!(entry.positions, vec![PillarPosition::Day]);

        // 庚午非魁罡
        let none = calculate_shen_sha(&pillars([
            (S::Jia, B::Zi),
            (S::Bing, B::Yin),
            (S::Geng, B::WuHorse),
            (S::Ding, B::Hai),
        ]));
        assert!(find(&none, "魁罡").is_none());
    }

    #[test]
    fn tianluo_diwang_requires_both_branches() {
        // 年支辰、月支戌同時出現
        let result = calculate_shen_sha(&pillars([
            (S::Jia, B::Chen),
            (S::Bing, B::Xu),
            (S::Geng, B::Zi),
            (S::Ding, B::Mao),
        ]));
        let entry = find(&result, "天羅地網").expect("天羅地網");
        assert_eq!(
            entry.positions,
            vec![PillarPosition::Year, PillarPosition::Month]
        );

        // 只有辰沒有戌不成立
        let none = calculate_shen_sha(&pillars([
            (S::Jia, B::Chen),
            (S::Bing, B::Zi),
            (S::Geng, B::WuHorse),
            (S::Ding, B::Mao),
        ]));
        assert!(find(&none, "天羅地網").is_none());
    }

    #[test]
    fn sanqi_ordered_window() {
        // 年月日干為甲戊庚
        let result = calculate_shen_sha(&pillars([
            (S::Jia, B::Zi),
            (S::Wu, B::Yin),
            (S::Geng, B::Chen),
            (S::Ding, B::Hai),
        ]));
        let entry = find(&result, "天上三奇").expect("天上三奇");
        assert_eq!(
            entry.positions,
            vec![PillarPosition::Year, PillarPosition::Month, PillarPosition::Day]
        );

        // 同序列自月柱開始
        let shifted = calculate_shen_sha(&pillars([
            (S::Bing, B::Zi),
            (S::Jia, B::Yin),
            (S::Wu, B::Chen),
            (S::Geng, B::Hai),
        ]));
        let entry = find(&shifted, "天上三奇").expect("天上三奇");
        assert_eq!(
            entry.positions,
            vec![PillarPosition::Month, PillarPosition::Day, PillarPosition::Hour]
        );

        // 順序不符不成立
        let unordered = calculate_shen_sha(&pillars([
            (S::Geng, B::Zi),
            (S::Wu, B::Yin),
            (S::Jia, B::Chen),
            (S::Ding, B::Hai),
        ]));
        assert!(find(&unordered, "天上三奇").is_none());
    }

    #[test]
    fn yinyang_chacuo_and_shie_dabai() {
        let result = calculate_shen_sha(&pillars([
            (S::Jia, B::Zi),
            (S::Yi, B::Hai),
            (S::Bing, B::Zi),
            (S::Ding, B::Mao),
        ]));
        let entry = find(&result, "陰陽差錯").expect("陰陽差錯");
        assert_eq!(entry.positions, vec![PillarPosition::Day]);

        let dabai = calculate_shen_sha(&pillars([
            (S::Bing, B::Zi),
            (S::Yi, B::Hai),
            (S::Jia, B::Chen),
            (S::Ding, B::Mao),
        ]));
        assert!(find(&dabai, "十惡大敗").is_some());
    }

    #[test]
    fn guchen_guasu_exclude_year_pillar() {
        // 年支亥 → 孤辰寅、寡宿戌，年柱本身不計
        let result = calculate_shen_sha(&pillars([
            (S::Jia, B::Hai),
            (S::Bing, B::Yin),
            (S::Geng, B::Xu),
            (S::Ding, B::Mao),
        ]));
        let guchen = find(&result, "孤辰").expect("孤辰");
        assert_eq!(guchen.positions, vec![PillarPosition::Month]);
        let guasu = find(&result, "寡宿").expect("寡宿");
        assert_eq!(guasu.positions, vec![PillarPosition::Day]);
    }

    #[test]
    fn output_sorted_auspicious_neutral_inauspicious() {
        let result = calculate_shen_sha(&pillars([
            (S::Geng, B::WuHorse),
            (S::Xin, B::Si),
            (S::Geng, B::Chen),
            (S::Xin, B::Si),
        ]));
        assert!(!result.is_empty());
        let rank = |t: ShenShaType| t as u8;
        for pair in result.windows(2) {
            assert!(rank(pair[0].shen_sha_type) <= rank(pair[1].shen_sha_type));
        }
    }

    #[test]
    fn determinism() {
        let p = pillars([
            (S::Geng, B::WuHorse),
            (S::Xin, B::Si),
            (S::Geng, B::Chen),
            (S::Xin, B::Si),
        ]);
        let a = calculate_shen_sha(&p);
        let b = calculate_shen_sha(&p);
        assert_eq!(a, b);
    }

    #[test]
    fn positions_never_empty() {
        let result = calculate_shen_sha(&pillars([
            (S::Geng, B::WuHorse),
            (S::Xin, B::Si),
            (S::Geng, B::Chen),
            (S::Xin, B::Si),
        ]));
        assert!(result.iter().all(|entry| !entry.positions.is_empty()));
    }

    #[test]
    fn raw_entry_fails_soft_on_invalid_stem() {
        let valid = RawPillar { heavenly_stem: "甲".into(), earthly_branch: "子".into() };
        let invalid = RawPillar { heavenly_stem: "無效".into(), earthly_branch: "子".into() };
        assert!(calculate_shen_sha_raw(&invalid, &valid, &valid, &valid).is_empty());
    }

    #[test]
    fn raw_entry_fails_soft_on_invalid_branch() {
        let valid = RawPillar { heavenly_stem: "甲".into(), earthly_branch: "子".into() };
        let invalid = RawPillar { heavenly_stem: "甲".into(), earthly_branch: "無效".into() };
        assert!(calculate_shen_sha_raw(&valid, &valid, &valid, &invalid).is_empty());
    }

    #[test]
    fn raw_entry_matches_typed_engine() {
        let raw = |stem: &str, branch: &str| RawPillar {
            heavenly_stem: stem.into(),
            earthly_branch: branch.into(),
        };
        let from_raw = calculate_shen_sha_raw(
            &raw("庚", "午"),
            &raw("辛", "巳"),
            &raw("庚", "辰"),
            &raw("辛", "巳"),
        );
        let typed = calculate_shen_sha(&pillars([
            (S::Geng, B::WuHorse),
            (S::Xin, B::Si),
            (S::Geng, B::Chen),
            (S::Xin, B::Si),
        ]));
        assert_eq!(from_raw, typed);
    }
}
