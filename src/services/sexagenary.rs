// src/services/sexagenary.rs
//
// 四柱干支推算。年柱以立春為界，月柱以十二節（太陽視黃經每 30°）為界，
// 日柱由儒略日數推得，時柱依五鼠遁。曆法時刻依中國標準時間歸屬。

use anyhow::{bail, Result};

use crate::models::{EarthlyBranch, HeavenlyStem};
use crate::services::equation_of_time::julian_day;
use crate::services::solar_terms::{lichun_jd_utc, solar_longitude_at_utc};

/// A stem-branch pair in the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemBranch {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl StemBranch {
    /// Pair for sexagenary cycle index `n` (甲子 = 0 .. 癸亥 = 59).
    pub fn from_cycle_index(n: i64) -> Self {
        Self {
            stem: HeavenlyStem::from_index(n),
            branch: EarthlyBranch::from_index(n),
        }
    }

    /// 0-based index in the 60-cycle (甲子 = 0).
    pub fn cycle_index(&self) -> usize {
        let s = self.stem.index();
        let b = self.branch.index();
        // CRT over (mod 10, mod 12); the pair is always consistent here
        // because both components derive from the same cycle position.
        (0..60).find(|n| n % 10 == s && n % 12 == b).unwrap_or(0)
    }

    /// Both glyphs, e.g. "庚辰".
    pub fn glyphs(&self) -> String {
        format!("{}{}", self.stem.glyph(), self.branch.glyph())
    }
}

/// The four pillars of a chart, year through hour.
#[derive(Debug, Clone, Copy)]
pub struct FourPillars {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub hour: StemBranch,
}

/// Resolve the four pillars for a (corrected) civil timestamp, attributed
/// to the Chinese calendar's defining meridian (CST).
pub fn four_pillars(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<FourPillars> {
    if !(1900..=2100).contains(&year) {
        bail!("year {} outside supported sexagenary range 1900-2100", year);
    }

    let jd_cst = julian_day(year, month, day, hour, minute, 0);
    let jd_utc = jd_cst - 8.0 / 24.0;

    // 年柱：立春前屬前一歲
    let sui = if jd_cst >= lichun_jd_utc(year) + 8.0 / 24.0 { year } else { year - 1 };
    let year_pillar = StemBranch {
        stem: HeavenlyStem::from_index(sui as i64 - 4),
        branch: EarthlyBranch::from_index(sui as i64 - 4),
    };

    // 月柱：自立春（315°）每 30° 一個月建，寅月起；月干依五虎遁
    let lambda = solar_longitude_at_utc(jd_utc);
    let month_index = ((lambda - 315.0).rem_euclid(360.0) / 30.0).floor() as i64;
    let month_pillar = StemBranch {
        stem: HeavenlyStem::from_index(
            (year_pillar.stem.index() % 5) as i64 * 2 + 2 + month_index,
        ),
        branch: EarthlyBranch::from_index(2 + month_index),
    };

    // 日柱：(JDN + 49) mod 60；夜子時（23 時起）日柱進一日
    let mut jdn = julian_day(year, month, day, 12, 0, 0).round() as i64;
    if hour >= 23 {
        jdn += 1;
    }
    let day_pillar = StemBranch::from_cycle_index(jdn + 49);

    // 時柱：時支每兩小時一位，時干依五鼠遁
    let hour_branch_index = (((hour + 1) / 2) % 12) as i64;
    let hour_pillar = StemBranch {
        stem: HeavenlyStem::from_index(
            (day_pillar.stem.index() % 5) as i64 * 2 + hour_branch_index,
        ),
        branch: EarthlyBranch::from_index(hour_branch_index),
    };

    Ok(FourPillars { year: year_pillar, month: month_pillar, day: day_pillar, hour: hour_pillar })
}

/// 地支藏干，固定十二條。
pub fn hidden_stems(branch: EarthlyBranch) -> &'static [HeavenlyStem] {
    use EarthlyBranch as B;
    use HeavenlyStem as S;
    match branch {
        B::Zi => &[S::Gui],
        B::Chou => &[S::Ji, S::Gui, S::Xin],
        B::Yin => &[S::Jia, S::Bing, S::Wu],
        B::Mao => &[S::Yi],
        B::Chen => &[S::Wu, S::Yi, S::Gui],
        B::Si => &[S::Bing, S::Geng, S::Wu],
        B::WuHorse => &[S::Ding, S::Ji],
        B::Wei => &[S::Ji, S::Ding, S::Yi],
        B::Shen => &[S::Geng, S::Ren, S::Wu],
        B::You => &[S::Xin],
        B::Xu => &[S::Wu, S::Xin, S::Ding],
        B::Hai => &[S::Ren, S::Jia],
    }
}

/// 納音三十名，每名覆蓋六十甲子中相鄰的兩組干支。
const NAYIN: [&str; 30] = [
    "海中金", "爐中火", "大林木", "路旁土", "劍鋒金",
    "山頭火", "澗下水", "城頭土", "白蠟金", "楊柳木",
    "泉中水", "屋上土", "霹靂火", "松柏木", "長流水",
    "沙中金", "山下火", "平地木", "壁上土", "金箔金",
    "覆燈火", "天河水", "大驛土", "釵釧金", "桑柘木",
    "大溪水", "沙中土", "天上火", "石榴木", "大海水",
];

/// Nayin name for a stem-branch pair; a pure function of the pair.
pub fn nayin(pair: StemBranch) -> &'static str {
    NAYIN[pair.cycle_index() / 2]
}

/// 旬空：日柱所在旬的兩個空亡地支。
pub fn void_branches(day_pillar: StemBranch) -> [EarthlyBranch; 2] {
    let n = day_pillar.cycle_index();
    let head_branch = (n - n % 10) % 12;
    [
        EarthlyBranch::from_index((head_branch + 10) as i64),
        EarthlyBranch::from_index((head_branch + 11) as i64),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EarthlyBranch as B, HeavenlyStem as S};

    #[test]
    fn cycle_index_round_trips() {
        for n in 0..60 {
            assert_eq!(StemBranch::from_cycle_index(n).cycle_index(), n as usize);
        }
        assert_eq!(StemBranch::from_cycle_index(0).glyphs(), "甲子");
        assert_eq!(StemBranch::from_cycle_index(59).glyphs(), "癸亥");
    }

    #[test]
    fn pillars_for_1990_05_15() {
        // 庚午年 辛巳月 庚辰日 辛巳時
        let p = four_pillars(1990, 5, 15, 10, 30).unwrap();
        assert_eq!(p.year.glyphs(), "庚午");
        assert_eq!(p.month.glyphs(), "辛巳");
        assert_eq!(p.day.glyphs(), "庚辰");
        assert_eq!(p.hour.glyphs(), "辛巳");
    }

    #[test]
    fn year_boundary_at_lichun_1984() {
        // Feb 5 1984 is past 立春: 甲子 year; Feb 3 still 癸亥
        let after = four_pillars(1984, 2, 5, 12, 0).unwrap();
        assert_eq!(after.year.glyphs(), "甲子");
        let before = four_pillars(1984, 2, 3, 12, 0).unwrap();
        assert_eq!(before.year.glyphs(), "癸亥");
    }

    #[test]
    fn year_2000_is_geng_chen() {
        let p = four_pillars(2000, 5, 5, 8, 0).unwrap();
        assert_eq!(p.year.glyphs(), "庚辰");
    }

    #[test]
    fn hour_branches() {
        let early = four_pillars(1985, 3, 20, 0, 30).unwrap();
        assert_eq!(early.hour.branch, B::Zi);
        let late = four_pillars(1995, 8, 15, 22, 0).unwrap();
        assert_eq!(late.hour.branch, B::Hai);
    }

    #[test]
    fn late_zi_hour_advances_day_pillar() {
        let before = four_pillars(1990, 5, 15, 22, 0).unwrap();
        let after = four_pillars(1990, 5, 15, 23, 30).unwrap();
        assert_eq!(
            (after.day.cycle_index() + 60 - before.day.cycle_index()) % 60,
            1
        );
        assert_eq!(after.hour.branch, B::Zi);
    }

    #[test]
    fn hidden_stems_fixed_table() {
        assert_eq!(hidden_stems(B::Zi), &[S::Gui]);
        assert_eq!(hidden_stems(B::Chou), &[S::Ji, S::Gui, S::Xin]);
        assert_eq!(hidden_stems(B::Hai), &[S::Ren, S::Jia]);
    }

    #[test]
    fn nayin_fixed_pairs() {
        let jiazi = StemBranch { stem: S::Jia, branch: B::Zi };
        assert_eq!(nayin(jiazi), "海中金");
        let gengwu = StemBranch { stem: S::Geng, branch: B::WuHorse };
        assert_eq!(nayin(gengwu), "路旁土");
        let gengchen = StemBranch { stem: S::Geng, branch: B::Chen };
        assert_eq!(nayin(gengchen), "白蠟金");
        let xinsi = StemBranch { stem: S::Xin, branch: B::Si };
        assert_eq!(nayin(xinsi), "白蠟金");
    }

    #[test]
    fn void_branches_by_decade() {
        // 甲子旬空戌亥
        let jiazi = StemBranch::from_cycle_index(0);
        assert_eq!(void_branches(jiazi), [B::Xu, B::Hai]);
        // 庚辰 belongs to 甲戌旬, 空申酉
        let gengchen = StemBranch { stem: S::Geng, branch: B::Chen };
        assert_eq!(void_branches(gengchen), [B::Shen, B::You]);
        // 癸亥 belongs to 甲寅旬, 空子丑
        let guihai = StemBranch::from_cycle_index(59);
        assert_eq!(void_branches(guihai), [B::Zi, B::Chou]);
    }
}
