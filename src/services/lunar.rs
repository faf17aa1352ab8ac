// src/services/lunar.rs
//
// 農曆編算。以計算所得的朔與中氣排月：兩冬至之間若含十三個朔望月，
// 則第一個不含中氣的月置閏。日期歸屬以中國標準時間（UTC+8）為準。

use anyhow::{bail, Result};

use crate::services::equation_of_time::julian_day;
use crate::services::solar_terms::{delta_t_seconds, find_term_near, winter_solstice_jd_utc};

const SYNODIC_MONTH: f64 = 29.530588861;

/// A resolved lunisolar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub year: i32,
    /// 1..=12, 正月 = 1.
    pub month: u32,
    pub leap: bool,
    /// 1..=30.
    pub day: u32,
}

/// New-moon instant (TT Julian Day) for lunation number `k`, where k = 0 is
/// the first new moon of 2000. Truncated Meeus series, good to about a
/// minute over 1900–2100.
fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let jde = 2451550.09766 + SYNODIC_MONTH * k + 0.00015437 * t2 - 0.000000150 * t3
        + 0.00000000073 * t4;

    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

    // 日月平近點角、月亮升交點距角（度）
    let m = 2.5534 + 29.10535670 * k - 0.0000014 * t2 - 0.00000011 * t3;
    let mp = 201.5643 + 385.81693528 * k + 0.0107582 * t2 + 0.00001238 * t3 - 0.000000058 * t4;
    let f = 160.7108 + 390.67050284 * k - 0.0016118 * t2 - 0.00000227 * t3 + 0.000000011 * t4;
    let om = 124.7746 - 1.56375588 * k + 0.0020672 * t2 + 0.00000215 * t3;

    let (m, mp, f, om) = (m.to_radians(), mp.to_radians(), f.to_radians(), om.to_radians());

    let correction = -0.40720 * mp.sin()
        + 0.17241 * e * m.sin()
        + 0.01608 * (2.0 * mp).sin()
        + 0.01039 * (2.0 * f).sin()
        + 0.00739 * e * (mp - m).sin()
        - 0.00514 * e * (mp + m).sin()
        + 0.00208 * e * e * (2.0 * m).sin()
        - 0.00111 * (mp - 2.0 * f).sin()
        - 0.00057 * (mp + 2.0 * f).sin()
        + 0.00056 * e * (2.0 * mp + m).sin()
        - 0.00042 * (3.0 * mp).sin()
        + 0.00042 * e * (m + 2.0 * f).sin()
        + 0.00038 * e * (m - 2.0 * f).sin()
        - 0.00024 * e * (2.0 * mp - m).sin()
        - 0.00017 * om.sin()
        - 0.00007 * (mp + 2.0 * m).sin()
        + 0.00004 * (2.0 * mp - 2.0 * f).sin()
        + 0.00004 * (3.0 * m).sin()
        + 0.00003 * (mp + m - 2.0 * f).sin()
        + 0.00003 * (2.0 * mp + 2.0 * f).sin()
        - 0.00003 * (mp + m + 2.0 * f).sin()
        + 0.00003 * (mp - m + 2.0 * f).sin()
        - 0.00002 * (mp - m - 2.0 * f).sin()
        - 0.00002 * (3.0 * mp + m).sin()
        + 0.00002 * (4.0 * mp).sin();

    // 行星攝動項
    let a = [
        (0.000325, 299.77 + 0.107408 * k - 0.009173 * t2),
        (0.000165, 251.88 + 0.016321 * k),
        (0.000164, 251.83 + 26.651886 * k),
        (0.000126, 349.42 + 36.412478 * k),
        (0.000110, 84.66 + 18.206239 * k),
        (0.000062, 141.74 + 53.303771 * k),
        (0.000060, 207.14 + 2.453732 * k),
        (0.000056, 154.84 + 7.306860 * k),
        (0.000047, 34.52 + 27.261239 * k),
        (0.000042, 207.19 + 0.121824 * k),
        (0.000040, 291.34 + 1.844379 * k),
        (0.000037, 161.72 + 24.198154 * k),
        (0.000035, 239.56 + 25.513099 * k),
        (0.000023, 331.55 + 3.592518 * k),
    ];
    let additional: f64 = a.iter().map(|(c, deg)| c * deg.to_radians().sin()).sum();

    jde + correction + additional
}

/// New-moon instant as a UTC Julian Day.
fn new_moon_jd_utc(k: i64) -> f64 {
    let jde = new_moon_jde(k);
    let year = 2000.0 + (jde - 2451545.0) / 365.2425;
    jde - delta_t_seconds(year) / 86400.0
}

/// Civil-date JDN (CST, UTC+8) containing the given UTC instant.
fn cst_jdn(jd_utc: f64) -> i64 {
    (jd_utc + 8.0 / 24.0 + 0.5).floor() as i64
}

/// One month entry: number, leap flag, and the JDN of its first day.
#[derive(Debug, Clone, Copy)]
struct MonthStart {
    month: u32,
    leap: bool,
    start_jdn: i64,
}

/// Arrange the months of the suì anchored at the winter solstice of
/// `annus - 1`: from the month containing that solstice (month 11) through
/// the month before the next month 11. The trailing entry marks the first
/// day beyond the suì.
fn annus_months(annus: i32) -> Result<Vec<MonthStart>> {
    let ws = winter_solstice_jd_utc(annus - 1);
    let ws_next = winter_solstice_jd_utc(annus);
    let ws_jdn = cst_jdn(ws);
    let ws_next_jdn = cst_jdn(ws_next);

    // 覆蓋兩冬至前後的朔
    let k0 = ((ws - 2451550.09766) / SYNODIC_MONTH).floor() as i64 - 2;
    let new_moons: Vec<i64> = (k0..k0 + 18).map(|k| cst_jdn(new_moon_jd_utc(k))).collect();

    // 含冬至之月為十一月；朔日與冬至同日時，該朔所起之月仍含冬至
    let m11_idx = match new_moons.iter().rposition(|&d| d <= ws_jdn) {
        Some(i) => i,
        None => bail!("no new moon found before winter solstice of {}", annus - 1),
    };
    let m11n_idx = match new_moons.iter().rposition(|&d| d <= ws_next_jdn) {
        Some(i) => i,
        None => bail!("no new moon found before winter solstice of {}", annus),
    };

    let mut needs_leap = match m11n_idx - m11_idx {
        12 => false,
        13 => true,
        n => bail!("{} months between winter solstices around {}", n, annus),
    };

    // 中氣序列：冬至起每 30° 一個
    let mut zhongqi_jdn = Vec::with_capacity(14);
    let mut zq = ws;
    for j in 0..14 {
        if j > 0 {
            let target = (270.0 + 30.0 * j as f64).rem_euclid(360.0);
            zq = find_term_near(zq + 30.44, target);
        }
        zhongqi_jdn.push(cst_jdn(zq));
    }

    let mut months = Vec::with_capacity(m11n_idx - m11_idx + 1);
    let mut month = 10u32;
    let mut term = 0usize;
    for i in m11_idx..m11n_idx {
        if needs_leap && new_moons[i + 1] <= zhongqi_jdn[term] {
            months.push(MonthStart { month, leap: true, start_jdn: new_moons[i] });
            needs_leap = false;
            continue;
        }
        month = month % 12 + 1;
        months.push(MonthStart { month, leap: false, start_jdn: new_moons[i] });
        term += 1;
    }
    // 次一歲首月，標記本歲最末日
    months.push(MonthStart { month: 11, leap: false, start_jdn: new_moons[m11n_idx] });

    Ok(months)
}

/// Lunisolar date for a civil (CST-attributed) calendar date.
pub fn lunar_date(year: i32, month: u32, day: u32) -> Result<LunarDate> {
    let jdn = julian_day(year, month, day, 12, 0, 0).round() as i64;

    let mut annus = year;
    for _ in 0..3 {
        let months = annus_months(annus)?;
        let first = months[0].start_jdn;
        let last = months[months.len() - 1].start_jdn;
        if jdn < first {
            annus -= 1;
            continue;
        }
        if jdn >= last {
            annus += 1;
            continue;
        }
        let idx = months.iter().rposition(|m| m.start_jdn <= jdn).unwrap();
        let entry = months[idx];
        // 月序 11、12 在歲首，屬前一年
        let lunar_year = if idx < months.len() - 1 && entry.month >= 11 && idx <= 2 {
            annus - 1
        } else {
            annus
        };
        return Ok(LunarDate {
            year: lunar_year,
            month: entry.month,
            leap: entry.leap,
            day: (jdn - entry.start_jdn + 1) as u32,
        });
    }
    bail!("date {}-{}-{} outside supported lunar range", year, month, day)
}

/// 漢數字年份，逐位轉寫（1990 → 一九九〇）。
fn year_in_chinese(year: i32) -> String {
    const DIGITS: [&str; 10] = ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
    year
        .to_string()
        .chars()
        .map(|c| DIGITS[c.to_digit(10).unwrap_or(0) as usize])
        .collect()
}

/// 月名，十一、十二月稱「冬月」「臘月」，閏月加「閏」字。
pub fn month_in_chinese(month: u32, leap: bool) -> String {
    const NUM: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
    let mut out = String::new();
    if leap {
        out.push_str("閏");
    }
    out.push_str(match month {
        1 => "正",
        2..=9 => NUM[month as usize],
        10 => "十",
        11 => "冬",
        12 => "臘",
        _ => "?",
    });
    out.push_str("月");
    out
}

/// 日名：初一…初十、十一…二十、廿一…三十。
pub fn day_in_chinese(day: u32) -> String {
    const NUM: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
    let prefix = match day {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => "?",
    };
    format!("{}{}", prefix, NUM[(day % 10) as usize])
}

/// Full display string, e.g. "一九九〇年 四月廿一".
pub fn format_lunar_date(date: &LunarDate) -> String {
    format!(
        "{}年 {}{}",
        year_in_chinese(date.year),
        month_in_chinese(date.month, date.leap),
        day_in_chinese(date.day)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_year_2000_boundary() {
        // 2000-01-01 was 己卯年十一月廿五 (lunar 1999-11-25)
        let d = lunar_date(2000, 1, 1).unwrap();
        assert_eq!(d.year, 1999);
        assert_eq!(d.month, 11);
        assert!(!d.leap);
        assert_eq!(d.day, 25);
    }

    #[test]
    fn chinese_new_year_1990() {
        // 1990-01-27 was lunar new year (正月初一 of 1990)
        let before = lunar_date(1990, 1, 26).unwrap();
        assert_eq!((before.year, before.month), (1989, 12));
        let first = lunar_date(1990, 1, 27).unwrap();
        assert_eq!((first.year, first.month, first.day), (1990, 1, 1));
    }

    #[test]
    fn leap_month_2023() {
        // 2023 had a leap second month; 2023-03-22 was 閏二月初一
        let d = lunar_date(2023, 3, 22).unwrap();
        assert_eq!((d.year, d.month, d.leap, d.day), (2023, 2, true, 1));
    }

    #[test]
    fn formatting() {
        let d = LunarDate { year: 1990, month: 4, leap: false, day: 21 };
        assert_eq!(format_lunar_date(&d), "一九九〇年 四月廿一");
        assert_eq!(day_in_chinese(30), "三十");
        assert_eq!(day_in_chinese(10), "初十");
        assert_eq!(month_in_chinese(11, false), "冬月");
        assert_eq!(month_in_chinese(1, true), "閏正月");
    }
}
