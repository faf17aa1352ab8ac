// src/services/bazi.rs
//
// 排盤流程：輸入驗證 → 真太陽時 → 四柱 → 五行/十神 → 神煞 → 彙整結果。

use anyhow::Result;
use log::debug;

use crate::models::{BaZiResult, BirthInfo, HeavenlyStem, Pillar};
use crate::services::cities::{default_city, get_city_by_key};
use crate::services::five_elements::{
    calculate_day_master_strength, calculate_favorable_elements, calculate_five_elements,
    day_master_info, missing_elements, strongest_elements, ten_god,
};
use crate::services::lunar::{format_lunar_date, lunar_date};
use crate::services::sexagenary::{four_pillars, hidden_stems, nayin, StemBranch};
use crate::services::shen_sha::calculate_shen_sha;
use crate::services::true_solar_time::calculate_true_solar_time;

/// Range checks performed before the pipeline runs, one message per field,
/// in the fixed order year, month, day, hour, minute. Calendar validity
/// (month lengths, leap years) is the calendar layer's concern, not this
/// guard's.
pub fn validate_birth_info(info: &BirthInfo) -> Result<(), &'static str> {
    if !(1900..=2100).contains(&info.year) {
        return Err("年份必須在1900-2100之間");
    }
    if !(1..=12).contains(&info.month) {
        return Err("月份必須在1-12之間");
    }
    if !(1..=31).contains(&info.day) {
        return Err("日期必須在1-31之間");
    }
    if info.hour > 23 {
        return Err("小時必須在0-23之間");
    }
    if info.minute > 59 {
        return Err("分鐘必須在0-59之間");
    }
    Ok(())
}

fn annotate_pillar(pair: StemBranch, day_master: HeavenlyStem, is_day_pillar: bool) -> Pillar {
    let hidden = hidden_stems(pair.branch).to_vec();
    Pillar {
        heavenly_stem: pair.stem,
        earthly_branch: pair.branch,
        hidden_stem_ten_gods: hidden.iter().map(|&stem| ten_god(day_master, stem)).collect(),
        hidden_stems: hidden,
        nayin: Some(nayin(pair)),
        // 日主本身不取十神
        ten_god: if is_day_pillar { None } else { Some(ten_god(day_master, pair.stem)) },
    }
}

/// The primary entry point: one `BirthInfo` in, one aggregated result out.
/// Callers must run `validate_birth_info` first; calendar-oracle failures
/// (outside 1900–2100) propagate as errors.
pub fn calculate_ba_zi(info: &BirthInfo) -> Result<BaZiResult> {
    let city = info
        .city
        .as_deref()
        .and_then(get_city_by_key)
        .unwrap_or_else(default_city);
    debug!("resolving chart for {}-{:02}-{:02} in {}", info.year, info.month, info.day, city.key);

    let true_solar_time =
        calculate_true_solar_time(info.year, info.month, info.day, info.hour, info.minute, city)?;

    let pillars = four_pillars(
        true_solar_time.year,
        true_solar_time.month,
        true_solar_time.day,
        true_solar_time.hour,
        true_solar_time.minute,
    )?;
    let lunar = lunar_date(true_solar_time.year, true_solar_time.month, true_solar_time.day)?;

    let day_master = pillars.day.stem;
    let five_elements = calculate_five_elements(&[pillars.year, pillars.month, pillars.day, pillars.hour]);
    let day_master_strength = calculate_day_master_strength(day_master.element(), &five_elements);
    let favorable_elements =
        calculate_favorable_elements(day_master.element(), &day_master_strength);
    let shen_sha = calculate_shen_sha(&pillars);

    Ok(BaZiResult {
        solar_date: format!("{}-{:02}-{:02}", info.year, info.month, info.day),
        lunar_date: format_lunar_date(&lunar),
        year_pillar: annotate_pillar(pillars.year, day_master, false),
        month_pillar: annotate_pillar(pillars.month, day_master, false),
        day_pillar: annotate_pillar(pillars.day, day_master, true),
        hour_pillar: annotate_pillar(pillars.hour, day_master, false),
        gender: info.gender,
        missing_elements: missing_elements(&five_elements),
        strongest_elements: strongest_elements(&five_elements),
        five_elements,
        day_master: day_master_info(day_master),
        day_master_strength,
        favorable_elements,
        shen_sha,
        true_solar_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn info(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> BirthInfo {
        BirthInfo { gender: Gender::Male, year, month, day, hour, minute, city: None }
    }

    #[test]
    fn accepts_valid_input_and_boundaries() {
        assert!(validate_birth_info(&info(1990, 6, 15, 12, 30)).is_ok());
        assert!(validate_birth_info(&info(1900, 1, 1, 0, 0)).is_ok());
        assert!(validate_birth_info(&info(2100, 12, 31, 23, 59)).is_ok());
    }

    #[test]
    fn rejects_each_field_with_its_message() {
        assert_eq!(
            validate_birth_info(&info(1899, 6, 15, 12, 30)),
            Err("年份必須在1900-2100之間")
        );
        assert_eq!(
            validate_birth_info(&info(2101, 6, 15, 12, 30)),
            Err("年份必須在1900-2100之間")
        );
        assert_eq!(
            validate_birth_info(&info(1990, 0, 15, 12, 30)),
            Err("月份必須在1-12之間")
        );
        assert_eq!(
            validate_birth_info(&info(1990, 13, 15, 12, 30)),
            Err("月份必須在1-12之間")
        );
        assert_eq!(
            validate_birth_info(&info(1990, 6, 0, 12, 30)),
            Err("日期必須在1-31之間")
        );
        assert_eq!(
            validate_birth_info(&info(1990, 6, 32, 12, 30)),
            Err("日期必須在1-31之間")
        );
        assert_eq!(
            validate_birth_info(&info(1990, 6, 15, 24, 30)),
            Err("小時必須在0-23之間")
        );
        assert_eq!(
            validate_birth_info(&info(1990, 6, 15, 12, 60)),
            Err("分鐘必須在0-59之間")
        );
    }

    #[test]
    fn first_violation_wins_in_field_order() {
        // 年、月同時越界時回報年份
        let bad = BirthInfo {
            gender: Gender::Female,
            year: 1899,
            month: 0,
            day: 0,
            hour: 24,
            minute: 60,
            city: None,
        };
        assert_eq!(validate_birth_info(&bad), Err("年份必須在1900-2100之間"));
    }
}
