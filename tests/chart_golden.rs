// End-to-end fixtures for the full chart pipeline, checked against the
// reference charts for known birth dates.

use bazi_backend::models::{BirthInfo, Gender, PillarPosition, Pillar};
use bazi_backend::services::bazi::{calculate_ba_zi, validate_birth_info};

fn birth(gender: Gender, year: i32, month: u32, day: u32, hour: u32, minute: u32) -> BirthInfo {
    BirthInfo { gender, year, month, day, hour, minute, city: None }
}

fn glyphs(pillar: &Pillar) -> String {
    format!("{}{}", pillar.heavenly_stem.glyph(), pillar.earthly_branch.glyph())
}

#[test]
fn chart_structure_for_1990_01_15() {
    let result = calculate_ba_zi(&birth(Gender::Male, 1990, 1, 15, 12, 30)).unwrap();

    assert_eq!(result.gender.label(), "男");
    assert!(result.solar_date.contains("1990"));
    assert!(!result.lunar_date.is_empty());

    for pillar in [
        &result.year_pillar,
        &result.month_pillar,
        &result.day_pillar,
        &result.hour_pillar,
    ] {
        assert!(!pillar.hidden_stems.is_empty());
        assert!(!pillar.nayin.unwrap().is_empty());
        assert_eq!(pillar.hidden_stems.len(), pillar.hidden_stem_ten_gods.len());
    }
}

#[test]
fn year_pillar_2000_is_geng_chen() {
    let result = calculate_ba_zi(&birth(Gender::Female, 2000, 5, 5, 8, 0)).unwrap();
    assert_eq!(glyphs(&result.year_pillar), "庚辰");
    assert_eq!(result.gender.label(), "女");
}

#[test]
fn year_pillar_respects_lichun_boundary() {
    // 1984-02-05 is past 立春 (Feb 4): 甲子年
    let result = calculate_ba_zi(&birth(Gender::Male, 1984, 2, 5, 12, 0)).unwrap();
    assert_eq!(glyphs(&result.year_pillar), "甲子");
    assert_eq!(result.year_pillar.nayin, Some("海中金"));
}

#[test]
fn full_chart_for_1990_05_15() {
    let result = calculate_ba_zi(&birth(Gender::Male, 1990, 5, 15, 10, 30)).unwrap();

    assert_eq!(glyphs(&result.year_pillar), "庚午");
    assert_eq!(glyphs(&result.month_pillar), "辛巳");
    assert_eq!(glyphs(&result.day_pillar), "庚辰");
    assert_eq!(glyphs(&result.hour_pillar), "辛巳");

    assert_eq!(result.year_pillar.nayin, Some("路旁土"));
    assert_eq!(result.month_pillar.nayin, Some("白蠟金"));
    assert_eq!(result.day_pillar.nayin, Some("白蠟金"));
    assert_eq!(result.hour_pillar.nayin, Some("白蠟金"));

    // 庚辰日柱 → 魁罡，僅日柱
    let kuigang = result
        .shen_sha
        .iter()
        .find(|s| s.name == "魁罡")
        .expect("魁罡 marker");
    assert_eq!(kuigang.positions, vec![PillarPosition::Day]);
}

#[test]
fn hour_branch_boundaries() {
    let early = calculate_ba_zi(&birth(Gender::Male, 1985, 3, 20, 0, 30)).unwrap();
    assert_eq!(early.hour_pillar.earthly_branch.glyph(), "子");

    let late = calculate_ba_zi(&birth(Gender::Female, 1995, 8, 15, 22, 0)).unwrap();
    assert_eq!(late.hour_pillar.earthly_branch.glyph(), "亥");
}

#[test]
fn leap_day_2000() {
    let result = calculate_ba_zi(&birth(Gender::Male, 2000, 2, 29, 12, 0)).unwrap();
    assert!(result.solar_date.contains("2000"));
    assert_eq!(glyphs(&result.year_pillar), "庚辰");
}

#[test]
fn dates_around_chinese_new_year_resolve() {
    let before = calculate_ba_zi(&birth(Gender::Male, 2024, 2, 9, 12, 0)).unwrap();
    let after = calculate_ba_zi(&birth(Gender::Male, 2024, 2, 10, 12, 0)).unwrap();
    assert!(!glyphs(&before.year_pillar).is_empty());
    assert!(!glyphs(&after.year_pillar).is_empty());
}

#[test]
fn element_counts_sum_to_eight() {
    for (year, month, day, hour) in [(1984, 2, 5, 12), (1990, 5, 15, 10), (2000, 1, 1, 0)] {
        let result = calculate_ba_zi(&birth(Gender::Male, year, month, day, hour, 0)).unwrap();
        assert_eq!(result.five_elements.total(), 8);
    }
}

#[test]
fn day_pillar_stem_has_no_ten_god() {
    let result = calculate_ba_zi(&birth(Gender::Male, 1990, 5, 15, 10, 30)).unwrap();
    assert!(result.day_pillar.ten_god.is_none());
    assert!(result.year_pillar.ten_god.is_some());
    assert!(result.month_pillar.ten_god.is_some());
    assert!(result.hour_pillar.ten_god.is_some());
}

#[test]
fn shen_sha_output_is_sorted_by_type() {
    let result = calculate_ba_zi(&birth(Gender::Male, 1990, 5, 15, 10, 30)).unwrap();
    assert!(!result.shen_sha.is_empty());
    for pair in result.shen_sha.windows(2) {
        assert!(pair[0].shen_sha_type <= pair[1].shen_sha_type);
        assert!(!pair[0].positions.is_empty());
    }
}

#[test]
fn true_solar_time_metadata_travels_with_result() {
    let result = calculate_ba_zi(&birth(Gender::Male, 2000, 2, 10, 14, 30)).unwrap();
    let tst = &result.true_solar_time;
    assert!(tst.equation_of_time_minutes > -15.0 && tst.equation_of_time_minutes < -13.0);
    // 台北（預設城市）經度 121.56°E × 4 分/度
    assert!((tst.longitude_offset_minutes - 121.56 * 4.0).abs() < 0.1);
}

#[test]
fn unknown_city_key_falls_back_to_default() {
    let mut info = birth(Gender::Male, 1990, 5, 15, 10, 30);
    info.city = Some("XXX".to_string());
    let fallback = calculate_ba_zi(&info).unwrap();
    let default = calculate_ba_zi(&birth(Gender::Male, 1990, 5, 15, 10, 30)).unwrap();
    assert_eq!(glyphs(&fallback.day_pillar), glyphs(&default.day_pillar));
}

#[test]
fn validation_guards_the_pipeline() {
    assert!(validate_birth_info(&birth(Gender::Male, 1990, 5, 15, 10, 30)).is_ok());
    assert_eq!(
        validate_birth_info(&birth(Gender::Male, 1899, 5, 15, 10, 30)),
        Err("年份必須在1900-2100之間")
    );
}
