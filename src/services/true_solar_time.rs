// src/services/true_solar_time.rs
//
// 真太陽時計算。採傳統排盤方法：排柱時刻 = 當地鐘面時間 + 均時差；
// 經度修正（經度 × 4 分/度）只作參考資訊，不參與修正。
// 時區與 DST 解析交給 chrono-tz 的 IANA 資料庫。

use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Duration, LocalResult, NaiveDate, Offset, TimeZone, Timelike, Utc};
use chrono_tz::{OffsetComponents, Tz};

use crate::models::{City, TrueSolarTimeResult};
use crate::services::equation_of_time::equation_of_time;

/// Compute the corrected ("true solar") time for a wall-clock birth time in
/// the given city.
///
/// Steps: resolve the local time in the city's zone (which settles the DST
/// flag and the UTC offset), isolate the seasonal DST offset by comparing
/// against January 1 of the same year, report the longitude offset as
/// metadata, and add the equation of time to the wall-clock reading. Field
/// rollover across day/month/year boundaries is normalized by chrono.
pub fn calculate_true_solar_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    city: &City,
) -> Result<TrueSolarTimeResult> {
    let tz: Tz = city
        .iana
        .parse()
        .map_err(|e| anyhow!("unknown timezone {} for {}: {}", city.iana, city.key, e))?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .with_context(|| format!("invalid calendar date {}-{}-{} {}:{}", year, month, day, hour, minute))?;

    // 歧義時刻取前者；不存在的時刻（DST 跳進）順延一小時
    let local = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .with_context(|| format!("unresolvable local time {} in {}", naive, city.iana))?,
    };

    let is_dst = !local.offset().dst_offset().is_zero();

    // 以同年一月一日的偏移為「標準時間」基準，差值即季節性 DST 偏移
    let jan_first = tz
        .from_local_datetime(
            &NaiveDate::from_ymd_opt(year, 1, 1)
                .and_then(|d| d.and_hms_opt(12, 0, 0))
                .context("january reference date")?,
        )
        .earliest()
        .context("january reference time")?;
    let dst_offset_minutes = i64::from(
        local.offset().fix().local_minus_utc() - jan_first.offset().fix().local_minus_utc(),
    ) / 60;

    // 經度 × 4 分/度，僅供顯示
    let longitude_offset_minutes = city.longitude * 4.0;

    let utc_time = local.with_timezone(&Utc);
    let equation_of_time_minutes = equation_of_time(utc_time.year(), utc_time.month(), utc_time.day());

    // 平太陽時 = UTC + 經度偏移
    let mean_solar_time = (utc_time
        + Duration::milliseconds((longitude_offset_minutes * 60_000.0).round() as i64))
    .fixed_offset();

    // 真太陽時（排柱用）= 當地時間 + 均時差
    let corrected =
        local + Duration::milliseconds((equation_of_time_minutes * 60_000.0).round() as i64);

    Ok(TrueSolarTimeResult {
        year: corrected.year(),
        month: corrected.month(),
        day: corrected.day(),
        hour: corrected.hour(),
        minute: corrected.minute(),
        second: corrected.second(),
        is_dst,
        dst_offset_minutes,
        longitude_offset_minutes,
        equation_of_time_minutes,
        utc_time,
        mean_solar_time,
        true_solar_time: corrected.fixed_offset(),
    })
}

/// "DST +60分鐘 | 經度 +486.2分 | 均時差 -14.2分" style summary.
pub fn format_correction_info(result: &TrueSolarTimeResult) -> String {
    let dst_info = if result.is_dst {
        format!("DST +{}分鐘", result.dst_offset_minutes)
    } else {
        "非DST".to_string()
    };

    let longitude_info = if result.longitude_offset_minutes >= 0.0 {
        format!("經度 +{:.1}分", result.longitude_offset_minutes)
    } else {
        format!("經度 {:.1}分", result.longitude_offset_minutes)
    };

    let eot_info = if result.equation_of_time_minutes >= 0.0 {
        format!("均時差 +{:.1}分", result.equation_of_time_minutes)
    } else {
        format!("均時差 {:.1}分", result.equation_of_time_minutes)
    };

    format!("{} | {} | {}", dst_info, longitude_info, eot_info)
}

/// "1990年01月15日 12:30" style corrected-time string.
pub fn format_corrected_time(result: &TrueSolarTimeResult) -> String {
    format!(
        "{}年{:02}月{:02}日 {:02}:{:02}",
        result.year, result.month, result.day, result.hour, result.minute
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::cities::get_city_by_key;

    #[test]
    fn hong_kong_mid_february_traditional_method() {
        let city = get_city_by_key("HKG").unwrap();
        let result = calculate_true_solar_time(2000, 2, 10, 14, 30, city).unwrap();

        assert!(result.equation_of_time_minutes > -15.0);
        assert!(result.equation_of_time_minutes < -13.0);

        // 傳統方法不使用經度校正，但仍回報此值供參考
        assert!((result.longitude_offset_minutes - 114.17 * 4.0).abs() < 0.1);

        // 14:30 − 14 分左右 ≈ 14:16
        assert_eq!(result.hour, 14);
        assert!(result.minute > 14 && result.minute < 17, "minute = {}", result.minute);
        assert!(!result.is_dst);
        assert_eq!(result.dst_offset_minutes, 0);
    }

    #[test]
    fn taipei_reports_all_fields() {
        let city = get_city_by_key("TPE").unwrap();
        let result = calculate_true_solar_time(2024, 2, 10, 12, 0, city).unwrap();

        assert!(result.equation_of_time_minutes > -15.0);
        assert!(result.equation_of_time_minutes < -13.0);
        assert!((result.longitude_offset_minutes - 121.56 * 4.0).abs() < 0.1);
        assert_eq!(result.year, 2024);
        assert_eq!(result.month, 2);
        assert_eq!(result.day, 10);
    }

    #[test]
    fn new_york_summer_dst() {
        let city = get_city_by_key("NYC").unwrap();
        let result = calculate_true_solar_time(2000, 7, 1, 12, 0, city).unwrap();
        assert!(result.is_dst);
        assert_eq!(result.dst_offset_minutes, 60);
    }

    #[test]
    fn midnight_rollover_normalizes_fields() {
        // Early November EoT is ~+16 min: 23:50 + 16 min crosses midnight
        let city = get_city_by_key("TPE").unwrap();
        let result = calculate_true_solar_time(2024, 11, 3, 23, 50, city).unwrap();
        assert_eq!(result.day, 4);
        assert_eq!(result.hour, 0);
    }

    #[test]
    fn rejects_invalid_calendar_date() {
        let city = get_city_by_key("TPE").unwrap();
        assert!(calculate_true_solar_time(2024, 4, 31, 12, 0, city).is_err());
    }

    #[test]
    fn correction_info_mentions_all_parts() {
        let city = get_city_by_key("HKG").unwrap();
        let result = calculate_true_solar_time(2000, 2, 10, 14, 30, city).unwrap();
        let info = format_correction_info(&result);
        assert!(info.contains("DST"));
        assert!(info.contains("經度"));
        assert!(info.contains("均時差"));
    }
}
