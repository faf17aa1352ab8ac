// src/services/equation_of_time.rs
//
// 均時差：真太陽時與平太陽時之差，由地球橢圓軌道與自轉軸傾斜造成，
// 全年約在 -16 至 +14 分鐘之間。採用 Jean Meeus 的簡化算法。

use std::f64::consts::PI;

/// Julian Day for a Gregorian calendar date-time.
///
/// Months January and February count as months 13 and 14 of the previous
/// year, per the standard conversion.
pub fn julian_day(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> f64 {
    let (mut y, mut m) = (year as f64, month as f64);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    let day_fraction =
        day as f64 + hour as f64 / 24.0 + minute as f64 / 1440.0 + second as f64 / 86400.0;

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_fraction + b - 1524.5
}

/// Equation of time in minutes for the given calendar date, evaluated at
/// 12:00 noon. Positive means true solar time runs ahead of mean solar time.
///
/// Accurate to a few seconds, which is plenty for chart work; callers must
/// not assume more.
pub fn equation_of_time(year: i32, month: u32, day: u32) -> f64 {
    let jd = julian_day(year, month, day, 12, 0, 0);

    // Julian centuries since J2000.0
    let t = (jd - 2451545.0) / 36525.0;

    // 太陽平近點角（度）
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let m_rad = m.to_radians();

    // 太陽平黃經（度），規範化到 0-360
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let l0_norm = ((l0 % 360.0) + 360.0) % 360.0;
    let l0_rad = l0_norm.to_radians();

    // 地球軌道離心率
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;

    // 黃道傾角（度）
    let epsilon = 23.439291 - 0.0130042 * t - 0.00000016 * t * t + 0.000000504 * t * t * t;
    let y = (epsilon.to_radians() / 2.0).tan().powi(2);

    // 截斷級數，結果由弧度轉為度再乘 4 得分鐘
    4.0 * (y * (2.0 * l0_rad).sin() - 2.0 * e * m_rad.sin()
        + 4.0 * e * y * m_rad.sin() * (2.0 * l0_rad).cos()
        - 0.5 * y * y * (4.0 * l0_rad).sin()
        - 1.25 * e * e * (2.0 * m_rad).sin())
        * (180.0 / PI)
}

/// Format an equation-of-time value as "+14分10秒" / "-3分20秒".
pub fn format_equation_of_time(eot: f64) -> String {
    let abs = eot.abs();
    let minutes = abs.floor() as i64;
    let seconds = ((abs - minutes as f64) * 60.0).round() as i64;
    let sign = if eot >= 0.0 { "+" } else { "-" };
    format!("{}{}分{}秒", sign, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_day_matches_j2000_epoch() {
        assert!((julian_day(2000, 1, 1, 12, 0, 0) - 2451545.0).abs() < 1e-9);
    }

    #[test]
    fn mid_february_minimum() {
        let eot = equation_of_time(2000, 2, 10);
        assert!(eot > -15.0 && eot < -13.0, "eot = {}", eot);
    }

    #[test]
    fn early_november_maximum() {
        let eot = equation_of_time(2024, 11, 3);
        assert!(eot > 15.0 && eot < 17.0, "eot = {}", eot);
    }

    #[test]
    fn mid_april_near_zero() {
        let eot = equation_of_time(2024, 4, 15);
        assert!(eot.abs() < 2.0, "eot = {}", eot);
    }

    #[test]
    fn formats_sign_and_units() {
        assert_eq!(format_equation_of_time(14.17), "+14分10秒");
        assert!(format_equation_of_time(-3.5).starts_with("-3分"));
    }
}
