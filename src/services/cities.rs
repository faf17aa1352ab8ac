// src/services/cities.rs
use crate::models::City;

/// Built-in city registry. Longitudes are east-positive; each entry carries
/// an IANA timezone identifier so DST resolves automatically.
pub const CITIES: [City; 10] = [
    City { name: "台北 (Taipei)", key: "TPE", longitude: 121.56, iana: "Asia/Taipei" },
    City { name: "香港 (Hong Kong)", key: "HKG", longitude: 114.17, iana: "Asia/Hong_Kong" },
    // 北京使用中國標準時間
    City { name: "北京 (Beijing)", key: "PEK", longitude: 116.40, iana: "Asia/Shanghai" },
    City { name: "東京 (Tokyo)", key: "TYO", longitude: 139.69, iana: "Asia/Tokyo" },
    City { name: "新加坡 (Singapore)", key: "SIN", longitude: 103.81, iana: "Asia/Singapore" },
    City { name: "雪梨 (Sydney)", key: "SYD", longitude: 151.20, iana: "Australia/Sydney" },
    City { name: "倫敦 (London)", key: "LHR", longitude: -0.12, iana: "Europe/London" },
    City { name: "紐約 (New York)", key: "NYC", longitude: -74.00, iana: "America/New_York" },
    City { name: "洛杉磯 (Los Angeles)", key: "LAX", longitude: -118.24, iana: "America/Los_Angeles" },
    City { name: "巴黎 (Paris)", key: "CDG", longitude: 2.35, iana: "Europe/Paris" },
];

pub fn get_city_by_key(key: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.key == key)
}

/// 預設城市（台北）
pub fn default_city() -> &'static City {
    &CITIES[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_key() {
        let hk = get_city_by_key("HKG").unwrap();
        assert_eq!(hk.iana, "Asia/Hong_Kong");
        assert!((hk.longitude - 114.17).abs() < 1e-9);
    }

    #[test]
    fn unknown_key_is_none_and_default_is_taipei() {
        assert!(get_city_by_key("XXX").is_none());
        assert_eq!(default_city().key, "TPE");
    }
}
