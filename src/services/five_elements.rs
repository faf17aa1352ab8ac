// src/services/five_elements.rs
//
// 五行統計、日主強弱、喜忌與十神。

use crate::models::{
    DayMasterInfo, DayMasterStrength, FavorableElements, FiveElement, FiveElementsCount,
    HeavenlyStem, TenGod, ALL_ELEMENTS,
};
use crate::services::sexagenary::StemBranch;

/// Tally the element of every stem and branch across the four pillars.
/// The total is always 8.
pub fn calculate_five_elements(pillars: &[StemBranch; 4]) -> FiveElementsCount {
    let mut count = FiveElementsCount::default();
    for pillar in pillars {
        count.add(pillar.stem.element());
        count.add(pillar.branch.element());
    }
    count
}

/// Per-element strength wording by occurrence count.
pub fn five_element_strength(count: u8) -> &'static str {
    match count {
        0 => "缺",
        1 => "弱",
        2 => "平",
        3 => "旺",
        _ => "極旺",
    }
}

/// Elements absent from the chart.
pub fn missing_elements(counts: &FiveElementsCount) -> Vec<FiveElement> {
    ALL_ELEMENTS.iter().copied().filter(|&e| counts.get(e) == 0).collect()
}

/// Elements sharing the maximum count (ties possible).
pub fn strongest_elements(counts: &FiveElementsCount) -> Vec<FiveElement> {
    let max = ALL_ELEMENTS.iter().map(|&e| counts.get(e)).max().unwrap_or(0);
    ALL_ELEMENTS.iter().copied().filter(|&e| counts.get(e) == max).collect()
}

/// Day-master display info, e.g. 己 → "己土".
pub fn day_master_info(stem: HeavenlyStem) -> DayMasterInfo {
    let element = stem.element();
    DayMasterInfo {
        stem,
        element,
        display_name: format!("{}{}", stem.glyph(), element.glyph()),
    }
}

/// Day-master strength: same-type (印 + 比) against different-type
/// (食傷 + 官殺 + 財). Increasing same-type while holding different-type
/// fixed never weakens the verdict.
pub fn calculate_day_master_strength(
    element: FiveElement,
    counts: &FiveElementsCount,
) -> DayMasterStrength {
    let same_type_count = counts.get(element.produced_by()) + counts.get(element);
    let different_type_count = counts.get(element.produces())
        + counts.get(element.controlled_by())
        + counts.get(element.controls());

    let d = same_type_count as i32 - different_type_count as i32;
    let strength_label = if d >= 3 {
        "極強"
    } else if d >= 2 {
        "偏強"
    } else if d >= -1 {
        "中和"
    } else if d >= -3 {
        "偏弱"
    } else {
        "極弱"
    };

    DayMasterStrength {
        is_strong: same_type_count >= different_type_count,
        same_type_count,
        different_type_count,
        strength_label,
    }
}

/// Favorable/unfavorable elements. A strong day master wants draining
/// (我生、克我、我克); a weak one wants support (生我、比我). The two sets
/// are disjoint and together cover all five elements.
pub fn calculate_favorable_elements(
    element: FiveElement,
    strength: &DayMasterStrength,
) -> FavorableElements {
    let drain = vec![element.produces(), element.controlled_by(), element.controls()];
    let support = vec![element.produced_by(), element];

    if strength.is_strong {
        FavorableElements {
            favorable: drain,
            unfavorable: support,
            explanation: format!("日主{}，喜洩耗，忌生扶", strength.strength_label),
        }
    } else {
        FavorableElements {
            favorable: support,
            unfavorable: drain,
            explanation: format!("日主{}，喜生扶，忌洩耗", strength.strength_label),
        }
    }
}

/// Ten-god relationship of `other` to the day master: five-element cycle
/// position crossed with polarity parity. The day stem itself is never
/// classified; callers skip it.
pub fn ten_god(day_master: HeavenlyStem, other: HeavenlyStem) -> TenGod {
    let dm = day_master.element();
    let oe = other.element();
    let same_polarity = day_master.is_yang() == other.is_yang();

    if oe == dm {
        // 比劫
        if same_polarity { TenGod::BiJian } else { TenGod::JieCai }
    } else if dm.produces() == oe {
        // 我生：食傷
        if same_polarity { TenGod::ShiShen } else { TenGod::ShangGuan }
    } else if oe.produces() == dm {
        // 生我：印
        if same_polarity { TenGod::PianYin } else { TenGod::ZhengYin }
    } else if dm.controls() == oe {
        // 我克：財
        if same_polarity { TenGod::PianCai } else { TenGod::ZhengCai }
    } else {
        // 克我：官殺
        if same_polarity { TenGod::QiSha } else { TenGod::ZhengGuan }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EarthlyBranch as B, HeavenlyStem as S};

    fn pillar(stem: S, branch: B) -> StemBranch {
        StemBranch { stem, branch }
    }

    #[test]
    fn tally_of_known_chart() {
        // 甲子 乙丑 丙寅 丁卯 → 木4 火2 土1 金0 水1
        let pillars = [
            pillar(S::Jia, B::Zi),
            pillar(S::Yi, B::Chou),
            pillar(S::Bing, B::Yin),
            pillar(S::Ding, B::Mao),
        ];
        let count = calculate_five_elements(&pillars);
        assert_eq!(count.metal, 0);
        assert_eq!(count.wood, 4);
        assert_eq!(count.water, 1);
        assert_eq!(count.fire, 2);
        assert_eq!(count.earth, 1);
        assert_eq!(count.total(), 8);
    }

    #[test]
    fn strength_wording() {
        assert_eq!(five_element_strength(0), "缺");
        assert_eq!(five_element_strength(1), "弱");
        assert_eq!(five_element_strength(2), "平");
        assert_eq!(five_element_strength(3), "旺");
        assert_eq!(five_element_strength(4), "極旺");
        assert_eq!(five_element_strength(5), "極旺");
    }

    #[test]
    fn missing_and_present_partition_the_elements() {
        let counts = FiveElementsCount { metal: 0, wood: 2, water: 1, fire: 3, earth: 0 };
        let missing = missing_elements(&counts);
        assert_eq!(missing, vec![FiveElement::Metal, FiveElement::Earth]);
        let present: Vec<_> =
            ALL_ELEMENTS.iter().copied().filter(|&e| counts.get(e) > 0).collect();
        assert_eq!(missing.len() + present.len(), 5);
        assert!(missing.iter().all(|e| !present.contains(e)));
    }

    #[test]
    fn strongest_handles_ties() {
        let counts = FiveElementsCount { metal: 2, wood: 2, water: 1, fire: 2, earth: 1 };
        let strongest = strongest_elements(&counts);
        assert_eq!(
            strongest,
            vec![FiveElement::Metal, FiveElement::Wood, FiveElement::Fire]
        );
    }

    #[test]
    fn day_master_display_names() {
        assert_eq!(day_master_info(S::Ji).display_name, "己土");
        assert_eq!(day_master_info(S::Jia).display_name, "甲木");
        assert_eq!(day_master_info(S::Ren).display_name, "壬水");
    }

    #[test]
    fn strong_day_master() {
        // 日主土：同類 火+土 = 5，異類 金+水+木 = 3
        let counts = FiveElementsCount { metal: 1, wood: 1, water: 1, fire: 2, earth: 3 };
        let strength = calculate_day_master_strength(FiveElement::Earth, &counts);
        assert!(strength.is_strong);
        assert_eq!(strength.same_type_count, 5);
        assert_eq!(strength.different_type_count, 3);
        assert_eq!(strength.strength_label, "偏強");
    }

    #[test]
    fn weak_day_master() {
        // 日主木：同類 水+木 = 2，異類 火+土+金 = 6
        let counts = FiveElementsCount { metal: 2, wood: 1, water: 1, fire: 2, earth: 2 };
        let strength = calculate_day_master_strength(FiveElement::Wood, &counts);
        assert!(!strength.is_strong);
        assert_eq!(strength.same_type_count, 2);
        assert_eq!(strength.different_type_count, 6);
        assert_eq!(strength.strength_label, "極弱");
    }

    #[test]
    fn balanced_day_master() {
        let counts = FiveElementsCount { metal: 1, wood: 2, water: 2, fire: 2, earth: 1 };
        let strength = calculate_day_master_strength(FiveElement::Wood, &counts);
        assert_eq!(strength.same_type_count, 4);
        assert_eq!(strength.different_type_count, 4);
        assert_eq!(strength.strength_label, "中和");
    }

    #[test]
    fn strength_is_monotonic_in_same_type_count() {
        let rank = |label: &str| match label {
            "極弱" => 0,
            "偏弱" => 1,
            "中和" => 2,
            "偏強" => 3,
            "極強" => 4,
            _ => unreachable!(),
        };
        let mut previous = -1i32;
        for earth in 0..=8u8 {
            let counts = FiveElementsCount { metal: 1, wood: 1, water: 1, fire: 0, earth };
            let strength = calculate_day_master_strength(FiveElement::Earth, &counts);
            let current = rank(strength.strength_label) as i32;
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn favorable_for_strong_earth() {
        let strength = DayMasterStrength {
            is_strong: true,
            same_type_count: 5,
            different_type_count: 3,
            strength_label: "偏強",
        };
        let result = calculate_favorable_elements(FiveElement::Earth, &strength);
        assert!(result.favorable.contains(&FiveElement::Metal));
        assert!(result.favorable.contains(&FiveElement::Wood));
        assert!(result.favorable.contains(&FiveElement::Water));
        assert!(result.unfavorable.contains(&FiveElement::Fire));
        assert!(result.unfavorable.contains(&FiveElement::Earth));
        assert_eq!(result.explanation, "日主偏強，喜洩耗，忌生扶");
    }

    #[test]
    fn favorable_for_weak_wood() {
        let strength = DayMasterStrength {
            is_strong: false,
            same_type_count: 2,
            different_type_count: 6,
            strength_label: "偏弱",
        };
        let result = calculate_favorable_elements(FiveElement::Wood, &strength);
        assert!(result.favorable.contains(&FiveElement::Water));
        assert!(result.favorable.contains(&FiveElement::Wood));
        assert!(result.unfavorable.contains(&FiveElement::Fire));
        assert!(result.unfavorable.contains(&FiveElement::Metal));
        assert!(result.unfavorable.contains(&FiveElement::Earth));
        assert_eq!(result.explanation, "日主偏弱，喜生扶，忌洩耗");
    }

    #[test]
    fn favorable_and_unfavorable_are_disjoint_and_complete() {
        for &element in &ALL_ELEMENTS {
            for is_strong in [true, false] {
                let strength = DayMasterStrength {
                    is_strong,
                    same_type_count: 4,
                    different_type_count: 4,
                    strength_label: "中和",
                };
                let result = calculate_favorable_elements(element, &strength);
                assert_eq!(result.favorable.len() + result.unfavorable.len(), 5);
                for e in &ALL_ELEMENTS {
                    assert!(result.favorable.contains(e) ^ result.unfavorable.contains(e));
                }
            }
        }
    }

    #[test]
    fn ten_gods_against_jia_day_master() {
        // 日主甲（陽木）
        assert_eq!(ten_god(S::Jia, S::Jia), TenGod::BiJian);
        assert_eq!(ten_god(S::Jia, S::Yi), TenGod::JieCai);
        assert_eq!(ten_god(S::Jia, S::Bing), TenGod::ShiShen);
        assert_eq!(ten_god(S::Jia, S::Ding), TenGod::ShangGuan);
        assert_eq!(ten_god(S::Jia, S::Wu), TenGod::PianCai);
        assert_eq!(ten_god(S::Jia, S::Ji), TenGod::ZhengCai);
        assert_eq!(ten_god(S::Jia, S::Geng), TenGod::QiSha);
        assert_eq!(ten_god(S::Jia, S::Xin), TenGod::ZhengGuan);
        assert_eq!(ten_god(S::Jia, S::Ren), TenGod::PianYin);
        assert_eq!(ten_god(S::Jia, S::Gui), TenGod::ZhengYin);
    }

    #[test]
    fn ten_gods_against_yin_day_master() {
        // 日主癸（陰水）：戊為正官（陽土克陰水、異性），壬為劫財
        assert_eq!(ten_god(S::Gui, S::Wu), TenGod::ZhengGuan);
        assert_eq!(ten_god(S::Gui, S::Ji), TenGod::QiSha);
        assert_eq!(ten_god(S::Gui, S::Ren), TenGod::JieCai);
        assert_eq!(ten_god(S::Gui, S::Gui), TenGod::BiJian);
        assert_eq!(ten_god(S::Gui, S::Jia), TenGod::ShangGuan);
        assert_eq!(ten_god(S::Gui, S::Yi), TenGod::ShiShen);
    }
}
