use crate::classify::outcome::{ChartSlice, NutrientChart};
use crate::model::{Parameter, SoilRecord};
use rust_decimal::{Decimal, RoundingStrategy};

/// Build the N/P/K proportion chart from raw readings.
pub fn nutrient_proportions(record: &SoilRecord) -> NutrientChart {
    let nutrients = [
        Parameter::Nitrogen,
        Parameter::Phosphorus,
        Parameter::Potassium,
    ];
    // None when the readings are too large to add up.
    let total = nutrients
        .iter()
        .try_fold(Decimal::ZERO, |acc, &p| acc.checked_add(record.value(p)));

    let slices = nutrients
        .iter()
        .map(|&p| {
            let value = record.value(p);
            let share_pct = total
                .filter(|t| *t > Decimal::ZERO)
                .and_then(|t| value.checked_div(t))
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .map(|pct| {
                    pct.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
                        .normalize()
                })
                .unwrap_or(Decimal::ZERO);
            ChartSlice {
                label: p.label().to_string(),
                value,
                share_pct,
            }
        })
        .collect();

    NutrientChart { slices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_shares() {
        let record = SoilRecord::new("S1", dec!(50), dec!(30), dec!(20), dec!(6.5), dec!(35));
        let chart = nutrient_proportions(&record);
        let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Nitrogen (N)", "Phosphorus (P)", "Potassium (K)"]);
        assert_eq!(chart.slices[0].share_pct, dec!(50));
        assert_eq!(chart.slices[1].share_pct, dec!(30));
        assert_eq!(chart.slices[2].share_pct, dec!(20));
    }

    #[test]
    fn test_raw_values_are_kept() {
        let record = SoilRecord::new("S1", dec!(3), dec!(0.5), dec!(2), dec!(8.2), dec!(10));
        let chart = nutrient_proportions(&record);
        assert_eq!(chart.slices[1].value, dec!(0.5));
        // 0.5 / 5.5 = 9.09%
        assert_eq!(chart.slices[1].share_pct, dec!(9.1));
    }

    #[test]
    fn test_overflowing_total_gives_zero_shares() {
        let huge = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
        let record = SoilRecord::new("S9", huge, huge, dec!(1), dec!(6.5), dec!(35));
        let chart = nutrient_proportions(&record);
        assert_eq!(chart.slices[0].value, huge);
        assert!(chart.slices.iter().all(|s| s.share_pct == Decimal::ZERO));
    }

    #[test]
    fn test_all_zero_total() {
        let record = SoilRecord::new("S0", dec!(0), dec!(0), dec!(0), dec!(7), dec!(30));
        let chart = nutrient_proportions(&record);
        assert!(chart.slices.iter().all(|s| s.share_pct == Decimal::ZERO));
    }
}
