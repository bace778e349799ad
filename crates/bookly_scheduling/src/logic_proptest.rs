#[cfg(test)]
mod tests {
    use crate::logic::filter_available;
    use crate::slots::{standard_slots, weekday_slots};
    use bookly_common::{DateKey, SlotOverrides};
    use bookly_config::SlotPolicy;
    use chrono::{Datelike, Duration, NaiveDate, Weekday};
    use proptest::prelude::*;

    // Any day between 2000-01-01 and roughly 2054
    fn date_strategy() -> impl Strategy<Value = NaiveDate> {
        (0i64..20_000).prop_map(|offset| {
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
        })
    }

    fn policy_strategy() -> impl Strategy<Value = SlotPolicy> {
        prop_oneof![Just(SlotPolicy::Hourly), Just(SlotPolicy::TwoHour)]
    }

    fn key(date: NaiveDate) -> DateKey {
        DateKey::parse(&date.format("%Y-%m-%d").to_string()).unwrap()
    }

    proptest! {
        #[test]
        fn test_weekends_never_offer_slots(date in date_strategy(), policy in policy_strategy()) {
            let slots = standard_slots(&key(date), policy);
            match date.weekday() {
                Weekday::Sat | Weekday::Sun => prop_assert!(slots.is_empty()),
                _ => prop_assert_eq!(slots, weekday_slots(policy)),
            }
        }

        #[test]
        fn test_date_key_round_trips_display(date in date_strategy()) {
            let raw = date.format("%Y-%m-%d").to_string();
            prop_assert_eq!(key(date).key(), raw);
        }

        // Result is the standard list minus booked and disabled slots, in standard order
        #[test]
        fn test_filter_is_ordered_subsequence(
            policy in policy_strategy(),
            booked_mask in proptest::collection::vec(any::<bool>(), 7),
            override_mask in proptest::collection::vec(proptest::option::of(any::<bool>()), 7),
        ) {
            let standard = weekday_slots(policy);
            let booked: Vec<String> = standard
                .iter()
                .zip(&booked_mask)
                .filter(|(_, b)| **b)
                .map(|(s, _)| s.to_string())
                .collect();
            let overrides: SlotOverrides = standard
                .iter()
                .zip(&override_mask)
                .filter_map(|(s, o)| o.map(|enabled| (s.to_string(), enabled)))
                .collect();

            let available = filter_available(standard, &booked, &overrides);

            let expected: Vec<String> = standard
                .iter()
                .enumerate()
                .filter(|(i, _)| !booked_mask[*i] && override_mask[*i] != Some(false))
                .map(|(_, s)| s.to_string())
                .collect();
            prop_assert_eq!(&available, &expected);

            // order preserved: positions in the standard list strictly increase
            let positions: Vec<usize> = available
                .iter()
                .map(|s| standard.iter().position(|x| x == s).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
