use property_portal::pipeline::{calculate_stats, filter_properties, sort_properties, FilterState, SortOption};
use property_portal::Property;
use proptest::prelude::*;

const SUBURBS: [&str; 4] = ["Fitzroy", "Carlton", "Richmond", "St Kilda"];

fn arb_property() -> impl Strategy<Value = Property> {
    (
        0usize..SUBURBS.len(),
        // narrow ranges so equal keys show up often
        0u64..8,
        1u32..6,
        1u32..=28,
        prop::option::of("[A-Za-z]{3,8}"),
    )
        .prop_map(|(suburb, price, sqft, day, property_type)| {
            let mut property = Property::new(
                0,
                format!("{} Test Street", day),
                SUBURBS[suburb],
                price * 100_000,
                sqft * 300,
                format!("2024-11-{:02}", day),
            );
            property.property_type = property_type;
            property
        })
}

fn arb_catalogue() -> impl Strategy<Value = Vec<Property>> {
    prop::collection::vec(arb_property(), 0..30).prop_map(|mut properties| {
        for (i, property) in properties.iter_mut().enumerate() {
            property.id = i as u64 + 1;
        }
        properties
    })
}

fn arb_filters() -> impl Strategy<Value = FilterState> {
    (
        prop::option::of(0u64..8),
        prop::option::of(0u64..8),
        prop::option::of(1u32..6),
        prop::option::of(1u32..6),
        prop::option::of(prop::sample::select(SUBURBS.to_vec())),
        prop::option::of(1u32..=28),
        prop::option::of(1u32..=28),
        prop::option::of("[a-z]{1,2}"),
    )
        .prop_map(
            |(min_price, max_price, min_sqft, max_sqft, suburb, date_from, date_to, term)| FilterState {
                search_term: term.unwrap_or_default(),
                // off-grid bounds fall between listing values
                min_price: min_price.map(|p| p as f64 * 100_000.0 - 50_000.0),
                max_price: max_price.map(|p| p as f64 * 100_000.0),
                min_sqft: min_sqft.map(|s| f64::from(s * 300)),
                max_sqft: max_sqft.map(|s| f64::from(s * 300) + 150.5),
                suburb: suburb.map(str::to_string).unwrap_or_default(),
                date_from: date_from.map(|d| format!("2024-11-{:02}", d)).unwrap_or_default(),
                date_to: date_to.map(|d| format!("2024-11-{:02}", d)).unwrap_or_default(),
            },
        )
}

fn satisfies(p: &Property, f: &FilterState) -> bool {
    let term = f.search_term.to_lowercase();
    (term.is_empty()
        || p.address.to_lowercase().contains(&term)
        || p.suburb.to_lowercase().contains(&term))
        && (f.suburb.is_empty() || p.suburb == f.suburb)
        && f.min_price.map_or(true, |min| p.price as f64 >= min)
        && f.max_price.map_or(true, |max| p.price as f64 <= max)
        && f.min_sqft.map_or(true, |min| f64::from(p.sqft) >= min)
        && f.max_sqft.map_or(true, |max| f64::from(p.sqft) <= max)
        && (f.date_from.is_empty() || p.date >= f.date_from)
        && (f.date_to.is_empty() || p.date <= f.date_to)
}

fn sort_key(p: &Property, sort: SortOption) -> (u64, String) {
    match sort {
        SortOption::PriceAsc | SortOption::PriceDesc => (p.price, String::new()),
        SortOption::SizeAsc | SortOption::SizeDesc => (u64::from(p.sqft), String::new()),
        SortOption::DateNewest | SortOption::DateOldest => (0, p.date.clone()),
    }
}

proptest! {
    #[test]
    fn unset_filters_are_identity(catalogue in arb_catalogue()) {
        let filtered = filter_properties(&catalogue, &FilterState::default());
        let expected: Vec<&Property> = catalogue.iter().collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn filter_keeps_exactly_matching_listings(catalogue in arb_catalogue(), filters in arb_filters()) {
        let filtered = filter_properties(&catalogue, &filters);
        let expected: Vec<&Property> = catalogue.iter().filter(|p| satisfies(p, &filters)).collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn sort_is_stable_for_every_key(catalogue in arb_catalogue(), index in 0usize..6) {
        let sort = SortOption::ALL[index];
        let refs: Vec<&Property> = catalogue.iter().collect();
        let sorted = sort_properties(&refs, Some(sort));

        prop_assert_eq!(sorted.len(), refs.len());
        for pair in sorted.windows(2) {
            let (a, b) = (sort_key(pair[0], sort), sort_key(pair[1], sort));
            match sort {
                SortOption::PriceAsc | SortOption::SizeAsc | SortOption::DateOldest => prop_assert!(a <= b),
                _ => prop_assert!(a >= b),
            }
            // ids follow input order, so equal keys must keep ascending ids
            if a == b {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn stats_match_naive_computation(catalogue in arb_catalogue()) {
        let stats = calculate_stats(&catalogue);
        prop_assert_eq!(stats.total, catalogue.len());
        if catalogue.is_empty() {
            prop_assert_eq!(stats.avg_price, 0);
            prop_assert!(stats.by_type.is_empty());
        } else {
            let min = catalogue.iter().map(|p| p.price).min().unwrap();
            let max = catalogue.iter().map(|p| p.price).max().unwrap();
            let mean = catalogue.iter().map(|p| p.price as f64).sum::<f64>() / catalogue.len() as f64;
            prop_assert_eq!(stats.min_price, min);
            prop_assert_eq!(stats.max_price, max);
            prop_assert_eq!(stats.avg_price, mean.round() as u64);
            prop_assert_eq!(stats.by_suburb.values().sum::<usize>(), catalogue.len());
            prop_assert_eq!(stats.by_type.values().sum::<usize>(), catalogue.len());
        }
    }
}
