use crate::models::{Property, PropertyId};
use crate::pipeline::filter::filter_properties;
use crate::pipeline::sort::sort_properties;
use crate::pipeline::stats::calculate_stats;
use crate::pipeline::types::{FilterState, SortOption, Stats, ViewMode};

/// Everything the listing page renders for one state snapshot
#[derive(Debug, Clone)]
pub struct PortalView<'a> {
    /// Listings to display, already sorted
    pub properties: Vec<&'a Property>,
    /// Dashboard stats over the filtered set
    pub stats: Stats,
    pub filtered_count: usize,
    pub favorites_count: usize,
}

/// Derive the displayed listings from the full catalogue and UI state.
///
/// Favorites mode ignores the filters and shows every favorited listing.
/// Stats always describe the filtered set.
pub fn compose_view<'a>(
    all: &'a [Property],
    filters: &FilterState,
    mode: ViewMode,
    favorites: &[PropertyId],
    sort: Option<SortOption>,
) -> PortalView<'a> {
    let filtered = filter_properties(all, filters);

    let displayed = match mode {
        ViewMode::All => sort_properties(&filtered, sort),
        ViewMode::Favorites => {
            let favorite_properties: Vec<&Property> =
                all.iter().filter(|p| favorites.contains(&p.id)).collect();
            sort_properties(&favorite_properties, sort)
        }
    };

    PortalView {
        properties: displayed,
        stats: calculate_stats(filtered.iter().copied()),
        filtered_count: filtered.len(),
        favorites_count: favorites.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listings() -> Vec<Property> {
        vec![
            Property::new(1, "123 Collins Street", "Melbourne CBD", 850_000, 1200, "2024-11-15"),
            Property::new(2, "45 Brunswick Street", "Fitzroy", 1_200_000, 1800, "2024-11-20"),
            Property::new(3, "78 Chapel Street", "South Yarra", 950_000, 1400, "2024-12-01"),
        ]
    }

    #[test]
    fn test_all_mode_filters_then_sorts() {
        let all = listings();
        let filters = FilterState {
            min_price: Some(900_000.0),
            ..Default::default()
        };

        let view = compose_view(&all, &filters, ViewMode::All, &[1], Some(SortOption::PriceAsc));

        let ids: Vec<u64> = view.properties.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2]);
        assert_eq!(view.filtered_count, 2);
        assert_eq!(view.stats.total, 2);
        assert_eq!(view.favorites_count, 1);
    }

    #[test]
    fn test_favorites_mode_ignores_filters_but_stats_do_not() {
        let all = listings();
        let filters = FilterState {
            suburb: "Fitzroy".to_string(),
            ..Default::default()
        };

        let view = compose_view(&all, &filters, ViewMode::Favorites, &[3, 1], Some(SortOption::DateNewest));

        let ids: Vec<u64> = view.properties.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(view.stats.total, 1);
        assert_eq!(view.filtered_count, 1);
    }

    #[test]
    fn test_unknown_favorite_ids_are_ignored() {
        let all = listings();
        let view = compose_view(&all, &FilterState::default(), ViewMode::Favorites, &[42], None);
        assert!(view.properties.is_empty());
        assert_eq!(view.favorites_count, 1);
    }
}
