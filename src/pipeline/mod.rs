pub mod filter;
pub mod sort;
pub mod stats;
pub mod types;
pub mod view;

pub use filter::{available_suburbs, filter_properties};
pub use sort::sort_properties;
pub use stats::calculate_stats;
pub use types::{parse_bound, FilterState, SortOption, Stats, ViewMode};
pub use view::{compose_view, PortalView};
