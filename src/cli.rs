use clap::{Args, Parser, Subcommand};
use property_portal::pipeline::{parse_bound, FilterState, SortOption};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "property-portal")]
#[command(about = "Browse, filter and shortlist property listings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML config file
    #[arg(long, env = "PROPERTY_PORTAL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory for favorites and recently viewed state
    #[arg(long, env = "PROPERTY_PORTAL_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Listing source: sample, file:<path> or a URL
    #[arg(long, global = true)]
    pub source: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List listings matching the filters
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show dashboard stats for the filtered listings
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the suburbs present in the catalogue
    Suburbs,

    /// Show one listing and remember it as recently viewed
    Show {
        id: u64,
    },

    /// Manage favorite listings
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Show recently viewed listings
    Recent {
        /// Forget the recently viewed history
        #[arg(long)]
        clear: bool,
    },

    /// Export the displayed listings as CSV
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// Output file (defaults to properties-<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Send an enquiry about a listing
    Contact {
        id: u64,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        /// Defaults to a message naming the listing
        #[arg(long)]
        message: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FavoritesAction {
    /// List favorite listings
    List,
    /// Add or remove a listing
    Toggle { id: u64 },
    /// Remove every favorite
    Clear,
}

/// Search constraints; numeric values that do not parse are ignored
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Text matched against address and suburb
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Exact suburb name
    #[arg(long, default_value = "")]
    pub suburb: String,

    #[arg(long)]
    pub min_price: Option<String>,

    #[arg(long)]
    pub max_price: Option<String>,

    #[arg(long)]
    pub min_sqft: Option<String>,

    #[arg(long)]
    pub max_sqft: Option<String>,

    /// Earliest listing date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub date_from: String,

    /// Latest listing date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub date_to: String,
}

impl FilterArgs {
    pub fn to_filter_state(&self) -> FilterState {
        FilterState {
            search_term: self.search.clone(),
            min_price: self.min_price.as_deref().and_then(parse_bound),
            max_price: self.max_price.as_deref().and_then(parse_bound),
            min_sqft: self.min_sqft.as_deref().and_then(parse_bound),
            max_sqft: self.max_sqft.as_deref().and_then(parse_bound),
            suburb: self.suburb.clone(),
            date_from: self.date_from.clone(),
            date_to: self.date_to.clone(),
        }
    }
}

/// Filters plus the view mode and ordering of the listing page
#[derive(Args, Debug, Default, Clone)]
pub struct ViewArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// price-asc, price-desc, date-newest, date-oldest, size-asc or size-desc
    #[arg(long, default_value = "date-newest")]
    pub sort: String,

    /// Show favorites instead of the filtered catalogue
    #[arg(long)]
    pub favorites: bool,
}

impl ViewArgs {
    /// Requested ordering; an unknown key keeps listing order
    pub fn sort_option(&self) -> Option<SortOption> {
        match self.sort.parse() {
            Ok(option) => Some(option),
            Err(err) => {
                warn!("{}, keeping listing order", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_bounds_are_unset() {
        let args = FilterArgs {
            min_price: Some("900000".to_string()),
            max_price: Some("lots".to_string()),
            min_sqft: Some(String::new()),
            ..Default::default()
        };

        let filters = args.to_filter_state();
        assert_eq!(filters.min_price, Some(900_000.0));
        assert_eq!(filters.max_price, None);
        assert_eq!(filters.min_sqft, None);
    }

    #[test]
    fn test_fractional_bounds_are_kept() {
        let cli = Cli::try_parse_from([
            "property-portal",
            "stats",
            "--min-sqft",
            "1200.5",
            "--max-price",
            "850000.5",
        ])
        .unwrap();

        match cli.command {
            Commands::Stats { filters } => {
                let filters = filters.to_filter_state();
                assert_eq!(filters.min_sqft, Some(1200.5));
                assert_eq!(filters.max_price, Some(850_000.5));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parses_list_command() {
        let cli = Cli::try_parse_from([
            "property-portal",
            "list",
            "--suburb",
            "Fitzroy",
            "--sort",
            "price-asc",
            "--favorites",
        ])
        .unwrap();

        match cli.command {
            Commands::List { view } => {
                assert_eq!(view.filters.suburb, "Fitzroy");
                assert_eq!(view.sort_option(), Some(SortOption::PriceAsc));
                assert!(view.favorites);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_sort_falls_back() {
        let view = ViewArgs {
            sort: "cheapest".to_string(),
            ..Default::default()
        };
        assert_eq!(view.sort_option(), None);
    }
}
