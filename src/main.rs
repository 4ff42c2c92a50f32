mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands, FavoritesAction, ViewArgs};
use property_portal::config::PortalConfig;
use property_portal::contact::{self, ContactError, ContactRequest, ContactSubmitter, HttpSubmitter, SimulatedSubmitter};
use property_portal::export::{export_filename, to_csv};
use property_portal::format::{format_date, format_price};
use property_portal::pipeline::{self, compose_view, PortalView, SortOption, Stats, ViewMode};
use property_portal::sources::{load_catalogue, source_from_spec};
use property_portal::store::{FavoritesStore, FileStorage, KeyValueStorage, RecentlyViewedStore};
use property_portal::{Property, PropertyId};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = PortalConfig::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(source) = cli.source {
        config.source = source;
    }

    let source = source_from_spec(&config.source)?;
    let properties = load_catalogue(source.as_ref()).await?;

    let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(&config.data_dir));
    let mut favorites = FavoritesStore::load(storage.clone());
    let mut recent = RecentlyViewedStore::load(storage);

    match cli.command {
        Commands::List { view } => {
            let sort = view.sort_option();
            let page = compose(&properties, &view, sort, &favorites);
            print_stats(&page.stats);
            println!(
                "All Properties ({}) | Favorites ({})",
                page.filtered_count, page.favorites_count
            );
            if let Some(sort) = sort {
                println!("Sorted by: {}", sort.label());
            }
            if !view.favorites && view.filters.to_filter_state().is_active() {
                println!("Filters active");
            }
            println!();
            print_listings(&page.properties, &favorites);
        }
        Commands::Stats { filters } => {
            let filtered = pipeline::filter_properties(&properties, &filters.to_filter_state());
            let stats = pipeline::calculate_stats(filtered.iter().copied());
            print_stats(&stats);
            print_groups(&stats);
        }
        Commands::Suburbs => {
            for suburb in pipeline::available_suburbs(&properties) {
                println!("{}", suburb);
            }
        }
        Commands::Show { id } => {
            let property = find(&properties, id)?;
            recent.record(property.id)?;
            print_details(property, favorites.is_favorite(property.id));
        }
        Commands::Favorites { action } => match action {
            FavoritesAction::List => {
                let favorite_properties: Vec<&Property> =
                    properties.iter().filter(|p| favorites.is_favorite(p.id)).collect();
                println!("{} saved to favorites\n", count_label(favorites.len()));
                print_listings(&favorite_properties, &favorites);
            }
            FavoritesAction::Toggle { id } => {
                let property = find(&properties, id)?;
                if favorites.toggle(property.id)? {
                    println!("♥ Saved {} to favorites", property.address);
                } else {
                    println!("Removed {} from favorites", property.address);
                }
            }
            FavoritesAction::Clear => {
                favorites.clear()?;
                println!("Cleared favorites");
            }
        },
        Commands::Recent { clear } => {
            if clear {
                recent.clear()?;
                println!("Cleared recently viewed");
            } else {
                let viewed: Vec<&Property> = recent
                    .ids()
                    .iter()
                    .filter_map(|id| properties.iter().find(|p| p.id == *id))
                    .collect();
                print_listings(&viewed, &favorites);
            }
        }
        Commands::Export { view, output } => {
            let page = compose(&properties, &view, view.sort_option(), &favorites);
            let path = output.unwrap_or_else(|| export_filename(chrono::Local::now().date_naive()).into());
            tokio::fs::write(&path, to_csv(page.properties.iter().copied()))
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("💾 Exported {} properties to {}", page.properties.len(), path.display());
        }
        Commands::Contact {
            id,
            name,
            email,
            phone,
            message,
        } => {
            let property = find(&properties, id)?;
            let request = ContactRequest {
                name,
                email,
                phone,
                message: message.unwrap_or_else(|| contact::default_message(property)),
            };
            let submitter: Box<dyn ContactSubmitter> = match &config.contact.endpoint {
                Some(endpoint) => Box::new(HttpSubmitter::new(endpoint.as_str())?),
                None => Box::new(SimulatedSubmitter::new(config.contact.delay())),
            };

            match contact::send_enquiry(submitter.as_ref(), request, property, &config.page_url).await {
                Ok(_) => println!("✅ Message sent! The agent will be in touch about {}.", property.address),
                Err(err) => return Err(contact_failure(err)),
            }
        }
    }

    Ok(())
}

fn compose<'a>(
    properties: &'a [Property],
    view: &ViewArgs,
    sort: Option<SortOption>,
    favorites: &FavoritesStore,
) -> PortalView<'a> {
    let mode = if view.favorites { ViewMode::Favorites } else { ViewMode::All };
    compose_view(
        properties,
        &view.filters.to_filter_state(),
        mode,
        favorites.ids(),
        sort,
    )
}

fn contact_failure(err: ContactError) -> anyhow::Error {
    warn!("Contact submission failed: {}", err);
    anyhow::Error::new(err).context("Failed to send message. Please try again.")
}

fn find(properties: &[Property], id: PropertyId) -> anyhow::Result<&Property> {
    properties
        .iter()
        .find(|p| p.id == id)
        .with_context(|| format!("No property with id {}", id))
}

fn count_label(count: usize) -> String {
    format!("{} {}", count, if count == 1 { "property" } else { "properties" })
}

fn print_stats(stats: &Stats) {
    println!("Total Properties: {}", stats.total);
    println!("Average Price:    {}", format_price(stats.avg_price));
    println!(
        "Price Range:      {} to {}",
        format_price(stats.min_price),
        format_price(stats.max_price)
    );
    println!("Average Size:     {} sqft", stats.avg_sqft);
    println!("Suburbs:          {} locations", stats.suburb_count());
    println!();
}

fn print_groups(stats: &Stats) {
    println!("By suburb:");
    for (suburb, count) in &stats.by_suburb {
        println!("   {}: {}", suburb, count);
    }
    println!("By type:");
    for (property_type, count) in &stats.by_type {
        println!("   {}: {}", property_type, count);
    }
}

fn print_listings(properties: &[&Property], favorites: &FavoritesStore) {
    if properties.is_empty() {
        println!("No properties found");
        return;
    }

    for (i, property) in properties.iter().enumerate() {
        let marker = if favorites.is_favorite(property.id) { " ♥" } else { "" };
        println!("{}. {}, {} ({}){}", i + 1, property.address, property.suburb, format_price(property.price), marker);

        let mut facts = Vec::new();
        if let Some(bedrooms) = property.bedrooms {
            facts.push(format!("{} bed", bedrooms));
        }
        if let Some(bathrooms) = property.bathrooms {
            facts.push(format!("{} bath", bathrooms));
        }
        facts.push(format!("{} sqft", property.sqft));
        if let Some(property_type) = &property.property_type {
            facts.push(property_type.clone());
        }
        println!("   {}", facts.join(" · "));
        println!("   Listed {} | ID: {}", format_date(&property.date), property.id);
        println!();
    }
}

fn print_details(property: &Property, favorite: bool) {
    println!("{}, {}{}", property.address, property.suburb, if favorite { " ♥" } else { "" });
    println!("{}", format_price(property.price));
    if let Some(status) = property.status {
        println!("Status: {:?}", status);
    }
    println!("Listed: {}", format_date(&property.date));
    println!("Size: {} sqft", property.sqft);

    let optional_numbers = [
        ("Bedrooms", property.bedrooms),
        ("Bathrooms", property.bathrooms),
        ("Parking", property.parking),
        ("Year built", property.year_built),
        ("Lot size", property.lot_size),
    ];
    for (label, value) in optional_numbers {
        if let Some(value) = value {
            println!("{}: {}", label, value);
        }
    }

    let optional_text = [
        ("Type", &property.property_type),
        ("Heating", &property.heating),
        ("Cooling", &property.cooling),
    ];
    for (label, value) in optional_text {
        if let Some(value) = value {
            println!("{}: {}", label, value);
        }
    }

    if let Some(description) = &property.description {
        println!("\n{}", description);
    }
    if !property.features.is_empty() {
        println!("Features: {}", property.features.join(", "));
    }
    let gallery = property.gallery();
    if !gallery.is_empty() {
        println!("Images: {}", gallery.len());
    }
    if let Some(agent) = &property.agent {
        println!("Agent: {} ({}, {})", agent.name, agent.phone, agent.email);
    }
}
