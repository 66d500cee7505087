//! Inspects the semantic metadata derived for an item model.
//!
//! Loads a tag catalog (the built-in one unless a JSON catalog is given),
//! reports suffixes that resolve ambiguously, runs the metadata cache over a
//! JSON item model and prints every resulting record.
//!
//! Usage: `semantic-tags-inspect <items.json> [catalog.json]`

use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fs;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use semantic_tags::{
    CacheOptions, Item, ItemStore, MetadataCache, TagDefinition, TagRegistry, default_catalog,
};
use serde::Deserialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// =============================================================================
// JSON DATA STRUCTURES
// =============================================================================

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: String,
    category: Option<String>,
    label: Option<String>,
    #[serde(default)]
    synonyms: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemEntry {
    name: String,
    #[serde(default)]
    tags: BTreeSet<String>,
    #[serde(default)]
    groups: BTreeSet<String>,
    members: Option<BTreeSet<String>>,
    #[serde(default)]
    read_only: bool,
}

// =============================================================================
// CONVERSION
// =============================================================================

fn load_catalog(path: &str) -> Result<Vec<TagDefinition>, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    let entries: Vec<CatalogEntry> = serde_json::from_str(&json)?;

    let mut catalog = Vec::with_capacity(entries.len());
    for entry in entries {
        let label = entry.label.unwrap_or_else(|| entry.id.clone());
        let mut def = TagDefinition::from_parts(entry.id, entry.category.as_deref(), label)?;
        def.synonyms = entry.synonyms;
        catalog.push(def);
    }
    Ok(catalog)
}

fn load_items(path: &str) -> Result<Vec<Item>, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    let entries: Vec<ItemEntry> = serde_json::from_str(&json)?;
    Ok(entries
        .into_iter()
        .map(|entry| Item {
            name: entry.name,
            tags: entry.tags,
            group_names: entry.groups,
            members: entry.members,
            read_only: entry.read_only,
        })
        .collect())
}

// =============================================================================
// MAIN
// =============================================================================

fn run(items_path: &str, catalog_path: Option<&str>) -> Result<(), Box<dyn Error>> {
    let load_start = Instant::now();
    let registry = match catalog_path {
        Some(path) => {
            println!("Loading catalog from: {}", path);
            TagRegistry::load(&load_catalog(path)?)?
        }
        None => {
            println!("Using built-in catalog");
            TagRegistry::load(default_catalog())?
        }
    };
    println!(
        "Indexed {} tag definitions in {:?}",
        registry.len(),
        load_start.elapsed()
    );

    if !registry.ambiguities().is_empty() {
        println!("\nAmbiguous suffixes ({}):", registry.ambiguities().len());
        for ambiguity in registry.ambiguities() {
            println!(
                "  {:<24} -> {} (shadows {})",
                ambiguity.suffix, ambiguity.winner, ambiguity.shadowed
            );
        }
    }

    println!("\nLoading items from: {}", items_path);
    let items = load_items(items_path)?;
    let item_count = items.len();
    let store = Arc::new(ItemStore::from_items(items));

    let cache_start = Instant::now();
    let cache = MetadataCache::new(Arc::new(registry), store, CacheOptions::default());
    cache.start();
    let cache_time = cache_start.elapsed();

    let records = cache.get_all();
    println!(
        "Classified {} of {} items in {:?}\n",
        records.len(),
        item_count,
        cache_time
    );

    for record in &records {
        println!("{}  {}", record.key, record.semantic_type);
        for (relation, target) in &record.relations {
            println!("    {:<12} {}", relation.as_str(), target);
        }
    }

    info!(records = records.len(), "inspection finished");
    cache.stop();
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(items_path) = args.get(1) else {
        eprintln!("usage: semantic-tags-inspect <items.json> [catalog.json]");
        return ExitCode::from(2);
    };

    match run(items_path, args.get(2).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "inspection failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
