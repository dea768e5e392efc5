//! Basic usage example for toiletmap-rs
//!
//! Loads the bundled Copenhagen dataset, renders it on a headless map and
//! walks through the location permission prompt.

use toiletmap_core::prelude::*;

fn main() {
    println!("=== toiletmap-rs Basic Usage ===\n");

    // Example 1: Records straight from the bundled asset
    println!("--- Example 1: Loading records ---");
    let Some(records) = load_records(&EmbeddedAssets, DEFAULT_ASSET) else {
        eprintln!("✗ Bundled dataset could not be loaded");
        return;
    };
    let stats = DatasetStats::from_records(&records);
    println!(
        "✓ {} toilets ({} accessible, {} not, {} unknown)",
        stats.total, stats.accessible, stats.not_accessible, stats.unknown
    );
    for r in records.iter().take(3) {
        println!("  - {} ({})", r.name, r.position());
    }
    println!();

    // Example 2: The map screen with a location prompt
    println!("--- Example 2: Map screen ---");
    let mut permissions = StaticPermissions::ungranted();
    let mut screen = MapScreen::on_map_ready(
        HeadlessMap::new(),
        &EmbeddedAssets,
        &mut permissions,
        &ScreenConfig::default(),
    );
    println!("  Markers placed: {}", screen.markers_placed());
    println!("  Location flow: {:?}", screen.location_flow());

    screen.on_permissions_result(&PermissionGrants::new().with(LocationPermission::Coarse, true));
    println!("  After the prompt: {:?}", screen.location_flow());
    println!();

    // Example 3: Tapping a marker
    println!("--- Example 3: Popups ---");
    let map = screen.map();
    for marker in map.markers().iter().take(2) {
        if let Some(popup) = map.show_popup(marker) {
            println!("  {}", popup.title.as_deref().unwrap_or("?"));
            for line in popup.visible_lines() {
                println!("    {line}");
            }
        }
    }
}
