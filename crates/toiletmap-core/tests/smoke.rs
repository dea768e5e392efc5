use toiletmap_core::prelude::*;

fn load_bundled() -> Vec<ToiletRecord> {
    load_records(&EmbeddedAssets, DEFAULT_ASSET).expect("bundled dataset should load")
}

#[test]
fn bundled_dataset_stats() {
    let stats = DatasetStats::from_records(&load_bundled());
    assert_eq!(stats.total, 6);
    assert_eq!(stats.accessible, 3);
    assert_eq!(stats.not_accessible, 1);
    assert_eq!(stats.unknown, 2);
}

#[test]
fn bundled_names_fall_back() {
    let records = load_bundled();
    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Rådhuspladsen",
            "Kongens Have",
            "Istedgade 70",
            "Christianshavns Torv",
            "Ukendt toilet",
            "Ørstedsparken",
        ]
    );
}

#[test]
fn coordinates_come_from_properties_not_geometry() {
    let records = load_bundled();
    let kongens_have = &records[1];
    assert_eq!((kongens_have.lat, kongens_have.lng), (55.6855, 12.5779));
}

#[test]
fn data_dir_and_embedded_agree() {
    let from_disk = load_records(&DirAssets::default(), DEFAULT_ASSET).unwrap();
    assert_eq!(from_disk, load_bundled());
}

#[test]
fn full_screen_with_prompt() {
    let mut permissions = StaticPermissions::ungranted();
    let mut screen = MapScreen::on_map_ready(
        HeadlessMap::new(),
        &EmbeddedAssets,
        &mut permissions,
        &ScreenConfig::default(),
    );
    assert_eq!(permissions.requests().len(), 1);

    screen.on_permissions_result(&PermissionGrants::uniform(&LocationPermission::ALL, true));
    // A second answer is ignored.
    screen.on_permissions_result(&PermissionGrants::uniform(&LocationPermission::ALL, false));

    let map = screen.into_map();
    assert!(map.is_my_location_enabled());

    let popups: Vec<_> = map
        .markers()
        .iter()
        .filter_map(|m| map.show_popup(m))
        .collect();
    assert_eq!(popups.len(), 6);

    let first = &popups[0];
    assert_eq!(first.title.as_deref(), Some("Rådhuspladsen"));
    assert_eq!(first.visible_lines().collect::<Vec<_>>(), ["Handicapvenlig", "00-24"]);

    // Empty opening hours hide the second slot.
    let last = &popups[5];
    assert_eq!(last.visible_line_count(), 1);

    // Unknown accessibility reads as not accessible.
    let unknown = &popups[2];
    assert_eq!(
        unknown.visible_lines().collect::<Vec<_>>(),
        ["Ikke handicapvenlig", "06-02"]
    );
}
