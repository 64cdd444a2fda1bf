use std::path::PathBuf;

use crystal_content::{ContentFactory, builtin_catalog};
use crystal_core::CrystalSetConfig;

fn workspace_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn shipped_catalog_matches_builtin() {
    let factory = ContentFactory::new(workspace_data_dir());
    let catalog = factory.load_catalog().expect("crystals.ron should parse");
    assert_eq!(catalog, builtin_catalog());
}

#[test]
fn shipped_config_activates_ae2_sets() {
    let factory = ContentFactory::new(workspace_data_dir());
    let config = factory.load_host_config().expect("config.toml should parse");
    let registry = factory
        .load_registry(&config.dependencies())
        .expect("registry should build");

    let active: Vec<_> = registry.active_only().map(CrystalSetConfig::id).collect();
    assert!(active.contains(&"certus_quartz"));
    assert!(active.contains(&"fluix"));
    assert!(!active.contains(&"salt"));
    assert_eq!(registry.all().count(), 12);
    assert_eq!(registry.all_bud_blocks().count(), 48);
}
