mod helper;

use serde_json::json;

use helper::Corpus;
use plugin_meta::error::StoreError;
use plugin_meta::resolver::MetadataResolver;
use plugin_meta::store::StoreKind;

fn resolver(corpus: &Corpus) -> MetadataResolver {
    MetadataResolver::from_config(&corpus.config("http://127.0.0.1:9", None))
}

#[test]
fn plugins_partitions_registry_with_versions_in_order() {
    let corpus = Corpus::new().with_registry(json!({
        "active": {
            "napari-svg": ["0.1.0", "0.1.1", "0.1.6"],
            "napari-console": ["0.0.4"]
        },
        "withdrawn": {"napari-old": ["0.1.0"]},
        "deleted": {"napari-gone": ["0.0.1", "0.0.2"]}
    }));

    let registry = resolver(&corpus).plugins().unwrap();

    assert_eq!(
        registry.active.keys().collect::<Vec<_>>(),
        vec!["napari-svg", "napari-console"]
    );
    assert_eq!(registry.active["napari-svg"], vec!["0.1.0", "0.1.1", "0.1.6"]);
    assert_eq!(
        registry.withdrawn.keys().collect::<Vec<_>>(),
        vec!["napari-old"]
    );
    assert_eq!(registry.deleted["napari-gone"], vec!["0.0.1", "0.0.2"]);
}

#[test]
fn active_plugins_returns_active_bucket_only() {
    let corpus = Corpus::new().with_registry(json!({
        "active": {"napari-svg": ["0.1.6"]},
        "withdrawn": {"napari-old": ["0.1.0"]},
        "deleted": {}
    }));

    let active = resolver(&corpus).active_plugins().unwrap();

    assert_eq!(active.len(), 1);
    assert!(active.contains_key("napari-svg"));
}

#[test]
fn every_store_reports_missing_file_with_its_path() {
    let corpus = Corpus::new();
    let resolver = resolver(&corpus);

    let errors = [
        (StoreKind::Registry, resolver.plugins().unwrap_err()),
        (StoreKind::Manifest, resolver.manifest("ghost").unwrap_err()),
        (StoreKind::Pypi, resolver.pypi_info("ghost").unwrap_err()),
        (StoreKind::Conda, resolver.conda_info("ghost").unwrap_err()),
    ];

    for (kind, err) in errors {
        let expected = resolver.store().path_for(kind, "ghost");
        match err {
            StoreError::NotFound { kind: k, path } => {
                assert_eq!(k, kind);
                assert_eq!(path, expected);
            }
            other => panic!("expected NotFound for {}, got {:?}", kind, other),
        }
    }
}

#[test]
fn manifest_and_conda_info_are_read_from_their_stores() {
    let corpus = Corpus::new()
        .with_file(
            "manifest/napari-svg.json",
            json!({
                "name": "napari-svg",
                "display_name": "napari SVG",
                "contributions": {"commands": [{"id": "napari-svg.svg_writer", "title": "Write SVG"}]}
            }),
        )
        .with_file(
            "conda/napari-svg.json",
            json!({"name": "napari-svg", "latest_version": "0.1.6"}),
        );
    let resolver = resolver(&corpus);

    let manifest = resolver.manifest("napari-svg").unwrap();
    assert_eq!(manifest.display_name.as_deref(), Some("napari SVG"));
    assert_eq!(manifest.commands(), vec!["napari-svg.svg_writer"]);

    let conda = resolver.conda_info("napari-svg").unwrap();
    assert_eq!(conda["latest_version"], "0.1.6");
}
