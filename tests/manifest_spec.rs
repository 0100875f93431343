use std::path::Path;
use std::time::Duration;

use oss::models::*;
use oss::{Error, ManifestStore, SpdxRegistry};
use speculate2::speculate;

const CATALOG: &str = r#"{
    "MIT": { "name": "MIT License", "url": "https://spdx.org/licenses/MIT.html", "osiApproved": true },
    "Apache-2.0": { "name": "Apache License 2.0", "osiApproved": true },
    "CC-BY-4.0": { "name": "Creative Commons Attribution 4.0 International", "osiApproved": false }
}"#;

/// Registry reading `CATALOG` from `dir`. Never refreshed in these specs.
fn registry_in(dir: &Path) -> SpdxRegistry {
    let path = dir.join(".oss-licenses.json");
    std::fs::write(&path, CATALOG).expect("Failed to write catalog");
    SpdxRegistry::new(path, "http://127.0.0.1:9/spdx.json", Duration::from_secs(1))
}

fn mit_asset(file: &str) -> Asset {
    Asset::new(License::new("MIT", "MIT License"), file, "")
}

speculate! {
    before {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let manifest_path = dir.path().join(".oss");
        let registry = registry_in(dir.path());
    }

    describe "load" {
        it "fails with NotInitialized when the manifest is missing" {
            let mut store = ManifestStore::new(&manifest_path, registry);
            let err = store.load().unwrap_err();
            assert!(matches!(err, Error::NotInitialized { .. }));
        }

        it "fails with Load when the manifest is not valid JSON" {
            std::fs::write(&manifest_path, "{ assets: ").expect("Failed to write");
            let mut store = ManifestStore::new(&manifest_path, registry);
            let err = store.load().unwrap_err();
            assert!(matches!(err, Error::Load { .. }));
        }

        it "fails with Load when the JSON has the wrong shape" {
            std::fs::write(&manifest_path, r#"{"assets": [{"file": 3}]}"#).expect("Failed to write");
            let mut store = ManifestStore::new(&manifest_path, registry);
            assert!(matches!(store.load(), Err(Error::Load { .. })));
        }

        it "reads the wire format" {
            std::fs::write(
                &manifest_path,
                r#"{"assets":[{"license":{"name":"MIT License","identifier":"MIT"},"description":"Charts","file":"vendor/chart.js"}]}"#,
            ).expect("Failed to write");

            let store = ManifestStore::open(&manifest_path, registry).expect("Failed to open");
            assert_eq!(store.assets().len(), 1);
            assert_eq!(store.assets()[0].file, "vendor/chart.js");
            assert_eq!(store.assets()[0].description, "Charts");
            assert_eq!(store.assets()[0].license, License::new("MIT", "MIT License"));
        }
    }

    describe "save" {
        it "round-trips assets in insertion order" {
            let mut store = ManifestStore::new(&manifest_path, registry.clone());
            store.add(mit_asset("z.js")).expect("Failed to add");
            store.add(Asset::new(License::new("Apache-2.0", "Apache License 2.0"), "a.js", "first")).expect("Failed to add");
            store.add(mit_asset("m.js")).expect("Failed to add");

            let reloaded = ManifestStore::open(&manifest_path, registry).expect("Failed to open");
            assert_eq!(reloaded.assets(), store.assets());
            let files: Vec<_> = reloaded.assets().iter().map(|a| a.file.as_str()).collect();
            assert_eq!(files, vec!["z.js", "a.js", "m.js"]);
        }

        it "writes an empty array rather than null" {
            let store = ManifestStore::new(&manifest_path, registry.clone());
            store.save().expect("Failed to save");

            let raw: serde_json::Value = serde_json::from_str(
                &std::fs::read_to_string(&manifest_path).expect("Failed to read"),
            ).expect("Saved manifest is not JSON");
            assert_eq!(raw, serde_json::json!({ "assets": [] }));

            let reloaded = ManifestStore::open(&manifest_path, registry).expect("Failed to open");
            assert!(reloaded.assets().is_empty());
        }

        it "fails with Permission when the directory does not exist" {
            let store = ManifestStore::new(dir.path().join("missing").join(".oss"), registry);
            let err = store.save().unwrap_err();
            assert!(matches!(err, Error::Permission { .. }));
        }
    }

    describe "add" {
        it "persists immediately" {
            let mut store = ManifestStore::new(&manifest_path, registry.clone());
            store.add(mit_asset("vendor/lib.js")).expect("Failed to add");

            let reloaded = ManifestStore::open(&manifest_path, registry).expect("Failed to open");
            assert_eq!(reloaded.get("vendor/lib.js").expect("Not found"), &mit_asset("vendor/lib.js"));
        }

        it "keeps duplicate files as separate entries" {
            let mut store = ManifestStore::new(&manifest_path, registry);
            store.add(mit_asset("dup.js")).expect("Failed to add");
            store.add(Asset::new(License::new("MIT", "MIT License"), "dup.js", "again")).expect("Failed to add");

            assert_eq!(store.assets().len(), 2);
            assert_eq!(store.get("dup.js").expect("Not found").description, "");
        }
    }

    describe "add_licensed" {
        it "copies the license name from the registry" {
            let mut store = ManifestStore::new(&manifest_path, registry);
            let asset = store.add_licensed("Apache-2.0", "vendor/lib.js", "HTTP client").expect("Failed to add");

            assert_eq!(asset.license, License::new("Apache-2.0", "Apache License 2.0"));
            assert_eq!(asset.description, "HTTP client");
            assert_eq!(store.get("vendor/lib.js").expect("Not found"), &asset);
        }

        it "rejects an unknown identifier without touching the manifest" {
            let mut store = ManifestStore::new(&manifest_path, registry.clone());
            store.add(mit_asset("kept.js")).expect("Failed to add");
            let before = std::fs::read_to_string(&manifest_path).expect("Failed to read");

            let err = store.add_licensed("NOT-A-LICENSE", "vendor/lib.js", "").unwrap_err();
            assert!(err.is_not_found());
            assert_eq!(store.assets().len(), 1);
            assert_eq!(std::fs::read_to_string(&manifest_path).expect("Failed to read"), before);

            let reloaded = ManifestStore::open(&manifest_path, registry).expect("Failed to open");
            assert!(reloaded.assets().iter().all(|a| a.license.identifier != "NOT-A-LICENSE"));
        }

        it "treats identifiers case-sensitively" {
            let mut store = ManifestStore::new(&manifest_path, registry);
            assert!(store.add_licensed("mit", "vendor/lib.js", "").is_err());
        }

        it "fails with NotInitialized when the registry was never downloaded" {
            let registry = SpdxRegistry::new(dir.path().join("nope.json"), "http://127.0.0.1:9", Duration::from_secs(1));
            let mut store = ManifestStore::new(&manifest_path, registry);
            let err = store.add_licensed("MIT", "vendor/lib.js", "").unwrap_err();
            assert!(matches!(err, Error::NotInitialized { .. }));
            assert!(!manifest_path.exists());
        }
    }

    describe "get" {
        it "returns NotFound for an untracked file" {
            let store = ManifestStore::new(&manifest_path, registry);
            let err = store.get("nowhere.js").unwrap_err();
            assert!(matches!(err, Error::NotFound { kind: "Asset", .. }));
        }
    }

    describe "remove" {
        it "removes the asset and persists" {
            let mut store = ManifestStore::new(&manifest_path, registry.clone());
            store.add(mit_asset("a.js")).expect("Failed to add");
            store.add(mit_asset("b.js")).expect("Failed to add");
            store.add(mit_asset("c.js")).expect("Failed to add");

            let removed = store.remove("b.js").expect("Failed to remove");
            assert_eq!(removed, Some(mit_asset("b.js")));
            assert!(store.get("b.js").unwrap_err().is_not_found());

            let reloaded = ManifestStore::open(&manifest_path, registry).expect("Failed to open");
            let files: Vec<_> = reloaded.assets().iter().map(|a| a.file.as_str()).collect();
            assert_eq!(files, vec!["a.js", "c.js"]);
        }

        it "removes only the first of duplicate entries" {
            let mut store = ManifestStore::new(&manifest_path, registry);
            store.add(Asset::new(License::new("MIT", "MIT License"), "dup.js", "one")).expect("Failed to add");
            store.add(Asset::new(License::new("MIT", "MIT License"), "dup.js", "two")).expect("Failed to add");

            store.remove("dup.js").expect("Failed to remove");
            assert_eq!(store.assets().len(), 1);
            assert_eq!(store.get("dup.js").expect("Not found").description, "two");
        }

        it "is a no-op for an untracked file" {
            let mut store = ManifestStore::new(&manifest_path, registry);
            store.add(mit_asset("a.js")).expect("Failed to add");
            let before = std::fs::read_to_string(&manifest_path).expect("Failed to read");

            let removed = store.remove("nowhere.js").expect("Failed to remove");
            assert!(removed.is_none());
            assert_eq!(store.assets().len(), 1);
            assert_eq!(std::fs::read_to_string(&manifest_path).expect("Failed to read"), before);
        }
    }
}
