// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[test]
fn migrate_same_version_is_noop() {
    let v1 = json!({"v": 1, "seq": 1, "state": {}});
    let registry = MigrationRegistry::new();
    let result = registry.migrate_to(v1.clone(), 1).unwrap();
    assert_eq!(result, v1);
}

#[test]
fn too_new_error() {
    let v99 = json!({"v": 99, "seq": 1, "state": {}});
    let registry = MigrationRegistry::new();
    assert!(matches!(registry.migrate_to(v99, 1), Err(MigrationError::TooNew(99, 1))));
}

#[test]
fn no_path_error() {
    let v1 = json!({"v": 1, "seq": 1, "state": {}});
    let registry = MigrationRegistry::new();
    assert!(matches!(registry.migrate_to(v1, 2), Err(MigrationError::NoPath(1, 2))));
}

#[test]
fn missing_version_error() {
    let registry = MigrationRegistry::new();
    assert!(matches!(
        registry.migrate_to(json!({"seq": 1}), 1),
        Err(MigrationError::MissingVersion)
    ));
}

#[test]
fn out_of_range_version_is_missing_not_wrapped() {
    // 2^32 + 1 would wrap to version 1 under a plain cast
    let registry = MigrationRegistry::new();
    assert!(matches!(
        registry.migrate_to(json!({"v": u64::from(u32::MAX) + 2, "seq": 1}), 1),
        Err(MigrationError::MissingVersion)
    ));
}

/// Splits a legacy single `resources` map into `drivers` and `trucks`.
struct SplitResources;

impl Migration for SplitResources {
    fn source_version(&self) -> u32 {
        1
    }
    fn target_version(&self) -> u32 {
        2
    }
    fn migrate(&self, snapshot: &mut Value) -> Result<(), MigrationError> {
        let state = snapshot
            .get_mut("state")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| MigrationError::Failed("state is not an object".into()))?;
        let resources = state.remove("resources").unwrap_or_else(|| json!({}));
        state.insert("drivers".into(), resources.get("drivers").cloned().unwrap_or(json!({})));
        state.insert("trucks".into(), resources.get("trucks").cloned().unwrap_or(json!({})));
        Ok(())
    }
}

#[test]
fn migration_chain_rewrites_version() {
    let mut registry = MigrationRegistry::new();
    registry.migrations.push(Box::new(SplitResources));

    let v1 = json!({"v": 1, "seq": 42, "state": {"resources": {"drivers": {"drv-1": {}}}}});
    let result = registry.migrate_to(v1, 2).unwrap();

    assert_eq!(result["v"], 2);
    assert_eq!(result["seq"], 42);
    assert_eq!(result["state"]["drivers"], json!({"drv-1": {}}));
    assert_eq!(result["state"]["trucks"], json!({}));
    assert!(result["state"].get("resources").is_none());
}

#[test]
fn failing_migration_surfaces_error() {
    let mut registry = MigrationRegistry::new();
    registry.migrations.push(Box::new(SplitResources));

    let v1 = json!({"v": 1, "seq": 1, "state": []});
    assert!(matches!(registry.migrate_to(v1, 2), Err(MigrationError::Failed(_))));
}
