use flagkit_domain::{
    FlagDefinition, FlagKitConfig, LabelConfig, LabelOverride, SentinelKind, SentinelLabels,
};
use serde_json::json;
use std::str::FromStr;

#[test]
fn label_defaults_are_sane() {
    let labels = SentinelLabels::default();
    assert_eq!(labels.not_applicable, "Nope");
    assert_eq!(labels.shared, "Shared");
    assert_eq!(labels.none, "None");

    assert_eq!(labels.sentinel_of("Nope"), Some(SentinelKind::NotApplicable));
    assert_eq!(labels.sentinel_of("Chrome"), None);
}

#[test]
fn sentinel_kind_uses_snake_case_names() {
    assert_eq!(SentinelKind::NotApplicable.to_string(), "not_applicable");
    assert_eq!(SentinelKind::from_str("shared").ok(), Some(SentinelKind::Shared));
    let name: &'static str = SentinelKind::None.into();
    assert_eq!(name, "none");
}

#[test]
fn kind_override_is_merged_onto_defaults() {
    let config = LabelConfig::default()
        .with_kind("Sites", LabelOverride { shared: Some("Sha".to_owned()), ..Default::default() });

    let sites = config.labels_for("Sites");
    assert_eq!(sites.shared, "Sha");
    assert_eq!(sites.not_applicable, "Nope");

    assert_eq!(config.labels_for("Browsers"), SentinelLabels::default());
}

#[test]
fn flagkit_config_deserializes_from_json() {
    let raw = json!({
        "labels": {
            "defaults": { "not_applicable": "NotApplicable" },
            "kinds": { "MySites": { "shared": "Shared" } }
        },
        "tables": [
            { "kind": "Browsers", "members": [
                { "name": "None", "value": 0 },
                { "name": "Chrome", "value": 1 }
            ] }
        ]
    });

    let cfg: FlagKitConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.labels.defaults.not_applicable, "NotApplicable");
    assert_eq!(cfg.labels.defaults.none, "None");
    assert_eq!(cfg.tables.len(), 1);
    assert_eq!(cfg.tables[0].kind(), "Browsers");
    assert_eq!(cfg.tables[0].members()[1], FlagDefinition::new("Chrome", 1));
}

#[test]
fn flagkit_config_deserializes_from_toml() {
    let raw = r#"
        [labels.defaults]
        shared = "Sha"

        [[tables]]
        kind = "Access"
        members = [
            { name = "Read", value = 1 },
            { name = "Write", value = 2 },
        ]
    "#;

    let cfg: FlagKitConfig = toml::from_str(raw).expect("config deserialize");
    assert_eq!(cfg.labels.defaults.shared, "Sha");
    assert!(cfg.labels.kinds.is_empty());
    assert_eq!(cfg.tables[0].members().len(), 2);
}
