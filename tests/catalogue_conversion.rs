// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rulecast::catalog::{collect_profile_types, collect_rule_selections};
use rulecast::convert::{convert_datafiles, ConversionSettings, MessageSubject, RuleConverter};
use rulecast::model::{CatalogueKind, InfoLinkKind};
use rulecast::store::{DatafileStore, JsonCodec, WriteDurability};

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = std::env::temp_dir();
        path.push(format!("rulecast-it-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

const GAMESYSTEM: &str = r#"{
  "gamesystem": {
    "id": "gs:skirmish",
    "name": "Skirmish",
    "revision": 4,
    "profileTypes": [{
      "id": "pt:ability",
      "name": "Ability",
      "characteristicTypes": [
        { "id": "ct:text", "name": "Description" },
        { "id": "ct:phase", "name": "Phase" }
      ]
    }],
    "sharedRules": [
      { "id": "r:fly", "name": "Fly", "description": "Ignores terrain.", "book": "Core", "page": "21" },
      { "id": "r:fear", "name": "Fear", "description": "-1 Ld to enemies within 6\".",
        "modifiers": [{ "type": "set", "field": "hidden", "value": "true" }] }
    ]
  }
}"#;

const CATALOGUE: &str = r#"{
  "catalogue": {
    "id": "cat:undead",
    "name": "Undead",
    "revision": 9,
    "gamesystemId": "gs:skirmish",
    "sharedSelectionEntries": [{
      "id": "e:wraith",
      "name": "Wraith",
      "infoLinks": [
        { "id": "l:wraith-fly", "targetId": "r:fly", "type": "rule" },
        { "id": "l:wraith-fear", "targetId": "r:fear", "type": "rule",
          "modifiers": [{ "type": "append", "field": "name", "value": " (aura)" }] }
      ],
      "selectionEntryGroups": [{
        "kind": "group",
        "id": "g:gear",
        "name": "Gear",
        "selectionEntries": [{
          "id": "e:shroud",
          "name": "Shroud",
          "rules": [{ "id": "r:ethereal", "name": "Ethereal", "description": "5+ save." }]
        }]
      }]
    }],
    "sharedSelectionEntryGroups": [{
      "kind": "group",
      "id": "g:heroes",
      "name": "Heroes",
      "infoLinks": [{ "id": "l:heroes-banner", "targetId": "e:banner", "type": "selectionEntry" }]
    }]
  }
}"#;

#[test]
fn converts_selected_rules_across_loaded_datafiles_and_saves_them_back() {
    let tmp = TempDir::new("convert");
    let gst_path = tmp.path().join("skirmish.gst.json");
    let cat_path = tmp.path().join("undead.cat.json");
    fs::write(&gst_path, GAMESYSTEM).unwrap();
    fs::write(&cat_path, CATALOGUE).unwrap();

    let store = DatafileStore::new(JsonCodec::pretty()).with_durability(WriteDurability::Durable);
    let datafiles = store.load_all([&gst_path, &cat_path]).unwrap();
    let roots = datafiles.iter().map(|d| &**d.root()).collect::<Vec<_>>();

    let selections = collect_rule_selections(roots.iter().copied());
    let labels = selections
        .iter()
        .map(|s| format!("{} @ {}", s.rule().name(), s.source_name()))
        .collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec!["Fly @ Skirmish (v4)", "Fear @ Skirmish (v4)", "Ethereal @ Undead (v9)"]
    );

    let profile_types = collect_profile_types(roots.iter().copied(), [roots[1]]);
    assert_eq!(profile_types.len(), 1);
    assert_eq!(profile_types[0].source_name(), "Skirmish");

    let settings: ConversionSettings = serde_json::from_str(
        r#"{
            "profileTypeId": "pt:ability",
            "characteristicTypeId": "ct:text",
            "ruleIds": ["r:fly", "r:fear", "r:ethereal"]
        }"#,
    )
    .unwrap();
    let converter = RuleConverter::new(settings.resolve(roots.iter().copied()).unwrap()).unwrap();

    let results = convert_datafiles(&converter, &datafiles);
    assert_eq!(
        results.iter().map(|r| r.name()).collect::<Vec<_>>(),
        vec!["Skirmish", "Undead"]
    );

    let skirmish = results[0].conversion();
    assert_eq!(skirmish.stats.rules_converted, 2);
    assert_eq!(skirmish.messages.len(), 1);
    assert!(matches!(
        skirmish.messages[0].subject(),
        MessageSubject::Rule(rule) if rule.name() == "Fear"
    ));

    let undead = results[1].conversion();
    assert_eq!(undead.stats.rules_converted, 1);
    assert_eq!(undead.stats.links_retargeted, 2);
    assert_eq!(undead.messages.len(), 1);
    assert_eq!(undead.messages[0].subject().node_id().as_str(), "l:wraith-fear");

    for result in results {
        store.save(&result.into_datafile()).unwrap();
    }

    let reloaded_gst = store.load(&gst_path).unwrap();
    let gst = reloaded_gst.root();
    assert_eq!(gst.kind(), CatalogueKind::Gamesystem);
    assert!(gst.shared_rules().is_empty());
    let fly = &gst.shared_profiles()[0];
    assert_eq!(fly.id().as_str(), "r:fly");
    assert_eq!(fly.book(), Some("Core"));
    assert_eq!(fly.page(), Some("21"));
    let values = fly
        .characteristics()
        .iter()
        .map(|c| (c.name(), c.value()))
        .collect::<Vec<_>>();
    assert_eq!(values, vec![("Description", Some("Ignores terrain.")), ("Phase", None)]);
    assert_eq!(gst.shared_profiles()[1].modifiers().len(), 1);

    let reloaded_cat = store.load(&cat_path).unwrap();
    let cat = reloaded_cat.root();
    assert_eq!(cat.kind(), CatalogueKind::Catalogue);
    assert_eq!(cat.gamesystem_id().map(|id| id.as_str()), Some("gs:skirmish"));
    let wraith = &cat.shared_selection_entries()[0];
    let kinds = wraith.info_links().iter().map(|l| l.kind()).collect::<Vec<_>>();
    assert_eq!(kinds, vec![InfoLinkKind::Profile, InfoLinkKind::Profile]);
    assert_eq!(wraith.info_links()[1].modifiers()[0].value(), " (aura)");
    let shroud = &wraith.selection_entry_groups()[0].selection_entries()[0];
    assert!(shroud.rules().is_empty());
    assert_eq!(shroud.profiles()[0].type_name(), "Ability");
    let heroes = &cat.shared_selection_entry_groups()[0];
    assert_eq!(heroes.info_links()[0].kind(), InfoLinkKind::SelectionEntry);

    // Converting the saved output again changes nothing.
    let again = converter.convert(cat);
    assert!(!again.changed());
    assert_eq!(again.root, **cat);
}
