// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rulecast::convert::{ConverterConfig, RuleConverter};
use rulecast::model::{
    CatalogueBase, CharacteristicType, CharacteristicTypeId, InfoLink, InfoLinkKind, Modifier,
    NodeId, NodeList, ProfileType, ProfileTypeId, Rule, SelectionEntry,
};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("rulecast_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    LargeDeep,
}

#[derive(Debug, Clone, Copy)]
pub struct ArmyParams {
    /// Rules declared as shared rules at the root.
    pub shared_rules: usize,
    /// Top-level selection entries.
    pub entries: usize,
    /// Nesting depth of option groups under each entry.
    pub depth: usize,
    /// Links per entry (and per nested option).
    pub links_per_entry: usize,
}

impl Case {
    pub fn params(self) -> ArmyParams {
        match self {
            Self::Small => ArmyParams {
                shared_rules: 16,
                entries: 20,
                depth: 1,
                links_per_entry: 2,
            },
            Self::Medium => ArmyParams {
                shared_rules: 120,
                entries: 200,
                depth: 2,
                links_per_entry: 3,
            },
            Self::LargeDeep => ArmyParams {
                shared_rules: 400,
                entries: 600,
                depth: 4,
                links_per_entry: 4,
            },
        }
    }
}

fn node_id(value: String) -> NodeId {
    NodeId::new(value).expect("valid node id")
}

pub fn ability_type() -> ProfileType {
    ProfileType::new(ProfileTypeId::new("pt:ability").expect("id"), "Ability")
        .with_characteristic_types(NodeList::from(vec![
            CharacteristicType::new(CharacteristicTypeId::new("ct:desc").expect("id"), "Text"),
            CharacteristicType::new(CharacteristicTypeId::new("ct:range").expect("id"), "Range"),
        ]))
}

fn shared_rule(index: usize) -> Rule {
    let rule = Rule::new(node_id(format!("r:{index}")), format!("Rule {index}"))
        .with_description(format!("When this unit fights, add {} to its hit rolls.", index % 3));
    if index % 7 == 0 {
        rule.with_modifiers(NodeList::from(vec![Modifier::new("set", "hidden", "true")]))
    } else {
        rule
    }
}

fn link(owner: &str, slot: usize, target: usize) -> InfoLink {
    let link = InfoLink::new(
        node_id(format!("l:{owner}:{slot}")),
        node_id(format!("r:{target}")),
        InfoLinkKind::Rule,
    );
    if target % 11 == 0 {
        link.with_modifiers(NodeList::from(vec![Modifier::new("append", "name", "*")]))
    } else {
        link
    }
}

fn option_tree(owner: &str, depth: usize, params: ArmyParams, seed: usize) -> SelectionEntry {
    let id = format!("{owner}.o{depth}");
    let links = (0..params.links_per_entry)
        .map(|slot| link(&id, slot, (seed * 31 + slot * 7 + depth) % params.shared_rules))
        .collect::<Vec<_>>();
    let option = SelectionEntry::entry(node_id(format!("e:{id}")), format!("Option {id}"))
        .with_info_links(NodeList::from(links));

    let group = SelectionEntry::group(node_id(format!("g:{id}")), format!("Options {id}"));
    if depth <= 1 {
        return group.with_selection_entries(NodeList::from(vec![option]));
    }
    let nested = option_tree(&id, depth - 1, params, seed + 1);
    group.with_selection_entries(NodeList::from(vec![
        option.with_selection_entry_groups(NodeList::from(vec![nested])),
    ]))
}

/// A catalogue whose entries link to shared rules, with nested option groups.
pub fn army(params: ArmyParams) -> CatalogueBase {
    let shared_rules = (0..params.shared_rules).map(shared_rule).collect::<Vec<_>>();

    let entries = (0..params.entries)
        .map(|index| {
            let owner = format!("u{index}");
            let links = (0..params.links_per_entry)
                .map(|slot| link(&owner, slot, (index * 13 + slot) % params.shared_rules))
                .collect::<Vec<_>>();
            let own_rule = Rule::new(node_id(format!("r:{owner}")), format!("Unit rule {index}"))
                .with_description("Unique to this unit.");
            SelectionEntry::entry(node_id(format!("e:{owner}")), format!("Unit {index}"))
                .with_rules(NodeList::from(vec![own_rule]))
                .with_info_links(NodeList::from(links))
                .with_selection_entry_groups(NodeList::from(vec![option_tree(
                    &owner,
                    params.depth,
                    params,
                    index,
                )]))
        })
        .collect::<Vec<_>>();

    CatalogueBase::catalogue(node_id("cat:bench".to_owned()), "Bench Army")
        .with_revision(1)
        .with_profile_types(NodeList::from(vec![ability_type()]))
        .with_shared_rules(NodeList::from(shared_rules))
        .with_selection_entries(NodeList::from(entries))
}

pub fn fixture(case: Case) -> CatalogueBase {
    army(case.params())
}

/// Converter selecting every other shared rule of `root`.
pub fn converter(root: &CatalogueBase) -> RuleConverter {
    let rules = root
        .shared_rules()
        .iter()
        .step_by(2)
        .map(Arc::clone)
        .collect::<Vec<_>>();
    RuleConverter::new(ConverterConfig::new(
        Arc::new(ability_type()),
        CharacteristicTypeId::new("ct:desc").expect("id"),
        rules,
    ))
    .expect("converter")
}

pub fn count_links(root: &CatalogueBase) -> u64 {
    root.cursor()
        .descendants_and_self(|_| false)
        .filter(|cursor| cursor.node().kind() == rulecast::model::NodeKind::InfoLink)
        .count() as u64
}
