// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Discovering what can be converted.
//!
//! Hosts list the rules of the chosen documents and the profile types they may convert into,
//! then build a [`crate::convert::ConverterConfig`] from the user's picks.

use std::collections::HashSet;
use std::sync::Arc;

use crate::model::{
    CatalogueBase, CatalogueKind, CharacteristicType, NodeKind, NodeList, ProfileType, Rule,
};

pub const PATH_SEPARATOR: &str = " | ";

/// `"<name> (v<revision>)"`, used to tell documents apart in listings.
pub fn source_label(root: &CatalogueBase) -> String {
    format!("{} (v{})", root.name(), root.revision())
}

/// A rule found in a document, with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSelection {
    rule: Arc<Rule>,
    source_name: String,
    path: String,
}

impl RuleSelection {
    pub fn rule(&self) -> &Arc<Rule> {
        &self.rule
    }

    /// Label of the owning document, see [`source_label`].
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Names from the document root down to the node holding the rule.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Every rule in every root, in pre-order. Modifier subtrees are not searched.
pub fn collect_rule_selections<'a>(
    roots: impl IntoIterator<Item = &'a CatalogueBase>,
) -> Vec<RuleSelection> {
    let mut selections = Vec::new();
    for root in roots {
        let source_name = source_label(root);
        let found = root
            .cursor()
            .descendants_and_self(|node| node.is_kind(NodeKind::Modifier))
            .filter_map(|cursor| {
                let rule = cursor.node().as_rule()?;
                let path = cursor
                    .parent()
                    .map(|parent| parent.display_path(PATH_SEPARATOR))
                    .unwrap_or_default();
                Some(RuleSelection {
                    rule: Arc::clone(rule),
                    source_name: source_name.clone(),
                    path,
                })
            });
        selections.extend(found);
    }
    selections
}

/// A profile type offered as a conversion target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTypeInfo {
    profile_type: Arc<ProfileType>,
    source_name: String,
}

impl ProfileTypeInfo {
    pub fn profile_type(&self) -> &Arc<ProfileType> {
        &self.profile_type
    }

    /// Name of the document declaring the profile type.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn characteristic_types(&self) -> &NodeList<CharacteristicType> {
        self.profile_type.characteristic_types()
    }
}

/// Profile types declared by every gamesystem in `all` plus every root in `selected`.
///
/// Each document contributes once, keyed by id; gamesystems come first.
pub fn collect_profile_types<'a>(
    all: impl IntoIterator<Item = &'a CatalogueBase>,
    selected: impl IntoIterator<Item = &'a CatalogueBase>,
) -> Vec<ProfileTypeInfo> {
    let gamesystems = all
        .into_iter()
        .filter(|root| root.kind() == CatalogueKind::Gamesystem);

    let mut seen = HashSet::new();
    let mut infos = Vec::new();
    for root in gamesystems.chain(selected) {
        if !seen.insert(root.id().as_str()) {
            continue;
        }
        infos.extend(root.profile_types().iter().map(|profile_type| ProfileTypeInfo {
            profile_type: Arc::clone(profile_type),
            source_name: root.name().to_owned(),
        }));
    }
    infos
}
