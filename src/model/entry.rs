// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::NodeId;
use super::kind::EntryKind;
use super::link::{InfoLink, Modifier};
use super::list::NodeList;
use super::profile::Profile;
use super::rule::Rule;

/// A selectable unit/option (`EntryKind::Entry`) or a group of them (`EntryKind::Group`).
///
/// Both shapes hold the same child lists, so one type covers the whole family; groups are
/// stored under `selection_entry_groups` of their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEntry {
    #[serde(default)]
    kind: EntryKind,
    id: NodeId,
    name: String,
    #[serde(default)]
    hidden: bool,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    modifiers: NodeList<Modifier>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    profiles: NodeList<Profile>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    rules: NodeList<Rule>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    info_links: NodeList<InfoLink>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    selection_entries: NodeList<SelectionEntry>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    selection_entry_groups: NodeList<SelectionEntry>,
}

impl SelectionEntry {
    pub fn new(kind: EntryKind, id: NodeId, name: impl Into<String>) -> Self {
        Self {
            kind,
            id,
            name: name.into(),
            hidden: false,
            modifiers: NodeList::new(),
            profiles: NodeList::new(),
            rules: NodeList::new(),
            info_links: NodeList::new(),
            selection_entries: NodeList::new(),
            selection_entry_groups: NodeList::new(),
        }
    }

    pub fn entry(id: NodeId, name: impl Into<String>) -> Self {
        Self::new(EntryKind::Entry, id, name)
    }

    pub fn group(id: NodeId, name: impl Into<String>) -> Self {
        Self::new(EntryKind::Group, id, name)
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn modifiers(&self) -> &NodeList<Modifier> {
        &self.modifiers
    }

    pub fn profiles(&self) -> &NodeList<Profile> {
        &self.profiles
    }

    pub fn rules(&self) -> &NodeList<Rule> {
        &self.rules
    }

    pub fn info_links(&self) -> &NodeList<InfoLink> {
        &self.info_links
    }

    pub fn selection_entries(&self) -> &NodeList<SelectionEntry> {
        &self.selection_entries
    }

    pub fn selection_entry_groups(&self) -> &NodeList<SelectionEntry> {
        &self.selection_entry_groups
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_hidden(&self, hidden: bool) -> Self {
        Self {
            hidden,
            ..self.clone()
        }
    }

    pub fn with_modifiers(&self, modifiers: NodeList<Modifier>) -> Self {
        Self {
            modifiers,
            ..self.clone()
        }
    }

    pub fn with_profiles(&self, profiles: NodeList<Profile>) -> Self {
        Self {
            profiles,
            ..self.clone()
        }
    }

    pub fn with_rules(&self, rules: NodeList<Rule>) -> Self {
        Self {
            rules,
            ..self.clone()
        }
    }

    pub fn with_info_links(&self, info_links: NodeList<InfoLink>) -> Self {
        Self {
            info_links,
            ..self.clone()
        }
    }

    pub fn with_selection_entries(&self, selection_entries: NodeList<SelectionEntry>) -> Self {
        Self {
            selection_entries,
            ..self.clone()
        }
    }

    pub fn with_selection_entry_groups(
        &self,
        selection_entry_groups: NodeList<SelectionEntry>,
    ) -> Self {
        Self {
            selection_entry_groups,
            ..self.clone()
        }
    }
}
