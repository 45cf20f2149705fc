// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::entry::SelectionEntry;
use super::ids::{NodeId, ProfileTypeId};
use super::kind::CatalogueKind;
use super::link::InfoLink;
use super::list::NodeList;
use super::profile::{Profile, ProfileType};
use super::rule::Rule;
use super::source::{NodeRef, SourceCursor};

/// Root of one datafile: a gamesystem, or a catalogue built on top of one.
///
/// The kind is not part of the serialized body; codecs carry it in the document envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueBase {
    #[serde(skip)]
    kind: CatalogueKind,
    id: NodeId,
    name: String,
    #[serde(default)]
    revision: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gamesystem_id: Option<NodeId>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    profile_types: NodeList<ProfileType>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    profiles: NodeList<Profile>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    rules: NodeList<Rule>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    info_links: NodeList<InfoLink>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    shared_profiles: NodeList<Profile>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    shared_rules: NodeList<Rule>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    selection_entries: NodeList<SelectionEntry>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    shared_selection_entries: NodeList<SelectionEntry>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    shared_selection_entry_groups: NodeList<SelectionEntry>,
}

impl CatalogueBase {
    pub fn new(kind: CatalogueKind, id: NodeId, name: impl Into<String>) -> Self {
        Self {
            kind,
            id,
            name: name.into(),
            revision: 0,
            gamesystem_id: None,
            profile_types: NodeList::new(),
            profiles: NodeList::new(),
            rules: NodeList::new(),
            info_links: NodeList::new(),
            shared_profiles: NodeList::new(),
            shared_rules: NodeList::new(),
            selection_entries: NodeList::new(),
            shared_selection_entries: NodeList::new(),
            shared_selection_entry_groups: NodeList::new(),
        }
    }

    pub fn catalogue(id: NodeId, name: impl Into<String>) -> Self {
        Self::new(CatalogueKind::Catalogue, id, name)
    }

    pub fn gamesystem(id: NodeId, name: impl Into<String>) -> Self {
        Self::new(CatalogueKind::Gamesystem, id, name)
    }

    /// A cursor positioned at this root, for navigation and traversal.
    pub fn cursor(&self) -> SourceCursor<'_> {
        SourceCursor::root(NodeRef::Catalogue(self))
    }

    pub fn kind(&self) -> CatalogueKind {
        self.kind
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn gamesystem_id(&self) -> Option<&NodeId> {
        self.gamesystem_id.as_ref()
    }

    pub fn profile_types(&self) -> &NodeList<ProfileType> {
        &self.profile_types
    }

    pub fn profile_type(&self, id: &ProfileTypeId) -> Option<&ProfileType> {
        self.profile_types
            .iter()
            .find(|t| t.id() == id)
            .map(|t| &**t)
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

    pub fn shared_profiles(&self) -> &NodeList<Profile> {
        &self.shared_profiles
    }

    pub fn shared_rules(&self) -> &NodeList<Rule> {
        &self.shared_rules
    }

    pub fn selection_entries(&self) -> &NodeList<SelectionEntry> {
        &self.selection_entries
    }

    pub fn shared_selection_entries(&self) -> &NodeList<SelectionEntry> {
        &self.shared_selection_entries
    }

    pub fn shared_selection_entry_groups(&self) -> &NodeList<SelectionEntry> {
        &self.shared_selection_entry_groups
    }

    pub fn with_kind(&self, kind: CatalogueKind) -> Self {
        Self {
            kind,
            ..self.clone()
        }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_revision(&self, revision: u32) -> Self {
        Self {
            revision,
            ..self.clone()
        }
    }

    pub fn with_gamesystem_id(&self, gamesystem_id: Option<NodeId>) -> Self {
        Self {
            gamesystem_id,
            ..self.clone()
        }
    }

    pub fn with_profile_types(&self, profile_types: NodeList<ProfileType>) -> Self {
        Self {
            profile_types,
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

    pub fn with_shared_profiles(&self, shared_profiles: NodeList<Profile>) -> Self {
        Self {
            shared_profiles,
            ..self.clone()
        }
    }

    pub fn with_shared_rules(&self, shared_rules: NodeList<Rule>) -> Self {
        Self {
            shared_rules,
            ..self.clone()
        }
    }

    pub fn with_selection_entries(&self, selection_entries: NodeList<SelectionEntry>) -> Self {
        Self {
            selection_entries,
            ..self.clone()
        }
    }

    pub fn with_shared_selection_entries(
        &self,
        shared_selection_entries: NodeList<SelectionEntry>,
    ) -> Self {
        Self {
            shared_selection_entries,
            ..self.clone()
        }
    }

    pub fn with_shared_selection_entry_groups(
        &self,
        shared_selection_entry_groups: NodeList<SelectionEntry>,
    ) -> Self {
        Self {
            shared_selection_entry_groups,
            ..self.clone()
        }
    }
}
