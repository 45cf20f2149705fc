// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminator for every node that can appear in a catalogue tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Catalogue,
    Gamesystem,
    Rule,
    Profile,
    ProfileType,
    CharacteristicType,
    Characteristic,
    InfoLink,
    Modifier,
    SelectionEntry,
    SelectionEntryGroup,
}

impl NodeKind {
    pub fn is_root(self) -> bool {
        matches!(self, Self::Catalogue | Self::Gamesystem)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Catalogue => "catalogue",
            Self::Gamesystem => "gamesystem",
            Self::Rule => "rule",
            Self::Profile => "profile",
            Self::ProfileType => "profileType",
            Self::CharacteristicType => "characteristicType",
            Self::Characteristic => "characteristic",
            Self::InfoLink => "infoLink",
            Self::Modifier => "modifier",
            Self::SelectionEntry => "selectionEntry",
            Self::SelectionEntryGroup => "selectionEntryGroup",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The named child list a node is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildRole {
    ProfileTypes,
    CharacteristicTypes,
    Characteristics,
    Profiles,
    Rules,
    InfoLinks,
    Modifiers,
    SharedProfiles,
    SharedRules,
    SelectionEntries,
    SelectionEntryGroups,
    SharedSelectionEntries,
    SharedSelectionEntryGroups,
}

impl ChildRole {
    pub fn label(self) -> &'static str {
        match self {
            Self::ProfileTypes => "profileTypes",
            Self::CharacteristicTypes => "characteristicTypes",
            Self::Characteristics => "characteristics",
            Self::Profiles => "profiles",
            Self::Rules => "rules",
            Self::InfoLinks => "infoLinks",
            Self::Modifiers => "modifiers",
            Self::SharedProfiles => "sharedProfiles",
            Self::SharedRules => "sharedRules",
            Self::SelectionEntries => "selectionEntries",
            Self::SelectionEntryGroups => "selectionEntryGroups",
            Self::SharedSelectionEntries => "sharedSelectionEntries",
            Self::SharedSelectionEntryGroups => "sharedSelectionEntryGroups",
        }
    }
}

/// Position of a node inside its parent: which list, and where in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildSlot {
    pub role: ChildRole,
    pub index: usize,
}

impl ChildSlot {
    pub fn new(role: ChildRole, index: usize) -> Self {
        Self { role, index }
    }
}

impl fmt::Display for ChildSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.role.label(), self.index)
    }
}

/// The category of node an info link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InfoLinkKind {
    Rule,
    Profile,
    SelectionEntry,
    SelectionEntryGroup,
}

/// Which root document a catalogue tree represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CatalogueKind {
    #[default]
    Catalogue,
    Gamesystem,
}

impl CatalogueKind {
    pub fn node_kind(self) -> NodeKind {
        match self {
            Self::Catalogue => NodeKind::Catalogue,
            Self::Gamesystem => NodeKind::Gamesystem,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryKind {
    #[default]
    Entry,
    Group,
}

impl EntryKind {
    pub fn node_kind(self) -> NodeKind {
        match self {
            Self::Entry => NodeKind::SelectionEntry,
            Self::Group => NodeKind::SelectionEntryGroup,
        }
    }
}
