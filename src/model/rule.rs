// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::NodeId;
use super::link::{InfoLink, Modifier};
use super::list::NodeList;
use super::profile::Profile;

/// A named free-text ability.
///
/// Rules may nest further rules and profiles; the nested lists are shared, not copied, when a
/// rule is derived with `with_*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    id: NodeId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    book: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<String>,
    #[serde(default)]
    hidden: bool,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    modifiers: NodeList<Modifier>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    info_links: NodeList<InfoLink>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    profiles: NodeList<Profile>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    rules: NodeList<Rule>,
}

impl Rule {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            book: None,
            page: None,
            hidden: false,
            modifiers: NodeList::new(),
            info_links: NodeList::new(),
            profiles: NodeList::new(),
            rules: NodeList::new(),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn book(&self) -> Option<&str> {
        self.book.as_deref()
    }

    pub fn page(&self) -> Option<&str> {
        self.page.as_deref()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn modifiers(&self) -> &NodeList<Modifier> {
        &self.modifiers
    }

    pub fn info_links(&self) -> &NodeList<InfoLink> {
        &self.info_links
    }

    pub fn profiles(&self) -> &NodeList<Profile> {
        &self.profiles
    }

    pub fn rules(&self) -> &NodeList<Rule> {
        &self.rules
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self.clone()
        }
    }

    pub fn with_book<T: Into<String>>(&self, book: Option<T>) -> Self {
        Self {
            book: book.map(Into::into),
            ..self.clone()
        }
    }

    pub fn with_page<T: Into<String>>(&self, page: Option<T>) -> Self {
        Self {
            page: page.map(Into::into),
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

    pub fn with_info_links(&self, info_links: NodeList<InfoLink>) -> Self {
        Self {
            info_links,
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
}
