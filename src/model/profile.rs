// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::{CharacteristicTypeId, NodeId, ProfileTypeId};
use super::link::{InfoLink, Modifier};
use super::list::NodeList;
use super::rule::Rule;

/// A schema-typed set of characteristic values.
///
/// `type_id`/`type_name` denormalize the [`ProfileType`] the profile instantiates; the schema
/// itself lives in the owning (or a base) document's profile types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    id: NodeId,
    name: String,
    type_id: ProfileTypeId,
    type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    book: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<String>,
    #[serde(default)]
    hidden: bool,
    #[serde(default)]
    characteristics: NodeList<Characteristic>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    modifiers: NodeList<Modifier>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    info_links: NodeList<InfoLink>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    profiles: NodeList<Profile>,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    rules: NodeList<Rule>,
}

impl Profile {
    pub fn new(
        id: NodeId,
        name: impl Into<String>,
        type_id: ProfileTypeId,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            type_id,
            type_name: type_name.into(),
            book: None,
            page: None,
            hidden: false,
            characteristics: NodeList::new(),
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

    pub fn type_id(&self) -> &ProfileTypeId {
        &self.type_id
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
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

    pub fn characteristics(&self) -> &NodeList<Characteristic> {
        &self.characteristics
    }

    pub fn characteristic(&self, type_id: &CharacteristicTypeId) -> Option<&Characteristic> {
        self.characteristics
            .iter()
            .find(|c| c.type_id() == type_id)
            .map(|c| &**c)
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

    pub fn with_type(&self, type_id: ProfileTypeId, type_name: impl Into<String>) -> Self {
        Self {
            type_id,
            type_name: type_name.into(),
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

    pub fn with_characteristics(&self, characteristics: NodeList<Characteristic>) -> Self {
        Self {
            characteristics,
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

/// One value of a profile, bound to a [`CharacteristicType`] by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristic {
    type_id: CharacteristicTypeId,
    name: String,
    #[serde(default)]
    value: Option<String>,
}

impl Characteristic {
    pub fn new(type_id: CharacteristicTypeId, name: impl Into<String>) -> Self {
        Self {
            type_id,
            name: name.into(),
            value: None,
        }
    }

    pub fn type_id(&self) -> &CharacteristicTypeId {
        &self.type_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn with_value<T: Into<String>>(&self, value: Option<T>) -> Self {
        Self {
            value: value.map(Into::into),
            ..self.clone()
        }
    }
}

/// Profile schema: the ordered characteristic slots a profile of this type carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileType {
    id: ProfileTypeId,
    name: String,
    #[serde(default)]
    characteristic_types: NodeList<CharacteristicType>,
}

impl ProfileType {
    pub fn new(id: ProfileTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            characteristic_types: NodeList::new(),
        }
    }

    pub fn id(&self) -> &ProfileTypeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn characteristic_types(&self) -> &NodeList<CharacteristicType> {
        &self.characteristic_types
    }

    pub fn characteristic_type(&self, id: &CharacteristicTypeId) -> Option<&CharacteristicType> {
        self.characteristic_types
            .iter()
            .find(|t| t.id() == id)
            .map(|t| &**t)
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_characteristic_types(
        &self,
        characteristic_types: NodeList<CharacteristicType>,
    ) -> Self {
        Self {
            characteristic_types,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicType {
    id: CharacteristicTypeId,
    name: String,
}

impl CharacteristicType {
    pub fn new(id: CharacteristicTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> &CharacteristicTypeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
