// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::NodeId;
use super::kind::InfoLinkKind;
use super::list::NodeList;

/// A by-id reference to a rule, profile or entry defined elsewhere.
///
/// `kind` is declared, not derived: it must be kept in step with what `target_id` resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoLink {
    id: NodeId,
    #[serde(default)]
    name: String,
    target_id: NodeId,
    #[serde(rename = "type")]
    kind: InfoLinkKind,
    #[serde(default)]
    hidden: bool,
    #[serde(default, skip_serializing_if = "NodeList::is_empty")]
    modifiers: NodeList<Modifier>,
}

impl InfoLink {
    pub fn new(id: NodeId, target_id: NodeId, kind: InfoLinkKind) -> Self {
        Self {
            id,
            name: String::new(),
            target_id,
            kind,
            hidden: false,
            modifiers: NodeList::new(),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target_id(&self) -> &NodeId {
        &self.target_id
    }

    pub fn kind(&self) -> InfoLinkKind {
        self.kind
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn modifiers(&self) -> &NodeList<Modifier> {
        &self.modifiers
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_kind(&self, kind: InfoLinkKind) -> Self {
        Self {
            kind,
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
}

/// A conditional field override. Carried verbatim; never evaluated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    #[serde(rename = "type")]
    modifier_type: String,
    field: String,
    #[serde(default)]
    value: String,
}

impl Modifier {
    pub fn new(
        modifier_type: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            modifier_type: modifier_type.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn modifier_type(&self) -> &str {
        &self.modifier_type
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
