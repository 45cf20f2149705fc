// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Conversion settings expressed as plain ids.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{CatalogueBase, CharacteristicTypeId, NodeId, NodeKind, ProfileTypeId, Rule};

use super::{ConfigError, ConverterConfig};

/// What a host persists or receives: ids only, resolved later against loaded documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionSettings {
    pub profile_type_id: ProfileTypeId,
    pub characteristic_type_id: CharacteristicTypeId,
    #[serde(default)]
    pub rule_ids: Vec<NodeId>,
}

impl ConversionSettings {
    pub fn new(
        profile_type_id: ProfileTypeId,
        characteristic_type_id: CharacteristicTypeId,
        rule_ids: impl IntoIterator<Item = NodeId>,
    ) -> Self {
        Self {
            profile_type_id,
            characteristic_type_id,
            rule_ids: rule_ids.into_iter().collect(),
        }
    }

    /// Looks every id up in `documents` and builds a converter config.
    ///
    /// The first document declaring an id wins. Rules are found at any depth.
    pub fn resolve<'a>(
        &self,
        documents: impl IntoIterator<Item = &'a CatalogueBase>,
    ) -> Result<ConverterConfig, ConfigError> {
        let documents = documents.into_iter().collect::<Vec<_>>();

        let profile_type = documents
            .iter()
            .flat_map(|&document| document.profile_types().iter())
            .find(|profile_type| profile_type.id() == &self.profile_type_id)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownProfileType {
                profile_type_id: self.profile_type_id.clone(),
            })?;

        if profile_type
            .characteristic_type(&self.characteristic_type_id)
            .is_none()
        {
            return Err(ConfigError::CharacteristicTypeNotInProfileType {
                profile_type_id: self.profile_type_id.clone(),
                characteristic_type_id: self.characteristic_type_id.clone(),
            });
        }

        let known = rules_by_id(&documents);
        let rules = self
            .rule_ids
            .iter()
            .map(|rule_id| {
                known
                    .get(rule_id.as_str())
                    .map(|&rule| Arc::clone(rule))
                    .ok_or_else(|| ConfigError::UnknownRule {
                        rule_id: rule_id.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            profile_type = profile_type.name(),
            rules = rules.len(),
            "conversion settings resolved"
        );

        Ok(ConverterConfig::new(
            profile_type,
            self.characteristic_type_id.clone(),
            rules,
        ))
    }
}

fn rules_by_id<'a>(documents: &[&'a CatalogueBase]) -> HashMap<&'a str, &'a Arc<Rule>> {
    let mut rules = HashMap::new();
    for &document in documents {
        let found = document
            .cursor()
            .descendants_and_self(|node| node.is_kind(NodeKind::Modifier))
            .filter_map(|cursor| cursor.node().as_rule());
        for rule in found {
            rules.entry(rule.id().as_str()).or_insert(rule);
        }
    }
    rules
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::model::fixtures::{ctid, nid, ptid, sample_catalogue};
    use crate::model::{CharacteristicType, NodeList, ProfileType};

    fn settings(profile_type: &str, slot: &str, rules: &[&str]) -> ConversionSettings {
        ConversionSettings::new(ptid(profile_type), ctid(slot), rules.iter().map(|id| nid(id)))
    }

    #[test]
    fn deserializes_from_camel_case_json() {
        let json = r#"{
            "profileTypeId": "pt:ability",
            "characteristicTypeId": "ct:desc",
            "ruleIds": ["r:fast", "r:deep"]
        }"#;
        let parsed: ConversionSettings = serde_json::from_str(json).expect("settings");
        assert_eq!(parsed, settings("pt:ability", "ct:desc", &["r:fast", "r:deep"]));

        let empty: ConversionSettings =
            serde_json::from_str(r#"{"profileTypeId":"pt:a","characteristicTypeId":"ct:b"}"#)
                .expect("settings");
        assert!(empty.rule_ids.is_empty());
    }

    #[test]
    fn resolves_rules_at_any_depth_in_order() {
        let catalogue = sample_catalogue();

        let config = settings("pt:ability", "ct:range", &["r:aura-inner", "r:stubborn", "r:fast"])
            .resolve([&catalogue])
            .expect("config");

        assert_eq!(config.profile_type.id().as_str(), "pt:ability");
        assert_eq!(config.characteristic_type_id.as_str(), "ct:range");
        let ids = config.rules.iter().map(|rule| rule.id().as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["r:aura-inner", "r:stubborn", "r:fast"]);
        assert!(Arc::ptr_eq(&config.rules[2], &catalogue.rules()[0]));
    }

    #[test]
    fn profile_type_may_come_from_another_document() {
        let core = ProfileType::new(ptid("pt:core"), "Core").with_characteristic_types(
            NodeList::from(vec![CharacteristicType::new(ctid("ct:text"), "Text")]),
        );
        let gamesystem = CatalogueBase::gamesystem(nid("gs:core"), "Core")
            .with_profile_types(NodeList::from(vec![core]));
        let catalogue = sample_catalogue();

        let config = settings("pt:core", "ct:text", &["r:deep"])
            .resolve([&catalogue, &gamesystem])
            .expect("config");

        assert_eq!(config.profile_type.name(), "Core");
        assert_eq!(config.rules[0].name(), "Deep Strike");
    }

    #[rstest]
    #[case(
        settings("pt:missing", "ct:desc", &[]),
        ConfigError::UnknownProfileType { profile_type_id: ptid("pt:missing") }
    )]
    #[case(
        settings("pt:ability", "ct:move", &[]),
        ConfigError::CharacteristicTypeNotInProfileType {
            profile_type_id: ptid("pt:ability"),
            characteristic_type_id: ctid("ct:move"),
        }
    )]
    #[case(
        settings("pt:ability", "ct:desc", &["r:fast", "r:missing"]),
        ConfigError::UnknownRule { rule_id: nid("r:missing") }
    )]
    fn unresolvable_settings_are_rejected(
        #[case] input: ConversionSettings,
        #[case] expected: ConfigError,
    ) {
        let catalogue = sample_catalogue();
        assert_eq!(input.resolve([&catalogue]), Err(expected));
    }
}
