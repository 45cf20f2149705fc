// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rule → profile conversion.
//!
//! A [`RuleConverter`] is configured once (target profile type, target characteristic slot,
//! selected rules) and can then convert any number of catalogue roots. Each conversion returns a
//! new root that shares every unchanged subtree with its input, plus the advisory messages
//! raised while converting.

pub mod batch;
mod links;
pub mod settings;
pub mod synth;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::model::{
    CatalogueBase, CharacteristicType, CharacteristicTypeId, InfoLink, NodeId, NodeList, Profile,
    ProfileType, ProfileTypeId, Rule, SelectionEntry,
};

pub use batch::{convert_datafiles, DatafileConversion};
pub use settings::ConversionSettings;
pub use synth::{build_characteristics, rule_to_profile};

const RULE_MODIFIERS_COPIED: &str =
    "rule has modifiers; they were copied onto the profile without conversion and may not apply";
const LINK_MODIFIERS_COPIED: &str =
    "rule link has modifiers; they were kept without conversion and may not apply to a profile";

/// What to convert and into which schema slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub profile_type: Arc<ProfileType>,
    pub characteristic_type_id: CharacteristicTypeId,
    pub rules: Vec<Arc<Rule>>,
}

impl ConverterConfig {
    pub fn new(
        profile_type: Arc<ProfileType>,
        characteristic_type_id: CharacteristicTypeId,
        rules: impl IntoIterator<Item = Arc<Rule>>,
    ) -> Self {
        Self {
            profile_type,
            characteristic_type_id,
            rules: rules.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    CharacteristicTypeNotInProfileType {
        profile_type_id: ProfileTypeId,
        characteristic_type_id: CharacteristicTypeId,
    },
    UnknownProfileType {
        profile_type_id: ProfileTypeId,
    },
    UnknownRule {
        rule_id: NodeId,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CharacteristicTypeNotInProfileType {
                profile_type_id,
                characteristic_type_id,
            } => write!(
                f,
                "characteristic type {characteristic_type_id} is not declared by profile type {profile_type_id}"
            ),
            Self::UnknownProfileType { profile_type_id } => {
                write!(f, "profile type not found (id={profile_type_id})")
            }
            Self::UnknownRule { rule_id } => write!(f, "rule not found (id={rule_id})"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// The node an advisory message is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSubject {
    Rule(Arc<Rule>),
    InfoLink(Arc<InfoLink>),
}

impl MessageSubject {
    pub fn node_id(&self) -> &NodeId {
        match self {
            Self::Rule(rule) => rule.id(),
            Self::InfoLink(link) => link.id(),
        }
    }
}

/// A non-fatal note about a conversion that was not lossless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterMessage {
    subject: MessageSubject,
    text: String,
}

impl ConverterMessage {
    pub fn new(subject: MessageSubject, text: impl Into<String>) -> Self {
        Self {
            subject,
            text: text.into(),
        }
    }

    pub fn subject(&self) -> &MessageSubject {
        &self.subject
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ConverterMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subject {
            MessageSubject::Rule(rule) => {
                write!(f, "rule '{}' ({}): {}", rule.name(), rule.id(), self.text)
            }
            MessageSubject::InfoLink(link) => write!(
                f,
                "link {} -> {}: {}",
                link.id(),
                link.target_id(),
                self.text
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub rules_converted: usize,
    pub links_retargeted: usize,
}

/// Result of converting one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub root: CatalogueBase,
    pub messages: Vec<ConverterMessage>,
    pub stats: ConversionStats,
}

impl Conversion {
    pub fn changed(&self) -> bool {
        self.stats != ConversionStats::default()
    }
}

/// Accumulates messages and counters while one root is walked.
#[derive(Debug, Default)]
struct ConversionLog {
    messages: Vec<ConverterMessage>,
    stats: ConversionStats,
}

impl ConversionLog {
    fn record_rule_converted(&mut self, rule: &Arc<Rule>) {
        self.stats.rules_converted += 1;
        trace!(rule_id = %rule.id(), rule_name = rule.name(), "rule converted to profile");
        if !rule.modifiers().is_empty() {
            self.messages.push(ConverterMessage::new(
                MessageSubject::Rule(Arc::clone(rule)),
                RULE_MODIFIERS_COPIED,
            ));
        }
    }

    fn record_link_retargeted(&mut self, link: &Arc<InfoLink>) {
        self.stats.links_retargeted += 1;
        trace!(link_id = %link.id(), target_id = %link.target_id(), "link retargeted to profile");
        if !link.modifiers().is_empty() {
            self.messages.push(ConverterMessage::new(
                MessageSubject::InfoLink(Arc::clone(link)),
                LINK_MODIFIERS_COPIED,
            ));
        }
    }
}

/// Converts selected rules into profiles of one profile type.
///
/// Immutable after construction, so one converter may serve several documents concurrently.
#[derive(Debug, Clone)]
pub struct RuleConverter {
    profile_type: Arc<ProfileType>,
    characteristic_type: CharacteristicType,
    rules: Vec<Arc<Rule>>,
    profiles: HashMap<NodeId, Arc<Profile>>,
}

impl RuleConverter {
    /// Validates `config` and synthesizes one profile per distinct selected rule id.
    ///
    /// Duplicate rule ids keep their first occurrence.
    pub fn new(config: ConverterConfig) -> Result<Self, ConfigError> {
        let ConverterConfig {
            profile_type,
            characteristic_type_id,
            rules: selected,
        } = config;

        let Some(characteristic_type) = profile_type
            .characteristic_type(&characteristic_type_id)
            .cloned()
        else {
            return Err(ConfigError::CharacteristicTypeNotInProfileType {
                profile_type_id: profile_type.id().clone(),
                characteristic_type_id,
            });
        };

        let mut rules = Vec::with_capacity(selected.len());
        let mut profiles = HashMap::with_capacity(selected.len());
        for rule in selected {
            if profiles.contains_key(rule.id()) {
                debug!(rule_id = %rule.id(), "duplicate rule selection ignored");
                continue;
            }
            let profile = rule_to_profile(&rule, &profile_type, characteristic_type.id());
            profiles.insert(rule.id().clone(), Arc::new(profile));
            rules.push(rule);
        }

        debug!(
            profile_type = profile_type.name(),
            characteristic_type = characteristic_type.name(),
            rules = rules.len(),
            "rule converter configured"
        );

        Ok(Self {
            profile_type,
            characteristic_type,
            rules,
            profiles,
        })
    }

    pub fn profile_type(&self) -> &Arc<ProfileType> {
        &self.profile_type
    }

    pub fn characteristic_type(&self) -> &CharacteristicType {
        &self.characteristic_type
    }

    /// Selected rules, de-duplicated by id, in selection order.
    pub fn rules(&self) -> &[Arc<Rule>] {
        &self.rules
    }

    /// The profile synthesized for `rule_id`, if that rule is selected.
    pub fn profile_for(&self, rule_id: &str) -> Option<&Arc<Profile>> {
        self.profiles.get(rule_id)
    }

    pub fn is_selected(&self, rule_id: &str) -> bool {
        self.profiles.contains_key(rule_id)
    }

    /// Converts one catalogue root. The input is left untouched.
    pub fn convert(&self, root: &CatalogueBase) -> Conversion {
        let mut log = ConversionLog::default();

        let (profiles, rules) = self.convert_rules_and_profiles(root.profiles(), root.rules(), &mut log);
        let (shared_profiles, shared_rules) =
            self.convert_rules_and_profiles(root.shared_profiles(), root.shared_rules(), &mut log);
        let info_links = self.convert_links(root.info_links(), &mut log);
        let selection_entries = self.convert_entries(root.selection_entries(), &mut log);
        let shared_selection_entries =
            self.convert_entries(root.shared_selection_entries(), &mut log);
        let shared_selection_entry_groups =
            self.convert_entries(root.shared_selection_entry_groups(), &mut log);

        let converted = root
            .with_profiles(profiles)
            .with_rules(rules)
            .with_info_links(info_links)
            .with_shared_profiles(shared_profiles)
            .with_shared_rules(shared_rules)
            .with_selection_entries(selection_entries)
            .with_shared_selection_entries(shared_selection_entries)
            .with_shared_selection_entry_groups(shared_selection_entry_groups);

        debug!(
            document = root.name(),
            rules_converted = log.stats.rules_converted,
            links_retargeted = log.stats.links_retargeted,
            messages = log.messages.len(),
            "catalogue converted"
        );

        Conversion {
            root: converted,
            messages: log.messages,
            stats: log.stats,
        }
    }

    /// Moves selected rules out of `rules` and appends their profiles to `profiles`.
    ///
    /// Converted profiles follow the existing ones, in the order their rules appeared.
    /// Existing profiles and kept rules get their nested links retargeted.
    fn convert_rules_and_profiles(
        &self,
        profiles: &NodeList<Profile>,
        rules: &NodeList<Rule>,
        log: &mut ConversionLog,
    ) -> (NodeList<Profile>, NodeList<Rule>) {
        let profiles = profiles.map_shared(|profile| self.convert_profile(profile, log));
        if !rules.iter().any(|rule| self.is_selected(rule.id().as_str())) {
            let rules = rules.map_shared(|rule| self.convert_rule(rule, log));
            return (profiles, rules);
        }

        let mut kept = Vec::with_capacity(rules.len());
        let mut converted = Vec::new();
        for rule in rules {
            match self.profiles.get(rule.id()) {
                Some(profile) => {
                    log.record_rule_converted(rule);
                    converted.push(Arc::clone(profile));
                }
                None => kept.push(self.convert_rule(rule, log)),
            }
        }

        (profiles.appended(converted), NodeList::from_arcs(kept))
    }

    fn convert_entries(
        &self,
        entries: &NodeList<SelectionEntry>,
        log: &mut ConversionLog,
    ) -> NodeList<SelectionEntry> {
        entries.map_shared(|entry| self.convert_entry(entry, log))
    }

    fn convert_entry(
        &self,
        entry: &Arc<SelectionEntry>,
        log: &mut ConversionLog,
    ) -> Arc<SelectionEntry> {
        let (profiles, rules) = self.convert_rules_and_profiles(entry.profiles(), entry.rules(), log);
        let info_links = self.convert_links(entry.info_links(), log);
        let selection_entries = self.convert_entries(entry.selection_entries(), log);
        let selection_entry_groups = self.convert_entries(entry.selection_entry_groups(), log);

        let unchanged = profiles.ptr_eq(entry.profiles())
            && rules.ptr_eq(entry.rules())
            && info_links.ptr_eq(entry.info_links())
            && selection_entries.ptr_eq(entry.selection_entries())
            && selection_entry_groups.ptr_eq(entry.selection_entry_groups());
        if unchanged {
            return Arc::clone(entry);
        }

        Arc::new(
            entry
                .with_profiles(profiles)
                .with_rules(rules)
                .with_info_links(info_links)
                .with_selection_entries(selection_entries)
                .with_selection_entry_groups(selection_entry_groups),
        )
    }
}
