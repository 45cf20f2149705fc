// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Building profiles out of rules.

use std::sync::Arc;

use crate::model::{Characteristic, CharacteristicTypeId, NodeList, Profile, ProfileType, Rule};

/// One characteristic per characteristic type of `profile_type`, in declared order.
///
/// Only the slot named by `value_slot` carries `value`; every other slot is empty. An unknown
/// `value_slot` yields a fully empty set.
pub fn build_characteristics(
    profile_type: &ProfileType,
    value_slot: &CharacteristicTypeId,
    value: &str,
) -> NodeList<Characteristic> {
    profile_type
        .characteristic_types()
        .iter()
        .map(|slot| {
            let characteristic = Characteristic::new(slot.id().clone(), slot.name());
            if slot.id() == value_slot {
                characteristic.with_value(Some(value))
            } else {
                characteristic
            }
        })
        .map(Arc::new)
        .collect()
}

/// Synthesizes the profile that replaces `rule`.
///
/// The profile keeps the rule's id so every reference by id stays valid. The rule description
/// lands verbatim in `value_slot`. Nested links, profiles, rules and modifiers are shared as
/// they are.
pub fn rule_to_profile(
    rule: &Rule,
    profile_type: &ProfileType,
    value_slot: &CharacteristicTypeId,
) -> Profile {
    Profile::new(
        rule.id().clone(),
        rule.name(),
        profile_type.id().clone(),
        profile_type.name(),
    )
    .with_book(rule.book())
    .with_page(rule.page())
    .with_hidden(rule.is_hidden())
    .with_characteristics(build_characteristics(
        profile_type,
        value_slot,
        rule.description(),
    ))
    .with_modifiers(rule.modifiers().clone())
    .with_info_links(rule.info_links().clone())
    .with_profiles(rule.profiles().clone())
    .with_rules(rule.rules().clone())
}
