// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::catalogue::CatalogueBase;
use super::entry::SelectionEntry;
use super::ids::{CharacteristicTypeId, NodeId, ProfileTypeId};
use super::kind::InfoLinkKind;
use super::link::{InfoLink, Modifier};
use super::list::NodeList;
use super::profile::{Characteristic, CharacteristicType, Profile, ProfileType};
use super::rule::Rule;

pub(crate) fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

pub(crate) fn ptid(value: &str) -> ProfileTypeId {
    ProfileTypeId::new(value).expect("profile type id")
}

pub(crate) fn ctid(value: &str) -> CharacteristicTypeId {
    CharacteristicTypeId::new(value).expect("characteristic type id")
}

pub(crate) fn rule(id: &str, name: &str, description: &str) -> Rule {
    Rule::new(nid(id), name).with_description(description)
}

pub(crate) fn link(id: &str, target: &str, kind: InfoLinkKind) -> InfoLink {
    InfoLink::new(nid(id), nid(target), kind)
}

pub(crate) fn hide_modifier() -> Modifier {
    Modifier::new("set", "hidden", "true")
}

/// `Ability` schema with two slots: `ct:desc` (Description) and `ct:range` (Range).
pub(crate) fn ability_profile_type() -> ProfileType {
    ProfileType::new(ptid("pt:ability"), "Ability").with_characteristic_types(NodeList::from(vec![
        CharacteristicType::new(ctid("ct:desc"), "Description"),
        CharacteristicType::new(ctid("ct:range"), "Range"),
    ]))
}

/// A small catalogue touching every container the converter visits.
///
/// - root rules: `r:fast` (plain), `r:slow` (with a modifier), `r:aura` (nests `r:aura-inner`)
/// - root profiles: `p:stats`
/// - shared rules: `r:deep`
/// - entry `e:squad` holds rule `r:stubborn`, links to `r:fast` and `r:deep` (the latter with a
///   modifier), and group `g:options` whose entry `e:sergeant` links to `r:slow`
/// - shared entry `e:plain` holds nothing convertible
/// - shared group `g:shared` links to an unknown id
pub(crate) fn sample_catalogue() -> CatalogueBase {
    let stats = Profile::new(nid("p:stats"), "Trooper", ptid("pt:unit"), "Unit")
        .with_characteristics(NodeList::from(vec![
            Characteristic::new(ctid("ct:move"), "M").with_value(Some("6\"")),
        ]));

    let aura = rule("r:aura", "Aura", "Friendly units within 6\" gain +1 Ld.")
        .with_rules(NodeList::from(vec![rule("r:aura-inner", "Aura (inner)", "Stacks.")]));

    let sergeant = SelectionEntry::entry(nid("e:sergeant"), "Sergeant").with_info_links(
        NodeList::from(vec![link("l:sergeant-slow", "r:slow", InfoLinkKind::Rule)]),
    );
    let options = SelectionEntry::group(nid("g:options"), "Options")
        .with_selection_entries(NodeList::from(vec![sergeant]));

    let squad = SelectionEntry::entry(nid("e:squad"), "Squad")
        .with_rules(NodeList::from(vec![rule("r:stubborn", "Stubborn", "Never flees.")]))
        .with_info_links(NodeList::from(vec![
            link("l:squad-fast", "r:fast", InfoLinkKind::Rule),
            link("l:squad-deep", "r:deep", InfoLinkKind::Rule)
                .with_modifiers(NodeList::from(vec![hide_modifier()])),
        ]))
        .with_selection_entry_groups(NodeList::from(vec![options]));

    let plain = SelectionEntry::entry(nid("e:plain"), "Plain")
        .with_modifiers(NodeList::from(vec![hide_modifier()]));

    let shared_group = SelectionEntry::group(nid("g:shared"), "Shared").with_info_links(
        NodeList::from(vec![link("l:dangling", "r:missing", InfoLinkKind::Rule)]),
    );

    CatalogueBase::catalogue(nid("cat:sample"), "Sample Army")
        .with_revision(3)
        .with_profile_types(NodeList::from(vec![ability_profile_type()]))
        .with_profiles(NodeList::from(vec![stats]))
        .with_rules(NodeList::from(vec![
            rule("r:fast", "Fast", "6"),
            rule("r:slow", "Slow", "-1 Move")
                .with_modifiers(NodeList::from(vec![hide_modifier()])),
            aura,
        ]))
        .with_shared_rules(NodeList::from(vec![rule(
            "r:deep",
            "Deep Strike",
            "Arrives from reserves.",
        )]))
        .with_selection_entries(NodeList::from(vec![squad]))
        .with_shared_selection_entries(NodeList::from(vec![plain]))
        .with_shared_selection_entry_groups(NodeList::from(vec![shared_group]))
}
