// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use crate::model::{InfoLink, InfoLinkKind, NodeList, Profile, Rule};

use super::{ConversionLog, RuleConverter};

impl RuleConverter {
    /// Retargets every link in `links` that points at a selected rule.
    ///
    /// Returns the same list allocation when no link needed a change.
    pub(super) fn convert_links(
        &self,
        links: &NodeList<InfoLink>,
        log: &mut ConversionLog,
    ) -> NodeList<InfoLink> {
        links.map_shared(|link| self.retarget_link(link, log))
    }

    fn retarget_link(&self, link: &Arc<InfoLink>, log: &mut ConversionLog) -> Arc<InfoLink> {
        if link.kind() == InfoLinkKind::Profile || !self.is_selected(link.target_id().as_str()) {
            return Arc::clone(link);
        }
        log.record_link_retargeted(link);
        Arc::new(link.with_kind(InfoLinkKind::Profile))
    }

    /// Retargets links held anywhere under a rule that stays a rule.
    ///
    /// Nested rules are walked but never converted.
    pub(super) fn convert_rule(&self, rule: &Arc<Rule>, log: &mut ConversionLog) -> Arc<Rule> {
        let info_links = self.convert_links(rule.info_links(), log);
        let profiles = rule.profiles().map_shared(|profile| self.convert_profile(profile, log));
        let rules = rule.rules().map_shared(|nested| self.convert_rule(nested, log));

        if info_links.ptr_eq(rule.info_links())
            && profiles.ptr_eq(rule.profiles())
            && rules.ptr_eq(rule.rules())
        {
            return Arc::clone(rule);
        }
        Arc::new(
            rule.with_info_links(info_links)
                .with_profiles(profiles)
                .with_rules(rules),
        )
    }

    /// Retargets links held anywhere under an existing profile.
    ///
    /// Profiles carrying a selected rule id were synthesized from that rule and keep its
    /// nested content as it was.
    pub(super) fn convert_profile(
        &self,
        profile: &Arc<Profile>,
        log: &mut ConversionLog,
    ) -> Arc<Profile> {
        if self.is_selected(profile.id().as_str()) {
            return Arc::clone(profile);
        }
        let info_links = self.convert_links(profile.info_links(), log);
        let profiles = profile.profiles().map_shared(|nested| self.convert_profile(nested, log));
        let rules = profile.rules().map_shared(|rule| self.convert_rule(rule, log));

        if info_links.ptr_eq(profile.info_links())
            && profiles.ptr_eq(profile.profiles())
            && rules.ptr_eq(profile.rules())
        {
            return Arc::clone(profile);
        }
        Arc::new(
            profile
                .with_info_links(info_links)
                .with_profiles(profiles)
                .with_rules(rules),
        )
    }
}
