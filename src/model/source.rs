// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Uniform, read-only navigation over catalogue trees.
//!
//! Nodes do not store parent pointers (that would defeat sharing subtrees between an input and
//! an output tree). Instead a [`SourceCursor`] pairs a node with the cursor of its parent and
//! the slot it occupies there; cursors are cheap to clone and are built lazily while walking.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use smallvec::SmallVec;

use super::catalogue::CatalogueBase;
use super::entry::SelectionEntry;
use super::kind::{ChildRole, ChildSlot, NodeKind};
use super::link::{InfoLink, Modifier};
use super::list::NodeList;
use super::profile::{Characteristic, CharacteristicType, Profile, ProfileType};
use super::rule::Rule;

/// A borrowed view of any tree node.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Catalogue(&'a CatalogueBase),
    ProfileType(&'a Arc<ProfileType>),
    CharacteristicType(&'a Arc<CharacteristicType>),
    Characteristic(&'a Arc<Characteristic>),
    Profile(&'a Arc<Profile>),
    Rule(&'a Arc<Rule>),
    InfoLink(&'a Arc<InfoLink>),
    Modifier(&'a Arc<Modifier>),
    SelectionEntry(&'a Arc<SelectionEntry>),
}

pub type ChildBuf<'a> = SmallVec<[(ChildSlot, NodeRef<'a>); 8]>;

impl<'a> NodeRef<'a> {
    pub fn kind(self) -> NodeKind {
        match self {
            Self::Catalogue(node) => node.kind().node_kind(),
            Self::ProfileType(_) => NodeKind::ProfileType,
            Self::CharacteristicType(_) => NodeKind::CharacteristicType,
            Self::Characteristic(_) => NodeKind::Characteristic,
            Self::Profile(_) => NodeKind::Profile,
            Self::Rule(_) => NodeKind::Rule,
            Self::InfoLink(_) => NodeKind::InfoLink,
            Self::Modifier(_) => NodeKind::Modifier,
            Self::SelectionEntry(node) => node.kind().node_kind(),
        }
    }

    pub fn is_kind(self, kind: NodeKind) -> bool {
        self.kind() == kind
    }

    /// Display name for nameable kinds. Links with an empty name count as unnamed.
    pub fn name(self) -> Option<&'a str> {
        match self {
            Self::Catalogue(node) => Some(node.name()),
            Self::ProfileType(node) => Some(node.name()),
            Self::CharacteristicType(node) => Some(node.name()),
            Self::Characteristic(node) => Some(node.name()),
            Self::Profile(node) => Some(node.name()),
            Self::Rule(node) => Some(node.name()),
            Self::InfoLink(node) => Some(node.name()).filter(|name| !name.is_empty()),
            Self::Modifier(_) => None,
            Self::SelectionEntry(node) => Some(node.name()),
        }
    }

    pub fn id(self) -> Option<&'a str> {
        match self {
            Self::Catalogue(node) => Some(node.id().as_str()),
            Self::ProfileType(node) => Some(node.id().as_str()),
            Self::CharacteristicType(node) => Some(node.id().as_str()),
            Self::Characteristic(_) | Self::Modifier(_) => None,
            Self::Profile(node) => Some(node.id().as_str()),
            Self::Rule(node) => Some(node.id().as_str()),
            Self::InfoLink(node) => Some(node.id().as_str()),
            Self::SelectionEntry(node) => Some(node.id().as_str()),
        }
    }

    pub fn as_rule(self) -> Option<&'a Arc<Rule>> {
        match self {
            Self::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn as_catalogue(self) -> Option<&'a CatalogueBase> {
        match self {
            Self::Catalogue(root) => Some(root),
            _ => None,
        }
    }

    /// True if both views point at the same node instance.
    pub fn same_node(self, other: NodeRef<'_>) -> bool {
        self.kind() == other.kind() && node_address(self) == node_address(other)
    }

    /// Direct children, in declared role order then list order.
    pub fn children(self) -> ChildBuf<'a> {
        let mut out = ChildBuf::new();
        match self {
            Self::Catalogue(root) => {
                push_list(
                    &mut out,
                    ChildRole::ProfileTypes,
                    root.profile_types(),
                    NodeRef::ProfileType,
                );
                push_list(&mut out, ChildRole::Profiles, root.profiles(), NodeRef::Profile);
                push_list(&mut out, ChildRole::Rules, root.rules(), NodeRef::Rule);
                push_list(&mut out, ChildRole::InfoLinks, root.info_links(), NodeRef::InfoLink);
                push_list(
                    &mut out,
                    ChildRole::SharedProfiles,
                    root.shared_profiles(),
                    NodeRef::Profile,
                );
                push_list(&mut out, ChildRole::SharedRules, root.shared_rules(), NodeRef::Rule);
                push_list(
                    &mut out,
                    ChildRole::SelectionEntries,
                    root.selection_entries(),
                    NodeRef::SelectionEntry,
                );
                push_list(
                    &mut out,
                    ChildRole::SharedSelectionEntries,
                    root.shared_selection_entries(),
                    NodeRef::SelectionEntry,
                );
                push_list(
                    &mut out,
                    ChildRole::SharedSelectionEntryGroups,
                    root.shared_selection_entry_groups(),
                    NodeRef::SelectionEntry,
                );
            }
            Self::ProfileType(profile_type) => {
                push_list(
                    &mut out,
                    ChildRole::CharacteristicTypes,
                    profile_type.characteristic_types(),
                    NodeRef::CharacteristicType,
                );
            }
            Self::CharacteristicType(_) | Self::Characteristic(_) | Self::Modifier(_) => {}
            Self::Profile(profile) => {
                push_list(
                    &mut out,
                    ChildRole::Characteristics,
                    profile.characteristics(),
                    NodeRef::Characteristic,
                );
                push_list(&mut out, ChildRole::Modifiers, profile.modifiers(), NodeRef::Modifier);
                push_list(&mut out, ChildRole::InfoLinks, profile.info_links(), NodeRef::InfoLink);
                push_list(&mut out, ChildRole::Profiles, profile.profiles(), NodeRef::Profile);
                push_list(&mut out, ChildRole::Rules, profile.rules(), NodeRef::Rule);
            }
            Self::Rule(rule) => {
                push_list(&mut out, ChildRole::Modifiers, rule.modifiers(), NodeRef::Modifier);
                push_list(&mut out, ChildRole::InfoLinks, rule.info_links(), NodeRef::InfoLink);
                push_list(&mut out, ChildRole::Profiles, rule.profiles(), NodeRef::Profile);
                push_list(&mut out, ChildRole::Rules, rule.rules(), NodeRef::Rule);
            }
            Self::InfoLink(link) => {
                push_list(&mut out, ChildRole::Modifiers, link.modifiers(), NodeRef::Modifier);
            }
            Self::SelectionEntry(entry) => {
                push_list(&mut out, ChildRole::Modifiers, entry.modifiers(), NodeRef::Modifier);
                push_list(&mut out, ChildRole::Profiles, entry.profiles(), NodeRef::Profile);
                push_list(&mut out, ChildRole::Rules, entry.rules(), NodeRef::Rule);
                push_list(&mut out, ChildRole::InfoLinks, entry.info_links(), NodeRef::InfoLink);
                push_list(
                    &mut out,
                    ChildRole::SelectionEntries,
                    entry.selection_entries(),
                    NodeRef::SelectionEntry,
                );
                push_list(
                    &mut out,
                    ChildRole::SelectionEntryGroups,
                    entry.selection_entry_groups(),
                    NodeRef::SelectionEntry,
                );
            }
        }
        out
    }

    /// The child stored at `slot`, if any.
    pub fn child(self, slot: ChildSlot) -> Option<NodeRef<'a>> {
        self.children()
            .into_iter()
            .find(|(candidate, _)| *candidate == slot)
            .map(|(_, node)| node)
    }
}

fn node_address(node: NodeRef<'_>) -> *const () {
    fn addr<T>(value: &T) -> *const () {
        value as *const T as *const ()
    }
    match node {
        NodeRef::Catalogue(n) => addr(n),
        NodeRef::ProfileType(n) => addr(&**n),
        NodeRef::CharacteristicType(n) => addr(&**n),
        NodeRef::Characteristic(n) => addr(&**n),
        NodeRef::Profile(n) => addr(&**n),
        NodeRef::Rule(n) => addr(&**n),
        NodeRef::InfoLink(n) => addr(&**n),
        NodeRef::Modifier(n) => addr(&**n),
        NodeRef::SelectionEntry(n) => addr(&**n),
    }
}

fn push_list<'a, T>(
    out: &mut ChildBuf<'a>,
    role: ChildRole,
    list: &'a NodeList<T>,
    wrap: fn(&'a Arc<T>) -> NodeRef<'a>,
) {
    out.extend(
        list.iter()
            .enumerate()
            .map(|(index, item)| (ChildSlot::new(role, index), wrap(item))),
    );
}

struct CursorInner<'a> {
    node: NodeRef<'a>,
    slot: Option<ChildSlot>,
    parent: Option<SourceCursor<'a>>,
}

/// A node together with its position in the tree.
///
/// For every non-root cursor, `parent().node().child(slot())` is this cursor's node.
#[derive(Clone)]
pub struct SourceCursor<'a> {
    inner: Rc<CursorInner<'a>>,
}

impl<'a> SourceCursor<'a> {
    pub fn root(node: NodeRef<'a>) -> Self {
        Self {
            inner: Rc::new(CursorInner {
                node,
                slot: None,
                parent: None,
            }),
        }
    }

    fn child_cursor(&self, slot: ChildSlot, node: NodeRef<'a>) -> Self {
        Self {
            inner: Rc::new(CursorInner {
                node,
                slot: Some(slot),
                parent: Some(self.clone()),
            }),
        }
    }

    pub fn node(&self) -> NodeRef<'a> {
        self.inner.node
    }

    pub fn slot(&self) -> Option<ChildSlot> {
        self.inner.slot
    }

    pub fn parent(&self) -> Option<&SourceCursor<'a>> {
        self.inner.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.inner.parent.is_none()
    }

    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    pub fn children(&self) -> impl Iterator<Item = SourceCursor<'a>> {
        let parent = self.clone();
        self.node()
            .children()
            .into_iter()
            .map(move |(slot, node)| parent.child_cursor(slot, node))
    }

    /// Parent, grandparent, ... up to and including the root.
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors {
            next: self.inner.parent.clone(),
        }
    }

    /// Like [`SourceCursor::ancestors`], but starting with this node.
    pub fn ancestors_and_self(&self) -> Ancestors<'a> {
        Ancestors {
            next: Some(self.clone()),
        }
    }

    pub fn root_cursor(&self) -> SourceCursor<'a> {
        let mut current = self.clone();
        while let Some(parent) = current.inner.parent.clone() {
            current = parent;
        }
        current
    }

    /// The document this cursor belongs to, when the walk started at a catalogue root.
    pub fn document(&self) -> Option<&'a CatalogueBase> {
        self.root_cursor().node().as_catalogue()
    }

    /// Pre-order walk starting at this node.
    ///
    /// A node for which `prune` returns true is still yielded, but nothing below it is.
    pub fn descendants_and_self<F>(&self, prune: F) -> DescendantsAndSelf<'a, F>
    where
        F: FnMut(NodeRef<'a>) -> bool,
    {
        DescendantsAndSelf {
            stack: vec![self.clone()],
            prune,
        }
    }

    /// Root-to-node names joined by `separator`; unnamed nodes contribute their kind label.
    pub fn display_path(&self, separator: &str) -> String {
        let mut segments = self
            .ancestors_and_self()
            .map(|cursor| {
                let node = cursor.node();
                node.name()
                    .map(ToOwned::to_owned)
                    .unwrap_or_else(|| node.kind().label().to_owned())
            })
            .collect::<Vec<_>>();
        segments.reverse();
        segments.join(separator)
    }
}

impl fmt::Debug for SourceCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceCursor")
            .field("kind", &self.node().kind())
            .field("id", &self.node().id())
            .field("slot", &self.slot())
            .finish()
    }
}

pub struct Ancestors<'a> {
    next: Option<SourceCursor<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = SourceCursor<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.inner.parent.clone();
        Some(current)
    }
}

pub struct DescendantsAndSelf<'a, F> {
    stack: Vec<SourceCursor<'a>>,
    prune: F,
}

impl<'a, F> Iterator for DescendantsAndSelf<'a, F>
where
    F: FnMut(NodeRef<'a>) -> bool,
{
    type Item = SourceCursor<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        if !(self.prune)(current.node()) {
            let children = current.children().collect::<SmallVec<[_; 8]>>();
            self.stack.extend(children.into_iter().rev());
        }
        Some(current)
    }
}
