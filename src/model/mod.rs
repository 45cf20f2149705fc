// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core document-tree model.
//!
//! A datafile is an immutable tree rooted at a [`CatalogueBase`]. Children live in
//! [`NodeList`]s of `Arc`-shared nodes, so deriving a node with `with_*` shares every subtree
//! it does not replace. Parent/ancestor navigation goes through [`SourceCursor`].

pub mod catalogue;
pub mod entry;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod kind;
pub mod link;
pub mod list;
pub mod profile;
pub mod rule;
pub mod source;

pub use catalogue::CatalogueBase;
pub use entry::SelectionEntry;
pub use ids::{CharacteristicTypeId, Id, IdError, NodeId, ProfileTypeId};
pub use kind::{CatalogueKind, ChildRole, ChildSlot, EntryKind, InfoLinkKind, NodeKind};
pub use link::{InfoLink, Modifier};
pub use list::NodeList;
pub use profile::{Characteristic, CharacteristicType, Profile, ProfileType};
pub use rule::Rule;
pub use source::{Ancestors, DescendantsAndSelf, NodeRef, SourceCursor};
