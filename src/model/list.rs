// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// An immutable, ordered child list.
///
/// Both the list and its items are reference counted: cloning a list (or a node holding one)
/// never copies a subtree, and rebuilding a list only allocates when an item actually changed.
pub struct NodeList<T> {
    items: Arc<[Arc<T>]>,
}

impl<T> NodeList<T> {
    pub fn new() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    pub fn from_arcs(items: Vec<Arc<T>>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<T>> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<T>> {
        self.items.iter()
    }

    /// True if both lists are the same allocation (not merely equal).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// Returns a list with `extra` appended; returns `self` shared when `extra` is empty.
    pub fn appended(&self, extra: impl IntoIterator<Item = Arc<T>>) -> Self {
        let mut extra = extra.into_iter().peekable();
        if extra.peek().is_none() {
            return self.clone();
        }
        let mut items = self.items.to_vec();
        items.extend(extra);
        Self::from_arcs(items)
    }

    /// Rebuilds the list item by item.
    ///
    /// When every item maps to the same `Arc` it came from, the original allocation is
    /// returned, so an unchanged list stays pointer-identical.
    pub fn map_shared(&self, mut f: impl FnMut(&Arc<T>) -> Arc<T>) -> Self {
        let mut rebuilt: Option<Vec<Arc<T>>> = None;
        for (index, item) in self.items.iter().enumerate() {
            let mapped = f(item);
            if let Some(items) = rebuilt.as_mut() {
                items.push(mapped);
                continue;
            }
            if !Arc::ptr_eq(item, &mapped) {
                let mut items = Vec::with_capacity(self.items.len());
                items.extend(self.items[..index].iter().cloned());
                items.push(mapped);
                rebuilt = Some(items);
            }
        }
        match rebuilt {
            Some(items) => Self::from_arcs(items),
            None => self.clone(),
        }
    }
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NodeList<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: PartialEq> PartialEq for NodeList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.items[..] == other.items[..]
    }
}

impl<T: Eq> Eq for NodeList<T> {}

impl<T: fmt::Debug> fmt::Debug for NodeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> Index<usize> for NodeList<T> {
    type Output = Arc<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a Arc<T>;
    type IntoIter = std::slice::Iter<'a, Arc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<Vec<T>> for NodeList<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().map(Arc::new).collect()
    }
}

impl<T> FromIterator<Arc<T>> for NodeList<T> {
    fn from_iter<I: IntoIterator<Item = Arc<T>>>(iter: I) -> Self {
        Self::from_arcs(iter.into_iter().collect())
    }
}

impl<T: Serialize> Serialize for NodeList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item.as_ref())?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NodeList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(Self::from(items))
    }
}
