// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named groups of view models.

use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Identity of a [`Section`].
///
/// Two sections are the same section iff their keys are equal. Use this as
/// the key type for any map or set that needs section identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SectionKey(String);

impl SectionKey {
    /// Creates a key from a section name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the section name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SectionKey {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for SectionKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SectionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, ordered group of view models.
///
/// - `M` is the per-item view model type.
/// - `D` is the presentation data attached to the section (header and footer
///   hints); each adapter family defines its own.
/// - `S` is an optional payload the adapter never inspects.
///
/// Equality and hashing consider the [`SectionKey`] only. Duplicate names
/// inside one adapter are accepted but make identity ambiguous.
///
/// Once a section is handed to an adapter, its models can only be changed
/// through the adapter, which keeps the host widget in sync.
#[derive(Debug, Clone)]
pub struct Section<M, D = (), S = ()> {
    key: SectionKey,
    value: Option<S>,
    decoration: D,
    models: Vec<M>,
}

impl<M, D: Default, S> Section<M, D, S> {
    /// Creates an empty section with default decoration and no payload.
    pub fn new(name: impl Into<SectionKey>) -> Self {
        Self {
            key: name.into(),
            value: None,
            decoration: D::default(),
            models: Vec::new(),
        }
    }
}

impl<M, D, S> Section<M, D, S> {
    /// Sets the payload.
    #[must_use]
    pub fn with_value(mut self, value: S) -> Self {
        self.value = Some(value);
        self
    }

    /// Replaces the decoration.
    #[must_use]
    pub fn with_decoration(mut self, decoration: D) -> Self {
        self.decoration = decoration;
        self
    }

    /// Appends `models` to the section.
    #[must_use]
    pub fn with_models(mut self, models: impl IntoIterator<Item = M>) -> Self {
        self.models.extend(models);
        self
    }

    /// Returns the section's identity.
    #[must_use]
    pub const fn key(&self) -> &SectionKey {
        &self.key
    }

    /// Returns the section name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.key.as_str()
    }

    /// Returns the payload, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&S> {
        self.value.as_ref()
    }

    /// Returns the decoration.
    #[must_use]
    pub const fn decoration(&self) -> &D {
        &self.decoration
    }

    /// Returns the decoration mutably.
    pub fn decoration_mut(&mut self) -> &mut D {
        &mut self.decoration
    }

    /// Returns the models in order.
    #[must_use]
    pub fn models(&self) -> &[M] {
        &self.models
    }

    /// Returns the model at `item`, if present.
    #[must_use]
    pub fn get(&self, item: usize) -> Option<&M> {
        self.models.get(item)
    }

    /// Number of models in the section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns `true` if the section holds no models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Appends one model.
    pub fn push(&mut self, model: M) {
        self.models.push(model);
    }

    /// Appends models, returning the range of their new item indices.
    pub fn extend(&mut self, models: impl IntoIterator<Item = M>) -> core::ops::Range<usize> {
        let start = self.models.len();
        self.models.extend(models);
        start..self.models.len()
    }

    /// Replaces all models, returning the previous ones.
    pub fn set_models(&mut self, models: Vec<M>) -> Vec<M> {
        core::mem::replace(&mut self.models, models)
    }

    /// Borrows a read-only summary of this section at position `index`.
    #[must_use]
    pub fn summary(&self, index: usize) -> SectionRef<'_, S> {
        SectionRef::new(index, &self.key, self.value.as_ref(), self.models.len())
    }

    /// Splits the section into a read-only summary and its mutable decoration.
    pub fn split_mut(&mut self, index: usize) -> (SectionRef<'_, S>, &mut D) {
        let summary = SectionRef::new(index, &self.key, self.value.as_ref(), self.models.len());
        (summary, &mut self.decoration)
    }
}

impl<M, D, S> PartialEq for Section<M, D, S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<M, D, S> Eq for Section<M, D, S> {}

impl<M, D, S> Hash for Section<M, D, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<M, D, S> Borrow<SectionKey> for Section<M, D, S> {
    fn borrow(&self) -> &SectionKey {
        &self.key
    }
}

/// Read-only summary of a section handed to header, footer, and
/// supplementary-view callbacks.
///
/// It deliberately exposes no models, so a callback cannot change what the
/// host widget has been told about.
#[derive(Debug)]
pub struct SectionRef<'a, S> {
    /// Position of the section in the adapter.
    pub index: usize,
    /// Identity of the section.
    pub key: &'a SectionKey,
    /// The section's payload.
    pub value: Option<&'a S>,
    /// Number of models in the section.
    pub len: usize,
}

impl<'a, S> SectionRef<'a, S> {
    const fn new(index: usize, key: &'a SectionKey, value: Option<&'a S>, len: usize) -> Self {
        Self {
            index,
            key,
            value,
            len,
        }
    }
}

impl<S> Clone for SectionRef<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SectionRef<'_, S> {}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{Section, SectionKey};

    type Plain = Section<u32>;

    #[test]
    fn equality_uses_the_name_only() {
        let a = Plain::new("fruit").with_models([1, 2, 3]);
        let b = Plain::new("fruit");
        let c = Plain::new("veg").with_models([1, 2, 3]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn extend_reports_new_item_range() {
        let mut section = Plain::new("s").with_models([1, 2, 3]);
        let added = section.extend([4, 5]);
        assert_eq!(added, 3..5);
        assert_eq!(section.models(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn set_models_replaces_without_merging() {
        let mut section = Plain::new("s").with_models([1, 2, 3]);
        let old = section.set_models(vec![9, 8]);
        assert_eq!(old, vec![1, 2, 3]);
        assert_eq!(section.models(), &[9, 8]);
    }

    #[test]
    fn split_mut_exposes_summary_and_decoration() {
        let mut section: Section<u32, u8, &str> = Section::new("s")
            .with_value("payload")
            .with_models([7]);
        let (summary, decoration) = section.split_mut(4);
        *decoration = 2;
        assert_eq!(summary.index, 4);
        assert_eq!(summary.key, &SectionKey::from("s"));
        assert_eq!(summary.value, Some(&"payload"));
        assert_eq!(summary.len, 1);
        assert_eq!(*section.decoration(), 2);

        let shared = section.summary(4);
        assert_eq!(
            (shared.index, shared.key.as_str(), shared.value, shared.len),
            (4, "s", Some(&"payload"), 1)
        );
    }
}
