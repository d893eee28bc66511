// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered section sequence owned by an adapter.

use alloc::vec::Vec;
use core::ops::Range;

use crate::{AdapterError, IndexPath, Result, Section};

/// Ordered sequence of [`Section`]s with checked lookups.
///
/// Adapters own one of these and expose it to callers read-only. All
/// mutations go through methods that report exactly what changed, so the
/// adapter can forward a matching reload request to its host.
#[derive(Debug, Clone)]
pub struct Sections<M, D = (), S = ()> {
    inner: Vec<Section<M, D, S>>,
}

impl<M, D, S> Default for Sections<M, D, S> {
    fn default() -> Self {
        Self { inner: Vec::new() }
    }
}

impl<M, D, S> From<Vec<Section<M, D, S>>> for Sections<M, D, S> {
    fn from(inner: Vec<Section<M, D, S>>) -> Self {
        Self { inner }
    }
}

impl<M, D, S> Sections<M, D, S> {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns all sections in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Section<M, D, S>] {
        &self.inner
    }

    /// Returns the section at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Section<M, D, S>> {
        self.inner.get(index)
    }

    /// Returns the position of the first section named `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.inner.iter().position(|s| s.name() == name)
    }

    /// Number of items in `section`, or `0` if there is no such section.
    #[must_use]
    pub fn item_count(&self, section: usize) -> usize {
        self.inner.get(section).map_or(0, Section::len)
    }

    /// Returns the section at `index` or a range error.
    pub fn section(&self, index: usize) -> Result<&Section<M, D, S>> {
        self.inner.get(index).ok_or(AdapterError::SectionOutOfRange {
            section: index,
            len: self.inner.len(),
        })
    }

    /// Returns the section at `index` mutably, or a range error.
    pub fn section_mut(&mut self, index: usize) -> Result<&mut Section<M, D, S>> {
        let len = self.inner.len();
        self.inner
            .get_mut(index)
            .ok_or(AdapterError::SectionOutOfRange {
                section: index,
                len,
            })
    }

    /// Resolves `path` to its view model.
    pub fn view_model(&self, path: IndexPath) -> Result<&M> {
        let section = self.section(path.section)?;
        section.get(path.item).ok_or(AdapterError::ItemOutOfRange {
            path,
            len: section.len(),
        })
    }

    /// Replaces every section, returning the previous sequence.
    pub fn replace_all(&mut self, sections: Vec<Section<M, D, S>>) -> Vec<Section<M, D, S>> {
        core::mem::replace(&mut self.inner, sections)
    }

    /// Appends a section, returning its index.
    pub fn push(&mut self, section: Section<M, D, S>) -> usize {
        self.inner.push(section);
        self.inner.len() - 1
    }

    /// Inserts a section at `index`, shifting later sections back.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, section: Section<M, D, S>) -> Result<()> {
        if index > self.inner.len() {
            return Err(AdapterError::InsertOutOfRange {
                index,
                len: self.inner.len(),
            });
        }
        self.inner.insert(index, section);
        Ok(())
    }

    /// Appends `models` to `section`, returning the item range they now occupy.
    pub fn append_models(
        &mut self,
        section: usize,
        models: impl IntoIterator<Item = M>,
    ) -> Result<Range<usize>> {
        Ok(self.section_mut(section)?.extend(models))
    }

    /// Replaces the models of `section`, returning the previous ones.
    pub fn update_models(&mut self, section: usize, models: Vec<M>) -> Result<Vec<M>> {
        Ok(self.section_mut(section)?.set_models(models))
    }

    /// Consumes the sequence, returning the sections.
    #[must_use]
    pub fn into_vec(self) -> Vec<Section<M, D, S>> {
        self.inner
    }
}
