// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Filtered list state shared by every list screen.
//!
//! A [`ListViewModel`] owns an immutable collection of records and a single
//! [`Filter`]. Screens differ only in their [`ListConfig`]: which text fields
//! a query searches, and which field (if any) a category selector compares.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use thiserror::Error;
use tracing::{debug, warn};

/// Accepted by screens without a category field; it leaves every record in.
pub const UNSET_CATEGORY: &str = "all";

/// A record that can be listed. Ids must be unique within one collection.
pub trait ListRecord {
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display;

    fn record_id(&self) -> Self::Id;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("unknown category {id:?} for {screen}; expected one of: {expected}")]
    InvalidArgument {
        screen: &'static str,
        id: String,
        expected: String,
    },
    #[error("duplicate record id {id} in {screen}")]
    DuplicateId { screen: &'static str, id: String },
    #[error("invalid list config for {screen}: {reason}")]
    InvalidConfig {
        screen: &'static str,
        reason: &'static str,
    },
}

/// Case-insensitive substring predicate. Keeps the typed text for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextQuery {
    raw: String,
    needle: String,
}

impl TextQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            needle: raw.trim().to_lowercase(),
        }
    }

    /// The query exactly as typed.
    pub fn display(&self) -> &str {
        &self.raw
    }

    /// The trimmed, lower-cased form used for matching.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, haystack: &str) -> bool {
        self.is_empty() || haystack.to_lowercase().contains(&self.needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelector {
    #[default]
    All,
    Only(&'static str),
}

impl CategorySelector {
    pub fn matches(self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => id == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filter {
    pub query: TextQuery,
    pub category: CategorySelector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    pub id: &'static str,
    pub label: &'static str,
}

impl CategoryOption {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

pub struct TextField<R> {
    pub name: &'static str,
    extract: fn(&R) -> &str,
}

pub struct CategoryField<R> {
    pub name: &'static str,
    extract: fn(&R) -> &str,
    options: Vec<CategoryOption>,
    all: Option<&'static str>,
}

/// Per-screen filter configuration, assembled with the builder methods.
pub struct ListConfig<R> {
    screen: &'static str,
    text_fields: Vec<TextField<R>>,
    category: Option<CategoryField<R>>,
    initial_category: Option<&'static str>,
}

impl<R> ListConfig<R> {
    pub fn new(screen: &'static str) -> Self {
        Self {
            screen,
            text_fields: Vec::new(),
            category: None,
            initial_category: None,
        }
    }

    pub fn text_field(mut self, name: &'static str, extract: fn(&R) -> &str) -> Self {
        self.text_fields.push(TextField { name, extract });
        self
    }

    pub fn category_field(
        mut self,
        name: &'static str,
        extract: fn(&R) -> &str,
        options: impl IntoIterator<Item = CategoryOption>,
    ) -> Self {
        self.category = Some(CategoryField {
            name,
            extract,
            options: options.into_iter().collect(),
            all: None,
        });
        self
    }

    /// Declares a sentinel id that disables the category predicate. It is
    /// listed first among the options.
    pub fn all_option(mut self, option: CategoryOption) -> Self {
        if let Some(category) = self.category.as_mut() {
            category.options.retain(|existing| existing.id != option.id);
            category.options.insert(0, option);
            category.all = Some(option.id);
        }
        self
    }

    pub fn initial_category(mut self, id: &'static str) -> Self {
        self.initial_category = Some(id);
        self
    }

    pub fn screen(&self) -> &'static str {
        self.screen
    }

    /// Names of the fields a text query searches, in declaration order.
    pub fn search_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.text_fields.iter().map(|field| field.name)
    }

    pub fn category_options(&self) -> &[CategoryOption] {
        match &self.category {
            Some(category) => category.options.as_slice(),
            None => &[],
        }
    }

    fn resolve_category(&self, id: &str) -> Result<CategorySelector, ListError> {
        let Some(category) = &self.category else {
            if id == UNSET_CATEGORY {
                return Ok(CategorySelector::All);
            }
            return Err(ListError::InvalidArgument {
                screen: self.screen,
                id: id.to_owned(),
                expected: UNSET_CATEGORY.to_owned(),
            });
        };
        if category.all == Some(id) {
            return Ok(CategorySelector::All);
        }
        category
            .options
            .iter()
            .find(|option| option.id == id)
            .map(|option| CategorySelector::Only(option.id))
            .ok_or_else(|| ListError::InvalidArgument {
                screen: self.screen,
                id: id.to_owned(),
                expected: category
                    .options
                    .iter()
                    .map(|option| option.id)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    fn initial_filter(&self) -> Result<Filter, ListError> {
        let category = match (self.initial_category, &self.category) {
            (Some(id), Some(_)) => {
                self.resolve_category(id)
                    .map_err(|_| ListError::InvalidConfig {
                        screen: self.screen,
                        reason: "initial category is not among the declared options",
                    })?
            }
            (Some(_), None) => {
                return Err(ListError::InvalidConfig {
                    screen: self.screen,
                    reason: "initial category set without a category field",
                });
            }
            (None, Some(category)) if category.all.is_none() => {
                return Err(ListError::InvalidConfig {
                    screen: self.screen,
                    reason: "a category domain without an all option needs an initial category",
                });
            }
            (None, _) => CategorySelector::All,
        };
        Ok(Filter {
            query: TextQuery::default(),
            category,
        })
    }

    fn matches(&self, record: &R, filter: &Filter) -> bool {
        let category_ok = match &self.category {
            Some(category) => filter.category.matches((category.extract)(record)),
            None => true,
        };
        category_ok
            && (filter.query.is_empty()
                || self
                    .text_fields
                    .iter()
                    .any(|field| filter.query.matches((field.extract)(record))))
    }
}

pub struct ListViewModel<R: ListRecord> {
    records: Vec<R>,
    config: ListConfig<R>,
    filter: Filter,
}

impl<R: ListRecord> ListViewModel<R> {
    pub fn new(records: Vec<R>, config: ListConfig<R>) -> Result<Self, ListError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            let id = record.record_id();
            if !seen.insert(id) {
                return Err(ListError::DuplicateId {
                    screen: config.screen,
                    id: id.to_string(),
                });
            }
        }
        let filter = config.initial_filter()?;
        Ok(Self {
            records,
            config,
            filter,
        })
    }

    pub fn set_text_query(&mut self, query: &str) {
        self.filter = Filter {
            query: TextQuery::new(query),
            category: self.filter.category,
        };
    }

    pub fn clear_text_query(&mut self) {
        self.set_text_query("");
    }

    /// Replaces the category selector. Unknown ids leave the filter as it was.
    pub fn set_category(&mut self, id: &str) -> Result<(), ListError> {
        let category = match self.config.resolve_category(id) {
            Ok(category) => category,
            Err(error) => {
                warn!(screen = self.config.screen, id, "rejected unknown category");
                return Err(error);
            }
        };
        let field = self.config.category.as_ref().map(|category| category.name);
        debug!(screen = self.config.screen, ?field, id, "category selected");
        self.filter = Filter {
            query: self.filter.query.clone(),
            category,
        };
        Ok(())
    }

    /// Moves the selector `delta` options along the declared domain, wrapping.
    pub fn step_category(&mut self, delta: isize) -> Option<&'static str> {
        let options = self.config.category_options();
        if options.is_empty() {
            return None;
        }
        let current = self
            .active_category()
            .and_then(|id| options.iter().position(|option| option.id == id))
            .unwrap_or(0) as isize;
        let len = options.len() as isize;
        let next = options[(current + delta).rem_euclid(len) as usize].id;
        self.set_category(next).ok()?;
        Some(next)
    }

    pub fn visible(&self) -> impl Iterator<Item = &R> + '_ {
        self.records
            .iter()
            .filter(|record| self.config.matches(record, &self.filter))
    }

    pub fn visible_records(&self) -> Vec<&R> {
        self.visible().collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn query(&self) -> &str {
        self.filter.query.display()
    }

    /// The selected option id, or the all sentinel when the predicate is off.
    /// `None` for screens without a category field.
    pub fn active_category(&self) -> Option<&'static str> {
        let category = self.config.category.as_ref()?;
        match self.filter.category {
            CategorySelector::Only(id) => Some(id),
            CategorySelector::All => category.all,
        }
    }

    pub fn category_options(&self) -> &[CategoryOption] {
        self.config.category_options()
    }

    pub fn supports_search(&self) -> bool {
        !self.config.text_fields.is_empty()
    }

    pub fn search_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.config.search_fields()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

}

impl<R: ListRecord + fmt::Debug> fmt::Debug for ListViewModel<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListViewModel")
            .field("screen", &self.config.screen)
            .field("records", &self.records.len())
            .field("filter", &self.filter)
            .finish()
    }
}
