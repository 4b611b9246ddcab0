use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::Actor;

/// Key used to order query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    Id,
    Name,
    BirthYear,
}

impl SortBy {
    /// Looks up a sort key by its canonical name (`"Id"`, `"Name"`, `"BirthYear"`).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Id" => Some(Self::Id),
            "Name" => Some(Self::Name),
            "BirthYear" => Some(Self::BirthYear),
            _ => None,
        }
    }

    fn compare(self, a: &Actor, b: &Actor) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            // Alphabetical regardless of case; exact spelling only breaks ties.
            Self::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            Self::BirthYear => a.birth_year.cmp(&b.birth_year),
        }
    }
}

/// Filter and sort options for
/// [`ActorsRepository::query`](crate::repository::ActorsRepository::query).
///
/// All filters are optional and combine with AND. Missing fields take their defaults when
/// deserializing, so `{}` is "everything, by id, ascending". A `sortBy` that names no
/// known key deserializes like [`with_sort_key`](Self::with_sort_key): by id, ascending.
///
/// ```rust
/// use actor_repository::model::{ActorQuery, SortBy};
///
/// let query = ActorQuery::new()
///     .born_after(1975)
///     .name_contains("ali")
///     .sorted_by(SortBy::BirthYear, true);
/// assert_eq!(query.birth_year_after, Some(1975));
/// assert!(query.descending);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "QueryFields", rename_all = "camelCase")]
pub struct ActorQuery {
    /// Keep actors born strictly before this year.
    pub birth_year_before: Option<i32>,
    /// Keep actors born strictly after this year.
    pub birth_year_after: Option<i32>,
    /// Case-insensitive substring of the name. Blank values are ignored.
    pub name: Option<String>,
    pub sort_by: SortBy,
    pub descending: bool,
}

/// Wire form of [`ActorQuery`]; the sort key stays a plain string until it is resolved.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct QueryFields {
    birth_year_before: Option<i32>,
    birth_year_after: Option<i32>,
    name: Option<String>,
    sort_by: Option<String>,
    descending: bool,
}

impl From<QueryFields> for ActorQuery {
    fn from(fields: QueryFields) -> Self {
        let query = Self {
            birth_year_before: fields.birth_year_before,
            birth_year_after: fields.birth_year_after,
            name: fields.name,
            ..Self::default()
        };
        match fields.sort_by {
            Some(key) => query.with_sort_key(&key, fields.descending),
            None => query.sorted_by(SortBy::Id, fields.descending),
        }
    }
}

impl ActorQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn born_before(mut self, year: i32) -> Self {
        self.birth_year_before = Some(year);
        self
    }

    pub fn born_after(mut self, year: i32) -> Self {
        self.birth_year_after = Some(year);
        self
    }

    pub fn name_contains(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn sorted_by(mut self, sort_by: SortBy, descending: bool) -> Self {
        self.sort_by = sort_by;
        self.descending = descending;
        self
    }

    /// Sets the ordering from a textual key.
    ///
    /// An unrecognized key sorts by id ascending, whatever `descending` says.
    pub fn with_sort_key(self, key: &str, descending: bool) -> Self {
        match SortBy::from_key(key) {
            Some(sort_by) => self.sorted_by(sort_by, descending),
            None => {
                tracing::debug!(key, "Unknown sort key, ordering by id");
                self.sorted_by(SortBy::Id, false)
            }
        }
    }

    /// Filters `actors` and returns owned, sorted copies of the matches.
    ///
    /// The sort is stable: actors with equal keys stay in the order they were given,
    /// in both directions.
    pub fn apply<'a>(&self, actors: impl IntoIterator<Item = &'a Actor>) -> Vec<Actor> {
        let needle = self
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .map(str::to_lowercase);

        let mut matches: Vec<Actor> = actors
            .into_iter()
            .filter(|actor| self.birth_year_before.map_or(true, |y| actor.birth_year < y))
            .filter(|actor| self.birth_year_after.map_or(true, |y| actor.birth_year > y))
            .filter(|actor| {
                needle
                    .as_deref()
                    .map_or(true, |n| actor.name.to_lowercase().contains(n))
            })
            .cloned()
            .collect();

        if self.descending {
            matches.sort_by(|a, b| self.sort_by.compare(b, a));
        } else {
            matches.sort_by(|a, b| self.sort_by.compare(a, b));
        }
        matches
    }
}
