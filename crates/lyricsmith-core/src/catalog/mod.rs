//! Built-in reference tables
//!
//! Every table maps a display name to a descriptive value. Values may embed
//! bracketed sub-labels (`[Production: Lo-Fi]`) that the style composer strips
//! down with [`crate::clean_prompt_tags`]. Tables are `'static` and never
//! mutated; lookups are by exact name.

mod producers;
mod rhyme_schemes;
mod topics;
mod vocalists;

use serde::Serialize;
use std::fmt;

/// Which reference table an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Topic,
    Vocalist,
    Producer,
    RhymeScheme,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Topic => "topic",
            Self::Vocalist => "vocalist",
            Self::Producer => "producer",
            Self::RhymeScheme => "rhyme scheme",
        };
        f.write_str(name)
    }
}

/// A named group of table entries, used for listing only
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

impl Category {
    pub const fn new(name: &'static str, members: &'static [&'static str]) -> Self {
        Self { name, members }
    }
}

/// An ordered, read-only name → description table
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTable {
    entries: &'static [(&'static str, &'static str)],
}

impl ReferenceTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// Names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

/// The full set of reference tables
#[derive(Debug)]
pub struct Catalog {
    topics: ReferenceTable,
    rappers: ReferenceTable,
    singers: ReferenceTable,
    producers: ReferenceTable,
    rhyme_schemes: ReferenceTable,
    topic_categories: &'static [Category],
    rhyme_scheme_categories: &'static [Category],
}

static BUILTIN: Catalog = Catalog {
    topics: ReferenceTable::new(topics::TOPICS),
    rappers: ReferenceTable::new(vocalists::RAPPERS),
    singers: ReferenceTable::new(vocalists::SINGERS),
    producers: ReferenceTable::new(producers::PRODUCERS),
    rhyme_schemes: ReferenceTable::new(rhyme_schemes::RHYME_SCHEMES),
    topic_categories: topics::TOPIC_CATEGORIES,
    rhyme_scheme_categories: rhyme_schemes::RHYME_SCHEME_CATEGORIES,
};

impl Catalog {
    /// The process-wide built-in catalog
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn topic(&self, name: &str) -> Option<&'static str> {
        self.topics.get(name)
    }

    /// Rappers are consulted before singers
    pub fn vocalist(&self, name: &str) -> Option<&'static str> {
        self.rappers.get(name).or_else(|| self.singers.get(name))
    }

    pub fn producer(&self, name: &str) -> Option<&'static str> {
        self.producers.get(name)
    }

    pub fn rhyme_scheme(&self, name: &str) -> Option<&'static str> {
        self.rhyme_schemes.get(name)
    }

    pub fn lookup(&self, kind: EntryKind, name: &str) -> Option<&'static str> {
        match kind {
            EntryKind::Topic => self.topic(name),
            EntryKind::Vocalist => self.vocalist(name),
            EntryKind::Producer => self.producer(name),
            EntryKind::RhymeScheme => self.rhyme_scheme(name),
        }
    }

    pub fn topics(&self) -> &ReferenceTable {
        &self.topics
    }

    pub fn producers(&self) -> &ReferenceTable {
        &self.producers
    }

    pub fn rhyme_schemes(&self) -> &ReferenceTable {
        &self.rhyme_schemes
    }

    /// Vocalist tables grouped for display: rappers, then singers
    pub fn vocalist_groups(&self) -> [(&'static str, &ReferenceTable); 2] {
        [("Rappers", &self.rappers), ("Singers", &self.singers)]
    }

    pub fn topic_categories(&self) -> &'static [Category] {
        self.topic_categories
    }

    pub fn rhyme_scheme_categories(&self) -> &'static [Category] {
        self.rhyme_scheme_categories
    }
}
