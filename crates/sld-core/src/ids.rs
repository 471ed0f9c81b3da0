//! Fresh identifiers for objects the engine creates.
//!
//! Component and connection IDs are stable strings owned by the host. When the
//! engine has to mint one (a junction, or the connections produced by a split or
//! merge) it asks an `IdSource`, which the caller owns. This keeps every engine
//! operation free of hidden state.

use core::fmt;

use uuid::Uuid;

/// What an ID is being minted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Junction,
    Connection,
}

impl IdKind {
    pub fn prefix(self) -> &'static str {
        match self {
            IdKind::Junction => "junction-",
            IdKind::Connection => "conn-",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdKind::Junction => write!(f, "junction"),
            IdKind::Connection => write!(f, "connection"),
        }
    }
}

/// Source of fresh IDs. Implementations must never hand out the same ID twice.
pub trait IdSource {
    fn next_id(&mut self, kind: IdKind) -> String;
}

/// Random v4 UUIDs, prefixed by kind. The default for interactive hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self, kind: IdKind) -> String {
        format!("{}{}", kind.prefix(), Uuid::new_v4())
    }
}

/// Deterministic counters (`junction-1`, `conn-1`, ...).
///
/// Seed it from an existing diagram with [`SequentialIds::after`] so the
/// counters start past every numbered ID already in use.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next_junction: u64,
    next_connection: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start both counters after the highest numeric suffix found in `ids`.
    pub fn after<'a, I>(ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut max_junction = 0u64;
        let mut max_connection = 0u64;
        for id in ids {
            if let Some(value) = numeric_suffix(id, IdKind::Junction) {
                max_junction = max_junction.max(value);
            }
            if let Some(value) = numeric_suffix(id, IdKind::Connection) {
                max_connection = max_connection.max(value);
            }
        }
        Self {
            next_junction: max_junction,
            next_connection: max_connection,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, kind: IdKind) -> String {
        let counter = match kind {
            IdKind::Junction => &mut self.next_junction,
            IdKind::Connection => &mut self.next_connection,
        };
        *counter += 1;
        format!("{}{}", kind.prefix(), counter)
    }
}

fn numeric_suffix(id: &str, kind: IdKind) -> Option<u64> {
    id.strip_prefix(kind.prefix())?.parse::<u64>().ok()
}
