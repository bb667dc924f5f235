//! # Journaled Tables
//!
//! [`Table<R>`] is an ordered, auto-incrementing row store. While a transaction is open,
//! every write pushes the prior image of the row onto an undo journal; `rollback` replays
//! that journal backwards, `commit` discards it.
//!
//! A ledger composed of several tables implements [`Transactional`] by forwarding
//! `begin`/`commit`/`rollback` to each of them.

use std::collections::BTreeMap;
use std::fmt::{Debug, Display};

/// A row that can live in a [`Table`].
pub trait Record: Clone + Send + Sync + Debug + 'static {
    /// Primary key. Generated from a `u32` sequence starting at 1.
    type Id: Ord + Copy + Send + Sync + Display + Debug + From<u32>;

    fn id(&self) -> Self::Id;
}

/// Begin/commit/rollback over some piece of state.
pub trait Transactional {
    /// Opens a transaction. Writes made until `commit` or `rollback` are journaled.
    fn begin(&mut self);

    /// Keeps every write made since `begin`.
    fn commit(&mut self);

    /// Reverts every write made since `begin`.
    fn rollback(&mut self);
}

#[derive(Debug)]
enum Undo<R: Record> {
    Inserted(R::Id),
    Replaced(R),
    Allocated(u32),
}

/// Ordered row store with an undo journal.
///
/// # Example
///
/// ```rust
/// use ledger_actor::{Record, Table, Transactional};
///
/// #[derive(Clone, Debug)]
/// struct Account { id: u32, balance: i64 }
///
/// impl Record for Account {
///     type Id = u32;
///     fn id(&self) -> u32 { self.id }
/// }
///
/// let mut accounts = Table::<Account>::new();
/// let id = accounts.insert_with(|id| Account { id, balance: 100 });
///
/// accounts.begin();
/// accounts.update(id, |a| a.balance -= 40);
/// accounts.rollback();
///
/// assert_eq!(accounts.get(id).map(|a| a.balance), Some(100));
/// ```
#[derive(Debug)]
pub struct Table<R: Record> {
    rows: BTreeMap<R::Id, R>,
    next_id: u32,
    journal: Option<Vec<Undo<R>>>,
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Table<R> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
            journal: None,
        }
    }

    fn record(&mut self, undo: Undo<R>) {
        if let Some(journal) = self.journal.as_mut() {
            journal.push(undo);
        }
    }

    /// Allocates the next primary key and inserts the row built from it.
    pub fn insert_with(&mut self, build: impl FnOnce(R::Id) -> R) -> R::Id {
        let raw = self.next_id;
        self.record(Undo::Allocated(raw));
        self.next_id += 1;

        let row = build(R::Id::from(raw));
        let id = row.id();
        match self.rows.insert(id, row) {
            Some(previous) => self.record(Undo::Replaced(previous)),
            None => self.record(Undo::Inserted(id)),
        }
        id
    }

    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.rows.get(&id)
    }

    /// Mutates a row in place, returning whatever the closure returns.
    /// `None` if the row does not exist.
    pub fn update<T>(&mut self, id: R::Id, f: impl FnOnce(&mut R) -> T) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        if let Some(journal) = self.journal.as_mut() {
            journal.push(Undo::Replaced(row.clone()));
        }
        Some(f(row))
    }

    /// Rows in primary-key order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn in_transaction(&self) -> bool {
        self.journal.is_some()
    }
}

impl<R: Record> Transactional for Table<R> {
    fn begin(&mut self) {
        debug_assert!(self.journal.is_none(), "nested transaction");
        self.journal = Some(Vec::new());
    }

    fn commit(&mut self) {
        self.journal = None;
    }

    fn rollback(&mut self) {
        let Some(journal) = self.journal.take() else {
            return;
        };
        for undo in journal.into_iter().rev() {
            match undo {
                Undo::Inserted(id) => {
                    self.rows.remove(&id);
                }
                Undo::Replaced(previous) => {
                    self.rows.insert(previous.id(), previous);
                }
                Undo::Allocated(raw) => self.next_id = raw,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: u32,
        stock: u16,
    }

    impl Record for Item {
        type Id = u32;
        fn id(&self) -> u32 {
            self.id
        }
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut table = Table::<Item>::new();
        let a = table.insert_with(|id| Item { id, stock: 1 });
        let b = table.insert_with(|id| Item { id, stock: 2 });
        assert_eq!((a, b), (1, 2));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn rollback_restores_rows_and_sequence() {
        let mut table = Table::<Item>::new();
        let id = table.insert_with(|id| Item { id, stock: 5 });

        table.begin();
        table.update(id, |item| item.stock -= 2);
        table.update(id, |item| item.stock -= 1);
        table.insert_with(|id| Item { id, stock: 9 });
        table.rollback();

        assert_eq!(table.get(id), Some(&Item { id, stock: 5 }));
        assert_eq!(table.len(), 1);
        // Sequence rewinds as well, so the next insert reuses id 2.
        assert_eq!(table.insert_with(|id| Item { id, stock: 0 }), 2);
    }

    #[test]
    fn commit_keeps_writes() {
        let mut table = Table::<Item>::new();
        let id = table.insert_with(|id| Item { id, stock: 5 });

        table.begin();
        table.update(id, |item| item.stock = 3);
        table.commit();
        table.rollback(); // no open transaction, nothing to undo

        assert_eq!(table.get(id).map(|i| i.stock), Some(3));
        assert!(!table.in_transaction());
    }

    #[test]
    fn update_missing_row_is_none() {
        let mut table = Table::<Item>::new();
        assert_eq!(table.update(7, |item| item.stock), None);
    }
}
