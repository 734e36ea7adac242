//! Two ways of making something iterable.
//!
//! [`Squares`] keeps its own cursor and implements [`Iterator`] directly.
//! [`SquareTable`] only knows how to answer "what is at index i", and the
//! [`Indexed`] trait turns that into an iterator that stops at the first
//! missing index.

pub const LAST_INDEX: u64 = 6;

#[derive(Debug, Default, Clone)]
pub struct Squares {
    idx: u64,
}

impl Squares {
    pub fn new() -> Self {
        Self { idx: 0 }
    }
}

impl Iterator for Squares {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.idx > LAST_INDEX {
            return None;
        }
        self.idx += 1;
        Some((self.idx - 1).pow(2))
    }
}

// Iterating a borrowed Squares always starts over.
impl IntoIterator for &Squares {
    type Item = u64;
    type IntoIter = Squares;

    fn into_iter(self) -> Squares {
        Squares::new()
    }
}

// ------------- Indexed -------------
pub trait Indexed {
    type Item;
    fn get(&self, idx: usize) -> Option<Self::Item>;

    fn iter_indexed(&self) -> IndexIter<'_, Self>
    where
        Self: Sized,
    {
        IndexIter { source: self, idx: 0 }
    }
}

pub struct IndexIter<'a, S: Indexed> {
    source: &'a S,
    idx: usize,
}

impl<S: Indexed> Iterator for IndexIter<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let item = self.source.get(self.idx)?;
        self.idx += 1;
        Some(item)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SquareTable;

impl Indexed for SquareTable {
    type Item = u64;

    fn get(&self, idx: usize) -> Option<u64> {
        let idx = idx as u64;
        (idx <= LAST_INDEX).then(|| idx.pow(2))
    }
}

impl<'a> IntoIterator for &'a SquareTable {
    type Item = u64;
    type IntoIter = IndexIter<'a, SquareTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_indexed()
    }
}
