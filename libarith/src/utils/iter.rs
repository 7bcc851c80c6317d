use std::vec::IntoIter;

/// An iterator that can look at its next item without consuming it.
///
/// Unlike rustlib's [`Peekable`], a `PeekIter` can also consume a run of items matching a
/// predicate without consuming the item that ends the run. The scanner uses this to collect runs
/// of digits; the parser uses the peek to decide which production to take.
///
/// [`Peekable`]: core::iter::Peekable
pub struct PeekIter<T> {
    iter: IntoIter<T>,
    /// The item pulled from `iter` by a peek, if any. `Some(None)` means the iteration ended.
    peeked: Option<Option<T>>,
}

impl<T> PeekIter<T> {
    pub fn new(iter: IntoIter<T>) -> Self {
        Self { iter, peeked: None }
    }

    /// Returns a reference to the next value in the iterator, without consuming it, or `None` if
    /// the iteration is complete.
    pub fn peek(&mut self) -> Option<&T> {
        let iter = &mut self.iter;
        self.peeked.get_or_insert_with(|| iter.next()).as_ref()
    }

    /// Consumes items while they satisfy `pred`, leaving the first failing item in the iteration.
    pub fn collect_while<P, C>(&mut self, pred: P) -> C
    where
        P: Fn(&T) -> bool,
        C: std::iter::FromIterator<T>,
    {
        let mut taken = Vec::new();
        while self.peek().map_or(false, &pred) {
            taken.extend(self.next());
        }
        taken.into_iter().collect()
    }
}

impl<T> Iterator for PeekIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.iter.next(),
        }
    }
}
