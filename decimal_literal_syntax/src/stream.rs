//! Lazy sequence plumbing between the tokenizer and the evaluator.
//!
//! Everything here is single-pass and pull-based: nothing is produced until
//! someone asks for it, and at most one element is held ahead of the consumer.

use std::iter::{Fuse, FusedIterator};

/// An iterator that never runs out.
pub trait Endless: Iterator {
    /// Same as `next`, minus the `Option`.
    fn pull(&mut self) -> Self::Item;
}

/// Yields everything from `iter`, then `end()` forever.
pub struct PadEnd<I, F> {
    iter: Fuse<I>,
    end: F,
}

pub fn pad_end_with<I, F>(iter: I, end: F) -> PadEnd<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut() -> I::Item,
{
    PadEnd {
        iter: iter.into_iter().fuse(),
        end,
    }
}

pub fn pad_end<I>(iter: I, end: I::Item) -> PadEnd<I::IntoIter, impl FnMut() -> I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    pad_end_with(iter, move || end.clone())
}

impl<I, F> Endless for PadEnd<I, F>
where
    I: Iterator,
    F: FnMut() -> I::Item,
{
    fn pull(&mut self) -> I::Item {
        match self.iter.next() {
            Some(item) => item,
            None => (self.end)(),
        }
    }
}

impl<I, F> Iterator for PadEnd<I, F>
where
    I: Iterator,
    F: FnMut() -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        Some(self.pull())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<I, F> FusedIterator for PadEnd<I, F>
where
    I: Iterator,
    F: FnMut() -> I::Item,
{
}

/// One element of lookahead over an endless sequence.
///
/// The next element is always pulled eagerly, so `peek` is a plain field
/// access and the underlying sequence is always exactly one element ahead of
/// the consumer.
pub struct Lookahead<S: Endless> {
    iter: S,
    current: S::Item,
}

impl<S: Endless> Lookahead<S> {
    pub fn new(mut iter: S) -> Self {
        let current = iter.pull();
        Lookahead { iter, current }
    }

    pub fn peek(&self) -> &S::Item {
        &self.current
    }

    pub fn advance(&mut self) -> S::Item {
        let next = self.iter.pull();
        std::mem::replace(&mut self.current, next)
    }
}

/// The first part, then a separator and the next part, for every remaining
/// part. See [`interleave`].
pub struct Interleave<P, S>
where
    P: Iterator,
    P::Item: IntoIterator,
{
    parts: P,
    separators: S,
    current: Option<<P::Item as IntoIterator>::IntoIter>,
    started: bool,
    done: bool,
}

/// Splices `separators` between the elements of `parts`, lazily and in
/// order.
///
/// `N` parts consume `N - 1` separators. If the separators run out before the
/// parts do, the sequence ends where the missing separator would have been.
/// Separators beyond `N - 1` are never pulled.
pub fn interleave<P, S>(parts: P, separators: S) -> Interleave<P::IntoIter, S::IntoIter>
where
    P: IntoIterator,
    P::Item: IntoIterator,
    S: IntoIterator<Item = <P::Item as IntoIterator>::Item>,
{
    Interleave {
        parts: parts.into_iter(),
        separators: separators.into_iter(),
        current: None,
        started: false,
        done: false,
    }
}

impl<P, S> Iterator for Interleave<P, S>
where
    P: Iterator,
    P::Item: IntoIterator,
    S: Iterator<Item = <P::Item as IntoIterator>::Item>,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        while !self.done {
            if let Some(item) = self.current.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            let Some(part) = self.parts.next() else {
                self.done = true;
                break;
            };
            self.current = Some(part.into_iter());
            if self.started {
                let separator = self.separators.next();
                if separator.is_none() {
                    self.done = true;
                }
                return separator;
            }
            self.started = true;
        }
        None
    }
}

impl<P, S> FusedIterator for Interleave<P, S>
where
    P: Iterator,
    P::Item: IntoIterator,
    S: Iterator<Item = <P::Item as IntoIterator>::Item>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    fn show<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
        items
            .into_iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn interleave_law() {
        let parts = vec![vec!["a"], vec!["b", "c"], vec!["d"]];
        k9::snapshot!(show(interleave(parts, vec!["s1", "s2"])), "a s1 b c s2 d");
    }

    #[test]
    fn interleave_single_part() {
        let parts = vec![vec![1, 2, 3]];
        assert_eq!(
            interleave(parts, std::iter::empty()).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn interleave_empty_parts_still_take_separators() {
        let parts = vec![vec![], vec![], vec!["x"], vec![]];
        k9::snapshot!(show(interleave(parts, vec!["1", "2", "3"])), "1 2 x 3");
    }

    #[test]
    fn interleave_nothing() {
        let parts: Vec<Vec<i32>> = vec![];
        assert_eq!(interleave(parts, vec![1, 2]).next(), None);
    }

    #[test]
    fn interleave_stops_at_missing_separator() {
        let parts = vec![vec!["a"], vec!["b"], vec!["c"]];
        let mut items = interleave(parts, vec!["s1"]);
        k9::snapshot!(show(items.by_ref()), "a s1 b");
        assert_eq!(items.next(), None);
    }

    #[test]
    fn interleave_leaves_extra_separators_alone() {
        let mut separators = vec!["s1", "s2", "s3"].into_iter();
        let parts = vec![vec!["a"], vec!["b"]];
        k9::snapshot!(show(interleave(parts, separators.by_ref())), "a s1 b");
        assert_eq!(separators.collect::<Vec<_>>(), vec!["s2", "s3"]);
    }

    #[test]
    fn interleave_is_lazy() {
        let parts = (0..).map(|n| vec![n, n]);
        let separators = std::iter::repeat(-1);
        assert_eq!(
            interleave(parts, separators).take(7).collect::<Vec<_>>(),
            vec![0, 0, -1, 1, 1, -1, 2]
        );
    }

    #[test]
    fn pad_end_repeats_forever() {
        let mut padded = pad_end(vec![1, 2], 0);
        assert_eq!(padded.by_ref().take(5).collect::<Vec<_>>(), vec![1, 2, 0, 0, 0]);
        for _ in 0..100 {
            assert_eq!(padded.next(), Some(0));
        }
    }

    #[test]
    fn pad_end_does_not_poll_exhausted_input() {
        let mut calls = 0;
        let source = std::iter::from_fn(|| {
            calls += 1;
            if calls == 1 {
                Some("x")
            } else {
                None
            }
        });
        let mut padded = pad_end(source, "end");
        let items: Vec<_> = (0..4).map(|_| padded.pull()).collect();
        drop(padded);
        assert_eq!(items, vec!["x", "end", "end", "end"]);
        assert_eq!(calls, 2);
    }

    #[test]
    fn lookahead_peek_does_not_advance() {
        let mut it = Lookahead::new(pad_end(vec!['a', 'b'], '$'));
        assert_eq!(*it.peek(), 'a');
        assert_eq!(*it.peek(), 'a');
        assert_eq!(it.advance(), 'a');
        assert_eq!(*it.peek(), 'b');
        assert_eq!(it.advance(), 'b');
        assert_eq!(it.advance(), '$');
        assert_eq!(it.advance(), '$');
        assert_eq!(*it.peek(), '$');
    }

    #[test]
    fn lookahead_pulls_one_ahead() {
        let mut pulled = 0;
        let source = (1..=3).inspect(|_| pulled += 1);
        let mut it = Lookahead::new(pad_end_with(source, || 0));
        assert_eq!(it.advance(), 1);
        drop(it);
        assert_eq!(pulled, 2);
    }
}
