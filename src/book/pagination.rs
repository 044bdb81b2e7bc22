//! Fixed-size pages over an address book.

use super::address_book::Iter;
use crate::models::Record;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;

/// Lazy iterator of pages, each holding up to `page_size` records.
///
/// Pages follow the book's insertion order. A book of `n` records yields
/// `ceil(n / page_size)` pages and only the last one may be short; an empty
/// book yields no pages at all.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: Iter<'a>,
    page_size: NonZeroUsize,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(records: Iter<'a>, page_size: NonZeroUsize) -> Self {
        Self { records, page_size }
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<&'a Record> = self.records.by_ref().take(self.page_size.get()).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pages = self.records.len().div_ceil(self.page_size.get());
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
