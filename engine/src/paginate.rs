use std::fmt;

/// One page of a paginated list.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    items: &'a [T],
}

// A page is a borrowed slice, copyable whatever `T` is.
impl<T> Clone for Page<'_, T> {
    fn clone(&self) -> Self { *self }
}

impl<T> Copy for Page<'_, T> {}

impl<'a, T> Page<'a, T> {
    pub fn items(&self) -> &'a [T] { self.items }
    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'a, T> { self.items.iter() }
}

impl<T: fmt::Display> fmt::Display for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for Page<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

/// Consecutive pages of at most `page_size` items. The last page may be shorter.
#[derive(Debug)]
pub struct Paginator<'a, T> {
    pages: Vec<Page<'a, T>>,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        let pages = if page_size == 0 {
            Vec::new()
        } else {
            items.chunks(page_size).map(|items| Page { items }).collect()
        };
        Self { pages }
    }

    pub fn len(&self) -> usize { self.pages.len() }
    pub fn is_empty(&self) -> bool { self.pages.is_empty() }
    pub fn get(&self, page: usize) -> Option<Page<'a, T>> { self.pages.get(page).copied() }
    pub fn iter(&self) -> impl Iterator<Item = Page<'a, T>> + '_ { self.pages.iter().copied() }
}

impl<'a, T> IntoIterator for Paginator<'a, T> {
    type Item = Page<'a, T>;
    type IntoIter = std::vec::IntoIter<Page<'a, T>>;

    fn into_iter(self) -> Self::IntoIter { self.pages.into_iter() }
}

/// Split `items` into pages of `page_size`; a zero page size yields no pages.
pub fn paginate<T>(items: &[T], page_size: usize) -> Paginator<'_, T> {
    Paginator::new(items, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Document;

    #[test]
    fn splits_into_pages() {
        let items = [1, 2, 3, 4, 5];
        let pages = paginate(&items, 2);
        assert_eq!(pages.len(), 3);
        let sizes: Vec<usize> = pages.iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(pages.get(2).unwrap().items(), &[5]);
        assert!(pages.get(3).is_none());
    }

    #[test]
    fn zero_page_size_and_empty_input() {
        assert!(paginate(&[1, 2], 0).is_empty());
        assert!(paginate::<i32>(&[], 3).is_empty());
    }

    #[test]
    fn page_display_concatenates() {
        let docs = [Document::new(1, 0.5, 2), Document::new(2, 0.25, 1)];
        let page = paginate(&docs, 2).get(0).unwrap();
        assert_eq!(
            page.to_string(),
            "{ document_id = 1, relevance = 0.5, rating = 2 }{ document_id = 2, relevance = 0.25, rating = 1 }"
        );
    }
}
