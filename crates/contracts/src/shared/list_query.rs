//! Client-side search and pagination over already-fetched lists.

/// Rows per page on every list screen.
pub const PAGE_SIZE: usize = 10;

/// Types that can be matched against a free-text search box.
pub trait Searchable {
    /// Text fields the search box looks into.
    fn search_haystack(&self) -> Vec<String>;
}

/// Case-insensitive substring match; a blank query matches everything.
pub fn matches_query<T: Searchable>(item: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_haystack()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter_items<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_query(*item, query))
        .cloned()
        .collect()
}

/// Number of pages for `count` rows. An empty list still has one (empty) page.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    if count == 0 {
        1
    } else {
        (count + page_size - 1) / page_size
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 0-based, clamped to the last page
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let pages = total_pages(items.len(), page_size);
    let page = page.min(pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(items.len());
    Page {
        items: items.get(start..end).unwrap_or(&[]).to_vec(),
        page,
        total_pages: pages,
        total_count: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        code: String,
        name: String,
    }

    impl Searchable for Row {
        fn search_haystack(&self) -> Vec<String> {
            vec![self.code.clone(), self.name.clone()]
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row {
                code: format!("BN-{:03}", i),
                name: if i % 2 == 0 { "Silla giratoria".into() } else { "Escritorio".into() },
            })
            .collect()
    }

    #[test]
    fn blank_query_keeps_everything() {
        let data = rows(5);
        assert_eq!(filter_items(&data, "   ").len(), 5);
    }

    #[test]
    fn search_is_case_insensitive_over_all_fields() {
        let data = rows(6);
        assert_eq!(filter_items(&data, "SILLA").len(), 3);
        assert_eq!(filter_items(&data, "bn-004").len(), 1);
        assert!(filter_items(&data, "vehículo").is_empty());
    }

    #[test]
    fn total_pages_edges() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn paginate_slices_and_clamps() {
        let data = rows(23);
        let first = paginate(&data, 0, PAGE_SIZE);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_count, 23);

        let last = paginate(&data, 2, PAGE_SIZE);
        assert_eq!(last.items.len(), 3);
        assert_eq!(last.items[0].code, "BN-020");

        let beyond = paginate(&data, 9, PAGE_SIZE);
        assert_eq!(beyond.page, 2);
        assert_eq!(beyond.items, last.items);
    }

    #[test]
    fn paginate_empty_list() {
        let page = paginate::<Row>(&[], 3, PAGE_SIZE);
        assert_eq!(page.page, 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }
}
