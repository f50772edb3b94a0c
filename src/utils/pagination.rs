use serde::Serialize;

/// A 0-based slice of an ordered result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub index: i64,
    pub size: i64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    PageOutOfRange(i64),
    PageSizeOutOfRange(i64),
}

impl PageRequest {
    /// Builds a request from the user-facing 1-based page number.
    pub fn from_one_based(page: i64, size: i64) -> Result<Self, Error> {
        if page < 1 {
            return Err(Error::PageOutOfRange(page));
        }
        if size < 1 {
            return Err(Error::PageSizeOutOfRange(size));
        }

        Ok(Self {
            index: page - 1,
            size,
        })
    }

    pub fn offset(&self) -> i64 {
        self.index.saturating_mul(self.size)
    }

    pub fn limit(&self) -> i64 {
        self.size
    }
}

/// One slice as returned by a repository, plus the unsliced match count.
#[derive(Clone, Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Paginated<T> {
    pub fn new(page: Page<T>, request: PageRequest) -> Paginated<T> {
        let total_pages = total_pages(page.total, request.size);

        Self {
            content: page.items,
            page: request.index + 1,
            page_size: request.size,
            total_elements: page.total,
            total_pages,
            has_next: request.index + 1 < total_pages,
            has_previous: request.index > 0,
        }
    }
}

pub fn total_pages(total: i64, size: i64) -> i64 {
    if size <= 0 || total <= 0 {
        return 0;
    }
    (total + size - 1) / size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(len: usize, total: i64) -> Page<usize> {
        Page {
            items: (0..len).collect(),
            total,
        }
    }

    #[test]
    fn first_page_maps_to_zero_offset() {
        let request = PageRequest::from_one_based(1, 20).unwrap();

        assert_eq!(request.index, 0);
        assert_eq!(request.offset(), 0);
        assert_eq!(request.limit(), 20);
    }

    #[test]
    fn rejects_page_below_one() {
        assert_eq!(
            PageRequest::from_one_based(0, 20),
            Err(Error::PageOutOfRange(0))
        );
        assert_eq!(
            PageRequest::from_one_based(-3, 20),
            Err(Error::PageOutOfRange(-3))
        );
        assert_eq!(
            PageRequest::from_one_based(1, 0),
            Err(Error::PageSizeOutOfRange(0))
        );
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(100, 1), 100);
    }

    #[test]
    fn middle_page_has_both_neighbours() {
        let request = PageRequest::from_one_based(2, 10).unwrap();
        let paginated = Paginated::new(page_of(10, 25), request);

        assert_eq!(paginated.page, 2);
        assert_eq!(paginated.page_size, 10);
        assert_eq!(paginated.total_elements, 25);
        assert_eq!(paginated.total_pages, 3);
        assert!(paginated.has_next);
        assert!(paginated.has_previous);
    }

    #[test]
    fn last_and_first_pages() {
        let last = Paginated::new(page_of(5, 25), PageRequest::from_one_based(3, 10).unwrap());
        assert!(!last.has_next);
        assert!(last.has_previous);

        let first = Paginated::new(page_of(10, 25), PageRequest::from_one_based(1, 10).unwrap());
        assert!(first.has_next);
        assert!(!first.has_previous);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let paginated = Paginated::new(page_of(0, 0), PageRequest::from_one_based(1, 20).unwrap());

        assert_eq!(paginated.total_pages, 0);
        assert!(!paginated.has_next);
        assert!(!paginated.has_previous);
    }

    #[test]
    fn serializes_in_camel_case() {
        let paginated = Paginated::new(page_of(1, 1), PageRequest::from_one_based(1, 20).unwrap());
        let body = serde_json::to_value(paginated).unwrap();

        assert_eq!(body["pageSize"], 20);
        assert_eq!(body["totalElements"], 1);
        assert_eq!(body["totalPages"], 1);
        assert_eq!(body["hasNext"], false);
        assert_eq!(body["hasPrevious"], false);
    }
}
