use serde::Deserialize;
use utoipa::IntoParams;

/// Fixed page size for all question listings.
pub const QUESTIONS_PER_PAGE: u32 = 10;

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct PageParams {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: default_page() }
    }
}

impl PageParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        Ok(())
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(QUESTIONS_PER_PAGE)
    }

    pub fn limit(&self) -> i64 {
        i64::from(QUESTIONS_PER_PAGE)
    }

    /// Number of the following page, if `total_items` reaches past the
    /// window this page covers.
    pub fn next_page(&self, total_items: i64) -> Option<u32> {
        let end = i64::from(self.page) * i64::from(QUESTIONS_PER_PAGE);
        (end < total_items).then(|| self.page + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        let params = PageParams { page: 1 };
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn windows_advance_by_page_size() {
        let params = PageParams { page: 3 };
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn page_zero_is_rejected() {
        assert!(PageParams { page: 0 }.validate().is_err());
        assert!(PageParams { page: 1 }.validate().is_ok());
    }

    #[test]
    fn next_page_exists_only_past_the_window() {
        let params = PageParams { page: 1 };
        assert_eq!(params.next_page(25), Some(2));
        assert_eq!(params.next_page(10), None);
        assert_eq!(params.next_page(0), None);

        let last = PageParams { page: 3 };
        assert_eq!(last.next_page(25), None);
    }
}
