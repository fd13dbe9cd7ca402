use serde::Deserialize;
use utoipa::ToSchema;

/// 페이지네이션 쿼리 파라미터 (`?page=0&size=10`)
#[derive(Debug, Deserialize, ToSchema)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl PageQuery {
    /// 0-기반 페이지 번호
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(0)
    }

    /// 페이지 크기 (1~100)
    pub fn size(&self) -> u64 {
        self.size.unwrap_or(10).clamp(1, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_should_be_first_page_of_ten() {
        let query = PageQuery {
            page: None,
            size: None,
        };

        assert_eq!(query.page(), 0);
        assert_eq!(query.size(), 10);
    }

    #[test]
    fn size_should_be_clamped() {
        let query = PageQuery {
            page: Some(3),
            size: Some(1000),
        };

        assert_eq!(query.page(), 3);
        assert_eq!(query.size(), 100);
    }
}
