//! Query parameters for paged v1 collection endpoints.

/// Sort direction for a `sort` criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Paging, sorting and filtering options for a collection call.
///
/// Encoding is sparse: unset, zero and empty values produce no pair at all.
///
/// ```rust,ignore
/// let query = QueryParameters::new()
///     .page_size(10)
///     .sort("name", SortDirection::Asc)
///     .filter("name==\"cleanup*\"");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// `field:direction` criteria, applied in order.
    pub sort: Vec<String>,
    /// RSQL filter expression.
    pub filter: Option<String>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Append a sort criterion.
    pub fn sort(mut self, field: impl AsRef<str>, direction: SortDirection) -> Self {
        self.sort
            .push(format!("{}:{}", field.as_ref(), direction.as_str()));
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Wire pairs in emission order: `page`, `page-size`, each `sort`, `filter`.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.page_size.filter(|s| *s > 0) {
            pairs.push(("page-size", size.to_string()));
        }
        for criterion in self.sort.iter().filter(|s| !s.is_empty()) {
            pairs.push(("sort", criterion.clone()));
        }
        if let Some(filter) = self.filter.as_deref().filter(|f| !f.is_empty()) {
            pairs.push(("filter", filter.to_string()));
        }

        pairs
    }

    /// True when no pair would be emitted.
    pub fn is_empty(&self) -> bool {
        self.to_pairs().is_empty()
    }
}
