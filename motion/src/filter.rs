//! Project card filtering.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Value of a `.filter-btn`'s `data-filter` attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

impl ProjectFilter {
    /// `"all"` (or a missing attribute) shows everything.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("all" | "") => Self::All,
            Some(category) => Self::Category(category.to_owned()),
        }
    }

    /// Whether a card with `category` stays visible.
    #[must_use]
    pub fn shows(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => category.map(str::trim) == Some(wanted.as_str()),
        }
    }

    /// Visibility for each card, in order.
    pub fn visibility<'a>(&self, categories: impl IntoIterator<Item = Option<&'a str>>) -> Vec<bool> {
        categories.into_iter().map(|c| self.shows(c)).collect()
    }
}
