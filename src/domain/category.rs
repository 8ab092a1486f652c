use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Domain representation of a storefront category.
///
/// Sweets reference categories by name only; there is no foreign key, and
/// renaming a category does not touch existing sweets.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    /// URL slug used on the storefront.
    pub slug: String,
    pub description: Option<String>,
    /// Optional URL of the category image.
    pub image: Option<String>,
    /// Inactive categories are hidden from the storefront navigation.
    pub is_active: bool,
    /// Position in the storefront navigation, ascending.
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            description: None,
            image: None,
            is_active: true,
            sort_order: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Full-record patch applied when saving the category edit form.
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateCategory {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            description: None,
            image: None,
            is_active: true,
            sort_order: 0,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Query definition used to list categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    /// Whether inactive categories should be excluded.
    pub active_only: bool,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl CategoryListQuery {
    /// Construct a query that targets every category.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the results to active categories.
    pub fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
