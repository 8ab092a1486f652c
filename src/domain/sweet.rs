use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Domain representation of a catalog sweet.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Sweet {
    /// Unique identifier of the sweet.
    pub id: i32,
    /// Display name of the sweet.
    pub name: String,
    /// URL slug used on the storefront.
    pub slug: String,
    /// Optional longer description shown on the product page.
    pub description: Option<String>,
    /// Price in the smallest currency unit (cents).
    pub price_cents: i32,
    /// Optional URL of the main product image.
    pub image: Option<String>,
    /// Denormalized category name; not a foreign key.
    pub category: Option<String>,
    /// Units currently available for sale.
    pub stock_level: i32,
    /// Timestamp for when the record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the record.
    pub updated_at: NaiveDateTime,
}

impl Sweet {
    pub fn in_stock(&self) -> bool {
        self.stock_level > 0
    }
}

/// Payload required to insert a new sweet.
#[derive(Debug, Clone)]
pub struct NewSweet {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub image: Option<String>,
    pub category: Option<String>,
    pub stock_level: i32,
}

impl NewSweet {
    /// Build a new sweet payload with the supplied details.
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        price_cents: i32,
        stock_level: i32,
    ) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            description: None,
            price_cents,
            image: None,
            category: None,
            stock_level,
        }
    }

    /// Attach a descriptive text to the payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a main image URL to the payload.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Attach a category name to the payload.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Full-record patch applied when saving the edit form.
#[derive(Debug, Clone)]
pub struct UpdateSweet {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub image: Option<String>,
    pub category: Option<String>,
    pub stock_level: i32,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateSweet {
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        price_cents: i32,
        stock_level: i32,
    ) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            description: None,
            price_cents,
            image: None,
            category: None,
            stock_level,
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

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }
}

/// Query definition used to list sweets.
#[derive(Debug, Clone, Default)]
pub struct SweetListQuery {
    /// Optional case-insensitive name search term.
    pub search: Option<String>,
    /// Optional exact match on the denormalized category name.
    pub category: Option<String>,
    /// Whether to restrict the results to sweets with stock available.
    pub in_stock_only: bool,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl SweetListQuery {
    /// Construct a query that targets the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the name.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Filter the results by the denormalized category name.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Exclude sweets that are out of stock.
    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
