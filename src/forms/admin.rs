use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::domain::sweet::{NewSweet, UpdateSweet};
use crate::forms::{
    parse_non_negative_int, parse_price_cents, sanitize_inline_text, sanitize_multiline_text,
    slugify,
};

/// Maximum length allowed for a sweet or category name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum length allowed for a description.
const DESCRIPTION_MAX_LEN: usize = 2048;
const DESCRIPTION_MAX_LEN_VALIDATOR: u64 = DESCRIPTION_MAX_LEN as u64;

/// Maximum length allowed for an image URL.
const IMAGE_MAX_LEN: usize = 512;
const IMAGE_MAX_LEN_VALIDATOR: u64 = IMAGE_MAX_LEN as u64;

/// Result type returned by the sweet form helpers.
pub type SweetFormResult<T> = Result<T, SweetFormError>;

/// Errors that can occur while processing sweet forms.
#[derive(Debug, Error)]
pub enum SweetFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("the sweet needs a name")]
    EmptyName,
    /// The price field could not be parsed as a non-negative amount.
    #[error("`{value}` is not a valid price")]
    InvalidPrice { value: String },
    /// The stock field could not be parsed as a non-negative integer.
    #[error("`{value}` is not a valid stock level")]
    InvalidStock { value: String },
}

/// Form payload emitted when submitting the "Add sweet" dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct SweetForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(min = 1, max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    pub description: String,
    /// Decimal price as typed, e.g. `2.50`.
    pub price: String,
    /// Category name picked from the selector; empty means uncategorized.
    #[serde(default)]
    pub category: Option<String>,
    /// Stock level as typed.
    pub stock_level: String,
    #[validate(length(min = 1, max = IMAGE_MAX_LEN_VALIDATOR))]
    pub image: String,
}

impl SweetForm {
    /// Validates and sanitizes the payload into a domain `NewSweet`.
    pub fn into_new_sweet(self) -> SweetFormResult<NewSweet> {
        self.validate()?;

        let SweetForm {
            name,
            description,
            price,
            category,
            stock_level,
            image,
        } = self;

        let name = sanitize_inline_text(&name);
        if name.is_empty() {
            return Err(SweetFormError::EmptyName);
        }

        let price_cents =
            parse_price_cents(&price).ok_or(SweetFormError::InvalidPrice { value: price })?;
        let stock_level = parse_non_negative_int(&stock_level)
            .ok_or(SweetFormError::InvalidStock { value: stock_level })?;

        let slug = slugify(&name);
        let mut new_sweet = NewSweet::new(name, slug, price_cents, stock_level);

        let description = sanitize_multiline_text(&description);
        if !description.is_empty() {
            new_sweet = new_sweet.with_description(description);
        }

        if let Some(category) = category
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|value| !value.is_empty())
        {
            new_sweet = new_sweet.with_category(category);
        }

        new_sweet = new_sweet.with_image(image.trim().to_string());

        Ok(new_sweet)
    }
}

/// Normalized payload produced by the "Edit sweet" dialog.
#[derive(Debug)]
pub struct EditSweetPayload {
    pub sweet_id: i32,
    pub update: UpdateSweet,
}

/// Form payload emitted when saving the "Edit sweet" dialog; the presence of
/// `sweet_id` is what distinguishes it from a create.
#[derive(Debug, Deserialize, Validate)]
pub struct EditSweetForm {
    #[validate(range(min = 1))]
    pub sweet_id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(min = 1, max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub category: Option<String>,
    pub stock_level: String,
    #[validate(length(min = 1, max = IMAGE_MAX_LEN_VALIDATOR))]
    pub image: String,
}

impl EditSweetForm {
    /// Validates and sanitizes the payload into an update for the targeted row.
    pub fn into_update_sweet(self) -> SweetFormResult<EditSweetPayload> {
        self.validate()?;

        let EditSweetForm {
            sweet_id,
            name,
            description,
            price,
            category,
            stock_level,
            image,
        } = self;

        let name = sanitize_inline_text(&name);
        if name.is_empty() {
            return Err(SweetFormError::EmptyName);
        }

        let price_cents =
            parse_price_cents(&price).ok_or(SweetFormError::InvalidPrice { value: price })?;
        let stock_level = parse_non_negative_int(&stock_level)
            .ok_or(SweetFormError::InvalidStock { value: stock_level })?;

        let slug = slugify(&name);

        let description = {
            let sanitized = sanitize_multiline_text(&description);
            if sanitized.is_empty() { None } else { Some(sanitized) }
        };

        let category = category
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|value| !value.is_empty());

        let update = UpdateSweet::new(name, slug, price_cents, stock_level)
            .with_description(description)
            .with_category(category)
            .with_image(Some(image.trim().to_string()));

        Ok(EditSweetPayload { sweet_id, update })
    }
}

/// Form payload emitted by the restock dialog; carries only the new level.
#[derive(Debug, Deserialize)]
pub struct RestockForm {
    pub stock_level: String,
}

impl RestockForm {
    /// Parse the submitted stock level, rejecting anything non-numeric.
    pub fn into_stock_level(self) -> SweetFormResult<i32> {
        parse_non_negative_int(&self.stock_level).ok_or(SweetFormError::InvalidStock {
            value: self.stock_level,
        })
    }
}

/// Result type returned by the category form helpers.
pub type CategoryFormResult<T> = Result<T, CategoryFormError>;

/// Errors that can occur while processing category forms.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("the category needs a name")]
    EmptyName,
    /// The sort order field could not be parsed.
    #[error("`{value}` is not a valid sort order")]
    InvalidSortOrder { value: String },
}

/// Form payload emitted when submitting the "Add category" dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub description: Option<String>,
    #[validate(length(max = IMAGE_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub image: Option<String>,
    /// Navigation position as typed; empty means append at 0.
    #[serde(default)]
    pub sort_order: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl AddCategoryForm {
    /// Validates and sanitizes the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> CategoryFormResult<NewCategory> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        let sort_order = parse_optional_sort_order(self.sort_order)?;
        let slug = slugify(&name);

        let mut new_category = NewCategory::new(name, slug)
            .active(self.is_active)
            .with_sort_order(sort_order);

        if let Some(description) = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty())
        {
            new_category = new_category.with_description(description);
        }

        if let Some(image) = self
            .image
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            new_category = new_category.with_image(image.to_string());
        }

        Ok(new_category)
    }
}

/// Normalized payload produced by the "Edit category" dialog.
#[derive(Debug)]
pub struct EditCategoryPayload {
    pub category_id: i32,
    pub update: UpdateCategory,
}

/// Form payload emitted when saving the "Edit category" dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct EditCategoryForm {
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub description: Option<String>,
    #[validate(length(max = IMAGE_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl EditCategoryForm {
    /// Validates and sanitizes the payload into an update for the targeted row.
    pub fn into_update_category(self) -> CategoryFormResult<EditCategoryPayload> {
        self.validate()?;

        let EditCategoryForm {
            category_id,
            name,
            description,
            image,
            sort_order,
            is_active,
        } = self;

        let name = sanitize_inline_text(&name);
        if name.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        let sort_order = parse_optional_sort_order(sort_order)?;
        let slug = slugify(&name);

        let description = description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());

        let image = image
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        let update = UpdateCategory::new(name, slug)
            .active(is_active)
            .with_sort_order(sort_order)
            .with_description(description)
            .with_image(image);

        Ok(EditCategoryPayload {
            category_id,
            update,
        })
    }
}

fn parse_optional_sort_order(value: Option<String>) -> CategoryFormResult<i32> {
    match value {
        None => Ok(0),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Ok(0)
            } else {
                trimmed
                    .parse::<i32>()
                    .map_err(|_| CategoryFormError::InvalidSortOrder {
                        value: trimmed.to_string(),
                    })
            }
        }
    }
}
