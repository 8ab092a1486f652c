use serde::{Deserialize, Serialize};

use crate::domain::category::{Category, CategoryListQuery};
use crate::domain::sweet::{Sweet, SweetListQuery};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CategoryReader, SweetReader};
use crate::services::{ServiceError, ServiceResult};

/// Number of in-stock sweets featured on the home page.
const FEATURED_SWEETS: usize = 4;

/// View model exposed to every template that renders a sweet.
#[derive(Debug, Clone, Serialize)]
pub struct SweetView {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub price_formatted: String,
    pub image: Option<String>,
    pub category: Option<String>,
    pub stock_level: i32,
    pub in_stock: bool,
}

impl From<Sweet> for SweetView {
    fn from(sweet: Sweet) -> Self {
        let price_formatted = format!("{:.2}", sweet.price_cents as f64 / 100.0);
        let in_stock = sweet.in_stock();
        Self {
            id: sweet.id,
            name: sweet.name,
            slug: sweet.slug,
            description: sweet.description,
            price_cents: sweet.price_cents,
            price_formatted,
            image: sweet.image,
            category: sweet.category,
            stock_level: sweet.stock_level,
            in_stock,
        }
    }
}

/// Data required to render the home page.
pub struct HomePageData {
    pub featured: Vec<SweetView>,
}

/// Loads the home page: a short selection of in-stock sweets.
pub fn load_home_page<R>(repo: &R) -> ServiceResult<HomePageData>
where
    R: SweetReader + ?Sized,
{
    let (_, sweets) = repo.list_sweets(
        SweetListQuery::new()
            .in_stock_only()
            .paginate(1, FEATURED_SWEETS),
    )?;

    Ok(HomePageData {
        featured: sweets.into_iter().map(SweetView::from).collect(),
    })
}

/// Query parameters accepted by the catalog pages.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
}

/// Data required to render the catalog template.
pub struct CatalogPageData {
    /// Paginated grid of sweets.
    pub sweets: Paginated<SweetView>,
    /// Active categories for the navigation rail.
    pub categories: Vec<Category>,
    /// The category being browsed, when filtering.
    pub current_category: Option<Category>,
}

/// Loads the catalog, optionally scoped to a category slug. The category
/// filter matches the denormalized name copied onto each sweet.
pub fn load_catalog_page<R>(
    repo: &R,
    category_slug: Option<&str>,
    query: CatalogQuery,
) -> ServiceResult<CatalogPageData>
where
    R: SweetReader + CategoryReader + ?Sized,
{
    let (_, categories) = repo.list_categories(CategoryListQuery::new().active_only())?;

    let current_category = match category_slug {
        Some(slug) => {
            let category = repo
                .get_category_by_slug(slug)?
                .filter(|category| category.is_active)
                .ok_or(ServiceError::NotFound)?;
            Some(category)
        }
        None => None,
    };

    let page = query.page.unwrap_or(1).max(1);
    let mut list_query = SweetListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(category) = current_category.as_ref() {
        list_query = list_query.category(&category.name);
    }

    let (total, sweets) = repo.list_sweets(list_query)?;

    let view_items: Vec<SweetView> = sweets.into_iter().map(SweetView::from).collect();
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(CatalogPageData {
        sweets: Paginated::new(view_items, page, total_pages),
        categories,
        current_category,
    })
}

/// Data required to render a product details page.
pub struct SweetPageData {
    pub sweet: SweetView,
}

/// Loads a single sweet by its storefront slug.
pub fn load_sweet_page<R>(repo: &R, slug: &str) -> ServiceResult<SweetPageData>
where
    R: SweetReader + ?Sized,
{
    let sweet = repo.get_sweet_by_slug(slug)?.ok_or(ServiceError::NotFound)?;

    Ok(SweetPageData {
        sweet: SweetView::from(sweet),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::repository::mock::{MockCategoryReader, MockSweetReader};
    use crate::repository::{CategoryReader, SweetReader};
    use crate::repository::errors::RepositoryResult;
    use crate::domain::category::CategoryListQuery;
    use crate::domain::sweet::SweetListQuery;

    fn datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_sweet(id: i32, name: &str, stock_level: i32) -> Sweet {
        Sweet {
            id,
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: None,
            price_cents: 250,
            image: None,
            category: Some("Chocolate".to_string()),
            stock_level,
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    fn sample_category(id: i32, name: &str, is_active: bool) -> Category {
        Category {
            id,
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: None,
            image: None,
            is_active,
            sort_order: id,
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    struct FakeRepo {
        sweets: MockSweetReader,
        categories: MockCategoryReader,
    }

    impl FakeRepo {
        fn new() -> Self {
            Self {
                sweets: MockSweetReader::new(),
                categories: MockCategoryReader::new(),
            }
        }
    }

    impl SweetReader for FakeRepo {
        fn get_sweet_by_id(&self, id: i32) -> RepositoryResult<Option<Sweet>> {
            self.sweets.get_sweet_by_id(id)
        }

        fn get_sweet_by_slug(&self, slug: &str) -> RepositoryResult<Option<Sweet>> {
            self.sweets.get_sweet_by_slug(slug)
        }

        fn list_sweets(&self, query: SweetListQuery) -> RepositoryResult<(usize, Vec<Sweet>)> {
            self.sweets.list_sweets(query)
        }
    }

    impl CategoryReader for FakeRepo {
        fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>> {
            self.categories.get_category_by_slug(slug)
        }

        fn list_categories(
            &self,
            query: CategoryListQuery,
        ) -> RepositoryResult<(usize, Vec<Category>)> {
            self.categories.list_categories(query)
        }
    }

    #[test]
    fn home_page_requests_in_stock_sweets_only() {
        let mut repo = FakeRepo::new();

        repo.sweets
            .expect_list_sweets()
            .times(1)
            .withf(|query| {
                assert!(query.in_stock_only);
                assert!(query.pagination.is_some());
                true
            })
            .returning(|_| Ok((1, vec![sample_sweet(1, "Choco Bar", 5)])));

        let data = load_home_page(&repo).expect("expected success");

        assert_eq!(data.featured.len(), 1);
        assert_eq!(data.featured[0].price_formatted, "2.50");
        assert!(data.featured[0].in_stock);
    }

    #[test]
    fn catalog_page_filters_by_the_category_name() {
        let mut repo = FakeRepo::new();

        repo.categories
            .expect_list_categories()
            .times(1)
            .returning(|_| Ok((1, vec![sample_category(1, "Chocolate", true)])));

        repo.categories
            .expect_get_category_by_slug()
            .times(1)
            .withf(|slug| slug == "chocolate")
            .returning(|_| Ok(Some(sample_category(1, "Chocolate", true))));

        repo.sweets
            .expect_list_sweets()
            .times(1)
            .withf(|query| {
                assert_eq!(query.category.as_deref(), Some("Chocolate"));
                true
            })
            .returning(|_| Ok((1, vec![sample_sweet(1, "Choco Bar", 5)])));

        let data = load_catalog_page(&repo, Some("chocolate"), CatalogQuery::default())
            .expect("expected success");

        assert_eq!(data.sweets.items.len(), 1);
        assert_eq!(
            data.current_category.as_ref().map(|c| c.name.as_str()),
            Some("Chocolate")
        );
    }

    #[test]
    fn catalog_page_hides_inactive_categories() {
        let mut repo = FakeRepo::new();

        repo.categories
            .expect_list_categories()
            .returning(|_| Ok((0, Vec::new())));

        repo.categories
            .expect_get_category_by_slug()
            .returning(|_| Ok(Some(sample_category(3, "Seasonal", false))));

        let result = load_catalog_page(&repo, Some("seasonal"), CatalogQuery::default());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn sweet_page_returns_not_found_for_unknown_slugs() {
        let mut repo = FakeRepo::new();

        repo.sweets
            .expect_get_sweet_by_slug()
            .returning(|_| Ok(None));

        let result = load_sweet_page(&repo, "does-not-exist");

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
