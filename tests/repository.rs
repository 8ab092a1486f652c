use chrono::NaiveDate;
use diesel::prelude::*;

use sweetshop::domain::category::{CategoryListQuery, NewCategory, UpdateCategory};
use sweetshop::domain::member::NewMember;
use sweetshop::domain::order::{OrderListQuery, OrderStatus};
use sweetshop::domain::sweet::{NewSweet, SweetListQuery, UpdateSweet};
use sweetshop::repository::errors::RepositoryError;
use sweetshop::repository::{
    CategoryReader, CategoryWriter, DieselRepository, MemberReader, MemberWriter, OrderReader,
    SweetReader, SweetWriter,
};

mod common;

#[test]
fn test_sweet_repository_crud() {
    let test_db = common::TestDb::new("test_sweet_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let choco = NewSweet::new("Choco Bar", "choco-bar", 250, 10)
        .with_description("Thick milk chocolate.")
        .with_category("Chocolate")
        .with_image("https://cdn.example.com/choco-bar.png");
    let gummy = NewSweet::new("Gummy Bear", "gummy-bear", 120, 30);

    let choco = repo.create_sweet(&choco).unwrap();
    let gummy = repo.create_sweet(&gummy).unwrap();

    let (total, items) = repo.list_sweets(SweetListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(items.len(), 2);
    // Ordered by name.
    assert_eq!(items[0].name, "Choco Bar");
    assert_eq!(items[1].name, "Gummy Bear");

    // Substring search is case-insensitive and matches the name only.
    let (total, items) = repo
        .list_sweets(SweetListQuery::new().search("choc"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "Choco Bar");

    let (_, items) = repo
        .list_sweets(SweetListQuery::new().search("CHOC"))
        .unwrap();
    assert_eq!(items.len(), 1);

    let (total, _) = repo
        .list_sweets(SweetListQuery::new().search("truffle"))
        .unwrap();
    assert_eq!(total, 0);

    // Full-record update.
    let update = UpdateSweet::new("Choco Slab", "choco-slab", 300, 8)
        .with_description(Some("Even thicker milk chocolate.".to_string()))
        .with_category(Some("Chocolate".to_string()))
        .with_image(Some("https://cdn.example.com/choco-slab.png".to_string()));
    let updated = repo.update_sweet(choco.id, &update).unwrap();
    assert_eq!(updated.name, "Choco Slab");
    assert_eq!(updated.price_cents, 300);
    assert_eq!(updated.stock_level, 8);

    let missing = repo.update_sweet(9999, &update);
    assert!(matches!(missing, Err(RepositoryError::NotFound)));

    // Restock touches only the stock level.
    let restocked = repo.set_sweet_stock(gummy.id, 25).unwrap();
    assert_eq!(restocked.stock_level, 25);
    assert_eq!(restocked.name, gummy.name);
    assert_eq!(restocked.slug, gummy.slug);
    assert_eq!(restocked.price_cents, gummy.price_cents);
    assert_eq!(restocked.description, gummy.description);
    assert_eq!(restocked.category, gummy.category);
    assert_eq!(restocked.image, gummy.image);
    assert_eq!(restocked.created_at, gummy.created_at);

    // Delete removes exactly that record.
    repo.delete_sweet(updated.id).unwrap();
    assert!(repo.get_sweet_by_id(updated.id).unwrap().is_none());
    let (total, items) = repo.list_sweets(SweetListQuery::new()).unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, gummy.id);

    let twice = repo.delete_sweet(updated.id);
    assert!(matches!(twice, Err(RepositoryError::NotFound)));
}

#[test]
fn test_sweet_repository_filters_by_category_and_stock() {
    let test_db = common::TestDb::new("test_sweet_repository_filters.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_sweet(&NewSweet::new("Choco Bar", "choco-bar", 250, 10).with_category("Chocolate"))
        .unwrap();
    repo.create_sweet(&NewSweet::new("Choco Egg", "choco-egg", 180, 0).with_category("Chocolate"))
        .unwrap();
    repo.create_sweet(&NewSweet::new("Pear Drop", "pear-drop", 90, 50).with_category("Boiled"))
        .unwrap();

    let (total, items) = repo
        .list_sweets(SweetListQuery::new().category("Chocolate"))
        .unwrap();
    assert_eq!(total, 2);
    assert!(items.iter().all(|sweet| sweet.category.as_deref() == Some("Chocolate")));

    let (total, items) = repo
        .list_sweets(SweetListQuery::new().category("Chocolate").in_stock_only())
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].slug, "choco-bar");

    // Pagination windows the result but reports the full count.
    let (total, items) = repo
        .list_sweets(SweetListQuery::new().paginate(1, 2))
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(items.len(), 2);
    let (_, second_page) = repo
        .list_sweets(SweetListQuery::new().paginate(2, 2))
        .unwrap();
    assert_eq!(second_page.len(), 1);
}

#[test]
fn test_sweet_repository_rejects_duplicate_slugs() {
    let test_db = common::TestDb::new("test_sweet_repository_slug_conflict.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_sweet(&NewSweet::new("Choco Bar", "choco-bar", 250, 10))
        .unwrap();
    let duplicate = repo.create_sweet(&NewSweet::new("Choco Bar", "choco-bar", 250, 10));

    assert!(matches!(duplicate, Err(RepositoryError::Conflict)));
}

#[test]
fn test_category_repository_crud() {
    let test_db = common::TestDb::new("test_category_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let chocolate = NewCategory::new("Chocolate", "chocolate")
        .with_description("Bars, slabs and truffles.")
        .with_sort_order(1);
    let seasonal = NewCategory::new("Seasonal", "seasonal")
        .active(false)
        .with_sort_order(9);

    let chocolate = repo.create_category(&chocolate).unwrap();
    repo.create_category(&seasonal).unwrap();

    let (total, all) = repo.list_categories(CategoryListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(all[0].name, "Chocolate"); // sort_order ascending

    let (total, active) = repo
        .list_categories(CategoryListQuery::new().active_only())
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(active[0].slug, "chocolate");

    let found = repo.get_category_by_slug("chocolate").unwrap();
    assert_eq!(found.map(|category| category.id), Some(chocolate.id));
    assert!(repo.get_category_by_slug("nougat").unwrap().is_none());

    let update = UpdateCategory::new("Boiled Sweets", "boiled-sweets")
        .active(true)
        .with_sort_order(2);
    let renamed = repo.update_category(chocolate.id, &update).unwrap();
    assert_eq!(renamed.name, "Boiled Sweets");
    assert_eq!(renamed.slug, "boiled-sweets");

    repo.delete_category(renamed.id).unwrap();
    let gone = repo.delete_category(renamed.id);
    assert!(matches!(gone, Err(RepositoryError::NotFound)));
}

#[test]
fn test_category_rename_leaves_sweets_untouched() {
    let test_db = common::TestDb::new("test_category_rename_no_cascade.db");
    let repo = DieselRepository::new(test_db.pool());

    let category = repo
        .create_category(&NewCategory::new("Chocolate", "chocolate"))
        .unwrap();
    let sweet = repo
        .create_sweet(&NewSweet::new("Choco Bar", "choco-bar", 250, 10).with_category("Chocolate"))
        .unwrap();

    repo.update_category(
        category.id,
        &UpdateCategory::new("Cocoa", "cocoa").active(true),
    )
    .unwrap();

    // The denormalized name on the sweet keeps the old value.
    let sweet = repo.get_sweet_by_id(sweet.id).unwrap().unwrap();
    assert_eq!(sweet.category.as_deref(), Some("Chocolate"));
}

#[test]
fn test_member_repository_round_trip() {
    let test_db = common::TestDb::new("test_member_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let new_member = NewMember::new("Rosa@Example.com", "not-a-real-hash", "Rosa", "Marchetti")
        .with_phone("+1 555 010 7392");
    let created = repo.create_member(&new_member).unwrap();
    assert_eq!(created.email, "rosa@example.com");
    assert!(!created.is_admin);

    let by_email = repo.get_member_by_email("ROSA@example.COM").unwrap();
    assert_eq!(by_email.map(|member| member.id), Some(created.id));

    let by_id = repo.get_member_by_id(created.id).unwrap().unwrap();
    assert_eq!(by_id.full_name(), "Rosa Marchetti");

    let duplicate = repo.create_member(&NewMember::new(
        "rosa@example.com",
        "other-hash",
        "Rosa",
        "Marchetti",
    ));
    assert!(matches!(duplicate, Err(RepositoryError::Conflict)));
}

#[test]
fn test_order_repository_reads_fixtures() {
    use sweetshop::models::order::{NewOrder, NewOrderItem};
    use sweetshop::schema::{order_items, orders};

    let test_db = common::TestDb::new("test_order_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let member = repo
        .create_member(&NewMember::new(
            "rosa@example.com",
            "not-a-real-hash",
            "Rosa",
            "Marchetti",
        ))
        .unwrap();

    let mut conn = test_db.pool().get().unwrap();

    let early = NaiveDate::from_ymd_opt(2025, 1, 5)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .unwrap();
    let late = NaiveDate::from_ymd_opt(2025, 2, 14)
        .and_then(|date| date.and_hms_opt(16, 0, 0))
        .unwrap();

    let first_id = diesel::insert_into(orders::table)
        .values(&NewOrder {
            member_id: Some(member.id),
            order_number: "SW-1001".to_string(),
            status: "delivered".to_string(),
            payment_status: "paid".to_string(),
            shipping_address: Some("12 Rock Candy Lane".to_string()),
            total_cents: 620,
            ordered_at: early,
        })
        .returning(orders::id)
        .get_result::<i32>(&mut conn)
        .unwrap();

    let second_id = diesel::insert_into(orders::table)
        .values(&NewOrder {
            member_id: Some(member.id),
            order_number: "SW-1002".to_string(),
            status: "pending".to_string(),
            payment_status: "pending".to_string(),
            shipping_address: None,
            total_cents: 250,
            ordered_at: late,
        })
        .returning(orders::id)
        .get_result::<i32>(&mut conn)
        .unwrap();

    diesel::insert_into(order_items::table)
        .values(&vec![
            NewOrderItem {
                order_id: first_id,
                sweet_id: None,
                name: "Choco Bar".to_string(),
                price_cents: 250,
                quantity: 2,
            },
            NewOrderItem {
                order_id: first_id,
                sweet_id: None,
                name: "Gummy Bear".to_string(),
                price_cents: 120,
                quantity: 1,
            },
            NewOrderItem {
                order_id: second_id,
                sweet_id: None,
                name: "Choco Bar".to_string(),
                price_cents: 250,
                quantity: 1,
            },
        ])
        .execute(&mut conn)
        .unwrap();

    // Newest first, items attached.
    let (total, member_orders) = repo
        .list_orders(OrderListQuery::new().member(member.id))
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(member_orders[0].order_number, "SW-1002");
    assert_eq!(member_orders[1].order_number, "SW-1001");
    assert_eq!(member_orders[1].items.len(), 2);
    assert_eq!(member_orders[1].status, OrderStatus::Delivered);

    let (total, _) = repo
        .list_orders(OrderListQuery::new().member(member.id + 1))
        .unwrap();
    assert_eq!(total, 0);

    let (total, delivered) = repo
        .list_orders(
            OrderListQuery::new()
                .member(member.id)
                .status(OrderStatus::Delivered),
        )
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(delivered[0].order_number, "SW-1001");

    let fetched = repo.get_order_by_id(first_id).unwrap().unwrap();
    assert_eq!(fetched.items.len(), 2);
    assert_eq!(fetched.total_cents, 620);
    assert!(repo.get_order_by_id(9999).unwrap().is_none());
}
