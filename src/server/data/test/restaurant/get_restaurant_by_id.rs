use super::*;

/// Tests getting a restaurant with its menu in position order.
///
/// Foods are inserted out of order; the repository must return them sorted by position.
///
/// Expected: Ok(Some(Restaurant)) with foods ordered 0, 1, 2
#[tokio::test]
async fn returns_restaurant_with_foods_in_menu_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = RestaurantFactory::new(db)
        .name("Baan Suan")
        .hours("10:30", "21:00")
        .build()
        .await?;
    FoodFactory::new(db, restaurant.id).position(2).name("Mango sticky rice").build().await?;
    FoodFactory::new(db, restaurant.id).position(0).name("Tom yum").build().await?;
    FoodFactory::new(db, restaurant.id).position(1).name("Pad thai").build().await?;

    let repo = CatalogRepository::new(db.clone());
    let found = repo
        .get_restaurant_by_id(restaurant.id)
        .await
        .unwrap()
        .expect("restaurant should exist");

    assert_eq!(found.name, "Baan Suan");
    assert_eq!(found.open_time, hm("10:30"));
    assert_eq!(found.close_time, hm("21:00"));
    let names: Vec<_> = found.foods.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Tom yum", "Pad thai", "Mango sticky rice"]);

    Ok(())
}

/// Tests repeated lookups return equal results.
///
/// Expected: Two reads of the same restaurant compare equal
#[tokio::test]
async fn repeated_lookup_is_stable() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    factory::create_food(db, restaurant.id, 0).await?;

    let repo = CatalogRepository::new(db.clone());
    let first = repo.get_restaurant_by_id(restaurant.id).await.unwrap();
    let second = repo.get_restaurant_by_id(restaurant.id).await.unwrap();

    assert!(first.is_some());
    assert_eq!(first, second);

    Ok(())
}

/// Tests lookup of an unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_restaurant(db).await?;

    let repo = CatalogRepository::new(db.clone());
    let found = repo.get_restaurant_by_id(Uuid::new_v4()).await.unwrap();

    assert!(found.is_none());

    Ok(())
}
