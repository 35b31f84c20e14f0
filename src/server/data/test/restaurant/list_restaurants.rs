use super::*;

/// Tests listing returns every restaurant ordered by name, each with its own foods.
///
/// Expected: Ok(Vec) of length 2, alphabetical, foods not mixed between restaurants
#[tokio::test]
async fn lists_all_restaurants_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let zab = RestaurantFactory::new(db).name("Zab Zaa").build().await?;
    let ari = RestaurantFactory::new(db).name("Ari Noodle").build().await?;
    factory::create_food(db, zab.id, 0).await?;
    factory::create_food(db, zab.id, 1).await?;
    factory::create_food(db, ari.id, 0).await?;

    let repo = CatalogRepository::new(db.clone());
    let restaurants = repo.list_restaurants().await.unwrap();

    assert_eq!(restaurants.len(), 2);
    assert_eq!(restaurants[0].name, "Ari Noodle");
    assert_eq!(restaurants[0].foods.len(), 1);
    assert_eq!(restaurants[1].name, "Zab Zaa");
    assert_eq!(restaurants[1].foods.len(), 2);
    assert!(restaurants[1].foods.iter().all(|f| f.restaurant_id == zab.id));

    Ok(())
}

/// Tests category filtering is an exact match.
///
/// Expected: Only restaurants in "japanese" are returned
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RestaurantFactory::new(db).category("thai").build().await?;
    let sushi = RestaurantFactory::new(db)
        .name("Sushi Den")
        .category("japanese")
        .build()
        .await?;

    let repo = CatalogRepository::new(db.clone());
    let japanese = repo.list_restaurants_by_category("japanese").await.unwrap();
    let none = repo.list_restaurants_by_category("french").await.unwrap();

    assert_eq!(japanese.len(), 1);
    assert_eq!(japanese[0].id, sushi.id);
    assert!(none.is_empty());

    Ok(())
}
