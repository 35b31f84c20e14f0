use super::*;

/// Tests getting a food item by restaurant and food id.
///
/// Expected: Ok(Some(Food))
#[tokio::test]
async fn returns_food_of_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let food = FoodFactory::new(db, restaurant.id)
        .name("Green curry")
        .price(180.0)
        .build()
        .await?;

    let repo = CatalogRepository::new(db.clone());
    let found = repo.get_food(restaurant.id, food.id).await.unwrap().unwrap();

    assert_eq!(found.name, "Green curry");
    assert_eq!(found.price, 180.0);

    Ok(())
}

/// Tests a food id paired with the wrong restaurant is not found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_food_of_other_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_restaurant(db).await?;
    let other = factory::create_restaurant(db).await?;
    let food = factory::create_food(db, owner.id, 0).await?;

    let repo = CatalogRepository::new(db.clone());
    let found = repo.get_food(other.id, food.id).await.unwrap();

    assert!(found.is_none());

    Ok(())
}
