use super::*;

/// Tests the count only includes the given user's reservations.
///
/// Expected: 2 for the first user, 1 for the second, 0 for an unknown user
#[tokio::test]
async fn counts_only_that_users_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, restaurant) = create_booking_scenario(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_reservations(db, user.id, restaurant.id, 2).await?;
    factory::create_reservation(db, other.id, restaurant.id).await?;

    let repo = ReservationRepository::new(db.clone());

    assert_eq!(repo.count_for_user(user.id).await.unwrap(), 2);
    assert_eq!(repo.count_for_user(other.id).await.unwrap(), 1);
    assert_eq!(repo.count_for_user(Uuid::new_v4()).await.unwrap(), 0);

    Ok(())
}
