use super::*;

/// Tests deleting a reservation frees a slot under the cap.
///
/// Expected: true on first delete, false on second, count drops from 3 to 2
#[tokio::test]
async fn deletes_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, restaurant) = create_booking_scenario(db).await?;
    let rows = factory::create_reservations(db, user.id, restaurant.id, 3).await?;

    let repo = ReservationRepository::new(db.clone());

    assert!(repo.delete(rows[0].id).await.unwrap());
    assert!(!repo.delete(rows[0].id).await.unwrap());
    assert_eq!(repo.count_for_user(user.id).await.unwrap(), 2);

    Ok(())
}
