use super::*;

/// Tests moving a reservation to a new date.
///
/// Expected: Ok(Some) with the new date and a fresh updated_at
#[tokio::test]
async fn updates_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, restaurant) = create_booking_scenario(db).await?;
    let existing = factory::create_reservation(db, user.id, restaurant.id).await?;
    let new_date = Utc.with_ymd_and_hms(2026, 7, 4, 19, 0, 0).unwrap();

    let repo = ReservationRepository::new(db.clone());
    let updated = repo
        .update_date(existing.id, new_date)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.date, new_date);
    assert!(updated.updated_at >= existing.updated_at);
    let stored = repo.get_by_id(existing.id).await.unwrap().unwrap();
    assert_eq!(stored.date, new_date);

    Ok(())
}

/// Tests updating an unknown reservation.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db.clone());
    let updated = repo.update_date(Uuid::new_v4(), Utc::now()).await.unwrap();

    assert!(updated.is_none());

    Ok(())
}
