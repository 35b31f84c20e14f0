use super::*;

/// Tests inserting below the cap persists the reservation unchanged.
///
/// Expected: Ok(Some) and the stored row equals the submitted record
#[tokio::test]
async fn inserts_when_under_cap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, restaurant) = create_booking_scenario(db).await?;
    factory::create_reservations(db, user.id, restaurant.id, 2).await?;

    let repo = ReservationRepository::new(db.clone());
    let candidate = new_reservation(user.id, restaurant.id);
    let inserted = repo
        .insert_if_under_cap(candidate.clone(), 3)
        .await
        .unwrap();

    assert_eq!(inserted.as_ref(), Some(&candidate));
    let stored = repo.get_by_id(candidate.id).await.unwrap().unwrap();
    assert_eq!(stored.user_id, user.id);
    assert_eq!(stored.restaurant_id, restaurant.id);
    assert_eq!(stored.date, candidate.date);
    assert_eq!(repo.count_for_user(user.id).await.unwrap(), 3);

    Ok(())
}

/// Tests inserting at the cap writes nothing.
///
/// Expected: Ok(None) and the count stays at 3
#[tokio::test]
async fn refuses_insert_at_cap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, restaurant) = create_booking_scenario(db).await?;
    factory::create_reservations(db, user.id, restaurant.id, 3).await?;

    let repo = ReservationRepository::new(db.clone());
    let candidate = new_reservation(user.id, restaurant.id);
    let inserted = repo.insert_if_under_cap(candidate.clone(), 3).await.unwrap();

    assert!(inserted.is_none());
    assert!(repo.get_by_id(candidate.id).await.unwrap().is_none());
    assert_eq!(repo.count_for_user(user.id).await.unwrap(), 3);

    Ok(())
}

/// Tests the cap is per user.
///
/// Expected: A second user can still book while the first is at the cap
#[tokio::test]
async fn cap_is_counted_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, restaurant) = create_booking_scenario(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_reservations(db, user.id, restaurant.id, 3).await?;

    let repo = ReservationRepository::new(db.clone());
    let inserted = repo
        .insert_if_under_cap(new_reservation(other.id, restaurant.id), 3)
        .await
        .unwrap();

    assert!(inserted.is_some());

    Ok(())
}

/// Tests concurrent inserts for one user never exceed the cap.
///
/// Expected: Exactly 3 of 8 concurrent inserts succeed
#[tokio::test]
async fn concurrent_inserts_respect_cap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, restaurant) = create_booking_scenario(db).await?;
    let repo = ReservationRepository::new(db.clone());

    let attempts = (0..8).map(|_| {
        let repo = repo.clone();
        let candidate = new_reservation(user.id, restaurant.id);
        tokio::spawn(async move { repo.insert_if_under_cap(candidate, 3).await })
    });

    let mut inserted = 0;
    for attempt in attempts.collect::<Vec<_>>() {
        if attempt.await.unwrap().unwrap().is_some() {
            inserted += 1;
        }
    }

    assert_eq!(inserted, 3);
    assert_eq!(repo.count_for_user(user.id).await.unwrap(), 3);

    Ok(())
}
