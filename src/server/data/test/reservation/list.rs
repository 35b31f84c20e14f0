use super::*;

/// Tests listing all reservations and one user's reservations, both ordered by date.
///
/// Expected: list_all returns 3 rows by date; list_for_user returns only that user's 2
#[tokio::test]
async fn lists_reservations_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, restaurant) = create_booking_scenario(db).await?;
    let other = factory::create_user(db).await?;
    let base = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();

    let late = factory::reservation::ReservationFactory::new(db, user.id, restaurant.id)
        .date(base + Duration::days(2))
        .build()
        .await?;
    let early = factory::reservation::ReservationFactory::new(db, user.id, restaurant.id)
        .date(base)
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, other.id, restaurant.id)
        .date(base + Duration::days(1))
        .build()
        .await?;

    let repo = ReservationRepository::new(db.clone());
    let all = repo.list_all().await.unwrap();
    let mine = repo.list_for_user(user.id).await.unwrap();

    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].date <= w[1].date));
    let mine_ids: Vec<_> = mine.iter().map(|r| r.id).collect();
    assert_eq!(mine_ids, vec![early.id, late.id]);

    Ok(())
}
