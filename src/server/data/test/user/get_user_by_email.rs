use super::*;

/// Tests looking up a user by email.
///
/// Expected: Ok(Some(User)) for a known email, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .email("boss@example.com")
        .role("admin")
        .build()
        .await?;

    let repo = UserRepository::new(db.clone());
    let found = repo.get_user_by_email("boss@example.com").await.unwrap().unwrap();
    let missing = repo.get_user_by_email("nobody@example.com").await.unwrap();

    assert_eq!(found.id, admin.id);
    assert_eq!(found.role, Role::Admin);
    assert!(missing.is_none());

    Ok(())
}

/// Tests a stored role outside the known set surfaces as a corrupt record.
///
/// Expected: Err(StoreError::Corrupt)
#[tokio::test]
async fn rejects_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("odd@example.com")
        .role("superuser")
        .build()
        .await?;

    let repo = UserRepository::new(db.clone());
    let result = repo.get_user_by_email("odd@example.com").await;

    assert!(matches!(result, Err(StoreError::Corrupt(_))));

    Ok(())
}
