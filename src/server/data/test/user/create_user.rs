use super::*;

/// Tests registering a new account.
///
/// Expected: Ok(Some(User)) with role user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db.clone());
    let user = repo
        .create_user(new_user("somchai@example.com"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(user.email, "somchai@example.com");
    assert_eq!(user.role, Role::User);

    Ok(())
}

/// Tests a duplicate email is reported as absent rather than an error.
///
/// Expected: Ok(None) on the second registration
#[tokio::test]
async fn returns_none_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db.clone());
    repo.create_user(new_user("dup@example.com")).await.unwrap();
    let second = repo.create_user(new_user("dup@example.com")).await.unwrap();

    assert!(second.is_none());

    Ok(())
}

/// Tests emails differing only in case are distinct accounts.
///
/// Expected: both registrations succeed and each address resolves to its own user
#[tokio::test]
async fn treats_email_case_as_significant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db.clone());
    let upper = repo
        .create_user(new_user("Alice@Example.com"))
        .await
        .unwrap()
        .unwrap();
    let lower = repo
        .create_user(new_user("alice@example.com"))
        .await
        .unwrap()
        .unwrap();

    assert_ne!(upper.id, lower.id);
    let found = repo.get_user_by_email("Alice@Example.com").await.unwrap().unwrap();
    assert_eq!(found.id, upper.id);

    Ok(())
}
