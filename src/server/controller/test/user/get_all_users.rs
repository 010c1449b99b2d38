use super::*;

/// Tests the empty-listing policy.
///
/// Expected: 404 with `{"msg": "not found"}`
#[tokio::test]
async fn returns_404_when_no_users() -> Result<(), TestError> {
    let state = test_state().await?;

    let resp = get_all_users(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "msg": "not found" }));

    Ok(())
}

/// Tests that user records include every stored field.
///
/// Expected: 200 with a list of user records
#[tokio::test]
async fn returns_user_records() -> Result<(), TestError> {
    let state = test_state().await?;
    let user = factory::create_user(&state.db).await?;

    let resp = get_all_users(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!([{
            "id": user.id,
            "username": user.username,
            "email": user.email,
            "password": user.password,
            "is_active": user.is_active,
        }])
    );

    Ok(())
}
