use super::*;

/// Tests removing a favorite of each kind.
///
/// Expected: 200 with `{"msg": "deleted <kind> favorite"}`
#[tokio::test]
async fn removes_favorite_of_every_kind() -> Result<(), TestError> {
    let state = test_state().await?;
    let (user, character, planet, vehicle) =
        factory::create_user_with_favorites(&state.db).await?;

    let resp = remove_character_favorite(State(state.clone()), IdPath((user.id, character.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "msg": "deleted character favorite" })
    );

    let resp = remove_planet_favorite(State(state.clone()), IdPath((user.id, planet.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "msg": "deleted planet favorite" })
    );

    let resp = remove_vehicle_favorite(State(state.clone()), IdPath((user.id, vehicle.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "msg": "deleted vehicle favorite" })
    );

    Ok(())
}

/// Tests removing a favorite that was never added.
///
/// Expected: 404 with `{"msg": "favorite not found"}`
#[tokio::test]
async fn returns_404_for_missing_favorite() -> Result<(), TestError> {
    let state = test_state().await?;
    let user = factory::create_user(&state.db).await?;
    let planet = factory::create_planet(&state.db).await?;

    let resp = remove_planet_favorite(State(state), IdPath((user.id, planet.id)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "msg": "favorite not found" }));

    Ok(())
}
