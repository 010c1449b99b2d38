use super::*;

use crate::server::controller::planet::{get_all_planets, get_planet_by_id};

/// Expected: 200 with the planets ordered by ID
#[tokio::test]
async fn get_all_returns_planets() -> Result<(), TestError> {
    let state = test_state().await?;
    let first = factory::create_planet(&state.db).await?;
    let second = factory::create_planet(&state.db).await?;

    let resp = get_all_planets(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body[0]["id"], json!(first.id));
    assert_eq!(body[1]["id"], json!(second.id));

    Ok(())
}

/// Expected: 404 with `{"msg": "not found"}`
#[tokio::test]
async fn get_by_id_returns_404_for_missing_planet() -> Result<(), TestError> {
    let state = test_state().await?;

    let resp = get_planet_by_id(State(state), IdPath(3)).await.into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
