use super::*;

use crate::server::controller::vehicle::{get_all_vehicles, get_vehicle_by_id};

/// Expected: 404 with `{"msg": "not found"}`
#[tokio::test]
async fn get_all_returns_404_when_empty() -> Result<(), TestError> {
    let state = test_state().await?;

    let resp = get_all_vehicles(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "msg": "not found" }));

    Ok(())
}

/// Expected: 200 with the vehicle record, `model` included
#[tokio::test]
async fn get_by_id_returns_vehicle_record() -> Result<(), TestError> {
    let state = test_state().await?;
    let vehicle = factory::create_vehicle(&state.db).await?;

    let resp = get_vehicle_by_id(State(state), IdPath(vehicle.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["name"], json!(vehicle.name));
    assert_eq!(body["model"], json!(vehicle.vehicle_model));
    assert_eq!(body["length"], json!(vehicle.length));

    Ok(())
}
