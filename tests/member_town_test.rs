mod common;

use villager_server::domain::member::dto::AddMemberTownRequest;
use villager_server::domain::member::town_service::MemberTownService;
use villager_server::utils::error::AppError;

fn add_request(town_id: i64, town_name: &str) -> AddMemberTownRequest {
    AddMemberTownRequest {
        town_id,
        town_name: town_name.to_string(),
        latitude: 37.544,
        longitude: 126.951,
    }
}

#[tokio::test]
async fn add_town_should_persist_values_exactly() {
    let (state, _rx) = common::setup_state().await;
    let member = common::seed_member(&state.db, "m@gmail.com", "회원").await;
    let town = common::seed_town(&state.db).await;

    let response = MemberTownService::add_town(
        state.clone(),
        member.member_id,
        add_request(town.town_id, "우리동네"),
    )
    .await
    .expect("add failed");

    assert_eq!(response.town_id, town.town_id);
    assert_eq!(response.town_name, "우리동네");
    assert_eq!(response.latitude, 37.544);
    assert_eq!(response.longitude, 126.951);

    let towns = MemberTownService::get_towns(state, member.member_id)
        .await
        .expect("list failed");
    assert_eq!(towns.len(), 1);
    assert_eq!(towns[0].member_town_id, response.member_town_id);
}

#[tokio::test]
async fn add_town_for_missing_member_should_be_not_found() {
    let (state, _rx) = common::setup_state().await;
    let town = common::seed_town(&state.db).await;

    let result =
        MemberTownService::add_town(state, 9999, add_request(town.town_id, "우리동네")).await;

    assert!(matches!(result, Err(AppError::MemberNotFound(_))));
}

#[tokio::test]
async fn add_missing_town_should_be_not_found() {
    let (state, _rx) = common::setup_state().await;
    let member = common::seed_member(&state.db, "m@gmail.com", "회원").await;

    let result =
        MemberTownService::add_town(state, member.member_id, add_request(9999, "우리동네")).await;

    assert!(matches!(result, Err(AppError::TownNotFound(_))));
}

#[tokio::test]
async fn third_town_should_exceed_limit() {
    let (state, _rx) = common::setup_state().await;
    let member = common::seed_member(&state.db, "m@gmail.com", "회원").await;
    let town = common::seed_town(&state.db).await;

    for name in ["첫번째동네", "두번째동네"] {
        MemberTownService::add_town(
            state.clone(),
            member.member_id,
            add_request(town.town_id, name),
        )
        .await
        .expect("add failed");
    }

    let result = MemberTownService::add_town(
        state,
        member.member_id,
        add_request(town.town_id, "세번째동네"),
    )
    .await;

    assert!(matches!(result, Err(AppError::MemberTownAddMax(_))));
}

#[tokio::test]
async fn remove_should_only_delete_own_association() {
    let (state, _rx) = common::setup_state().await;
    let owner = common::seed_member(&state.db, "owner@gmail.com", "소유자").await;
    let other = common::seed_member(&state.db, "other@gmail.com", "타인").await;
    let town = common::seed_town(&state.db).await;

    let added = MemberTownService::add_town(
        state.clone(),
        owner.member_id,
        add_request(town.town_id, "우리동네"),
    )
    .await
    .expect("add failed");

    // 타인이 삭제 시도하면 조회되지 않는다
    let result =
        MemberTownService::remove_town(state.clone(), other.member_id, added.member_town_id).await;
    assert!(matches!(result, Err(AppError::TownNotFound(_))));

    // 본인은 삭제 가능
    MemberTownService::remove_town(state.clone(), owner.member_id, added.member_town_id)
        .await
        .expect("remove failed");

    let towns = MemberTownService::get_towns(state, owner.member_id)
        .await
        .expect("list failed");
    assert!(towns.is_empty());
}
