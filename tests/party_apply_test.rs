mod common;

use villager_server::domain::party::apply_service::PartyApplyService;
use villager_server::domain::party::service::PartyService;
use villager_server::utils::error::AppError;
use villager_server::utils::page::PageQuery;

#[tokio::test]
async fn first_apply_should_mirror_created_record() {
    let (state, _rx) = common::setup_state().await;
    let host = common::seed_member(&state.db, "host@gmail.com", "주최자").await;
    let applicant = common::seed_member(&state.db, "applicant@gmail.com", "신청자").await;

    let party = PartyService::create_party(
        state.clone(),
        host.member_id,
        common::party_request("한강 러닝"),
    )
    .await
    .expect("create failed");

    let response = PartyApplyService::apply(state, applicant.member_id, party.party_id)
        .await
        .expect("apply failed");

    assert_eq!(response.party_id, party.party_id);
    assert_eq!(response.target_member_id, applicant.member_id);
    assert!(!response.is_accept);
}

#[tokio::test]
async fn apply_to_missing_party_should_be_not_found() {
    let (state, _rx) = common::setup_state().await;
    let member = common::seed_member(&state.db, "m@gmail.com", "회원").await;

    let result = PartyApplyService::apply(state, member.member_id, 9999).await;

    assert!(matches!(result, Err(AppError::PartyNotFound(_))));
}

#[tokio::test]
async fn second_apply_by_same_member_should_be_duplicate() {
    let (state, _rx) = common::setup_state().await;
    let host = common::seed_member(&state.db, "host@gmail.com", "주최자").await;
    let applicant = common::seed_member(&state.db, "applicant@gmail.com", "신청자").await;

    let party = PartyService::create_party(
        state.clone(),
        host.member_id,
        common::party_request("한강 러닝"),
    )
    .await
    .expect("create failed");

    PartyApplyService::apply(state.clone(), applicant.member_id, party.party_id)
        .await
        .expect("first apply failed");

    let result = PartyApplyService::apply(state, applicant.member_id, party.party_id).await;

    assert!(matches!(result, Err(AppError::PartyApplyDuplicate(_))));
}

#[tokio::test]
async fn accept_by_non_host_should_be_forbidden() {
    let (state, _rx) = common::setup_state().await;
    let host = common::seed_member(&state.db, "host@gmail.com", "주최자").await;
    let applicant = common::seed_member(&state.db, "applicant@gmail.com", "신청자").await;
    let stranger = common::seed_member(&state.db, "stranger@gmail.com", "제3자").await;

    let party = PartyService::create_party(
        state.clone(),
        host.member_id,
        common::party_request("한강 러닝"),
    )
    .await
    .expect("create failed");

    PartyApplyService::apply(state.clone(), applicant.member_id, party.party_id)
        .await
        .expect("apply failed");

    let result = PartyApplyService::accept(
        state,
        stranger.member_id,
        party.party_id,
        applicant.member_id,
    )
    .await;

    assert!(matches!(result, Err(AppError::PartyNotHost(_))));
}

#[tokio::test]
async fn accept_missing_apply_should_be_not_found() {
    let (state, _rx) = common::setup_state().await;
    let host = common::seed_member(&state.db, "host@gmail.com", "주최자").await;

    let party = PartyService::create_party(
        state.clone(),
        host.member_id,
        common::party_request("한강 러닝"),
    )
    .await
    .expect("create failed");

    let result = PartyApplyService::accept(state, host.member_id, party.party_id, 9999).await;

    assert!(matches!(result, Err(AppError::PartyApplyNotFound(_))));
}

#[tokio::test]
async fn accept_should_flip_is_accept() {
    let (state, _rx) = common::setup_state().await;
    let host = common::seed_member(&state.db, "host@gmail.com", "주최자").await;
    let applicant = common::seed_member(&state.db, "applicant@gmail.com", "신청자").await;

    let party = PartyService::create_party(
        state.clone(),
        host.member_id,
        common::party_request("한강 러닝"),
    )
    .await
    .expect("create failed");

    PartyApplyService::apply(state.clone(), applicant.member_id, party.party_id)
        .await
        .expect("apply failed");

    let accepted = PartyApplyService::accept(
        state,
        host.member_id,
        party.party_id,
        applicant.member_id,
    )
    .await
    .expect("accept failed");

    assert!(accepted.is_accept);
}

#[tokio::test]
async fn apply_list_should_be_paginated() {
    let (state, _rx) = common::setup_state().await;
    let host = common::seed_member(&state.db, "host@gmail.com", "주최자").await;

    let party = PartyService::create_party(
        state.clone(),
        host.member_id,
        common::party_request("한강 러닝"),
    )
    .await
    .expect("create failed");

    for i in 0..3 {
        let applicant = common::seed_member(
            &state.db,
            &format!("applicant{}@gmail.com", i),
            &format!("신청자{}", i),
        )
        .await;
        PartyApplyService::apply(state.clone(), applicant.member_id, party.party_id)
            .await
            .expect("apply failed");
    }

    let page = PartyApplyService::get_applies(
        state,
        party.party_id,
        PageQuery {
            page: Some(0),
            size: Some(2),
        },
    )
    .await
    .expect("list failed");

    assert_eq!(page.content.len(), 2);
    assert_eq!(page.total_elements, 3);
    assert_eq!(page.total_pages, 2);
}
