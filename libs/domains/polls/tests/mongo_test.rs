//! MongoDB repository tests
//!
//! These start a MongoDB container and are ignored by default:
//! `cargo test -p domain_polls -- --ignored`

use domain_polls::*;
use test_utils::assertions::{assert_object_id, assert_some};
use test_utils::{TestDataBuilder, TestMongo};

fn new_event(builder: &TestDataBuilder) -> EventDocument {
    EventDocument::from(NewEvent {
        name: builder.name("event", "main"),
        dates: builder.candidate_dates(3),
    })
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_event_round_trip_through_mongo() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_event_round_trip");
    let repo = MongoEventRepository::new(&mongo.database(&builder.database_name()));

    let document = new_event(&builder);
    let id = repo.insert_event(document.clone()).await.unwrap();
    assert_object_id(&id, "inserted event id");

    let event = assert_some(repo.find_event(&id).await.unwrap(), "event by id");
    assert_eq!(event.id, id);
    assert_eq!(event.name, document.name);
    assert_eq!(event.dates, document.dates);
    assert_eq!(event.created_at, document.created_at);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_invalid_or_unknown_ids_are_absent() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_absent_ids");
    let repo = MongoEventRepository::new(&mongo.database(&builder.database_name()));

    assert!(repo.find_event("not-an-object-id").await.unwrap().is_none());
    assert!(
        repo.find_event("65a1f0c2e4b0a1b2c3d4e5f6")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_answers_are_listed_per_event_in_insertion_order() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_answers_by_event");
    let db = mongo.database(&builder.database_name());

    let events = MongoEventRepository::new(&db);
    let answers = MongoAnswerRepository::new(&db);
    answers.create_indexes().await.unwrap();

    let event_id = events.insert_event(new_event(&builder)).await.unwrap();
    let other_id = events.insert_event(new_event(&builder)).await.unwrap();

    let service = AnswerService::new(events.clone(), answers.clone());
    let dates = builder.candidate_dates(3);
    let mut expected = Vec::new();
    for user in ["alice", "bob"] {
        let availability = Availability::from([(dates[0].clone(), "maybe".to_string())]);
        let id = service
            .create(CreateAnswer::new(
                event_id.clone(),
                builder.user_name(user),
                availability,
            ))
            .await
            .unwrap();
        expected.push(id);
    }
    service
        .create(CreateAnswer::new(
            other_id,
            builder.user_name("carol"),
            Availability::new(),
        ))
        .await
        .unwrap();

    let listed = answers.list_by_event(&event_id).await.unwrap();
    let ids: Vec<_> = listed.iter().map(|a| a.id.clone()).collect();
    assert_eq!(ids, expected);
    assert!(listed.iter().all(|a| a.created_at == a.updated_at));
    assert_eq!(listed[0].availability[&dates[0]], "maybe");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_answer_for_missing_event_is_not_stored() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_missing_event");
    let db = mongo.database(&builder.database_name());

    let service = AnswerService::new(
        MongoEventRepository::new(&db),
        MongoAnswerRepository::new(&db),
    );
    let missing = "65a1f0c2e4b0a1b2c3d4e5f6";

    let err = service
        .create(CreateAnswer::new(missing, "Alice", Availability::new()))
        .await
        .unwrap_err();

    assert!(matches!(err, PollError::EventNotFound(_)));
    assert!(service.list_by_event(missing).await.unwrap().is_empty());
}
