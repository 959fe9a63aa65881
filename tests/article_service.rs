// tests/article_service.rs
use chrono::Utc;

mod support;

#[tokio::test]
async fn get_articles_returns_seeded_rows_in_id_order() {
    let services = support::make_services().await;
    let ids = support::seed_articles(&services).await;

    let articles = services.articles.get_articles().await.unwrap();

    assert_eq!(articles.len(), 3);
    let listed_ids: Vec<i64> = articles.iter().map(|a| a.id).collect();
    assert_eq!(listed_ids, ids);
    assert_eq!(articles[0].title, "title1");
    assert_eq!(articles[2].body, "body3");
}

#[tokio::test]
async fn get_article_by_id_returns_full_record() {
    let services = support::make_services().await;
    let ids = support::seed_articles(&services).await;

    let article = services
        .articles
        .get_article_by_id(ids[0])
        .await
        .unwrap()
        .expect("seeded article");

    assert_eq!(article.id, ids[0]);
    assert_eq!(article.title, "title1");
    assert_eq!(article.body, "body1");
    assert!(!article.is_blind);
    assert!(article.modified_date >= article.created_date);
}

#[tokio::test]
async fn get_article_by_id_misses_as_none() {
    let services = support::make_services().await;
    support::seed_articles(&services).await;

    let absent = services.articles.get_article_by_id(9999).await.unwrap();
    assert!(absent.is_none());
}

#[tokio::test]
async fn count_includes_blind_rows() {
    let services = support::make_services().await;
    support::seed_articles(&services).await;
    services
        .articles
        .write("hidden", "hidden body", true)
        .await
        .unwrap();

    let count = services.articles.get_articles_count().await.unwrap();
    assert_eq!(count, 4);
}

#[tokio::test]
async fn write_then_read_back_roundtrip() {
    let services = support::make_services().await;
    support::seed_articles(&services).await;

    let new_id = services
        .articles
        .write("title new", "body new", false)
        .await
        .unwrap();

    let article = services
        .articles
        .get_article_by_id(new_id)
        .await
        .unwrap()
        .expect("written article");

    assert_eq!(article.id, new_id);
    assert_eq!(article.title, "title new");
    assert_eq!(article.body, "body new");
    assert!(!article.is_blind);
    assert_eq!(article.created_date, article.modified_date);
    assert!(article.created_date <= Utc::now());
}

#[tokio::test]
async fn ids_are_assigned_monotonically() {
    let services = support::make_services().await;
    let ids = support::seed_articles(&services).await;

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

    // A deleted id is never handed out again.
    let last = *ids.last().unwrap();
    services.articles.delete(last).await.unwrap();
    let next = services.articles.write("after", "delete", false).await.unwrap();
    assert!(next > last);
}

#[tokio::test]
async fn modify_replaces_fields_and_refreshes_modified_date() {
    let services = support::make_services().await;
    let ids = support::seed_articles(&services).await;
    let id = ids[0];

    let before = services
        .articles
        .get_article_by_id(id)
        .await
        .unwrap()
        .unwrap();

    let affected = services
        .articles
        .modify(id, "title new", "body new", true)
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let after = services
        .articles
        .get_article_by_id(id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(after.id, id);
    assert_eq!(after.title, "title new");
    assert_eq!(after.body, "body new");
    assert!(after.is_blind);
    assert_eq!(after.created_date, before.created_date);
    assert!(after.modified_date >= after.created_date);

    let diff_seconds = (Utc::now() - after.modified_date).num_seconds();
    assert!(diff_seconds <= 1, "modified_date is stale: {diff_seconds}s");
}

#[tokio::test]
async fn modify_missing_id_affects_zero_rows() {
    let services = support::make_services().await;
    support::seed_articles(&services).await;

    let affected = services
        .articles
        .modify(9999, "title", "body", false)
        .await
        .unwrap();
    assert_eq!(affected, 0);
}

#[tokio::test]
async fn delete_removes_the_row() {
    let services = support::make_services().await;
    let ids = support::seed_articles(&services).await;
    let id = ids[0];

    services.articles.delete(id).await.unwrap();

    let gone = services.articles.get_article_by_id(id).await.unwrap();
    assert!(gone.is_none());

    let count = services.articles.get_articles_count().await.unwrap();
    assert_eq!(count, 2);

    // Deleting an absent id is a no-op, not an error.
    services.articles.delete(id).await.unwrap();
}

#[tokio::test]
async fn navigation_skips_blind_articles() {
    let services = support::make_services().await;

    // Articles 1..=100, with ids 11..=20 blinded at creation.
    let mut ids = Vec::new();
    for no in 1..=100 {
        let is_blind = (11..=20).contains(&no);
        let id = services
            .articles
            .write(format!("title{no}"), format!("body{no}"), is_blind)
            .await
            .unwrap();
        ids.push(id);
    }
    assert_eq!(ids[0], 1);
    assert_eq!(ids[99], 100);

    let prev = services.articles.get_prev_article(2).await.unwrap();
    assert_eq!(prev.unwrap().id, 1);

    let none = services.articles.get_prev_article(1).await.unwrap();
    assert!(none.is_none());

    let next = services.articles.get_next_article(2).await.unwrap();
    assert_eq!(next.unwrap().id, 3);

    let none = services.articles.get_next_article(100).await.unwrap();
    assert!(none.is_none());

    // Blinded ids 11..=20 are stepped over entirely.
    let next = services.articles.get_next_article(10).await.unwrap();
    assert_eq!(next.unwrap().id, 21);

    let prev = services.articles.get_prev_article(21).await.unwrap();
    assert_eq!(prev.unwrap().id, 10);
}

#[tokio::test]
async fn prev_article_of_dto_extracts_the_id() {
    let services = support::make_services().await;
    let ids = support::seed_articles(&services).await;

    let second = services
        .articles
        .get_article_by_id(ids[1])
        .await
        .unwrap()
        .unwrap();

    let prev = services
        .articles
        .get_prev_article_of(&second)
        .await
        .unwrap()
        .expect("first article");
    assert_eq!(prev.id, ids[0]);
}

#[tokio::test]
async fn fallback_id_lookup_is_a_miss_not_an_error() {
    let services = support::make_services().await;
    support::seed_articles(&services).await;

    // -1 is the controllers' fallback for malformed ids; the store never
    // issues it, so it reads like any other absent id.
    let absent = services.articles.get_article_by_id(-1).await.unwrap();
    assert!(absent.is_none());

    let prev = services.articles.get_prev_article(-1).await.unwrap();
    assert!(prev.is_none());
}

#[tokio::test]
async fn fallback_id_mutations_are_noops() {
    let services = support::make_services().await;
    support::seed_articles(&services).await;

    services.articles.delete(-1).await.unwrap();

    let affected = services
        .articles
        .modify(-1, "title", "body", false)
        .await
        .unwrap();
    assert_eq!(affected, 0);

    let count = services.articles.get_articles_count().await.unwrap();
    assert_eq!(count, 3);
}

#[tokio::test]
async fn blank_title_is_rejected() {
    let services = support::make_services().await;

    let err = services.articles.write("   ", "body", false).await;
    assert!(err.is_err());
}
