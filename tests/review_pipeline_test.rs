mod common;

use reviewsense_backend::errors::{AdminError, AuthError};

#[tokio::test]
async fn end_to_end_register_login_submit_and_review_history() {
    let app = common::setup_app().await;
    let auth = app.auth_coordinator();
    let reviews = app.review_coordinator();
    let admin = app.admin_coordinator();

    // Bootstrap the admin and the product catalog
    app.credential_store
        .ensure_admin("admin", "admin-pw")
        .await
        .expect("admin bootstrap should succeed");
    let admin_session = auth
        .login("admin", "admin-pw")
        .await
        .expect("admin login should succeed");
    assert!(admin_session.is_admin());

    let product_id = admin
        .add_product(&admin_session, "Espresso Machine")
        .await
        .expect("adding a product should succeed");

    // Register and sign in a regular user
    auth.register("alice", "pw123")
        .await
        .expect("registration should succeed");
    let session = auth
        .login("alice", "pw123")
        .await
        .expect("login should succeed");
    assert!(!session.is_admin());

    let failed = auth
        .login("alice", "wrong")
        .await
        .expect_err("wrong password must fail");
    assert!(matches!(failed, AuthError::InvalidCredentials));

    // The product catalog is visible to the user
    let products = reviews.products().await.expect("listing should succeed");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Espresso Machine");

    // Submit a review; the returned label comes from the model's label set
    let label = reviews
        .submit_review(&session, Some(product_id), "I loved it, excellent!", 5)
        .await
        .expect("submission should succeed");
    assert!(app.model.labels().iter().any(|l| l == label.as_str()));
    assert_eq!(label.as_str(), "positive");

    // The persisted row keeps the raw text and the predicted sentiment
    let history = reviews
        .history(&session)
        .await
        .expect("history should succeed");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].review_text, "I loved it, excellent!");
    assert_eq!(history[0].score, 5);
    assert_eq!(history[0].sentiment, label.as_str());

    // The admin sees the review with author and product context
    let all = admin
        .all_reviews(&admin_session)
        .await
        .expect("admin view should succeed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].username, "alice");
    assert_eq!(all[0].product_name, "Espresso Machine");
    assert_eq!(all[0].sentiment, label.as_str());

    // The regular session cannot use the privileged view
    let gate = admin.all_reviews(&session).await;
    assert!(matches!(gate, Err(AdminError::NotAuthorized)));
}

#[tokio::test]
async fn submissions_from_different_users_stay_separate() {
    let app = common::setup_app().await;
    let auth = app.auth_coordinator();
    let reviews = app.review_coordinator();
    let admin = app.admin_coordinator();

    app.credential_store
        .ensure_admin("admin", "admin-pw")
        .await
        .expect("admin bootstrap should succeed");
    let admin_session = auth
        .login("admin", "admin-pw")
        .await
        .expect("admin login should succeed");
    let product_id = admin
        .add_product(&admin_session, "Milk Frother")
        .await
        .expect("adding a product should succeed");

    for (user, text) in [("alice", "great, the best"), ("bob", "terrible, awful")] {
        auth.register(user, "pw123")
            .await
            .expect("registration should succeed");
        let session = auth
            .login(user, "pw123")
            .await
            .expect("login should succeed");
        reviews
            .submit_review(&session, Some(product_id), text, 3)
            .await
            .expect("submission should succeed");
    }

    let alice = auth
        .login("alice", "pw123")
        .await
        .expect("login should succeed");
    let history = reviews
        .history(&alice)
        .await
        .expect("history should succeed");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].review_text, "great, the best");

    let all = admin
        .all_reviews(&admin_session)
        .await
        .expect("admin view should succeed");
    assert_eq!(all.len(), 2);

    let distribution = admin
        .sentiment_distribution(&admin_session)
        .await
        .expect("distribution should succeed");
    let total: i64 = distribution.iter().map(|c| c.count).sum();
    assert_eq!(total, 2);
}
