//! API integration tests
//!
//! These tests require:
//! - Running PostgreSQL instance (migrations are applied on startup)
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    check_test_env, count_users_named, fixtures::*, set_role, test_pool, TestServer,
};
use reqwest::Client;
use serde_json::json;

/// Register a user through an arbitrary client, returning the payload
async fn register_on(client: &Client, base: &str, body: &RegisterBody) -> UserBody {
    let envelope: UserEnvelope = client
        .post(format!("{base}/api/v1/account/register"))
        .json(body)
        .send()
        .await
        .expect("register request failed")
        .json()
        .await
        .expect("register response was not an envelope");
    envelope.expect_user().clone()
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_eq!(response.status(), 200);
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_sets_session_and_returns_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let body = RegisterBody::unique();

    let envelope: UserEnvelope = server
        .post("/api/v1/account/register", &body)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let user = envelope.expect_user();
    assert_eq!(user.username, body.username);
    assert_eq!(user.display_name, body.username);
    assert_eq!(user.role, "user");

    // The cookie from registration authenticates /account/me
    let me: UserEnvelope = server
        .get("/api/v1/account/me")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(me.expect_user().username, body.username);
}

#[tokio::test]
async fn test_register_duplicate_username_is_409_and_single_row() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let body = RegisterBody::unique();

    server
        .post("/api/v1/account/register", &body)
        .await
        .unwrap();

    // Same username, different email
    let mut second = body.clone();
    second.email = format!("other-{}", body.email);

    let envelope: UserEnvelope = server
        .post("/api/v1/account/register", &second)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let error = envelope.error();
    assert_eq!(error.code, 409);
    assert_eq!(error.message, "username already taken");

    let pool = test_pool().await.unwrap();
    assert_eq!(count_users_named(&pool, &body.username).await.unwrap(), 1);
}

#[tokio::test]
async fn test_register_duplicate_email_is_409() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let body = RegisterBody::unique();
    server
        .post("/api/v1/account/register", &body)
        .await
        .unwrap();

    let mut second = RegisterBody::unique();
    second.email = body.email.clone();

    let envelope: UserEnvelope = server
        .post("/api/v1/account/register", &second)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(envelope.error().code, 409);
    assert_eq!(envelope.error().message, "email already taken");
}

#[tokio::test]
async fn test_register_rejects_malformed_email_before_persisting() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let mut body = RegisterBody::unique();
    body.email = "not-an-email".to_string();

    let envelope: UserEnvelope = server
        .post("/api/v1/account/register", &body)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(envelope.error().code, 400);
    assert_eq!(envelope.error().message, "invalid email");

    let pool = test_pool().await.unwrap();
    assert_eq!(count_users_named(&pool, &body.username).await.unwrap(), 0);
}

#[tokio::test]
async fn test_register_rejects_short_username_and_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();

    let mut body = RegisterBody::unique();
    body.username = "ab".to_string();
    let envelope: UserEnvelope = server
        .post("/api/v1/account/register", &body)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.error().code, 400);
    assert_eq!(
        envelope.error().message,
        "username length must be greater than 2"
    );

    let mut body = RegisterBody::unique();
    body.password = "ab".to_string();
    let envelope: UserEnvelope = server
        .post("/api/v1/account/register", &body)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.error().code, 400);
    assert_eq!(
        envelope.error().message,
        "password length must be greater than 2"
    );
}

// ============================================================================
// Login / logout
// ============================================================================

#[tokio::test]
async fn test_login_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let body = RegisterBody::unique();
    register_on(&server.client, &server.base_url(), &body).await;

    // A fresh client has no session
    let other = server.new_client().unwrap();
    let me: UserEnvelope = other
        .get(format!("{}/api/v1/account/me", server.base_url()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(me.user.is_none());
    assert!(me.errors.is_none());

    // Login binds one
    let envelope: UserEnvelope = other
        .post(format!("{}/api/v1/account/login", server.base_url()))
        .json(&LoginBody::from_register(&body))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.expect_user().username, body.username);

    let me: UserEnvelope = other
        .get(format!("{}/api/v1/account/me", server.base_url()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(me.expect_user().username, body.username);
}

#[tokio::test]
async fn test_login_unknown_username_is_400() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let login = LoginBody {
        username: format!("missing{}", unique_suffix()),
        password: "whatever".to_string(),
    };

    let envelope: UserEnvelope = server
        .post("/api/v1/account/login", &login)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(envelope.error().code, 400);
    assert_eq!(envelope.error().message, "username doesn't exist");
}

#[tokio::test]
async fn test_login_wrong_password_is_401_and_binds_no_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let body = RegisterBody::unique();
    register_on(&server.client, &server.base_url(), &body).await;

    let other = server.new_client().unwrap();
    let envelope: UserEnvelope = other
        .post(format!("{}/api/v1/account/login", server.base_url()))
        .json(&LoginBody {
            username: body.username.clone(),
            password: "wrong-password".to_string(),
        })
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(envelope.error().code, 401);
    assert_eq!(envelope.error().message, "incorrect password");

    // No session was created or mutated
    let me: UserEnvelope = other
        .get(format!("{}/api/v1/account/me", server.base_url()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(me.user.is_none());
}

#[tokio::test]
async fn test_logout_resolves_true_and_clears_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let body = RegisterBody::unique();
    register_on(&server.client, &server.base_url(), &body).await;

    let ok: bool = server
        .post("/api/v1/account/logout", &json!({}))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(ok);

    let me: UserEnvelope = server
        .get("/api/v1/account/me")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(me.user.is_none());
}

// ============================================================================
// User queries and updates
// ============================================================================

#[tokio::test]
async fn test_user_lookup_by_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let body = RegisterBody::unique();
    let created = register_on(&server.client, &server.base_url(), &body).await;

    let envelope: UserEnvelope = server
        .get(&format!("/api/v1/users/{}", created.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.expect_user().id, created.id);

    // Unknown id is an empty envelope, not an error
    let envelope: UserEnvelope = server
        .get(&format!("/api/v1/users/{}", uuid::Uuid::new_v4()))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(envelope.user.is_none());
    assert!(envelope.errors.is_none());

    // Malformed id is in-band 400
    let envelope: UserEnvelope = server
        .get("/api/v1/users/not-a-uuid")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.error().code, 400);
    assert_eq!(envelope.error().message, "invalid user id");
}

#[tokio::test]
async fn test_update_user_patches_profile_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let body = RegisterBody::unique();
    register_on(&server.client, &server.base_url(), &body).await;

    let envelope: UserEnvelope = server
        .patch(
            "/api/v1/account",
            &json!({"displayName": "Updated Name", "status": "away"}),
        )
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let user = envelope.expect_user();
    assert_eq!(user.display_name, "Updated Name");
    assert_eq!(user.status, "away");
    // Untouched fields survive
    assert_eq!(user.username, body.username);
}

#[tokio::test]
async fn test_update_user_requires_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let other = server.new_client().unwrap();

    let envelope: UserEnvelope = other
        .patch(format!("{}/api/v1/account", server.base_url()))
        .json(&json!({"status": "away"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(envelope.error().code, 401);
    assert_eq!(envelope.error().message, "not authenticated");
}

// ============================================================================
// Deletion and the role hierarchy
// ============================================================================

#[tokio::test]
async fn test_plain_user_cannot_delete_others_regardless_of_target_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let base = server.base_url();

    let target_body = RegisterBody::unique();
    let target = register_on(&server.new_client().unwrap(), &base, &target_body).await;

    // Actor stays a plain user
    register_on(&server.client, &base, &RegisterBody::unique()).await;

    let envelope: UserEnvelope = server
        .delete(&format!("/api/v1/users/{}", target.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(envelope.error().code, 403);
    assert_eq!(envelope.error().message, "forbidden");
}

#[tokio::test]
async fn test_moderator_deletes_user_but_not_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let base = server.base_url();
    let pool = test_pool().await.unwrap();

    let moderator = register_on(&server.client, &base, &RegisterBody::unique()).await;
    set_role(&pool, &moderator.id, "moderator").await.unwrap();

    let plain = register_on(&server.new_client().unwrap(), &base, &RegisterBody::unique()).await;

    let admin = register_on(&server.new_client().unwrap(), &base, &RegisterBody::unique()).await;
    set_role(&pool, &admin.id, "administrator").await.unwrap();

    // Moderator deletes a plain user
    let envelope: UserEnvelope = server
        .delete(&format!("/api/v1/users/{}", plain.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.expect_user().id, plain.id);

    // Moderator cannot delete an administrator
    let envelope: UserEnvelope = server
        .delete(&format!("/api/v1/users/{}", admin.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.error().code, 403);
    assert_eq!(envelope.error().message, "forbidden");
}

#[tokio::test]
async fn test_self_deletion_is_unconditional() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let me = register_on(&server.client, &server.base_url(), &RegisterBody::unique()).await;

    let envelope: UserEnvelope = server
        .delete(&format!("/api/v1/users/{}", me.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.expect_user().id, me.id);

    // The row is gone
    let lookup: UserEnvelope = server
        .get(&format!("/api/v1/users/{}", me.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(lookup.user.is_none());
}

// ============================================================================
// Bans
// ============================================================================

#[tokio::test]
async fn test_ban_locks_out_gated_operations_until_unban() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let base = server.base_url();
    let pool = test_pool().await.unwrap();

    let moderator = register_on(&server.client, &base, &RegisterBody::unique()).await;
    set_role(&pool, &moderator.id, "moderator").await.unwrap();

    let victim_client = server.new_client().unwrap();
    let victim = register_on(&victim_client, &base, &RegisterBody::unique()).await;

    // Ban
    let envelope: UserEnvelope = server
        .post("/api/v1/bans", &json!({"userId": victim.id, "reason": "spam"}))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.expect_user().id, victim.id);

    // Banned: me (if-authenticated check) refuses
    let me: UserEnvelope = victim_client
        .get(format!("{base}/api/v1/account/me"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(me.error().code, 403);
    assert_eq!(me.error().message, "you are banned");

    // Banned: mandatory-guarded mutation refuses
    let update: UserEnvelope = victim_client
        .patch(format!("{base}/api/v1/account"))
        .json(&json!({"status": "still here"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(update.error().code, 403);

    // Unban restores access
    let envelope: UserEnvelope = server
        .delete(&format!("/api/v1/bans/{}", victim.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.expect_user().id, victim.id);

    let me: UserEnvelope = victim_client
        .get(format!("{base}/api/v1/account/me"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(me.expect_user().id, victim.id);
}

#[tokio::test]
async fn test_plain_user_cannot_ban() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let base = server.base_url();

    register_on(&server.client, &base, &RegisterBody::unique()).await;
    let target = register_on(&server.new_client().unwrap(), &base, &RegisterBody::unique()).await;

    let envelope: UserEnvelope = server
        .post("/api/v1/bans", &json!({"userId": target.id}))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(envelope.error().code, 403);
    assert_eq!(envelope.error().message, "forbidden");
}

#[tokio::test]
async fn test_unban_without_ban_is_400() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let base = server.base_url();
    let pool = test_pool().await.unwrap();

    let moderator = register_on(&server.client, &base, &RegisterBody::unique()).await;
    set_role(&pool, &moderator.id, "moderator").await.unwrap();

    let target = register_on(&server.new_client().unwrap(), &base, &RegisterBody::unique()).await;

    let envelope: UserEnvelope = server
        .delete(&format!("/api/v1/bans/{}", target.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(envelope.error().code, 400);
    assert_eq!(envelope.error().message, "user isn't banned");
}

// ============================================================================
// Blocks and follows
// ============================================================================

#[tokio::test]
async fn test_block_gates_follows_and_messages_both_directions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let base = server.base_url();

    let alice = register_on(&server.client, &base, &RegisterBody::unique()).await;
    let bob_client = server.new_client().unwrap();
    let bob = register_on(&bob_client, &base, &RegisterBody::unique()).await;

    // Alice blocks Bob
    let envelope: UserEnvelope = server
        .post("/api/v1/blocks", &json!({"userId": bob.id}))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.expect_user().id, bob.id);

    // Bob cannot follow Alice (block is directionless for interaction)
    let follow: UserEnvelope = bob_client
        .post(format!("{base}/api/v1/follows"))
        .json(&json!({"userId": alice.id}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(follow.error().code, 403);
    assert_eq!(follow.error().message, "you cannot interact with this user");

    // Alice cannot message Bob either
    let message: MessageEnvelope = server
        .post(
            "/api/v1/messages",
            &json!({"recipientId": bob.id, "content": "hello?"}),
        )
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(message.errors.unwrap()[0].code, 403);

    // Unblock restores interaction
    let envelope: UserEnvelope = server
        .delete(&format!("/api/v1/blocks/{}", bob.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.expect_user().id, bob.id);

    let follow: UserEnvelope = bob_client
        .post(format!("{base}/api/v1/follows"))
        .json(&json!({"userId": alice.id}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(follow.expect_user().id, alice.id);
}

#[tokio::test]
async fn test_cannot_block_self() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let me = register_on(&server.client, &server.base_url(), &RegisterBody::unique()).await;

    let envelope: UserEnvelope = server
        .post("/api/v1/blocks", &json!({"userId": me.id}))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(envelope.error().code, 400);
    assert_eq!(envelope.error().message, "you cannot block yourself");
}

#[tokio::test]
async fn test_duplicate_follows_all_removed_by_one_unfollow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let base = server.base_url();

    register_on(&server.client, &base, &RegisterBody::unique()).await;
    let target = register_on(&server.new_client().unwrap(), &base, &RegisterBody::unique()).await;

    // Follow twice: both edges are accepted
    for _ in 0..2 {
        let envelope: UserEnvelope = server
            .post("/api/v1/follows", &json!({"userId": target.id}))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(envelope.expect_user().id, target.id);
    }

    // The followers list is distinct
    let followers: UsersEnvelope = server
        .get(&format!("/api/v1/users/{}/followers", target.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(followers.users.unwrap().len(), 1);

    // One unfollow removes every edge
    let envelope: UserEnvelope = server
        .delete(&format!("/api/v1/follows/{}", target.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.expect_user().id, target.id);

    // A second unfollow finds nothing
    let envelope: UserEnvelope = server
        .delete(&format!("/api/v1/follows/{}", target.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.error().code, 400);
    assert_eq!(envelope.error().message, "you aren't following this user");
}

// ============================================================================
// Direct messages
// ============================================================================

#[tokio::test]
async fn test_direct_message_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let base = server.base_url();

    let alice = register_on(&server.client, &base, &RegisterBody::unique()).await;
    let bob_client = server.new_client().unwrap();
    let bob = register_on(&bob_client, &base, &RegisterBody::unique()).await;

    let sent: MessageEnvelope = server
        .post(
            "/api/v1/messages",
            &json!({"recipientId": bob.id, "content": "hi bob"}),
        )
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let message = sent.message.expect("expected message");
    assert_eq!(message.content, "hi bob");
    assert_eq!(message.sender_id, alice.id);

    let reply: MessageEnvelope = bob_client
        .post(format!("{base}/api/v1/messages"))
        .json(&json!({"recipientId": alice.id, "content": "hi alice"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(reply.errors.is_none());

    // Both sides see the conversation oldest-first
    let conversation: MessagesEnvelope = server
        .get(&format!("/api/v1/messages/{}", bob.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let messages = conversation.messages.expect("expected messages");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, "hi bob");
    assert_eq!(messages[1].content, "hi alice");
}

#[tokio::test]
async fn test_empty_message_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let base = server.base_url();

    register_on(&server.client, &base, &RegisterBody::unique()).await;
    let target = register_on(&server.new_client().unwrap(), &base, &RegisterBody::unique()).await;

    let envelope: MessageEnvelope = server
        .post(
            "/api/v1/messages",
            &json!({"recipientId": target.id, "content": "   "}),
        )
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let errors = envelope.errors.unwrap();
    assert_eq!(errors[0].code, 400);
    assert_eq!(errors[0].message, "message must not be empty");
}
