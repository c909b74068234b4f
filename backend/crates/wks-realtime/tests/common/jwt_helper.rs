use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TestJwtClaims {
    sub: String,
    exp: u64,
    iat: u64,
}

/// Valid HS256 token whose subject is `user_id`
pub fn create_test_token(user_id: i64, jwt_secret: &[u8]) -> String {
    let now = now_secs();
    sign(user_id, now + Duration::from_secs(3600).as_secs(), now, jwt_secret)
}

/// Token that expired an hour ago
pub fn create_expired_token(user_id: i64, jwt_secret: &[u8]) -> String {
    let past = now_secs() - 3600;
    sign(user_id, past, past - 3600, jwt_secret)
}

fn sign(user_id: i64, exp: u64, iat: u64, jwt_secret: &[u8]) -> String {
    let claims = TestJwtClaims {
        sub: user_id.to_string(),
        exp,
        iat,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret),
    )
    .expect("Failed to encode JWT")
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}
