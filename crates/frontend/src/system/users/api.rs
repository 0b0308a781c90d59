use contracts::system::users::{NewUser, UpdateUser, User, UsersResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, bearer, check, ApiError};

pub async fn fetch_users(token: &str) -> Result<Vec<User>, ApiError> {
    let response = Request::get(&api_url("/users"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = check(response).await?;

    response
        .json::<UsersResponse>()
        .await
        .map(|body| body.users)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn add_user(token: &str, username: String, password: String) -> Result<(), ApiError> {
    let payload = NewUser {
        username,
        password,
        role: "reader".to_string(),
    };
    let response = Request::post(&api_url("/users"))
        .header("Authorization", &bearer(token))
        .json(&payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await?;
    Ok(())
}

pub async fn update_user(
    token: &str,
    user_id: i64,
    username: String,
    password: String,
) -> Result<(), ApiError> {
    let payload = UpdateUser { username, password };
    let response = Request::put(&api_url(&format!("/users/{}", user_id)))
        .header("Authorization", &bearer(token))
        .json(&payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await?;
    Ok(())
}

pub async fn delete_user(token: &str, user_id: i64) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&format!("/users/{}", user_id)))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await?;
    Ok(())
}
