//! Typed fetch wrappers for the film endpoints.
//!
//! Every function takes the bearer token explicitly; nothing here reads
//! ambient session state. Non-2xx responses surface as [`ApiError`]; a 401
//! clears the stored token (see `shared::api_utils::check`). Asset uploads
//! are one multipart POST per file, awaited by the caller one at a time.

use contracts::domain::film::aggregate::{
    FilmDocument, FilmListItem, FilmRecord, FullFilmRecord, GalleryImage,
};
use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::shared::api_utils::{api_url, bearer, check, ApiError};

#[derive(Deserialize)]
struct FilmsListResponse {
    #[serde(default)]
    films: Vec<FilmListItem>,
}

#[derive(Deserialize)]
struct FullFilmsResponse {
    #[serde(default)]
    films: Vec<FullFilmRecord>,
}

#[derive(Deserialize)]
struct CreateFilmResponse {
    film_id: i64,
}

#[derive(Deserialize)]
struct PosterResponse {
    url: String,
}

#[derive(Deserialize)]
struct UploadPosterResponse {
    poster_url: String,
}

#[derive(Deserialize)]
struct GalleryResponse {
    #[serde(default)]
    images: Vec<GalleryImage>,
}

#[derive(Deserialize)]
struct UploadImageResponse {
    image_id: i64,
    url: String,
}

#[derive(Deserialize)]
struct DocumentsResponse {
    #[serde(default)]
    documents: Vec<FilmDocument>,
}

fn auth_request(method: &str, url: &str, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    let builder = match method {
        "GET" => Request::get(url),
        "DELETE" => Request::delete(url),
        _ => Request::post(url),
    };
    match token {
        Some(token) => builder.header("Authorization", &bearer(token)),
        None => builder,
    }
}

async fn get_json<T: for<'de> serde::Deserialize<'de>>(
    url: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let response = auth_request("GET", url, token)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = check(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

// --- Film list & details ---

pub async fn fetch_films(token: Option<&str>) -> Result<Vec<FilmListItem>, ApiError> {
    get_json::<FilmsListResponse>(&api_url("/films"), token)
        .await
        .map(|body| body.films)
}

/// Enriched record set consumed by the CSV export. Fetched fresh for every
/// export operation; nothing is cached.
pub async fn fetch_full_films(token: &str) -> Result<Vec<FullFilmRecord>, ApiError> {
    get_json::<FullFilmsResponse>(&api_url("/films/full"), Some(token))
        .await
        .map(|body| body.films)
}

/// Relational record, fetched fresh for every edit or view action.
pub async fn fetch_film(film_id: i64, token: Option<&str>) -> Result<FilmRecord, ApiError> {
    get_json(&api_url(&format!("/films/{}", film_id)), token).await
}

// --- Film CRUD ---

/// Create a film from the persistence payload. The returned id is required
/// before any asset upload can target the new film.
pub async fn create_film(payload: &serde_json::Value, token: &str) -> Result<i64, ApiError> {
    let response = Request::post(&api_url("/films"))
        .header("Authorization", &bearer(token))
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = check(response).await?;
    response
        .json::<CreateFilmResponse>()
        .await
        .map(|body| body.film_id)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn update_film(
    film_id: i64,
    payload: &serde_json::Value,
    token: &str,
) -> Result<(), ApiError> {
    let response = Request::put(&api_url(&format!("/films/{}", film_id)))
        .header("Authorization", &bearer(token))
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await?;
    Ok(())
}

pub async fn delete_film(film_id: i64, token: &str) -> Result<(), ApiError> {
    let response = auth_request("DELETE", &api_url(&format!("/films/{}", film_id)), Some(token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await?;
    Ok(())
}

// --- Asset uploads (single-file multipart, one call per file) ---

fn multipart(field: &str, file: &File) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    form.append_with_blob(field, file)
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    Ok(form)
}

async fn upload<T: for<'de> serde::Deserialize<'de>>(
    url: &str,
    field: &str,
    file: &File,
    token: &str,
) -> Result<T, ApiError> {
    let form = multipart(field, file)?;
    let response = Request::post(url)
        .header("Authorization", &bearer(token))
        .body(JsValue::from(form))
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = check(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn fetch_poster(film_id: i64) -> Result<Option<String>, ApiError> {
    match get_json::<PosterResponse>(&api_url(&format!("/films/{}/poster", film_id)), None).await {
        Ok(body) => Ok(Some(body.url)),
        // Absent poster is a normal state, not an error.
        Err(ApiError::Http { status: 404, .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn upload_poster(film_id: i64, file: &File, token: &str) -> Result<String, ApiError> {
    upload::<UploadPosterResponse>(
        &api_url(&format!("/films/{}/poster", film_id)),
        "poster",
        file,
        token,
    )
    .await
    .map(|body| body.poster_url)
}

pub async fn delete_poster(film_id: i64, token: &str) -> Result<(), ApiError> {
    let response = auth_request(
        "DELETE",
        &api_url(&format!("/films/{}/poster", film_id)),
        Some(token),
    )
    .send()
    .await
    .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await?;
    Ok(())
}

pub async fn fetch_gallery(film_id: i64) -> Result<Vec<GalleryImage>, ApiError> {
    get_json::<GalleryResponse>(&api_url(&format!("/films/{}/gallery", film_id)), None)
        .await
        .map(|body| body.images)
}

pub async fn upload_gallery_image(
    film_id: i64,
    file: &File,
    token: &str,
) -> Result<GalleryImage, ApiError> {
    upload::<UploadImageResponse>(
        &api_url(&format!("/films/{}/gallery", film_id)),
        "image",
        file,
        token,
    )
    .await
    .map(|body| GalleryImage {
        image_id: body.image_id,
        url: body.url,
    })
}

pub async fn delete_gallery_image(film_id: i64, image_id: i64, token: &str) -> Result<(), ApiError> {
    let response = auth_request(
        "DELETE",
        &api_url(&format!("/films/{}/gallery/{}", film_id, image_id)),
        Some(token),
    )
    .send()
    .await
    .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await?;
    Ok(())
}

pub async fn fetch_documents(film_id: i64, token: &str) -> Result<Vec<FilmDocument>, ApiError> {
    get_json::<DocumentsResponse>(
        &api_url(&format!("/films/{}/documents", film_id)),
        Some(token),
    )
    .await
    .map(|body| body.documents)
}

pub async fn upload_document(
    film_id: i64,
    file: &File,
    token: &str,
) -> Result<FilmDocument, ApiError> {
    upload(
        &api_url(&format!("/films/{}/documents", film_id)),
        "document",
        file,
        token,
    )
    .await
}

pub async fn delete_document(film_id: i64, document_id: i64, token: &str) -> Result<(), ApiError> {
    let response = auth_request(
        "DELETE",
        &api_url(&format!("/films/{}/documents/{}", film_id, document_id)),
        Some(token),
    )
    .send()
    .await
    .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await?;
    Ok(())
}
