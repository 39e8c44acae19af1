use crate::config::Config;
use crate::errors::AppError;
use crate::models::*;
use crate::normalizer::normalize;
use crate::search_kind::SearchKind;
use crate::upstream_client::EnformionClient;
use crate::validation::CriteriaCheck;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
///
/// Immutable after startup; requests never share mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the upstream search API.
    pub client: EnformionClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let client = EnformionClient::new(&config.credentials, config.upstream_timeout)?;
        Ok(Self { config, client })
    }
}

type SearchResult = Result<Response, AppError>;

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Runs one search through parse → search type → criteria → normalize → upstream.
///
/// Everything before the upstream call is local, so malformed or
/// under-specified requests never reach the network.
async fn forward<T>(
    kind: SearchKind,
    state: &AppState,
    headers: &HeaderMap,
    body: Result<Json<T>, JsonRejection>,
) -> SearchResult
where
    T: CriteriaCheck + Serialize,
{
    let Json(request) = body.map_err(AppError::from)?;
    let search_type = kind.resolve_search_type(headers)?;

    request.check_criteria()?;

    let payload = normalize(&request)?;
    let url = kind.upstream_url(&state.config.urls);

    tracing::info!(
        "POST {} -> {} (search type: {}, {} field(s))",
        kind.route(),
        url,
        search_type,
        payload.len()
    );

    let upstream_body = state.client.search(url, &search_type, &payload).await?;

    tracing::debug!(
        "{} answered with {} byte(s)",
        kind.route(),
        upstream_body.len()
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        upstream_body,
    )
        .into_response())
}

// ============ Dev APIs (Single Result) ============

/// POST /contact-enrichment
///
/// Requires at least two of: name, phone, address, email.
pub async fn contact_enrichment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<ContactEnrichmentRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::ContactEnrichment, &state, &headers, body).await
}

/// POST /caller-id
pub async fn caller_id(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<CallerIdRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::CallerId, &state, &headers, body).await
}

/// POST /email-id
pub async fn email_id(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<EmailIdRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::EmailId, &state, &headers, body).await
}

/// POST /contact-id
pub async fn contact_id(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<ContactIdRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::ContactId, &state, &headers, body).await
}

/// POST /address-id
///
/// Current owners or residents of a property.
pub async fn address_id(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<AddressIdRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::AddressId, &state, &headers, body).await
}

/// POST /address-autocomplete
pub async fn address_autocomplete(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<AddressAutoCompleteRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::AddressAutoComplete, &state, &headers, body).await
}

// ============ People Data ============

/// POST /person-search
///
/// `galaxy-search-type` may be `Person` (default) or `Teaser`.
pub async fn person_search(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<PersonSearchRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::PersonSearch, &state, &headers, body).await
}

/// POST /reverse-phone-search
pub async fn reverse_phone_search(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<ReversePhoneSearchRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::ReversePhone, &state, &headers, body).await
}

/// POST /id-verification
///
/// Requires at least two of: SSN, name, phones, address, emails.
pub async fn id_verification(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<IdVerificationRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::IdVerification, &state, &headers, body).await
}

/// POST /census-search
///
/// Historical population data; a city or county needs a state.
pub async fn census_search(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<CensusSearchRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::CensusSearch, &state, &headers, body).await
}

/// POST /divorce-search
pub async fn divorce_search(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<DivorceSearchRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::DivorceSearch, &state, &headers, body).await
}

/// POST /linkedin-id
pub async fn linkedin_id(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<LinkedInIdRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::LinkedInId, &state, &headers, body).await
}

// ============ Property Data ============

/// POST /property-search-v2
///
/// `galaxy-search-type` header is required.
pub async fn property_search_v2(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<PropertySearchV2Request>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::PropertySearchV2, &state, &headers, body).await
}

// ============ Business Data ============

/// POST /business-search
///
/// Same upstream as `/business-search-v2` with the search type pinned to `Business`.
pub async fn business_search(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<BusinessSearchRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::BusinessSearch, &state, &headers, body).await
}

/// POST /business-search-v2
pub async fn business_search_v2(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<BusinessSearchRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::BusinessSearchV2, &state, &headers, body).await
}

/// POST /domain-search
pub async fn domain_search(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<DomainSearchRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::DomainSearch, &state, &headers, body).await
}

/// POST /workplace-search
pub async fn workplace_search(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<WorkplaceSearchRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::WorkplaceSearch, &state, &headers, body).await
}

/// POST /business-id
pub async fn business_id(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<BusinessIdRequest>, JsonRejection>,
) -> SearchResult {
    forward(SearchKind::BusinessId, &state, &headers, body).await
}
