use crate::handlers::{self, AppState};
use crate::search_kind::SearchKind;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Builds the full HTTP surface: one POST route per search kind plus `/health`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    let search_routes = Router::new()
        // Dev APIs (single result)
        .route(
            SearchKind::ContactEnrichment.route(),
            post(handlers::contact_enrichment),
        )
        .route(SearchKind::CallerId.route(), post(handlers::caller_id))
        .route(SearchKind::EmailId.route(), post(handlers::email_id))
        .route(SearchKind::ContactId.route(), post(handlers::contact_id))
        .route(SearchKind::AddressId.route(), post(handlers::address_id))
        .route(
            SearchKind::AddressAutoComplete.route(),
            post(handlers::address_autocomplete),
        )
        // People data
        .route(SearchKind::PersonSearch.route(), post(handlers::person_search))
        .route(
            SearchKind::ReversePhone.route(),
            post(handlers::reverse_phone_search),
        )
        .route(
            SearchKind::IdVerification.route(),
            post(handlers::id_verification),
        )
        .route(SearchKind::CensusSearch.route(), post(handlers::census_search))
        .route(
            SearchKind::DivorceSearch.route(),
            post(handlers::divorce_search),
        )
        .route(SearchKind::LinkedInId.route(), post(handlers::linkedin_id))
        // Property data
        .route(
            SearchKind::PropertySearchV2.route(),
            post(handlers::property_search_v2),
        )
        // Business data
        .route(
            SearchKind::BusinessSearch.route(),
            post(handlers::business_search),
        )
        .route(
            SearchKind::BusinessSearchV2.route(),
            post(handlers::business_search_v2),
        )
        .route(SearchKind::DomainSearch.route(), post(handlers::domain_search))
        .route(
            SearchKind::WorkplaceSearch.route(),
            post(handlers::workplace_search),
        )
        .route(SearchKind::BusinessId.route(), post(handlers::business_id))
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(max_body_bytes)));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(search_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
