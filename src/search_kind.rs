use crate::config::UpstreamUrls;
use crate::errors::AppError;
use axum::http::HeaderMap;

/// Header carrying the search-type discriminator, inbound and upstream.
pub const SEARCH_TYPE_HEADER: &str = "galaxy-search-type";

/// Where the `galaxy-search-type` value for an endpoint comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTypeSource {
    /// Always the same value; any caller header is ignored.
    Fixed(&'static str),
    /// Caller header restricted to `allowed`, `default` when absent.
    HeaderOrDefault {
        default: &'static str,
        allowed: &'static [&'static str],
    },
    /// Caller must supply the header.
    HeaderRequired,
}

/// Every endpoint the proxy serves, one per upstream sub-mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    PersonSearch,
    ReversePhone,
    ContactEnrichment,
    CallerId,
    EmailId,
    ContactId,
    AddressId,
    AddressAutoComplete,
    IdVerification,
    CensusSearch,
    DivorceSearch,
    LinkedInId,
    PropertySearchV2,
    BusinessSearch,
    BusinessSearchV2,
    DomainSearch,
    WorkplaceSearch,
    BusinessId,
}

impl SearchKind {
    pub const ALL: [SearchKind; 18] = [
        SearchKind::PersonSearch,
        SearchKind::ReversePhone,
        SearchKind::ContactEnrichment,
        SearchKind::CallerId,
        SearchKind::EmailId,
        SearchKind::ContactId,
        SearchKind::AddressId,
        SearchKind::AddressAutoComplete,
        SearchKind::IdVerification,
        SearchKind::CensusSearch,
        SearchKind::DivorceSearch,
        SearchKind::LinkedInId,
        SearchKind::PropertySearchV2,
        SearchKind::BusinessSearch,
        SearchKind::BusinessSearchV2,
        SearchKind::DomainSearch,
        SearchKind::WorkplaceSearch,
        SearchKind::BusinessId,
    ];

    /// Path the proxy serves this kind on.
    pub fn route(self) -> &'static str {
        match self {
            SearchKind::PersonSearch => "/person-search",
            SearchKind::ReversePhone => "/reverse-phone-search",
            SearchKind::ContactEnrichment => "/contact-enrichment",
            SearchKind::CallerId => "/caller-id",
            SearchKind::EmailId => "/email-id",
            SearchKind::ContactId => "/contact-id",
            SearchKind::AddressId => "/address-id",
            SearchKind::AddressAutoComplete => "/address-autocomplete",
            SearchKind::IdVerification => "/id-verification",
            SearchKind::CensusSearch => "/census-search",
            SearchKind::DivorceSearch => "/divorce-search",
            SearchKind::LinkedInId => "/linkedin-id",
            SearchKind::PropertySearchV2 => "/property-search-v2",
            SearchKind::BusinessSearch => "/business-search",
            SearchKind::BusinessSearchV2 => "/business-search-v2",
            SearchKind::DomainSearch => "/domain-search",
            SearchKind::WorkplaceSearch => "/workplace-search",
            SearchKind::BusinessId => "/business-id",
        }
    }

    pub fn search_type_source(self) -> SearchTypeSource {
        match self {
            SearchKind::PersonSearch => SearchTypeSource::HeaderOrDefault {
                default: "Person",
                allowed: &["Person", "Teaser"],
            },
            SearchKind::ReversePhone => SearchTypeSource::Fixed("ReversePhone"),
            SearchKind::ContactEnrichment => SearchTypeSource::Fixed("DevAPIContactEnrich"),
            SearchKind::CallerId => SearchTypeSource::Fixed("DevAPICallerID"),
            SearchKind::EmailId => SearchTypeSource::Fixed("DevAPIEmailID"),
            SearchKind::ContactId => SearchTypeSource::Fixed("DevAPIContactID"),
            SearchKind::AddressId => SearchTypeSource::Fixed("DevAPIAddressID"),
            SearchKind::AddressAutoComplete => {
                SearchTypeSource::Fixed("DevAPIAddressAutoComplete")
            }
            SearchKind::IdVerification => SearchTypeSource::Fixed("DevAPIIDVerification"),
            SearchKind::CensusSearch => SearchTypeSource::Fixed("Census"),
            SearchKind::DivorceSearch => SearchTypeSource::Fixed("Divorce"),
            SearchKind::LinkedInId => SearchTypeSource::Fixed("LinkedinID"),
            SearchKind::BusinessSearch => SearchTypeSource::Fixed("Business"),
            SearchKind::PropertySearchV2
            | SearchKind::BusinessSearchV2
            | SearchKind::DomainSearch
            | SearchKind::WorkplaceSearch
            | SearchKind::BusinessId => SearchTypeSource::HeaderRequired,
        }
    }

    pub fn upstream_url(self, urls: &UpstreamUrls) -> &str {
        match self {
            SearchKind::PersonSearch => &urls.person_search,
            SearchKind::ReversePhone => &urls.reverse_phone,
            SearchKind::ContactEnrichment => &urls.contact_enrichment,
            SearchKind::CallerId => &urls.caller_id,
            SearchKind::EmailId => &urls.email_id,
            SearchKind::ContactId => &urls.contact_id,
            SearchKind::AddressId => &urls.address_id,
            SearchKind::AddressAutoComplete => &urls.address_autocomplete,
            SearchKind::IdVerification => &urls.id_verification,
            SearchKind::CensusSearch => &urls.census_search,
            SearchKind::DivorceSearch => &urls.divorce_search,
            SearchKind::LinkedInId => &urls.linkedin_id,
            SearchKind::PropertySearchV2 => &urls.property_search_v2,
            SearchKind::BusinessSearch | SearchKind::BusinessSearchV2 => &urls.business_search_v2,
            SearchKind::DomainSearch => &urls.domain_search,
            SearchKind::WorkplaceSearch => &urls.workplace_search,
            SearchKind::BusinessId => &urls.business_id,
        }
    }

    /// Picks the discriminator to send upstream for this call.
    pub fn resolve_search_type(self, headers: &HeaderMap) -> Result<String, AppError> {
        match self.search_type_source() {
            SearchTypeSource::Fixed(value) => Ok(value.to_string()),
            SearchTypeSource::HeaderOrDefault { default, allowed } => {
                match header_value(headers)? {
                    None => Ok(default.to_string()),
                    Some(value) if allowed.contains(&value.as_str()) => Ok(value),
                    Some(value) => Err(AppError::InvalidRequest(format!(
                        "Header '{}' must be one of {:?}, got '{}'",
                        SEARCH_TYPE_HEADER, allowed, value
                    ))),
                }
            }
            SearchTypeSource::HeaderRequired => header_value(headers)?.ok_or_else(|| {
                AppError::InvalidRequest(format!(
                    "Header '{}' is required for {}",
                    SEARCH_TYPE_HEADER,
                    self.route()
                ))
            }),
        }
    }
}

/// Reads the discriminator header, treating an empty value as absent.
fn header_value(headers: &HeaderMap) -> Result<Option<String>, AppError> {
    let Some(raw) = headers.get(SEARCH_TYPE_HEADER) else {
        return Ok(None);
    };

    let value = raw.to_str().map_err(|_| {
        AppError::InvalidRequest(format!(
            "Header '{}' must be visible ASCII",
            SEARCH_TYPE_HEADER
        ))
    })?;

    let value = value.trim();
    if value.is_empty() {
        Ok(None)
    } else {
        Ok(Some(value.to_string()))
    }
}
