//! Request shapes for every search endpoint.
//!
//! Each struct doubles as the field table for its endpoint: the Rust field
//! name is the caller-facing logical name, `alias` accepts the upstream
//! spelling on input as well, and `rename(serialize = ..)` is the exact wire
//! name sent upstream. Optional fields are skipped when unset, so a field the
//! caller never sent (or sent as `null`) never reaches the upstream while an
//! empty string is forwarded as-is.

use serde::{Deserialize, Serialize};

// ============ Shared sub-shapes ============

/// A name record, used for AKAs and relatives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Name {
    #[serde(
        rename(serialize = "FirstName"),
        alias = "FirstName",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<String>,
    #[serde(
        rename(serialize = "MiddleName"),
        alias = "MiddleName",
        skip_serializing_if = "Option::is_none"
    )]
    pub middle_name: Option<String>,
    #[serde(
        rename(serialize = "LastName"),
        alias = "LastName",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<String>,
}

/// An address line pair as used by person search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(
        rename(serialize = "addressLine1"),
        alias = "addressLine1",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_line_1: Option<String>,
    #[serde(
        rename(serialize = "addressLine2"),
        alias = "addressLine2",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_line_2: Option<String>,
    #[serde(
        rename(serialize = "County"),
        alias = "County",
        skip_serializing_if = "Option::is_none"
    )]
    pub county: Option<String>,
}

// ============ People Data ============

/// Request body for `/person-search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonSearchRequest {
    #[serde(
        rename(serialize = "FirstName"),
        alias = "FirstName",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<String>,
    #[serde(
        rename(serialize = "MiddleName"),
        alias = "MiddleName",
        skip_serializing_if = "Option::is_none"
    )]
    pub middle_name: Option<String>,
    #[serde(
        rename(serialize = "LastName"),
        alias = "LastName",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<String>,
    #[serde(rename(serialize = "Akas"), alias = "Akas", skip_serializing_if = "Option::is_none")]
    pub akas: Option<Vec<Name>>,
    #[serde(rename(serialize = "Dob"), alias = "Dob", skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(rename(serialize = "Age"), alias = "Age", skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(
        rename(serialize = "AgeRangeMinAge"),
        alias = "AgeRangeMinAge",
        skip_serializing_if = "Option::is_none"
    )]
    pub age_range_min_age: Option<i64>,
    #[serde(
        rename(serialize = "AgeRangeMaxAge"),
        alias = "AgeRangeMaxAge",
        skip_serializing_if = "Option::is_none"
    )]
    pub age_range_max_age: Option<i64>,
    #[serde(
        rename(serialize = "AgeRange"),
        alias = "AgeRange",
        skip_serializing_if = "Option::is_none"
    )]
    pub age_range: Option<String>,
    #[serde(rename(serialize = "Ssn"), alias = "Ssn", skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(
        rename(serialize = "Addresses"),
        alias = "Addresses",
        skip_serializing_if = "Option::is_none"
    )]
    pub addresses: Option<Vec<Address>>,
    #[serde(rename(serialize = "Email"), alias = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        rename(serialize = "ClientIp"),
        alias = "ClientIp",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_ip: Option<String>,
    #[serde(rename(serialize = "Phone"), alias = "Phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(
        rename(serialize = "Relatives"),
        alias = "Relatives",
        skip_serializing_if = "Option::is_none"
    )]
    pub relatives: Option<Vec<Name>>,
    #[serde(
        rename(serialize = "TahoeIds"),
        alias = "TahoeIds",
        skip_serializing_if = "Option::is_none"
    )]
    pub tahoe_ids: Option<Vec<String>>,
    #[serde(
        rename(serialize = "FirstNameCharOffset"),
        alias = "FirstNameCharOffset",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name_char_offset: Option<i64>,
    #[serde(
        rename(serialize = "LastNameCharOffset"),
        alias = "LastNameCharOffset",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name_char_offset: Option<i64>,
    #[serde(
        rename(serialize = "DobFormat"),
        alias = "DobFormat",
        skip_serializing_if = "Option::is_none"
    )]
    pub dob_format: Option<String>,
    #[serde(
        rename(serialize = "MaxAddressYears"),
        alias = "MaxAddressYears",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_address_years: Option<i64>,
    #[serde(
        rename(serialize = "MaxPhoneYears"),
        alias = "MaxPhoneYears",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_phone_years: Option<i64>,
}

/// Request body for `/reverse-phone-search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReversePhoneSearchRequest {
    #[serde(rename(serialize = "Phone"), alias = "Phone")]
    pub phone: String,
    #[serde(rename(serialize = "Page"), alias = "Page", skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(
        rename(serialize = "ResultsPerPage"),
        alias = "ResultsPerPage",
        skip_serializing_if = "Option::is_none"
    )]
    pub results_per_page: Option<i64>,
}

/// Address block accepted by contact enrichment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactEnrichmentAddress {
    #[serde(
        rename(serialize = "addressLine1"),
        alias = "addressLine1",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_line_1: Option<String>,
    #[serde(
        rename(serialize = "addressLine2"),
        alias = "addressLine2",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_line_2: Option<String>,
}

/// Request body for `/contact-enrichment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactEnrichmentRequest {
    #[serde(
        rename(serialize = "FirstName"),
        alias = "FirstName",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<String>,
    #[serde(
        rename(serialize = "MiddleName"),
        alias = "MiddleName",
        skip_serializing_if = "Option::is_none"
    )]
    pub middle_name: Option<String>,
    #[serde(
        rename(serialize = "LastName"),
        alias = "LastName",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<String>,
    #[serde(rename(serialize = "Dob"), alias = "Dob", skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(rename(serialize = "Age"), alias = "Age", skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(
        rename(serialize = "Address"),
        alias = "Address",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<ContactEnrichmentAddress>,
    #[serde(rename(serialize = "Phone"), alias = "Phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename(serialize = "Email"), alias = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Request body for `/caller-id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallerIdRequest {
    #[serde(rename(serialize = "Phone"), alias = "Phone")]
    pub phone: String,
}

/// Request body for `/email-id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailIdRequest {
    #[serde(rename(serialize = "Email"), alias = "Email")]
    pub email: String,
}

/// Request body for `/contact-id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactIdRequest {
    #[serde(rename(serialize = "PersonId"), alias = "PersonId")]
    pub person_id: String,
}

/// Request body for `/address-id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressIdRequest {
    #[serde(rename(serialize = "addressLine1"), alias = "addressLine1")]
    pub address_line_1: String,
    #[serde(rename(serialize = "addressLine2"), alias = "addressLine2")]
    pub address_line_2: String,
    #[serde(
        rename(serialize = "ExactMatch"),
        alias = "ExactMatch",
        skip_serializing_if = "Option::is_none"
    )]
    pub exact_match: Option<String>,
}

/// Request body for `/address-autocomplete`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressAutoCompleteRequest {
    #[serde(rename(serialize = "Input"), alias = "Input")]
    pub input: String,
}

/// Request body for `/id-verification`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdVerificationRequest {
    #[serde(
        rename(serialize = "FirstName"),
        alias = "FirstName",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<String>,
    #[serde(
        rename(serialize = "MiddleName"),
        alias = "MiddleName",
        skip_serializing_if = "Option::is_none"
    )]
    pub middle_name: Option<String>,
    #[serde(
        rename(serialize = "LastName"),
        alias = "LastName",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<String>,
    #[serde(rename(serialize = "Dob"), alias = "Dob", skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(rename(serialize = "Age"), alias = "Age", skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(
        rename(serialize = "AddressLine1"),
        alias = "AddressLine1",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_line_1: Option<String>,
    #[serde(
        rename(serialize = "AddressLine2"),
        alias = "AddressLine2",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_line_2: Option<String>,
    #[serde(
        rename(serialize = "Phones"),
        alias = "Phones",
        skip_serializing_if = "Option::is_none"
    )]
    pub phones: Option<Vec<String>>,
    #[serde(
        rename(serialize = "Emails"),
        alias = "Emails",
        skip_serializing_if = "Option::is_none"
    )]
    pub emails: Option<Vec<String>>,
    #[serde(rename(serialize = "Ssn"), alias = "Ssn", skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
}

/// Location filter for census search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CensusAddress {
    #[serde(rename(serialize = "City"), alias = "City", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(
        rename(serialize = "County"),
        alias = "County",
        skip_serializing_if = "Option::is_none"
    )]
    pub county: Option<String>,
    #[serde(rename(serialize = "State"), alias = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(
        rename(serialize = "ZipCode"),
        alias = "ZipCode",
        skip_serializing_if = "Option::is_none"
    )]
    pub zip_code: Option<String>,
}

/// Request body for `/census-search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CensusSearchRequest {
    #[serde(
        rename(serialize = "FirstName"),
        alias = "FirstName",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<String>,
    #[serde(
        rename(serialize = "MiddleName"),
        alias = "MiddleName",
        skip_serializing_if = "Option::is_none"
    )]
    pub middle_name: Option<String>,
    #[serde(
        rename(serialize = "LastName"),
        alias = "LastName",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<String>,
    #[serde(rename(serialize = "DOB"), alias = "DOB", skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(rename(serialize = "Age"), alias = "Age", skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(
        rename(serialize = "Addresses"),
        alias = "Addresses",
        skip_serializing_if = "Option::is_none"
    )]
    pub addresses: Option<CensusAddress>,
    #[serde(
        rename(serialize = "Relatives"),
        alias = "Relatives",
        skip_serializing_if = "Option::is_none"
    )]
    pub relatives: Option<Vec<Name>>,
    #[serde(
        rename(serialize = "CensusDecades"),
        alias = "CensusDecades",
        skip_serializing_if = "Option::is_none"
    )]
    pub census_decades: Option<Vec<i64>>,
}

/// Request body for `/divorce-search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DivorceSearchRequest {
    #[serde(
        rename(serialize = "FirstName"),
        alias = "FirstName",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<String>,
    #[serde(
        rename(serialize = "MiddleName"),
        alias = "MiddleName",
        skip_serializing_if = "Option::is_none"
    )]
    pub middle_name: Option<String>,
    #[serde(
        rename(serialize = "LastName"),
        alias = "LastName",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<String>,
    #[serde(
        rename(serialize = "NameSuffix"),
        alias = "NameSuffix",
        skip_serializing_if = "Option::is_none"
    )]
    pub name_suffix: Option<String>,
    #[serde(
        rename(serialize = "MaidenName"),
        alias = "MaidenName",
        skip_serializing_if = "Option::is_none"
    )]
    pub maiden_name: Option<String>,
    #[serde(
        rename(serialize = "SpouseFirstName"),
        alias = "SpouseFirstName",
        skip_serializing_if = "Option::is_none"
    )]
    pub spouse_first_name: Option<String>,
    #[serde(
        rename(serialize = "SpouseMiddleName"),
        alias = "SpouseMiddleName",
        skip_serializing_if = "Option::is_none"
    )]
    pub spouse_middle_name: Option<String>,
    #[serde(
        rename(serialize = "SpouseLastName"),
        alias = "SpouseLastName",
        skip_serializing_if = "Option::is_none"
    )]
    pub spouse_last_name: Option<String>,
    #[serde(
        rename(serialize = "SpouseNameSuffix"),
        alias = "SpouseNameSuffix",
        skip_serializing_if = "Option::is_none"
    )]
    pub spouse_name_suffix: Option<String>,
    #[serde(
        rename(serialize = "MarriageDate"),
        alias = "MarriageDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub marriage_date: Option<String>,
    #[serde(
        rename(serialize = "DivorceDate"),
        alias = "DivorceDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub divorce_date: Option<String>,
    #[serde(rename(serialize = "City"), alias = "City", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(
        rename(serialize = "County"),
        alias = "County",
        skip_serializing_if = "Option::is_none"
    )]
    pub county: Option<String>,
    #[serde(rename(serialize = "State"), alias = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(
        rename(serialize = "PosiedonIds"),
        alias = "PosiedonIds",
        alias = "PoseidonIds",
        skip_serializing_if = "Option::is_none"
    )]
    pub poseidon_ids: Option<Vec<String>>,
    #[serde(
        rename(serialize = "TahoeId"),
        alias = "TahoeId",
        skip_serializing_if = "Option::is_none"
    )]
    pub tahoe_id: Option<String>,
    #[serde(rename(serialize = "SSN"), alias = "SSN", skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
}

/// Request body for `/linkedin-id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedInIdRequest {
    #[serde(rename(serialize = "profileURL"), alias = "profileURL")]
    pub profile_url: String,
}

// ============ Business & Property Data ============

/// Request body for `/business-search` and `/business-search-v2`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessSearchRequest {
    #[serde(
        rename(serialize = "businessName"),
        alias = "businessName",
        skip_serializing_if = "Option::is_none"
    )]
    pub business_name: Option<String>,
    #[serde(
        rename(serialize = "firstName"),
        alias = "firstName",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<String>,
    #[serde(
        rename(serialize = "middleName"),
        alias = "middleName",
        skip_serializing_if = "Option::is_none"
    )]
    pub middle_name: Option<String>,
    #[serde(
        rename(serialize = "lastName"),
        alias = "lastName",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<String>,
    #[serde(
        rename(serialize = "creditorName"),
        alias = "creditorName",
        skip_serializing_if = "Option::is_none"
    )]
    pub creditor_name: Option<String>,
    #[serde(
        rename(serialize = "addressLine1"),
        alias = "addressLine1",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_line_1: Option<String>,
    #[serde(
        rename(serialize = "addressLine2"),
        alias = "addressLine2",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_line_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(
        rename(serialize = "poseidonId"),
        alias = "poseidonId",
        skip_serializing_if = "Option::is_none"
    )]
    pub poseidon_id: Option<String>,
    #[serde(
        rename(serialize = "tahoeId"),
        alias = "tahoeId",
        skip_serializing_if = "Option::is_none"
    )]
    pub tahoe_id: Option<String>,
    #[serde(rename(serialize = "taxId"), alias = "taxId", skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(
        rename(serialize = "businessType"),
        alias = "businessType",
        skip_serializing_if = "Option::is_none"
    )]
    pub business_type: Option<String>,
    #[serde(rename(serialize = "Page"), alias = "Page", skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(
        rename(serialize = "ResultsPerPage"),
        alias = "ResultsPerPage",
        skip_serializing_if = "Option::is_none"
    )]
    pub results_per_page: Option<i64>,
}

/// Request body for `/property-search-v2`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySearchV2Request {
    #[serde(
        rename(serialize = "addressLine1"),
        alias = "addressLine1",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_line_1: Option<String>,
    #[serde(
        rename(serialize = "addressLine2"),
        alias = "addressLine2",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_line_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(
        rename(serialize = "zipCode"),
        alias = "zipCode",
        skip_serializing_if = "Option::is_none"
    )]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fips: Option<String>,
    #[serde(
        rename(serialize = "ownerFirstName"),
        alias = "ownerFirstName",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner_first_name: Option<String>,
    #[serde(
        rename(serialize = "ownerLastName"),
        alias = "ownerLastName",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner_last_name: Option<String>,
    #[serde(
        rename(serialize = "ownerMiddleName"),
        alias = "ownerMiddleName",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner_middle_name: Option<String>,
    #[serde(
        rename(serialize = "ownerNameSuffix"),
        alias = "ownerNameSuffix",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner_name_suffix: Option<String>,
    #[serde(
        rename(serialize = "ownerBusinessName"),
        alias = "ownerBusinessName",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner_business_name: Option<String>,
    #[serde(
        rename(serialize = "searchType"),
        alias = "searchType",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_type: Option<String>,
    #[serde(rename(serialize = "Page"), alias = "Page", skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(
        rename(serialize = "ResultsPerPage"),
        alias = "ResultsPerPage",
        skip_serializing_if = "Option::is_none"
    )]
    pub results_per_page: Option<i64>,
}

/// Request body for `/domain-search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainSearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename(serialize = "Page"), alias = "Page", skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(
        rename(serialize = "ResultsPerPage"),
        alias = "ResultsPerPage",
        skip_serializing_if = "Option::is_none"
    )]
    pub results_per_page: Option<i64>,
}

/// Request body for `/workplace-search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkplaceSearchRequest {
    #[serde(
        rename(serialize = "businessName"),
        alias = "businessName",
        skip_serializing_if = "Option::is_none"
    )]
    pub business_name: Option<String>,
    #[serde(
        rename(serialize = "firstName"),
        alias = "firstName",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<String>,
    #[serde(
        rename(serialize = "lastName"),
        alias = "lastName",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename(serialize = "Page"), alias = "Page", skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(
        rename(serialize = "ResultsPerPage"),
        alias = "ResultsPerPage",
        skip_serializing_if = "Option::is_none"
    )]
    pub results_per_page: Option<i64>,
}

/// Request body for `/business-id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessIdRequest {
    #[serde(rename(serialize = "businessId"), alias = "businessId")]
    pub business_id: String,
    #[serde(rename(serialize = "Page"), alias = "Page", skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(
        rename(serialize = "ResultsPerPage"),
        alias = "ResultsPerPage",
        skip_serializing_if = "Option::is_none"
    )]
    pub results_per_page: Option<i64>,
}
