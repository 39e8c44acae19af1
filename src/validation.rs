//! Cross-field criteria checks run after parsing and before normalization.
//!
//! Presence follows the upstream's notion of "given": a string counts only
//! when non-empty and a list only when it has at least one element. A nested
//! object counts as soon as it was sent.

use crate::errors::AppError;
use crate::models::*;

pub const CONTACT_ENRICHMENT_CRITERIA_MESSAGE: &str =
    "Contact Enrichment requires at least two search criteria from: Name, Phone, Address, or Email.";
pub const ID_VERIFICATION_CRITERIA_MESSAGE: &str =
    "ID Verification requires at least two criteria from: SSN, Name, Phone, Address, or Email.";
pub const CENSUS_STATE_MESSAGE: &str = "State is required if City or County is provided.";
pub const DIVORCE_STATE_MESSAGE: &str = "State is required when City is provided.";

const MIN_CRITERIA: usize = 2;

/// Local accept/reject decision for a parsed request shape.
///
/// Shapes without cross-field rules accept everything.
pub trait CriteriaCheck {
    fn check_criteria(&self) -> Result<(), AppError> {
        Ok(())
    }
}

fn given(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn given_list<T>(value: &Option<Vec<T>>) -> bool {
    value.as_ref().is_some_and(|v| !v.is_empty())
}

fn count_criteria(groups: &[bool]) -> usize {
    groups.iter().filter(|present| **present).count()
}

impl CriteriaCheck for ContactEnrichmentRequest {
    fn check_criteria(&self) -> Result<(), AppError> {
        let name = given(&self.first_name) || given(&self.middle_name) || given(&self.last_name);
        let count = count_criteria(&[
            name,
            given(&self.phone),
            self.address.is_some(),
            given(&self.email),
        ]);

        if count < MIN_CRITERIA {
            return Err(AppError::Validation(
                CONTACT_ENRICHMENT_CRITERIA_MESSAGE.to_string(),
            ));
        }
        Ok(())
    }
}

impl CriteriaCheck for IdVerificationRequest {
    fn check_criteria(&self) -> Result<(), AppError> {
        let name = given(&self.first_name) || given(&self.middle_name) || given(&self.last_name);
        let address = given(&self.address_line_1) || given(&self.address_line_2);
        let count = count_criteria(&[
            name,
            given_list(&self.phones),
            address,
            given_list(&self.emails),
            given(&self.ssn),
        ]);

        if count < MIN_CRITERIA {
            return Err(AppError::Validation(
                ID_VERIFICATION_CRITERIA_MESSAGE.to_string(),
            ));
        }
        Ok(())
    }
}

impl CriteriaCheck for CensusSearchRequest {
    fn check_criteria(&self) -> Result<(), AppError> {
        if let Some(addresses) = &self.addresses {
            let located = given(&addresses.city) || given(&addresses.county);
            if located && !given(&addresses.state) {
                return Err(AppError::Validation(CENSUS_STATE_MESSAGE.to_string()));
            }
        }
        Ok(())
    }
}

impl CriteriaCheck for DivorceSearchRequest {
    fn check_criteria(&self) -> Result<(), AppError> {
        if given(&self.city) && !given(&self.state) {
            return Err(AppError::Validation(DIVORCE_STATE_MESSAGE.to_string()));
        }
        Ok(())
    }
}

impl CriteriaCheck for PersonSearchRequest {}
impl CriteriaCheck for ReversePhoneSearchRequest {}
impl CriteriaCheck for CallerIdRequest {}
impl CriteriaCheck for EmailIdRequest {}
impl CriteriaCheck for ContactIdRequest {}
impl CriteriaCheck for AddressIdRequest {}
impl CriteriaCheck for AddressAutoCompleteRequest {}
impl CriteriaCheck for LinkedInIdRequest {}
impl CriteriaCheck for BusinessSearchRequest {}
impl CriteriaCheck for PropertySearchV2Request {}
impl CriteriaCheck for DomainSearchRequest {}
impl CriteriaCheck for WorkplaceSearchRequest {}
impl CriteriaCheck for BusinessIdRequest {}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_contact_enrichment_name_parts_count_once() {
        let request = ContactEnrichmentRequest {
            first_name: s("John"),
            middle_name: s("Q"),
            last_name: s("Smith"),
            ..Default::default()
        };
        assert!(request.check_criteria().is_err());
    }

    #[test]
    fn test_contact_enrichment_address_object_counts() {
        let request = ContactEnrichmentRequest {
            email: s("john@example.com"),
            address: Some(ContactEnrichmentAddress::default()),
            ..Default::default()
        };
        assert!(request.check_criteria().is_ok());
    }

    #[test]
    fn test_contact_enrichment_empty_string_does_not_count() {
        let request = ContactEnrichmentRequest {
            last_name: s("Smith"),
            phone: s(""),
            ..Default::default()
        };
        let err = request.check_criteria().unwrap_err();
        assert!(err.to_string().contains("at least two"));
    }

    #[test]
    fn test_id_verification_empty_lists_do_not_count() {
        let request = IdVerificationRequest {
            ssn: s("123-45-6789"),
            phones: Some(vec![]),
            emails: Some(vec![]),
            ..Default::default()
        };
        assert!(request.check_criteria().is_err());
    }

    #[test]
    fn test_id_verification_either_address_line() {
        let request = IdVerificationRequest {
            address_line_2: s("Reno, NV 89501"),
            phones: Some(vec!["775-555-0100".to_string()]),
            ..Default::default()
        };
        assert!(request.check_criteria().is_ok());
    }

    #[test]
    fn test_census_county_without_state() {
        let request = CensusSearchRequest {
            addresses: Some(CensusAddress {
                county: s("Washoe"),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(
            request.check_criteria(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_census_without_location_accepts() {
        let request = CensusSearchRequest {
            last_name: s("Smith"),
            addresses: Some(CensusAddress {
                zip_code: s("89501"),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(request.check_criteria().is_ok());
    }

    #[test]
    fn test_divorce_county_alone_accepts() {
        let request = DivorceSearchRequest {
            county: s("Washoe"),
            ..Default::default()
        };
        assert!(request.check_criteria().is_ok());
    }

    #[test]
    fn test_unconstrained_shapes_accept_empty() {
        assert!(PersonSearchRequest::default().check_criteria().is_ok());
        assert!(WorkplaceSearchRequest::default().check_criteria().is_ok());
    }
}
