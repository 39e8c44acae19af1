/// Property-based tests using proptest
/// Tests invariants of the request normalizer that should hold for all inputs
use enformion_proxy::models::*;
use enformion_proxy::normalizer::normalize;
use proptest::prelude::*;
use proptest::sample::Index;
use proptest::test_runner::TestCaseError;
use serde::Serialize;
use serde_json::{Map, Value};

type Setter<T> = fn(&mut T, String);
type NumberSetter<T> = fn(&mut T, i64);

/// String fields of the divorce shape paired with their wire names.
fn divorce_fields() -> [(Setter<DivorceSearchRequest>, &'static str); 16] {
    [
        (|r, v| r.first_name = Some(v), "FirstName"),
        (|r, v| r.middle_name = Some(v), "MiddleName"),
        (|r, v| r.last_name = Some(v), "LastName"),
        (|r, v| r.name_suffix = Some(v), "NameSuffix"),
        (|r, v| r.maiden_name = Some(v), "MaidenName"),
        (|r, v| r.spouse_first_name = Some(v), "SpouseFirstName"),
        (|r, v| r.spouse_middle_name = Some(v), "SpouseMiddleName"),
        (|r, v| r.spouse_last_name = Some(v), "SpouseLastName"),
        (|r, v| r.spouse_name_suffix = Some(v), "SpouseNameSuffix"),
        (|r, v| r.marriage_date = Some(v), "MarriageDate"),
        (|r, v| r.divorce_date = Some(v), "DivorceDate"),
        (|r, v| r.city = Some(v), "City"),
        (|r, v| r.county = Some(v), "County"),
        (|r, v| r.state = Some(v), "State"),
        (|r, v| r.tahoe_id = Some(v), "TahoeId"),
        (|r, v| r.ssn = Some(v), "SSN"),
    ]
}

fn property_fields() -> [(Setter<PropertySearchV2Request>, &'static str); 15] {
    [
        (|r, v| r.address_line_1 = Some(v), "addressLine1"),
        (|r, v| r.address_line_2 = Some(v), "addressLine2"),
        (|r, v| r.unit = Some(v), "unit"),
        (|r, v| r.city = Some(v), "city"),
        (|r, v| r.state = Some(v), "state"),
        (|r, v| r.zip_code = Some(v), "zipCode"),
        (|r, v| r.county = Some(v), "county"),
        (|r, v| r.apn = Some(v), "apn"),
        (|r, v| r.fips = Some(v), "fips"),
        (|r, v| r.owner_first_name = Some(v), "ownerFirstName"),
        (|r, v| r.owner_last_name = Some(v), "ownerLastName"),
        (|r, v| r.owner_middle_name = Some(v), "ownerMiddleName"),
        (|r, v| r.owner_name_suffix = Some(v), "ownerNameSuffix"),
        (|r, v| r.owner_business_name = Some(v), "ownerBusinessName"),
        (|r, v| r.search_type = Some(v), "searchType"),
    ]
}

fn business_fields() -> [(Setter<BusinessSearchRequest>, &'static str); 13] {
    [
        (|r, v| r.business_name = Some(v), "businessName"),
        (|r, v| r.first_name = Some(v), "firstName"),
        (|r, v| r.middle_name = Some(v), "middleName"),
        (|r, v| r.last_name = Some(v), "lastName"),
        (|r, v| r.creditor_name = Some(v), "creditorName"),
        (|r, v| r.address_line_1 = Some(v), "addressLine1"),
        (|r, v| r.address_line_2 = Some(v), "addressLine2"),
        (|r, v| r.county = Some(v), "county"),
        (|r, v| r.poseidon_id = Some(v), "poseidonId"),
        (|r, v| r.tahoe_id = Some(v), "tahoeId"),
        (|r, v| r.tax_id = Some(v), "taxId"),
        (|r, v| r.ssn = Some(v), "ssn"),
        (|r, v| r.business_type = Some(v), "businessType"),
    ]
}

fn workplace_fields() -> [(Setter<WorkplaceSearchRequest>, &'static str); 5] {
    [
        (|r, v| r.business_name = Some(v), "businessName"),
        (|r, v| r.first_name = Some(v), "firstName"),
        (|r, v| r.last_name = Some(v), "lastName"),
        (|r, v| r.city = Some(v), "city"),
        (|r, v| r.state = Some(v), "state"),
    ]
}

fn contact_enrichment_fields() -> [(Setter<ContactEnrichmentRequest>, &'static str); 6] {
    [
        (|r, v| r.first_name = Some(v), "FirstName"),
        (|r, v| r.middle_name = Some(v), "MiddleName"),
        (|r, v| r.last_name = Some(v), "LastName"),
        (|r, v| r.dob = Some(v), "Dob"),
        (|r, v| r.phone = Some(v), "Phone"),
        (|r, v| r.email = Some(v), "Email"),
    ]
}

fn id_verification_fields() -> [(Setter<IdVerificationRequest>, &'static str); 7] {
    [
        (|r, v| r.first_name = Some(v), "FirstName"),
        (|r, v| r.middle_name = Some(v), "MiddleName"),
        (|r, v| r.last_name = Some(v), "LastName"),
        (|r, v| r.dob = Some(v), "Dob"),
        (|r, v| r.address_line_1 = Some(v), "AddressLine1"),
        (|r, v| r.address_line_2 = Some(v), "AddressLine2"),
        (|r, v| r.ssn = Some(v), "Ssn"),
    ]
}

fn census_fields() -> [(Setter<CensusSearchRequest>, &'static str); 5] {
    [
        (|r, v| r.first_name = Some(v), "FirstName"),
        (|r, v| r.middle_name = Some(v), "MiddleName"),
        (|r, v| r.last_name = Some(v), "LastName"),
        (|r, v| r.dob = Some(v), "DOB"),
        (|r, v| r.age = Some(v), "Age"),
    ]
}

fn business_number_fields() -> [(NumberSetter<BusinessSearchRequest>, &'static str); 2] {
    [
        (|r, v| r.page = Some(v), "Page"),
        (|r, v| r.results_per_page = Some(v), "ResultsPerPage"),
    ]
}

fn workplace_number_fields() -> [(NumberSetter<WorkplaceSearchRequest>, &'static str); 2] {
    [
        (|r, v| r.page = Some(v), "Page"),
        (|r, v| r.results_per_page = Some(v), "ResultsPerPage"),
    ]
}

fn single_entry(wire: &str, value: Value) -> Map<String, Value> {
    let mut expected = Map::new();
    expected.insert(wire.to_string(), value);
    expected
}

fn check_single_field<T: Default + Serialize>(
    table: &[(Setter<T>, &'static str)],
    index: Index,
    value: String,
) -> Result<(), TestCaseError> {
    let (set, wire) = table[index.index(table.len())];
    let mut request = T::default();
    set(&mut request, value.clone());

    let payload = normalize(&request).unwrap();
    prop_assert_eq!(payload, single_entry(wire, Value::from(value)));
    Ok(())
}

fn check_single_number<T: Default + Serialize>(
    table: &[(NumberSetter<T>, &'static str)],
    index: Index,
    value: i64,
) -> Result<(), TestCaseError> {
    let (set, wire) = table[index.index(table.len())];
    let mut request = T::default();
    set(&mut request, value);

    let payload = normalize(&request).unwrap();
    prop_assert_eq!(payload, single_entry(wire, Value::from(value)));
    Ok(())
}

/// Sets every field whose slot in `values` is `Some`, then checks the
/// projection is stable and carries exactly those wire keys.
fn check_populated<T: Default + Serialize>(
    table: &[(Setter<T>, &'static str)],
    values: &[Option<String>],
) -> Result<(), TestCaseError> {
    let mut request = T::default();
    for ((set, _), value) in table.iter().zip(values) {
        if let Some(v) = value {
            set(&mut request, v.clone());
        }
    }

    let first = normalize(&request).unwrap();
    let second = normalize(&request).unwrap();
    prop_assert_eq!(&first, &second);

    let mut expected = Map::new();
    for ((_, wire), value) in table.iter().zip(values) {
        if let Some(v) = value {
            expected.insert(wire.to_string(), Value::from(v.clone()));
        }
    }
    prop_assert_eq!(first, expected);
    Ok(())
}

fn field_values() -> impl Strategy<Value = Vec<Option<String>>> {
    proptest::collection::vec(proptest::option::of("\\PC{0,8}"), 16)
}

// Property: a single set field projects to exactly one wire key
proptest! {
    #[test]
    fn divorce_single_field_projects_to_its_wire_name(index in any::<Index>(), value in "\\PC*") {
        check_single_field(&divorce_fields(), index, value)?;
    }

    #[test]
    fn property_single_field_projects_to_its_wire_name(index in any::<Index>(), value in "\\PC*") {
        check_single_field(&property_fields(), index, value)?;
    }

    #[test]
    fn business_single_field_projects_to_its_wire_name(index in any::<Index>(), value in "\\PC*") {
        check_single_field(&business_fields(), index, value)?;
    }

    #[test]
    fn workplace_single_field_projects_to_its_wire_name(index in any::<Index>(), value in "\\PC*") {
        check_single_field(&workplace_fields(), index, value)?;
    }

    #[test]
    fn contact_enrichment_single_field_projects_to_its_wire_name(index in any::<Index>(), value in "\\PC*") {
        check_single_field(&contact_enrichment_fields(), index, value)?;
    }

    #[test]
    fn id_verification_single_field_projects_to_its_wire_name(index in any::<Index>(), value in "\\PC*") {
        check_single_field(&id_verification_fields(), index, value)?;
    }

    #[test]
    fn census_single_field_projects_to_its_wire_name(index in any::<Index>(), value in "\\PC*") {
        check_single_field(&census_fields(), index, value)?;
    }

    #[test]
    fn paging_fields_project_to_their_wire_names(index in any::<Index>(), value in any::<i64>()) {
        check_single_number(&business_number_fields(), index, value)?;
        check_single_number(&workplace_number_fields(), index, value)?;
    }

    #[test]
    fn age_projects_as_a_number(value in 0i64..150) {
        let contact = ContactEnrichmentRequest { age: Some(value), ..Default::default() };
        prop_assert_eq!(normalize(&contact).unwrap(), single_entry("Age", Value::from(value)));

        let identity = IdVerificationRequest { age: Some(value), ..Default::default() };
        prop_assert_eq!(normalize(&identity).unwrap(), single_entry("Age", Value::from(value)));
    }

    #[test]
    fn id_verification_lists_project_to_their_wire_names(
        phones in proptest::collection::vec("[0-9-]{1,12}", 0..4),
        emails in proptest::collection::vec("[a-z@.]{1,10}", 0..4)
    ) {
        let request = IdVerificationRequest {
            phones: Some(phones.clone()),
            emails: Some(emails.clone()),
            ..Default::default()
        };

        let payload = normalize(&request).unwrap();
        prop_assert_eq!(payload.len(), 2);
        prop_assert_eq!(&payload["Phones"], &Value::from(phones));
        prop_assert_eq!(&payload["Emails"], &Value::from(emails));
    }
}

// Property: normalization is deterministic and carries exactly the set fields
proptest! {
    #[test]
    fn divorce_projection_is_stable(values in field_values()) {
        check_populated(&divorce_fields(), &values)?;
    }

    #[test]
    fn property_projection_is_stable(values in field_values()) {
        check_populated(&property_fields(), &values)?;
    }

    #[test]
    fn business_projection_is_stable(values in field_values()) {
        check_populated(&business_fields(), &values)?;
    }

    #[test]
    fn workplace_projection_is_stable(values in field_values()) {
        check_populated(&workplace_fields(), &values)?;
    }

    #[test]
    fn contact_enrichment_projection_is_stable(values in field_values()) {
        check_populated(&contact_enrichment_fields(), &values)?;
    }

    #[test]
    fn id_verification_projection_is_stable(values in field_values()) {
        check_populated(&id_verification_fields(), &values)?;
    }

    #[test]
    fn census_projection_is_stable(values in field_values()) {
        check_populated(&census_fields(), &values)?;
    }
}

fn name_strategy() -> impl Strategy<Value = Name> {
    (
        proptest::option::of("[A-Za-z]{0,8}"),
        proptest::option::of("[A-Za-z]{0,8}"),
        proptest::option::of("[A-Za-z]{0,8}"),
    )
        .prop_map(|(first_name, middle_name, last_name)| Name {
            first_name,
            middle_name,
            last_name,
        })
}

// Property: normalization is deterministic and presence-preserving
proptest! {
    #[test]
    fn person_search_normalization_is_deterministic(
        first_name in proptest::option::of("\\PC{0,12}"),
        last_name in proptest::option::of("\\PC{0,12}"),
        age in proptest::option::of(0i64..120),
        akas in proptest::option::of(proptest::collection::vec(name_strategy(), 0..4)),
        tahoe_ids in proptest::option::of(proptest::collection::vec("[A-Z0-9]{1,10}", 0..3))
    ) {
        let request = PersonSearchRequest {
            first_name,
            last_name,
            age,
            akas,
            tahoe_ids,
            ..Default::default()
        };

        let first = normalize(&request).unwrap();
        let second = normalize(&request).unwrap();
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn presence_is_preserved_including_empty_strings(
        first_name in proptest::option::of("[a-z]{0,3}"),
        phone in proptest::option::of("[0-9-]{0,12}"),
        email in proptest::option::of("[a-z@.]{0,10}")
    ) {
        let request = ContactEnrichmentRequest {
            first_name: first_name.clone(),
            phone: phone.clone(),
            email: email.clone(),
            ..Default::default()
        };

        let payload = normalize(&request).unwrap();
        prop_assert_eq!(payload.get("FirstName").cloned(), first_name.map(Value::from));
        prop_assert_eq!(payload.get("Phone").cloned(), phone.map(Value::from));
        prop_assert_eq!(payload.get("Email").cloned(), email.map(Value::from));
    }

    #[test]
    fn list_elements_never_carry_nulls(akas in proptest::collection::vec(name_strategy(), 1..5)) {
        let request = PersonSearchRequest {
            akas: Some(akas.clone()),
            ..Default::default()
        };

        let payload = normalize(&request).unwrap();
        let projected = payload["Akas"].as_array().unwrap();
        prop_assert_eq!(projected.len(), akas.len());
        for (element, name) in projected.iter().zip(akas.iter()) {
            let object = element.as_object().unwrap();
            prop_assert!(object.values().all(|v| !v.is_null()));
            prop_assert_eq!(object.contains_key("FirstName"), name.first_name.is_some());
            prop_assert_eq!(object.contains_key("MiddleName"), name.middle_name.is_some());
            prop_assert_eq!(object.contains_key("LastName"), name.last_name.is_some());
        }
    }

    #[test]
    fn census_relatives_project_like_person_names(relatives in proptest::collection::vec(name_strategy(), 1..4)) {
        let request = CensusSearchRequest {
            relatives: Some(relatives.clone()),
            ..Default::default()
        };

        let payload = normalize(&request).unwrap();
        prop_assert_eq!(payload.len(), 1);
        let projected = payload["Relatives"].as_array().unwrap();
        prop_assert_eq!(projected.len(), relatives.len());
        for (element, name) in projected.iter().zip(relatives.iter()) {
            prop_assert_eq!(element.get("FirstName").cloned(), name.first_name.clone().map(Value::from));
            prop_assert_eq!(element.get("MiddleName").cloned(), name.middle_name.clone().map(Value::from));
            prop_assert_eq!(element.get("LastName").cloned(), name.last_name.clone().map(Value::from));
        }
    }
}
