//! Integration tests for the template registry.

use pharmadoc_model::SystemCategory;
use pharmadoc_templates::{has_specific_record, lookup, records};
use proptest::prelude::*;

fn any_category() -> impl Strategy<Value = SystemCategory> {
    proptest::sample::select(SystemCategory::ALL.to_vec())
}

#[test]
fn hplc_record_carries_instrument_regulations() {
    let record = lookup(SystemCategory::Hplc);
    assert_eq!(record.regulations, "21 CFR Part 11, EU Annex 11, USP <1058>");
    assert_eq!(record.gamp_category, "4");
    assert_eq!(record.risk_method, "FMEA");
}

#[test]
fn scada_falls_back_to_custom() {
    let record = lookup(SystemCategory::Scada);
    assert_eq!(record.description, "Custom system requiring validation");
    assert!(!has_specific_record(SystemCategory::Scada));
}

#[test]
fn records_cover_every_category_in_order() {
    let categories: Vec<_> = records().map(|(category, _)| category).collect();
    assert_eq!(categories, SystemCategory::ALL.to_vec());
}

#[test]
fn hplc_record_snapshot() {
    insta::assert_json_snapshot!("hplc_record", lookup(SystemCategory::Hplc));
}

proptest! {
    #[test]
    fn lookup_is_specific_or_custom(category in any_category()) {
        let record = lookup(category);
        if has_specific_record(category) {
            if category != SystemCategory::Custom {
                prop_assert_ne!(record, lookup(SystemCategory::Custom));
            }
        } else {
            prop_assert_eq!(record, lookup(SystemCategory::Custom));
        }
    }

    #[test]
    fn lookup_is_stable(category in any_category()) {
        prop_assert!(std::ptr::eq(lookup(category), lookup(category)));
    }
}
