//! Integration tests for the regatta data model.

use proptest::prelude::*;

use regatta_model::{BoatClass, FieldMapping, ReportKind};

proptest! {
    #[test]
    fn seat_digit_round_trips(
        prefix in prop::sample::select(vec!["J14 ", "J18 ", "Masters ", "Open ", "W", ""]),
        seats in prop::sample::select(vec![1u8, 2, 4, 8]),
        rig in prop::sample::select(vec!["x", "-", "+", "x+"]),
    ) {
        let code = format!("{prefix}{seats}{rig}");
        let boat = BoatClass::parse(&code).expect("boat type should parse");
        prop_assert_eq!(boat.seats, seats);
        prop_assert_eq!(boat.coxed, rig.ends_with('+'));
        prop_assert_eq!(boat.sculling, rig.starts_with('x'));
    }

    #[test]
    fn codes_without_rig_never_parse(word in "[A-Za-z ]{0,12}") {
        prop_assert!(BoatClass::parse(&word).is_none());
    }
}

#[test]
fn field_mapping_from_toml() {
    let text = r#"
[teams]
required = ["crew id", "boat type"]
columns = [
    { index = 0, name = "crew id" },
    { index = 2, name = "boat type" },
]

[team_members]
columns = [{ index = 4, name = "name" }]
"#;
    let mapping: FieldMapping = toml::from_str(text).expect("parse mapping");
    assert!(mapping.validate().is_ok());
    assert_eq!(mapping.teams.names(), vec!["crew id", "boat type"]);
    assert!(mapping.teams.is_required("boat type"));
    assert!(!mapping.team_members.is_required("name"));
    assert!(mapping.report(ReportKind::CommunityMembers).is_none());
}
