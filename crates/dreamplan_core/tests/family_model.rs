use dreamplan_core::{
    DreamCategory, FamilyMember, FamilyProfile, Gender, Role, ValidationError,
};

#[test]
fn profile_deserializes_from_document_shape() {
    let value = serde_json::json!({
        "startFY": 2024,
        "members": [
            { "id": "init-1", "name": "Hanako", "birthYear": 1980, "birthMonth": 1,
              "role": "parent", "gender": "female" },
            { "id": "mem_2", "name": "Taro", "birthYear": 2015, "birthMonth": 4,
              "role": "child" }
        ]
    });

    let profile: FamilyProfile = serde_json::from_value(value).unwrap();
    assert_eq!(profile.start_fy, 2024);
    assert_eq!(profile.members.len(), 2);
    assert_eq!(profile.members[0].gender, Some(Gender::Female));
    assert_eq!(profile.members[1].role, Role::Child);
    assert_eq!(profile.members[1].gender, None);
}

#[test]
fn profile_serializes_with_start_fy_wire_name() {
    let profile = FamilyProfile::new(
        2025,
        vec![FamilyMember::with_id("s-1", "Yui", 2010, 9, Role::Student)],
    );
    let json = serde_json::to_value(&profile).unwrap();

    assert_eq!(json["startFY"], 2025);
    assert_eq!(json["members"][0]["birthMonth"], 9);
    assert_eq!(json["members"][0]["role"], "student");
    assert!(json["members"][0].get("gender").is_none());
}

#[test]
fn generated_member_ids_are_unique_and_prefixed() {
    let first = FamilyMember::new("A", 1990, 1, Role::Parent);
    let second = FamilyMember::new("B", 1990, 1, Role::Parent);

    assert!(first.id.starts_with("mem_"));
    assert_ne!(first.id, second.id);
}

#[test]
fn member_without_name_is_rejected() {
    let profile = FamilyProfile::new(
        2024,
        vec![
            FamilyMember::with_id("ok", "Hanako", 1980, 5, Role::Parent),
            FamilyMember::with_id("blank", "  ", 2015, 5, Role::Child),
        ],
    );

    assert_eq!(
        profile.validate().unwrap_err(),
        ValidationError::InvalidMember {
            member_id: "blank".to_string()
        }
    );
}

#[test]
fn empty_member_list_is_not_rejected_by_core() {
    assert!(FamilyProfile::new(2024, Vec::new()).validate().is_ok());
}

#[test]
fn only_children_and_students_attend_school() {
    assert!(!Role::Parent.attends_school());
    assert!(Role::Child.attends_school());
    assert!(Role::Student.attends_school());
}

#[test]
fn category_storage_strings_round_trip() {
    for category in DreamCategory::ALL {
        assert_eq!(DreamCategory::parse(category.as_str()), Some(category));
    }
    assert_eq!(DreamCategory::parse("hobby"), None);
}

#[test]
fn remove_member_keeps_remaining_order() {
    let mut profile = FamilyProfile::new(
        2024,
        vec![
            FamilyMember::with_id("a", "Hanako", 1980, 5, Role::Parent),
            FamilyMember::with_id("b", "Ken", 1978, 1, Role::Parent),
            FamilyMember::with_id("c", "Taro", 2015, 4, Role::Child),
        ],
    );

    let removed = profile.remove_member("b").unwrap();
    assert_eq!(removed.name, "Ken");
    let ids: Vec<&str> = profile.members.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);

    assert!(profile.remove_member("missing").is_none());
    assert_eq!(profile.members.len(), 2);
}
