use dreamplan_core::{
    generate, generate_within_window, within_window, CandidateEvent, DreamCategory, FamilyMember,
    FamilyProfile, NewDream, Role,
};

fn child_profile(start_fy: i32) -> FamilyProfile {
    FamilyProfile::new(
        start_fy,
        vec![FamilyMember::with_id("c-1", "Taro", 2015, 4, Role::Child)],
    )
}

fn find<'a>(candidates: &'a [CandidateEvent], fragment: &str) -> &'a CandidateEvent {
    candidates
        .iter()
        .find(|candidate| candidate.title.contains(fragment))
        .unwrap_or_else(|| panic!("missing candidate containing `{fragment}`"))
}

#[test]
fn school_events_are_anchored_on_elementary_entrance() {
    let candidates = generate(&child_profile(2020));

    let expected = [
        ("小学校入学", 2022, 4),
        ("小学校卒業", 2028, 3),
        ("中学校入学", 2028, 4),
        ("中学校卒業", 2031, 3),
        ("高校入学", 2031, 4),
        ("高校卒業", 2034, 3),
        ("大学入学", 2034, 4),
        ("大学卒業", 2038, 3),
    ];
    for (label, fy, month) in expected {
        let candidate = find(&candidates, label);
        assert_eq!((candidate.fy, candidate.month), (fy, month), "{label}");
        assert_eq!(candidate.category, DreamCategory::Education);
        assert!(candidate.title.starts_with("Taro"));
    }
}

#[test]
fn coming_of_age_is_thirteen_years_after_entrance_in_january() {
    let candidates = generate(&child_profile(2020));
    let coming_of_age = find(&candidates, "成人式");

    assert_eq!(coming_of_age.fy, 2035);
    assert_eq!(coming_of_age.month, 1);
    assert_eq!(coming_of_age.category, DreamCategory::Life);
}

#[test]
fn early_bird_child_transitions_shift_one_year_earlier() {
    let profile = FamilyProfile::new(
        2020,
        vec![FamilyMember::with_id("s-1", "Yui", 2015, 3, Role::Student)],
    );
    let candidates = generate(&profile);

    assert_eq!(find(&candidates, "小学校入学").fy, 2021);
    assert_eq!(find(&candidates, "大学卒業").fy, 2037);
}

#[test]
fn parents_only_get_kanreki() {
    let profile = FamilyProfile::new(
        2024,
        vec![FamilyMember::with_id("p-1", "Hanako", 1964, 5, Role::Parent)],
    );
    let candidates = generate(&profile);

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].fy, 2024);
    assert_eq!(candidates[0].month, 5);
    assert_eq!(candidates[0].category, DreamCategory::Life);
    assert!(candidates[0].title.contains("還暦"));
}

#[test]
fn kanreki_before_start_fy_is_dropped() {
    let early_bird = FamilyProfile::new(
        2024,
        vec![FamilyMember::with_id("p-1", "Ken", 1964, 2, Role::Parent)],
    );
    assert!(generate(&early_bird).is_empty());

    let april_born = FamilyProfile::new(
        2024,
        vec![FamilyMember::with_id("p-2", "Ken", 1964, 4, Role::Parent)],
    );
    assert_eq!(generate(&april_born).len(), 1);
}

#[test]
fn kanreki_has_no_upper_bound_before_window_filter() {
    let candidates = generate(&child_profile(2024));
    let kanreki = find(&candidates, "還暦");
    assert_eq!(kanreki.fy, 2075);
}

#[test]
fn child_yields_school_events_coming_of_age_and_kanreki() {
    let candidates = generate(&child_profile(2020));
    assert_eq!(candidates.len(), 10);
}

#[test]
fn generation_is_not_idempotent() {
    let profile = child_profile(2020);
    let mut persisted: Vec<CandidateEvent> = Vec::new();
    persisted.extend(generate(&profile));
    persisted.extend(generate(&profile));

    let entrances = persisted
        .iter()
        .filter(|candidate| candidate.title.contains("小学校入学"))
        .count();
    assert_eq!(entrances, 2);
}

#[test]
fn window_is_half_open() {
    let profile = child_profile(2024);
    assert!(within_window(&profile, 2024));
    assert!(within_window(&profile, 2024 + 19));
    assert!(!within_window(&profile, 2024 + 20));
    assert!(!within_window(&profile, 2024 + 25));
    assert!(!within_window(&profile, 2023));
}

#[test]
fn window_filter_drops_candidates_outside_projection() {
    let profile = FamilyProfile::new(
        2024,
        vec![
            FamilyMember::with_id("p-1", "Last", 1983, 5, Role::Parent),
            FamilyMember::with_id("p-2", "Beyond", 1984, 5, Role::Parent),
        ],
    );
    assert_eq!(generate(&profile).len(), 2);

    let kept = generate_within_window(&profile);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].fy, 2043);
    assert!(kept[0].title.starts_with("Last"));
}

#[test]
fn window_filter_keeps_in_range_school_events_only() {
    let kept = generate_within_window(&child_profile(2024));
    assert!(kept.iter().all(|candidate| (2024..2044).contains(&candidate.fy)));
    assert!(kept.iter().all(|candidate| !candidate.title.contains("小学校入学")));
    assert!(kept.iter().any(|candidate| candidate.title.contains("大学卒業")));
}

#[test]
fn candidate_converts_into_new_dream() {
    let candidate = generate(&child_profile(2020)).remove(0);
    let new_dream = NewDream::from(candidate.clone());

    assert_eq!(new_dream.fy, candidate.fy);
    assert_eq!(new_dream.month, candidate.month);
    assert_eq!(new_dream.title, candidate.title);
    assert_eq!(new_dream.description, None);
}

#[test]
fn generation_near_i32_max_does_not_panic() {
    let profile = FamilyProfile::new(
        i32::MAX - 5,
        vec![FamilyMember::with_id("x-1", "Edge", i32::MAX - 3, 4, Role::Child)],
    );

    // School and kanreki years wrap past i32::MAX; the wrapped kanreki year
    // lands before start_fy and is dropped.
    let candidates = generate(&profile);
    assert_eq!(candidates.len(), 9);
    assert!(candidates.iter().all(|candidate| !candidate.title.contains("還暦")));

    assert!(generate_within_window(&profile).is_empty());
}

#[test]
fn window_check_near_i32_bounds_does_not_panic() {
    let high = FamilyProfile::new(i32::MAX - 5, Vec::new());
    assert!(within_window(&high, i32::MAX));
    assert!(within_window(&high, i32::MAX - 5));
    assert!(!within_window(&high, i32::MIN));

    let low = FamilyProfile::new(i32::MIN, Vec::new());
    assert!(within_window(&low, i32::MIN + 19));
    assert!(!within_window(&low, i32::MIN + 20));
    assert!(!within_window(&low, i32::MAX));
}
