//! End-to-end member searches over the sample fixtures.

use proptest::prelude::*;
use sieve::Predicate;
use sieve_store::{
    combine, username_and_age, Fixtures, Member, MemberSearchCondition, MemberStore,
    MemberTeamDto, StoreError, Team,
};

fn sample_store() -> MemberStore {
    MemberStore::from_fixtures(&Fixtures::sample()).unwrap()
}

fn usernames(rows: &[MemberTeamDto]) -> Vec<String> {
    rows.iter().map(|row| row.username.clone()).collect()
}

// =============================================================================
// Search scenarios
// =============================================================================

#[test]
fn age_range_with_blank_username() {
    let store = sample_store();
    let condition = MemberSearchCondition::new()
        .with_username("  ")
        .with_age_goe(20)
        .with_age_loe(35);

    let rows = store.search(&condition);
    assert_eq!(usernames(&rows), ["member2", "member3"]);
    assert_eq!(rows[0].team_name.as_deref(), Some("teamA"));
    assert_eq!(rows[1].team_name.as_deref(), Some("teamB"));
}

#[test]
fn empty_condition_returns_everyone() {
    let store = sample_store();
    let rows = store.search(&MemberSearchCondition::new());
    assert_eq!(usernames(&rows), ["member1", "member2", "member3", "member4"]);
}

#[test]
fn whitespace_username_returns_everyone() {
    let store = sample_store();
    let condition = MemberSearchCondition::new().with_username("\t \n");
    assert_eq!(store.search(&condition).len(), 4);
}

#[test]
fn team_filter() {
    let store = sample_store();
    let condition = MemberSearchCondition::new().with_team_name("teamB");
    assert_eq!(usernames(&store.search(&condition)), ["member3", "member4"]);

    let condition = MemberSearchCondition::new().with_team_name("teamC");
    assert!(store.search(&condition).is_empty());
}

#[test]
fn all_filters_together() {
    let store = sample_store();
    let condition = MemberSearchCondition::new()
        .with_username("member1")
        .with_team_name("teamA")
        .with_age_goe(10)
        .with_age_loe(10);
    let rows = store.search(&condition);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].age, 10);

    let mismatched = condition.with_team_name("teamB");
    assert!(store.search(&mismatched).is_empty());
}

#[test]
fn bounds_are_inclusive() {
    let store = sample_store();
    let condition = MemberSearchCondition::new().with_age_goe(40);
    assert_eq!(usernames(&store.search(&condition)), ["member4"]);

    let condition = MemberSearchCondition::new().with_age_loe(10);
    assert_eq!(usernames(&store.search(&condition)), ["member1"]);

    let condition = MemberSearchCondition::new().with_age_goe(41);
    assert!(store.search(&condition).is_empty());
}

#[test]
fn inverted_range_is_empty() {
    let store = sample_store();
    let condition = MemberSearchCondition::new()
        .with_age_goe(35)
        .with_age_loe(20);
    assert!(store.search(&condition).is_empty());
}

#[test]
fn repeated_search_is_identical() {
    let store = sample_store();
    let condition = MemberSearchCondition::new().with_age_goe(20);
    assert_eq!(store.search(&condition), store.search(&condition));
}

#[test]
fn username_and_age_lookup() {
    let store = sample_store();
    let found = store.query(&username_and_age(Some("member1"), Some(10)));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].username, "member1");

    assert!(store
        .query(&username_and_age(Some("member1"), Some(20)))
        .is_empty());
}

#[test]
fn member_without_team_is_kept_unless_team_filtered() {
    let mut store = sample_store();
    store.persist_member("loner", 25, None).unwrap();

    let condition = MemberSearchCondition::new()
        .with_age_goe(20)
        .with_age_loe(35);
    assert_eq!(
        usernames(&store.search(&condition)),
        ["member2", "member3", "loner"]
    );

    let condition = condition.with_team_name("teamA");
    assert_eq!(usernames(&store.search(&condition)), ["member2"]);
}

// =============================================================================
// Member queries
// =============================================================================

fn member_names(members: &[&Member]) -> Vec<String> {
    members.iter().map(|m| m.username.clone()).collect()
}

#[test]
fn query_age_range_with_blank_username() {
    let store = sample_store();
    let condition = MemberSearchCondition::new()
        .with_username("  ")
        .with_age_goe(20)
        .with_age_loe(35);
    assert_eq!(
        member_names(&store.query(&combine(&condition))),
        ["member2", "member3"]
    );
}

#[test]
fn query_empty_and_blank_conditions_return_everyone() {
    let store = sample_store();
    assert_eq!(store.query(&combine(&MemberSearchCondition::new())).len(), 4);

    let condition = MemberSearchCondition::new().with_username("\t ");
    assert_eq!(store.query(&combine(&condition)).len(), 4);
}

#[test]
fn query_team_filter_matches_search() {
    let store = sample_store();
    let condition = MemberSearchCondition::new().with_team_name("teamA");
    let members = store.query(&combine(&condition));
    assert_eq!(member_names(&members), ["member1", "member2"]);
    assert_eq!(member_names(&members), usernames(&store.search(&condition)));

    let condition = condition.with_age_goe(15);
    assert_eq!(member_names(&store.query(&combine(&condition))), ["member2"]);
}

// =============================================================================
// Bulk updates
// =============================================================================

#[test]
fn bulk_rename_juniors() {
    let mut store = sample_store();
    let updated = store.bulk_set_username(&Member::AGE.loe(20), "junior");
    assert_eq!(updated, 2);

    let names: Vec<&str> = store
        .find_all()
        .iter()
        .map(|m| m.username.as_str())
        .collect();
    assert_eq!(names, ["junior", "junior", "member3", "member4"]);
}

#[test]
fn bulk_add_age_everyone() {
    let mut store = sample_store();
    assert_eq!(store.bulk_add_age(&Predicate::AlwaysTrue, 1), 4);

    let condition = MemberSearchCondition::new().with_age_goe(41);
    assert_eq!(usernames(&store.search(&condition)), ["member4"]);
}

#[test]
fn bulk_update_by_team_name() {
    let mut store = sample_store();
    assert_eq!(store.bulk_add_age(&Team::NAME.eq("teamB"), 5), 2);
    let ages: Vec<i32> = store.find_all().iter().map(|m| m.age).collect();
    assert_eq!(ages, [10, 20, 35, 45]);
}

// =============================================================================
// Fixtures
// =============================================================================

#[test]
fn fixtures_from_files() {
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("members.json");
    std::fs::write(
        &json_path,
        serde_json::to_string_pretty(&Fixtures::sample()).unwrap(),
    )
    .unwrap();
    assert_eq!(Fixtures::load(&json_path).unwrap(), Fixtures::sample());

    let yaml_path = dir.path().join("members.yml");
    std::fs::write(
        &yaml_path,
        serde_yaml::to_string(&Fixtures::sample()).unwrap(),
    )
    .unwrap();
    assert_eq!(Fixtures::load(&yaml_path).unwrap(), Fixtures::sample());
}

#[test]
fn missing_fixture_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Fixtures::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn fixture_with_unknown_team() {
    let fixtures = Fixtures::from_json_str(
        r#"{"teams": [{"name": "teamA"}],
            "members": [{"username": "m", "age": 1, "team": "teamZ"}]}"#,
    )
    .unwrap();
    let err = MemberStore::from_fixtures(&fixtures).unwrap_err();
    assert!(matches!(err, StoreError::UnknownTeamName(ref name) if name == "teamZ"));
}

#[test]
fn fixture_with_duplicate_team() {
    let fixtures =
        Fixtures::from_json_str(r#"{"teams": [{"name": "a"}, {"name": "a"}]}"#).unwrap();
    let err = MemberStore::from_fixtures(&fixtures).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateTeamName(_)));
}

// =============================================================================
// Property tests
// =============================================================================

fn condition_strategy() -> impl Strategy<Value = MemberSearchCondition> {
    let username = prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("  ".to_string())),
        (1u8..=5).prop_map(|n| Some(format!("member{n}"))),
    ];
    let team = prop_oneof![
        Just(None),
        Just(Some("teamA".to_string())),
        Just(Some("teamB".to_string())),
        Just(Some(" ".to_string())),
    ];
    let age = proptest::option::of(0i32..50);
    (username, team, age.clone(), age).prop_map(|(username, team_name, age_goe, age_loe)| {
        MemberSearchCondition {
            username,
            team_name,
            age_goe,
            age_loe,
        }
    })
}

fn row_satisfies(row: &MemberTeamDto, condition: &MemberSearchCondition) -> bool {
    let text = |s: &Option<String>| {
        s.as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::to_owned)
    };
    text(&condition.username).map_or(true, |u| row.username == u)
        && text(&condition.team_name)
            .map_or(true, |t| row.team_name.as_deref() == Some(t.as_str()))
        && condition.age_goe.map_or(true, |a| row.age >= a)
        && condition.age_loe.map_or(true, |a| row.age <= a)
}

proptest! {
    #[test]
    fn search_agrees_with_direct_filtering(condition in condition_strategy()) {
        let store = sample_store();
        let expected: Vec<MemberTeamDto> = store
            .search_by(&Predicate::AlwaysTrue)
            .into_iter()
            .filter(|row| row_satisfies(row, &condition))
            .collect();
        prop_assert_eq!(store.search(&condition), expected);
    }

    #[test]
    fn query_agrees_with_search(condition in condition_strategy()) {
        let store = sample_store();
        let queried = member_names(&store.query(&combine(&condition)));
        prop_assert_eq!(queried, usernames(&store.search(&condition)));
    }

    #[test]
    fn combine_has_one_clause_per_present_filter(condition in condition_strategy()) {
        let predicate = combine(&condition);
        let present = [
            sieve::has_text(condition.username.as_deref()),
            sieve::has_text(condition.team_name.as_deref()),
            condition.age_goe.is_some(),
            condition.age_loe.is_some(),
        ]
        .iter()
        .filter(|p| **p)
        .count();

        prop_assert_eq!(predicate.clauses().len(), present);
        prop_assert_eq!(predicate.clone().simplify(), predicate);
    }
}
