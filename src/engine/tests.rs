use super::*;

fn dataset() -> Vec<UserRecord> {
    vec![
        UserRecord::new("1", "Alice", 30, "Engineer"),
        UserRecord::new("2", "Bob", 40, "Doctor"),
        UserRecord::new("3", "Charlie", 29, "Teacher"),
        UserRecord::new("4", "Dana", 35, "Engineer"),
    ]
}

fn criteria(
    id: Option<&str>,
    name: Option<&str>,
    age: Option<&str>,
    occupation: Option<&str>,
) -> SearchCriteria {
    SearchCriteria {
        id: id.map(str::to_string),
        name: name.map(str::to_string),
        age: age.map(str::to_string),
        occupation: occupation.map(str::to_string),
    }
}

fn ids(hits: &[SearchHit]) -> Vec<&str> {
    hits.iter().map(|h| h.user.id.as_str()).collect()
}

#[test]
fn no_criteria_returns_full_dataset_in_order() {
    let records = dataset();
    let hits = search(&records, &SearchCriteria::default()).unwrap();

    assert_eq!(ids(&hits), vec!["1", "2", "3", "4"]);
    assert!(hits.iter().all(|h| h.priority == MatchPriority::All));
}

#[test]
fn all_empty_strings_count_as_no_criteria() {
    let records = dataset();
    let hits = search(
        &records,
        &criteria(Some(""), Some(""), Some(""), Some("")),
    )
    .unwrap();

    assert_eq!(hits.len(), records.len());
    assert!(hits.iter().all(|h| h.priority == MatchPriority::All));
}

#[test]
fn no_criteria_over_empty_dataset_is_ok_and_empty() {
    let hits = search(&[], &SearchCriteria::default()).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn id_match_is_exact() {
    let records = dataset();
    let hits = search(&records, &criteria(Some("2"), None, None, None)).unwrap();

    assert_eq!(ids(&hits), vec!["2"]);
    assert_eq!(hits[0].priority, MatchPriority::Id);
    assert_eq!(hits[0].user.name, "Bob");
}

#[test]
fn id_match_short_circuits_other_criteria() {
    let records = dataset();
    // Every other criterion would also match Alice; the id hit must be the
    // only one produced for her.
    let hits = search(
        &records,
        &criteria(Some("1"), Some("ali"), Some("30"), Some("engineer")),
    )
    .unwrap();

    let alice_hits: Vec<_> = hits.iter().filter(|h| h.user.id == "1").collect();
    assert_eq!(alice_hits.len(), 1);
    assert_eq!(alice_hits[0].priority, MatchPriority::Id);
}

#[test]
fn name_match_is_case_insensitive_substring() {
    let records = dataset();
    let hits = search(&records, &criteria(None, Some("ali"), None, None)).unwrap();

    assert_eq!(ids(&hits), vec!["1"]);
    assert_eq!(hits[0].priority, MatchPriority::Name);
}

#[test]
fn age_matches_within_one_year_inclusive() {
    let records = vec![
        UserRecord::new("a", "A", 28, "x"),
        UserRecord::new("b", "B", 29, "x"),
        UserRecord::new("c", "C", 30, "x"),
        UserRecord::new("d", "D", 31, "x"),
        UserRecord::new("e", "E", 32, "x"),
    ];
    let hits = search(&records, &criteria(None, None, Some("30"), None)).unwrap();

    assert_eq!(ids(&hits), vec!["b", "c", "d"]);
    assert!(hits.iter().all(|h| h.priority == MatchPriority::Age));
}

#[test]
fn age_forty_one_matches_bob() {
    let records = dataset();
    let hits = search(&records, &criteria(None, None, Some("41"), None)).unwrap();

    assert_eq!(ids(&hits), vec!["2"]);
}

#[test]
fn non_numeric_age_suppresses_occupation_for_the_record() {
    let records = dataset();
    // "Engineer" would match records 1 and 4, but the malformed age aborts
    // the rest of each record's evaluation first.
    let err = search(
        &records,
        &criteria(None, None, Some("abc"), Some("engineer")),
    )
    .unwrap_err();

    assert_eq!(err, SearchError::NotFound);
}

#[test]
fn non_numeric_age_still_allows_earlier_name_matches() {
    let records = dataset();
    // The name check runs before the age parse, so it still tags the record.
    let hits = search(
        &records,
        &criteria(None, Some("bob"), Some("abc"), Some("doctor")),
    )
    .unwrap();

    assert_eq!(ids(&hits), vec!["2"]);
    assert_eq!(hits[0].priority, MatchPriority::Name);
}

#[test]
fn record_matching_name_and_occupation_appears_twice() {
    let records = dataset();
    let hits = search(
        &records,
        &criteria(None, Some("alice"), None, Some("engineer")),
    )
    .unwrap();

    let alice_hits: Vec<_> = hits.iter().filter(|h| h.user.id == "1").collect();
    assert_eq!(alice_hits.len(), 2);
    assert_eq!(alice_hits[0].priority, MatchPriority::Name);
    assert_eq!(alice_hits[1].priority, MatchPriority::Occupation);
}

#[test]
fn hits_are_sorted_by_priority() {
    let records = dataset();
    // Bob matches by id; Alice and Dana by occupation. The id hit must come
    // first even though Bob is second in the dataset.
    let hits = search(
        &records,
        &criteria(Some("2"), None, None, Some("engineer")),
    )
    .unwrap();

    assert_eq!(ids(&hits), vec!["2", "1", "4"]);
    assert_eq!(hits[0].priority, MatchPriority::Id);
}

#[test]
fn equal_priorities_keep_dataset_order() {
    let records = dataset();
    let hits = search(&records, &criteria(None, None, None, Some("e"))).unwrap();

    // "Engineer", "Doctor", "Teacher", "Engineer" all contain "e".
    assert_eq!(ids(&hits), vec!["1", "2", "3", "4"]);
    assert!(hits.iter().all(|h| h.priority == MatchPriority::Occupation));
}

#[test]
fn duplicate_dataset_entries_are_deduplicated() {
    let records = vec![
        UserRecord::new("1", "Alice", 30, "Engineer"),
        UserRecord::new("1", "Alice", 30, "Engineer"),
    ];
    let hits = search(&records, &criteria(None, Some("alice"), None, None)).unwrap();

    assert_eq!(hits.len(), 1);
}

#[test]
fn extreme_age_values_do_not_overflow() {
    let records = dataset();

    let min = i64::MIN.to_string();
    let err = search(&records, &criteria(None, None, Some(min.as_str()), None)).unwrap_err();
    assert_eq!(err, SearchError::NotFound);

    let max = i64::MAX.to_string();
    let err = search(&records, &criteria(None, None, Some(max.as_str()), None)).unwrap_err();
    assert_eq!(err, SearchError::NotFound);
}

#[test]
fn extreme_record_age_still_matches_adjacent_query() {
    let records = vec![UserRecord::new("m", "Max", i64::MAX, "x")];
    let query = (i64::MAX - 1).to_string();
    let hits = search(&records, &criteria(None, None, Some(query.as_str()), None)).unwrap();

    assert_eq!(ids(&hits), vec!["m"]);
    assert_eq!(hits[0].priority, MatchPriority::Age);
}

#[test]
fn zero_matches_is_not_found_not_empty_list() {
    let records = dataset();
    let err = search(&records, &criteria(Some("9"), None, None, None)).unwrap_err();

    assert_eq!(err, SearchError::NotFound);
}
