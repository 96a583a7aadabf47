use advocate_directory::domain::advocate::NewAdvocate;
use advocate_directory::domain::types::AdvocateId;
use advocate_directory::pagination::PageRequest;
use advocate_directory::repository::{
    AdvocateListQuery, AdvocateReader, AdvocateWriter, DieselRepository,
};
use advocate_directory::seed::{sample_advocates, seed_advocates};

mod common;

fn seeded(name: &str) -> (common::TestDb, DieselRepository) {
    let test_db = common::TestDb::new(name);
    let repo = DieselRepository::new(test_db.pool());
    let advocates = vec![
        common::advocate("Alice", "Johnson", "Chicago", 5554567890),
        common::advocate("Bob", "Smith", "New York", 5551234567),
        NewAdvocate::new(
            "Carol",
            "Nguyen",
            "Austin",
            "PhD",
            vec!["Sleep issues".to_string(), "Chronic pain".to_string()],
            12,
            3125550000,
        )
        .unwrap(),
        common::advocate("Dan", "100% Real", "Boston", 6175550199),
        common::advocate("Erin", "Newman", "New Orleans", 5045551111),
    ];
    assert_eq!(repo.create_advocates(&advocates).unwrap(), 5);
    (test_db, repo)
}

#[test]
fn test_advocate_repository_crud() {
    let (_db, repo) = seeded("test_advocate_repository_crud.db");

    let (total, items) = repo.list_advocates(AdvocateListQuery::new()).unwrap();
    assert_eq!(total, 5);
    let ids: Vec<i32> = items.iter().map(|a| a.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let carol = repo
        .get_advocate_by_id(AdvocateId::new(3).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(carol.first_name, "Carol");
    assert_eq!(carol.degree, "PhD");
    assert_eq!(carol.specialties, vec!["Sleep issues", "Chronic pain"]);
    assert_eq!(carol.years_of_experience, 12);
    assert_eq!(carol.phone_number, 3125550000);

    assert!(
        repo.get_advocate_by_id(AdvocateId::new(999).unwrap())
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_search_matches_any_text_field_case_insensitively() {
    let (_db, repo) = seeded("test_search_matches_any_text_field.db");

    let search = |term: &str| {
        let (total, items) = repo
            .list_advocates(AdvocateListQuery::new().search(term))
            .unwrap();
        assert_eq!(total, items.len());
        items
            .into_iter()
            .map(|a| a.first_name)
            .collect::<Vec<_>>()
    };

    assert_eq!(search("ALICE"), vec!["Alice"]);
    assert_eq!(search("smith"), vec!["Bob"]);
    assert_eq!(search("new"), vec!["Bob", "Erin"]);
    assert_eq!(search("phd"), vec!["Carol"]);
    assert_eq!(search("chronic"), vec!["Carol"]);
    assert_eq!(search("  austin  "), vec!["Carol"]);
    assert!(search("nobody-matches").is_empty());
}

#[test]
fn test_search_by_phone_digits() {
    let (_db, repo) = seeded("test_search_by_phone_digits.db");

    let (total, items) = repo
        .list_advocates(AdvocateListQuery::new().search("555"))
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(items.len(), 5);

    let (total, items) = repo
        .list_advocates(AdvocateListQuery::new().search("617"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].first_name, "Dan");
}

#[test]
fn test_like_wildcards_are_literal() {
    let (_db, repo) = seeded("test_like_wildcards_are_literal.db");

    let (total, items) = repo
        .list_advocates(AdvocateListQuery::new().search("100%"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].first_name, "Dan");

    let (total, _) = repo
        .list_advocates(AdvocateListQuery::new().search("%"))
        .unwrap();
    assert_eq!(total, 1);

    let (total, _) = repo
        .list_advocates(AdvocateListQuery::new().search("_"))
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_search_folds_non_ascii_case() {
    let test_db = common::TestDb::new("test_search_folds_non_ascii_case.db");
    let repo = DieselRepository::new(test_db.pool());
    let advocates = vec![
        NewAdvocate::new(
            "Émilie",
            "Østergaard",
            "São Paulo",
            "PsyD",
            vec!["Ångest".to_string()],
            4,
            5550001111,
        )
        .unwrap(),
        common::advocate("Emma", "Stone", "Denver", 3035550000),
    ];
    repo.create_advocates(&advocates).unwrap();

    for term in ["émilie", "ÉMILIE", "østergaard", "SÃO", "são paulo", "ångest", "ÅNGEST"] {
        let (total, items) = repo
            .list_advocates(AdvocateListQuery::new().search(term))
            .unwrap();
        assert_eq!(total, 1, "{term}");
        assert_eq!(items[0].last_name, "Østergaard");
    }

    let (total, _) = repo
        .list_advocates(AdvocateListQuery::new().search("EM"))
        .unwrap();
    assert_eq!(total, 1);
}

#[test]
fn test_pagination_counts_before_slicing() {
    let (_db, repo) = seeded("test_pagination_counts_before_slicing.db");

    let page = |n: i64| {
        repo.list_advocates(AdvocateListQuery::new().paginate(PageRequest::new(n, 2)))
            .unwrap()
    };

    let (total, first) = page(1);
    assert_eq!(total, 5);
    assert_eq!(first.iter().map(|a| a.id.get()).collect::<Vec<_>>(), vec![1, 2]);

    let (_, last) = page(3);
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].id.get(), 5);

    let (total, beyond) = page(4);
    assert_eq!(total, 5);
    assert!(beyond.is_empty());

    let (total, filtered) = repo
        .list_advocates(
            AdvocateListQuery::new()
                .search("new")
                .paginate(PageRequest::new(2, 1)),
        )
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(filtered[0].first_name, "Erin");
}

#[test]
fn test_seed_inserts_sample_advocates() {
    let test_db = common::TestDb::new("test_seed_inserts_sample_advocates.db");
    let repo = DieselRepository::new(test_db.pool());

    let inserted = seed_advocates(&repo).unwrap();
    assert_eq!(inserted, sample_advocates().len());

    let (total, items) = repo
        .list_advocates(AdvocateListQuery::new().paginate(PageRequest::default()))
        .unwrap();
    assert_eq!(total, inserted);
    assert_eq!(items.len(), 10);
    assert!(items.iter().all(|a| !a.specialties.is_empty()));
}
