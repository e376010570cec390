use riskwise_core::models::answers::{QuestionGroup, QuestionId};
use riskwise_engine::questions::{all_questions, get_question};

#[test]
fn catalog_covers_every_question_once() {
    let catalog = all_questions();
    assert_eq!(catalog.len(), QuestionId::ALL.len());
    for id in QuestionId::ALL {
        assert_eq!(catalog.iter().filter(|q| q.id == id).count(), 1, "{id}");
    }
}

#[test]
fn groups_partition_as_documented() {
    let glaucoma = QuestionId::ALL
        .iter()
        .filter(|q| q.group() == QuestionGroup::Glaucoma)
        .count();
    let cancer = QuestionId::ALL
        .iter()
        .filter(|q| q.group() == QuestionGroup::Cancer)
        .count();
    let shared = QuestionId::ALL
        .iter()
        .filter(|q| q.group() == QuestionGroup::Shared)
        .count();
    assert_eq!(glaucoma, 8);
    assert_eq!(cancer, 5);
    assert_eq!(shared, 1);
}

#[test]
fn lookup_by_wire_key() {
    let q = get_question("elevatedIOP").expect("known key");
    assert_eq!(q.id, QuestionId::ElevatedIop);
    assert!(q.prompt.contains("intraocular pressure"));
    assert!(get_question("elevatediop").is_none());
    assert!(get_question("").is_none());
}

#[test]
fn wire_keys_round_trip_through_from_key() {
    for id in QuestionId::ALL {
        assert_eq!(QuestionId::from_key(id.key()), Some(id));
    }
}

#[test]
fn parsing_an_unknown_key_names_it() {
    let err = "eyeColour".parse::<QuestionId>().expect_err("unknown key");
    assert_eq!(err.to_string(), "unknown question key: eyeColour");
    assert_eq!("diabetes".parse::<QuestionId>().expect("known key"), QuestionId::Diabetes);
}
