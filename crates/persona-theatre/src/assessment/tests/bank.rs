use std::collections::BTreeMap;

use crate::assessment::domain::{Dimension, QuestionId, QuestionTheme};
use crate::assessment::{QuestionBank, MAX_OPTION_WEIGHT};

#[test]
fn standard_bank_has_forty_five_questions_in_ascending_order() {
    let bank = QuestionBank::standard();

    assert_eq!(bank.len(), 45);
    let ids: Vec<u16> = bank.questions().iter().map(|question| question.id.0).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(ids, sorted, "question ids must be unique and ascending");
}

#[test]
fn every_question_offers_four_options() {
    let bank = QuestionBank::standard();

    for question in bank.questions() {
        assert_eq!(
            question.options.len(),
            4,
            "question {} should offer four options",
            question.id.0
        );
    }
}

#[test]
fn option_weights_stay_within_declared_maximum() {
    let bank = QuestionBank::standard();

    for question in bank.questions() {
        for option in &question.options {
            for dimension in Dimension::ALL {
                let weight = u32::from(option.weights.get(dimension));
                assert!(weight >= 1, "weights in the shipped catalog start at 1");
                assert!(
                    weight <= MAX_OPTION_WEIGHT,
                    "question {} option '{}' exceeds the declared ceiling",
                    question.id.0,
                    option.text
                );
            }
        }
    }
}

#[test]
fn themes_group_five_questions_each() {
    let bank = QuestionBank::standard();

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for question in bank.questions() {
        *counts.entry(question.theme.label()).or_default() += 1;
    }

    assert_eq!(counts.len(), 9);
    for (label, count) in counts {
        assert_eq!(count, 5, "theme {label} should cover five questions");
    }
}

#[test]
fn lookup_finds_known_ids_and_rejects_unknown_ones() {
    let bank = QuestionBank::standard();

    let question = bank.lookup(QuestionId(22)).expect("question 22 exists");
    assert_eq!(question.theme, QuestionTheme::Boundary);
    assert!(bank.lookup(QuestionId(46)).is_none());
    assert!(bank.lookup(QuestionId(0)).is_none());
}
