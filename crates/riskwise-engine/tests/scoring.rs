use riskwise_core::models::answers::{AnswerRecord, QuestionGroup, QuestionId};
use riskwise_core::models::score::RiskScore;
use riskwise_engine::score::{cancer_raw, cancer_score, glaucoma_raw, glaucoma_score};

fn with(questions: &[QuestionId]) -> AnswerRecord {
    let mut record = AnswerRecord::default();
    for q in questions {
        record.set(*q, true);
    }
    record
}

#[test]
fn all_false_scores() {
    let record = AnswerRecord::default();
    assert_eq!(glaucoma_raw(&record), 0.0);
    assert_eq!(glaucoma_score(&record).score, 0);
    // Declined screening carries its +1.0 penalty even on an otherwise
    // blank form.
    assert_eq!(cancer_raw(&record), 1.0);
    assert_eq!(cancer_score(&record).score, 1);
}

#[test]
fn cancer_score_zero_requires_affirmed_screening() {
    let record = with(&[QuestionId::RegularScreening]);
    assert_eq!(cancer_raw(&record), -1.0);
    assert_eq!(cancer_score(&record).score, 0);
    assert_eq!(cancer_score(&record).risk_percentage, 0);
}

#[test]
fn elevated_iop_alone_is_two() {
    let record = with(&[QuestionId::ElevatedIop]);
    assert_eq!(glaucoma_raw(&record), 2.0);
    assert_eq!(glaucoma_score(&record).score, 2);
    assert_eq!(glaucoma_score(&record).risk_percentage, 20);
}

#[test]
fn three_acute_symptoms_sum_to_five() {
    let record = with(&[
        QuestionId::ElevatedIop,
        QuestionId::PoorVision,
        QuestionId::SuddenEyePain,
    ]);
    assert_eq!(glaucoma_raw(&record), 5.0);
    assert_eq!(glaucoma_score(&record).score, 5);
}

#[test]
fn weight_loss_with_screening_is_low() {
    let record = with(&[QuestionId::UnexplainedWeightLoss, QuestionId::RegularScreening]);
    assert_eq!(cancer_raw(&record), 2.0);
    assert_eq!(cancer_score(&record).score, 2);
}

#[test]
fn weight_loss_without_screening_is_moderate() {
    let record = with(&[QuestionId::UnexplainedWeightLoss]);
    assert_eq!(cancer_raw(&record), 4.0);
    assert_eq!(cancer_score(&record).score, 4);
}

#[test]
fn screening_flip_moves_raw_sum_by_two() {
    let without = with(&[QuestionId::UnexplainedWeightLoss, QuestionId::Diabetes]);
    let mut with_screening = without;
    with_screening.regular_screening = true;
    assert_eq!(cancer_raw(&without) - cancer_raw(&with_screening), 2.0);
}

#[test]
fn diabetes_feeds_both_formulas() {
    let record = with(&[QuestionId::Diabetes]);
    assert_eq!(glaucoma_raw(&record), 0.91);
    assert_eq!(glaucoma_score(&record).score, 1);
    assert_eq!(cancer_raw(&record), 2.5);
    // Round-half-up on the .5 boundary.
    assert_eq!(cancer_score(&record).score, 3);
}

#[test]
fn everything_affirmed_stays_bounded() {
    let mut record = AnswerRecord::default();
    for q in QuestionId::ALL {
        record.set(q, true);
    }
    // Glaucoma raw sum is 9.51, which rounds up to the ceiling.
    assert!((glaucoma_raw(&record) - 9.51).abs() < 1e-9);
    assert_eq!(glaucoma_score(&record).score, 10);
    assert_eq!(glaucoma_score(&record).risk_percentage, 100);
    // Screening affirmed pulls the cancer sum down to 8.0.
    assert_eq!(cancer_raw(&record), 8.0);
    assert_eq!(cancer_score(&record).score, 8);
}

#[test]
fn everything_but_screening_hits_the_cancer_ceiling() {
    let mut record = AnswerRecord::default();
    for q in QuestionId::ALL {
        record.set(q, true);
    }
    record.regular_screening = false;
    assert_eq!(cancer_raw(&record), 10.0);
    assert_eq!(cancer_score(&record).score, 10);
}

#[test]
fn scores_are_bounded_for_every_single_question() {
    for q in QuestionId::ALL {
        let record = with(&[q]);
        let g = glaucoma_score(&record);
        let c = cancer_score(&record);
        assert!(g.score <= 10, "{q}: glaucoma score out of range");
        assert!(c.score <= 10, "{q}: cancer score out of range");
        assert_eq!(g.risk_percentage, g.score * 10);
        assert_eq!(c.risk_percentage, c.score * 10);
    }
}

#[test]
fn risk_increasing_flips_never_decrease_the_raw_sum() {
    let base = AnswerRecord::default();
    for q in QuestionId::ALL {
        if q == QuestionId::RegularScreening {
            continue;
        }
        let flipped = with(&[q]);
        match q.group() {
            QuestionGroup::Glaucoma => {
                assert!(glaucoma_raw(&flipped) >= glaucoma_raw(&base), "{q}");
            }
            QuestionGroup::Cancer => {
                assert!(cancer_raw(&flipped) >= cancer_raw(&base), "{q}");
            }
            QuestionGroup::Shared => {
                assert!(glaucoma_raw(&flipped) >= glaucoma_raw(&base), "{q}");
                assert!(cancer_raw(&flipped) >= cancer_raw(&base), "{q}");
            }
        }
    }
}

#[test]
fn negative_raw_sum_clamps_to_zero() {
    let score = RiskScore::from_raw(-1.0);
    assert_eq!(score.score, 0);
    assert_eq!(score.risk_percentage, 0);
    assert_eq!(score.raw_value, -1.0);
}

#[test]
fn oversized_raw_sum_clamps_to_ten() {
    let score = RiskScore::from_raw(14.2);
    assert_eq!(score.score, 10);
    assert_eq!(score.risk_percentage, 100);
}
