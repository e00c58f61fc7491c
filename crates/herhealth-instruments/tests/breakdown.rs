use herhealth_core::models::assessment::{AssessmentType, SeverityLevel};
use herhealth_instruments::breakdown::{FactorScore, SignificanceThreshold, project, significant_factors};
use herhealth_instruments::recommendations::{lifestyle_tips, recommendation};
use herhealth_instruments::scoring::AnswerMap;
use herhealth_instruments::{Instrument, get_instrument};

fn factor(value: u8) -> FactorScore {
    FactorScore {
        factor_name: format!("f{value}"),
        value,
        max_value: 3,
    }
}

#[test]
fn projection_follows_question_order() {
    let engine = get_instrument("pcos").unwrap().engine().unwrap();
    let answers = AnswerMap::from_entries(engine.questions(), [(2, 3), (5, 1)]).unwrap();

    let factors = project(engine.questions(), &answers);
    let names: Vec<_> = factors.iter().map(|f| f.factor_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Cycle Regularity",
            "Hirsutism",
            "Skin Health",
            "Weight",
            "Family History",
            "Insulin Resistance",
            "Hair Thinning",
        ]
    );
    let values: Vec<_> = factors.iter().map(|f| f.value).collect();
    assert_eq!(values, vec![0, 3, 0, 0, 1, 0, 0]);
    assert!(factors.iter().all(|f| f.max_value == 3));
}

#[test]
fn projection_is_repeatable() {
    let engine = get_instrument("menopause").unwrap().engine().unwrap();
    let answers = AnswerMap::from_entries(engine.questions(), [(1, 2), (8, 3)]).unwrap();

    assert_eq!(engine.breakdown(&answers), engine.breakdown(&answers));
}

#[test]
fn significance_threshold_is_inclusive() {
    let factors = vec![factor(0), factor(1), factor(2), factor(3)];

    assert_eq!(significant_factors(&factors, SignificanceThreshold::default()), vec!["f2", "f3"]);
    assert_eq!(significant_factors(&factors, SignificanceThreshold(1)), vec!["f1", "f2", "f3"]);
    assert!(significant_factors(&factors, SignificanceThreshold(4)).is_empty());
}

#[test]
fn key_factor_summary_falls_back_per_instrument() {
    let engine = get_instrument("menopause").unwrap().engine().unwrap();
    let set = engine.questions();

    let calm = engine.breakdown(&AnswerMap::from_entries(set, [(1, 1)]).unwrap());
    assert_eq!(
        engine.key_factor_summary(&calm, SignificanceThreshold::default()),
        "No severe symptoms detected"
    );

    let hot = engine.breakdown(&AnswerMap::from_entries(set, [(3, 3), (4, 2)]).unwrap());
    assert_eq!(
        engine.key_factor_summary(&hot, SignificanceThreshold::default()),
        "Vasomotor Symptoms, Sleep Quality"
    );
}

#[test]
fn bar_percent_and_intensity() {
    assert_eq!(factor(0).percent(), 0);
    assert_eq!(factor(1).percent(), 33);
    assert_eq!(factor(2).percent(), 67);
    assert_eq!(factor(3).percent(), 100);

    assert_eq!(factor(0).intensity(), SeverityLevel::Low);
    assert_eq!(factor(1).intensity(), SeverityLevel::Medium);
    assert_eq!(factor(2).intensity(), SeverityLevel::High);
}

#[test]
fn recommendations_cover_every_key() {
    for kind in AssessmentType::ALL {
        for level in SeverityLevel::ALL {
            let rec = recommendation(level, kind);
            assert!(!rec.foods_to_eat.is_empty());
            assert!(!rec.foods_to_avoid.is_empty());
            assert!(!rec.exercise_items.is_empty());
            assert!(rec.sample_meal.starts_with("Breakfast:"));
        }
    }
    assert_eq!(recommendation(SeverityLevel::High, AssessmentType::Pcos).foods_to_eat[0], "Very low-GI foods");
    assert_eq!(lifestyle_tips().len(), 3);
}
