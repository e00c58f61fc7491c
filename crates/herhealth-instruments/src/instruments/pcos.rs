use herhealth_core::models::assessment::{AssessmentType, SeverityLevel};

use super::graded;
use crate::Instrument;
use crate::bands::Band;
use crate::scoring::Question;

/// PCOS risk screen. 7 questions rated 0–3, raw total 0–21.
pub struct Pcos;

impl Instrument for Pcos {
    fn assessment_type(&self) -> AssessmentType {
        AssessmentType::Pcos
    }

    fn name(&self) -> &str {
        "PCOS Risk Assessment"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                graded(
                    1,
                    "How regular are your menstrual cycles?",
                    "Cycle Regularity",
                    [
                        "Very regular (21-35 days)",
                        "Somewhat irregular (varies by 1-2 weeks)",
                        "Very irregular (unpredictable)",
                        "Absent for 3+ months",
                    ],
                ),
                graded(
                    2,
                    "Do you experience excess hair growth on face, chest, or back?",
                    "Hirsutism",
                    [
                        "No excess hair",
                        "Mild (few noticeable hairs)",
                        "Moderate (requires regular removal)",
                        "Severe (significant unwanted hair)",
                    ],
                ),
                graded(
                    3,
                    "How would you describe your acne or skin issues?",
                    "Skin Health",
                    [
                        "Clear skin, no issues",
                        "Occasional breakouts",
                        "Persistent acne",
                        "Severe, cystic acne",
                    ],
                ),
                graded(
                    4,
                    "Have you experienced unexplained weight gain or difficulty losing weight?",
                    "Weight",
                    [
                        "No weight issues",
                        "Slight weight gain (1-5 kg)",
                        "Moderate weight gain (5-15 kg)",
                        "Significant weight gain (>15 kg)",
                    ],
                ),
                graded(
                    5,
                    "Do you have a family history of PCOS or diabetes?",
                    "Family History",
                    [
                        "No family history",
                        "Diabetes in family",
                        "PCOS in family",
                        "Both PCOS and diabetes",
                    ],
                ),
                graded(
                    6,
                    "Do you experience signs of insulin resistance (dark patches on skin, fatigue after meals)?",
                    "Insulin Resistance",
                    [
                        "No signs",
                        "Occasional fatigue after meals",
                        "Dark patches (acanthosis nigricans)",
                        "Multiple signs of insulin resistance",
                    ],
                ),
                graded(
                    7,
                    "How is your hair health on your scalp?",
                    "Hair Thinning",
                    [
                        "Healthy, full hair",
                        "Slightly thinner than before",
                        "Noticeable thinning",
                        "Significant hair loss",
                    ],
                ),
            ]
        });
        &QUESTIONS
    }

    fn bands(&self) -> &[Band] {
        static BANDS: std::sync::LazyLock<Vec<Band>> = std::sync::LazyLock::new(|| {
            vec![
                Band::below(
                    30,
                    "Low Risk",
                    SeverityLevel::Low,
                    "Your responses indicate low presence of common PCOS indicators. \
                     Continue monitoring your health and maintaining a balanced lifestyle.",
                ),
                Band::below(
                    60,
                    "Medium Risk",
                    SeverityLevel::Medium,
                    "Some responses suggest moderate risk factors. \
                     Consider consulting a healthcare provider for a clinical evaluation.",
                ),
                Band::otherwise(
                    "High Risk",
                    SeverityLevel::High,
                    "Multiple responses indicate significant risk factors. We strongly recommend \
                     consulting a gynecologist or endocrinologist for proper diagnosis and management.",
                ),
            ]
        });
        &BANDS
    }

    fn no_significant_factors(&self) -> &str {
        "No major risk factors detected"
    }
}
