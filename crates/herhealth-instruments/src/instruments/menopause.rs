use herhealth_core::models::assessment::{AssessmentType, SeverityLevel};

use super::graded;
use crate::Instrument;
use crate::bands::Band;
use crate::scoring::Question;

/// Menopause stage estimate. 8 questions rated 0–3, raw total 0–24.
/// Four bands: two of them share the `low` severity.
pub struct Menopause;

impl Instrument for Menopause {
    fn assessment_type(&self) -> AssessmentType {
        AssessmentType::Menopause
    }

    fn name(&self) -> &str {
        "Menopause Stage Assessment"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                graded(
                    1,
                    "What is your current age?",
                    "Age Factor",
                    ["Under 40", "40-45", "46-50", "51 or older"],
                ),
                graded(
                    2,
                    "How regular are your menstrual periods?",
                    "Period Regularity",
                    [
                        "Very regular",
                        "Slightly irregular (varies by a few days)",
                        "Very irregular or skipping months",
                        "Periods have stopped",
                    ],
                ),
                graded(
                    3,
                    "Do you experience hot flashes or night sweats?",
                    "Vasomotor Symptoms",
                    [
                        "Never",
                        "Occasionally (few times a month)",
                        "Frequently (weekly)",
                        "Daily or multiple times daily",
                    ],
                ),
                graded(
                    4,
                    "How would you describe your sleep quality?",
                    "Sleep Quality",
                    [
                        "Sleep well most nights",
                        "Occasional difficulty sleeping",
                        "Frequent sleep problems",
                        "Severe insomnia or constant waking",
                    ],
                ),
                graded(
                    5,
                    "Have you noticed mood changes or increased irritability?",
                    "Mood Changes",
                    [
                        "No noticeable changes",
                        "Mild mood fluctuations",
                        "Noticeable mood swings",
                        "Significant mood disturbances",
                    ],
                ),
                graded(
                    6,
                    "Do you experience vaginal dryness or discomfort?",
                    "Vaginal Health",
                    [
                        "No issues",
                        "Occasional dryness",
                        "Frequent discomfort",
                        "Constant dryness/discomfort",
                    ],
                ),
                graded(
                    7,
                    "Do you experience joint pain or stiffness?",
                    "Joint Health",
                    [
                        "No joint issues",
                        "Occasional stiffness",
                        "Regular joint pain",
                        "Significant joint problems",
                    ],
                ),
                graded(
                    8,
                    "How would you rate your energy levels?",
                    "Energy & Fatigue",
                    [
                        "Good energy levels",
                        "Slightly lower than usual",
                        "Noticeably fatigued",
                        "Constantly exhausted",
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
                    25,
                    "Pre-menopausal",
                    SeverityLevel::Low,
                    "Your symptoms suggest you're likely in a pre-menopausal stage. \
                     Continue monitoring any changes and maintain a healthy lifestyle.",
                ),
                Band::below(
                    50,
                    "Early Perimenopause",
                    SeverityLevel::Low,
                    "Your symptoms indicate you may be entering perimenopause. \
                     This is a normal transition that can last several years.",
                ),
                Band::below(
                    75,
                    "Late Perimenopause",
                    SeverityLevel::Medium,
                    "You're showing signs of late perimenopause. \
                     Consider discussing symptom management options with your healthcare provider.",
                ),
                Band::otherwise(
                    "Menopausal/Post-menopausal",
                    SeverityLevel::High,
                    "Your symptoms suggest you're in menopause or post-menopause. \
                     Focus on maintaining bone and heart health.",
                ),
            ]
        });
        &BANDS
    }

    fn no_significant_factors(&self) -> &str {
        "No severe symptoms detected"
    }
}
