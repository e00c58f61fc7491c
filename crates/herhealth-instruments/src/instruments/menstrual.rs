use herhealth_core::models::assessment::{AssessmentType, SeverityLevel};

use super::graded;
use crate::Instrument;
use crate::bands::Band;
use crate::scoring::Question;

/// Menstrual health check. 6 questions rated 0–3, raw total 0–18.
pub struct Menstrual;

impl Instrument for Menstrual {
    fn assessment_type(&self) -> AssessmentType {
        AssessmentType::Menstrual
    }

    fn name(&self) -> &str {
        "Menstrual Health Assessment"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                graded(
                    1,
                    "How would you describe your cycle regularity?",
                    "Cycle Regularity",
                    [
                        "Very regular (predictable within 1-2 days)",
                        "Mostly regular (varies by a few days)",
                        "Irregular (varies by a week or more)",
                        "Very unpredictable or absent",
                    ],
                ),
                graded(
                    2,
                    "How severe is your menstrual pain?",
                    "Pain Level",
                    [
                        "Minimal or no pain",
                        "Mild (manageable without medication)",
                        "Moderate (requires pain relief)",
                        "Severe (interferes with daily activities)",
                    ],
                ),
                graded(
                    3,
                    "How would you describe your menstrual flow?",
                    "Flow Intensity",
                    [
                        "Light to moderate",
                        "Moderate with occasional heavy days",
                        "Heavy (changing protection every 2-3 hours)",
                        "Very heavy with clots",
                    ],
                ),
                graded(
                    4,
                    "How long does your period typically last?",
                    "Period Duration",
                    ["3-5 days", "5-7 days", "7-10 days", "More than 10 days"],
                ),
                graded(
                    5,
                    "Do you experience PMS symptoms?",
                    "PMS Symptoms",
                    [
                        "Minimal or none",
                        "Mild (slightly noticeable)",
                        "Moderate (affects mood/comfort)",
                        "Severe (significantly impacts life)",
                    ],
                ),
                graded(
                    6,
                    "How is your energy level during your period?",
                    "Energy & Fatigue",
                    [
                        "Normal energy levels",
                        "Slightly tired",
                        "Noticeably fatigued",
                        "Extremely exhausted",
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
                    "Healthy Cycle",
                    SeverityLevel::Low,
                    "Your menstrual health appears to be in good condition. \
                     Continue tracking your cycle and maintaining healthy habits.",
                ),
                Band::below(
                    60,
                    "Moderate Concerns",
                    SeverityLevel::Medium,
                    "Some aspects of your menstrual health could benefit from attention. \
                     Consider lifestyle adjustments and monitoring any patterns.",
                ),
                Band::otherwise(
                    "Needs Attention",
                    SeverityLevel::High,
                    "Your responses indicate several areas that may need medical attention. \
                     We recommend consulting with a gynecologist for proper evaluation.",
                ),
            ]
        });
        &BANDS
    }

    fn no_significant_factors(&self) -> &str {
        "No major concerns detected"
    }
}
