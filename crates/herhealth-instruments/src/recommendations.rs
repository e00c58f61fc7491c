//! Static diet, exercise and lifestyle guidance keyed by severity level and
//! assessment type. Not computed; the engine only picks the key.

use herhealth_core::models::assessment::{AssessmentType, SeverityLevel};
use herhealth_core::models::recommendation::{LifestyleTip, Recommendation};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

struct Entry {
    eat: &'static [&'static str],
    avoid: &'static [&'static str],
    meal: &'static str,
    exercise: &'static [&'static str],
}

impl Entry {
    fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            foods_to_eat: owned(self.eat),
            foods_to_avoid: owned(self.avoid),
            sample_meal: self.meal.to_string(),
            exercise_items: owned(self.exercise),
        }
    }
}

/// Total over every (severity, assessment type) pair.
pub fn recommendation(severity: SeverityLevel, assessment_type: AssessmentType) -> Recommendation {
    entry(severity, assessment_type).to_recommendation()
}

pub fn lifestyle_tips() -> Vec<LifestyleTip> {
    [
        ("Sleep", "7-9 hours of quality sleep"),
        ("Stress Management", "Daily meditation or breathing"),
        ("Hydration", "8-10 glasses of water daily"),
    ]
    .iter()
    .map(|(title, detail)| LifestyleTip {
        title: title.to_string(),
        detail: detail.to_string(),
    })
    .collect()
}

fn entry(severity: SeverityLevel, assessment_type: AssessmentType) -> &'static Entry {
    use AssessmentType::*;
    use SeverityLevel::*;

    match (assessment_type, severity) {
        (Pcos, Low) => &Entry {
            eat: &["Whole grains", "Leafy vegetables", "Lean proteins", "Berries", "Nuts & seeds"],
            avoid: &["Processed foods", "Sugary drinks", "Refined carbs"],
            meal: "Breakfast: Oatmeal with berries | Lunch: Grilled chicken salad | Dinner: Salmon with vegetables",
            exercise: &["30 min brisk walking daily", "Swimming 2x/week", "Yoga 2x/week", "Light strength training"],
        },
        (Pcos, Medium) => &Entry {
            eat: &["Low-GI foods", "High-fiber vegetables", "Omega-3 rich fish", "Legumes", "Anti-inflammatory spices"],
            avoid: &["White bread & pasta", "Sugary snacks", "Red meat", "Dairy (if sensitive)"],
            meal: "Breakfast: Smoothie with spinach & chia | Lunch: Quinoa bowl | Dinner: Baked fish with sweet potato",
            exercise: &["45 min cardio 5x/week", "HIIT 2x/week", "Yoga for stress 3x/week", "Strength training 2x/week"],
        },
        (Pcos, High) => &Entry {
            eat: &["Very low-GI foods", "Non-starchy vegetables", "Plant proteins", "Flaxseeds", "Green tea"],
            avoid: &["All refined sugars", "Processed carbs", "Fried foods", "Alcohol", "Caffeine"],
            meal: "Breakfast: Eggs with avocado | Lunch: Large salad with chickpeas | Dinner: Grilled vegetables with tofu",
            exercise: &["Daily walking 60 min", "Low-impact aerobics", "Yoga & meditation daily", "Resistance training 3x/week"],
        },
        (Menstrual, Low) => &Entry {
            eat: &["Iron-rich foods", "Vitamin C fruits", "Whole grains", "Dark chocolate", "Water-rich foods"],
            avoid: &["Excessive salt", "Caffeine during period", "Alcohol"],
            meal: "Breakfast: Spinach omelette | Lunch: Lentil soup | Dinner: Lean beef with broccoli",
            exercise: &["Regular cardio", "Strength training", "Yoga", "Stretching"],
        },
        (Menstrual, Medium) => &Entry {
            eat: &["Leafy greens", "Ginger & turmeric", "Bananas", "Salmon", "Chamomile tea"],
            avoid: &["Processed foods", "High sodium foods", "Sugary snacks"],
            meal: "Breakfast: Banana smoothie | Lunch: Kale salad | Dinner: Grilled salmon with asparagus",
            exercise: &["Moderate walking during period", "Gentle yoga", "Light stretching", "Swimming"],
        },
        (Menstrual, High) => &Entry {
            eat: &["Anti-inflammatory foods", "Magnesium-rich foods", "Omega-3 fatty acids", "Herbal teas", "Hydrating foods"],
            avoid: &["Inflammatory foods", "Trans fats", "Excessive dairy", "Spicy foods during period"],
            meal: "Breakfast: Chia pudding | Lunch: Buddha bowl | Dinner: Vegetable stir-fry with brown rice",
            exercise: &["Very gentle movement", "Restorative yoga", "Short walks", "Deep breathing exercises"],
        },
        (Menopause, Low) => &Entry {
            eat: &["Calcium-rich foods", "Vitamin D sources", "Soy products", "Whole grains", "Fruits & vegetables"],
            avoid: &["Excessive caffeine", "Alcohol", "Spicy foods (if hot flashes)"],
            meal: "Breakfast: Greek yogurt with almonds | Lunch: Tofu stir-fry | Dinner: Grilled fish with calcium-rich greens",
            exercise: &["Weight-bearing exercises", "Balance training", "Cardio 3-5x/week", "Flexibility work"],
        },
        (Menopause, Medium) => &Entry {
            eat: &["Phytoestrogen foods", "Flaxseeds", "Legumes", "Fatty fish", "Leafy greens"],
            avoid: &["Sugar", "Processed foods", "Saturated fats", "Hot beverages (if hot flashes)"],
            meal: "Breakfast: Flaxseed smoothie | Lunch: Edamame salad | Dinner: Salmon with kale",
            exercise: &["Daily walking 45 min", "Strength training 3x/week", "Tai Chi", "Swimming"],
        },
        (Menopause, High) => &Entry {
            eat: &["High calcium foods", "Vitamin K vegetables", "Protein-rich foods", "Bone broth", "Fermented foods"],
            avoid: &["All sugars", "Refined carbs", "Alcohol", "Caffeine", "Trigger foods"],
            meal: "Breakfast: Egg white frittata | Lunch: Sardine salad | Dinner: Bone broth soup with vegetables",
            exercise: &["Bone-strengthening exercises", "Daily movement", "Water aerobics", "Chair yoga"],
        },
    }
}
