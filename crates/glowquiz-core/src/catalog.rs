//! Built-in skincare quiz.
//!
//! Ten questions, with rules keyed on skin type (1), skin concerns (2),
//! makeup preference (5), and lipstick colour (8). The remaining questions
//! are asked but do not drive any rule yet.

use crate::model::{ProductRecommendation, Question, QuestionKind, QuizDefinition, QuizOption};
use crate::rules::{FallbackRule, RecommendationRule, RuleSet, DEFAULT_MIN_RESULTS};

/// Name of the product appended when fewer than three rules fire.
pub const FALLBACK_BLUSH: &str = "peripera - Pure Blushed Sunshine Cheek";

pub const SKIN_TYPE: u32 = 1;
pub const SKIN_CONCERNS: u32 = 2;
pub const MAKEUP: u32 = 5;
pub const LIPSTICK: u32 = 8;

fn single(id: u32, prompt: &str, options: &[(&str, &str)]) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        kind: QuestionKind::Single,
        options: options.iter().map(|(v, t)| QuizOption::new(*v, *t)).collect(),
    }
}

fn multi(id: u32, prompt: &str, max_select: usize, options: &[(&str, &str)]) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        kind: QuestionKind::Multi { max_select },
        options: options.iter().map(|(v, t)| QuizOption::new(*v, *t)).collect(),
    }
}

fn product(name: &str, description: &str, price: &str, image: &str) -> ProductRecommendation {
    ProductRecommendation {
        name: name.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        image: image.to_string(),
    }
}

pub fn questions() -> Vec<Question> {
    vec![
        single(
            SKIN_TYPE,
            "What is your skin type?",
            &[
                ("normal", "Normal - neither too oily nor too dry"),
                ("dry", "Dry - feels tight and flakes easily"),
                ("oily", "Oily - shiny, especially in the T-zone"),
                ("combination", "Combination - oily T-zone, normal or dry elsewhere"),
                ("sensitive", "Sensitive - easily irritated and red"),
            ],
        ),
        multi(
            SKIN_CONCERNS,
            "Which skin concerns do you most want to address? (Choose up to 3)",
            3,
            &[
                ("acne", "Acne and breakouts"),
                ("blackheads", "Blackheads and clogged pores"),
                ("dullness", "Dull, lacklustre skin"),
                ("aging", "Signs of aging (wrinkles, fine lines)"),
                ("hyperpigmentation", "Hyperpigmentation and dark spots"),
                ("dryness", "Dryness and flaking"),
                ("redness", "Redness and irritation"),
            ],
        ),
        single(
            3,
            "How often do you wear sunscreen?",
            &[
                ("daily", "Every day, even indoors"),
                ("outdoor", "Only when I'm outdoors"),
                ("sometimes", "Sometimes, when I remember"),
                ("rarely", "Rarely or never"),
            ],
        ),
        single(
            4,
            "How old are you?",
            &[
                ("under20", "Under 20"),
                ("20-25", "20-25"),
                ("26-35", "26-35"),
                ("36-45", "36-45"),
                ("over45", "Over 45"),
            ],
        ),
        single(
            MAKEUP,
            "What is your makeup preference?",
            &[
                ("natural", "Natural / no-makeup look"),
                ("medium", "Medium coverage for every day"),
                ("full", "Full glam for special occasions"),
                ("none", "I don't wear makeup"),
            ],
        ),
        multi(
            6,
            "What do you look for in skincare products? (Choose up to 3)",
            3,
            &[
                ("natural", "Natural and organic ingredients"),
                ("effective", "Clinically proven results"),
                ("affordable", "Affordable price"),
                ("luxury", "A luxurious experience"),
                ("cruelty-free", "Cruelty-free and vegan"),
                ("fragrance-free", "Fragrance-free"),
            ],
        ),
        single(
            7,
            "How many steps do you want in your skincare routine?",
            &[
                ("minimal", "Minimal (1-3 steps)"),
                ("moderate", "Moderate (4-6 steps)"),
                ("extensive", "Extensive (7+ steps)"),
            ],
        ),
        single(
            LIPSTICK,
            "Which lipstick colour do you wear most often?",
            &[
                ("nude", "Nude / MLBB (My Lips But Better)"),
                ("pink", "Pink / coral"),
                ("red", "Red"),
                ("berry", "Berry / plum"),
                ("none", "I don't wear lipstick"),
            ],
        ),
        single(
            9,
            "Which product category interests you most right now?",
            &[
                ("skincare", "Skincare"),
                ("makeup", "Makeup"),
                ("haircare", "Haircare"),
                ("bodycare", "Bodycare"),
            ],
        ),
        single(
            10,
            "What is your monthly beauty budget?",
            &[
                ("budget", "Under Rp 200.000"),
                ("mid", "Rp 200.000 - Rp 500.000"),
                ("high", "Rp 500.000 - Rp 1.000.000"),
                ("luxury", "Over Rp 1.000.000"),
            ],
        ),
    ]
}

pub fn rules() -> RuleSet {
    let rules = vec![
        // skin type
        RecommendationRule::equals(
            SKIN_TYPE,
            "dry",
            product(
                "COSRX Advanced Snail 92 All In One Cream",
                "Intensive moisturising cream with snail mucin for dry skin",
                "Rp 250.000",
                "https://i.pinimg.com/736x/62/3e/07/623e076e499823915c456a43b817f985.jpg",
            ),
        ),
        RecommendationRule::equals(
            SKIN_TYPE,
            "oily",
            product(
                "The Ordinary Niacinamide 10% + Zinc 1%",
                "Serum that controls oil production and minimises the look of pores",
                "Rp 180.000",
                "https://i.pinimg.com/736x/df/c4/d0/dfc4d044f6a4335acde482e40473afbc.jpg",
            ),
        ),
        RecommendationRule::equals(
            SKIN_TYPE,
            "combination",
            product(
                "Some By Mi AHA-BHA-PHA 30 Days Miracle Serum",
                "Three-acid serum that balances combination skin",
                "Rp 220.000",
                "https://i.pinimg.com/736x/84/0b/2b/840b2b48f8cc822ccb781d087eae0eb2.jpg",
            ),
        ),
        RecommendationRule::equals(
            SKIN_TYPE,
            "sensitive",
            product(
                "Avene Thermal Spring Water",
                "Soothing thermal water for sensitive skin",
                "Rp 200.000",
                "https://i.pinimg.com/736x/ec/53/a8/ec53a84d7d4da6adda884ee8684b1bc2.jpg",
            ),
        ),
        RecommendationRule::equals(
            SKIN_TYPE,
            "normal",
            product(
                "Laneige Water Bank Blue Hyaluronic Cream",
                "Lightweight moisturiser for normal skin",
                "Rp 350.000",
                "https://i.pinimg.com/736x/d4/09/e9/d409e9a3f1967ae3083d38715f01905c.jpg",
            ),
        ),
        // skin concerns
        RecommendationRule::contains(
            SKIN_CONCERNS,
            "acne",
            product(
                "COSRX Acne Pimple Master Patch",
                "Patches that help blemishes heal quickly",
                "Rp 50.000",
                "https://i.pinimg.com/736x/fa/d5/67/fad567401049577e7d462f7f95dbe37f.jpg",
            ),
        ),
        RecommendationRule::contains(
            SKIN_CONCERNS,
            "aging",
            product(
                "Kiehl's Powerful-Strength Line-Reducing Concentrate",
                "Vitamin C serum that reduces fine lines and wrinkles",
                "Rp 950.000",
                "https://i.pinimg.com/736x/0f/76/c3/0f76c374d370903bfae97e7395fc9b55.jpg",
            ),
        ),
        RecommendationRule::contains(
            SKIN_CONCERNS,
            "hyperpigmentation",
            product(
                "ANUA Peach 70% Niacinamide Serum",
                "High-strength niacinamide serum that brightens dark spots",
                "Rp 350.000",
                "https://i.pinimg.com/736x/d4/09/e9/d409e9a3f1967ae3083d38715f01905c.jpg",
            ),
        ),
        RecommendationRule::contains(
            SKIN_CONCERNS,
            "dryness",
            product(
                "Laneige Water Sleeping Mask",
                "Hydrating overnight mask for dry skin",
                "Rp 350.000",
                "https://i.pinimg.com/736x/a4/67/aa/a467aa9439c3dbb3f8ba987f491efba4.jpg",
            ),
        ),
        // makeup preference
        RecommendationRule::equals(
            MAKEUP,
            "natural",
            product(
                "Rare Beauty Liquid Touch Brightening Concealer",
                "Lightweight concealer for a natural look",
                "Rp 450.000",
                "https://i.pinimg.com/736x/20/aa/e2/20aae236b92f3173fd9214eed4a06a21.jpg",
            ),
        ),
        RecommendationRule::equals(
            MAKEUP,
            "medium",
            product(
                "Maybelline Fit Me Matte + Poreless Foundation",
                "Medium-coverage foundation with a matte finish",
                "Rp 180.000",
                "https://i.pinimg.com/736x/71/0e/9e/710e9e2dae353907be87373c86fd546e.jpg",
            ),
        ),
        RecommendationRule::equals(
            MAKEUP,
            "full",
            product(
                "Huda Beauty Faux Filter Foundation",
                "Full-coverage foundation for a flawless finish",
                "Rp 750.000",
                "https://i.pinimg.com/736x/60/1c/8b/601c8b0b0e32d5fffabcc2791f2163db.jpg",
            ),
        ),
        // lipstick colour
        RecommendationRule::equals(
            LIPSTICK,
            "nude",
            product(
                "Barenbliss Cherry Makes Cheerful Lip Velvet",
                "Long-wearing velvet lip tint in nude shades",
                "Rp 120.000",
                "https://i.pinimg.com/736x/1a/7d/20/1a7d20a4d8e191a7d99e9028938367ef.jpg",
            ),
        ),
        RecommendationRule::equals(
            LIPSTICK,
            "pink",
            product(
                "peripera Ink Velvet Lip Tint",
                "Highly pigmented pink lip tint",
                "Rp 100.000",
                "https://i.pinimg.com/736x/7e/8c/9f/7e8c9f06c61d1228bfe1e00e289bacfa.jpg",
            ),
        ),
        RecommendationRule::equals(
            LIPSTICK,
            "red",
            product(
                "MAC Ruby Woo Lipstick",
                "Iconic matte red lipstick",
                "Rp 350.000",
                "https://i.pinimg.com/736x/a4/60/73/a46073f7b8347e60196005d9b6e28f51.jpg",
            ),
        ),
    ];

    RuleSet {
        rules,
        fallback: Some(FallbackRule {
            min_results: DEFAULT_MIN_RESULTS,
            product: product(
                FALLBACK_BLUSH,
                "Buildable blush with a natural finish",
                "Rp 150.000",
                "https://i.pinimg.com/736x/5d/96/11/5d96119c442b4aa43c26389d840385f2.jpg",
            ),
        }),
    }
}

/// The canonical skincare quiz.
pub fn skincare() -> QuizDefinition {
    QuizDefinition {
        id: "skincare".into(),
        title: "Find Your Beauty Match".into(),
        description: "Answer ten quick questions and get product picks for your skin.".into(),
        questions: questions(),
        rules: rules(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::validate_quiz;

    #[test]
    fn builtin_quiz_is_valid() {
        let quiz = skincare();
        assert_eq!(quiz.question_count(), 10);
        let warnings = validate_quiz(&quiz);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn question_ids_are_sequential() {
        let ids: Vec<u32> = questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn rule_priority_order() {
        let order: Vec<u32> = rules().rules.iter().map(|r| r.when.question()).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }
}
