//! Built-in practice texts.
//!
//! A small library of sentences with known sarcasm or figurative language,
//! each with a hint about what to look for.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PracticeCategory {
    Sarcasm,
    Metaphor,
    Simile,
    Hyperbole,
    Idiom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PracticeExample {
    pub id: &'static str,
    pub text: &'static str,
    pub category: PracticeCategory,
    pub description: &'static str,
    pub hint: &'static str,
}

const fn example(
    id: &'static str,
    category: PracticeCategory,
    text: &'static str,
    description: &'static str,
    hint: &'static str,
) -> PracticeExample {
    PracticeExample {
        id,
        text,
        category,
        description,
        hint,
    }
}

pub const PRACTICE_EXAMPLES: &[PracticeExample] = &[
    example(
        "sarcasm-1",
        PracticeCategory::Sarcasm,
        "Oh great, another meeting that could have been an email. This is exactly how I wanted to spend my afternoon.",
        "Workplace frustration expressed through fake enthusiasm",
        "The speaker uses positive words ('great', 'exactly') to express negative feelings",
    ),
    example(
        "sarcasm-2",
        PracticeCategory::Sarcasm,
        "Thanks for letting me know about the deadline after it passed. Your timing is impeccable as always.",
        "Criticism disguised as a compliment",
        "Praising 'impeccable timing' when the timing was actually terrible",
    ),
    example(
        "sarcasm-3",
        PracticeCategory::Sarcasm,
        "I love how you always remember to take out the trash... three days after I asked.",
        "Frustration with forgetfulness",
        "The word 'love' is used sarcastically to express annoyance",
    ),
    example(
        "metaphor-1",
        PracticeCategory::Metaphor,
        "Life is a journey with many unexpected turns. Sometimes the detours lead to the most beautiful destinations.",
        "Life compared to a physical journey",
        "Life isn't literally a road, but the comparison helps us understand experiences",
    ),
    example(
        "metaphor-2",
        PracticeCategory::Metaphor,
        "She has a heart of gold and always puts others before herself.",
        "Kindness compared to precious metal",
        "The heart isn't made of gold - it means the person is exceptionally kind",
    ),
    example(
        "simile-1",
        PracticeCategory::Simile,
        "The news spread through the office like wildfire, and soon everyone knew about the promotion.",
        "Fast information spread compared to fire",
        "Uses 'like' to compare - information moved as quickly as fire spreads",
    ),
    example(
        "simile-2",
        PracticeCategory::Simile,
        "After the marathon, my legs felt like jelly and I could barely walk to the car.",
        "Muscle exhaustion compared to jelly",
        "Uses 'like' to describe weakness - legs weren't literally jelly",
    ),
    example(
        "hyperbole-1",
        PracticeCategory::Hyperbole,
        "I've told you a million times to clean your room! Do I need to put it in writing?",
        "Extreme exaggeration for emphasis",
        "Not literally a million times - the exaggeration emphasizes frustration",
    ),
    example(
        "hyperbole-2",
        PracticeCategory::Hyperbole,
        "This bag weighs a ton! What do you have in here, bricks?",
        "Weight exaggeration for effect",
        "The bag doesn't literally weigh a ton (2000 lbs) - it just feels very heavy",
    ),
    example(
        "idiom-1",
        PracticeCategory::Idiom,
        "Let's not beat around the bush. We need to discuss the budget cuts directly.",
        "Common phrase meaning 'get to the point'",
        "No actual bushes involved - this phrase means to speak directly without avoiding the topic",
    ),
    example(
        "idiom-2",
        PracticeCategory::Idiom,
        "When it rains, it pours. First my car broke down, then I lost my keys, and now this.",
        "Expression about misfortunes coming together",
        "Not about actual weather - means problems often happen all at once",
    ),
    example(
        "idiom-3",
        PracticeCategory::Idiom,
        "I'm feeling under the weather today, so I might leave work early.",
        "Common phrase for feeling unwell",
        "Not literally under weather - means feeling sick or not well",
    ),
];

pub fn find_example(id: &str) -> Option<&'static PracticeExample> {
    PRACTICE_EXAMPLES.iter().find(|example| example.id == id)
}

/// Examples of `category`, or all of them for `None`.
pub fn examples_in(
    category: Option<PracticeCategory>,
) -> impl Iterator<Item = &'static PracticeExample> {
    PRACTICE_EXAMPLES
        .iter()
        .filter(move |example| category.is_none_or(|category| example.category == category))
}
