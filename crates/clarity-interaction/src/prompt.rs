//! Prompt and tool schema for direct model calls.

use serde_json::{Value, json};

pub const TOOL_NAME: &str = "provide_analysis";

pub const SYSTEM_PROMPT: &str = r#"You are an accessibility-focused text analyzer that helps people understand sarcasm, figurative language, and tone. Your role is to help individuals who may struggle with interpreting tone and non-literal speech, such as those on the autism spectrum.

Analyze the provided text and return a JSON response using the following tool call format. Be thorough and educational in your explanations.

IMPORTANT: You must analyze for ALL types of figurative language, including:
- Sarcasm (saying the opposite of what you mean)
- Metaphors (direct comparisons without "like" or "as")
- Similes (comparisons using "like" or "as")
- Personification (giving human qualities to non-human things)
- Hyperbole (extreme exaggeration for effect)
- Idioms (phrases with non-literal cultural meanings)
- Symbolism (using objects to represent ideas)
- Imagery (vivid descriptive language)

For each piece of sarcasm or figurative language found:
- Identify the TYPE of figurative language (metaphor, simile, personification, hyperbole, idiom, symbolism, imagery)
- Explain WHY it qualifies as that type
- Provide the LITERAL meaning (what the words actually say)
- Provide the INTENDED meaning (what the speaker actually means)
- Give a confidence level (high, medium, low)
- Quote the phrase exactly as it appears in the text

Also provide a SIMPLIFIED EXPLANATION of the entire text - rewrite it in simple, clear, accessible language that removes all figurative language and expresses the core meaning directly.

Be encouraging and supportive in tone. If the text is straightforward with no figurative language, celebrate that clarity."#;

pub fn user_message(text: &str) -> String {
    format!(
        "Please analyze this text for sarcasm and all types of figurative language:\n\n\"{}\"",
        text
    )
}

fn instance_schema(with_type: bool) -> Value {
    let mut properties = json!({
        "phrase": { "type": "string", "description": "The exact phrase from the text" },
        "literalMeaning": { "type": "string", "description": "What the words literally say" },
        "intendedMeaning": { "type": "string", "description": "What the speaker actually means" },
        "explanation": { "type": "string", "description": "Why this is non-literal - explain the mechanism" },
        "confidence": { "type": "string", "enum": ["high", "medium", "low"] }
    });
    let mut required = vec![
        "phrase",
        "literalMeaning",
        "intendedMeaning",
        "explanation",
        "confidence",
    ];

    if with_type {
        properties["type"] = json!({
            "type": "string",
            "enum": ["metaphor", "simile", "personification", "hyperbole", "idiom", "symbolism", "imagery"],
            "description": "The type of figurative language"
        });
        required.insert(1, "type");
    }

    json!({ "type": "object", "properties": properties, "required": required })
}

/// The single function tool the model is forced to call.
pub fn analysis_tool() -> Value {
    json!({
        "type": "function",
        "function": {
            "name": TOOL_NAME,
            "description": "Provide the analysis of text for sarcasm and figurative language",
            "parameters": {
                "type": "object",
                "properties": {
                    "overallTone": {
                        "type": "string",
                        "description": "A brief, friendly description of the overall tone of the text"
                    },
                    "simplifiedExplanation": {
                        "type": "string",
                        "description": "A plain-language rewrite of the text without figurative language"
                    },
                    "hasSarcasm": { "type": "boolean" },
                    "hasFigurativeLanguage": { "type": "boolean" },
                    "sarcasmInstances": { "type": "array", "items": instance_schema(false) },
                    "figurativeLanguageInstances": { "type": "array", "items": instance_schema(true) },
                    "summary": {
                        "type": "string",
                        "description": "A supportive, encouraging summary of the analysis in 1-2 sentences"
                    }
                },
                "required": [
                    "overallTone", "simplifiedExplanation", "hasSarcasm", "hasFigurativeLanguage",
                    "sarcasmInstances", "figurativeLanguageInstances", "summary"
                ]
            }
        }
    })
}

pub fn tool_choice() -> Value {
    json!({ "type": "function", "function": { "name": TOOL_NAME } })
}
