use crate::models::RecipientProfile;

pub const GIFT_REQUEST: &str = include_str!("../data/prompts/gift_request.txt");
pub const INSTRUCTION_STANDARD: &str = include_str!("../data/prompts/instruction_standard.txt");
pub const INSTRUCTION_REGENERATE: &str = include_str!("../data/prompts/instruction_regenerate.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// Build the gift-idea prompt from a recipient profile.
///
/// Pure string templating: profile fields are inserted verbatim, and the
/// regenerate flag swaps in an instruction asking the model for fresh,
/// non-repeating suggestions.
pub fn build_gift_prompt(profile: &RecipientProfile, is_regenerate: bool) -> String {
    let instruction = if is_regenerate {
        INSTRUCTION_REGENERATE
    } else {
        INSTRUCTION_STANDARD
    };

    render(
        GIFT_REQUEST,
        &[
            ("name", profile.recipient_name.as_str()),
            ("age", profile.age.as_str()),
            ("gender", profile.gender.as_str()),
            ("relationship", profile.relationship.as_str()),
            ("interests", profile.interests.as_str()),
            ("budget", profile.budget.as_str()),
            ("gift_type", profile.preferred_gift_type.as_str()),
            ("instruction", instruction.trim()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> RecipientProfile {
        RecipientProfile {
            recipient_name: "Maya".to_string(),
            age: "29".to_string(),
            gender: "female".to_string(),
            relationship: "sister".to_string(),
            interests: "hiking, photography".to_string(),
            budget: "$50-$100".to_string(),
            preferred_gift_type: "experience".to_string(),
        }
    }

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!GIFT_REQUEST.is_empty());
        assert!(!INSTRUCTION_STANDARD.is_empty());
        assert!(!INSTRUCTION_REGENERATE.is_empty());
    }

    #[test]
    fn test_gift_request_has_all_placeholders() {
        for key in [
            "{{name}}",
            "{{age}}",
            "{{gender}}",
            "{{relationship}}",
            "{{interests}}",
            "{{budget}}",
            "{{gift_type}}",
            "{{instruction}}",
        ] {
            assert!(GIFT_REQUEST.contains(key), "missing placeholder {}", key);
        }
    }

    #[test]
    fn test_build_gift_prompt_includes_profile_fields_verbatim() {
        let prompt = build_gift_prompt(&sample_profile(), false);

        assert!(prompt.contains("Maya"));
        assert!(prompt.contains("29"));
        assert!(prompt.contains("sister"));
        assert!(prompt.contains("hiking, photography"));
        assert!(prompt.contains("$50-$100"));
        assert!(prompt.contains("experience"));
        assert!(!prompt.contains("{{"), "unreplaced placeholder in: {}", prompt);
    }

    #[test]
    fn test_build_gift_prompt_asks_for_five_ideas_and_json_array() {
        let prompt = build_gift_prompt(&sample_profile(), false);

        assert!(prompt.contains("5 specific gift ideas"));
        assert!(prompt.contains("priceRange"));
        assert!(prompt.contains("whereToBuy"));
        assert!(prompt.contains("recommendedBrands"));
        assert!(prompt.contains("Start your response with [ and end with ]"));
    }

    #[test]
    fn test_build_gift_prompt_regenerate_swaps_instruction() {
        let standard = build_gift_prompt(&sample_profile(), false);
        let regenerate = build_gift_prompt(&sample_profile(), true);

        assert!(regenerate.contains("COMPLETELY DIFFERENT"));
        assert!(regenerate.contains("think outside the box"));
        assert!(!standard.contains("COMPLETELY DIFFERENT"));
    }
}
