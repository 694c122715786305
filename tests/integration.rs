use gift_idea_generator::{
    ai::MockTextClient,
    fallback,
    models::{GenerationResult, RecipientProfile},
    pipeline::{GiftIdeaGenerator, REQUEST_TIMEOUT},
};
use std::time::Duration;

const FIVE_IDEAS_REPLY: &str = r#"Of course! Here are five suggestions:

[
  {"name":"National Park Annual Pass","description":"A year of access to every national park.","reason":"They love hiking and the outdoors.","priceRange":"$80","whereToBuy":["USGS Store","REI"],"recommendedBrands":["America the Beautiful"]},
  {"name":"Camera Strap","description":"A comfortable leather camera strap.","reason":"Pairs with their photography hobby.","priceRange":"$40-$60","whereToBuy":["Peak Design","Etsy"],"recommendedBrands":["Peak Design"]},
  {"name":"Trail Guidebook","description":"A guide to regional day hikes.","reason":"Helps plan weekend trips.","priceRange":"$20-$30","whereToBuy":["Bookshop.org"],"recommendedBrands":["Falcon Guides"]},
  {"name":"Insulated Water Bottle","description":"Keeps drinks cold on long hikes.","reason":"Practical for their trail days.","priceRange":"$30-$45","whereToBuy":["REI","Target"],"recommendedBrands":["Hydro Flask","Yeti"]},
  {"name":"Photo Printing Credit","description":"Credit for printing their favorite shots.","reason":"Turns their photos into keepsakes.","priceRange":"$25-$50","whereToBuy":["Artifact Uprising"],"recommendedBrands":["Artifact Uprising"]}
]

Happy gifting!"#;

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

fn assert_fallback_envelope(result: &GenerationResult) {
    assert!(!result.success);
    assert_eq!(result.fallback, Some(true));
    assert_eq!(result.data, fallback::catalog());
    assert_eq!(result.data.len(), 5);
    assert!(result.error.as_deref().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_full_pipeline_with_prose_wrapped_reply() {
    let generator = GiftIdeaGenerator::with_service(
        Box::new(MockTextClient::new().with_response(FIVE_IDEAS_REPLY.to_string())),
        REQUEST_TIMEOUT,
    );

    let result = generator.generate(&sample_profile(), false).await;

    assert!(result.success);
    assert!(result.error.is_none());
    assert!(result.fallback.is_none());
    assert_eq!(result.data.len(), 5);
    assert_eq!(result.data[0].name, "National Park Annual Pass");
    assert_eq!(result.data[4].recommended_brands, vec!["Artifact Uprising"]);
}

#[tokio::test]
async fn test_result_envelope_serializes_like_the_form_contract() {
    let generator = GiftIdeaGenerator::with_service(
        Box::new(MockTextClient::new().with_response(FIVE_IDEAS_REPLY.to_string())),
        REQUEST_TIMEOUT,
    );

    let result = generator.generate(&sample_profile(), false).await;
    let json = serde_json::to_string(&result).unwrap();

    assert!(json.contains("\"success\":true"));
    assert!(json.contains("\"priceRange\""));
    assert!(json.contains("\"whereToBuy\""));
    // Optional fields stay off the wire on success
    assert!(!json.contains("\"error\""));
    assert!(!json.contains("\"fallback\""));
}

#[tokio::test]
async fn test_regenerate_flag_reaches_the_prompt() {
    let mock = MockTextClient::new().with_response(FIVE_IDEAS_REPLY.to_string());
    let probe = mock.clone();
    let generator = GiftIdeaGenerator::with_service(Box::new(mock), REQUEST_TIMEOUT);

    generator.generate(&sample_profile(), false).await;
    let standard_prompt = probe.last_prompt().unwrap();
    assert!(!standard_prompt.contains("COMPLETELY DIFFERENT"));

    generator.generate(&sample_profile(), true).await;
    let regenerate_prompt = probe.last_prompt().unwrap();
    assert!(regenerate_prompt.contains("COMPLETELY DIFFERENT"));

    assert_eq!(probe.get_call_count(), 2);
}

#[tokio::test]
async fn test_every_failure_stage_returns_the_same_envelope_shape() {
    let failing_replies = [
        // No brackets at all: extraction failure
        "I am sorry, I cannot help with that.",
        // Trailing comma: parse failure
        r#"[{"name":"A","description":"d","reason":"r","priceRange":"$1",}]"#,
        // Empty array: invalid format
        "here: [] done",
        // Missing `reason`: shape failure
        r#"[{"name":"A","description":"d","priceRange":"$1"}]"#,
    ];

    for reply in failing_replies {
        let generator = GiftIdeaGenerator::with_service(
            Box::new(MockTextClient::new().with_response(reply.to_string())),
            REQUEST_TIMEOUT,
        );

        let result = generator.generate(&sample_profile(), false).await;
        assert_fallback_envelope(&result);
    }
}

#[tokio::test]
async fn test_timeout_produces_fallback_within_the_bound() {
    let generator = GiftIdeaGenerator::with_service(
        Box::new(
            MockTextClient::new()
                .with_response(FIVE_IDEAS_REPLY.to_string())
                .with_delay(Duration::from_secs(10)),
        ),
        Duration::from_millis(100),
    );

    let start = std::time::Instant::now();
    let result = generator.generate(&sample_profile(), false).await;

    assert!(start.elapsed() < Duration::from_secs(2));
    assert_fallback_envelope(&result);
    assert!(result.error.unwrap().contains("timed out"));
}

#[tokio::test]
async fn test_repeated_calls_keep_envelope_invariants() {
    let generator = GiftIdeaGenerator::with_service(
        Box::new(
            MockTextClient::new()
                .with_response(FIVE_IDEAS_REPLY.to_string())
                .with_response("no structured output this time".to_string()),
        ),
        REQUEST_TIMEOUT,
    );

    let first = generator.generate(&sample_profile(), false).await;
    let second = generator.generate(&sample_profile(), false).await;

    assert!(first.success && !first.data.is_empty());
    assert_fallback_envelope(&second);
}
