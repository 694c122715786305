//! Static fallback catalog returned whenever the AI pipeline fails.

use crate::models::GiftIdea;

fn idea(
    name: &str,
    description: &str,
    reason: &str,
    price_range: &str,
    where_to_buy: &[&str],
    recommended_brands: &[&str],
) -> GiftIdea {
    GiftIdea {
        name: name.to_string(),
        description: description.to_string(),
        reason: reason.to_string(),
        price_range: price_range.to_string(),
        where_to_buy: where_to_buy.iter().map(|s| s.to_string()).collect(),
        recommended_brands: recommended_brands.iter().map(|s| s.to_string()).collect(),
    }
}

/// The fixed 5-entry catalog. Freshly allocated per call; the contents never
/// change between calls or failure stages.
pub fn catalog() -> Vec<GiftIdea> {
    vec![
        idea(
            "Personalized Photo Album",
            "A custom photo album filled with memories.",
            "A thoughtful way to celebrate your relationship and shared memories.",
            "$25-$50",
            &["Shutterfly", "Artifact Uprising", "Etsy"],
            &["Shutterfly", "Artifact Uprising", "Mixbook"],
        ),
        idea(
            "Streaming Service Subscription",
            "A subscription to a premium streaming service.",
            "Perfect for entertainment lovers to enjoy their favorite shows and movies.",
            "$15-$20/month",
            &["Netflix", "Disney+", "HBO Max"],
            &["Netflix", "Disney+", "Hulu"],
        ),
        idea(
            "Gourmet Chocolate Box",
            "A selection of premium chocolates in an elegant gift box.",
            "A delicious treat that's perfect for chocolate lovers.",
            "$25-$50",
            &["Godiva", "Lindt", "Local Chocolate Shops"],
            &["Godiva", "Ghirardelli", "Lindt"],
        ),
        idea(
            "Wireless Earbuds",
            "High-quality wireless earbuds for music and calls.",
            "Great for music lovers and people on the go.",
            "$50-$150",
            &["Amazon", "Best Buy", "Target"],
            &["Apple", "Samsung", "Jabra"],
        ),
        idea(
            "Indoor Plant",
            "A low-maintenance indoor plant in a decorative pot.",
            "Brings life to any space and shows thoughtfulness.",
            "$15-$40",
            &["Local Nurseries", "The Sill", "Bloomscape"],
            &["The Sill", "Bloomscape", "Plants.com"],
        ),
    ]
}
