use anyhow::Result;
use clap::Parser;
use gift_idea_generator::models::RecipientProfile;
use gift_idea_generator::pipeline;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "gift-idea-generator")]
#[command(about = "Generate personalized gift ideas from recipient details")]
struct CliArgs {
    /// Recipient's name.
    #[arg(long)]
    name: String,

    /// Recipient's age (free text, e.g. "29" or "late twenties").
    #[arg(long)]
    age: String,

    /// Recipient's gender.
    #[arg(long)]
    gender: String,

    /// Your relationship to the recipient (e.g. "sister", "coworker").
    #[arg(long)]
    relationship: String,

    /// Interests and hobbies, comma separated.
    #[arg(long)]
    interests: String,

    /// Budget label (e.g. "$50-$100").
    #[arg(long)]
    budget: String,

    /// Preferred gift type (e.g. "experience", "gadget").
    #[arg(long = "gift-type")]
    gift_type: String,

    /// Ask for fresh suggestions instead of the usual ones.
    #[arg(long)]
    regenerate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gift_idea_generator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let profile = RecipientProfile {
        recipient_name: args.name,
        age: args.age,
        gender: args.gender,
        relationship: args.relationship,
        interests: args.interests,
        budget: args.budget,
        preferred_gift_type: args.gift_type,
    };

    let result = pipeline::generate_gift_ideas(&profile, args.regenerate).await;

    if result.success {
        info!("Generated {} gift ideas", result.data.len());
    } else {
        info!(
            "Falling back to the static catalog: {}",
            result.error.as_deref().unwrap_or("unknown error")
        );
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
