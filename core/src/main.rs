//! CollabHub CLI - inspect the logic behind the web components
//!
//! ```bash
//! collabhub estimate 15.000            # Post/story/reels estimate
//! collabhub estimate 15000 --json      # Same, as JSON
//! collabhub progress delivery          # Campaign tracker for a stage
//! collabhub wizard                     # Connection wizard transition table
//! ```

use clap::{Parser, Subcommand};
use collabhub::{
    estimate_display, progress, transition, CampaignStage, CollabError, ConnectionDraft,
    FollowerCount, SocialNetwork, WizardAction, WizardStep,
};

#[derive(Parser)]
#[command(name = "collabhub")]
#[command(about = "Inspect CollabHub estimator, campaign and wizard logic", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate post, story and reels value for a follower count
    Estimate {
        /// Follower count ("15000", "15.000"; empty for the placeholder)
        followers: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the campaign progress tracker for a stage
    Progress {
        /// Current stage (proposal, production, prepayment, delivery, validation, payment)
        stage: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the connection wizard transition table
    Wizard,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Estimate { followers, json } => cmd_estimate(&followers, json),
        Commands::Progress { stage, json } => cmd_progress(&stage, json),
        Commands::Wizard => cmd_wizard(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_estimate(raw: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let followers = FollowerCount::parse_input(raw).map_err(CollabError::from)?;
    let display = estimate_display(followers);

    if json {
        println!("{}", serde_json::to_string_pretty(&display)?);
        return Ok(());
    }

    match followers.get() {
        Some(n) => eprintln!("📊 Estimate for {} followers", n),
        None => eprintln!("📊 No follower count entered"),
    }
    println!("   Post:  {}", display.post);
    println!("   Story: {}", display.story);
    println!("   Reels: {}", display.reels);
    Ok(())
}

fn cmd_progress(raw: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stage: CampaignStage = raw.parse().map_err(CollabError::from)?;
    let steps = progress(stage);

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    eprintln!("📋 Campaign at stage: {}", stage);
    for s in &steps {
        println!(
            "   {} {:<14} {:?}",
            s.status.marker(),
            s.step.label,
            s.status
        );
        if s.has_connector {
            println!("   │");
        }
    }
    Ok(())
}

fn cmd_wizard() -> Result<(), Box<dyn std::error::Error>> {
    let empty = ConnectionDraft::default();
    let filled = ConnectionDraft {
        platform: Some(SocialNetwork::Instagram),
        username: "username".to_string(),
        post_url: "https://instagram.com/p/post".to_string(),
        ..Default::default()
    };

    println!("{:<16} {:<6} {:<24} {}", "STEP", "ACTION", "EMPTY FIELDS", "FILLED FIELDS");
    for step in WizardStep::ALL {
        for action in [WizardAction::Next, WizardAction::Back] {
            println!(
                "{:<16} {:<6} {:<24} {}",
                step.to_string(),
                format!("{:?}", action),
                outcome(transition(step, action, &empty)),
                outcome(transition(step, action, &filled)),
            );
        }
    }
    Ok(())
}

fn outcome(result: Result<WizardStep, collabhub::WizardError>) -> String {
    match result {
        Ok(step) => format!("→ {}", step),
        Err(e) => format!("✗ {}", e),
    }
}
