use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use storage::{
    Database,
    dto::member::ExpiringMember,
    services::{membership, recommendation, seed},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gymctl")]
#[command(about = "Gym administration maintenance tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://gym_management.db")]
    database_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the database schema
    Migrate,
    /// Insert demo data when no members exist yet
    Seed {
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Print members whose membership ends within the warning window
    Expiring {
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Print the next workouts suggested for a member
    Recommend {
        member_id: i64,

        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("gymctl={log_level},storage={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = Database::new(&cli.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", cli.database_url))?;
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;

    match cli.command {
        Commands::Migrate => {
            tracing::info!(database_url = %cli.database_url, "Schema is up to date");
        }
        Commands::Seed { today } => {
            let seeded = seed::seed_demo_data(db.pool(), today.unwrap_or_else(local_today))
                .await
                .context("Failed to seed demo data")?;
            if !seeded {
                println!("Members already exist, nothing seeded.");
            }
        }
        Commands::Expiring { today } => {
            let today = today.unwrap_or_else(local_today);
            let members = membership::expiring_members(db.pool(), today)
                .await
                .context("Failed to load expiring members")?;

            if members.is_empty() {
                println!("No memberships end before {}.", membership::warning_cutoff(today));
            }
            for member in &members {
                println!("{}", expiry_line(member));
            }
        }
        Commands::Recommend { member_id, today } => {
            let plan = recommendation::recommend_for_member(
                db.pool(),
                member_id,
                today.unwrap_or_else(local_today),
            )
            .await
            .with_context(|| format!("Failed to recommend workouts for member {member_id}"))?;

            for suggestion in &plan {
                println!("{suggestion}");
            }
        }
    }

    Ok(())
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

fn expiry_line(member: &ExpiringMember) -> String {
    let note = match member.days_left {
        d if d < 0 => format!("ended {} days ago", -d),
        0 => "ends today".to_string(),
        1 => "ends tomorrow".to_string(),
        d => format!("ends in {d} days"),
    };
    format!(
        "{:<24} {:<28} {} ({note})",
        member.name, member.email, member.end_date
    )
}
