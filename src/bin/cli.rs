use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use securedash::cli::seeder::{SEED_PASSWORD, seed_accounts};
use securedash::cli::create_superadmin;
use securedash::db::init_account_store;
use securedash_config::StorageConfig;
use securedash_core::ModuleCatalog;
use securedash_observability::init_basic_console_logging;

#[derive(Parser)]
#[command(name = "securedash-cli")]
#[command(about = "SecureDash CLI - Administrative tools for SecureDash", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the superadmin account (only possible once)
    CreateSuperadmin {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Print the module catalog
    ListModules,
    /// Seed the store with fake admin and user accounts
    Seed {
        /// Number of admin accounts to create
        #[arg(long, default_value = "2")]
        admins: usize,

        /// Number of user accounts to create
        #[arg(long, default_value = "10")]
        users: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_basic_console_logging()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::ListModules => {
            for module in ModuleCatalog::standard().all() {
                println!("{}", module);
            }
            Ok(())
        }
        Commands::CreateSuperadmin {
            name,
            email,
            password,
        } => handle_create_superadmin(name, email, password).await,
        Commands::Seed { admins, users } => handle_seed(admins, users).await,
    }
}

async fn handle_create_superadmin(
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    // Use provided values or prompt interactively
    let name = match name {
        Some(name) => name,
        None => Input::new()
            .with_prompt("Name")
            .interact_text()
            .context("Failed to read name")?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let store = init_account_store(&StorageConfig::from_env()).await?;
    let account = create_superadmin(store.as_ref(), &name, &email, &password)
        .await
        .context("Error creating superadmin")?;

    println!("\nSuperadmin created successfully!");
    println!("   ID: {}", account.id);
    println!("   Email: {}", account.email);
    println!("   Name: {}", account.name);
    Ok(())
}

async fn handle_seed(admins: usize, users: usize) -> anyhow::Result<()> {
    let store = init_account_store(&StorageConfig::from_env()).await?;
    let summary = seed_accounts(store.as_ref(), admins, users)
        .await
        .context("Seeding failed")?;

    println!("\nSeeding complete!");
    println!("   Created: {}", summary.created);
    println!("   Skipped: {}", summary.skipped);
    println!("   Password for all seeded accounts: {}", SEED_PASSWORD);
    Ok(())
}
