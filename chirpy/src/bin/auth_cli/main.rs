//! Chirpy auth tooling
//!
//! Generates and checks password hashes, and mints or inspects access tokens
//! with the same parameters the server uses.

use anyhow::bail;
use anyhow::Context;
use auth::PasswordHasher;
use auth::TokenService;
use chrono::Duration;
use clap::Parser;
use clap::Subcommand;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "chirpy-auth",
    about = "Password hash and access token tooling for Chirpy",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hash a password
    Genhash {
        password: String,

        /// bcrypt work factor
        #[arg(long, default_value_t = PasswordHasher::DEFAULT_COST)]
        cost: u32,
    },

    /// Check a password against a stored hash
    CheckHash { hash: String, password: String },

    /// Mint an access token
    MakeJwt {
        /// Subject UUID, or `gen` for a fresh random one
        #[arg(value_parser = parse_subject)]
        subject: Uuid,

        secret: String,

        /// Token lifetime; zero or negative yields an already-expired token
        #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
        expires_in_minutes: i64,

        #[arg(long, env = "JWT__ISSUER", default_value = "chirpy")]
        issuer: String,
    },

    /// Validate an access token and print its subject
    ValidateJwt {
        token: String,

        secret: String,

        #[arg(long, env = "JWT__ISSUER", default_value = "chirpy")]
        issuer: String,
    },
}

fn parse_subject(s: &str) -> Result<Uuid, String> {
    if s == "gen" {
        return Ok(Uuid::new_v4());
    }
    Uuid::parse_str(s).map_err(|e| format!("invalid UUID '{}': {}", s, e))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Genhash { password, cost } => {
            let hash = PasswordHasher::new(cost)
                .hash(&password)
                .context("failed to hash password")?;
            println!("{}", hash);
        }
        Command::CheckHash { hash, password } => {
            PasswordHasher::default().verify(&hash, &password)?;
            println!("match");
        }
        Command::MakeJwt {
            subject,
            secret,
            expires_in_minutes,
            issuer,
        } => {
            let Some(lifetime) = Duration::try_minutes(expires_in_minutes) else {
                bail!("invalid lifetime: {} minutes", expires_in_minutes);
            };
            let token = TokenService::new(issuer).mint(subject, secret.as_bytes(), lifetime)?;

            println!("UUID: {}", subject);
            println!("expires in: {}m", expires_in_minutes);
            println!("JWT: {}", token);
        }
        Command::ValidateJwt {
            token,
            secret,
            issuer,
        } => {
            let subject = TokenService::new(issuer)
                .validate(&token, secret.as_bytes())
                .context("token rejected")?;
            println!("UUID: {}", subject);
        }
    }

    Ok(())
}
