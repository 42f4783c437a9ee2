//! Command-line access to translation catalogs.
//!
//! Usage:
//!   locale-catalog resolve
//!   locale-catalog get <key> [domain]
//!   locale-catalog set <key> <value> [domain]
//!   locale-catalog unset <key> [domain]
//!   locale-catalog list [domain]
//!
//! Settings come from I18N_METHOD, I18N_LOCALE, I18N_DOMAIN, I18N_FOLDER and
//! I18N_EXTENSION. Request signals are simulated with:
//! - I18N_REQUEST_LOCALE (the `locale` request parameter)
//! - I18N_ACCEPT_LANGUAGE (the Accept-Language header)
//! - I18N_SESSION_FILE (JSON object used as session storage)

use anyhow::{bail, Context, Result};
use locale_catalog::{Localizer, RequestSignals, Settings};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_catalog=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let settings = Settings::from_env().context("Invalid I18N_* configuration")?;
    let session_file = std::env::var("I18N_SESSION_FILE").ok();
    let signals = request_signals(session_file.as_deref())?;

    let localizer = Localizer::new(settings, &signals)?;
    command.run(&localizer)?;

    // Session is committed only once the command succeeded
    if let (Some(path), Some((key, value))) = (session_file.as_deref(), localizer.session_update()) {
        let mut session = signals.session.clone().unwrap_or_default();
        session.insert(key.to_string(), value);
        write_session(Path::new(path), &session)?;
        info!("Stored locale in session file {}", path);
    }

    Ok(())
}

const USAGE: &str = "Usage: locale-catalog <resolve | get KEY [DOMAIN] | set KEY VALUE [DOMAIN] | unset KEY [DOMAIN] | list [DOMAIN]>";

/// A validated command line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Resolve,
    Get { key: String, domain: Option<String> },
    Set { key: String, value: String, domain: Option<String> },
    Unset { key: String, domain: Option<String> },
    List { domain: Option<String> },
}

impl Command {
    fn parse(args: &[String]) -> Result<Self> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let domain = |rest: &[&str]| rest.first().map(|d| d.to_string());

        let command = match args.as_slice() {
            ["resolve"] => Command::Resolve,
            ["get", key, rest @ ..] if rest.len() <= 1 => Command::Get {
                key: key.to_string(),
                domain: domain(rest),
            },
            ["set", key, value, rest @ ..] if rest.len() <= 1 => Command::Set {
                key: key.to_string(),
                value: value.to_string(),
                domain: domain(rest),
            },
            ["unset", key, rest @ ..] if rest.len() <= 1 => Command::Unset {
                key: key.to_string(),
                domain: domain(rest),
            },
            ["list", rest @ ..] if rest.len() <= 1 => Command::List {
                domain: domain(rest),
            },
            _ => bail!(USAGE),
        };
        Ok(command)
    }

    fn run(&self, localizer: &Localizer) -> Result<()> {
        match self {
            Command::Resolve => {
                println!("{}", localizer.settings().preferred_locale());
            }
            Command::Get { key, domain } => {
                let value = localizer.reader().get_translation(key, domain.as_deref())?;
                println!("{}", value);
            }
            Command::Set { key, value, domain } => {
                let mut writer = localizer.writer(domain.as_deref())?;
                writer.set_translation(key, value);
                writer.save()?;
            }
            Command::Unset { key, domain } => {
                let mut writer = localizer.writer(domain.as_deref())?;
                writer.unset_translation(key);
                writer.save()?;
            }
            Command::List { domain } => {
                let mut reader = localizer.reader();
                for (key, value) in reader.translations(domain.as_deref())?.iter() {
                    println!("{}\t{}", key, value);
                }
            }
        }
        Ok(())
    }
}

/// Build request signals from the environment and the optional session file.
fn request_signals(session_file: Option<&str>) -> Result<RequestSignals> {
    let mut signals = RequestSignals::new();

    if let Ok(locale) = std::env::var("I18N_REQUEST_LOCALE") {
        signals = signals.with_parameter("locale", &locale);
    }
    if let Ok(header) = std::env::var("I18N_ACCEPT_LANGUAGE") {
        signals = signals.with_header("Accept-Language", &header);
    }
    if let Some(path) = session_file {
        signals.session = Some(read_session(Path::new(path))?);
    }

    Ok(signals)
}

fn read_session(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Session file {} is not a JSON object of strings", path.display()))
}

fn write_session(path: &Path, session: &HashMap<String, String>) -> Result<()> {
    let content = serde_json::to_string_pretty(session).context("Failed to serialize session")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write session file {}", path.display()))
}
