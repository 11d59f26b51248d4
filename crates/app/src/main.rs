use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{RoadmapClient, RoadmapFetch, SessionContext};
use ui::{App, UiApp, build_app_context};
use url::Url;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    identity: SessionContext,
    roadmap_fetch: Arc<dyn RoadmapFetch>,
}

impl UiApp for DesktopApp {
    fn session_context(&self) -> SessionContext {
        self.identity.clone()
    }

    fn roadmap_fetch(&self) -> Arc<dyn RoadmapFetch> {
        Arc::clone(&self.roadmap_fetch)
    }
}

struct Args {
    api_url: Url,
    user_id: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--user-id <id>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://localhost:5000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PATHWAY_API_URL, PATHWAY_USER_ID");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = std::env::var("PATHWAY_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "http://localhost:5000".into());
        // An absent user id is allowed: the request is still made and the
        // service's rejection shows up on the error screen.
        let mut user_id = SessionContext::from_env().user_id().to_string();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    api_url = require_value(args, "--api-url")?;
                }
                "--user-id" => {
                    user_id = require_value(args, "--user-id")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let api_url =
            Url::parse(api_url.trim()).map_err(|_| ArgsError::InvalidApiUrl { raw: api_url })?;
        Ok(Self { api_url, user_id })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let identity = SessionContext::new(parsed.user_id);
    let client = RoadmapClient::new(parsed.api_url);

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        identity,
        roadmap_fetch: Arc::new(client),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Pathway")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
