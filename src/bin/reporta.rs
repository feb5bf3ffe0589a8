//! Terminal client for the report API.
//!
//! Reads one command per line from stdin; `help` lists the commands available
//! on the current screen.

use std::sync::Arc;

use reporta_core::client::device::{FixedPosition, NominatimGeocoder, Position, ProvidedPhoto};
use reporta_core::client::{
    ClientError, Credentials, HttpReportApi, Notice, ReportaApp, Screen, StubAuthenticator,
};
use reporta_core::core::config::ClientConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let api = HttpReportApi::new(config.api_url.clone())?;
    tracing::info!("Using report API at {}", api.api_url());

    let geocoder = NominatimGeocoder::new(config.nominatim_url.clone())?;

    let mut app = ReportaApp::new(Arc::new(api), Arc::new(StubAuthenticator));
    render(&app);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        if command == "quit" || command == "exit" {
            break;
        }

        if let Err(e) = run_command(&mut app, &geocoder, command, rest).await {
            show_notice(&Notice::from(&e));
        }
        render(&app);
    }

    Ok(())
}

async fn run_command(
    app: &mut ReportaApp,
    geocoder: &NominatimGeocoder,
    command: &str,
    rest: &str,
) -> Result<(), ClientError> {
    match (app.screen(), command) {
        (_, "help") => print_help(app.screen()),

        (Screen::Login, "toggle") => {
            app.toggle_auth_mode()?;
        }
        (Screen::Login, "login") => {
            let mut parts = rest.split_whitespace();
            let credentials = Credentials {
                email: parts.next().unwrap_or_default().to_string(),
                password: parts.next().unwrap_or_default().to_string(),
            };
            app.authenticate(credentials).await?;
        }

        (Screen::Home, "refresh") => app.refresh().await,
        (Screen::Home, "new") => app.open_new_report()?,

        (Screen::NewReport, "title") => app.form_mut()?.title = rest.to_string(),
        (Screen::NewReport, "summary") => app.form_mut()?.summary = rest.to_string(),
        (Screen::NewReport, "category") => {
            app.form_mut()?.category = Some(rest.to_string()).filter(|c| !c.is_empty());
        }
        (Screen::NewReport, "photo") => {
            let photo = ProvidedPhoto(Some(rest.to_string()).filter(|p| !p.is_empty()));
            app.capture_photo(&photo).await?;
        }
        (Screen::NewReport, "gps") => {
            let source = FixedPosition(parse_position(rest));
            app.locate(&source, geocoder).await?;
        }
        (Screen::NewReport, "submit") => {
            let notice = app.submit().await?;
            show_notice(&notice);
        }
        (Screen::NewReport, "cancel") => app.cancel_new_report()?,

        (screen, other) => {
            println!("Unknown command '{}' on the {} screen. Type 'help'.", other, screen);
        }
    }

    Ok(())
}

/// "<lat> <lon>" with either a space or a comma between them
fn parse_position(raw: &str) -> Option<Position> {
    let mut parts = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let latitude = parts.next()?.parse().ok()?;
    let longitude = parts.next()?.parse().ok()?;
    Some(Position {
        latitude,
        longitude,
    })
}

fn show_notice(notice: &Notice) {
    println!();
    println!("[{}] {}", notice.title, notice.body);
}

fn render(app: &ReportaApp) {
    println!();
    match app.screen() {
        Screen::Login => {
            let mode = app.auth_mode();
            println!("=== Reporta ===");
            println!("{}", mode.subtitle());
            println!("  login <email> <password>   {}", mode.action_label());
            println!("  toggle                     {}", mode.switch_hint());
        }
        Screen::Home => {
            println!("=== Recent reports ===");
            if app.is_loading() {
                println!("Loading...");
            } else if app.feed().is_empty() {
                println!("No new reports.");
            }
            for report in app.feed() {
                println!("#{} {} [{}] ({})", report.id, report.title, report.status, report.category);
                println!("    {}", report.summary);
                println!("    @ {}", report.location);
                println!("    photo: {}", report.photo_url);
            }
            println!("-- 'new' to create a report, 'refresh' to reload --");
        }
        Screen::NewReport => {
            println!("=== Create report ===");
            if let Some(form) = app.form() {
                println!("title:    {}", form.title);
                println!("summary:  {}", form.summary);
                println!(
                    "category: {}",
                    form.category.as_deref().unwrap_or("(default)")
                );
                println!("photo:    {}", form.photo_url.as_deref().unwrap_or("(none)"));
                println!("location: {}", form.location);
            }
            println!("-- 'submit' to publish, 'cancel' to discard, 'help' for fields --");
        }
    }
}

fn print_help(screen: Screen) {
    let commands: &[&str] = match screen {
        Screen::Login => &["login <email> <password>", "toggle", "quit"],
        Screen::Home => &["refresh", "new", "quit"],
        Screen::NewReport => &[
            "title <text>",
            "summary <text>",
            "category <text>",
            "photo <uri>        (empty cancels the capture)",
            "gps <lat> <lon>    (empty denies location access)",
            "submit",
            "cancel",
            "quit",
        ],
    };
    for command in commands {
        println!("  {}", command);
    }
}
