//! Interactive console walk-through
//!
//! Signs in against a live API, resolves the route guard, then browses the
//! platform's resources from a small menu.
//!
//! Run: cargo run --example admin_console

use admin_client::views::{label, merch_empty_message, CopyKey, CollectionsSummary};
use admin_client::{AdminClient, Destination, GuardState, Locale, Role, RouteGuard};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let client = AdminClient::from_env()?;
    println!("\nInHarmony Admin Console");
    println!("API: {}\n", client.config().base_url);

    if let Some(user) = client.auth().local_user() {
        println!("Last session: {} <{}>", user.name, user.email);
    }

    let email = get_input("Email: ");
    let password = get_input("Password: ");

    let user = match client.auth().login(&email, &password).await {
        Ok(user) => user,
        Err(e) => {
            eprintln!("Login failed: {e}");
            return Ok(());
        }
    };
    println!("Signed in as {} ({})", user.name, user.role);

    let mut guard = RouteGuard::new();
    if !guard.resolve(&client).await.should_render() {
        eprintln!("Session rejected, back to login.");
        return Ok(());
    }

    let mut locale = Locale::Ua;
    loop {
        println!(
            "\n[{}] 1) collections  2) partners  3) reports  4) teammates  5) merch  6) stats  7) users  l) {}  q) quit",
            locale.label(),
            label(locale, CopyKey::LanguageLabel),
        );
        match get_input("> ").as_str() {
            "1" => show_collections(&client, locale).await,
            "2" => show_partners(&client, locale).await,
            "3" => show_reports(&client, locale).await,
            "4" => show_teammates(&client, locale).await,
            "5" => show_merch(&client, locale).await,
            "6" => show_stats(&client).await,
            "7" => show_users(&client).await,
            "l" => {
                locale = match locale {
                    Locale::Ua => Locale::En,
                    Locale::En => Locale::Ua,
                };
            }
            "q" => break,
            _ => {}
        }
    }

    if let Err(e) = client.auth().logout().await {
        tracing::warn!("logout call failed: {e}");
    }
    Ok(())
}

async fn show_collections(client: &AdminClient, locale: Locale) {
    println!("== {} ==", label(locale, CopyKey::CollectionsTitle));
    match client.collections().list(locale, 1, 10).await {
        Ok(page) => {
            let summary = CollectionsSummary::from_rows(page.data.iter());
            println!(
                "{} total ({} active, {} closed), {} / {} collected",
                summary.total, summary.active, summary.closed, summary.collected, summary.target
            );
            for c in page.data.iter() {
                println!("  [{}] {}: {}/{}", c.status.as_str(), c.title, c.collected, c.target);
            }
        }
        Err(e) => eprintln!("{}: {e}", label(locale, CopyKey::MutationFailed)),
    }
}

async fn show_partners(client: &AdminClient, locale: Locale) {
    println!("== {} ==", label(locale, CopyKey::PartnersTitle));
    match client.partners().list().await {
        Ok(partners) => {
            for p in partners.iter().filter(|p| p.language == locale) {
                println!("  {} -> {}", p.logo, p.link);
            }
        }
        Err(e) => eprintln!("error: {e}"),
    }
}

async fn show_reports(client: &AdminClient, locale: Locale) {
    println!("== {} ==", label(locale, CopyKey::ReportsTitle));
    match client.reports().list(locale).await {
        Ok(reports) => {
            for r in reports.iter() {
                println!("  {} {} -> {}", r.month, r.year, r.url);
            }
        }
        Err(e) => eprintln!("error: {e}"),
    }
}

async fn show_teammates(client: &AdminClient, locale: Locale) {
    println!("== {} ==", label(locale, CopyKey::TeammatesTitle));
    match client.teammates().list(locale).await {
        Ok(teammates) => {
            for t in teammates.iter() {
                println!("  {}, {}", t.name, t.role);
            }
        }
        Err(e) => eprintln!("error: {e}"),
    }
}

async fn show_merch(client: &AdminClient, locale: Locale) {
    println!("== {} ==", label(locale, CopyKey::MerchTitle));
    match client.merch().get(locale).await {
        Ok(Some(merch)) => {
            println!("  status: {:?}, link: {}", merch.status, merch.link);
            println!("  {}", merch.content);
        }
        Ok(None) => println!("  {}", merch_empty_message(locale, locale)),
        Err(e) => eprintln!("error: {e}"),
    }
}

async fn show_stats(client: &AdminClient) {
    match client.stats().get().await {
        Ok(stats) => {
            for (_, entry) in stats.entries() {
                println!("  {:>8}  {}", entry.amount, entry.title);
            }
        }
        Err(e) => eprintln!("error: {e}"),
    }
}

async fn show_users(client: &AdminClient) {
    // the users page is admin-only; resolve a role-gated guard first
    let mut guard = RouteGuard::require_role(Role::Admin);
    match guard.resolve(client).await {
        GuardState::Authorized(_) => match client.auth().users().await {
            Ok(users) => {
                for u in users.iter() {
                    println!("  {} <{}> ({})", u.name, u.email, u.role);
                }
            }
            Err(e) => eprintln!("error: {e}"),
        },
        state => match state.destination() {
            Some(Destination::Dashboard) => eprintln!("Admin role required."),
            Some(Destination::Login) => eprintln!("Session expired, sign in again."),
            None => {}
        },
    }
}

fn get_input(prompt: &str) -> String {
    print!("{prompt}");
    io::stdout().flush().expect("Failed to flush stdout");
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read line");
    input.trim().to_string()
}
