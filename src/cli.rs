use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use tracing::warn;
use unicode_width::UnicodeWidthStr;

use upskill::{
    api::{fetch_collection, ApiClient},
    models::{Course, Resource, Skill, User},
    tui::ui::truncate_to_width,
};

#[derive(Parser)]
#[command(name = "upskill")]
#[command(about = "Terminal client for browsing UpSkill users, courses, and skills")]
#[command(version)]
pub struct Cli {
    /// API base URL (overrides UPSKILL_API_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to open on startup (/, /users, /courses, /skills)
    #[arg(short, long, default_value = "/")]
    pub route: String,

    /// Print one collection and exit, no interactive TUI
    #[arg(long, value_enum)]
    pub cli: Option<Collection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    Users,
    Courses,
    Skills,
}

/// Fetch a collection once and print it as a table
pub async fn print_collection(collection: Collection, client: &dyn ApiClient) -> Result<()> {
    match collection {
        Collection::Users => {
            let users = fetch_logged::<User>(client).await?;
            print_table(
                &[("ID", 8), ("Username", 24), ("Email", 40)],
                users
                    .iter()
                    .map(|u| vec![u.id.to_string(), u.username.clone(), u.email.clone()])
                    .collect(),
            );
        }
        Collection::Courses => {
            let courses = fetch_logged::<Course>(client).await?;
            print_table(
                &[("ID", 8), ("Title", 30), ("Description", 50)],
                courses
                    .iter()
                    .map(|c| {
                        vec![c.id.to_string(), c.title.clone(), c.description_str().to_string()]
                    })
                    .collect(),
            );
        }
        Collection::Skills => {
            let skills = fetch_logged::<Skill>(client).await?;
            print_table(
                &[("ID", 8), ("Name", 30), ("Proficiency", 14)],
                skills
                    .iter()
                    .map(|s| vec![s.id.to_string(), s.name.clone(), s.proficiency.to_string()])
                    .collect(),
            );
        }
    }

    Ok(())
}

/// Fetch a collection; the cause is logged, the caller only sees the fixed message
async fn fetch_logged<R: Resource>(client: &dyn ApiClient) -> Result<Vec<R>> {
    match fetch_collection::<R>(client).await {
        Ok(items) => Ok(items),
        Err(e) => {
            warn!("Fetching {} failed: {}", R::LABEL, e);
            bail!(R::fetch_error_message())
        }
    }
}

fn print_table(columns: &[(&str, usize)], rows: Vec<Vec<String>>) {
    let header: Vec<String> = columns.iter().map(|(name, w)| pad(name, *w)).collect();
    println!("{}", header.join(" "));
    println!("{}", "-".repeat(columns.iter().map(|(_, w)| w + 1).sum::<usize>()));

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(columns)
            .map(|(cell, (_, w))| pad(&truncate_to_width(cell, w.saturating_sub(1)), *w))
            .collect();
        println!("{}", cells.join(" ").trim_end());
    }

    println!();
    println!("Total: {}", rows.len());
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("日本", 6), "日本  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[tokio::test]
    async fn test_failed_fetch_returns_fixed_message() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/skills"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let config = upskill::config::Config::default().with_base_url(&server.uri());
        let client = upskill::api::HttpClient::new(&config).unwrap();

        let err = print_collection(Collection::Skills, &client).await.unwrap_err();
        assert_eq!(err.to_string(), "Error fetching skills");
    }

    #[test]
    fn test_cli_parses_collection() {
        let cli = Cli::parse_from(["upskill", "--cli", "courses", "--base-url", "http://api"]);
        assert_eq!(cli.cli, Some(Collection::Courses));
        assert_eq!(cli.base_url.as_deref(), Some("http://api"));
        assert_eq!(cli.route, "/");
    }
}
