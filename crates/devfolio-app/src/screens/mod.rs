//! Interactive terminal screens
//!
//! Each screen owns its prompt loop and hands the next [`Route`] back to
//! the service loop; navigation is an explicit return value, never a side
//! effect. Drafts live and die inside the screen editing them.

mod auth;
mod dashboard;
mod profile_form;
mod render;

use anyhow::Result;
use devfolio_api::ApiClient;
use devfolio_session::{AuthFlow, SessionStore};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Screens a user can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Auth,
    Dashboard,
    CreateProfile,
    Edit,
}

/// Shared screen context: API client, auth flow, input stream
pub struct Screens<S: SessionStore> {
    client: ApiClient,
    flow: AuthFlow<S>,
    input: Lines<BufReader<Stdin>>,
}

impl<S: SessionStore> Screens<S> {
    pub fn new(client: ApiClient, flow: AuthFlow<S>) -> Self {
        Self {
            client,
            flow,
            input: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    pub fn flow(&self) -> &AuthFlow<S> {
        &self.flow
    }

    /// Print a prompt and read one trimmed line; `None` on end of input
    async fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        use std::io::Write;
        print!("{label}: ");
        std::io::stdout().flush()?;
        Ok(self.input.next_line().await?.map(|l| l.trim().to_string()))
    }

    /// Prompt showing the current value; empty input keeps it
    async fn prompt_with_default(&mut self, label: &str, current: &str) -> Result<Option<String>> {
        let raw = self.prompt(&format!("{label} [{current}]")).await?;
        Ok(raw.map(|line| {
            if line.is_empty() {
                current.to_string()
            } else {
                line
            }
        }))
    }

    /// Inline error banner
    fn banner(&self, message: impl std::fmt::Display) {
        println!("! {message}");
    }

    /// Bearer token for authenticated calls, cloned out of the session
    fn bearer(&self) -> String {
        self.flow.token().unwrap_or_default().to_string()
    }
}

/// Split a command line into its first word and the remainder
fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    }
}

/// Parse a row index typed by the user
fn parse_index(arg: &str) -> Option<usize> {
    arg.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("search rust async"), ("search", "rust async"));
        assert_eq!(split_command("all"), ("all", ""));
        assert_eq!(split_command(""), ("", ""));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("2"), Some(2));
        assert_eq!(parse_index(" 0 "), Some(0));
        assert_eq!(parse_index("two"), None);
        assert_eq!(parse_index(""), None);
    }
}
