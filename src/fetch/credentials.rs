//! Jira credentials: username from flags/config, password from env or prompt

use anyhow::{Context, Result};
use dialoguer::Password;
use std::fmt;
use std::io::IsTerminal;

/// Environment variables checked for the password, in order.
pub const PASSWORD_ENV_VARS: [&str; 2] = ["JIRACSV_PASSWORD", "PASSWORD"];

#[derive(Clone, Default)]
pub struct Credentials {
    username: Option<String>,
    password: Option<String>,
}

impl Credentials {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: Some(username.into()), password: Some(password.into()) }
    }

    /// Resolve credentials for `username`. Without a username requests are
    /// anonymous; otherwise the password comes from the environment, or from
    /// an interactive prompt when stdin is a terminal.
    pub fn resolve(username: Option<String>) -> Result<Self> {
        let Some(username) = username.filter(|u| !u.trim().is_empty()) else {
            tracing::debug!("No Jira username configured; using anonymous access");
            return Ok(Self::anonymous());
        };

        if let Some(password) = password_from_env(|name| std::env::var(name).ok()) {
            return Ok(Self::new(username, password));
        }

        if !std::io::stdin().is_terminal() {
            anyhow::bail!(
                "No password for Jira user '{}': set {} or run interactively",
                username,
                PASSWORD_ENV_VARS[0]
            );
        }

        let password = Password::new()
            .with_prompt(format!("Jira password for {}", username))
            .interact()
            .context("Failed reading password")?;
        Ok(Self::new(username, password))
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

fn password_from_env(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    PASSWORD_ENV_VARS.iter().find_map(|name| lookup(name).filter(|p| !p.is_empty()))
}
