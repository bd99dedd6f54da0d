//! Profiles command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::load_config;
use crate::domain::Profile;

#[derive(Args)]
pub struct ProfilesArgs {
    /// Path to config file (jiracsv.toml or jiracsv.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: ProfilesArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, args.config.as_deref())?;

    println!("Instance: {}", config.instance.url);
    if config.profiles.is_empty() {
        println!("No profiles defined");
        return Ok(());
    }

    println!("Profiles:");
    for profile in &config.profiles {
        println!("  {}", describe(profile));
    }
    Ok(())
}

fn describe(profile: &Profile) -> String {
    let mut line = format!("{} [{}]: {}", profile.id, profile.style, profile.jql);
    if !profile.components.include.is_empty() {
        line.push_str(&format!(" (include: {})", profile.components.include.join(", ")));
    }
    if !profile.components.exclude.is_empty() {
        line.push_str(&format!(" (exclude: {})", profile.components.exclude.join(", ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::describe;
    use crate::domain::{ComponentRules, Profile};

    #[test]
    fn describe_lists_component_rules() {
        let profile = Profile {
            id: "core".to_string(),
            jql: "project = CORE".to_string(),
            components: ComponentRules {
                include: vec!["Docs".to_string()],
                exclude: vec!["Legacy".to_string(), "Old".to_string()],
            },
            ..Profile::default()
        };
        assert_eq!(
            describe(&profile),
            "core [plain]: project = CORE (include: Docs) (exclude: Legacy, Old)"
        );
    }
}
