//! Clone-URL lookup through the GitHub "list repositories for a user" API.

use std::time::Duration;

use serde::Deserialize;

use hylla_core::{Interaction, RegistryError};

const API_BASE: &str = "https://api.github.com";
const TIMEOUT: Duration = Duration::from_secs(15);

/// The two fields hylla reads from each repository object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repo {
    pub name: String,
    pub clone_url: String,
}

/// Public repositories of `user`.
pub fn list_repos(user: &str) -> Result<Vec<Repo>, RegistryError> {
    let lookup_err = |reason: String| RegistryError::RemoteLookup {
        user: user.to_owned(),
        reason,
    };

    let agent = ureq::AgentBuilder::new()
        .timeout(TIMEOUT)
        .user_agent(concat!("hylla/", env!("CARGO_PKG_VERSION")))
        .build();
    let url = format!("{API_BASE}/users/{user}/repos");
    tracing::debug!(%url, "fetching repositories");

    let body = agent
        .get(&url)
        .query("per_page", "100")
        .call()
        .map_err(|e| lookup_err(e.to_string()))?
        .into_string()
        .map_err(|e| lookup_err(e.to_string()))?;
    parse_repos(&body).map_err(lookup_err)
}

/// Parse an API response body; anything but an array of repositories is an error.
pub fn parse_repos(body: &str) -> Result<Vec<Repo>, String> {
    serde_json::from_str(body).map_err(|e| format!("unexpected response: {e}"))
}

/// Clone URL of the repository called `name`, if the list has one.
pub fn find_clone_url<'a>(repos: &'a [Repo], name: &str) -> Option<&'a str> {
    repos
        .iter()
        .find(|r| r.name == name)
        .map(|r| r.clone_url.as_str())
}

/// Resolve `user/repo` to a clone URL, letting the user pick another repository
/// if `repo` does not exist. `None` means the user gave up.
pub fn resolve_clone_url(
    user: &str,
    repo: &str,
    io: &mut dyn Interaction,
) -> Result<Option<String>, RegistryError> {
    let repos = list_repos(user)?;
    choose(user, repo, &repos, io)
}

fn choose(
    user: &str,
    repo: &str,
    repos: &[Repo],
    io: &mut dyn Interaction,
) -> Result<Option<String>, RegistryError> {
    let mut wanted = repo.to_owned();
    loop {
        if let Some(url) = find_clone_url(repos, &wanted) {
            return Ok(Some(url.to_owned()));
        }
        io.inform(&format!("{user} has no repo named \"{wanted}\"!"));
        if !io.confirm(
            "Would you like to choose from the existing repositories? \
             (the attempt to clone will otherwise be aborted)",
        )? {
            return Ok(None);
        }
        io.inform(&format!("Listing all repos belonging to {user}"));
        for r in repos {
            io.inform(&r.name);
        }
        wanted = io.prompt("Enter name")?;
    }
}
