//! Dashboard screen: browse, search, and aggregate fetched profiles

use super::{render, split_command, Route, Screens};
use anyhow::Result;
use devfolio_core::{search_by_skill, top_skills};
use devfolio_session::SessionStore;
use devfolio_types::Profile;

/// Outcome of an authenticated fetch
enum Fetched<T> {
    Ok(T),
    /// Error already shown; the command loop continues
    Failed,
    /// 401 arrived; session is torn down, caller routes to auth
    SessionLost,
}

impl<S: SessionStore> Screens<S> {
    /// Dashboard command loop; returns the next route or `None` to quit
    pub async fn dashboard(&mut self) -> Result<Option<Route>> {
        if !self.flow.is_authenticated() {
            return Ok(Some(Route::Auth));
        }

        if let Some(user) = self.flow.session().and_then(|s| s.user.as_ref()) {
            println!("Welcome, {}", user.display_name());
        }
        println!("Commands: all, me, skills, search <term>, create, edit, logout, quit");

        loop {
            let Some(line) = self.prompt("dashboard").await? else {
                return Ok(None);
            };
            let (command, arg) = split_command(&line);

            match command {
                "" => {}
                "all" => match self.fetch_profiles().await? {
                    Fetched::Ok(profiles) => {
                        if profiles.is_empty() {
                            println!("No profiles found.");
                        }
                        for profile in &profiles {
                            render::print_profile(profile);
                        }
                    }
                    Fetched::Failed => {}
                    Fetched::SessionLost => return Ok(Some(Route::Auth)),
                },
                "me" => match self.show_own_profile().await? {
                    Fetched::Ok(()) | Fetched::Failed => {}
                    Fetched::SessionLost => return Ok(Some(Route::Auth)),
                },
                "skills" => match self.fetch_profiles().await? {
                    Fetched::Ok(profiles) => render::print_top_skills(&top_skills(&profiles)),
                    Fetched::Failed => {}
                    Fetched::SessionLost => return Ok(Some(Route::Auth)),
                },
                "search" => {
                    if arg.trim().is_empty() {
                        println!("Enter a skill to search for projects.");
                        continue;
                    }
                    match self.fetch_profiles().await? {
                        Fetched::Ok(profiles) => {
                            let hits = search_by_skill(&profiles, arg);
                            if hits.is_empty() {
                                println!("No profiles found with skill \"{arg}\".");
                            }
                            for hit in &hits {
                                render::print_skill_match(hit);
                            }
                        }
                        Fetched::Failed => {}
                        Fetched::SessionLost => return Ok(Some(Route::Auth)),
                    }
                }
                "create" => return Ok(Some(Route::CreateProfile)),
                "edit" => return Ok(Some(Route::Edit)),
                "logout" => {
                    self.flow.logout()?;
                    return Ok(Some(Route::Auth));
                }
                "quit" | "exit" => return Ok(None),
                other => self.banner(format!("Unknown command '{other}'")),
            }
        }
    }

    /// Fetch the full profile list, handling the 401 teardown path
    async fn fetch_profiles(&mut self) -> Result<Fetched<Vec<Profile>>> {
        let token = self.bearer();
        match self.client.list_profiles(&token).await {
            Ok(profiles) => Ok(Fetched::Ok(profiles)),
            Err(err) if err.is_unauthorized() => {
                self.flow.expire()?;
                self.banner(err);
                Ok(Fetched::SessionLost)
            }
            Err(err) => {
                self.banner(err);
                Ok(Fetched::Failed)
            }
        }
    }

    /// Fetch and render the session owner's profile
    async fn show_own_profile(&mut self) -> Result<Fetched<()>> {
        let Some(email) = self
            .flow
            .session()
            .and_then(|s| s.email())
            .map(str::to_string)
        else {
            self.banner("User data not found. Please login again.");
            return Ok(Fetched::Failed);
        };

        let token = self.bearer();
        match self.client.get_profile(&token, &email).await {
            Ok(profile) => {
                render::print_profile(&profile);
                Ok(Fetched::Ok(()))
            }
            Err(err) if err.is_unauthorized() => {
                self.flow.expire()?;
                self.banner(err);
                Ok(Fetched::SessionLost)
            }
            Err(err) if err.is_not_found() => {
                self.banner(err);
                println!("Type 'create' to set up your profile.");
                Ok(Fetched::Failed)
            }
            Err(err) => {
                self.banner(err);
                Ok(Fetched::Failed)
            }
        }
    }
}
