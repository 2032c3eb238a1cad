//! Create/edit profile form screen
//!
//! One command loop drives both screens; the only differences are where
//! the draft comes from, whether the email may change, and which API call
//! the submit runs.

use super::{parse_index, render, split_command, Route, Screens};
use anyhow::Result;
use devfolio_core::{to_payload, validate, ProfileDraft};
use devfolio_session::SessionStore;
use devfolio_types::{ProjectEntry, WorkEntry};

/// Which API call a submit runs
enum FormTarget {
    Create,
    Edit { email: String },
}

impl<S: SessionStore> Screens<S> {
    /// Create-profile screen
    pub async fn create_profile(&mut self) -> Result<Option<Route>> {
        if !self.flow.is_authenticated() {
            return Ok(Some(Route::Auth));
        }

        let mut draft = ProfileDraft::new();
        // Pre-fill the email from the stored user
        if let Some(email) = self.flow.session().and_then(|s| s.email()) {
            draft.email = email.to_string();
        }

        println!("Create your profile.");
        self.profile_form(draft, FormTarget::Create).await
    }

    /// Edit-profile screen: seeds the draft from the server record
    pub async fn edit_profile(&mut self) -> Result<Option<Route>> {
        if !self.flow.is_authenticated() {
            return Ok(Some(Route::Auth));
        }

        let Some(email) = self
            .flow
            .session()
            .and_then(|s| s.email())
            .map(str::to_string)
        else {
            self.banner("User data not found. Please login again.");
            return Ok(Some(Route::Dashboard));
        };

        let token = self.bearer();
        let profile = match self.client.get_profile(&token, &email).await {
            Ok(profile) => profile,
            Err(err) if err.is_unauthorized() => {
                self.flow.expire()?;
                self.banner(err);
                return Ok(Some(Route::Auth));
            }
            Err(err) => {
                // Includes 404, whose message already points at creation
                self.banner(err);
                return Ok(Some(Route::Dashboard));
            }
        };

        println!("Edit your profile. The email cannot be changed.");
        self.profile_form(ProfileDraft::from_profile(profile), FormTarget::Edit { email })
            .await
    }

    async fn profile_form(
        &mut self,
        mut draft: ProfileDraft,
        target: FormTarget,
    ) -> Result<Option<Route>> {
        println!(
            "Commands: show, name, email, education, skill add|set|rm, \
             project add|set|rm, work add|set|rm, links, submit, back, quit"
        );

        let label = match target {
            FormTarget::Create => "create",
            FormTarget::Edit { .. } => "edit",
        };

        loop {
            let Some(line) = self.prompt(label).await? else {
                return Ok(None);
            };
            let (command, arg) = split_command(&line);

            match command {
                "" => {}
                "show" => render::print_draft(&draft),
                "name" => {
                    let Some(value) = self.prompt_with_default("Name", &draft.name).await? else {
                        return Ok(None);
                    };
                    draft.name = value;
                }
                "email" => {
                    if matches!(target, FormTarget::Edit { .. }) {
                        self.banner("The email cannot be changed.");
                        continue;
                    }
                    let Some(value) = self.prompt_with_default("Email", &draft.email).await?
                    else {
                        return Ok(None);
                    };
                    draft.email = value;
                }
                "education" => {
                    let Some(value) = self
                        .prompt_with_default("Education", &draft.education)
                        .await?
                    else {
                        return Ok(None);
                    };
                    draft.education = value;
                }
                "skill" => {
                    if self.skill_command(&mut draft, arg).await?.is_none() {
                        return Ok(None);
                    }
                }
                "project" => {
                    if self.project_command(&mut draft, arg).await?.is_none() {
                        return Ok(None);
                    }
                }
                "work" => {
                    if self.work_command(&mut draft, arg).await?.is_none() {
                        return Ok(None);
                    }
                }
                "links" => {
                    if self.links_command(&mut draft).await?.is_none() {
                        return Ok(None);
                    }
                }
                "submit" => {
                    if let Err(e) = validate(&draft) {
                        self.banner(e);
                        continue;
                    }

                    let payload = to_payload(&draft);
                    let token = self.bearer();
                    let result = match &target {
                        FormTarget::Create => self.client.create_profile(&token, &payload).await,
                        FormTarget::Edit { email } => {
                            self.client.update_profile(&token, email, &payload).await
                        }
                    };

                    match result {
                        Ok(_) => {
                            println!(
                                "{}",
                                match target {
                                    FormTarget::Create => "Profile created successfully!",
                                    FormTarget::Edit { .. } => "Profile updated successfully!",
                                }
                            );
                            return Ok(Some(Route::Dashboard));
                        }
                        Err(err) if err.is_unauthorized() => {
                            self.flow.expire()?;
                            self.banner(err);
                            return Ok(Some(Route::Auth));
                        }
                        // Draft is retained; the user can fix and resubmit
                        Err(err) => self.banner(err),
                    }
                }
                "back" => return Ok(Some(Route::Dashboard)),
                "quit" | "exit" => return Ok(None),
                other => self.banner(format!("Unknown command '{other}'")),
            }
        }
    }

    /// `skill add`, `skill set <i>`, `skill rm <i>`; `None` means end of input
    async fn skill_command(&mut self, draft: &mut ProfileDraft, arg: &str) -> Result<Option<()>> {
        let (action, index) = split_command(arg);
        match action {
            "add" => {
                let Some(value) = self.prompt("Skill").await? else {
                    return Ok(None);
                };
                draft.skills.push(value);
            }
            "set" => {
                let Some(i) = parse_index(index).filter(|i| *i < draft.skills.len()) else {
                    self.banner("No such skill row");
                    return Ok(Some(()));
                };
                let current = draft.skills.get(i).cloned().unwrap_or_default();
                let Some(value) = self.prompt_with_default("Skill", &current).await? else {
                    return Ok(None);
                };
                draft.skills.replace(i, value);
            }
            "rm" => {
                let Some(i) = parse_index(index).filter(|i| *i < draft.skills.len()) else {
                    self.banner("No such skill row");
                    return Ok(Some(()));
                };
                if !draft.skills.remove(i) {
                    self.banner("At least one skill row must remain.");
                }
            }
            _ => self.banner("Usage: skill add | skill set <i> | skill rm <i>"),
        }
        Ok(Some(()))
    }

    /// `project add`, `project set <i>`, `project rm <i>`
    async fn project_command(&mut self, draft: &mut ProfileDraft, arg: &str) -> Result<Option<()>> {
        let (action, index) = split_command(arg);
        match action {
            "add" => {
                let Some(entry) = self.prompt_project(&ProjectEntry::default()).await? else {
                    return Ok(None);
                };
                draft.projects.push(entry);
            }
            "set" => {
                let Some(i) = parse_index(index).filter(|i| *i < draft.projects.len()) else {
                    self.banner("No such project row");
                    return Ok(Some(()));
                };
                let current = draft.projects.get(i).cloned().unwrap_or_default();
                let Some(entry) = self.prompt_project(&current).await? else {
                    return Ok(None);
                };
                draft.projects.update(i, |p| *p = entry);
            }
            "rm" => {
                let Some(i) = parse_index(index).filter(|i| *i < draft.projects.len()) else {
                    self.banner("No such project row");
                    return Ok(Some(()));
                };
                if !draft.projects.remove(i) {
                    self.banner("At least one project row must remain.");
                }
            }
            _ => self.banner("Usage: project add | project set <i> | project rm <i>"),
        }
        Ok(Some(()))
    }

    /// `work add`, `work set <i>`, `work rm <i>`
    async fn work_command(&mut self, draft: &mut ProfileDraft, arg: &str) -> Result<Option<()>> {
        let (action, index) = split_command(arg);
        match action {
            "add" => {
                let Some(entry) = self.prompt_work(&WorkEntry::default()).await? else {
                    return Ok(None);
                };
                draft.work.push(entry);
            }
            "set" => {
                let Some(i) = parse_index(index).filter(|i| *i < draft.work.len()) else {
                    self.banner("No such work row");
                    return Ok(Some(()));
                };
                let current = draft.work.get(i).cloned().unwrap_or_default();
                let Some(entry) = self.prompt_work(&current).await? else {
                    return Ok(None);
                };
                draft.work.update(i, |w| *w = entry);
            }
            "rm" => {
                let Some(i) = parse_index(index).filter(|i| *i < draft.work.len()) else {
                    self.banner("No such work row");
                    return Ok(Some(()));
                };
                if !draft.work.remove(i) {
                    self.banner("At least one work row must remain.");
                }
            }
            _ => self.banner("Usage: work add | work set <i> | work rm <i>"),
        }
        Ok(Some(()))
    }

    async fn prompt_project(&mut self, current: &ProjectEntry) -> Result<Option<ProjectEntry>> {
        let Some(title) = self.prompt_with_default("Project title", &current.title).await? else {
            return Ok(None);
        };
        let Some(description) = self
            .prompt_with_default("Project description", &current.description)
            .await?
        else {
            return Ok(None);
        };
        let Some(link) = self
            .prompt_with_default("Project link (optional)", current.link.as_deref().unwrap_or(""))
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(ProjectEntry {
            title,
            description,
            link: none_if_empty(link),
        }))
    }

    async fn prompt_work(&mut self, current: &WorkEntry) -> Result<Option<WorkEntry>> {
        let Some(title) = self.prompt_with_default("Job title", &current.title).await? else {
            return Ok(None);
        };
        let Some(description) = self
            .prompt_with_default("Job description", &current.description)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(WorkEntry { title, description }))
    }

    /// Prompt the three social links; empty input keeps the current value
    async fn links_command(&mut self, draft: &mut ProfileDraft) -> Result<Option<()>> {
        let Some(github) = self
            .prompt_with_default("GitHub URL", draft.links.github.as_deref().unwrap_or(""))
            .await?
        else {
            return Ok(None);
        };
        let Some(linkedin) = self
            .prompt_with_default("LinkedIn URL", draft.links.linkedin.as_deref().unwrap_or(""))
            .await?
        else {
            return Ok(None);
        };
        let Some(portfolio) = self
            .prompt_with_default(
                "Portfolio URL",
                draft.links.portfolio.as_deref().unwrap_or(""),
            )
            .await?
        else {
            return Ok(None);
        };

        draft.links.github = none_if_empty(github);
        draft.links.linkedin = none_if_empty(linkedin);
        draft.links.portfolio = none_if_empty(portfolio);
        Ok(Some(()))
    }
}

fn none_if_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
