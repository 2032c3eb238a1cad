//! Login/register screen

use super::{Route, Screens};
use anyhow::Result;
use devfolio_api::ApiError;
use devfolio_core::{validate_auth_form, AuthForm, AuthMode};
use devfolio_session::{AuthState, SessionStore};
use devfolio_types::{LoginRequest, RegisterRequest, Session};
use tracing::debug;

impl<S: SessionStore> Screens<S> {
    /// Authentication screen; returns the next route or `None` to quit
    pub async fn auth(&mut self) -> Result<Option<Route>> {
        // Surface the pending expiry/logout message once, then continue
        match self.flow.state() {
            AuthState::Expired => {
                self.banner("Session expired. Please login again.");
                self.flow.acknowledge();
            }
            AuthState::LoggedOut => {
                println!("Logged out.");
                self.flow.acknowledge();
            }
            _ => {}
        }

        loop {
            let Some(choice) = self.prompt("login, register, or quit").await? else {
                return Ok(None);
            };

            match choice.as_str() {
                "login" => {
                    if let Some(route) = self.run_auth(AuthMode::Login).await? {
                        return Ok(Some(route));
                    }
                }
                "register" => {
                    if let Some(route) = self.run_auth(AuthMode::Register).await? {
                        return Ok(Some(route));
                    }
                }
                "quit" | "exit" => return Ok(None),
                "" => {}
                other => self.banner(format!("Unknown choice '{other}'")),
            }
        }
    }

    /// Run one auth attempt; `None` keeps the user on this screen
    async fn run_auth(&mut self, mode: AuthMode) -> Result<Option<Route>> {
        let mut form = AuthForm::default();

        // End of input mid-form abandons the attempt
        if mode == AuthMode::Register {
            let Some(name) = self.prompt("Full name").await? else {
                return Ok(None);
            };
            form.name = name;
        }
        let Some(email) = self.prompt("Email").await? else {
            return Ok(None);
        };
        form.email = email;
        let Some(password) = self.prompt("Password").await? else {
            return Ok(None);
        };
        form.password = password;
        if mode == AuthMode::Register {
            let Some(confirm) = self.prompt("Confirm password").await? else {
                return Ok(None);
            };
            form.confirm_password = confirm;
        }

        if let Err(e) = validate_auth_form(mode, &form) {
            self.banner(e);
            return Ok(None);
        }

        if !self.flow.begin() {
            self.banner("Another attempt is already in progress");
            return Ok(None);
        }

        let result = match mode {
            AuthMode::Login => {
                self.client
                    .login(&LoginRequest {
                        email: form.email.clone(),
                        password: form.password.clone(),
                    })
                    .await
            }
            AuthMode::Register => {
                self.client
                    .register(&RegisterRequest {
                        name: form.name.clone(),
                        email: form.email.clone(),
                        password: form.password.clone(),
                    })
                    .await
            }
        };

        match result {
            Ok(response) => {
                let Some(token) = response.token else {
                    debug!("auth response carried no token");
                    self.flow.fail();
                    self.banner(failure_message(mode));
                    return Ok(None);
                };

                let message = response
                    .message
                    .clone()
                    .unwrap_or_else(|| success_message(mode));
                self.flow.complete(Session::new(token, response.user))?;
                println!("{message}");

                // Fresh registrations go straight to profile creation
                Ok(Some(match mode {
                    AuthMode::Login => Route::Dashboard,
                    AuthMode::Register => Route::CreateProfile,
                }))
            }
            Err(err) => {
                self.flow.fail();
                // On the auth endpoints a 401 means bad credentials, not an
                // expired session
                match err {
                    ApiError::Unauthorized => self.banner(failure_message(mode)),
                    other => self.banner(other),
                }
                Ok(None)
            }
        }
    }
}

fn success_message(mode: AuthMode) -> String {
    match mode {
        AuthMode::Login => "Login successful!",
        AuthMode::Register => "Registration successful!",
    }
    .to_string()
}

fn failure_message(mode: AuthMode) -> String {
    match mode {
        AuthMode::Login => "Login failed. Please try again.",
        AuthMode::Register => "Registration failed. Please try again.",
    }
    .to_string()
}
