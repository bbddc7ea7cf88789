use super::Command;
use crate::auth::{AuthClient, Session};
use anyhow::Result;
use std::io::Write;

pub struct LoginCommand {
    pub email: String,
    pub use_password: bool,
}

impl LoginCommand {
    pub fn new(email: String, use_password: bool) -> Self {
        Self {
            email,
            use_password,
        }
    }
}

impl Command for LoginCommand {
    async fn execute(&self) -> Result<()> {
        let auth = AuthClient::new()?;

        if self.use_password {
            print!("Password for {}: ", self.email);
            std::io::stdout().flush()?;
            let mut password = String::new();
            std::io::stdin().read_line(&mut password)?;

            let session = auth.password_login(&self.email, password.trim()).await?;
            println!("✅ Signed in as {}", session.email);
        } else {
            auth.request_magic_link(&self.email).await?;
            println!("📧 Magic link sent to {}", self.email);
            println!("   Complete the sign-in in your browser, then use password login");
            println!("   here if you need an authenticated CLI session.");
        }
        Ok(())
    }
}

pub struct LogoutCommand;

impl LogoutCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogoutCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for LogoutCommand {
    async fn execute(&self) -> Result<()> {
        Session::clear()?;
        println!("✅ Session discarded");
        Ok(())
    }
}
