use super::{require_admin, with_backend_client, Command};
use anyhow::Result;
use std::io::Write;

pub struct UsersCommand {
    pub pending_only: bool,
}

impl UsersCommand {
    pub fn new(pending_only: bool) -> Self {
        Self { pending_only }
    }
}

impl Command for UsersCommand {
    async fn execute(&self) -> Result<()> {
        require_admin()?;
        with_backend_client(|client| async move {
            let mut users = client.users().fetch_all().await?;
            if self.pending_only {
                users.retain(|user| !user.approved);
            }

            if users.is_empty() {
                println!("No users found");
                return Ok(());
            }

            println!("{:<36} {:<10} {}", "EMAIL", "STATUS", "REQUESTED");
            for user in &users {
                let requested = user
                    .created_at
                    .map(|at| at.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "—".to_string());
                println!(
                    "{:<36} {:<10} {}",
                    user.email,
                    if user.approved { "Approved" } else { "Pending" },
                    requested
                );
            }
            Ok(())
        })
        .await
    }
}

pub struct ApproveCommand {
    pub email: String,
}

impl ApproveCommand {
    pub fn new(email: String) -> Self {
        Self { email }
    }
}

impl Command for ApproveCommand {
    async fn execute(&self) -> Result<()> {
        require_admin()?;
        with_backend_client(|client| async move {
            client.users().approve(&self.email).await?;
            println!("✅ {} approved", self.email);
            Ok(())
        })
        .await
    }
}

pub struct ResetLoginCommand {
    pub email: String,
    pub yes: bool,
}

impl ResetLoginCommand {
    pub fn new(email: String, yes: bool) -> Self {
        Self { email, yes }
    }

    fn confirm(&self) -> Result<bool> {
        if self.yes {
            return Ok(true);
        }
        print!(
            "Reset login for {}? They will need to recreate it. [y/N] ",
            self.email
        );
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
    }
}

impl Command for ResetLoginCommand {
    async fn execute(&self) -> Result<()> {
        require_admin()?;
        if !self.confirm()? {
            println!("Aborted");
            return Ok(());
        }
        with_backend_client(|client| async move {
            client.users().reset_password(&self.email).await?;
            println!("✅ {} reset - they can now recreate their login", self.email);
            Ok(())
        })
        .await
    }
}
