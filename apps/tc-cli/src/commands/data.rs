// data.rs — Bulk data operations.

use clap::Subcommand;

use crate::app::App;

#[derive(Subcommand)]
pub enum DataCommands {
    /// Delete all stored goals and sign out.
    DeleteAll {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

pub async fn execute(cmd: &DataCommands, app: &App) -> anyhow::Result<()> {
    match cmd {
        DataCommands::DeleteAll { yes } => delete_all(app, *yes).await,
    }
}

async fn delete_all(app: &App, confirmed: bool) -> anyhow::Result<()> {
    if !confirmed {
        anyhow::bail!("refusing to delete all data without --yes");
    }

    app.goals.delete_all().await?;
    app.auth.sign_out().await?;
    tracing::info!("all local data deleted");
    println!("All local data deleted.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompanionConfig;
    use tc_auth::AuthMode;
    use tempfile::TempDir;

    #[tokio::test]
    async fn delete_all_wipes_goals_and_session() {
        let dir = TempDir::new().unwrap();
        let mut config = CompanionConfig::for_data_dir(dir.path());
        config.auth.mode = AuthMode::Local;
        let app = App::open(&config).unwrap();

        app.goals
            .save(vec!["sleep".into()], vec!["rest".into()])
            .await
            .unwrap();
        app.auth.sign_in("jo@example.com", "Jo").await.unwrap();

        delete_all(&app, true).await.unwrap();

        assert!(app.goals.load().await.unwrap().is_none());
        assert!(!app.auth.is_authenticated().await.unwrap());
    }

    #[tokio::test]
    async fn delete_all_requires_confirmation() {
        let dir = TempDir::new().unwrap();
        let app = App::open(&CompanionConfig::for_data_dir(dir.path())).unwrap();
        app.goals.save(vec!["x".into()], vec![]).await.unwrap();

        assert!(delete_all(&app, false).await.is_err());
        assert!(app.goals.has_goals().await.unwrap());
    }
}
