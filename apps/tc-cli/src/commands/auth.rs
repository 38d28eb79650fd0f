// auth.rs — Auth subcommands: status, sign-in, sign-out.

use clap::Subcommand;

use crate::app::App;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Show who is signed in.
    Status,
    /// Sign in on this device.
    SignIn {
        /// Email address.
        email: String,
        /// Display name (defaults to the part of the email before '@').
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Sign out on this device.
    SignOut,
}

pub async fn execute(cmd: &AuthCommands, app: &App) -> anyhow::Result<()> {
    let provider = app.auth.name();
    match cmd {
        AuthCommands::Status => match app.auth.current_user().await? {
            Some(user) => {
                println!("Signed in ({} provider)", provider);
                println!("User:     {}", user.user_id);
                println!("Email:    {}", user.email);
                println!("Name:     {}", user.display_name);
                println!("Since:    {}", user.signed_in_at.to_rfc3339());
            }
            None => println!("Not signed in ({} provider).", provider),
        },
        AuthCommands::SignIn { email, name } => {
            let user = app.auth.sign_in(email, name).await?;
            println!("Signed in as {} <{}>", user.display_name, user.email);
        }
        AuthCommands::SignOut => {
            app.auth.sign_out().await?;
            println!("Signed out.");
        }
    }
    Ok(())
}
