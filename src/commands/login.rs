use super::open_storage;
use crate::{
    db::users::Users,
    libs::{messages::Message, view::View},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account username
    username: String,
    /// Print the login result as JSON
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: LoginArgs) -> Result<()> {
    let storage = open_storage()?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .allow_empty_password(true)
        .interact()?;

    let outcome = Users::new(&storage).verify_login(&args.username, &password);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match (&outcome.user, &outcome.message) {
        (Some(user), _) => {
            msg_success!(Message::LoggedInAs(user.full_name.clone(), user.role.to_string()));
            View::user(user);
        }
        (None, Some(message)) => msg_error!(message),
        (None, None) => msg_error!(Message::InvalidCredentials),
    }
    Ok(())
}
