use super::open_storage;
use crate::{
    db::users::Users,
    libs::{
        messages::Message,
        user::{NewUser, Role},
    },
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Password};

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Unique login name
    username: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    middle_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    /// Account role: admin or user
    #[arg(long, default_value = "user")]
    role: Role,
}

pub fn cmd(args: RegisterArgs) -> Result<()> {
    let storage = open_storage()?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNewPassword.to_string())
        .with_confirmation(Message::PromptConfirmPassword.to_string(), Message::PasswordMismatch.to_string())
        .interact()?;

    let user = NewUser {
        username: args.username,
        password,
        first_name: args.first_name,
        last_name: args.last_name,
        middle_name: args.middle_name,
        email: args.email,
        role: args.role,
    };

    let outcome = Users::new(&storage).create(&user);
    if outcome.success {
        msg_success!(outcome.message);
    } else {
        msg_error!(outcome.message);
    }
    Ok(())
}
