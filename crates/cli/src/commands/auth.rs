use std::io::Write;

use clap::Args;
use siniestros::{routes::Route, users::RegistrationForm};
use siniestros_app::{
    context::ClientContext,
    session::{LOGIN_FAILED, REGISTRATION_FAILED},
};

use crate::{
    commands::{guard, output_error},
    views::session::{write_assigned_users, write_logged_in, write_profile},
};

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account email
    #[arg(long, env = "SINIESTROS_EMAIL")]
    email: String,

    /// Account password
    #[arg(long, env = "SINIESTROS_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
pub(crate) struct RegisterArgs {
    /// Account email
    #[arg(long)]
    email: String,

    /// Display name
    #[arg(long)]
    full_name: String,

    /// Password, at least 8 characters
    #[arg(long)]
    password: String,

    /// Password again
    #[arg(long)]
    confirm_password: String,

    /// Register an agent account
    #[arg(long)]
    agent: bool,
}

pub(crate) async fn login(
    args: LoginArgs,
    context: &ClientContext,
    out: &mut impl Write,
) -> Result<(), String> {
    guard::enter(context, Route::Login).await?;

    let kind = context
        .session
        .login(&args.email, &args.password)
        .await
        .map_err(|error| error.display_message(LOGIN_FAILED))?;

    let session = context.session.snapshot();
    let (user, _) = guard::signed_in(&session)?;

    write_logged_in(out, user, kind).map_err(output_error)
}

pub(crate) async fn register(
    args: RegisterArgs,
    context: &ClientContext,
    out: &mut impl Write,
) -> Result<(), String> {
    guard::enter(context, Route::Register).await?;

    let registration = RegistrationForm {
        email: args.email,
        full_name: args.full_name,
        password: args.password,
        confirm_password: args.confirm_password,
        is_agent: args.agent,
    }
    .validate()
    .map_err(|error| error.to_string())?;

    let user = context
        .session
        .register(&registration)
        .await
        .map_err(|error| error.display_message(REGISTRATION_FAILED))?;

    writeln!(
        out,
        "Account created for {}; run `siniestros login` to continue",
        user.display_name()
    )
    .map_err(output_error)
}

pub(crate) async fn logout(context: &ClientContext, out: &mut impl Write) -> Result<(), String> {
    context
        .session
        .logout()
        .await
        .map_err(|error| format!("logged out, but {error}"))?;

    writeln!(out, "Logged out.").map_err(output_error)
}

pub(crate) async fn whoami(context: &ClientContext, out: &mut impl Write) -> Result<(), String> {
    let session = guard::enter(context, Route::Profile).await?;
    let (user, kind) = guard::signed_in(&session)?;

    write_profile(out, user, kind).map_err(output_error)
}

pub(crate) async fn users(context: &ClientContext, out: &mut impl Write) -> Result<(), String> {
    let session = guard::enter(context, Route::Users).await?;
    let (agent, _) = guard::signed_in(&session)?;

    write_assigned_users(out, agent).map_err(output_error)
}
