use std::io::Write;

use siniestros::routes::Route;
use siniestros_app::{context::ClientContext, health};

use crate::{
    commands::{guard, output_error},
    views::session::write_health,
};

pub(crate) async fn run(context: &ClientContext, out: &mut impl Write) -> Result<(), String> {
    guard::enter(context, Route::Home).await?;

    let status = health::check(&context.api)
        .await
        .map_err(|error| format!("API unavailable: {error}"))?;

    write_health(out, &status).map_err(output_error)
}
