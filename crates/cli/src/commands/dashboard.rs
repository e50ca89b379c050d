use std::io::Write;

use siniestros::{claims::ClaimStats, routes::Route};
use siniestros_app::context::ClientContext;

use crate::{
    commands::{guard, output_error},
    views::dashboard::{RECENT_CLAIMS, most_recent, write_dashboard},
};

pub(crate) async fn run(context: &ClientContext, out: &mut impl Write) -> Result<(), String> {
    let session = guard::enter(context, Route::Dashboard).await?;
    let (user, _) = guard::signed_in(&session)?;

    let claims = context
        .claims
        .list_claims()
        .await
        .map_err(|error| format!("failed to load claims: {error}"))?;

    let stats = ClaimStats::from_claims(&claims);

    write_dashboard(out, user, &stats, &most_recent(&claims, RECENT_CLAIMS)).map_err(output_error)
}
