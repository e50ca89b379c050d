//! Dashboard view.

use std::io::{self, Write};

use siniestros::{
    claims::{Claim, ClaimStats, Tone},
    users::User,
};
use tabled::builder::Builder;

use crate::views::{claims::claims_table, paint, style};

/// Claims shown under "recent activity".
pub(crate) const RECENT_CLAIMS: usize = 5;

/// Greeting, counters and the most recently reported claims.
pub(crate) fn write_dashboard(
    out: &mut impl Write,
    user: &User,
    stats: &ClaimStats,
    recent: &[&Claim],
) -> io::Result<()> {
    writeln!(out, "Bienvenido, {}", user.display_name())?;

    let mut builder = Builder::default();

    builder.push_record([
        "Total", "Nuevos", "En Proceso", "Resueltos", "Alta", "Media", "Baja",
    ]);
    builder.push_record(
        [
            stats.total,
            stats.new,
            stats.in_progress,
            stats.resolved,
            stats.high,
            stats.medium,
            stats.low,
        ]
        .map(|count| count.to_string()),
    );

    let mut table = builder.build();
    style(&mut table);

    for (column, tone) in [
        (1, Tone::Info),
        (2, Tone::Warning),
        (3, Tone::Success),
        (4, Tone::Error),
        (5, Tone::Warning),
        (6, Tone::Success),
    ] {
        paint(&mut table, 1, column, tone);
    }

    writeln!(out, "{table}")?;

    if recent.is_empty() {
        return writeln!(out, "No claims reported yet.");
    }

    writeln!(out, "Siniestros recientes")?;
    writeln!(out, "{}", claims_table(recent))
}

/// The `limit` most recently reported claims, newest first.
pub(crate) fn most_recent(claims: &[Claim], limit: usize) -> Vec<&Claim> {
    let mut recent: Vec<&Claim> = claims.iter().collect();

    recent.sort_by(|a, b| b.reported_at.cmp(&a.reported_at));
    recent.truncate(limit);

    recent
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use siniestros::claims::{ClaimPriority, ClaimStatus};
    use testresult::TestResult;

    use crate::views::claims::tests::claim;

    use super::*;

    fn user() -> User {
        User {
            id: 1,
            email: Some("ana@example.com".to_string()),
            full_name: Some("Ana Pérez".to_string()),
            is_agent: true,
            is_active: true,
            assigned_users: Vec::new(),
        }
    }

    #[test]
    fn most_recent_orders_by_report_date() {
        let mut older = claim(1, "A");
        older.reported_at = date(2024, 1, 1).at(0, 0, 0, 0);
        let mut newer = claim(2, "B");
        newer.reported_at = date(2024, 2, 1).at(0, 0, 0, 0);
        let claims = [older, newer];

        let ids: Vec<i64> = most_recent(&claims, 5).iter().map(|claim| claim.id).collect();

        assert_eq!(ids, vec![2, 1]);
        assert_eq!(most_recent(&claims, 1).len(), 1);
    }

    #[test]
    fn dashboard_shows_greeting_and_counts() -> TestResult {
        let mut resolved = claim(2, "B");
        resolved.status = ClaimStatus::Resolved;
        resolved.priority = ClaimPriority::Low;
        let claims = [claim(1, "A"), resolved];
        let stats = ClaimStats::from_claims(&claims);

        let mut out = Vec::new();
        write_dashboard(&mut out, &user(), &stats, &most_recent(&claims, RECENT_CLAIMS))?;
        let output = String::from_utf8(out)?;

        assert!(output.starts_with("Bienvenido, Ana Pérez\n"));
        assert!(output.contains("Siniestros recientes"));
        assert!(output.contains("POL-002"));

        Ok(())
    }

    #[test]
    fn empty_dashboard_has_no_recent_table() -> TestResult {
        let mut out = Vec::new();
        write_dashboard(&mut out, &user(), &ClaimStats::default(), &[])?;

        assert!(String::from_utf8(out)?.ends_with("No claims reported yet.\n"));

        Ok(())
    }
}
