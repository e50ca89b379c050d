//! Account and server status views.

use std::io::{self, Write};

use siniestros::users::{User, UserKind};
use siniestros_app::health::HealthStatus;
use tabled::builder::Builder;

use crate::views::style;

fn kind_label(kind: UserKind) -> &'static str {
    match kind {
        UserKind::Regular => "Usuario",
        UserKind::Agent => "Agente",
    }
}

/// The signed-in account.
pub(crate) fn write_profile(out: &mut impl Write, user: &User, kind: UserKind) -> io::Result<()> {
    let id = user.id.to_string();
    let name = user.display_name();

    let mut builder = Builder::default();

    builder.push_record(["Nombre", name.as_str()]);
    builder.push_record(["Email", user.email.as_deref().unwrap_or("-")]);
    builder.push_record(["Rol", kind_label(kind)]);
    builder.push_record(["ID", id.as_str()]);
    builder.push_record(["Activo", if user.is_active { "Sí" } else { "No" }]);

    let mut table = builder.build();
    style(&mut table);

    writeln!(out, "{table}")
}

/// Users assigned to an agent.
pub(crate) fn write_assigned_users(out: &mut impl Write, agent: &User) -> io::Result<()> {
    if agent.assigned_users.is_empty() {
        return writeln!(out, "No users are assigned to {}.", agent.display_name());
    }

    let mut builder = Builder::default();

    builder.push_record(["Usuario asignado"]);

    for user in &agent.assigned_users {
        builder.push_record([format!("#{user}")]);
    }

    let mut table = builder.build();
    style(&mut table);

    writeln!(out, "{table}")
}

/// Server liveness.
pub(crate) fn write_health(out: &mut impl Write, health: &HealthStatus) -> io::Result<()> {
    let state = if health.is_ok() { "up" } else { "degraded" };

    match health.message.as_deref() {
        Some(message) => writeln!(out, "API {state} ({}): {message}", health.status),
        None => writeln!(out, "API {state} ({})", health.status),
    }
}

/// Confirmation after a successful login.
pub(crate) fn write_logged_in(out: &mut impl Write, user: &User, kind: UserKind) -> io::Result<()> {
    writeln!(
        out,
        "Logged in as {} ({})",
        user.display_name(),
        kind_label(kind)
    )
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn agent(assigned_users: Vec<i64>) -> User {
        User {
            id: 3,
            email: Some("agente@example.com".to_string()),
            full_name: None,
            is_agent: true,
            is_active: true,
            assigned_users,
        }
    }

    #[test]
    fn profile_falls_back_to_email() -> TestResult {
        let mut out = Vec::new();
        write_profile(&mut out, &agent(Vec::new()), UserKind::Agent)?;
        let output = String::from_utf8(out)?;

        assert!(output.contains("agente@example.com"));
        assert!(output.contains("Agente"));

        Ok(())
    }

    #[test]
    fn assigned_users_are_listed() -> TestResult {
        let mut out = Vec::new();
        write_assigned_users(&mut out, &agent(vec![5, 8]))?;
        let output = String::from_utf8(out)?;

        assert!(output.contains("#5"));
        assert!(output.contains("#8"));

        Ok(())
    }

    #[test]
    fn health_includes_server_message() -> TestResult {
        let mut out = Vec::new();
        write_health(
            &mut out,
            &HealthStatus {
                status: "ok".to_string(),
                message: Some("El servicio está funcionando correctamente".to_string()),
            },
        )?;

        assert_eq!(
            String::from_utf8(out)?,
            "API up (ok): El servicio está funcionando correctamente\n"
        );

        Ok(())
    }
}
