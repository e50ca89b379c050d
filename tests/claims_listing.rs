//! Claims as served by the API, searched, paged and counted the way the list views do.

use serde_json::json;
use siniestros::{
    claims::{Claim, ClaimPriority, ClaimStats, ClaimStatus},
    dates::format_date,
    listing::{PageRequest, filter, paginate},
};
use testresult::TestResult;

fn served_claims() -> Result<Vec<Claim>, serde_json::Error> {
    serde_json::from_value(json!([
        {
            "id": 1,
            "owner_id": 2,
            "numero_poliza": "POL-001",
            "asegurado": "Juan López",
            "tipo_siniestro": "Hogar",
            "descripcion": "Fuga de agua",
            "estado": "Nuevo",
            "prioridad": "Alta",
            "fecha_siniestro": "2024-03-07T08:00:00",
            "fecha_reporte": "2024-03-08T09:15:00"
        },
        {
            "id": 2,
            "owner_id": 2,
            "numero_poliza": "POL-002",
            "asegurado": "María Ruiz",
            "tipo_siniestro": "Automóvil",
            "descripcion": null,
            "estado": "En Proceso",
            "prioridad": "Media",
            "fecha_siniestro": "2024-04-01T10:00:00",
            "fecha_reporte": "2024-04-02T11:00:00"
        },
        {
            "id": 3,
            "owner_id": 5,
            "numero_poliza": "AUT-778",
            "asegurado": "Pedro Gil",
            "tipo_siniestro": "Automóvil",
            "estado": "Resuelto",
            "prioridad": null,
            "fecha_siniestro": "2024-05-20T00:00:00",
            "fecha_reporte": "2024-05-21T00:00:00"
        },
        {
            "id": 4,
            "owner_id": 5,
            "numero_poliza": "VID-100",
            "asegurado": "Lucía Sanz",
            "tipo_siniestro": "Vida",
            "estado": "Archivado",
            "prioridad": "Baja",
            "fecha_siniestro": "2024-06-11T00:00:00",
            "fecha_reporte": "2024-06-12T00:00:00"
        }
    ]))
}

#[test]
fn served_claims_are_read_with_lenient_labels() -> TestResult {
    let claims = served_claims()?;

    let statuses: Vec<&ClaimStatus> = claims.iter().map(|claim| &claim.status).collect();

    assert_eq!(
        statuses,
        [
            &ClaimStatus::New,
            &ClaimStatus::InProgress,
            &ClaimStatus::Resolved,
            &ClaimStatus::Other("Archivado".to_string()),
        ]
    );

    let third = claims.get(2).ok_or("missing claim 3")?;

    assert_eq!(third.priority, ClaimPriority::default());
    assert_eq!(third.description, None);
    assert_eq!(format_date(third.incident_date), "20/05/2024");

    Ok(())
}

#[test]
fn search_then_page_keeps_server_order() -> TestResult {
    let claims = served_claims()?;

    let matches = filter(&claims, "automóvil");
    let page = paginate(matches, PageRequest::new(0, 5)?);

    let ids: Vec<i64> = page.items.iter().map(|claim| claim.id).collect();

    assert_eq!(ids, vec![2, 3]);
    assert_eq!(page.range(), Some((1, 2)));
    assert_eq!(page.page_count(), 1);

    Ok(())
}

#[test]
fn search_without_matches_yields_an_empty_first_page() -> TestResult {
    let claims = served_claims()?;

    let page = paginate(filter(&claims, "incendio"), PageRequest::default());

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.page_count(), 1);

    Ok(())
}

#[test]
fn dashboard_counters_skip_unknown_labels() -> TestResult {
    let stats = ClaimStats::from_claims(&served_claims()?);

    // A missing priority reads as the default, so it counts as medium.
    assert_eq!(stats.total, 4);
    assert_eq!((stats.new, stats.in_progress, stats.resolved), (1, 1, 1));
    assert_eq!((stats.high, stats.medium, stats.low), (1, 2, 1));

    Ok(())
}
