use super::*;
use crate::catalogue::Flavor;
use crate::model::{Group, RegionTotals, SubRegion};
use crate::report::text::{COLUMN_WIDTH, render_summary_text};

fn populated_region() -> Region {
    let mut jet = Group::new("Jet", &["JES"]);
    jet.combined.insert("sfSuper1a".to_string(), 10.0);
    jet.combined.insert("emSuper1a".to_string(), 6.0);
    let mut lumi = Group::new("Luminosity", &["Lumi"]);
    lumi.combined.insert("sfSuper1a".to_string(), 2.5);
    lumi.combined.insert("emSuper1a".to_string(), 1.25);

    let mut region = Region::new(
        "Super1a",
        vec![
            SubRegion {
                id: "emSuper1a".to_string(),
                flavor: Flavor::DifferentFlavor,
            },
            SubRegion {
                id: "sfSuper1a".to_string(),
                flavor: Flavor::SameFlavor,
            },
        ],
        vec![jet, lumi],
    );
    region.totals.insert(
        "sfSuper1a".to_string(),
        RegionTotals {
            background_yield: 100.0,
            stat_error: 3.0,
            sys_error: 11.0,
        },
    );
    region.totals.insert(
        "emSuper1a".to_string(),
        RegionTotals {
            background_yield: 50.0,
            stat_error: 2.0,
            sys_error: 7.0,
        },
    );
    region
}

#[test]
fn test_build_summary_orders_sf_first() {
    let summary = build_summary(&populated_region()).unwrap();
    assert_eq!(summary.columns[0].sub_region, "sfSuper1a");
    assert_eq!(summary.columns[0].heading, "sfSuper1a (+/- #evt)");
    assert_eq!(summary.columns[1].sub_region, "emSuper1a");
    assert_eq!(summary.groups[0].values, vec![10.0, 6.0]);
    assert_eq!(summary.mc_stat.values, vec![3.0, 2.0]);
    assert_eq!(summary.total.values, vec![11.0, 7.0]);
    assert_eq!(summary.yields.values, vec![100.0, 50.0]);
}

#[test]
fn test_build_summary_missing_totals() {
    let mut region = populated_region();
    region.totals.remove("emSuper1a");
    assert!(matches!(
        build_summary(&region),
        Err(ReportError::MissingValue { .. })
    ));
}

#[test]
fn test_text_layout() {
    let summary = build_summary(&populated_region()).unwrap();
    let text = render_summary_text(&summary);
    let lines: Vec<&str> = text.lines().collect();

    let rule = "-".repeat(COLUMN_WIDTH * 3 + 2);
    assert_eq!(lines[0], rule);
    assert_eq!(
        lines[1],
        "contribution    sfSuper1a (+/- #evt) emSuper1a (+/- #evt)"
    );
    assert_eq!(lines[2], rule);
    assert_eq!(
        lines[3],
        "Jet                       10.00            6.00"
    );
    assert_eq!(
        lines[4],
        "Luminosity                 2.50            1.25"
    );
    assert_eq!(
        lines[5],
        "MC statistics              3.00            2.00"
    );
    assert_eq!(lines[6], rule);
    assert_eq!(
        lines[7],
        "Total                     11.00            7.00"
    );
    assert_eq!(lines[8], rule);
    assert_eq!(
        lines[9],
        "Yields (#evt)            100.00           50.00"
    );
    assert_eq!(lines[10], rule);
    assert_eq!(lines.len(), 11);
}
