use std::path::Path;

use super::*;
use crate::catalogue::Flavor;
use crate::model::SubRegion;
use crate::pipeline::stage2_parse::ParseError;

fn group_with(values: &[(&str, f64)], sub_region: &str) -> Group {
    let names: Vec<&str> = values.iter().map(|(n, _)| *n).collect();
    let mut group = Group::new("Lepton", &names);
    for (sys, (_, v)) in group.systematics.iter_mut().zip(values) {
        sys.variation.insert(sub_region.to_string(), *v);
    }
    group
}

fn table(raw: &str) -> TableText {
    TableText::from_text(Path::new("SysTable_sfSuperX.tex"), raw)
}

#[test]
fn test_combine_group_is_quadrature_sum() {
    let group = group_with(&[("EESZ", 3.0), ("EER", 4.0), ("MS", 12.0)], "sfSuperX");
    let combined = combine_group(&group, "sfSuperX").unwrap();
    assert!((combined - 13.0).abs() < 1e-12);
}

#[test]
fn test_combine_group_not_below_largest_member() {
    let values = [("A", 0.5), ("B", 7.25), ("C", 0.0), ("D", 2.0)];
    let group = group_with(&values, "sfSuperX");
    let combined = combine_group(&group, "sfSuperX").unwrap();
    let max = values.iter().map(|(_, v)| *v).fold(0.0f64, f64::max);
    assert!(combined >= max);
    let expected = values.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
    assert!((combined - expected).abs() < 1e-12);
}

#[test]
fn test_combine_group_missing_variation() {
    let group = group_with(&[("EESZ", 3.0)], "sfSuperX");
    let err = combine_group(&group, "emSuperX").unwrap_err();
    assert!(matches!(
        err,
        AggregateError::MissingVariation { ref systematic, .. } if systematic == "EESZ"
    ));
}

#[test]
fn test_fill_and_combine_from_table() {
    let t = table(
        "alpha\\_JES & $\\pm 3.00\\ [1\\%] $ & $\\pm 1.00\\ [1\\%] $ \\\\\n\
         alpha\\_JER & $\\pm 0.00\\ [0\\%] $ & $\\pm 0.00\\ [0\\%] $ \\\\\n",
    );
    let mut groups = vec![Group::new("Jet", &["JES", "JER"])];
    fill_systematics(&mut groups, "sfSuperX", &t).unwrap();
    combine_systematics(&mut groups, "sfSuperX").unwrap();

    assert_eq!(groups[0].systematics[0].variation["sfSuperX"], 4.0);
    assert_eq!(groups[0].systematics[1].variation["sfSuperX"], 0.0);
    assert_eq!(groups[0].combined["sfSuperX"], 4.0);
}

#[test]
fn test_fill_missing_row_never_defaults_to_zero() {
    let t = table("alpha\\_JES & $\\pm 3.00\\ [1\\%] $ \\\\\n");
    let mut groups = vec![Group::new("Jet", &["JES", "JER"])];
    let err = fill_systematics(&mut groups, "sfSuperX", &t).unwrap_err();
    assert!(matches!(
        err,
        AggregateError::Parse {
            source: ParseError::RowNotFound { .. },
            ..
        }
    ));
    assert!(!groups[0].systematics[1].variation.contains_key("sfSuperX"));
}

#[test]
fn test_collect_region_totals() {
    let t = table(
        "Total background expectation & $ 10.00 $ & $ 5.50 $ \\\\\n\
         Total background systematic & $\\pm 3.00\\ [1\\%] $ & $\\pm 4.00\\ [1\\%] $ \\\\\n\
         mcstat\\_Top & $\\pm 1.00\\ [1\\%] $ & $\\pm 0.00\\ [0\\%] $ \\\\\n",
    );
    let totals = collect_region_totals("sfSuperX", &t).unwrap();
    assert_eq!(
        totals,
        RegionTotals {
            background_yield: 15.5,
            stat_error: 1.0,
            sys_error: 5.0,
        }
    );
}

#[test]
fn test_run_stage3_isolates_failures() {
    let good = table(
        "Total background expectation & $ 10.00 $ \\\\\n\
         Total background systematic & $\\pm 3.00\\ [1\\%] $ \\\\\n\
         mcstat\\_Top & $\\pm 1.00\\ [1\\%] $ \\\\\n\
         JES & $\\pm 2.00\\ [1\\%] $ \\\\\n",
    );
    let bad = table("JES & $\\pm 2.00\\ [1\\%] $ \\\\\n");

    let mut region = Region::new(
        "SuperX",
        vec![
            SubRegion {
                id: "sfSuperX".to_string(),
                flavor: Flavor::SameFlavor,
            },
            SubRegion {
                id: "emSuperX".to_string(),
                flavor: Flavor::DifferentFlavor,
            },
        ],
        vec![Group::new("Jet", &["JES"])],
    );
    let mut tables = BTreeMap::new();
    tables.insert("sfSuperX".to_string(), good);
    tables.insert("emSuperX".to_string(), bad);

    let failures = run_stage3(&mut region, &tables);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].sub_region(), "emSuperX");
    assert!(region.totals.contains_key("sfSuperX"));
    assert!(!region.totals.contains_key("emSuperX"));
    assert_eq!(group_quadrature_total(&region.groups, "sfSuperX"), Some(2.0));
}
