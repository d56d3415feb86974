use super::*;
use crate::model::Systematic;

fn sub(id: &str, flavor: Flavor) -> SubRegion {
    SubRegion {
        id: id.to_string(),
        flavor,
    }
}

#[test]
fn test_report_columns_same_flavor_first() {
    let region = Region::new(
        "SuperX",
        vec![
            sub("emSuperX", Flavor::DifferentFlavor),
            sub("sfSuperX", Flavor::SameFlavor),
        ],
        Vec::new(),
    );
    let ids: Vec<&str> = region.report_columns().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["sfSuperX", "emSuperX"]);
    let ids: Vec<&str> = region.sub_region_ids().collect();
    assert_eq!(ids, vec!["emSuperX", "sfSuperX"]);
}

#[test]
fn test_structural_equality() {
    let a = Group::new("Jet", &["JES", "JER"]);
    let mut b = Group::new("Jet", &["JES", "JER"]);
    assert_eq!(a, b);

    b.systematics[0].variation.insert("sfSuperX".to_string(), 1.0);
    assert_ne!(a, b);

    let mut s = Systematic::new("JES");
    s.variation.insert("sfSuperX".to_string(), 1.0);
    assert_eq!(b.systematics[0], s);
}
