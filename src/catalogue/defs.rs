use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    SameFlavor,
    DifferentFlavor,
}

#[derive(Debug, Clone, Copy)]
pub struct SubRegionDef {
    pub id: &'static str,
    pub flavor: Flavor,
}

#[derive(Debug, Clone, Copy)]
pub struct RegionDef {
    pub name: &'static str,
    pub sub_regions: &'static [SubRegionDef],
}

#[derive(Debug, Clone, Copy)]
pub struct GroupDef {
    pub name: &'static str,
    pub systematics: &'static [&'static str],
}

const SUPER_1A: &[SubRegionDef] = &[
    SubRegionDef {
        id: "sfSuper1a",
        flavor: Flavor::SameFlavor,
    },
    SubRegionDef {
        id: "emSuper1a",
        flavor: Flavor::DifferentFlavor,
    },
];

const SUPER_1C: &[SubRegionDef] = &[
    SubRegionDef {
        id: "sfSuper1c",
        flavor: Flavor::SameFlavor,
    },
    SubRegionDef {
        id: "emSuper1c",
        flavor: Flavor::DifferentFlavor,
    },
];

const BUILTIN_REGIONS: &[RegionDef] = &[
    RegionDef {
        name: "Super1a",
        sub_regions: SUPER_1A,
    },
    RegionDef {
        name: "Super1c",
        sub_regions: SUPER_1C,
    },
];

// Names as they appear in the leading column of the SysTable rows.
const JET: &[&str] = &["JES", "JER"];
const LEPTON: &[&str] = &[
    "EESZ",
    "EER",
    "EESMAT",
    "ESF",
    "MEFF",
    "EESLOW",
    "TES",
    "EESPS",
    "MS",
    "MID",
    "Electron trigger efficiency",
    "Muon trigger efficiency",
];
const B_TAGGING: &[&str] = &["BJET", "BMISTAG", "CJET"];
const MET_SOFT_TERM: &[&str] = &["RESOST", "SCALEST"];
const NON_PROMPT: &[&str] = &["Fake estimate combined"];
const MODELLING_TOP: &[&str] = &["Top theory/generator", "Top normalization"];
const MODELLING_WW: &[&str] = &["WW theory/generator", "WW normalization"];
const MODELLING_ZV: &[&str] = &["ZV theory/generator", "ZV normalization"];
const LUMINOSITY: &[&str] = &["Lumi"];

const BUILTIN_GROUPS: &[GroupDef] = &[
    GroupDef {
        name: "Jet",
        systematics: JET,
    },
    GroupDef {
        name: "Lepton",
        systematics: LEPTON,
    },
    GroupDef {
        name: "b-tagging",
        systematics: B_TAGGING,
    },
    GroupDef {
        name: "MET soft-term",
        systematics: MET_SOFT_TERM,
    },
    GroupDef {
        name: "Non-prompt leptons",
        systematics: NON_PROMPT,
    },
    GroupDef {
        name: "Modelling-Top",
        systematics: MODELLING_TOP,
    },
    GroupDef {
        name: "Modelling-WW",
        systematics: MODELLING_WW,
    },
    GroupDef {
        name: "Modelling-ZV",
        systematics: MODELLING_ZV,
    },
    GroupDef {
        name: "Luminosity",
        systematics: LUMINOSITY,
    },
];

pub fn builtin_regions() -> &'static [RegionDef] {
    BUILTIN_REGIONS
}

pub fn builtin_groups() -> &'static [GroupDef] {
    BUILTIN_GROUPS
}

pub fn find_region(name: &str) -> Option<&'static RegionDef> {
    BUILTIN_REGIONS.iter().find(|r| r.name == name)
}
