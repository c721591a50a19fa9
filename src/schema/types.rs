use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Display languages with a name column in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Kr,
    Jp,
    En,
}

impl Language {
    /// All languages in selector order
    pub const ALL: [Language; 3] = [Language::Kr, Language::Jp, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Kr => "kr",
            Language::Jp => "jp",
            Language::En => "en",
        }
    }

    /// Native label shown in the language selector
    pub fn label(&self) -> &'static str {
        match self {
            Language::Kr => "한국어",
            Language::Jp => "日本語",
            Language::En => "English",
        }
    }

    /// Next language in selector order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Language::Kr => Language::Jp,
            Language::Jp => Language::En,
            Language::En => Language::Kr,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Remodel material keys, in catalog column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    Blueprint,
    Report,
    Catapult,
    GunMat,
    AirMat,
    ArmMat,
    DevMat,
    Torch,
    Boiler,
    Osmat,
    Screw,
}

impl Material {
    pub const ALL: [Material; 11] = [
        Material::Blueprint,
        Material::Report,
        Material::Catapult,
        Material::GunMat,
        Material::AirMat,
        Material::ArmMat,
        Material::DevMat,
        Material::Torch,
        Material::Boiler,
        Material::Osmat,
        Material::Screw,
    ];

    /// Key used in persisted and exported data
    pub fn key(&self) -> &'static str {
        match self {
            Material::Blueprint => "blueprint",
            Material::Report => "report",
            Material::Catapult => "catapult",
            Material::GunMat => "gunMat",
            Material::AirMat => "airMat",
            Material::ArmMat => "armMat",
            Material::DevMat => "devMat",
            Material::Torch => "torch",
            Material::Boiler => "boiler",
            Material::Osmat => "osmat",
            Material::Screw => "screw",
        }
    }

    /// Icon asset file name under `items/`
    pub fn icon_file(&self) -> &'static str {
        match self {
            Material::Blueprint => "blueprint.png",
            Material::Report => "report.png",
            Material::Catapult => "catapult.png",
            Material::GunMat => "gun.png",
            Material::AirMat => "air.png",
            Material::ArmMat => "arm.png",
            Material::DevMat => "dev.png",
            Material::Torch => "torch.png",
            Material::Boiler => "boiler.png",
            Material::Osmat => "os.png",
            Material::Screw => "screw.png",
        }
    }

    /// Short label for terminal output
    pub fn short_label(&self) -> &'static str {
        match self {
            Material::Blueprint => "BP",
            Material::Report => "Rpt",
            Material::Catapult => "Cat",
            Material::GunMat => "Gun",
            Material::AirMat => "Air",
            Material::ArmMat => "Arm",
            Material::DevMat => "Dev",
            Material::Torch => "Torch",
            Material::Boiler => "Boiler",
            Material::Osmat => "OS",
            Material::Screw => "Screw",
        }
    }
}

/// A display group: a title and the ship type codes it collects
#[derive(Debug, Clone)]
pub struct GroupDefinition {
    pub title: &'static str,
    pub types: &'static [&'static str],
}

impl GroupDefinition {
    pub const fn new(title: &'static str, types: &'static [&'static str]) -> Self {
        Self { title, types }
    }

    pub fn contains(&self, ship_type: &str) -> bool {
        self.types.iter().any(|t| *t == ship_type)
    }
}
