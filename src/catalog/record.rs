use serde::Serialize;

use crate::schema::{Language, Material};

/// Minimum number of columns a row needs: id, three names, type, level
pub const MIN_COLUMNS: usize = 6;

/// Column index of the first material quantity
const MATERIAL_OFFSET: usize = MIN_COLUMNS;

/// Display names for a ship, one per catalog language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Names {
    pub en: String,
    pub jp: String,
    pub kr: String,
}

impl Names {
    /// Name for the given language, falling back to English when empty
    pub fn get(&self, language: Language) -> &str {
        let name = match language {
            Language::En => &self.en,
            Language::Jp => &self.jp,
            Language::Kr => &self.kr,
        };
        if name.is_empty() {
            &self.en
        } else {
            name
        }
    }
}

/// Material quantities needed for a ship's remodel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Materials {
    pub blueprint: u32,
    pub report: u32,
    pub catapult: u32,
    pub gun_mat: u32,
    pub air_mat: u32,
    pub arm_mat: u32,
    pub dev_mat: u32,
    pub torch: u32,
    pub boiler: u32,
    pub osmat: u32,
    pub screw: u32,
}

impl Materials {
    pub fn get(&self, material: Material) -> u32 {
        match material {
            Material::Blueprint => self.blueprint,
            Material::Report => self.report,
            Material::Catapult => self.catapult,
            Material::GunMat => self.gun_mat,
            Material::AirMat => self.air_mat,
            Material::ArmMat => self.arm_mat,
            Material::DevMat => self.dev_mat,
            Material::Torch => self.torch,
            Material::Boiler => self.boiler,
            Material::Osmat => self.osmat,
            Material::Screw => self.screw,
        }
    }

    fn slot(&mut self, material: Material) -> &mut u32 {
        match material {
            Material::Blueprint => &mut self.blueprint,
            Material::Report => &mut self.report,
            Material::Catapult => &mut self.catapult,
            Material::GunMat => &mut self.gun_mat,
            Material::AirMat => &mut self.air_mat,
            Material::ArmMat => &mut self.arm_mat,
            Material::DevMat => &mut self.dev_mat,
            Material::Torch => &mut self.torch,
            Material::Boiler => &mut self.boiler,
            Material::Osmat => &mut self.osmat,
            Material::Screw => &mut self.screw,
        }
    }

    /// Materials with a positive quantity, in column order
    pub fn required(&self) -> impl Iterator<Item = (Material, u32)> + '_ {
        Material::ALL
            .into_iter()
            .map(move |m| (m, self.get(m)))
            .filter(|(_, count)| *count > 0)
    }
}

/// One catalog row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipRecord {
    pub id: String,
    pub names: Names,
    #[serde(rename = "type")]
    pub ship_type: String,
    pub remodel_level: u32,
    pub materials: Materials,
}

impl ShipRecord {
    pub fn display_name(&self, language: Language) -> &str {
        self.names.get(language)
    }

    /// Image asset path; the id doubles as the file stem
    pub fn image_file(&self) -> String {
        format!("ships/{}.png", self.id)
    }
}

/// Parse one catalog line. Returns `None` for rows with too few columns.
pub fn parse_line(line: &str) -> Option<ShipRecord> {
    let cols: Vec<&str> = line.split(',').map(str::trim).collect();
    if cols.len() < MIN_COLUMNS {
        return None;
    }

    let mut materials = Materials::default();
    for (i, material) in Material::ALL.iter().enumerate() {
        *materials.slot(*material) = number_at(&cols, MATERIAL_OFFSET + i);
    }

    Some(ShipRecord {
        id: cols[0].to_string(),
        names: Names {
            en: cols[1].to_string(),
            jp: cols[2].to_string(),
            kr: cols[3].to_string(),
        },
        ship_type: cols[4].to_string(),
        remodel_level: number_at(&cols, 5),
        materials,
    })
}

/// Non-negative integer at `idx`, or 0 when missing or unparseable
fn number_at(cols: &[&str], idx: usize) -> u32 {
    cols.get(idx).and_then(|s| s.parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_example_row() {
        let ship = parse_line("S001,Fubuki,吹雪,후부키,DD,2,1,2,0,0,0,0,1,0,0,0,0").unwrap();
        assert_eq!(ship.id, "S001");
        assert_eq!(ship.names.en, "Fubuki");
        assert_eq!(ship.names.jp, "吹雪");
        assert_eq!(ship.names.kr, "후부키");
        assert_eq!(ship.ship_type, "DD");
        assert_eq!(ship.remodel_level, 2);
        assert_eq!(ship.materials.blueprint, 1);
        assert_eq!(ship.materials.report, 2);
        assert_eq!(ship.materials.dev_mat, 1);
        let others: u32 = Material::ALL
            .iter()
            .filter(|m| !matches!(m, Material::Blueprint | Material::Report | Material::DevMat))
            .map(|m| ship.materials.get(*m))
            .sum();
        assert_eq!(others, 0);
    }

    #[test]
    fn test_short_rows_are_rejected() {
        assert!(parse_line("").is_none());
        assert!(parse_line("S001,Fubuki,吹雪,후부키,DD").is_none());
        assert!(parse_line("S001,Fubuki,吹雪,후부키,DD,").is_some());
    }

    #[test]
    fn test_missing_and_bad_numbers_default_to_zero() {
        let ship = parse_line("S002, Mutsuki ,睦月,무츠키,DD,abc,3,x,-1").unwrap();
        assert_eq!(ship.names.en, "Mutsuki");
        assert_eq!(ship.remodel_level, 0);
        assert_eq!(ship.materials.blueprint, 3);
        assert_eq!(ship.materials.report, 0);
        assert_eq!(ship.materials.catapult, 0);
        assert_eq!(ship.materials.screw, 0);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let ship = parse_line(" S003 , Kongou , 金剛 , 콩고 , FBB , 75 , 1\r").unwrap();
        assert_eq!(ship.id, "S003");
        assert_eq!(ship.ship_type, "FBB");
        assert_eq!(ship.remodel_level, 75);
        assert_eq!(ship.materials.blueprint, 1);
    }

    #[test]
    fn test_name_falls_back_to_english() {
        let ship = parse_line("S004,Yuubari,,유바리,CL,45").unwrap();
        assert_eq!(ship.display_name(Language::Jp), "Yuubari");
        assert_eq!(ship.display_name(Language::Kr), "유바리");
    }

    #[test]
    fn test_required_materials_skip_zero() {
        let ship = parse_line("S005,Chitose,千歳,치토세,CVL,50,0,1,2").unwrap();
        let required: Vec<_> = ship.materials.required().collect();
        assert_eq!(required, vec![(Material::Report, 1), (Material::Catapult, 2)]);
    }
}
