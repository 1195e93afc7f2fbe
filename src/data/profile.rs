//! Operator profile
//!
//! The fixed readouts shown across the console tabs. Fragments reference
//! these values through the placeholder keys returned by `bindings()`.

/// Static character/system readouts for the session
#[derive(Debug, Clone)]
pub struct OperatorProfile {
    pub designation: &'static str,
    pub class_name: &'static str,
    pub rank: &'static str,
    pub condition: &'static str,

    pub health: u8,
    pub energy: u8,
    pub oxygen: u8,
    pub armor: u8,

    pub missions: [(&'static str, &'static str); 3],

    pub sector: &'static str,
    pub region: &'static str,
    pub depth: &'static str,

    pub map_location: &'static str,
    pub map_description: &'static str,
    pub map_temp: &'static str,
    pub map_humidity: &'static str,
    pub map_toxicity: &'static str,

    pub unit_id: &'static str,
    pub sys_status: &'static str,
    pub power_level: &'static str,
}

impl Default for OperatorProfile {
    fn default() -> Self {
        Self {
            designation: "A. Vance",
            class_name: "Surveyor",
            rank: "1",
            condition: "Lost",

            health: 85,
            energy: 60,
            oxygen: 95,
            armor: 70,

            missions: [
                ("Investigate Signal Anomaly", "IN PROGRESS"),
                ("Locate Energy Source", "PENDING"),
                ("Retrieve Artifact", "LOCKED"),
            ],

            sector: "THALAX",
            region: "LOW CALDERA",
            depth: "-247m",

            map_location: "VERDANT SHELF",
            map_description: "Surface region of dense vegetation and high \
humidity. Environment is suitable for most lifeforms.",
            map_temp: "28.4°C",
            map_humidity: "87%",
            map_toxicity: "LOW",

            unit_id: "VANCE-A-001",
            sys_status: "ONLINE",
            power_level: "87%",
        }
    }
}

impl OperatorProfile {
    /// Placeholder bindings for fragment population. Keys match the
    /// `{{key}}` tokens used in the page templates.
    pub fn bindings(&self) -> Vec<(&'static str, String)> {
        vec![
            ("designation", self.designation.to_string()),
            ("class", self.class_name.to_string()),
            ("rank", self.rank.to_string()),
            ("condition", self.condition.to_string()),
            ("health", self.health.to_string()),
            ("health_meter", meter(self.health)),
            ("energy", self.energy.to_string()),
            ("energy_meter", meter(self.energy)),
            ("oxygen", self.oxygen.to_string()),
            ("oxygen_meter", meter(self.oxygen)),
            ("armor", self.armor.to_string()),
            ("armor_meter", meter(self.armor)),
            ("mission1_name", self.missions[0].0.to_string()),
            ("mission1_status", self.missions[0].1.to_string()),
            ("mission2_name", self.missions[1].0.to_string()),
            ("mission2_status", self.missions[1].1.to_string()),
            ("mission3_name", self.missions[2].0.to_string()),
            ("mission3_status", self.missions[2].1.to_string()),
            ("sector", self.sector.to_string()),
            ("region", self.region.to_string()),
            ("depth", self.depth.to_string()),
            ("map_location", self.map_location.to_string()),
            ("map_description", self.map_description.to_string()),
            ("temp", self.map_temp.to_string()),
            ("humidity", self.map_humidity.to_string()),
            ("toxicity", self.map_toxicity.to_string()),
            ("unit_id", self.unit_id.to_string()),
            ("sys_status", self.sys_status.to_string()),
            ("power", self.power_level.to_string()),
        ]
    }
}

/// Render a percentage as a fixed-width bar, e.g. `█████████████░░░░░░░`.
pub fn meter(pct: u8) -> String {
    const WIDTH: usize = 20;
    let pct = pct.min(100) as usize;
    let filled = (pct * WIDTH + 50) / 100;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(WIDTH - filled));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_bounds() {
        assert_eq!(meter(0), "░".repeat(20));
        assert_eq!(meter(100), "█".repeat(20));
        // Clamped above 100
        assert_eq!(meter(255), "█".repeat(20));
    }

    #[test]
    fn test_meter_rounds() {
        assert_eq!(meter(50).chars().filter(|&c| c == '█').count(), 10);
        assert_eq!(meter(85).chars().filter(|&c| c == '█').count(), 17);
    }

    #[test]
    fn test_bindings_cover_vitals() {
        let profile = OperatorProfile::default();
        let bindings = profile.bindings();
        let get = |key: &str| {
            bindings
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(get("health"), "85");
        assert_eq!(get("sys_status"), "ONLINE");
        assert_eq!(get("mission3_status"), "LOCKED");
    }
}
