use super::{
    BikePreferences, CarPreferences, PreferencesError, ScooterPreferences, StreetPreferences,
    VehicleParkingPreferences, VehicleRentalPreferences, WalkPreferences, WheelchairPreferences,
};
use crate::model::mode::TraverseMode;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use PreferencesError as E;

/// prefix for environment variables that override preference files,
/// for example `BAMBAM_STREET__WALK__SPEED=1.5`.
pub const ENV_PREFIX: &str = "BAMBAM_STREET";

/// all traveler preferences consulted while traversing the street graph.
/// every section falls back to its defaults when omitted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct RoutingPreferences {
    pub walk: WalkPreferences,
    pub bike: BikePreferences,
    pub scooter: ScooterPreferences,
    pub car: CarPreferences,
    pub street: StreetPreferences,
    pub wheelchair: WheelchairPreferences,
}

impl RoutingPreferences {
    pub fn from_toml_str(value: &str) -> Result<RoutingPreferences, PreferencesError> {
        let prefs: RoutingPreferences =
            toml::from_str(value).map_err(|e| E::DeserializeError(e.to_string()))?;
        prefs.validate()?;
        Ok(prefs)
    }

    /// reads preferences from a file, applying any `BAMBAM_STREET__*` environment
    /// overrides on top.
    pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<RoutingPreferences, PreferencesError> {
        let path = filepath.as_ref();
        let config = Config::builder()
            .add_source(File::from(path))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| E::ReadError {
                filepath: path.to_string_lossy().to_string(),
                error: e.to_string(),
            })?;
        let prefs: RoutingPreferences = config
            .try_deserialize()
            .map_err(|e| E::DeserializeError(format!("{}: {e}", path.to_string_lossy())))?;
        prefs.validate()?;
        log::debug!("loaded routing preferences from {}", path.to_string_lossy());
        Ok(prefs)
    }

    /// rental preferences for the vehicle type ridden in the given mode.
    pub fn rental(&self, mode: TraverseMode) -> &VehicleRentalPreferences {
        match mode {
            TraverseMode::Scooter => &self.scooter.rental,
            TraverseMode::Car => &self.car.rental,
            TraverseMode::Bicycle | TraverseMode::Walk => &self.bike.rental,
        }
    }

    pub fn parking(&self, mode: TraverseMode) -> &VehicleParkingPreferences {
        match mode {
            TraverseMode::Car => &self.car.parking,
            _ => &self.bike.parking,
        }
    }

    /// rejects values that would make traversal produce non-finite or negative costs.
    pub fn validate(&self) -> Result<(), PreferencesError> {
        let speeds = [
            ("walk.speed", self.walk.speed),
            ("walk.stairs_time_factor", self.walk.stairs_time_factor),
            ("bike.speed", self.bike.speed),
            ("bike.walking.speed", self.bike.walking.speed),
            ("scooter.speed", self.scooter.speed),
        ];
        for (key, value) in speeds {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(key, format!("must be a positive number, found {value}")));
            }
        }
        let non_negative = [
            ("walk.reluctance", self.walk.reluctance),
            ("walk.stairs_reluctance", self.walk.stairs_reluctance),
            ("walk.escalator_reluctance", self.walk.escalator_reluctance),
            ("bike.reluctance", self.bike.reluctance),
            ("bike.walking.reluctance", self.bike.walking.reluctance),
            ("bike.walking.mount_dismount_time", self.bike.walking.mount_dismount_time),
            ("bike.walking.mount_dismount_cost", self.bike.walking.mount_dismount_cost),
            ("scooter.reluctance", self.scooter.reluctance),
            ("car.reluctance", self.car.reluctance),
            ("street.turn_reluctance", self.street.turn_reluctance),
            ("street.elevator.board_cost", self.street.elevator.board_cost),
            ("street.elevator.board_time", self.street.elevator.board_time),
            ("street.elevator.hop_cost", self.street.elevator.hop_cost),
            ("street.elevator.hop_time", self.street.elevator.hop_time),
            ("wheelchair.inaccessible_street_reluctance", self.wheelchair.inaccessible_street_reluctance),
            ("wheelchair.slope_exceeded_reluctance", self.wheelchair.slope_exceeded_reluctance),
            ("wheelchair.stairs_reluctance", self.wheelchair.stairs_reluctance),
            ("bike.walking.stairs_reluctance", self.bike.walking.stairs_reluctance),
            ("street.elevator.reluctance", self.street.elevator.reluctance),
            ("bike.parking.time", self.bike.parking.time),
            ("bike.parking.cost", self.bike.parking.cost),
            ("car.parking.time", self.car.parking.time),
            ("car.parking.cost", self.car.parking.cost),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(key, format!("must be zero or greater, found {value}")));
            }
        }
        let rentals = [
            ("bike.rental", &self.bike.rental),
            ("scooter.rental", &self.scooter.rental),
            ("car.rental", &self.car.rental),
        ];
        for (section, rental) in rentals {
            let values = [
                ("pickup_time", rental.pickup_time),
                ("pickup_cost", rental.pickup_cost),
                ("drop_off_time", rental.drop_off_time),
                ("drop_off_cost", rental.drop_off_cost),
            ];
            for (field, value) in values {
                if !value.is_finite() || value < 0.0 {
                    return Err(invalid(
                        &format!("{section}.{field}"),
                        format!("must be zero or greater, found {value}"),
                    ));
                }
            }
        }
        let triangles = [
            ("bike.optimize_triangle", &self.bike.optimize_triangle),
            ("scooter.optimize_triangle", &self.scooter.optimize_triangle),
        ];
        for (key, triangle) in triangles {
            let weights = [triangle.time, triangle.slope, triangle.safety];
            let sum: f64 = weights.iter().sum();
            if weights.iter().any(|w| !(0.0..=1.0).contains(w)) || (sum - 1.0).abs() > 0.011 {
                return Err(invalid(
                    key,
                    format!(
                        "weights must be within [0, 1] and sum to 1, found {}, {}, {}",
                        triangle.time, triangle.slope, triangle.safety
                    ),
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.walk.safety_factor) {
            return Err(invalid(
                "walk.safety_factor",
                format!("must be within [0, 1], found {}", self.walk.safety_factor),
            ));
        }
        if !(0.0..=1.0).contains(&self.wheelchair.max_slope) {
            return Err(invalid(
                "wheelchair.max_slope",
                format!("must be within [0, 1], found {}", self.wheelchair.max_slope),
            ));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: String) -> PreferencesError {
    E::InvalidValue {
        key: key.to_string(),
        message,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::preferences::{IntersectionTraversalModel, VehicleRoutingOptimizeType};

    #[test]
    fn test_defaults() {
        let prefs = RoutingPreferences::default();
        assert_eq!(prefs.walk.speed, 1.33);
        assert_eq!(prefs.walk.reluctance, 2.0);
        assert_eq!(prefs.walk.stairs_time_factor, 3.0);
        assert_eq!(prefs.bike.speed, 5.0);
        assert_eq!(prefs.street.turn_reluctance, 1.0);
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn test_from_toml_str_partial() {
        let toml = r#"
            [walk]
            speed = 1.5
            stairs_reluctance = 1.0

            [bike]
            optimize_type = "triangle"
            optimize_triangle = { time = 1.0, slope = 1.0, safety = 1.0 }

            [bike.rental]
            banned_networks = ["tier"]

            [street.intersection_traversal_model]
            type = "constant"
            seconds = 12.0
        "#;
        let prefs = RoutingPreferences::from_toml_str(toml)
            .expect("test invariant failed: preferences should parse");
        assert_eq!(prefs.walk.speed, 1.5);
        assert_eq!(prefs.walk.stairs_reluctance, 1.0);
        assert_eq!(prefs.walk.reluctance, 2.0);
        assert_eq!(prefs.bike.optimize_type, VehicleRoutingOptimizeType::Triangle);
        assert_eq!(prefs.bike.optimize_triangle.safety, 0.34);
        assert!(!prefs.rental(TraverseMode::Bicycle).allows_network("tier"));
        assert!(prefs.rental(TraverseMode::Scooter).allows_network("tier"));
        assert_eq!(
            prefs.street.intersection_traversal_model,
            IntersectionTraversalModel::Constant { seconds: 12.0 }
        );
    }

    #[test]
    fn test_invalid_speed() {
        let result = RoutingPreferences::from_toml_str("[walk]\nspeed = 0.0\n");
        match result {
            Err(PreferencesError::InvalidValue { key, .. }) => assert_eq!(key, "walk.speed"),
            other => panic!("expected invalid walk.speed, found {other:?}"),
        }
    }

    fn invalid_key(toml: &str) -> String {
        match RoutingPreferences::from_toml_str(toml) {
            Err(PreferencesError::InvalidValue { key, .. }) => key,
            other => panic!("expected an invalid value for {toml}, found {other:?}"),
        }
    }

    #[test]
    fn test_negative_costs_rejected() {
        let cases = [
            ("[bike.walking]\nstairs_reluctance = -1.0\n", "bike.walking.stairs_reluctance"),
            ("[street.elevator]\nreluctance = -1.0\n", "street.elevator.reluctance"),
            ("[bike.rental]\npickup_time = -1.0\n", "bike.rental.pickup_time"),
            ("[scooter.rental]\npickup_cost = -1.0\n", "scooter.rental.pickup_cost"),
            ("[car.rental]\ndrop_off_time = -1.0\n", "car.rental.drop_off_time"),
            ("[scooter.rental]\ndrop_off_cost = -1.0\n", "scooter.rental.drop_off_cost"),
            ("[bike.parking]\ntime = -1.0\n", "bike.parking.time"),
            ("[bike.parking]\ncost = -1.0\n", "bike.parking.cost"),
            ("[car.parking]\ntime = -1.0\n", "car.parking.time"),
            ("[car.parking]\ncost = -1.0\n", "car.parking.cost"),
        ];
        for (toml, key) in cases {
            assert_eq!(invalid_key(toml), key);
        }
    }

    #[test]
    fn test_optimize_triangle_range() {
        let mut prefs = RoutingPreferences::default();
        prefs.bike.optimize_triangle.time = 1.5;
        match prefs.validate() {
            Err(PreferencesError::InvalidValue { key, .. }) => {
                assert_eq!(key, "bike.optimize_triangle")
            }
            other => panic!("expected invalid bike.optimize_triangle, found {other:?}"),
        }

        let mut prefs = RoutingPreferences::default();
        prefs.scooter.optimize_triangle.safety = 0.0;
        match prefs.validate() {
            Err(PreferencesError::InvalidValue { key, .. }) => {
                assert_eq!(key, "scooter.optimize_triangle")
            }
            other => panic!("expected invalid scooter.optimize_triangle, found {other:?}"),
        }

        // parsed triangles are normalized and always pass
        let prefs = RoutingPreferences::from_toml_str(
            "[scooter]\noptimize_triangle = { time = 7.0, slope = 0.0, safety = 2.0 }\n",
        )
        .expect("test invariant failed: normalized triangle is valid");
        assert_eq!(prefs.scooter.optimize_triangle.time, 0.78);
    }

    #[test]
    fn test_from_file() {
        let _ = env_logger::builder().is_test(true).try_init();
        let filepath = std::env::temp_dir().join("bambam_street_test_preferences.toml");
        std::fs::write(&filepath, "[car]\nreluctance = 3.0\n")
            .expect("test invariant failed: could not write temp file");
        let prefs = RoutingPreferences::from_file(&filepath)
            .expect("test invariant failed: preferences file should load");
        assert_eq!(prefs.car.reluctance, 3.0);
        assert_eq!(prefs.walk.speed, 1.33);
        let _ = std::fs::remove_file(filepath);
    }
}
