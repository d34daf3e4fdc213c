use crate::{factors::EmissionFactors, profile::Profile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ProfileFile {
    pub schema_version: String,
    pub profiles: Vec<Profile>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FactorFile {
    pub schema_version: String,
    pub factors: EmissionFactors,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DietType;

    #[test]
    fn profile_file_parses_camel_case_inputs() {
        let yaml = r#"
schema_version: "1.0"
profiles:
  - profile_id: HH-01
    name: Commuter
    input:
      carMileage: 150
      householdSize: 2
      dietType: vegetarian
  - profile_id: HH-02
    name: Defaults
"#;
        let file: ProfileFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.profiles.len(), 2);
        let commuter = &file.profiles[0].input;
        assert_eq!(commuter.car_mileage, 150.0);
        assert_eq!(commuter.household_size, 2.0);
        assert_eq!(commuter.car_efficiency, 25.0);
        assert_eq!(commuter.diet_type, DietType::Vegetarian);
        assert_eq!(file.profiles[1].input.household_size, 1.0);
    }
}
