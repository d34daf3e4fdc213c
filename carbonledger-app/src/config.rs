use anyhow::{bail, Context, Result};
use carbonledger_core::factors::load_factor_file;
use carbonledger_schemas::{
    factors::EmissionFactors, file_formats::ProfileFile, profile::Profile,
};
use std::{collections::HashMap, fs, path::Path};

/// Profiles loaded from YAML, keyed by `profile_id`.
pub struct ProfileLibrary {
    pub profiles: HashMap<String, Profile>,
}

impl ProfileLibrary {
    /// Loads every profile file in the specified directory.
    pub fn load(base_path: &str) -> Result<Self> {
        eprintln!("[Config] Loading profiles from '{}'...", base_path);

        let profiles = load_yaml_files_into_map(
            Path::new(base_path),
            |file: ProfileFile| file.profiles,
            |item: &Profile| item.profile_id.clone(),
        )?;

        eprintln!("[Config] Loaded {} profile(s).", profiles.len());
        Ok(Self { profiles })
    }

    /// Loads the profiles of a single file.
    pub fn load_file(path: &str) -> Result<Self> {
        let file: ProfileFile = read_yaml(Path::new(path))?;
        let mut profiles = HashMap::new();
        for profile in file.profiles {
            insert_unique(&mut profiles, profile.profile_id.clone(), profile, Path::new(path))?;
        }
        Ok(Self { profiles })
    }

    /// Profiles ordered by id, so reports are stable between runs.
    pub fn sorted(&self) -> Vec<Profile> {
        let mut profiles: Vec<Profile> = self.profiles.values().cloned().collect();
        profiles.sort_by(|a, b| a.profile_id.cmp(&b.profile_id));
        profiles
    }
}

/// The default table, or the defaults overridden by `path`.
pub fn load_factors(path: Option<&str>) -> Result<EmissionFactors> {
    match path {
        Some(path) => {
            eprintln!("[Config] Loading emission factors from '{}'...", path);
            Ok(load_factor_file(path)?)
        }
        None => Ok(EmissionFactors::default()),
    }
}

fn read_yaml<F>(path: &Path) -> Result<F>
where
    F: for<'de> serde::Deserialize<'de>,
{
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    serde_yaml::from_str(&content).with_context(|| format!("Failed to parse YAML from {:?}", path))
}

/// Ids must be unique across every loaded file.
fn insert_unique<T>(map: &mut HashMap<String, T>, key: String, item: T, source: &Path) -> Result<()> {
    if map.contains_key(&key) {
        bail!("Duplicate id '{}' found in {:?}", key, source);
    }
    map.insert(key, item);
    Ok(())
}

/// Generic helper to load all YAML files in a directory into a HashMap.
fn load_yaml_files_into_map<P, F, E, T, K>(
    dir_path: P,
    extract_vec: E,
    get_key: K,
) -> Result<HashMap<String, T>>
where
    P: AsRef<Path>,
    F: for<'de> serde::Deserialize<'de>, // The file wrapper struct (e.g., ProfileFile)
    E: Fn(F) -> Vec<T>,                  // A closure to extract the Vec<T> from the wrapper
    K: Fn(&T) -> String,                 // A closure to get the key for the map from an item T
{
    let mut map = HashMap::new();
    for entry in fs::read_dir(dir_path.as_ref())
        .with_context(|| format!("Failed to read directory: {:?}", dir_path.as_ref()))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
            let file_wrapper: F = read_yaml(&path)?;
            for item in extract_vec(file_wrapper) {
                insert_unique(&mut map, get_key(&item), item, &path)?;
            }
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("carbonledger-app-{}", std::process::id()))
            .join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn loads_yaml_profiles_and_skips_other_files() {
        let dir = scratch_dir("profiles");
        fs::write(
            dir.join("a.yaml"),
            "schema_version: \"1.0\"\nprofiles:\n  - profile_id: B\n    name: Second\n  - profile_id: A\n    name: First\n    input:\n      carMileage: 80\n",
        )
        .unwrap();
        fs::write(dir.join("notes.txt"), "not a profile").unwrap();

        let library = ProfileLibrary::load(dir.to_str().unwrap()).unwrap();
        let ids: Vec<String> = library.sorted().into_iter().map(|p| p.profile_id).collect();
        assert_eq!(ids, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(library.profiles["A"].input.car_mileage, 80.0);
    }

    #[test]
    fn duplicate_profile_ids_are_rejected() {
        let dir = scratch_dir("duplicates");
        let profile = "schema_version: \"1.0\"\nprofiles:\n  - profile_id: HH-01\n    name: One\n";
        fs::write(dir.join("a.yaml"), profile).unwrap();
        fs::write(dir.join("b.yml"), profile).unwrap();

        let err = ProfileLibrary::load(dir.to_str().unwrap()).err().unwrap();
        assert!(err.to_string().contains("Duplicate id 'HH-01'"), "{err}");

        let single = dir.join("a.yaml");
        let twice = format!("{}  - profile_id: HH-01\n    name: Again\n", profile);
        fs::write(&single, twice).unwrap();
        assert!(ProfileLibrary::load_file(single.to_str().unwrap()).is_err());
    }

    #[test]
    fn factor_file_overrides_defaults() {
        let dir = scratch_dir("factors");
        let path = dir.join("factors.yaml");
        fs::write(&path, "schema_version: \"1.0\"\nfactors:\n  local_food_divisor: 100\n").unwrap();

        let factors = load_factors(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(factors.local_food_divisor, 100.0);
        assert_eq!(factors.lbs_per_metric_ton, 2204.62);
        assert_eq!(load_factors(None).unwrap(), EmissionFactors::default());
    }
}
