use super::types::Config;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load() -> Config {
        Config::load().unwrap_or_else(|_| Config::default())
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error; the built-in rate schedule applies.
    pub fn load() -> Result<Config, Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();

        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Get the default config file path (~/.config/logprice/config.toml)
    fn get_config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("logprice").join("config.toml")
        } else {
            PathBuf::from(".logprice/config.toml")
        }
    }

    /// Initialize config directory and create default config
    pub fn init() -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            println!("Created config at {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }

        Ok(())
    }

    /// Validate configuration
    pub fn check(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.pricing_table()?;

        if !self.user_price.is_finite() || self.user_price < 0.0 {
            return Err(format!(
                "User price must be finite and non-negative, found {}",
                self.user_price
            )
            .into());
        }

        Ok(())
    }

    /// Print configuration as TOML
    pub fn print(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        println!("{}", content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_check() {
        let config = Config::default();
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_check_rejects_negative_user_price() {
        let config = Config {
            user_price: -5.0,
            ..Config::default()
        };
        assert!(config.check().is_err());
    }

    #[test]
    fn test_check_rejects_broken_tier_table() {
        let mut config = Config::default();
        config.tiers.pop(); // Final tier is now bounded
        assert!(config.check().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let reloaded: Config = toml::from_str(&content).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_load_from_path() {
        let path = std::env::temp_dir().join("logprice_loader_test.toml");
        let config = Config {
            user_price: 12.5,
            ..Config::default()
        };
        fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(loaded.user_price, 12.5);

        let _ = fs::remove_file(&path);
    }
}
