use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}

impl AppDirs {
    pub fn store_path(&self) -> PathBuf {
        self.app_data_root.join("store.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.app_data_root.join("config.toml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_dirs_derives_concrete_locations_from_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/sessiongate"),
        };

        assert_eq!(dirs.store_path(), PathBuf::from("/tmp/sessiongate/store.json"));
        assert_eq!(dirs.config_path(), PathBuf::from("/tmp/sessiongate/config.toml"));
        assert_eq!(dirs.logs_dir(), PathBuf::from("/tmp/sessiongate/logs"));
    }
}
