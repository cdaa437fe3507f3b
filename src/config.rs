use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "NeemaMed";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sessions expire this long after sign-in.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Get the application data directory
/// ~/NeemaMed/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("NeemaMed")
}

/// Path of the record store's SQLite file.
pub fn store_path() -> PathBuf {
    app_data_dir().join("neemamed.db")
}

pub fn default_log_filter() -> &'static str {
    "neemamed=info"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("NeemaMed"));
    }

    #[test]
    fn store_path_under_app_data() {
        let path = store_path();
        assert!(path.starts_with(app_data_dir()));
        assert!(path.ends_with("neemamed.db"));
    }

    #[test]
    fn session_ttl_is_one_day() {
        assert_eq!(SESSION_TTL_HOURS, 24);
    }
}
