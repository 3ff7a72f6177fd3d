use std::env;
use std::path::PathBuf;

/// Resolve the application data directory (holds token.json and config.toml).
///
/// Order: `--data-dir` flag, `VKDECK_DIR`, `$XDG_DATA_HOME/vkdeck`,
/// `$HOME/.local/share/vkdeck`, then `.vkdeck` in the working directory.
pub fn data_dir(flag: Option<PathBuf>) -> PathBuf {
    resolve(
        flag,
        env::var_os("VKDECK_DIR").map(PathBuf::from),
        env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        env::var_os("HOME").map(PathBuf::from),
    )
}

fn resolve(
    flag: Option<PathBuf>,
    env_dir: Option<PathBuf>,
    xdg_data_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Some(dir) = env_dir {
        return dir;
    }
    if let Some(xdg) = xdg_data_home {
        return xdg.join("vkdeck");
    }
    if let Some(home) = home {
        return home.join(".local/share/vkdeck");
    }
    PathBuf::from(".vkdeck")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_everything() {
        let dir = resolve(
            Some("/custom".into()),
            Some("/env".into()),
            Some("/xdg".into()),
            Some("/home/u".into()),
        );
        assert_eq!(dir, PathBuf::from("/custom"));
    }

    #[test]
    fn env_dir_is_used_verbatim() {
        let dir = resolve(None, Some("/env/vk".into()), Some("/xdg".into()), None);
        assert_eq!(dir, PathBuf::from("/env/vk"));
    }

    #[test]
    fn xdg_gets_app_suffix() {
        let dir = resolve(None, None, Some("/xdg/data".into()), Some("/home/u".into()));
        assert_eq!(dir, PathBuf::from("/xdg/data/vkdeck"));
    }

    #[test]
    fn home_fallback() {
        let dir = resolve(None, None, None, Some("/home/u".into()));
        assert_eq!(dir, PathBuf::from("/home/u/.local/share/vkdeck"));
    }

    #[test]
    fn last_resort_is_relative() {
        assert_eq!(resolve(None, None, None, None), PathBuf::from(".vkdeck"));
    }
}
