use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoyerDirectory(PathBuf);

impl FoyerDirectory {
    pub fn new(p: PathBuf) -> Self {
        FoyerDirectory(p)
    }

    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(FoyerDirectory::new)
    }

    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }

    pub fn init(&self) -> Result<(), std::io::Error> {
        if !self.exists() {
            std::fs::create_dir_all(self.0.as_path())?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
}

/// Get the absolute path to the foyer configuration folder.
///
/// This is a "Foyer" directory in the XDG standard configuration directory for
/// all OSes but Linux-based ones, for which it's `~/.foyer`.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".foyer");

        #[cfg(not(target_os = "linux"))]
        path.push("Foyer");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}
