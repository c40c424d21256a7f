use std::fs::File;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use url::Url;

use crate::controller::DEFAULT_PAGE_SIZE;

#[derive(Deserialize)]
struct PageSize(usize);
impl Default for PageSize {
    fn default() -> Self {
        PageSize(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Deserialize)]
struct Project {
    /// The base URL of the deployed blog. The API resources live under
    /// `{site_root}/app/api/`.
    pub site_root: Url,

    #[serde(default)]
    pub page_size: PageSize,
}

/// Resolved configuration for the front end.
pub struct Config {
    pub site_root: Url,
    pub page_size: usize,
}

impl Config {
    /// Looks for `blogview.yaml` in `dir` or the nearest parent directory
    /// that has one.
    pub fn from_directory(dir: &Path) -> Result<Config> {
        let path = dir.join("blogview.yaml");
        if path.exists() {
            match Config::from_project_file(&path) {
                Ok(config) => Ok(config),
                Err(e) => Err(anyhow!("Loading configuration: {:?}", e)),
            }
        } else {
            match dir.parent() {
                Some(parent) => Config::from_directory(parent),
                None => Err(anyhow!(
                    "Could not find `blogview.yaml` in any parent directory"
                )),
            }
        }
    }

    /// Loads configuration from a specific project file.
    pub fn from_project_file(path: &Path) -> Result<Config> {
        let project: Project = serde_yaml::from_reader(open(path, "project")?)?;
        Ok(Config {
            site_root: project.site_root,
            page_size: project.page_size.0,
        })
    }
}

fn open(path: &Path, kind: &str) -> Result<File> {
    match File::open(path) {
        Err(e) => Err(anyhow!("Opening {} file `{}`: {}", kind, path.display(), e)),
        Ok(file) => Ok(file),
    }
}
