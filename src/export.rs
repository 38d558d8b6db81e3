//! JSON snapshot of the site content.
//!
//! The frontend is a static site; it consumes the content as JSON files
//! produced at deploy time. This is the whole write path of the crate, and
//! it runs exactly once per deploy.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{DeveloperInfo, Project};

pub const PROJECTS_FILE: &str = "projects.json";
pub const DEVELOPER_FILE: &str = "developer.json";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Written alongside the content so a deploy can be identified later.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub generated_at: String,
    pub project_count: usize,
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}

/// Write `projects.json`, `developer.json` and `manifest.json` into `dir`,
/// creating the directory if needed.
pub fn write_site_data(
    dir: &Path,
    projects: &[Project],
    developer: &DeveloperInfo,
) -> Result<Manifest> {
    fs::create_dir_all(dir)?;
    write_json(&dir.join(PROJECTS_FILE), &projects)?;
    write_json(&dir.join(DEVELOPER_FILE), developer)?;
    let manifest = Manifest {
        generated_at: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        project_count: projects.len(),
    };
    write_json(&dir.join(MANIFEST_FILE), &manifest)?;
    Ok(manifest)
}

/// Read a written `projects.json` back. Used to check that a snapshot
/// round-trips before it ships.
pub fn load_projects(path: &Path) -> Result<Vec<Project>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let projects = serde_json::from_reader(reader)?;
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data;
    use tempfile::TempDir;

    #[test]
    fn snapshot_round_trips() {
        let dir = TempDir::new().expect("temp dir");
        let projects = data::projects();
        let developer = data::developer_info();

        let manifest =
            write_site_data(dir.path(), &projects, &developer).expect("snapshot written");
        assert_eq!(manifest.project_count, projects.len());

        let reloaded = load_projects(&dir.path().join(PROJECTS_FILE)).expect("snapshot read");
        assert_eq!(reloaded.len(), projects.len());
        for (written, read) in projects.iter().zip(&reloaded) {
            assert_eq!(written.slug, read.slug);
            assert_eq!(written.category, read.category);
        }
    }

    #[test]
    fn snapshot_uses_frontend_field_names() {
        let dir = TempDir::new().expect("temp dir");
        let projects = data::projects();
        let developer = data::developer_info();
        write_site_data(dir.path(), &projects, &developer).expect("snapshot written");

        let raw = std::fs::read_to_string(dir.path().join(PROJECTS_FILE)).expect("read raw json");
        assert!(raw.contains("\"coverImage\""));
        assert!(raw.contains("\"techStack\""));
        assert!(raw.contains("\"aspectRatio\""));
        assert!(!raw.contains("\"cover_image\""));

        let raw = std::fs::read_to_string(dir.path().join(DEVELOPER_FILE)).expect("read raw json");
        assert!(raw.contains("\"heroIntroduction\""));
        assert!(raw.contains("\"socialLinks\""));
    }
}
