//! Content loaders for reading flavour data from TOML files.
//!
//! The file mirrors [`ContentPack`]; every table and key is optional and
//! missing parts keep their built-in defaults:
//!
//! ```toml
//! [names]
//! first_names = ["Luna", "Nova"]
//! surnames = ["Starweaver"]
//!
//! [phrases]
//! hungry = ["Food please!"]
//! ```

use std::path::Path;

use anyhow::Context;

use crate::ContentPack;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))
}

/// Loader for [`ContentPack`] TOML files.
pub struct ContentLoader;

impl ContentLoader {
    /// Load a content pack from a TOML file.
    pub fn load(path: &Path) -> LoadResult<ContentPack> {
        let content = read_file(path)?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse content file {}", path.display()))
    }

    /// Parse a content pack from TOML text.
    pub fn from_toml_str(content: &str) -> LoadResult<ContentPack> {
        let pack: ContentPack = toml::from_str(content).context("Invalid content TOML")?;
        Ok(pack)
    }

    /// Load `path` if given, otherwise fall back to the built-in pack.
    pub fn load_or_default(path: Option<&Path>) -> LoadResult<ContentPack> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(ContentPack::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pet_core::Mood;

    use super::*;
    use crate::PhraseBook;

    #[test]
    fn partial_file_keeps_defaults() {
        let pack = ContentLoader::from_toml_str(
            r#"
            [names]
            surnames = ["Moonwhisker"]

            [phrases]
            hungry = ["Feed me!"]
            "#,
        )
        .expect("valid toml");

        assert_eq!(pack.names.surnames, vec!["Moonwhisker".to_string()]);
        assert_eq!(pack.names.first_names.len(), 16);
        assert_eq!(pack.phrases.pick(Mood::Hungry, 4), Some("Feed me!"));
        assert_eq!(pack.phrases.sad, PhraseBook::default().sad);
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[names]\nfirst_names = [\"Mochi\"]").expect("write");

        let pack = ContentLoader::load(file.path()).expect("load");
        assert_eq!(pack.names.first_names, vec!["Mochi".to_string()]);
    }

    #[test]
    fn errors_name_the_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[names\nbroken").expect("write");

        let err = ContentLoader::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains(&file.path().display().to_string()));

        let missing = ContentLoader::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(format!("{missing}").starts_with("Failed to read file"));
    }

    #[test]
    fn bundled_sample_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/content.toml");
        let pack = ContentLoader::load(&path).expect("bundled sample parses");
        assert_eq!(pack, ContentPack::default());
    }

    #[test]
    fn no_path_means_defaults() {
        let pack = ContentLoader::load_or_default(None).expect("defaults");
        assert_eq!(pack, ContentPack::default());
    }
}
