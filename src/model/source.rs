use std::path::{Path, PathBuf};

/// On-disk serialization format of an ontology file, inferred from the
/// file extension. Only RDF/XML is currently recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OntologyFormat {
    RdfXml,
}

impl OntologyFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "owl" | "rdf" | "rdfs" => Some(OntologyFormat::RdfXml),
            _ => None,
        }
    }
}

/// One candidate ontology file discovered by the startup directory scan.
#[derive(Debug, Clone)]
pub struct OntologySource {
    /// Registry key, derived from the file stem
    pub name: String,
    pub path: PathBuf,
    pub format: OntologyFormat,
}

impl OntologySource {
    /// Builds a source from a directory entry. Returns `None` for paths
    /// that are not regular files, have no recognized extension, or have
    /// a non-UTF-8 file name.
    pub fn from_path(path: &Path) -> Option<Self> {
        if !path.is_file() {
            return None;
        }
        let format = OntologyFormat::from_extension(path.extension()?.to_str()?)?;
        let name = path.file_stem()?.to_str()?.to_string();
        Some(Self {
            name,
            path: path.to_path_buf(),
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn recognizes_owl_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.owl");
        fs::write(&path, "<rdf:RDF/>").unwrap();

        let source = OntologySource::from_path(&path).unwrap();
        assert_eq!(source.name, "animals");
        assert_eq!(source.format, OntologyFormat::RdfXml);
    }

    #[test]
    fn skips_unrecognized_extensions_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("notes.txt");
        fs::write(&txt, "not an ontology").unwrap();
        let sub = dir.path().join("nested.owl");
        fs::create_dir(&sub).unwrap();

        assert!(OntologySource::from_path(&txt).is_none());
        assert!(OntologySource::from_path(&sub).is_none());
    }
}
