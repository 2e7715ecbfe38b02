use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ReportError;
use crate::paths::ReportPaths;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateTier {
    Local,
    Package,
    Legacy,
}

impl fmt::Display for TemplateTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TemplateTier::Local => "ローカル",
            TemplateTier::Package => "パッケージ",
            TemplateTier::Legacy => "レガシー",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateReference {
    pub path: PathBuf,
    pub tier: TemplateTier,
}

/// Picks the first existing template: local override, packaged default, then
/// the legacy location.
pub fn find_template(paths: &ReportPaths) -> Result<TemplateReference, ReportError> {
    let candidates: [(&Path, TemplateTier); 3] = [
        (&paths.local_template, TemplateTier::Local),
        (&paths.package_template, TemplateTier::Package),
        (&paths.legacy_template, TemplateTier::Legacy),
    ];

    candidates
        .into_iter()
        .find(|(path, _)| path.is_file())
        .map(|(path, tier)| TemplateReference {
            path: path.to_path_buf(),
            tier,
        })
        .ok_or_else(|| ReportError::TemplateNotFound {
            local: paths.local_template.clone(),
            package: paths.package_template.clone(),
            legacy: paths.legacy_template.clone(),
        })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<html></html>").unwrap();
    }

    fn setup() -> (TempDir, ReportPaths) {
        let root = TempDir::new().unwrap();
        let paths = ReportPaths::new(&root.path().join("work"), &root.path().join("install"));
        (root, paths)
    }

    #[test]
    fn local_template_wins_over_package() {
        let (_root, paths) = setup();
        touch(&paths.local_template);
        touch(&paths.package_template);
        touch(&paths.legacy_template);

        let found = find_template(&paths).unwrap();
        assert_eq!(found.tier, TemplateTier::Local);
        assert_eq!(found.path, paths.local_template);
    }

    #[test]
    fn package_template_wins_over_legacy() {
        let (_root, paths) = setup();
        touch(&paths.package_template);
        touch(&paths.legacy_template);

        assert_eq!(find_template(&paths).unwrap().tier, TemplateTier::Package);
    }

    #[test]
    fn legacy_template_is_last_resort() {
        let (_root, paths) = setup();
        touch(&paths.legacy_template);

        let found = find_template(&paths).unwrap();
        assert_eq!(found.tier, TemplateTier::Legacy);
        assert_eq!(found.path, paths.legacy_template);
    }

    #[test]
    fn missing_templates_list_every_searched_path() {
        let (_root, paths) = setup();

        let err = find_template(&paths).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, ReportError::TemplateNotFound { .. }));
        assert!(message.contains(&paths.local_template.display().to_string()));
        assert!(message.contains(&paths.package_template.display().to_string()));
        assert!(message.contains(&paths.legacy_template.display().to_string()));
        assert!(message.contains("cp "));
    }
}
