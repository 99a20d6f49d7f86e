//! Resolve a plugin's GitHub repository from its PyPI metadata

use std::fmt;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::store::LocalStore;
use crate::store::types::PypiInfo;

/// Organization and repository identifying a GitHub repo
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GitHubRepoRef {
    pub org: String,
    pub repo: String,
}

impl GitHubRepoRef {
    pub fn new(org: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for GitHubRepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.org, self.repo)
    }
}

pub struct LinkExtractor {
    /// Anchored at the start: a GitHub URL embedded later in the string is ignored
    github_re: Regex,
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkExtractor {
    pub fn new() -> Self {
        Self {
            github_re: Regex::new(r"^https://github\.com/([^/]+)/([^/#@]+)").unwrap(),
        }
    }

    /// Repository of the first candidate URL that points at GitHub
    pub fn extract(&self, info: PypiInfo<'_>) -> Option<GitHubRepoRef> {
        info.candidate_urls().find_map(|url| self.match_url(url))
    }

    /// Looks up `name` in the pypi store and extracts its repository.
    ///
    /// A plugin without readable PyPI info simply has no repository.
    pub fn github_org_repo(&self, store: &LocalStore, name: &str) -> Option<GitHubRepoRef> {
        let package = store
            .pypi_info(name)
            .inspect_err(|e| debug!("No usable pypi info for {}: {}", name, e))
            .ok()?;

        let found = self.extract(PypiInfo::of(&package));
        debug!("GitHub repo for {}: {:?}", name, found);
        found
    }

    fn match_url(&self, url: &str) -> Option<GitHubRepoRef> {
        let caps = self.github_re.captures(url)?;
        let org = &caps[1];
        let repo = &caps[2];
        let repo = repo.strip_suffix(".git").unwrap_or(repo);

        Some(GitHubRepoRef::new(org, repo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn extract_from(info_json: &str) -> Option<GitHubRepoRef> {
        let package: serde_json::Value =
            serde_json::from_str(&format!(r#"{{"info": {}}}"#, info_json)).unwrap();
        LinkExtractor::new().extract(PypiInfo::of(&package))
    }

    #[rstest]
    #[case("https://github.com/acme/widget.git", Some(("acme", "widget")))]
    #[case("https://github.com/acme/widget", Some(("acme", "widget")))]
    #[case("https://github.com/acme/widget/tree/main", Some(("acme", "widget")))]
    #[case("https://github.com/acme/widget#readme", Some(("acme", "widget")))]
    #[case("https://github.com/acme/widget@v1.0", Some(("acme", "widget")))]
    #[case("https://github.com/acme/widget.github.io", Some(("acme", "widget.github.io")))]
    #[case("https://github.com/acme", None)]
    #[case("http://github.com/acme/widget", None)]
    #[case("https://gitlab.com/acme/widget", None)]
    #[case("https://foo.com/r/https://github.com/a/b", None)]
    fn extract_matches_home_page(#[case] url: &str, #[case] expected: Option<(&str, &str)>) {
        let result = extract_from(&serde_json::json!({ "home_page": url }).to_string());

        assert_eq!(
            result,
            expected.map(|(org, repo)| GitHubRepoRef::new(org, repo))
        );
    }

    #[test]
    fn extract_returns_none_for_non_github_urls() {
        let result = extract_from(
            r#"{
                "home_page": "https://napari.org",
                "package_url": "https://pypi.org/project/napari-foo/",
                "project_urls": {"Docs": "https://foo.readthedocs.io"}
            }"#,
        );

        assert_eq!(result, None);
    }

    #[test]
    fn extract_scans_project_urls_after_singular_fields_in_stored_order() {
        let result = extract_from(
            r#"{
                "project_urls": {
                    "Docs": "https://example.com",
                    "Source": "https://github.com/x/y",
                    "Mirror": "https://github.com/mirror/y"
                }
            }"#,
        );

        assert_eq!(result, Some(GitHubRepoRef::new("x", "y")));
    }

    #[test]
    fn extract_prefers_first_match_in_lookup_order() {
        let result = extract_from(
            r#"{
                "home_page": "https://napari.org",
                "project_url": "https://github.com/second/repo",
                "project_urls": {"Source": "https://github.com/third/repo"}
            }"#,
        );

        assert_eq!(result, Some(GitHubRepoRef::new("second", "repo")));
    }

    #[test]
    fn github_org_repo_skips_fields_that_are_not_strings() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("pypi")).unwrap();
        std::fs::write(
            temp_dir.path().join("pypi/odd.json"),
            r#"{"info": {"home_page": 5, "project_urls": {"Source": "https://github.com/acme/odd"}}}"#,
        )
        .unwrap();

        let store = LocalStore::new(temp_dir.path());
        let result = LinkExtractor::new().github_org_repo(&store, "odd");

        assert_eq!(result, Some(GitHubRepoRef::new("acme", "odd")));
    }

    #[test]
    fn repo_ref_displays_as_path() {
        assert_eq!(GitHubRepoRef::new("acme", "widget").to_string(), "acme/widget");
    }
}
