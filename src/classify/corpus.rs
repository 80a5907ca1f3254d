// Keyword corpora: the per-category term lists used for matching.
//
// Each category has two files on disk, a "common" list and a "unique" list,
// one term or phrase per line. They're always matched together, so we union
// them at load time. The normalization denominator is the sum of the two
// list sizes, not the union size: a term listed in both files still counts
// twice there.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::category::Category;

/// Read a newline-delimited term file into a lowercase set.
///
/// No validation beyond that: duplicates collapse, empty lines are kept
/// as the empty string (they can never match a token).
pub fn load_terms(path: &Path) -> Result<HashSet<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file {}", path.display()))?;

    let terms: HashSet<String> = contents.lines().map(|line| line.to_lowercase()).collect();
    debug!(path = %path.display(), terms = terms.len(), "Loaded corpus file");
    Ok(terms)
}

/// Locations of the eight corpus files, indexed by category.
#[derive(Debug, Clone)]
pub struct CorpusPaths {
    /// (common, unique) per category, in `Category::PRIORITY` order
    pub files: [(PathBuf, PathBuf); 4],
}

impl CorpusPaths {
    /// The conventional layout: `<stem> terms.txt` and `<stem> unique terms.txt`
    /// inside a single directory.
    pub fn in_dir(dir: &Path) -> Self {
        let files = Category::PRIORITY.map(|category| {
            let stem = category.corpus_stem();
            (
                dir.join(format!("{stem} terms.txt")),
                dir.join(format!("{stem} unique terms.txt")),
            )
        });
        Self { files }
    }

    pub fn for_category(&self, category: Category) -> (&Path, &Path) {
        let (common, unique) = &self.files[category.index()];
        (common.as_path(), unique.as_path())
    }
}

/// The matchable terms of one category.
#[derive(Debug, Clone)]
pub struct CategoryTerms {
    terms: HashSet<String>,
    total: usize,
}

impl CategoryTerms {
    /// Union the two lists; the denominator keeps both sizes.
    pub fn new(common: HashSet<String>, unique: HashSet<String>) -> Self {
        let total = common.len() + unique.len();
        let mut terms = common;
        terms.extend(unique);
        Self { terms, total }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// `|common| + |unique|`
    pub fn total(&self) -> usize {
        self.total
    }
}

/// All four categories' terms. Immutable once built; share it by reference
/// (or `Arc`) across threads.
#[derive(Debug, Clone)]
pub struct Corpora {
    categories: [CategoryTerms; 4],
}

impl Corpora {
    /// Load every corpus file. Any missing file is fatal.
    pub fn load(paths: &CorpusPaths) -> Result<Self> {
        let mut sets = Vec::with_capacity(4);
        for category in Category::PRIORITY {
            let (common_path, unique_path) = paths.for_category(category);
            let common = load_terms(common_path)?;
            let unique = load_terms(unique_path)?;
            sets.push((common, unique));
        }

        let corpora = Self::from_sets(sets)?;
        for category in Category::PRIORITY {
            info!(
                category = %category,
                terms = corpora.terms(category).total(),
                "Corpus loaded"
            );
        }
        Ok(corpora)
    }

    /// Build from in-memory term lists, given as (common, unique) pairs in
    /// priority order: Terrorism, Protest, NaturalDisasters, PositiveUplifting.
    pub fn from_term_sets<I, S>(sets: [(I, I); 4]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sets = sets.into_iter().map(|(common, unique)| {
            (
                common
                    .into_iter()
                    .map(|t| t.as_ref().to_lowercase())
                    .collect::<HashSet<String>>(),
                unique
                    .into_iter()
                    .map(|t| t.as_ref().to_lowercase())
                    .collect::<HashSet<String>>(),
            )
        });
        Self::from_sets(sets.collect())
    }

    fn from_sets(sets: Vec<(HashSet<String>, HashSet<String>)>) -> Result<Self> {
        let mut categories = Vec::with_capacity(4);
        for (category, (common, unique)) in Category::PRIORITY.into_iter().zip(sets) {
            let terms = CategoryTerms::new(common, unique);
            if terms.total() == 0 {
                anyhow::bail!(
                    "Corpus for {category} is empty: every category needs at least one term"
                );
            }
            categories.push(terms);
        }

        let categories: [CategoryTerms; 4] = categories
            .try_into()
            .map_err(|_| anyhow::anyhow!("Expected term lists for exactly 4 categories"))?;
        Ok(Self { categories })
    }

    pub fn terms(&self, category: Category) -> &CategoryTerms {
        &self.categories[category.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut f = std::fs::File::create(dir.join(name)).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_terms_lowercases_and_dedups() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "t.txt", "Bomb\nbomb\nSuicide Attack\n");
        let terms = load_terms(&dir.path().join("t.txt")).unwrap();
        assert_eq!(terms.len(), 2);
        assert!(terms.contains("bomb"));
        assert!(terms.contains("suicide attack"));
    }

    #[test]
    fn test_load_terms_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_terms(&dir.path().join("nope.txt")).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_corpus_paths_naming() {
        let paths = CorpusPaths::in_dir(Path::new("Corpus"));
        let (common, unique) = paths.for_category(Category::NaturalDisasters);
        assert_eq!(common, Path::new("Corpus/natural disaster terms.txt"));
        assert_eq!(unique, Path::new("Corpus/natural disaster unique terms.txt"));
        let (common, _) = paths.for_category(Category::Terrorism);
        assert_eq!(common, Path::new("Corpus/Terrorism terms.txt"));
    }

    #[test]
    fn test_load_all_eight_files() {
        let dir = tempfile::tempdir().unwrap();
        for category in Category::PRIORITY {
            let stem = category.corpus_stem();
            write_file(dir.path(), &format!("{stem} terms.txt"), "alpha\nbeta\n");
            write_file(dir.path(), &format!("{stem} unique terms.txt"), "gamma\n");
        }
        let corpora = Corpora::load(&CorpusPaths::in_dir(dir.path())).unwrap();
        assert_eq!(corpora.terms(Category::Protest).total(), 3);
        assert!(corpora.terms(Category::Protest).contains("gamma"));
    }

    #[test]
    fn test_load_fails_when_one_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        for category in Category::PRIORITY {
            let stem = category.corpus_stem();
            write_file(dir.path(), &format!("{stem} terms.txt"), "alpha\n");
        }
        assert!(Corpora::load(&CorpusPaths::in_dir(dir.path())).is_err());
    }

    #[test]
    fn test_overlapping_terms_count_twice_in_total() {
        let terms = CategoryTerms::new(
            ["riot".to_string()].into(),
            ["riot".to_string(), "march".to_string()].into(),
        );
        assert_eq!(terms.total(), 3);
        assert!(terms.contains("riot"));
        assert!(terms.contains("march"));
    }

    #[test]
    fn test_empty_category_is_rejected() {
        let empty: Vec<&str> = vec![];
        let result = Corpora::from_term_sets([
            (vec!["bomb"], empty.clone()),
            (empty.clone(), empty.clone()),
            (vec!["flood"], empty.clone()),
            (vec!["hope"], empty.clone()),
        ]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Protest"));
    }
}
