//! Bulk import of statically hosted games found on disk.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::types::PlaybackKind;
use crate::dto::games::ImportResponse;
use crate::forms::games::{GameCandidate, ImportGamesPayload};
use crate::repository::{CategoryReader, GameWriter};

use super::games::add_game;
use super::{ServiceError, ServiceResult};

const THUMBNAIL_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Per-folder outcome of an import run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImportReport {
    pub imported: usize,
    /// One entry per skipped folder or missing asset, prefixed by the folder.
    pub errors: Vec<String>,
}

impl ImportReport {
    pub fn success(&self) -> bool {
        self.imported > 0
    }

    pub fn message(&self) -> String {
        if self.imported == 0 {
            format!("no games imported. errors: {}", self.errors.join("; "))
        } else if self.errors.is_empty() {
            format!("imported {} game(s)", self.imported)
        } else {
            format!(
                "imported {} game(s) with {} error(s): {}",
                self.imported,
                self.errors.len(),
                self.errors.join("; ")
            )
        }
    }
}

impl From<ImportReport> for ImportResponse {
    fn from(report: ImportReport) -> Self {
        Self {
            success: report.success(),
            message: report.message(),
            imported: report.imported,
        }
    }
}

/// Add every game folder under `<public_root>/<directory>` to a category.
///
/// A folder qualifies when it contains `index.html`. Its thumbnail is looked
/// up in `<public_root>/games/thumbnails`; when none exists the game is still
/// added with a `.jpg` placeholder path and the gap is reported. Each folder
/// goes through [`add_game`], so one bad folder never aborts the run.
pub fn import_games_from_directory<R>(
    payload: ImportGamesPayload,
    public_root: &Path,
    repo: &R,
) -> ServiceResult<ImportReport>
where
    R: CategoryReader + GameWriter,
{
    let category = match repo.get_category_by_id(payload.category_id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::UnknownCategory),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Persistence);
        }
    };

    let root = public_root.join(&payload.directory);
    if !root.is_dir() {
        return Err(ServiceError::invalid(format!(
            "directory {} does not exist",
            payload.directory
        )));
    }

    let folders = game_folders(&root).map_err(|e| {
        log::error!("Failed to read {}: {e}", root.display());
        ServiceError::Persistence
    })?;
    if folders.is_empty() {
        return Err(ServiceError::invalid("no games found in directory"));
    }

    let thumbnails_dir = public_root.join("games").join("thumbnails");
    let mut report = ImportReport::default();

    for folder in folders {
        if !root.join(&folder).join("index.html").is_file() {
            report.errors.push(format!("{folder}: missing index.html"));
            continue;
        }

        let thumbnail = find_thumbnail(&thumbnails_dir, &folder).unwrap_or_else(|| {
            let placeholder = format!("/games/thumbnails/{folder}.jpg");
            report
                .errors
                .push(format!("{folder}: missing thumbnail, expected at {placeholder}"));
            placeholder
        });

        let candidate = GameCandidate {
            title: title_from_folder(&folder),
            description: None,
            category_name: category.name.to_string(),
            category_id: category.id.to_string(),
            thumbnail,
            featured: false,
            kind: Some(PlaybackKind::Static),
            iframe_url: None,
            static_path: Some(format!("/{}/{folder}/index.html", payload.directory)),
            tags: vec![category.name.to_string()],
        };

        match add_game(candidate, repo) {
            Ok(_) => report.imported += 1,
            Err(e) => report.errors.push(format!("{folder}: {e}")),
        }
    }

    log::info!(
        "Imported {} game(s) from {} with {} error(s)",
        report.imported,
        payload.directory,
        report.errors.len()
    );
    Ok(report)
}

/// Names of the immediate sub-directories of `root`, sorted.
fn game_folders(root: &Path) -> io::Result<Vec<String>> {
    let mut folders = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            folders.push(name.to_string());
        }
    }
    folders.sort();
    Ok(folders)
}

fn find_thumbnail(thumbnails_dir: &Path, folder: &str) -> Option<String> {
    THUMBNAIL_EXTENSIONS
        .iter()
        .map(|ext| format!("{folder}.{ext}"))
        .find(|file| thumbnails_dir.join(file).is_file())
        .map(|file| format!("/games/thumbnails/{file}"))
}

/// `fruit-ninja` becomes `Fruit Ninja`.
fn title_from_folder(folder: &str) -> String {
    folder
        .split(['-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::{CategoryId, CategoryName, CategorySlug, GameCount};
    use crate::repository::test::TestRepository;

    fn sample_category() -> Category {
        Category {
            id: CategoryId::new(1).unwrap(),
            name: CategoryName::new("休闲").unwrap(),
            description: None,
            count: GameCount::new(0).unwrap(),
            slug: CategorySlug::new("casual").unwrap(),
        }
    }

    fn payload(directory: &str) -> ImportGamesPayload {
        ImportGamesPayload {
            directory: directory.to_string(),
            category_id: CategoryId::new(1).unwrap(),
        }
    }

    fn add_folder(root: &Path, name: &str, with_index: bool) {
        let dir = root.join("arcade").join(name);
        fs::create_dir_all(&dir).unwrap();
        if with_index {
            fs::write(dir.join("index.html"), "<html></html>").unwrap();
        }
    }

    #[test]
    fn converts_folder_names_to_titles() {
        assert_eq!(title_from_folder("fruit-ninja"), "Fruit Ninja");
        assert_eq!(title_from_folder("2048"), "2048");
    }

    #[test]
    fn imports_folders_with_index_files() {
        let public = tempfile::tempdir().unwrap();
        add_folder(public.path(), "fruit-ninja", true);
        add_folder(public.path(), "broken", false);
        let thumbs = public.path().join("games").join("thumbnails");
        fs::create_dir_all(&thumbs).unwrap();
        fs::write(thumbs.join("fruit-ninja.png"), b"png").unwrap();

        let repo = TestRepository::new(vec![sample_category()], vec![]);
        let report = import_games_from_directory(payload("arcade"), public.path(), &repo).unwrap();

        assert_eq!(report.imported, 1);
        assert_eq!(report.errors, vec!["broken: missing index.html".to_string()]);
        assert!(report.success());

        let games = repo.games();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].title.as_str(), "Fruit Ninja");
        assert_eq!(games[0].path.as_str(), "/games/fruit-ninja");
        assert_eq!(games[0].thumbnail.as_str(), "/games/thumbnails/fruit-ninja.png");
        assert_eq!(
            games[0].playback.static_path().map(|p| p.as_str()),
            Some("/arcade/fruit-ninja/index.html")
        );
        assert_eq!(games[0].tags[0].as_str(), "休闲");
    }

    #[test]
    fn missing_thumbnail_is_reported_but_game_is_added() {
        let public = tempfile::tempdir().unwrap();
        add_folder(public.path(), "snake", true);

        let repo = TestRepository::new(vec![sample_category()], vec![]);
        let report = import_games_from_directory(payload("arcade"), public.path(), &repo).unwrap();

        assert_eq!(report.imported, 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(repo.games()[0].thumbnail.as_str(), "/games/thumbnails/snake.jpg");
        assert!(report.message().starts_with("imported 1 game(s) with 1 error(s)"));
    }

    #[test]
    fn unknown_category_and_missing_directory_are_rejected() {
        let public = tempfile::tempdir().unwrap();
        let repo = TestRepository::new(vec![sample_category()], vec![]);

        let mut unknown = payload("arcade");
        unknown.category_id = CategoryId::new(9).unwrap();
        assert_eq!(
            import_games_from_directory(unknown, public.path(), &repo).unwrap_err(),
            ServiceError::UnknownCategory
        );

        assert!(matches!(
            import_games_from_directory(payload("arcade"), public.path(), &repo),
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[test]
    fn nothing_imported_is_a_failure() {
        let public = tempfile::tempdir().unwrap();
        add_folder(public.path(), "empty", false);

        let repo = TestRepository::new(vec![sample_category()], vec![]);
        let report = import_games_from_directory(payload("arcade"), public.path(), &repo).unwrap();

        assert!(!report.success());
        let response = ImportResponse::from(report);
        assert_eq!(response.message, "no games imported. errors: empty: missing index.html");
    }
}
