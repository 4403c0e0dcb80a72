use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Arguments shared by every command that reads GraphQL files.
#[derive(Debug, clap::Args)]
pub(crate) struct GraphQLFileArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl GraphQLFileArgs {
    /// Finds all GraphQL files recursively located at or under each path,
    /// in a stable (sorted) order.
    pub(crate) fn discover(&self) -> anyhow::Result<Vec<PathBuf>> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry?;
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }
                if has_graphql_ext(path, &graphql_file_exts) {
                    log::trace!("Found file at {path:#?}.");
                    file_paths.push(path.to_path_buf());
                }
            }
        }

        // A single file path passed explicitly is read as GraphQL even if its
        // extension doesn't match `--graphql-file-exts`.
        if file_paths.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file() {
            log::warn!(
                "Proceeding with {only_path:#?} even though it doesn't match \
                any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(only_path.to_path_buf());
        }

        log::debug!("Found {} GraphQL files.", file_paths.len());
        Ok(file_paths)
    }
}

fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| graphql_file_exts.contains(ext.to_string_lossy().as_ref()))
        .unwrap_or(false)
}
