use crate::graphql_files::GraphQLFileArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_schema_tools::normalize_bytes;
use graphql_schema_tools::NormalizeOptions;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct NormalizeCmd {
    #[arg(
        help="Exit with an error if any file is not already in canonical \
             form. Nothing is printed or written.",
        long,
        conflicts_with="write",
    )]
    check: bool,

    #[command(flatten)]
    files: GraphQLFileArgs,

    #[arg(help="Emit minified output.", long)]
    minify: bool,

    #[arg(
        help="Rewrite each file in place instead of printing the result.",
        long,
    )]
    write: bool,
}

enum FileOutcome {
    Normalized { path: PathBuf, original: String, normalized: String },
    Failed { path: PathBuf, message: String },
}

#[inherent::inherent]
impl RunnableCommand for NormalizeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let file_paths = match self.files.discover() {
            Ok(file_paths) => file_paths,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to find GraphQL files: {err:#}",
                output_utils::RED_X,
            )),
        };

        let options = NormalizeOptions {
            minify: self.minify,
            ..NormalizeOptions::default()
        };

        let mut outcomes = vec![];
        for path in file_paths {
            outcomes.push(normalize_file(path, &options).await);
        }

        let mut errors = vec![];
        let mut stdout = vec![];
        let mut num_unchanged = 0;
        let multiple_files = outcomes.len() > 1;
        for outcome in outcomes {
            match outcome {
                FileOutcome::Failed { path, message } =>
                    errors.push(format!("{}: {message}", path.display())),

                FileOutcome::Normalized { path, original, normalized } => {
                    if original == normalized {
                        num_unchanged += 1;
                    }

                    if self.check {
                        if original != normalized {
                            errors.push(format!(
                                "{}: not in canonical form",
                                path.display(),
                            ));
                        }
                    } else if self.write {
                        if original == normalized {
                            continue;
                        }
                        match tokio::fs::write(&path, &normalized).await {
                            Ok(()) => log::debug!("Wrote {path:#?}."),
                            Err(err) => errors.push(format!("{}: {err}", path.display())),
                        }
                    } else if multiple_files {
                        stdout.push(format!("# {}\n{normalized}", path.display()));
                    } else {
                        stdout.push(normalized);
                    }
                },
            }
        }

        let stdout = if stdout.is_empty() { None } else { Some(stdout.join("\n")) };
        if !errors.is_empty() {
            return CommandResult::failure(stdout, format!(
                "{} {} file(s) failed:\n  * {}",
                output_utils::RED_X,
                errors.len(),
                errors.join("\n  * "),
            ));
        }

        if self.check || self.write {
            log::info!(
                "{} {num_unchanged} file(s) already in canonical form.",
                output_utils::GREEN_CHECK,
            );
        }
        match stdout {
            Some(stdout) => CommandResult::stdout(format_args!("{}", stdout.trim_end())),
            None => CommandResult::success(),
        }
    }
}

async fn normalize_file(path: PathBuf, options: &NormalizeOptions) -> FileOutcome {
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(err) => return FileOutcome::Failed { path, message: err.to_string() },
    };

    match normalize_bytes(&bytes, options) {
        Err(err) => FileOutcome::Failed { path, message: err.to_string() },
        Ok(result) => match result.error {
            Some(err) => FileOutcome::Failed { path, message: err.to_string() },
            None => FileOutcome::Normalized {
                original: String::from_utf8_lossy(&bytes).into_owned(),
                normalized: result.source,
                path,
            },
        },
    }
}
