use crate::graphql_files::GraphQLFileArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct MinifyCmd {
    #[command(flatten)]
    files: GraphQLFileArgs,
}

#[inherent::inherent]
impl RunnableCommand for MinifyCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let file_paths = match self.files.discover() {
            Ok(file_paths) => file_paths,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to find GraphQL files: {err:#}",
                output_utils::RED_X,
            )),
        };

        let mut minified = vec![];
        for path in &file_paths {
            match tokio::fs::read_to_string(path).await {
                Ok(source) => minified.push(graphql_schema_tools::minify(&source)),
                Err(err) => return CommandResult::stderr(format_args!(
                    "{} Failed to read {}: {err}",
                    output_utils::RED_X,
                    path.display(),
                )),
            }
        }

        CommandResult::stdout(format_args!("{}", minified.join("\n")))
    }
}
