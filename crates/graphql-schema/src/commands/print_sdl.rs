use crate::graphql_files::GraphQLFileArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_schema_tools::print_sdl;
use graphql_schema_tools::ExtractOptions;
use graphql_schema_tools::FieldFilter;
use graphql_schema_tools::NodeFilter;
use graphql_schema_tools::PrintSdlOptions;
use graphql_schema_tools::Schema;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintSdlCmd {
    #[command(flatten)]
    files: GraphQLFileArgs,

    #[arg(
        help="Names of directive definitions to leave out.",
        long,
        value_delimiter = ',',
    )]
    filter_directives: Vec<String>,

    #[arg(
        help="Names of fields to leave out, on every type.",
        long,
        value_delimiter = ',',
    )]
    filter_fields: Vec<String>,

    #[arg(
        help="Names of types to leave out.",
        long,
        value_delimiter = ',',
    )]
    filter_types: Vec<String>,

    #[arg(
        help="Read a single JSON introspection result instead of SDL files.",
        long,
    )]
    introspection: bool,

    #[arg(help="Emit minified output.", long)]
    minify: bool,
}

impl PrintSdlCmd {
    async fn load_schema(&self) -> anyhow::Result<Schema> {
        let file_paths = self.files.discover()?;

        if self.introspection {
            let [path] = file_paths.as_slice() else {
                anyhow::bail!(
                    "--introspection expects exactly one JSON file, found {}",
                    file_paths.len(),
                );
            };
            let json = tokio::fs::read_to_string(path).await
                .with_context(|| format!("reading {}", path.display()))?;
            return Schema::from_introspection_json(&json)
                .with_context(|| format!("loading {}", path.display()));
        }

        let mut builder = Schema::builder();
        for path in &file_paths {
            let sdl = tokio::fs::read_to_string(path).await
                .with_context(|| format!("reading {}", path.display()))?;
            builder = builder.load_str(&sdl)
                .with_context(|| format!("loading {}", path.display()))?;
        }
        Ok(builder.build()?)
    }
}

#[inherent::inherent]
impl RunnableCommand for PrintSdlCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match self.load_schema().await {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to build a schema: {err:#}",
                output_utils::RED_X,
            )),
        };

        let options = PrintSdlOptions {
            extract: ExtractOptions {
                filter_directives: NodeFilter::exclude_names(self.filter_directives),
                filter_fields: FieldFilter::exclude_names(self.filter_fields),
                filter_types: NodeFilter::exclude_names(self.filter_types),
            },
            minify: self.minify,
        };

        match print_sdl(&schema, &options) {
            Ok(sdl) => CommandResult::stdout(format_args!("{}", sdl.trim_end())),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to print the schema: {err}",
                output_utils::RED_X,
            )),
        }
    }
}
