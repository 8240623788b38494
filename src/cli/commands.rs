//! Command dispatch: interpret arguments, build, submit, render

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Invocation};
use crate::cli::{output, CliResult};
use crate::config::Settings;
use crate::infrastructure::client::AnnotationClient;
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.completions {
        print_completions(shell);
        return Ok(());
    }
    if cli.config_template {
        output::data(&Settings::template());
        return Ok(());
    }

    let invocation = cli.invocation()?;
    let settings = Settings::load(invocation.config.as_deref())?;
    debug!("settings: {:?}", settings);

    let container = ServiceContainer::new(settings);
    let text = annotate(&container, &invocation)?;
    output::data(&text);
    Ok(())
}

/// Run the pipeline for one invocation and return the rendered output.
#[instrument(level = "debug", skip_all, fields(sources = invocation.sources.len()))]
pub fn annotate(container: &ServiceContainer, invocation: &Invocation) -> CliResult<String> {
    let client = container.annotation_client()?;

    let request = container
        .request_builder(invocation.max_results)
        .build(&invocation.features, &invocation.sources)?;

    let response = client.annotate(&request)?;
    Ok(AnnotationClient::render(&response)?)
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
