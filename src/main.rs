use std::fs;
use std::path::Path;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use obs_log_analyzer::cli::Cli;
use obs_log_analyzer::config::{Config, ConfigLoader, FileConfigLoader};
use obs_log_analyzer::output::{
    ColorMode, ErrorOutput, FetchProgress, JsonFormatter, OutputFormat, OutputFormatter,
    RenderTheme, TextFormatter,
};
use obs_log_analyzer::pipeline::AnalysisPipeline;
use obs_log_analyzer::report::Report;
use obs_log_analyzer::rules::Finding;
use obs_log_analyzer::source::{GistFetcher, read_log_file};
use obs_log_analyzer::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let detail = std::error::Error::source(&e).map(ToString::to_string);
            ErrorOutput::new(cli.color.into()).print_error(
                e.error_type(),
                &e.to_string(),
                detail.as_deref(),
                e.suggestion(),
            );
            EXIT_RUNTIME_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn init_tracing(cli: &Cli) {
    // RUST_LOG wins over -v so individual modules can be targeted.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> obs_log_analyzer::Result<()> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    debug!(?config, "Loaded configuration");

    let pipeline = AnalysisPipeline::default().with_scene_survey(config.analysis.scene_survey);
    let findings = collect_findings(cli, &config, &pipeline)?;
    let report = Report::from_findings(findings);

    let output = format_output(cli.format, &report, cli.color.into(), &config)?;
    write_output(cli.output.as_deref(), &output)
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> obs_log_analyzer::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn collect_findings(
    cli: &Cli,
    config: &Config,
    pipeline: &AnalysisPipeline,
) -> obs_log_analyzer::Result<Vec<Finding>> {
    if let Some(path) = cli.file.as_deref() {
        let view = read_log_file(path)?;
        return Ok(pipeline.analyze(&view));
    }

    let url = cli.url.as_deref().unwrap_or_default();
    let progress = FetchProgress::new(cli.quiet);
    let fetcher = GistFetcher::from_config(&config.fetch);
    let result = pipeline.analyze_url(url, &fetcher);
    progress.finish();
    result
}

fn format_output(
    format: OutputFormat,
    report: &Report,
    color: ColorMode,
    config: &Config,
) -> obs_log_analyzer::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(RenderTheme::for_mode(color))
            .with_layout(config.report)
            .format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str) -> obs_log_analyzer::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else {
        print!("{content}");
    }
    Ok(())
}
