use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use wanted_list::adapters::outbound::browser::SystemBrowserLauncher;
use wanted_list::adapters::outbound::console::{StderrProgressReporter, TerminalView};
use wanted_list::adapters::outbound::formatters::CardFormatter;
use wanted_list::adapters::outbound::network::{FbiWantedClient, ReqwestTransport};
use wanted_list::application::factories::{PresenterFactory, PresenterType};
use wanted_list::application::use_cases::{OpenOfficialDetailsUseCase, WantedListView};
use wanted_list::cli::Args;
use wanted_list::config::{self, ConfigFile, Settings};
use wanted_list::i18n::Catalog;
use wanted_list::ports::outbound::{ProgressReporter, ViewRenderer, WantedRepository};
use wanted_list::shared::error::ExitCode;
use wanted_list::shared::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse_args();

    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(code.as_i32());
}

async fn run(args: Args) -> Result<ExitCode> {
    let reporter = StderrProgressReporter::new();

    let config = load_config(&args, &reporter)?;
    let settings = Settings::resolve(&args, config.as_ref())?;
    let catalog = Catalog::load(settings.locale)?;

    // Create adapters (Dependency Injection)
    let transport = ReqwestTransport::with_timeout(settings.timeout)?;
    let repository = FbiWantedClient::with_base_url(transport, settings.base_url.as_str());
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.as_deref()));
    let mut renderer = TerminalView::new(
        CardFormatter::new(catalog.clone(), settings.color),
        presenter,
    );
    if !std::io::stderr().is_terminal() {
        renderer = renderer.without_spinner();
    }

    let mut view =
        WantedListView::new(repository, renderer, catalog).with_source(args.list_source());

    if !load(&mut view).await? {
        reporter.report_error("⚠️  Interrupted before the records were loaded.");
        return Ok(ExitCode::Interrupted);
    }

    if view.state().error_message().is_some() {
        return Ok(ExitCode::LoadFailed);
    }

    if let Some(uid) = &args.open {
        let opener = OpenOfficialDetailsUseCase::new(SystemBrowserLauncher::new());
        match view.open_details(uid, &opener) {
            Ok(true) => reporter.report_completion(&format!(
                "🌐 Opened the official details page of {}",
                uid
            )),
            Ok(false) => reporter.report(&format!(
                "ℹ️  Record {} has no official details page.",
                uid
            )),
            Err(e) => reporter.report_error(&format!("⚠️  Warning: {}", e)),
        }
    }

    Ok(ExitCode::Success)
}

/// Runs the view's single load, racing it against Ctrl-C
///
/// # Returns
/// `false` if the user interrupted; the view is then torn down and the
/// pending result is discarded
async fn load<R, V>(view: &mut WantedListView<R, V>) -> Result<bool>
where
    R: WantedRepository,
    V: ViewRenderer,
{
    let Some(ticket) = view.begin_load()? else {
        return Ok(true);
    };

    let outcome = tokio::select! {
        outcome = view.fetch() => Some(outcome),
        _ = tokio::signal::ctrl_c() => None,
    };

    match outcome {
        Some(outcome) => {
            view.settle(ticket, outcome)?;
            Ok(true)
        }
        None => {
            view.deactivate();
            Ok(false)
        }
    }
}

fn load_config(args: &Args, reporter: &impl ProgressReporter) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        let config = config::load_config_from_path(&PathBuf::from(path))?;
        return Ok(Some(config));
    }

    let config = config::discover_config(&std::env::current_dir()?)?;
    if config.is_some() {
        reporter.report(&format!(
            "📄 Auto-discovered config file: {}",
            config::CONFIG_FILENAME
        ));
    }
    Ok(config)
}
