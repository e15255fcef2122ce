use clap::Parser;
use crossterm::event::EventStream;
use std::io;

use quad_looper::camera::CameraCapture;
use quad_looper::cli::{self, Args, Command};
use quad_looper::config::Config;
use quad_looper::error::AppError;
use quad_looper::event_loop::{self, ExitReason};
use quad_looper::logging;
use quad_looper::renderer::Renderer;
use quad_looper::router::StreamId;
use quad_looper::session::Session;
use quad_looper::settings::RunSettings;
use quad_looper::terminal::TerminalGuard;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    match &args.command {
        Some(Command::ListCameras) => {
            logging::init_stderr_logging(&logging::filter_directive(args.verbose, "warn"))?;
            cli::list_cameras()?;
            return Ok(());
        }
        Some(Command::Config { action }) => {
            return cli::handle_config_action(action, &args);
        }
        None => {}
    }

    let config = Config::load(args.config.as_deref())?;
    let settings = RunSettings::resolve(&args, &config)?;
    logging::init_file_logging(&settings.log_file, &settings.log_filter)?;
    log::info!("Starting quad-looper v{}", env!("CARGO_PKG_VERSION"));

    let mut camera = CameraCapture::open(settings.camera.clone())?;
    camera.start()?;

    event_loop::install_signal_handler()?;

    let mut session = Session::new(settings.session);
    let result = run_ui(&mut session, &camera, &settings);
    camera.stop();
    let reason = result?;
    log::info!("Main loop ended: {:?}", reason);

    let lens = session.router().buffer_lens();
    let counts = StreamId::ALL
        .iter()
        .map(|id| format!("{}:{}", id, lens[id.index()]))
        .collect::<Vec<_>>()
        .join(" ");
    println!("Recorded frames per stream: {}", counts);

    match reason {
        ExitReason::CameraStopped => Err(AppError::CaptureStopped),
        ExitReason::UserQuit | ExitReason::Signal | ExitReason::InputClosed => Ok(()),
    }
}

/// Draw the UI on the alternate screen until the main loop ends.
fn run_ui(
    session: &mut Session,
    camera: &CameraCapture,
    settings: &RunSettings,
) -> Result<ExitReason, AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut guard = TerminalGuard::enter()?;
    let (cols, rows) = crossterm::terminal::size()?;
    let mut renderer = Renderer::new(io::stdout(), cols, rows, settings.display);

    let result = runtime.block_on(async {
        let events = EventStream::new();
        event_loop::run(
            session,
            camera,
            &mut renderer,
            events,
            settings.tick_interval(),
            &event_loop::SHUTDOWN_REQUESTED,
        )
        .await
    });

    let restored = guard.exit();
    let reason = result?;
    restored?;
    Ok(reason)
}
