//! camview: watch your webcam inside the terminal.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::{Parser, Subcommand};

use camview::camera::{self, CameraCapture, CameraSettings, CameraSource};
use camview::session::{self, DisplaySession};

/// camview: live camera feed in your terminal
#[derive(Parser)]
#[command(name = "camview")]
#[command(version, about = "Live camera feed in your terminal")]
#[command(long_about = "Renders a live camera feed as truecolor half-block \
    characters, two pixels per character cell. Runs on the alternate screen \
    so your scrollback stays clean; press Ctrl+C to quit.")]
#[command(after_help = "EXAMPLES:
    # View the default camera
    camview

    # View a specific camera
    camview --device 1

    # Mirror the image (selfie mode)
    camview --mirror

    # List available cameras
    camview list-devices")]
struct Cli {
    /// Camera device index
    #[arg(short, long, default_value_t = 0)]
    device: u32,

    /// Mirror the image horizontally (selfie mode)
    #[arg(long)]
    mirror: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available camera devices
    ListDevices,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::ListDevices) => match camera::list_devices() {
            Ok(devices) if devices.is_empty() => {
                println!("No cameras found.");
            }
            Ok(devices) => {
                for device in devices {
                    println!("{}", device);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            let code = run_viewer(cli.device, cli.mirror);
            std::process::exit(code);
        }
    }
}

/// Open the camera and drive a display session until it ends.
///
/// Returns the process exit code: 0 for a clean shutdown (end-of-stream
/// or Ctrl+C), 1 if the camera cannot be opened or terminal output fails.
fn run_viewer(device: u32, mirror: bool) -> i32 {
    let interrupt = Arc::new(AtomicBool::new(false));

    let flag = Arc::clone(&interrupt);
    if let Err(e) = ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error: failed to install Ctrl+C handler: {}", e);
        return 1;
    }

    let settings = CameraSettings {
        device_index: device,
        mirror,
        ..Default::default()
    };

    // Open failures report before the alternate screen is entered, so no
    // teardown is needed on this path
    let mut capture = match CameraCapture::open(settings) {
        Ok(capture) => capture,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if let Err(e) = capture.start() {
        eprintln!("Error: {}", e);
        return 1;
    }

    session::install_panic_hook();

    let source = CameraSource::new(capture, Arc::clone(&interrupt));
    let stdout = io::BufWriter::new(io::stdout());
    let mut display = DisplaySession::new(source, stdout, session::terminal_size, interrupt);

    if let Err(e) = display.start() {
        eprintln!("Error: cannot write to terminal: {}", e);
        return 1;
    }

    match display.run() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: terminal output failed: {}", e);
            1
        }
    }
}
