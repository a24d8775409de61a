use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use viewfinder::{
    Config, ControllerOptions, HeadlessCamera, InteractionController, PlaceholderTranscriber,
    ScriptedPermissions, TempWavRecorder,
};

/// Headless driver for the capture-screen controller
///
/// Maps stdin commands to controller intents and prints the serialized
/// render model after each, so any UI stack can be scripted against it.
#[derive(Parser, Debug)]
#[command(name = "viewfinder")]
struct Args {
    /// Config file path without extension (config-crate style)
    #[arg(long, default_value = "config/viewfinder")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} starting", cfg.service.name);

    let audio = match cfg.recording.output_dir.as_deref() {
        Some(dir) => TempWavRecorder::new(dir)?,
        None => TempWavRecorder::in_temp_dir()?,
    };

    let mut controller = InteractionController::new(
        Box::new(ScriptedPermissions::granting_all()),
        Box::new(HeadlessCamera::new()),
        Box::new(audio),
        Box::new(PlaceholderTranscriber),
        ControllerOptions {
            require_media_library: cfg.permissions.require_media_library,
        },
    );

    controller.mount().await?;
    print_screen(&controller)?;

    println!("Commands: flip | record | play | transcribe | state | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "flip" => controller.toggle_camera_facing().await,
            "record" => controller.toggle_recording().await,
            "play" => controller.play_recording().await,
            "transcribe" => controller.transcribe_recording().await,
            "state" => {}
            "quit" | "exit" => break,
            "" => continue,
            other => {
                println!("Unknown command: {}", other);
                continue;
            }
        }

        for notice in controller.take_notices() {
            println!("! {}", notice.message());
        }

        print_screen(&controller)?;
    }

    Ok(())
}

fn print_screen(controller: &InteractionController) -> Result<()> {
    println!("{}", serde_json::to_string(&controller.screen())?);
    Ok(())
}
