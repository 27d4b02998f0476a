// SPDX-License-Identifier: MPL-2.0
use media_deck::app::{self, paths, Flags};
use media_deck::launch::LaunchOptions;
use media_deck::error::Result;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: media_deck [OPTIONS] [FILES|URLS...]

Options:
  -f, --fullscreen        Start in full screen mode
      --audiocd           Play an audio CD
      --videocd           Play a video CD
      --dvd               Play a DVD
      --device <DEVICE>   Optical drive used by the disc options
      --channel <NAME>    Play a television channel
      --tv <NAME>         Deprecated alias of --channel
      --lastchannel       Play the last television channel
      --dumpdvb           Dump television data (debugging)
      --config-dir <DIR>  Directory holding settings.toml
      --data-dir <DIR>    Directory holding session state
  -h, --help              Print this help
";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let (data_dir, config_dir) = match directory_overrides(&mut args) {
        Ok(directories) => directories,
        Err(err) => {
            eprintln!("media_deck: {err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    paths::init_cli_overrides(data_dir, config_dir);

    let launch = match LaunchOptions::from_args(args) {
        Ok(launch) => launch,
        Err(err) => {
            eprintln!("media_deck: {err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(Flags { launch }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("application error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Takes `--data-dir` and `--config-dir` out of the arguments.
fn directory_overrides(args: &mut pico_args::Arguments) -> Result<(Option<String>, Option<String>)> {
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    Ok((data_dir, config_dir))
}
