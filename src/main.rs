// SPDX-License-Identifier: MPL-2.0
use analytics_hub::app::{self, paths, Flags};
use analytics_hub::showcase::ViewId;

const HELP: &str = "\
Analytics Hub

USAGE:
  analytics_hub [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --lang <ID>             Interface language (e.g. en-US, fr)
  --view <VIEW>           View shown at startup: story | dashboard
  --config-dir <DIR>      Directory containing settings.toml
  --offline               Do not contact the visualization provider
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("Invalid --lang: {err}");
        None
    });
    let view: Option<ViewId> = args.opt_value_from_str("--view").unwrap_or_else(|err| {
        eprintln!("Ignoring --view: {err}");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        eprintln!("Invalid --config-dir: {err}");
        None
    });
    let offline = args.contains("--offline");

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        view,
        config_dir,
        offline,
    })
}
