// SPDX-License-Identifier: MPL-2.0
use hud_text::app::{self, Flags};
use hud_text::hud::Position;
use hud_text::logging;
use std::io::{self, Write};

const HELP: &str = "\
HudText - heads-up text overlay driven by JSON lines on stdin

USAGE:
  hud_text [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Directory holding settings.toml
                       (overrides HUD_TEXT_CONFIG_DIR)
  --position <NAME>    Anchor of the --demo request, e.g. top-center
  --demo <TEXT>        Show TEXT at startup
  --no-stdin           Do not read host events from stdin
  -h, --help           Print this help

INPUT:
  One envelope per line: {\"action\":\"textUi\",\"data\":{\"text\":\"[E] Open\"}}
  or {\"action\":\"textUiHide\"}
";

fn main() -> iced::Result {
    if let Err(err) = logging::init() {
        eprintln!("{err}");
    }

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        // stdout belongs to the host pipe
        let _ = write_help(io::stderr().lock());
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        position: args.opt_value_from_fn("--position", str::parse::<Position>)?,
        demo: args.opt_value_from_str("--demo")?,
        no_stdin: args.contains("--no-stdin"),
    })
}

fn write_help(mut out: impl Write) -> io::Result<()> {
    out.write_all(HELP.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn help_is_written_whole() {
        let mut out = Vec::new();
        write_help(&mut out).expect("write to vec");
        assert_eq!(out, HELP.as_bytes());
    }

    #[test]
    fn flags_are_parsed() {
        let mut args = args(&["--position", "top-center", "--demo", "[E] open", "--no-stdin"]);
        let flags = parse_flags(&mut args).expect("valid flags");

        assert_eq!(flags.position, Some(Position::TopCenter));
        assert_eq!(flags.demo.as_deref(), Some("[E] open"));
        assert!(flags.no_stdin);
        assert!(flags.config_dir.is_none());
        assert!(args.finish().is_empty());
    }

    #[test]
    fn unknown_position_is_an_error() {
        let mut args = args(&["--position", "nowhere"]);
        assert!(parse_flags(&mut args).is_err());
    }
}
