//! main.rs
//! Entry point for the fspick binary: an interactive path picker that prints
//! the chosen path to stdout, suitable for command substitution:
//!
//! ```sh
//! cd "$(fspick --dirs)"
//! ```

use fspick::{FsPrompt, Icons, PromptError, PromptOptions, Settings};

use std::path::PathBuf;

enum CliAction {
    Run(PickArgs),
    Exit(i32),
}

struct PickArgs {
    path: PathBuf,
    dirs_only: bool,
    show_hidden: Option<bool>,
    no_icons: bool,
    message: Option<String>,
}

fn handle_args() -> CliAction {
    let mut args = PickArgs {
        path: PathBuf::from("."),
        dirs_only: false,
        show_hidden: None,
        no_icons: false,
        message: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--version" => {
                print_version();
                return CliAction::Exit(0);
            }
            "-h" | "--help" => {
                print_help();
                return CliAction::Exit(0);
            }
            "--dirs" => args.dirs_only = true,
            "--hidden" => args.show_hidden = Some(true),
            "--no-hidden" => args.show_hidden = Some(false),
            "--no-icons" => args.no_icons = true,
            "-m" | "--message" => match iter.next() {
                Some(text) => args.message = Some(text),
                None => {
                    eprintln!("Error: {} requires a value", arg);
                    return CliAction::Exit(2);
                }
            },
            other if !other.starts_with('-') && !other.trim().is_empty() => {
                args.path = PathBuf::from(other);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Try --help for available options");
                return CliAction::Exit(2);
            }
        }
    }

    CliAction::Run(args)
}

fn print_version() {
    println!("fspick {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"fspick - an inline terminal file and directory picker

USAGE:
  fspick [OPTIONS] [PATH]

PATH:
  Directory to start browsing from (defaults to the current directory)

OPTIONS:
      --dirs              List and select directories only
      --hidden            Show hidden entries
      --no-hidden         Hide hidden entries (overrides the settings file)
      --no-icons          Plain labels without icons
  -m, --message <TEXT>    Prompt question to display
  -h, --help              Print help information
  -v, --version           Display the installed version

KEYS:
  Up/Down                 Move the cursor
  Enter                   Open a directory or submit the selection
  /                       Search within the listing
  -                       Go to the parent directory
  .                       Submit the highlighted entry
  Esc, Ctrl-C             Cancel

ENVIRONMENT:
  FSPICK_CONFIG           Override the default settings file path
"#
    );
}

fn build_options(args: &PickArgs, settings: &Settings) -> PromptOptions {
    let show_hidden = args.show_hidden.unwrap_or_else(|| settings.display_hidden());
    let mut options = PromptOptions::new(&args.path)
        .display_files(!args.dirs_only && settings.display_files())
        .display_hidden(show_hidden)
        .can_select_file(!args.dirs_only && settings.can_select_file())
        .page_size(settings.page_size())
        .icons(if args.no_icons {
            Icons::Disabled
        } else {
            settings.icons()
        });
    if let Some(message) = &args.message {
        options = options.message(message.clone());
    }
    options
}

fn main() {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stderr(), crossterm::cursor::Show);
        eprintln!("\n[fspick] Error occurred: {}", info);
    }));

    let args = match handle_args() {
        CliAction::Run(args) => args,
        CliAction::Exit(code) => std::process::exit(code),
    };

    let settings = Settings::load();
    let options = build_options(&args, &settings);

    match FsPrompt::new(options).and_then(|prompt| prompt.run()) {
        Ok(selection) => println!("{}", selection.path().display()),
        Err(PromptError::Interrupted) => std::process::exit(130),
        Err(err) => {
            eprintln!("[fspick] Error: {}", err);
            std::process::exit(1);
        }
    }
}
