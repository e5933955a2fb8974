//! Filepick demo shell
//!
//! A small line-oriented frontend for driving the browser core against the
//! real filesystem. It plays the role a tree-view widget would play in a
//! GUI: it renders the entry list, feeds raw interactions (clicks with
//! modifiers, double-clicks, committed path text) into the browser, and
//! prints the notifications the browser emits.
//!
//! # Usage
//!
//! ```bash
//! # Browse the current directory
//! filepick
//!
//! # Browse a specific directory, only offering Rust sources
//! filepick ~/projects -f '*.rs'
//!
//! # Hide non-matching files instead of listing them unselectable
//! filepick ~/projects -f '*.rs' --hide-filtered
//! ```
//!
//! Inside the shell: `ls`, `cd <path>`, `up`, `home`, `back`, `forward`,
//! `click <n> [ctrl] [shift]`, `open <n>`, `sel <n>...`, `selection`,
//! `root`, `help`, `quit`. On quit the selection is printed one path per
//! line, so the shell composes with `xargs` and friends.
//!
//! # Configuration
//!
//! Defaults are read from `<config_dir>/filepick/config.toml`
//! (`~/.config/filepick/config.toml` on Linux); command-line flags take
//! precedence. `--no-config` skips the file entirely.

use clap::Parser;
use colored::Colorize;
use filepick::FilepickError;
use filepick::browser::{FileBrowser, Interaction, Modifiers};
use filepick::config::FilepickConfig;
use filepick::provider::{FilterSettings, FsProvider};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, FilepickError>;

#[derive(Parser)]
#[command(name = "filepick", version, about = "Navigable file-selection browser demo shell")]
struct Cli {
    /// Root directory to open (defaults to the configured start
    /// directory, then the working directory)
    root: Option<PathBuf>,

    /// List hidden (dot-file) entries
    #[arg(long)]
    show_hidden: bool,

    /// Wildcard pattern restricting selectable files; may be repeated
    #[arg(short = 'f', long = "filter", value_name = "PATTERN")]
    filters: Vec<String>,

    /// Remove filtered-out files from the listing instead of showing
    /// them unselectable
    #[arg(long)]
    hide_filtered: bool,

    /// Skip loading the configuration file
    #[arg(long)]
    no_config: bool,

    /// Only print the final selection
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = if cli.no_config {
        FilepickConfig::default()
    } else {
        FilepickConfig::load()?
    };

    let filters = FilterSettings {
        patterns: if cli.filters.is_empty() {
            config.filters.clone()
        } else {
            cli.filters.clone()
        },
        hide_filtered: cli.hide_filtered || config.hide_filtered,
    };
    let provider = FsProvider::with_options(cli.show_hidden || config.show_hidden, filters)?;

    let mut browser = match cli.root.or(config.start_dir) {
        Some(root) => FileBrowser::with_root(provider, root)?,
        None => FileBrowser::new(provider)?,
    };

    if !cli.quiet {
        browser.on_root_changed(|root| {
            println!("{} {}", "root changed:".blue().bold(), root.display());
        });
        browser.on_selection_changed(|selection| {
            let names: Vec<String> = selection.iter().map(|p| p.display().to_string()).collect();
            println!(
                "{} [{}]",
                "selection changed:".green().bold(),
                names.join(", ")
            );
        });
    }

    if !cli.quiet {
        println!("Browsing {} (type 'help' for commands)", browser.current_root().display());
        print_entries(&browser);
    }

    let stdin = io::stdin();
    loop {
        print!("filepick> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = tokens.split_first() else {
            continue;
        };

        match command {
            "quit" | "exit" | "q" => break,
            "help" | "h" => print_help(),
            "ls" => print_entries(&browser),
            "root" => print_root(&browser),
            "selection" => print_selection(&browser),
            "up" => report(browser.move_up()),
            "home" => report(browser.go_home()),
            "back" => report(browser.go_back()),
            "forward" => report(browser.go_forward()),
            "cd" => {
                let text = args.join(" ");
                match browser.commit_path_text(&text) {
                    Ok(display) => println!("{display}"),
                    Err(e) => eprintln!("{} {e}", "warning:".yellow()),
                }
            }
            "click" => match parse_click(args) {
                Some((index, modifiers)) => {
                    report(browser.handle_interaction(Interaction::Click { index, modifiers }));
                }
                None => eprintln!("usage: click <n> [ctrl] [shift]"),
            },
            "open" => match args.first().and_then(|a| a.parse().ok()) {
                Some(index) => {
                    report(browser.handle_interaction(Interaction::DoubleClick { index }));
                }
                None => eprintln!("usage: open <n>"),
            },
            "sel" => {
                let paths: Vec<PathBuf> = args
                    .iter()
                    .filter_map(|a| a.parse::<usize>().ok())
                    .filter_map(|i| browser.entries().get(i).map(|e| e.path.clone()))
                    .collect();
                browser.set_selection(paths);
            }
            other => eprintln!("unknown command '{other}' (type 'help')"),
        }
    }

    // Final selection on stdout, one path per line, for scripting.
    for path in browser.current_selection() {
        println!("{}", path.display());
    }
    Ok(())
}

fn parse_click(args: &[&str]) -> Option<(usize, Modifiers)> {
    let index = args.first()?.parse().ok()?;
    let mut modifiers = Modifiers::NONE;
    for arg in &args[1..] {
        match *arg {
            "ctrl" => modifiers.ctrl = true,
            "shift" => modifiers.shift = true,
            _ => return None,
        }
    }
    Some((index, modifiers))
}

fn report(result: std::result::Result<(), filepick::browser::BrowserError>) {
    if let Err(e) = result {
        eprintln!("{} {e}", "warning:".yellow());
    }
}

fn print_entries(browser: &FileBrowser<FsProvider>) {
    for (index, entry) in browser.entries().iter().enumerate() {
        let marker = if browser.current_selection().iter().any(|p| *p == entry.path) {
            "*"
        } else {
            " "
        };
        let name = if entry.is_dir() {
            format!("{}/", entry.name).blue().bold()
        } else if entry.selectable {
            entry.name.normal()
        } else {
            entry.name.dimmed()
        };
        println!("{marker}{index:>4}  {name}");
    }
}

fn print_root(browser: &FileBrowser<FsProvider>) {
    println!(
        "{} (back: {}, forward: {})",
        browser.display_text(),
        if browser.can_go_back() { "yes" } else { "no" },
        if browser.can_go_forward() { "yes" } else { "no" },
    );
}

fn print_selection(browser: &FileBrowser<FsProvider>) {
    if browser.current_selection().is_empty() {
        println!("(empty)");
        return;
    }
    for path in browser.current_selection() {
        println!("{}", path.display());
    }
}

fn print_help() {
    println!("ls                      list entries of the current root");
    println!("cd <path>               change root (nonexistent paths revert)");
    println!("up | home | back | forward");
    println!("click <n> [ctrl] [shift]  click entry n");
    println!("open <n>                double-click entry n");
    println!("sel <n>...              replace selection with entries n...");
    println!("selection               show the current selection");
    println!("root                    show the current root and history state");
    println!("quit                    print the selection and exit");
}
