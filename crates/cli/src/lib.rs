#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the thin command-line front-end for the `pagelinks`
//! binary. The parser recognises a small, fixed surface: an optional
//! traversal root, `--output`, `--base-url`, `--dry-run`/`-n`, repeatable
//! `--verbose`/`-v`, and the usual `--help`/`-h` and `--version`/`-V`
//! flags. A bare invocation walks the current directory and appends links
//! for every discovered page to `README.md`, which is the primary use of
//! the tool.
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function
//! accepts an iterator of arguments together with handles for standard
//! output and error, so tests can drive the full execution path against
//! in-memory buffers. Internally a [`clap`](https://docs.rs/clap/) command
//! definition performs the parse; execution then wires the verbosity
//! configuration into the `logging` crate, collects pages via
//! [`links::collect_pages`], and either renders the link lines to stdout
//! (`--dry-run`) or appends them through [`links::LinkWriter`].
//!
//! # Invariants
//!
//! - [`run`] never panics; unexpected I/O failures surface as non-zero exit
//!   codes.
//! - Help and version output go to stdout only; diagnostics go to stderr
//!   only.
//! - Exit codes follow the fixed taxonomy: `0` success, `1` syntax or usage
//!   error, `3` traversal failure, `11` output I/O failure.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["pagelinks", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(!stdout.is_empty());
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - `src/bin/pagelinks.rs` for the binary crate that wires [`run`] into
//!   `main`.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use links::{DEFAULT_BASE_URL, DEFAULT_OUTPUT, LinkError, LinkWriter};
use logging::{VerbosityConfig, debug_log, info_log};

/// Successful run.
pub const EXIT_OK: i32 = 0;
/// Syntax or usage error.
pub const EXIT_SYNTAX: i32 = 1;
/// Error selecting input files or directories.
pub const EXIT_FILE_SELECT: i32 = 3;
/// Error in file I/O.
pub const EXIT_FILE_IO: i32 = 11;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Deterministic help text describing the CLI surface.
const HELP_TEXT: &str = concat!(
    "pagelinks ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "https://github.com/oferchen/pagelinks\n",
    "\n",
    "Usage: pagelinks [-h] [-V] [-n] [-v]... [--output FILE] [--base-url URL] [ROOT]\n",
    "\n",
    "Walks ROOT (default: the current directory), finds regular files named\n",
    "index.html, and appends one URL per page to the output file, each\n",
    "followed by a blank line. Files and directories whose names begin with\n",
    "a dot are skipped entirely. Re-running appends the same lines again;\n",
    "the output file is never deduplicated or truncated.\n",
    "\n",
    "  -h, --help       Show this help message and exit.\n",
    "  -V, --version    Output version information and exit.\n",
    "  -n, --dry-run    Print the link lines to stdout instead of appending.\n",
    "  -v, --verbose    Increase diagnostic verbosity (may be repeated).\n",
    "      --output FILE    Append links to FILE (default: README.md).\n",
    "      --base-url URL   Prefix each relative path with URL\n",
    "                       (default: https://joeiddon.github.io/fields/).\n",
);

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    dry_run: bool,
    verbose: u8,
    base_url: Option<String>,
    output: Option<PathBuf>,
    root: Option<PathBuf>,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new("pagelinks")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .short('n')
                .help("Print the link lines to stdout instead of appending.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic verbosity (may be repeated).")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("FILE")
                .help("Append links to FILE (default: README.md).")
                .action(ArgAction::Set)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .value_name("URL")
                .help("Prefix each relative path with URL.")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("root")
                .value_name("ROOT")
                .help("Directory tree to search for pages (default: the current directory).")
                .value_parser(OsStringValueParser::new()),
        )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from("pagelinks"));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let show_help = matches.get_flag("help");
    let show_version = matches.get_flag("version");
    let dry_run = matches.get_flag("dry-run");
    let verbose = matches.get_count("verbose");
    let base_url = matches.remove_one::<String>("base-url");
    let output = matches.remove_one::<OsString>("output").map(PathBuf::from);
    let root = matches.remove_one::<OsString>("root").map(PathBuf::from);

    Ok(ParsedArgs {
        show_help,
        show_version,
        dry_run,
        verbose,
        base_url,
        output,
        root,
    })
}

/// Renders the version banner.
fn render_version() -> String {
    format!(
        "pagelinks {}\nhttps://github.com/oferchen/pagelinks\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller. On success, `0` is returned. Diagnostics are rendered as single
/// `pagelinks error: ... (code N)` lines on `stderr`.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdout, stderr),
        Err(error) => {
            let _ = write!(stderr, "{error}");
            let _ = writeln!(
                stderr,
                "pagelinks error: syntax or usage error (code {EXIT_SYNTAX})"
            );
            EXIT_SYNTAX
        }
    }
}

fn execute<Out, Err>(parsed: ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    let ParsedArgs {
        show_help,
        show_version,
        dry_run,
        verbose,
        base_url,
        output,
        root,
    } = parsed;

    if show_help {
        if stdout.write_all(HELP_TEXT.as_bytes()).is_err() {
            return EXIT_FILE_IO;
        }
        return EXIT_OK;
    }

    if show_version {
        if stdout.write_all(render_version().as_bytes()).is_err() {
            return EXIT_FILE_IO;
        }
        return EXIT_OK;
    }

    logging::init(VerbosityConfig::from_verbose_level(verbose));

    let root = root.unwrap_or_else(|| PathBuf::from("."));
    let writer = LinkWriter::new(
        base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
    );
    info_log!(
        Misc,
        2,
        "searching {} for pages under {}",
        root.display(),
        writer.base_url()
    );

    let pages = match links::collect_pages(&root) {
        Ok(pages) => pages,
        Err(error) => return fail(stderr, &error),
    };
    info_log!(Links, 1, "found {} pages", pages.len());

    if dry_run {
        if writer.write_links(&pages, stdout).is_err() {
            return EXIT_FILE_IO;
        }
        return EXIT_OK;
    }

    match writer.append_links(&pages) {
        Ok(_) => EXIT_OK,
        Err(error) => fail(stderr, &error),
    }
}

/// Renders `error` to stderr and returns its exit code.
fn fail<W: Write>(stderr: &mut W, error: &LinkError) -> i32 {
    let code = exit_status(error);
    let _ = writeln!(stderr, "pagelinks error: {error} (code {code})");
    debug_log!(Exit, 1, "exiting with code {code}");
    code
}

/// Maps a link error onto the numeric exit-code contract.
fn exit_status(error: &LinkError) -> i32 {
    match error {
        LinkError::Walk(_) => EXIT_FILE_SELECT,
        LinkError::Output { .. } => EXIT_FILE_IO,
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}
