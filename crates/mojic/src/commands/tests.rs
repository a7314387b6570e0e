use super::*;
use pretty_assertions::assert_eq;

const BEER: &str = "\u{1f37a}";

fn run_with(command: Command, options: &Options, input: &str) -> String {
    let mut out = Vec::new();
    if let Err(err) = run(&command, options, input.as_bytes(), &mut out) {
        panic!("command failed: {err}");
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn run_default(command: Command) -> String {
    run_with(command, &Options::default(), "")
}

// === print / stream ===

#[test]
fn print_substitutes() {
    let out = run_default(Command::Print {
        text: crate::DEFAULT_TEXT.to_string(),
    });
    assert_eq!(out, format!("{BEER}  Beer!!!\n"));
}

#[test]
fn print_with_custom_padding() {
    let options = Options {
        padding: String::new(),
    };
    let out = run_with(
        Command::Print {
            text: ":beer:!".to_string(),
        },
        &options,
        "",
    );
    assert_eq!(out, format!("{BEER}!\n"));
}

#[test]
fn stream_copies_input_through() {
    let input = "line one :sushi:\nline two :flag-jp: :unknown: :tai";
    let out = run_with(Command::Stream, &Options::default(), input);
    assert_eq!(
        out,
        "line one \u{1f363} \nline two \u{1f1ef}\u{1f1f5} :unknown: :tai"
    );
}

#[test]
fn stream_flushes_output_after_finishing() {
    #[derive(Default)]
    struct Recorder {
        bytes: Vec<u8>,
        flushes: usize,
    }
    impl Write for Recorder {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    let mut recorder = Recorder::default();
    let result = run(
        &Command::Stream,
        &Options::default(),
        ":beer: then :be".as_bytes(),
        &mut recorder,
    );
    assert!(result.is_ok());
    assert_eq!(
        String::from_utf8_lossy(&recorder.bytes),
        format!("{BEER}  then :be")
    );
    // Once by `finish`, once more by the command itself.
    assert_eq!(recorder.flushes, 2);
}

// === table queries ===

#[test]
fn aliases_one_per_line() {
    let out = run_default(Command::Aliases {
        code: ":thumbsup:".to_string(),
    });
    assert_eq!(out, ":+1:\n:thumbsup:\n:thumbs_up:\n");
}

#[test]
fn aliases_of_unknown_code_is_empty() {
    let out = run_default(Command::Aliases {
        code: ":nope:".to_string(),
    });
    assert_eq!(out, "");
}

#[test]
fn normalize_prints_canonical_alias() {
    let out = run_default(Command::Normalize {
        code: ":thumbs_up:".to_string(),
    });
    assert_eq!(out, ":+1:\n");

    let out = run_default(Command::Normalize {
        code: ":nope:".to_string(),
    });
    assert_eq!(out, ":nope:\n");
}

#[test]
fn list_is_sorted_and_complete() {
    let out = run_default(Command::List);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), code_map().len());

    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);
    assert!(lines.contains(&format!(":beer: {BEER}").as_str()));
}

// === help / version ===

#[test]
fn help_prints_usage() {
    assert_eq!(run_default(Command::Help), USAGE);
}

#[test]
fn version_prints_package_version() {
    let out = run_default(Command::Version);
    assert_eq!(out, format!("moji {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn io_errors_surface() {
    struct Broken;
    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let result = run(&Command::List, &Options::default(), io::empty(), Broken);
    assert!(matches!(result, Err(CliError::Io(_))));
    assert_eq!(result.err().map(|e| e.exit_code()), Some(1));
}
