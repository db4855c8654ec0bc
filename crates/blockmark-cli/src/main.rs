use anyhow::{Context, Result, bail};
use blockmark_config::Config;
use blockmark_engine::{Tokenizer, parsing::snapshot};
use std::{
    env,
    io::{self, Read, Write},
    path::PathBuf,
    process,
};

const USAGE: &str = "Usage: blockmark [--json] [--threads N] [--config PATH] [FILE]";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    json: bool,
    threads: Option<usize>,
    config: Option<PathBuf>,
    input: Option<PathBuf>,
    help: bool,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "-h" | "--help" => parsed.help = true,
                "--threads" => {
                    let value = args.next().context("--threads needs a value")?;
                    let threads = value
                        .parse()
                        .with_context(|| format!("invalid thread count: {value}"))?;
                    parsed.threads = Some(threads);
                }
                "--config" => {
                    let value = args.next().context("--config needs a path")?;
                    parsed.config = Some(PathBuf::from(value));
                }
                flag if flag.starts_with("--") => bail!("unknown option: {flag}"),
                path => {
                    if parsed.input.is_some() {
                        bail!("only one input file is supported");
                    }
                    parsed.input = Some(PathBuf::from(path));
                }
            }
        }

        Ok(parsed)
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(config_path) => {
            log::info!("Config path: {}", config_path.display());
            Config::load_from_path(config_path)?
                .with_context(|| format!("config file not found: {}", config_path.display()))?
        }
        None => {
            log::info!("Config path: {}", Config::config_path().display());
            Config::load_or_default()?
        }
    };

    if let Some(threads) = args.threads {
        config.tokenizer.max_threads = threads;
    }
    Ok(config)
}

fn read_input(args: &Args) -> Result<String> {
    match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn run(args: Args) -> Result<()> {
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = load_config(&args)?;
    let text = read_input(&args)?;

    let tokenizer = Tokenizer::new(config.tokenizer);
    let tokens = tokenizer.tokenize(&text);
    log::info!(
        "{} tokens from {} workers",
        tokens.len(),
        tokenizer.options().worker_count()
    );

    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &tokens)?;
        writeln!(stdout)?;
    } else if !tokens.is_empty() {
        writeln!(stdout, "{}", snapshot::render(&tokens))?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let result = Args::parse(env::args().skip(1)).and_then(run);
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        eprintln!("{USAGE}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_arguments_reads_stdin() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn parses_all_options() {
        assert_eq!(
            parse(&["--json", "--threads", "4", "--config", "c.toml", "doc.md"]).unwrap(),
            Args {
                json: true,
                threads: Some(4),
                config: Some(PathBuf::from("c.toml")),
                input: Some(PathBuf::from("doc.md")),
                help: false,
            }
        );
    }

    #[test]
    fn rejects_bad_thread_count() {
        let err = parse(&["--threads", "lots"]).unwrap_err();
        assert!(err.to_string().contains("invalid thread count"));
    }

    #[test]
    fn rejects_missing_option_value() {
        assert!(parse(&["--config"]).is_err());
    }

    #[test]
    fn rejects_unknown_option() {
        let err = parse(&["--html"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown option: --html");
    }

    #[test]
    fn rejects_second_input() {
        assert!(parse(&["a.md", "b.md"]).is_err());
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = Args {
            config: Some(dir.path().join("missing.toml")),
            ..Args::default()
        };
        let err = load_config(&args).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn thread_flag_overrides_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_file = dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "[tokenizer]\nmax_threads = 2\nstrip_carriage_returns = false\n",
        )
        .unwrap();

        let args = Args {
            threads: Some(6),
            config: Some(config_file),
            ..Args::default()
        };
        let config = load_config(&args).unwrap();

        assert_eq!(config.tokenizer.max_threads, 6);
        assert!(!config.tokenizer.strip_carriage_returns);
    }
}
