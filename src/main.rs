// SPDX-License-Identifier: MPL-2.0
use classroom_i18n::config;
use classroom_i18n::i18n::{
    coverage, menu_entries, trigger_label, ConfigFileStore, PreferenceStore, Translator,
    UnavailableStore,
};
use classroom_i18n::paths;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
classroom-i18n - inspect and select the dashboard language

USAGE:
  classroom-i18n [OPTIONS] <COMMAND>

COMMANDS:
  list                      List supported languages (* marks the active one)
  current                   Show the active language
  select <CODE>             Select and remember a language
  get <KEY> [NAME=VALUE]... Translate a key, substituting {NAME} tokens
  coverage                  Show translation coverage against the base language
  detect                    Match the operating system locale to a language

OPTIONS:
  --lang <CODE>        Use a language for this run without saving it
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help
";

struct Flags {
    lang: Option<String>,
    config_dir: Option<String>,
    command: Option<String>,
    rest: Vec<String>,
}

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let mut free = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        config_dir,
        command: free.next(),
        rest: free.collect(),
    }))
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("Error: {error}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    let (cfg, warning) = config::load();
    init_logging(cfg.log_filter());
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let store: Box<dyn PreferenceStore> = match ConfigFileStore::from_config_dir(None) {
        Some(store) => Box::new(store),
        None => {
            tracing::warn!("no config directory available, language choice will not be saved");
            Box::new(UnavailableStore)
        }
    };

    let translator = match Translator::builtin(store) {
        Ok(translator) => translator,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };
    translator.initialize();

    if let Some(code) = flags.lang.as_deref() {
        if !translator.use_for_session(code) {
            eprintln!(
                "{}",
                translator.translate_with("language.unsupported", &[("code", code)])
            );
        }
    }

    run(&translator, flags.command.as_deref(), &flags.rest)
}

fn run(translator: &Translator, command: Option<&str>, rest: &[String]) -> ExitCode {
    match command {
        Some("list") => {
            println!("{}", translator.translate("language.select"));
            for entry in menu_entries(translator) {
                let marker = if entry.is_active { '*' } else { ' ' };
                println!("{} {:<4} {}", marker, entry.code, entry.label());
            }
            ExitCode::SUCCESS
        }
        Some("current") => {
            let label = trigger_label(translator);
            println!(
                "{}",
                translator
                    .translate_with("language.current", &[("language", label.as_str())])
            );
            ExitCode::SUCCESS
        }
        Some("select") => {
            let Some(code) = rest.first() else {
                eprintln!("Error: select requires a language code\n\n{HELP}");
                return ExitCode::FAILURE;
            };
            if translator.select_code(code) {
                let label = trigger_label(translator);
                println!(
                    "{}",
                    translator
                        .translate_with("language.saved", &[("language", label.as_str())])
                );
                ExitCode::SUCCESS
            } else {
                eprintln!(
                    "{}",
                    translator
                        .translate_with("language.unsupported", &[("code", code.as_str())])
                );
                ExitCode::FAILURE
            }
        }
        Some("get") => {
            let Some(key) = rest.first() else {
                eprintln!("Error: get requires a key\n\n{HELP}");
                return ExitCode::FAILURE;
            };
            let args: Vec<(&str, &str)> = rest[1..]
                .iter()
                .filter_map(|pair| pair.split_once('='))
                .collect();
            println!("{}", translator.translate_with(key, &args));
            ExitCode::SUCCESS
        }
        Some("coverage") => {
            let report = coverage(translator.catalog());
            println!("base: {} ({} keys)", report.base, report.total_keys);
            for locale in &report.locales {
                println!(
                    "{:<4} {:>3}/{:<3} {:>5.1}%",
                    locale.locale,
                    locale.translated,
                    report.total_keys,
                    locale.percent(report.total_keys)
                );
                for key in &locale.extra {
                    println!("       extra: {key}");
                }
            }
            ExitCode::SUCCESS
        }
        Some("detect") => {
            let os_locale = sys_locale::get_locale();
            let matched = os_locale
                .as_deref()
                .and_then(|tag| translator.registry().match_tag(tag));
            match (os_locale.as_deref(), matched) {
                (Some(tag), Some(locale)) => {
                    println!("{tag} -> {} {}", locale.code(), locale.native_name())
                }
                (Some(tag), None) => println!("{tag} -> (unsupported)"),
                (None, _) => println!("(system locale unavailable)"),
            }
            ExitCode::SUCCESS
        }
        Some(other) => {
            eprintln!("Error: unknown command '{other}'\n\n{HELP}");
            ExitCode::FAILURE
        }
        None => {
            print!("{HELP}");
            ExitCode::FAILURE
        }
    }
}
