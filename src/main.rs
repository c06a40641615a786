// SPDX-License-Identifier: MPL-2.0
use brook_portal::app::{Flags, Portal};
use brook_portal::request::Response;
use brook_portal::service::types::{InitInfo, LoginInfo, ProxyConfig, QueryServerInfo};
use brook_portal::ui::theming::Theme;
use chrono::NaiveDateTime;
use std::fmt::Display;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
brook-portal: terminal client for the Brook server portal

USAGE:
  brook-portal [OPTIONS] <COMMAND> [ARGS]

OPTIONS:
  --lang <LOCALE>        UI language (zh-CN, en-US)
  --data-dir <DIR>       Directory holding storage.json
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help

COMMANDS:
  info                           Server status and version
  init <USERNAME> <PASSWORD>     Create the administrator account
  login <USERNAME> <PASSWORD>    Sign in and remember the session
  logout                         Forget the session
  servers                        Tunnels currently online
  proxies                        Configured tunnels
  del-proxy <ID>                 Delete a tunnel configuration
  client-config                  Print the generated client configuration
  token                          Show the client connection token
  generate-token                 Generate a new client connection token
  del-token                      Delete the client connection token
  theme [light|dark|toggle]      Show or change the theme
  locale [LOCALE]                Show or change the language
";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn usage_error(err: impl Display) -> ExitCode {
    eprintln!("{err}\n\n{HELP}");
    ExitCode::from(2)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => return usage_error(err),
    };
    let command = match args.subcommand() {
        Ok(Some(command)) => command,
        Ok(None) => return usage_error("missing command"),
        Err(err) => return usage_error(err),
    };
    let operands: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect();

    let (portal, _warning) = match Portal::new(flags) {
        Ok(portal) => portal,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let code = match run(&portal, &command, &operands).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => usage_error(err),
    };
    print_toasts(&portal);
    code
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

/// Toasts raised while the command ran; the terminal has no overlay to show them.
fn print_toasts(portal: &Portal) {
    for toast in portal.toasts().toasts() {
        eprintln!("[{}] {}", toast.kind(), toast.message());
    }
}

fn operand<'a>(operands: &'a [String], index: usize, name: &str) -> Result<&'a str, String> {
    operands
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| format!("missing argument <{name}>"))
}

/// Runs one command. `Ok(false)` means the API refused it.
async fn run(portal: &Portal, command: &str, operands: &[String]) -> Result<bool, String> {
    let i18n = portal.i18n();
    match command {
        "info" => {
            let response = portal.base_info().get_base_info().await;
            if let Some(info) = &response.data {
                let status = if info.is_running {
                    i18n.tr("cli-server-running")
                } else {
                    i18n.tr("cli-server-stopped")
                };
                println!("{status}");
                println!("{}: {}", i18n.tr("cli-version"), info.version);
            }
            Ok(response.success())
        }
        "init" => {
            let password = operand(operands, 1, "PASSWORD")?;
            let info = InitInfo {
                username: operand(operands, 0, "USERNAME")?.to_string(),
                password: password.to_string(),
                confirm_password: password.to_string(),
            };
            Ok(portal.base_info().init_server(&info).await.success())
        }
        "login" => {
            let info = LoginInfo {
                username: operand(operands, 0, "USERNAME")?.to_string(),
                password: operand(operands, 1, "PASSWORD")?.to_string(),
            };
            Ok(portal.login(&info).await.success())
        }
        "logout" => {
            portal.logout();
            Ok(true)
        }
        "servers" => {
            let response = portal
                .base_info()
                .get_server_info(&QueryServerInfo::default())
                .await;
            for server in response.data.iter().flatten() {
                println!(
                    "{:<20} {:>6} {:<8} {:>8} {:>6}",
                    server.name,
                    server.port,
                    server.tunnel_type,
                    i18n.format_number(f64::from(server.connections)),
                    i18n.format_number(f64::from(server.users)),
                );
            }
            Ok(response.success())
        }
        "proxies" => {
            let response = portal.proxy_config().get_proxy_configs().await;
            for config in response.data.iter().flatten() {
                print_proxy(portal, config);
            }
            Ok(response.success())
        }
        "del-proxy" => {
            let id = operand(operands, 0, "ID")?
                .parse::<i64>()
                .map_err(|err| format!("invalid <ID>: {err}"))?;
            let response = portal.proxy_config().del_proxy_config(id).await;
            if response.success() {
                portal
                    .messages()
                    .success(i18n.tr("notification-proxy-deleted"));
            }
            Ok(response.success())
        }
        "client-config" => {
            let response = portal.proxy_config().gen_client_config().await;
            print_json(&response);
            Ok(response.success())
        }
        "token" => {
            let response = portal.my_setting().get_auth_token().await;
            match response.data.as_ref().filter(|t| !t.token.is_empty()) {
                Some(token) => {
                    println!("{}", token.token);
                    if let Ok(created) =
                        NaiveDateTime::parse_from_str(&token.create_time, "%Y-%m-%d %H:%M:%S")
                    {
                        println!(
                            "{} ({})",
                            i18n.format_date(&created),
                            i18n.format_relative_time(created.and_utc())
                        );
                    }
                }
                None => println!("{}", i18n.tr("cli-no-token")),
            }
            Ok(response.success())
        }
        "generate-token" => {
            let response = portal.my_setting().generate_auth_token().await;
            if let Some(token) = &response.data {
                println!("{}", token.token);
                portal
                    .messages()
                    .success(i18n.tr("notification-token-generated"));
            }
            Ok(response.success())
        }
        "del-token" => {
            let response = portal.my_setting().del_token().await;
            if response.success() {
                portal
                    .messages()
                    .success(i18n.tr("notification-token-deleted"));
            }
            Ok(response.success())
        }
        "theme" => {
            let theme = portal.theme();
            match operands.first().map(String::as_str) {
                None => {}
                Some("toggle") => {
                    theme.toggle_theme();
                }
                Some("light") => theme.set_theme(Theme::Light),
                Some("dark") => theme.set_theme(Theme::Dark),
                Some(other) => return Err(format!("unknown theme: {other}")),
            }
            println!("{}: {}", i18n.tr("cli-theme"), theme.current_theme());
            Ok(true)
        }
        "locale" => {
            if let Some(locale) = operands.first() {
                if !portal.set_locale(locale) {
                    let available: Vec<String> =
                        i18n.available_locales().iter().map(ToString::to_string).collect();
                    return Err(format!(
                        "unsupported locale: {locale} (available: {})",
                        available.join(", ")
                    ));
                }
            }
            println!(
                "{}: {} ({})",
                i18n.tr("cli-locale"),
                i18n.locale_name(),
                i18n.current_locale()
            );
            Ok(true)
        }
        other => Err(format!("unknown command: {other}")),
    }
}

fn print_proxy(portal: &Portal, config: &ProxyConfig) {
    let state = if config.is_running {
        portal.i18n().tr("common-online")
    } else {
        portal.i18n().tr("common-offline")
    };
    println!(
        "{:>4} {:<20} {:<6} {:>6} {:<12} {}",
        config.id, config.name, config.protocol, config.remote_port, config.proxy_id, state
    );
}

fn print_json<T: serde::Serialize>(response: &Response<T>) {
    if let Some(data) = &response.data {
        match serde_json::to_string_pretty(data) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("{err}"),
        }
    }
}
