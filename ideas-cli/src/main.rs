use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use ideas_client::{
    ControlKind, HttpClient, IdeasClientError, IdeasClientResult, ListingController, ListingView,
    PageAction, PaginationControl, PreferenceStore, SortDirection,
};
use tracing_subscriber::EnvFilter;

const PREFS_FILE: &str = ".ideas_prefs.json";
const DEFAULT_SERVER: &str = "http://127.0.0.1:3000";

#[derive(Debug, Parser)]
#[command(name = "ideas-cli", version, about = "CLI для просмотра списка идей через ideas-server")]
struct Cli {
    /// Адрес прокси ideas-server (иначе `IDEAS_PROXY_URL` или localhost:3000).
    #[arg(long, global = true)]
    server: Option<String>,

    /// Файл с сохранёнными настройками (сортировка, размер страницы).
    #[arg(long, global = true, default_value = PREFS_FILE)]
    prefs: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Показать страницу списка.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Сменить сортировку (newest|oldest) и показать первую страницу.
    Sort { direction: SortDirection },
    /// Сменить размер страницы и показать первую страницу.
    PerPage { size: u32 },
    /// Нажать кнопку пагинации: previous, next, previous-set, next-set или номер.
    Click {
        token: String,
        /// Страница, с которой выполняется нажатие.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();

    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let server = cli
        .server
        .or_else(|| std::env::var("IDEAS_PROXY_URL").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    let server = normalize_server(server);
    let client = HttpClient::new(server.clone()).map_err(map_client_error)?;
    let store = FilePreferenceStore::new(cli.prefs);
    let mut controller = ListingController::new(client, store).with_image_base(server);

    let view = match cli.command {
        Command::List { page } => open_page(&mut controller, page).await,
        Command::Sort { direction } => controller.change_sort(direction).await,
        Command::PerPage { size } => controller
            .change_page_size(size)
            .await
            .map_err(map_client_error)?,
        Command::Click { token, page } => {
            let action = PageAction::resolve(Some(&token), Some(&token))
                .ok_or_else(|| anyhow!("неизвестная кнопка: {token}"))?;
            let opened = open_page(&mut controller, page).await;
            if controller.apply_action(action) {
                controller.load_page().await
            } else {
                println!("Страница не изменилась");
                opened
            }
        }
    };

    let view = view.context("ответ устарел и был отброшен")?;
    print_view(&view);
    Ok(())
}

/// Первая загрузка узнаёт количество записей, поэтому переход на
/// произвольную страницу делается вторым запросом.
async fn open_page<P: PreferenceStore>(
    controller: &mut ListingController<HttpClient, P>,
    page: u32,
) -> Option<ListingView> {
    let first = controller.load_page().await;
    if controller.apply_action(PageAction::Page(page)) {
        return controller.load_page().await;
    }
    first
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn map_client_error(err: IdeasClientError) -> anyhow::Error {
    let message = match err {
        IdeasClientError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
        IdeasClientError::Http(err) => format!("ошибка HTTP: {err}"),
        other => other.to_string(),
    };
    anyhow!(message)
}

/// Настройки в JSON-файле: `{"sort":"newest","perPage":"10"}`.
struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_all(&self) -> io::Result<BTreeMap<String, String>> {
        if !Path::new(&self.path).exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(parse_prefs_content(&raw))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        self.read_all().ok()?.remove(key)
    }

    fn save(&self, key: &str, value: &str) -> IdeasClientResult<()> {
        let to_error = |err: &dyn std::fmt::Display| {
            IdeasClientError::Preferences(format!("{}: {err}", self.path.display()))
        };

        let mut values = self.read_all().map_err(|err| to_error(&err))?;
        values.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string_pretty(&values).map_err(|err| to_error(&err))?;
        fs::write(&self.path, raw).map_err(|err| to_error(&err))
    }
}

fn parse_prefs_content(raw: &str) -> BTreeMap<String, String> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn format_controls(controls: &[PaginationControl]) -> String {
    controls
        .iter()
        .map(|control| match (control.kind, control.active) {
            (ControlKind::Page, true) => format!("[{}]", control.label),
            _ => control.label.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_view(view: &ListingView) {
    println!("{}", view.counter);

    for post in &view.posts {
        println!("- {} | {}", post.display_date, post.title);
        println!("  {}", post.image_url);
    }

    println!("{}", format_controls(&view.controls));
}
