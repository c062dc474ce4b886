use clap::{ArgAction, Args as ClapArgs, Parser};
use coniven_core::domain::{
    common::{ConivenConfig, DatabaseConfig, entities::app_errors::CoreError},
    pagination::PaginationLimits,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "coniven", about = "Inventory API for categories, locations and rooms")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub pagination: PaginationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(id = "server_host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server_port", long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix of every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(id = "database_host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database_port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "coniven")]
    pub name: String,

    /// Applies pending migrations at start-up. `--run-migrations false` skips them.
    #[arg(
        long = "run-migrations",
        env = "RUN_MIGRATIONS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub run_migrations: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct PaginationArgs {
    /// Largest `perpage` a client may request.
    #[arg(long = "max-page-size", env = "MAX_PAGE_SIZE", default_value_t = 100)]
    pub max_page_size: u32,

    /// Page size used when `perpage` is absent.
    #[arg(long = "default-page-size", env = "DEFAULT_PAGE_SIZE", default_value_t = 10)]
    pub default_page_size: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Fallback filter when `RUST_LOG` is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl TryFrom<Args> for ConivenConfig {
    type Error = CoreError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let pagination = PaginationLimits::new(
            args.pagination.max_page_size,
            args.pagination.default_page_size,
        )?;

        Ok(ConivenConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
                run_migrations: args.db.run_migrations,
            },
            pagination,
        })
    }
}
