use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use urlmini_gateway::logging::LogFormat;

pub const LISTEN_ADDR_ENV: &str = "URLMINI_LISTEN_ADDR";
pub const HOST_ENV: &str = "URLMINI_HOST";
pub const STORAGE_BACKEND_ENV: &str = "URLMINI_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "URLMINI_MYSQL_DSN";
pub const TABLE_NAME_ENV: &str = "URLMINI_TABLE_NAME";
pub const MAX_ATTEMPTS_ENV: &str = "URLMINI_MAX_ATTEMPTS";
pub const CREATED_BY_ENV: &str = "URLMINI_CREATED_BY";
pub const LOG_FORMAT_ENV: &str = "URLMINI_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "urlmini-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Host the aliases are formatted with.
    #[arg(long, env = HOST_ENV, default_value = urlmini_core::settings::DEFAULT_HOST)]
    pub host: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    #[arg(long, env = TABLE_NAME_ENV, default_value = urlmini_storage::DEFAULT_TABLE_NAME)]
    pub table_name: String,

    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value_t = urlmini_core::settings::DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_attempts: u32,

    #[arg(long, env = CREATED_BY_ENV, default_value = urlmini_core::store::SYSTEM_IDENTITY)]
    pub created_by: String,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}
