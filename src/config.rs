use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE: &str = "clcnt.db";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClcntConfig {
    pub database: Option<String>,
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
}

/// Fully resolved settings after merging flags, config file and defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub database: PathBuf,
    pub addr: SocketAddr,
}

impl ClcntConfig {
    /// Config written by `clcnt init`
    pub fn starter() -> Self {
        Self {
            database: Some(DEFAULT_DATABASE.to_string()),
            host: Some(DEFAULT_HOST),
            port: Some(DEFAULT_PORT),
        }
    }

    /// Merge with command-line overrides; flags win over the file
    pub fn resolve(
        &self,
        database: Option<PathBuf>,
        host: Option<IpAddr>,
        port: Option<u16>,
    ) -> Settings {
        let database = database
            .or_else(|| self.database.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));
        let host = host.or(self.host).unwrap_or(DEFAULT_HOST);
        let port = port.or(self.port).unwrap_or(DEFAULT_PORT);

        Settings {
            database,
            addr: SocketAddr::new(host, port),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("clcnt.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<ClcntConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: ClcntConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &ClcntConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}
