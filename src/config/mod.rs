mod filesystem;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{CONFIG_VERSION, CheckConfig, Config, DEFAULT_MAX_LINE_LENGTH, ScannerConfig};
