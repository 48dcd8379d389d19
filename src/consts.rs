/// Branch the pipeline runs on unless `--ref` says otherwise
pub const DEFAULT_REF: &str = "main";

/// Git remote used to discover `owner/repo` when nothing else names it
pub const DEFAULT_REMOTE: &str = "upstream";

/// Workflow file under `.github/workflows/` that builds and publishes the book
pub const DEFAULT_WORKFLOW: &str = "build_and_publish.yml";

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_SERVER_URL: &str = "https://github.com";

pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Book settings file rewritten by `mlverif_book_setup`
pub const DEFAULT_BOOK_CONFIG: &str = "notebooks/_config.yml";

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
pub const SERVER_URL_ENV: &str = "GITHUB_SERVER_URL";
