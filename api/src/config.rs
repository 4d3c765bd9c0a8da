use anyhow::{Context, bail};
use std::env;

/// A named bearer token that authenticates a principal for write operations.
#[derive(Debug, Clone)]
pub struct ApiToken {
    pub name: String,
    pub secret: String,
}

#[derive(Debug)]
pub struct Config {
    pub database_url: String,
    /// Tokens accepted for write operations, format: "name:secret,name2:secret2"
    pub api_tokens: Vec<ApiToken>,
}

impl Config {
    pub fn new() -> anyhow::Result<Config> {
        _ = dotenvy::dotenv();

        Ok(Config {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL is required.")?,
            api_tokens: parse_tokens(&env::var("API_TOKENS").context("API_TOKENS is required.")?)?,
        })
    }
}

fn parse_tokens(raw: &str) -> anyhow::Result<Vec<ApiToken>> {
    raw.split(',')
        .map(|entry| {
            let entry = entry.trim();
            match entry.split_once(':') {
                Some((name, secret)) if !name.is_empty() && !secret.is_empty() => Ok(ApiToken {
                    name: name.to_string(),
                    secret: secret.to_string(),
                }),
                _ => bail!("invalid API_TOKENS entry {entry:?}, expected name:secret"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_list() {
        let tokens = parse_tokens("alice:sekret, ci:hunter2").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].name, "alice");
        assert_eq!(tokens[0].secret, "sekret");
        assert_eq!(tokens[1].name, "ci");
    }

    #[test]
    fn rejects_entry_without_secret() {
        assert!(parse_tokens("alice").is_err());
        assert!(parse_tokens("alice:").is_err());
        assert!(parse_tokens(":sekret").is_err());
    }
}
