use secrecy::Secret;
use serde::Deserialize;
use url::Url;

/// App-wide configuration
#[derive(Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub supabase: SupabaseSettings,
}

#[derive(Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

/// Connection values for the Supabase project hosting the waitlist function.
///
/// Both values are optional at load time. A deployment missing them still
/// serves the page; the submission path reports the missing variables to the
/// visitor instead of the process refusing to start.
#[derive(Clone, Deserialize)]
pub struct SupabaseSettings {
    pub base_url: Option<String>,
    pub publishable_key: Option<Secret<String>>,
}

/// Reads app configuration from the default file location, then overlays the
/// Supabase section with the `NEXT_PUBLIC_SUPABASE_URL` and
/// `NEXT_PUBLIC_SUPABASE_PUBLISHABLE_KEY` environment variables. The names
/// match what the hosted deployment injects.
///
/// Returns an error if parsing the config file into a `Settings` struct fails.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .set_override_option(
            "supabase.base_url",
            std::env::var("NEXT_PUBLIC_SUPABASE_URL").ok(),
        )?
        .set_override_option(
            "supabase.publishable_key",
            std::env::var("NEXT_PUBLIC_SUPABASE_PUBLISHABLE_KEY").ok(),
        )?
        .build()?
        .try_deserialize()
}

impl SupabaseSettings {
    /// Resolves the settings into credentials usable by the waitlist client.
    ///
    /// Returns `Ok(None)` when either value is missing, and `Err` when a base
    /// URL is present but does not parse.
    pub fn credentials(&self) -> Result<Option<SupabaseCredentials>, url::ParseError> {
        let (base_url, publishable_key) = match (&self.base_url, &self.publishable_key) {
            (Some(base_url), Some(key)) => (base_url, key.clone()),
            _ => return Ok(None),
        };

        Ok(Some(SupabaseCredentials {
            base_url: Url::parse(base_url)?,
            publishable_key,
        }))
    }
}

/// A fully resolved pair of Supabase connection values.
#[derive(Debug)]
pub struct SupabaseCredentials {
    pub base_url: Url,
    pub publishable_key: Secret<String>,
}
