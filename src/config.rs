use std::fmt;
use std::time::Duration;

/// Upstream host used when `ENFORMION_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://devapi.enformion.com";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Static credential pair sent with every upstream call.
#[derive(Clone)]
pub struct Credentials {
    pub ap_name: String,
    pub ap_password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("ap_name", &self.ap_name)
            .field("ap_password", &"[REDACTED]")
            .finish()
    }
}

/// Fully-qualified upstream URL for every search endpoint.
#[derive(Debug, Clone)]
pub struct UpstreamUrls {
    pub person_search: String,
    pub reverse_phone: String,
    pub contact_enrichment: String,
    pub caller_id: String,
    pub email_id: String,
    pub contact_id: String,
    pub address_id: String,
    pub address_autocomplete: String,
    pub id_verification: String,
    pub census_search: String,
    pub divorce_search: String,
    pub linkedin_id: String,
    pub property_search_v2: String,
    pub business_search_v2: String,
    pub domain_search: String,
    pub workplace_search: String,
    pub business_id: String,
}

impl UpstreamUrls {
    /// Derives every endpoint URL from a single base (scheme + host).
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let at = |path: &str| format!("{}/{}", base, path);

        Self {
            person_search: at("PersonSearch"),
            reverse_phone: at("ReversePhoneSearch"),
            contact_enrichment: at("Contact/Enrich"),
            caller_id: at("Phone/Enrich"),
            email_id: at("Email/Enrich"),
            contact_id: at("Contact/Id"),
            address_id: at("Address/Id"),
            address_autocomplete: at("Address/AutoComplete"),
            id_verification: at("Identity/Verify_ID"),
            census_search: at("CensusSearch"),
            divorce_search: at("DivorceSearch"),
            linkedin_id: at("Linkedin/Id"),
            property_search_v2: at("PropertyV2Search"),
            business_search_v2: at("BusinessSearchV2"),
            domain_search: at("DomainSearch"),
            workplace_search: at("WorkplaceSearch"),
            business_id: at("BusinessID"),
        }
    }

    fn apply_overrides<F>(&mut self, lookup: &F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let slots: [(&str, &mut String); 17] = [
            ("PERSON_SEARCH_API_URL", &mut self.person_search),
            ("REVERSE_PHONE_API_URL", &mut self.reverse_phone),
            ("CONTACT_ENRICHMENT_API_URL", &mut self.contact_enrichment),
            ("CALLER_ID_API_URL", &mut self.caller_id),
            ("EMAIL_ID_API_URL", &mut self.email_id),
            ("CONTACT_ID_API_URL", &mut self.contact_id),
            ("ADDRESS_ID_API_URL", &mut self.address_id),
            ("ADDRESS_AUTOCOMPLETE_API_URL", &mut self.address_autocomplete),
            ("ID_VERIFICATION_API_URL", &mut self.id_verification),
            ("CENSUS_SEARCH_API_URL", &mut self.census_search),
            ("DIVORCE_SEARCH_API_URL", &mut self.divorce_search),
            ("LINKEDIN_ID_API_URL", &mut self.linkedin_id),
            ("PROPERTY_SEARCH_V2_API_URL", &mut self.property_search_v2),
            ("BUSINESS_SEARCH_V2_API_URL", &mut self.business_search_v2),
            ("DOMAIN_SEARCH_API_URL", &mut self.domain_search),
            ("WORKPLACE_SEARCH_API_URL", &mut self.workplace_search),
            ("BUSINESS_ID_API_URL", &mut self.business_id),
        ];

        for (key, slot) in slots {
            if let Some(value) = non_empty(lookup(key)) {
                *slot = check_http_url(key, value)?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub upstream_timeout: Duration,
    pub max_body_bytes: usize,
    pub credentials: Credentials,
    pub urls: UpstreamUrls,
}

impl Config {
    /// Loads configuration from the process environment (and `.env` if present).
    ///
    /// Missing credentials abort startup instead of failing each call later.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Galaxy AP name: {}", config.credentials.ap_name);
        tracing::debug!("Person search URL: {}", config.urls.person_search);
        tracing::debug!(
            "Upstream timeout: {}s",
            config.upstream_timeout.as_secs()
        );
        tracing::debug!("Server: {}:{}", config.host, config.port);

        Ok(config)
    }

    /// Builds a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ap_name = non_empty(lookup("GALAXY_AP_NAME"))
            .ok_or_else(|| anyhow::anyhow!("GALAXY_AP_NAME environment variable required"))?;
        let ap_password = non_empty(lookup("GALAXY_AP_PASSWORD"))
            .ok_or_else(|| anyhow::anyhow!("GALAXY_AP_PASSWORD environment variable required"))?;

        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match non_empty(lookup("UPSTREAM_TIMEOUT_SECS")) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    anyhow::anyhow!("UPSTREAM_TIMEOUT_SECS must be a positive number of seconds")
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let max_body_bytes = match non_empty(lookup("MAX_BODY_BYTES")) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|bytes| *bytes > 0)
                .ok_or_else(|| anyhow::anyhow!("MAX_BODY_BYTES must be a positive byte count"))?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        let base_url = match non_empty(lookup("ENFORMION_BASE_URL")) {
            Some(url) => check_http_url("ENFORMION_BASE_URL", url)?,
            None => DEFAULT_BASE_URL.to_string(),
        };
        let mut urls = UpstreamUrls::from_base(&base_url);
        urls.apply_overrides(&lookup)?;

        Ok(Self {
            host: non_empty(lookup("HOST")).unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            upstream_timeout: Duration::from_secs(timeout_secs),
            max_body_bytes,
            credentials: Credentials {
                ap_name,
                ap_password,
            },
            urls,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn check_http_url(key: &str, value: String) -> anyhow::Result<String> {
    let parsed = url::Url::parse(value.trim())
        .map_err(|e| anyhow::anyhow!("{} is not a valid URL: {}", key, e))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        anyhow::bail!("{} must start with http:// or https://", key);
    }
    Ok(value.trim().to_string())
}
