use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub static_dir: String,
    pub business_name: String,
    pub business_city: String,
    pub support_phone: String,
    pub openai_model: String,
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Reads a numeric env var, keeping the default when it's missing,
/// can't be parsed, or is rejected by `accept`.
fn env_number_where<T, F>(key: &str, default: T, accept: F) -> T
where
    T: FromStr + Copy,
    F: Fn(&T) -> bool,
{
    let Ok(val) = env::var(key) else {
        return default;
    };
    match val.trim().parse::<T>() {
        Ok(parsed) if accept(&parsed) => parsed,
        _ => {
            tracing::warn!("Ignoring invalid value for {}: {}", key, val);
            default
        }
    }
}

fn env_number<T: FromStr + Copy>(key: &str, default: T) -> T {
    env_number_where(key, default, |_| true)
}

impl Default for AppConfig {
    fn default() -> Self {
        let static_dir =
            env::var("ELITECABS_STATIC_DIR").unwrap_or_else(|_| "./web-ui/out".to_string());
        let business_name =
            env::var("ELITECABS_BUSINESS_NAME").unwrap_or_else(|_| "Elite Cabs 24X7".to_string());
        let business_city = env::var("ELITECABS_CITY").unwrap_or_else(|_| "Mumbai".to_string());
        let support_phone =
            env::var("ELITECABS_SUPPORT_PHONE").unwrap_or_else(|_| "+91 70217 51691".to_string());
        let openai_api_hostname = env::var("ELITECABS_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key =
            env::var("OPENAI_API_KEY").unwrap_or_else(|_| "thiswontworkforopenai".to_string());
        let openai_model =
            env::var("ELITECABS_LLM_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".to_string());
        // NaN and inf parse fine but serialize as `null`
        let temperature =
            env_number_where("ELITECABS_TEMPERATURE", 0.7, |t: &f32| t.is_finite());
        let max_tokens = env_number("ELITECABS_MAX_TOKENS", 500);

        Self {
            static_dir,
            business_name,
            business_city,
            support_phone,
            openai_model,
            openai_api_hostname,
            openai_api_key,
            temperature,
            max_tokens,
        }
    }
}
