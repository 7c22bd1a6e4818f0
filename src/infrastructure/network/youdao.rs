use crate::domain::error::WorkflowError;
use crate::domain::model::TranslationResult;
use crate::domain::traits::Translator;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};

const API_URL: &str = "https://openapi.youdao.com/api";

// Youdao API response envelope
#[derive(Deserialize, Debug)]
struct YoudaoResponse {
    #[serde(rename = "errorCode")]
    error_code: String,
    #[serde(default, rename = "translation")]
    translations: Vec<String>,
    #[serde(default)]
    webdict: Option<Dict>,
}

// 词典和 web 词典的 URL
#[derive(Deserialize, Debug)]
struct Dict {
    url: String,
}

/// 有道翻译服务
pub struct YoudaoTranslator {
    client: Client,
    app_key: String,
    app_secret: String,
}

impl YoudaoTranslator {
    pub fn new(client: Client, app_key: String, app_secret: String) -> Self {
        Self {
            client,
            app_key,
            app_secret,
        }
    }

    // Legacy v1 signature required by the upstream API:
    // sign = md5(appKey + q + salt + appSecret), lowercase hex
    fn sign(&self, query: &str, salt: &str) -> String {
        let raw = format!("{}{}{}{}", self.app_key, query, salt, self.app_secret);
        format!("{:x}", md5::compute(raw.as_bytes()))
    }
}

#[async_trait]
impl Translator for YoudaoTranslator {
    fn name(&self) -> &str {
        "youdao"
    }

    async fn translate(&self, query: &str) -> Result<Vec<TranslationResult>, WorkflowError> {
        let salt = SystemTime::now()
            .duration_since(UNIX_EPOCH)?
            .as_secs()
            .to_string();
        let sign = self.sign(query, &salt);

        let params = [
            ("from", "auto"),
            ("to", "auto"),
            ("q", query),
            ("appKey", self.app_key.as_str()),
            ("salt", salt.as_str()),
            ("sign", sign.as_str()),
            ("curtime", salt.as_str()),
        ];

        let response = self
            .client
            .get(API_URL)
            .query(&params)
            .send()
            .await?
            .json::<YoudaoResponse>()
            .await?;

        if response.error_code != "0" {
            return Err(WorkflowError::Api(format!(
                "youdao translation error: {}",
                response.error_code
            )));
        }

        let url = response.webdict.map(|d| d.url);
        let results = response
            .translations
            .into_iter()
            .map(|translation| TranslationResult {
                title: translation.clone(),
                subtitle: format!("有道翻译: {}", query),
                value: translation,
                url: url.clone(),
            })
            .collect();

        Ok(results)
    }
}
