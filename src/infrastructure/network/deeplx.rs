use crate::domain::error::WorkflowError;
use crate::domain::model::TranslationResult;
use crate::domain::traits::Translator;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new("<[^>]*>").expect("valid regex"));

#[derive(Serialize, Debug)]
struct DeeplxRequest<'a> {
    text: &'a str,
    source_lang: &'a str,
    target_lang: &'a str,
}

// {"code":200,"message":"success","data":"..."}
#[derive(Deserialize, Debug)]
struct DeeplxResponse {
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: String,
}

/// DeepLX 翻译服务
pub struct DeeplxTranslator {
    client: Client,
    url: String,
    token: String,
}

impl DeeplxTranslator {
    pub fn new(client: Client, url: String, token: String) -> Self {
        Self { client, url, token }
    }
}

/// 是否包含中日韩统一表意文字（基本区），用于翻译方向推断
pub fn has_cjk_char(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fa5}').contains(&c))
}

#[async_trait]
impl Translator for DeeplxTranslator {
    fn name(&self) -> &str {
        "deeplx"
    }

    async fn translate(&self, query: &str) -> Result<Vec<TranslationResult>, WorkflowError> {
        // 含中文 -> en，否则 -> zh；源语言始终 auto
        let target_lang = if has_cjk_char(query) { "en" } else { "zh" };
        let body = DeeplxRequest {
            text: query,
            source_lang: "auto",
            target_lang,
        };

        let mut request = self.client.post(&self.url).json(&body);
        if !self.token.is_empty() {
            request = request.bearer_auth(&self.token);
        }

        let response = request.send().await?.json::<DeeplxResponse>().await?;

        if response.code != 200 {
            return Err(WorkflowError::Api(format!(
                "deeplx translation error: {}",
                response.message
            )));
        }

        // 清理结果中的 HTML 标签
        let clean = TAG_RE.replace_all(&response.data, "").into_owned();

        Ok(vec![TranslationResult {
            title: clean.clone(),
            subtitle: format!("DeepLX翻译: {}", query),
            value: clean,
            url: None,
        }])
    }
}
