//! 翻译聚合器并发行为测试
//!
//! 用可控的假服务（即时返回、慢速、永不返回、报错）验证共享截止时间、
//! 部分失败容忍和诊断结果。时钟从暂停状态启动，sleep 自动快进，
//! 测试不真实等待。

use alfred_workflows::application::translate::{aggregate, build_providers, run};
use alfred_workflows::domain::error::WorkflowError;
use alfred_workflows::domain::model::TranslationResult;
use alfred_workflows::domain::traits::Translator;
use alfred_workflows::infrastructure::config::{Config, ServiceConfig};
use async_trait::async_trait;
use std::time::Duration;

fn stub_result(title: &str, query: &str) -> TranslationResult {
    TranslationResult {
        title: title.to_string(),
        subtitle: format!("stub: {}", query),
        value: title.to_string(),
        url: None,
    }
}

struct InstantProvider {
    results: Vec<TranslationResult>,
}

#[async_trait]
impl Translator for InstantProvider {
    fn name(&self) -> &str {
        "instant"
    }

    async fn translate(&self, _query: &str) -> Result<Vec<TranslationResult>, WorkflowError> {
        Ok(self.results.clone())
    }
}

struct SlowProvider {
    delay: Duration,
    results: Vec<TranslationResult>,
}

#[async_trait]
impl Translator for SlowProvider {
    fn name(&self) -> &str {
        "slow"
    }

    async fn translate(&self, _query: &str) -> Result<Vec<TranslationResult>, WorkflowError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.results.clone())
    }
}

struct NeverProvider;

#[async_trait]
impl Translator for NeverProvider {
    fn name(&self) -> &str {
        "never"
    }

    async fn translate(&self, _query: &str) -> Result<Vec<TranslationResult>, WorkflowError> {
        std::future::pending().await
    }
}

struct FailingProvider;

#[async_trait]
impl Translator for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn translate(&self, _query: &str) -> Result<Vec<TranslationResult>, WorkflowError> {
        Err(WorkflowError::Api("upstream exploded".to_string()))
    }
}

fn youdao_config() -> Config {
    Config {
        services: vec![ServiceConfig {
            name: "youdao".to_string(),
            app_key: "ak".to_string(),
            app_secret: "as".to_string(),
            ..Default::default()
        }],
        timeout: 1,
    }
}

#[tokio::test]
async fn empty_query_short_circuits_to_prompt_item() {
    let client = reqwest::Client::new();
    // 即使服务配置完整也不应发起任何请求
    let items = run(&client, &youdao_config(), "   ").await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "请输入要翻译的文本");
    assert_eq!(items[0].subtitle, "支持中英文互译");
    assert!(items[0].arg.is_empty());
}

#[tokio::test]
async fn no_configured_provider_yields_failure_diagnostic() {
    let client = reqwest::Client::new();
    let items = run(&client, &Config::default(), "hello").await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "翻译失败");
    assert_eq!(items[0].subtitle, "请检查网络连接和配置");
}

#[test]
fn incomplete_service_entries_are_skipped() {
    let client = reqwest::Client::new();
    let config = Config {
        services: vec![
            // 缺 app_secret
            ServiceConfig {
                name: "youdao".to_string(),
                app_key: "ak".to_string(),
                ..Default::default()
            },
            // 缺 url
            ServiceConfig {
                name: "deeplx".to_string(),
                token: "t".to_string(),
                ..Default::default()
            },
        ],
        timeout: 0,
    };
    assert!(build_providers(&client, &config).is_empty());

    let config = Config {
        services: vec![ServiceConfig {
            name: "deeplx".to_string(),
            url: "http://localhost:1188/translate".to_string(),
            ..Default::default()
        }],
        timeout: 0,
    };
    assert_eq!(build_providers(&client, &config).len(), 1);
}

#[tokio::test(start_paused = true)]
async fn instant_provider_results_pass_through_in_order() {
    let providers: Vec<Box<dyn Translator>> = vec![Box::new(InstantProvider {
        results: vec![stub_result("你好", "hello"), stub_result("您好", "hello")],
    })];

    let items = aggregate(providers, "hello", Duration::from_secs(1)).await;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "你好");
    assert_eq!(items[1].title, "您好");
    assert_eq!(items[0].subtitle, "stub: hello");
    assert_eq!(items[0].arg, "你好");
}

#[tokio::test(start_paused = true)]
async fn preview_url_is_carried_into_quicklookurl() {
    let providers: Vec<Box<dyn Translator>> = vec![Box::new(InstantProvider {
        results: vec![TranslationResult {
            title: "你好".to_string(),
            subtitle: "stub: hello".to_string(),
            value: "你好".to_string(),
            url: Some("https://x/y".to_string()),
        }],
    })];

    let items = aggregate(providers, "hello", Duration::from_secs(1)).await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quicklookurl, "https://x/y");
}

#[tokio::test(start_paused = true)]
async fn failing_provider_is_swallowed() {
    let providers: Vec<Box<dyn Translator>> = vec![Box::new(FailingProvider)];

    let items = aggregate(providers, "hello", Duration::from_secs(1)).await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "翻译失败");
}

#[tokio::test(start_paused = true)]
async fn never_returning_provider_hits_timeout_diagnostic() {
    let providers: Vec<Box<dyn Translator>> = vec![Box::new(NeverProvider)];

    let items = aggregate(providers, "hello", Duration::from_secs(2)).await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "翻译超时 2秒");
    assert_eq!(items[0].subtitle, "请检查网络连接或稍后重试");
}

#[tokio::test(start_paused = true)]
async fn slow_provider_within_deadline_is_included() {
    let providers: Vec<Box<dyn Translator>> = vec![Box::new(SlowProvider {
        delay: Duration::from_millis(50),
        results: vec![stub_result("你好", "hello")],
    })];

    let items = aggregate(providers, "hello", Duration::from_secs(1)).await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "你好");
}

#[tokio::test(start_paused = true)]
async fn slow_provider_beyond_deadline_times_out() {
    let providers: Vec<Box<dyn Translator>> = vec![Box::new(SlowProvider {
        delay: Duration::from_secs(5),
        results: vec![stub_result("too late", "hello")],
    })];

    let items = aggregate(providers, "hello", Duration::from_secs(1)).await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "翻译超时 1秒");
}

#[tokio::test(start_paused = true)]
async fn unresponsive_sibling_does_not_block_fast_provider() {
    let providers: Vec<Box<dyn Translator>> = vec![
        Box::new(InstantProvider {
            results: vec![stub_result("你好", "hello")],
        }),
        Box::new(NeverProvider),
    ];

    let items = aggregate(providers, "hello", Duration::from_secs(1)).await;

    // 快的那个服务的结果原样返回，不混入超时诊断
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "你好");
}

#[tokio::test(start_paused = true)]
async fn erroring_sibling_does_not_block_fast_provider() {
    let providers: Vec<Box<dyn Translator>> = vec![
        Box::new(FailingProvider),
        Box::new(InstantProvider {
            results: vec![stub_result("你好", "hello")],
        }),
    ];

    let items = aggregate(providers, "hello", Duration::from_secs(1)).await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "你好");
}

#[tokio::test(start_paused = true)]
async fn two_answering_providers_yield_same_result_set() {
    // 顺序可能因竞争不同，但集合在重复运行间保持一致
    let make_providers = || -> Vec<Box<dyn Translator>> {
        vec![
            Box::new(InstantProvider {
                results: vec![stub_result("你好", "hello")],
            }),
            Box::new(SlowProvider {
                delay: Duration::from_millis(10),
                results: vec![stub_result("您好", "hello")],
            }),
        ]
    };

    let first = aggregate(make_providers(), "hello", Duration::from_secs(1)).await;
    let second = aggregate(make_providers(), "hello", Duration::from_secs(1)).await;

    let mut first_titles: Vec<String> = first.iter().map(|i| i.title.clone()).collect();
    let mut second_titles: Vec<String> = second.iter().map(|i| i.title.clone()).collect();
    first_titles.sort();
    second_titles.sort();

    assert_eq!(first_titles, vec!["你好", "您好"]);
    assert_eq!(first_titles, second_titles);
}

#[tokio::test(start_paused = true)]
async fn non_empty_query_never_yields_empty_outcome() {
    // 没有任何服务时也必须返回诊断项，绝不返回空数组
    let items = aggregate(Vec::new(), "hello", Duration::from_secs(1)).await;
    assert!(!items.is_empty());
}
