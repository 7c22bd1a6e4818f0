use crate::domain::traits::Translator;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::{DeeplxTranslator, YoudaoTranslator};
use crate::interfaces::alfred::Item;
use reqwest::Client;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::debug;

const RESULT_CHANNEL_CAPACITY: usize = 10;

/// 聚合一次翻译查询：所有配置完整的服务并发执行，共享一个截止时间。
///
/// Always returns at least one item; failures degrade to diagnostic items
/// so the launcher gets a well-formed response in every case.
pub async fn run(client: &Client, config: &Config, query: &str) -> Vec<Item> {
    let query = query.trim();
    if query.is_empty() {
        return vec![Item {
            title: "请输入要翻译的文本".to_string(),
            subtitle: "支持中英文互译".to_string(),
            ..Default::default()
        }];
    }

    let providers = build_providers(client, config);
    aggregate(providers, query, config.timeout()).await
}

/// Build one translator per completely configured service. An entry with
/// missing required fields is skipped, not an error.
pub fn build_providers(client: &Client, config: &Config) -> Vec<Box<dyn Translator>> {
    let mut providers: Vec<Box<dyn Translator>> = Vec::new();

    if let Some(youdao) = config.service("youdao") {
        if !youdao.app_key.is_empty() && !youdao.app_secret.is_empty() {
            providers.push(Box::new(YoudaoTranslator::new(
                client.clone(),
                youdao.app_key.clone(),
                youdao.app_secret.clone(),
            )));
        }
    }

    if let Some(deeplx) = config.service("deeplx") {
        if !deeplx.url.is_empty() {
            providers.push(Box::new(DeeplxTranslator::new(
                client.clone(),
                deeplx.url.clone(),
                deeplx.token.clone(),
            )));
        }
    }

    providers
}

/// Fan the query out to every provider and collect whatever arrives before
/// the shared deadline elapses.
///
/// Result order is arrival order at the channel; when several providers
/// answer within the deadline the order may vary between runs. A provider
/// that errors or times out contributes nothing and never aborts its
/// siblings.
pub async fn aggregate(
    providers: Vec<Box<dyn Translator>>,
    query: &str,
    timeout: Duration,
) -> Vec<Item> {
    let deadline = Instant::now() + timeout;
    let (tx, mut rx) = mpsc::channel::<Item>(RESULT_CHANNEL_CAPACITY);
    let mut tasks = JoinSet::new();

    for provider in providers {
        let tx = tx.clone();
        let query = query.to_string();
        tasks.spawn(async move {
            match tokio::time::timeout_at(deadline, provider.translate(&query)).await {
                Ok(Ok(results)) => {
                    for result in results {
                        // 消费端已停止收集时直接退出
                        if tx.send(result.into()).await.is_err() {
                            return;
                        }
                    }
                }
                Ok(Err(e)) => debug!(provider = provider.name(), "翻译服务失败: {}", e),
                Err(_) => debug!(provider = provider.name(), "翻译服务超时"),
            }
        });
    }
    // 所有任务结束后通道关闭
    drop(tx);

    let mut items = Vec::new();
    let drained = tokio::time::timeout_at(deadline, async {
        while let Some(item) = rx.recv().await {
            items.push(item);
        }
    })
    .await;
    tasks.abort_all();

    if !items.is_empty() {
        return items;
    }

    // 通道因所有任务超时被关闭时也算超时
    let timed_out = drained.is_err() || Instant::now() >= deadline;
    if timed_out {
        vec![Item {
            title: format!("翻译超时 {}秒", timeout.as_secs()),
            subtitle: "请检查网络连接或稍后重试".to_string(),
            ..Default::default()
        }]
    } else {
        vec![Item {
            title: "翻译失败".to_string(),
            subtitle: "请检查网络连接和配置".to_string(),
            ..Default::default()
        }]
    }
}
