mod test_utils;

use chrono::{DateTime, TimeZone, Utc};
use gazette_core::{Article, RunState, parse_post};
use gazette_interface::GenerationStage;
use gazette_pipeline::{BlogSettings, Orchestrator, RunConfig};
use gazette_rate_limit::GazetteConfig;
use std::sync::Arc;
use test_utils::{MockImageSearch, MockRepository, MockTextGenerator, Reply};

const KEYWORD: &str = "modern living room design";
const TITLE: &str = "Modern Living Room Design Ideas";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
}

struct Harness {
    text: Arc<MockTextGenerator>,
    images: Arc<MockImageSearch>,
    repo: Arc<MockRepository>,
    orchestrator: Orchestrator,
}

fn harness(text: MockTextGenerator, images: MockImageSearch, repo: MockRepository) -> Harness {
    let text = Arc::new(text);
    let images = Arc::new(images);
    let repo = Arc::new(repo);
    let orchestrator = Orchestrator::new(
        text.clone(),
        images.clone(),
        Some(repo.clone()),
        GazetteConfig::default(),
    );
    Harness {
        text,
        images,
        repo,
        orchestrator,
    }
}

fn config() -> RunConfig {
    RunConfig::builder()
        .api_keys(vec!["key-a".to_string()])
        .github_token("token")
        .github_repo("acme/blog")
        .keywords(vec![KEYWORD.to_string()])
        .build()
        .unwrap()
}

fn config_with_state(state: RunState) -> RunConfig {
    RunConfig::builder()
        .api_keys(vec!["key-a".to_string()])
        .github_token("token")
        .github_repo("acme/blog")
        .keywords(vec![KEYWORD.to_string()])
        .state(state)
        .build()
        .unwrap()
}

fn logged_article(keyword: &str, at: DateTime<Utc>) -> Article {
    Article::builder()
        .title(keyword)
        .slug(keyword.replace(' ', "-"))
        .keyword(keyword)
        .content("body")
        .created_at(at)
        .build()
        .unwrap()
}

#[tokio::test]
async fn empty_key_pool_fails_without_network() {
    let h = harness(
        MockTextGenerator::happy(TITLE),
        MockImageSearch::unconfigured(),
        MockRepository::accepting(),
    );
    let config = RunConfig::builder()
        .github_token("token")
        .github_repo("acme/blog")
        .keywords(vec![KEYWORD.to_string()])
        .build()
        .unwrap();

    let outcome = h.orchestrator.run_at(&config, now()).await;

    assert!(!outcome.result.success);
    assert_eq!(outcome.result.message, "No API keys available");
    assert!(outcome.result.article.is_none());
    assert_eq!(h.text.call_count(), 0);
    assert!(h.repo.puts().is_empty());
}

#[tokio::test]
async fn happy_path_without_image_backend_publishes() {
    let h = harness(
        MockTextGenerator::happy(TITLE),
        MockImageSearch::unconfigured(),
        MockRepository::accepting(),
    );

    let outcome = h.orchestrator.run_at(&config(), now()).await;
    let result = &outcome.result;

    assert!(result.success, "{}", result.message);
    assert_eq!(result.message, format!("Successfully created: {TITLE}"));
    let article = result.article.as_ref().unwrap();
    assert_eq!(article.keyword, KEYWORD);
    assert_eq!(article.slug, "modern-living-room-design-ideas");
    assert_eq!(result.stats.api_calls, 3);
    assert_eq!(result.stats.articles_today, 1);

    assert_eq!(
        h.text.stages(),
        [
            GenerationStage::Title,
            GenerationStage::Outline,
            GenerationStage::Body
        ]
    );

    let puts = h.repo.puts();
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].path, "_posts/2024-05-01-modern-living-room-design-ideas.md");
    assert_eq!(puts[0].message, format!("Add new article: {TITLE}"));

    let (front_matter, body) = parse_post(&puts[0].text()).unwrap();
    assert_eq!(front_matter.featured_image, "");
    assert_eq!(front_matter.title, TITLE);
    assert_eq!(front_matter.date, "2024-05-01 10:00:00 +0000");
    assert_eq!(front_matter.categories, ["Interior Design"]);
    assert_eq!(front_matter.author, "Admin");
    assert_eq!(
        front_matter.tags,
        ["modern living room", "living room decor", "modern", "living"]
    );
    assert_eq!(
        front_matter.seo.keywords,
        "modern living room, living room decor"
    );
    assert!(body.starts_with("## Start with layout"));

    assert!(outcome.state.is_used(KEYWORD));
    assert_eq!(outcome.state.articles.len(), 1);
    assert_eq!(outcome.state.daily_requests, 3);
}

#[tokio::test]
async fn non_json_outline_fails_before_publishing() {
    let h = harness(
        MockTextGenerator::happy(TITLE).reply(
            GenerationStage::Outline,
            Reply::Text("Sorry, here are some thoughts instead.".to_string()),
        ),
        MockImageSearch::unconfigured(),
        MockRepository::accepting(),
    );

    let outcome = h.orchestrator.run_at(&config(), now()).await;

    assert!(!outcome.result.success);
    assert_eq!(outcome.result.message, "Failed to generate article");
    assert!(h.repo.puts().is_empty());
    assert_eq!(
        h.text.stages(),
        [GenerationStage::Title, GenerationStage::Outline]
    );
    assert_eq!(outcome.result.stats.api_calls, 2);
    assert!(!outcome.state.is_used(KEYWORD));
}

#[tokio::test]
async fn rejected_write_leaves_keyword_unused() {
    let h = harness(
        MockTextGenerator::happy(TITLE),
        MockImageSearch::unconfigured(),
        MockRepository::rejecting("_posts", 422),
    );

    let outcome = h.orchestrator.run_at(&config(), now()).await;

    assert!(!outcome.result.success);
    assert_eq!(outcome.result.message, "Failed to save article to GitHub");
    assert!(!outcome.state.is_used(KEYWORD));
    assert!(outcome.state.articles.is_empty());
    assert_eq!(outcome.result.stats.articles_today, 0);
    assert_eq!(outcome.state.daily_requests, 3);
    assert_eq!(h.repo.puts().len(), 1);
}

#[tokio::test]
async fn image_is_rehosted_and_linked() {
    let h = harness(
        MockTextGenerator::happy(TITLE),
        MockImageSearch::with_urls(&["https://images.example/1.jpg"]),
        MockRepository::accepting(),
    );

    let outcome = h.orchestrator.run_at(&config(), now()).await;
    assert!(outcome.result.success);

    assert_eq!(
        h.images.queries(),
        ["modern living room design interior design"]
    );

    let puts = h.repo.puts();
    assert_eq!(puts.len(), 2);
    assert_eq!(
        puts[0].path,
        "assets/images/modern-living-room-design-featured.jpg"
    );
    assert_eq!(
        puts[0].message,
        "Add image: modern-living-room-design-featured.jpg"
    );
    assert_eq!(puts[0].content, [0xFF, 0xD8, 0xFF]);

    let (front_matter, _) = parse_post(&puts[1].text()).unwrap();
    assert_eq!(
        front_matter.featured_image,
        "/assets/images/modern-living-room-design-featured.jpg"
    );
}

#[tokio::test]
async fn image_failures_do_not_block_publication() {
    let h = harness(
        MockTextGenerator::happy(TITLE),
        MockImageSearch::with_urls(&["https://images.example/1.jpg"]).failing_download(),
        MockRepository::accepting(),
    );

    let outcome = h.orchestrator.run_at(&config(), now()).await;

    assert!(outcome.result.success);
    let puts = h.repo.puts();
    assert_eq!(puts.len(), 1);
    let (front_matter, _) = parse_post(&puts[0].text()).unwrap();
    assert_eq!(front_matter.featured_image, "");
}

#[tokio::test]
async fn rejected_image_upload_is_not_fatal() {
    let h = harness(
        MockTextGenerator::happy(TITLE),
        MockImageSearch::with_urls(&["https://images.example/1.jpg"]),
        MockRepository::rejecting("assets", 500),
    );

    let outcome = h.orchestrator.run_at(&config(), now()).await;

    assert!(outcome.result.success);
    assert_eq!(h.repo.puts().len(), 2);
}

#[tokio::test]
async fn article_ceiling_stops_the_run() {
    let h = harness(
        MockTextGenerator::happy(TITLE),
        MockImageSearch::unconfigured(),
        MockRepository::accepting(),
    );
    let mut state = RunState::default();
    state.record_publication(logged_article("a", now()));
    state.record_publication(logged_article("b", now()));

    let outcome = h.orchestrator.run_at(&config_with_state(state), now()).await;

    assert_eq!(outcome.result.message, "Daily limits reached");
    assert_eq!(outcome.result.stats.articles_today, 2);
    assert_eq!(h.text.call_count(), 0);
}

#[tokio::test]
async fn request_ceiling_stops_the_run() {
    let h = harness(
        MockTextGenerator::happy(TITLE),
        MockImageSearch::unconfigured(),
        MockRepository::accepting(),
    );
    let mut state = RunState::default();
    state.record_requests(now().date_naive(), 50);

    let outcome = h.orchestrator.run_at(&config_with_state(state), now()).await;

    assert_eq!(outcome.result.message, "Daily limits reached");
    assert_eq!(outcome.result.stats.api_calls, 50);
    assert_eq!(h.text.call_count(), 0);
}

#[tokio::test]
async fn yesterdays_requests_do_not_count() {
    let h = harness(
        MockTextGenerator::happy(TITLE),
        MockImageSearch::unconfigured(),
        MockRepository::accepting(),
    );
    let yesterday = Utc.with_ymd_and_hms(2024, 4, 30, 22, 0, 0).unwrap();
    let mut state = RunState::default();
    state.record_requests(yesterday.date_naive(), 50);
    state.record_publication(logged_article("old", yesterday));
    state.record_publication(logged_article("older", yesterday));

    let outcome = h.orchestrator.run_at(&config_with_state(state), now()).await;

    assert!(outcome.result.success);
    assert_eq!(outcome.result.stats.api_calls, 3);
    assert_eq!(outcome.result.stats.articles_today, 1);
    assert_eq!(outcome.state.articles.len(), 3);
}

#[tokio::test]
async fn empty_keyword_list_fails() {
    let h = harness(
        MockTextGenerator::happy(TITLE),
        MockImageSearch::unconfigured(),
        MockRepository::accepting(),
    );
    let config = RunConfig::builder()
        .api_keys(vec!["key-a".to_string()])
        .github_token("token")
        .github_repo("acme/blog")
        .build()
        .unwrap();

    let outcome = h.orchestrator.run_at(&config, now()).await;

    assert_eq!(outcome.result.message, "No keywords available");
    assert_eq!(h.text.call_count(), 0);
}

#[tokio::test]
async fn missing_repository_fails_before_backend_calls() {
    let text = Arc::new(MockTextGenerator::happy(TITLE));
    let orchestrator = Orchestrator::new(
        text.clone(),
        Arc::new(MockImageSearch::unconfigured()),
        None,
        GazetteConfig::default(),
    );

    let outcome = orchestrator.run_at(&config(), now()).await;

    assert!(!outcome.result.success);
    assert_eq!(outcome.result.message, "No content repository configured");
    assert_eq!(text.call_count(), 0);
}

#[tokio::test]
async fn failed_title_call_is_not_counted() {
    let h = harness(
        MockTextGenerator::happy(TITLE).reply(GenerationStage::Title, Reply::Fail),
        MockImageSearch::unconfigured(),
        MockRepository::accepting(),
    );

    let outcome = h.orchestrator.run_at(&config(), now()).await;

    assert_eq!(outcome.result.message, "Failed to generate article");
    assert_eq!(h.text.call_count(), 1);
    assert_eq!(outcome.result.stats.api_calls, 0);
}

#[tokio::test]
async fn exhausted_keywords_reset_and_publish() {
    let h = harness(
        MockTextGenerator::happy(TITLE),
        MockImageSearch::unconfigured(),
        MockRepository::accepting(),
    );
    let mut state = RunState::default();
    state.mark_used(KEYWORD);

    let outcome = h.orchestrator.run_at(&config_with_state(state), now()).await;

    assert!(outcome.result.success);
    assert_eq!(outcome.state.used_keywords.len(), 1);
    assert!(outcome.state.is_used(KEYWORD));
}

#[tokio::test]
async fn blog_settings_flow_into_front_matter() {
    let h = harness(
        MockTextGenerator::happy(TITLE),
        MockImageSearch::unconfigured(),
        MockRepository::accepting(),
    );
    let blog: BlogSettings = serde_json::from_str(
        r#"{"category": "Home", "author": "Dana", "max_daily_articles": 5}"#,
    )
    .unwrap();
    let config = RunConfig::builder()
        .api_keys(vec!["key-a".to_string()])
        .github_token("token")
        .github_repo("acme/blog")
        .keywords(vec![KEYWORD.to_string()])
        .blog(blog)
        .build()
        .unwrap();

    let outcome = h.orchestrator.run_at(&config, now()).await;
    assert!(outcome.result.success);

    let (front_matter, _) = parse_post(&h.repo.puts()[0].text()).unwrap();
    assert_eq!(front_matter.categories, ["Home"]);
    assert_eq!(front_matter.author, "Dana");
}

#[tokio::test]
async fn empty_key_pool_wins_over_malformed_repository() {
    let config = RunConfig::builder()
        .github_token("token")
        .github_repo("not-a-repo")
        .keywords(vec![KEYWORD.to_string()])
        .build()
        .unwrap();

    let orchestrator = Orchestrator::from_config(&config, GazetteConfig::default()).unwrap();
    let outcome = orchestrator.run_at(&config, now()).await;

    assert!(!outcome.result.success);
    assert_eq!(outcome.result.message, "No API keys available");
}

#[tokio::test]
async fn malformed_repository_reports_missing_repository() {
    let config = RunConfig::builder()
        .api_keys(vec!["key-a".to_string()])
        .github_token("token")
        .github_repo("not-a-repo")
        .keywords(vec![KEYWORD.to_string()])
        .build()
        .unwrap();

    let orchestrator = Orchestrator::from_config(&config, GazetteConfig::default()).unwrap();
    let outcome = orchestrator.run_at(&config, now()).await;

    assert!(!outcome.result.success);
    assert_eq!(outcome.result.message, "No content repository configured");
    assert_eq!(outcome.result.stats.api_calls, 0);
}
