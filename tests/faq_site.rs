//! End-to-end tests against a running host.

use std::time::Duration;

use faq_site::SiteConfig;

mod common;

const FAQ_PATHS: [&str; 5] = [
    "global-prefix",
    "lifecycle-events",
    "hybrid-application",
    "multiple-servers",
    "http-adapter",
];

#[tokio::test]
async fn test_every_faq_page_served_with_title() {
    let site = common::start_site(SiteConfig::default()).await;
    let client = common::client();

    for path in FAQ_PATHS {
        let res = client.get(site.url(&format!("/faq/{path}"))).send().await.unwrap();
        assert_eq!(res.status(), 200, "/faq/{path}");
        assert!(res.headers().contains_key("x-request-id"));

        let body = res.text().await.unwrap();
        assert!(body.contains(" - FAQ</title>"), "{body}");
        assert!(body.contains(&format!("<app-{path}></app-{path}>")));
    }

    site.shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let site = common::start_site(SiteConfig::default()).await;
    let client = common::client();

    for path in ["/faq/nope", "/global-prefix", "/faq", "/FAQ/global-prefix"] {
        let res = client.get(site.url(path)).send().await.unwrap();
        assert_eq!(res.status(), 404, "{path}");
    }

    site.shutdown.trigger();
}

#[tokio::test]
async fn test_trailing_slash_resolves() {
    let site = common::start_site(SiteConfig::default()).await;

    let res = common::client()
        .get(site.url("/faq/multiple-servers/"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body = res.text().await.unwrap();
    assert!(body.contains("<title>HTTPS &amp; Multiple Servers - FAQ</title>"));

    site.shutdown.trigger();
}

#[tokio::test]
async fn test_sitemap_under_custom_prefix() {
    let mut config = SiteConfig::default();
    config.site.faq_prefix = "docs/faq".into();
    config.site.base_url = "https://docs.example.com".into();
    let site = common::start_site(config).await;

    let res = common::client().get(site.url("/sitemap.xml")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "application/xml");

    let xml = res.text().await.unwrap();
    for path in FAQ_PATHS {
        assert!(xml.contains(&format!("<loc>https://docs.example.com/docs/faq/{path}</loc>")));
    }

    site.shutdown.trigger();
}

#[tokio::test]
async fn test_client_request_id_echoed() {
    let site = common::start_site(SiteConfig::default()).await;

    let res = common::client()
        .get(site.url("/healthz"))
        .header("x-request-id", "test-req-1")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["x-request-id"], "test-req-1");

    site.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let site = common::start_site(SiteConfig::default()).await;
    let res = common::client().get(site.url("/healthz")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    site.shutdown.trigger();

    let result = tokio::time::timeout(Duration::from_secs(5), site.handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());
}
