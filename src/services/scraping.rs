use crate::config::sources::SourceProfiles;
use crate::domain::{DateRange, Review, Source};
use crate::error::Result;
use crate::infrastructure::{PageFetcher, ReviewExtractor};
use crate::services::filtering::filter_by_date;
use tracing::info;

pub struct ScrapingService {
    fetcher: PageFetcher,
    profiles: SourceProfiles,
}

impl ScrapingService {
    pub fn new(fetcher: PageFetcher, profiles: SourceProfiles) -> Self {
        info!("Created new Scraping service");
        Self { fetcher, profiles }
    }

    /// Fetches the source's page and returns the reviews dated inside `range`,
    /// in page order.
    pub async fn scrape(&self, source: Source, range: &DateRange) -> Result<Vec<Review>> {
        let profile = self.profiles.get(source);
        let extractor = ReviewExtractor::new(profile)?;

        let html = self.fetcher.fetch(&profile.url).await?;
        let reviews = extractor.extract(&html);
        info!("Found {} {} reviews on the page", reviews.len(), source);

        Ok(filter_by_date(reviews, range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sources::SourceProfile;
    use crate::error::ReviewError;
    use reqwest::Client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CAPTERRA_PAGE: &str = r#"
        <html><body>
          <div class="review-card">
            <h4 class="review-title">Solid pipeline tool</h4>
            <p class="review-body">Does the job.</p>
            <span class="review-date">Apr 10, 2023</span>
            <span class="rating-stars">4</span>
            <span class="reviewer-name">Lee</span>
          </div>
          <div class="review-card">
            <h4 class="review-title">Old review</h4>
            <span class="review-date">Apr 10, 2021</span>
          </div>
          <div class="review-card">
            <h4 class="review-title">No date at all</h4>
          </div>
        </body></html>"#;

    fn service(server: &MockServer) -> ScrapingService {
        let url = format!("{}/reviews", server.uri());
        let profiles = Source::ALL.iter().fold(SourceProfiles::default(), |p, &s| {
            let mut profile = SourceProfile::builtin(s);
            profile.url = url.clone();
            p.with_profile(s, profile)
        });
        ScrapingService::new(PageFetcher::new(Client::new()), profiles)
    }

    #[tokio::test]
    async fn returns_only_reviews_in_range() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reviews"))
            .respond_with(ResponseTemplate::new(200).set_body_string(CAPTERRA_PAGE))
            .mount(&server)
            .await;

        let range = DateRange::parse("2023-01-01", "2023-12-31").unwrap();
        let reviews = service(&server)
            .scrape(Source::Capterra, &range)
            .await
            .unwrap();

        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].title, "Solid pipeline tool");
        assert_eq!(reviews[0].rating, "4");
        assert_eq!(reviews[0].reviewer, "Lee");
    }

    #[tokio::test]
    async fn page_without_source_markup_yields_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(CAPTERRA_PAGE))
            .mount(&server)
            .await;

        let range = DateRange::parse("2000-01-01", "2030-12-31").unwrap();
        let reviews = service(&server).scrape(Source::G2, &range).await.unwrap();
        assert!(reviews.is_empty());
    }

    #[tokio::test]
    async fn failed_fetch_produces_no_reviews() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let range = DateRange::parse("2023-01-01", "2023-12-31").unwrap();
        let result = service(&server).scrape(Source::G2, &range).await;
        assert!(matches!(
            result,
            Err(ReviewError::UnexpectedStatus { status: 500, .. })
        ));
    }
}
