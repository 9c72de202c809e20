//! Tests for attraction listing and rating behavior.

#[cfg(test)]
mod tests {
    use crate::attractions::{
        Attraction, AttractionRepositoryTrait, AttractionService, AttractionServiceTrait,
        AttractionUpdate, NewAttraction,
    };
    use crate::errors::{Error, GatewayError, Result};
    use crate::listings::ListingStatus;
    use crate::reviews::{
        ReviewSummary, ReviewSummaryRepositoryTrait, ReviewSummaryService,
    };
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // =========================================================================
    // Mocks
    // =========================================================================

    #[derive(Clone, Default)]
    struct MockAttractionRepository {
        attractions: Arc<Mutex<Vec<Attraction>>>,
        fail: Arc<Mutex<bool>>,
    }

    impl MockAttractionRepository {
        fn with_attractions(attractions: Vec<Attraction>) -> Self {
            Self {
                attractions: Arc::new(Mutex::new(attractions)),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl AttractionRepositoryTrait for MockAttractionRepository {
        async fn list(&self, status_filter: Option<ListingStatus>) -> Result<Vec<Attraction>> {
            if *self.fail.lock().unwrap() {
                return Err(Error::Unexpected("Intentional list failure".into()));
            }
            Ok(self
                .attractions
                .lock()
                .unwrap()
                .iter()
                .filter(|a| status_filter.map(|s| a.status == s).unwrap_or(true))
                .cloned()
                .collect())
        }

        async fn get_by_code(&self, attraction_code: &str) -> Result<Option<Attraction>> {
            Ok(self
                .attractions
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.attraction_code == attraction_code)
                .cloned())
        }

        async fn list_active_by_codes(&self, codes: &[String]) -> Result<Vec<Attraction>> {
            Ok(self
                .attractions
                .lock()
                .unwrap()
                .iter()
                .filter(|a| {
                    a.status == ListingStatus::Active && codes.contains(&a.attraction_code)
                })
                .cloned()
                .collect())
        }

        async fn insert(&self, new_attraction: NewAttraction) -> Result<Attraction> {
            let attraction = Attraction {
                attraction_code: new_attraction.attraction_code,
                name: new_attraction.name,
                location: new_attraction.location,
                description: new_attraction.description,
                price: new_attraction.price,
                status: new_attraction.status,
                image_url: new_attraction.image_url,
                created_at: Utc::now(),
            };
            self.attractions.lock().unwrap().push(attraction.clone());
            Ok(attraction)
        }

        async fn update(
            &self,
            attraction_code: &str,
            update: AttractionUpdate,
        ) -> Result<Attraction> {
            let mut attractions = self.attractions.lock().unwrap();
            let attraction = attractions
                .iter_mut()
                .find(|a| a.attraction_code == attraction_code)
                .ok_or_else(|| {
                    Error::Gateway(GatewayError::NotFound(attraction_code.to_string()))
                })?;
            if let Some(name) = update.name {
                attraction.name = name;
            }
            if let Some(price) = update.price {
                attraction.price = price;
            }
            if let Some(status) = update.status {
                attraction.status = status;
            }
            Ok(attraction.clone())
        }

        async fn delete(&self, attraction_code: &str) -> Result<()> {
            self.attractions
                .lock()
                .unwrap()
                .retain(|a| a.attraction_code != attraction_code);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct MockReviewRepository {
        summaries: Arc<Mutex<Vec<ReviewSummary>>>,
        fail: Arc<Mutex<bool>>,
    }

    impl MockReviewRepository {
        fn with_summaries(summaries: Vec<ReviewSummary>) -> Self {
            Self {
                summaries: Arc::new(Mutex::new(summaries)),
                ..Default::default()
            }
        }

        fn set_fail(&self, fail: bool) {
            *self.fail.lock().unwrap() = fail;
        }
    }

    #[async_trait]
    impl ReviewSummaryRepositoryTrait for MockReviewRepository {
        async fn list_for_sources(
            &self,
            source_type: &str,
            source_ids: &[String],
        ) -> Result<Vec<ReviewSummary>> {
            if *self.fail.lock().unwrap() {
                return Err(Error::Unexpected("Intentional summary failure".into()));
            }
            Ok(self
                .summaries
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.source_type == source_type && source_ids.contains(&s.source_id))
                .cloned()
                .collect())
        }

        async fn top_by_weighted_rating(
            &self,
            source_type: &str,
            limit: usize,
        ) -> Result<Vec<ReviewSummary>> {
            if *self.fail.lock().unwrap() {
                return Err(Error::Unexpected("Intentional summary failure".into()));
            }
            let mut summaries: Vec<ReviewSummary> = self
                .summaries
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.source_type == source_type)
                .cloned()
                .collect();
            summaries.sort_by(|a, b| b.weighted_rating.total_cmp(&a.weighted_rating));
            summaries.truncate(limit);
            Ok(summaries)
        }
    }

    // =========================================================================
    // Test Helpers
    // =========================================================================

    fn attraction(code: &str, status: ListingStatus) -> Attraction {
        Attraction {
            attraction_code: code.to_string(),
            name: format!("Attraction {}", code),
            location: "Kyoto".to_string(),
            description: None,
            price: dec!(50),
            status,
            image_url: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn summary(source_id: &str, weighted: f64) -> ReviewSummary {
        ReviewSummary {
            source_type: "attraction".to_string(),
            source_id: source_id.to_string(),
            avg_rating: weighted,
            total_reviews: 10,
            weighted_rating: weighted,
        }
    }

    fn service(
        attractions: Vec<Attraction>,
        summaries: Vec<ReviewSummary>,
    ) -> (AttractionService, MockAttractionRepository, MockReviewRepository) {
        let repository = MockAttractionRepository::with_attractions(attractions);
        let reviews = MockReviewRepository::with_summaries(summaries);
        let service = AttractionService::new(
            Arc::new(repository.clone()),
            Arc::new(ReviewSummaryService::new(Arc::new(reviews.clone()))),
        );
        (service, repository, reviews)
    }

    // =========================================================================
    // Featured Listings
    // =========================================================================

    #[tokio::test]
    async fn test_featured_excludes_inactive_top_ranked_listing() {
        let (service, _, _) = service(
            vec![
                attraction("A", ListingStatus::Active),
                attraction("B", ListingStatus::Active),
                attraction("C", ListingStatus::Inactive),
            ],
            vec![summary("C", 4.9), summary("A", 4.5), summary("B", 4.0)],
        );

        let featured = service.featured_attractions(2).await.unwrap();

        // C ranked highest but is inactive, so only A survives the limit-2 cut.
        let codes: Vec<&str> = featured
            .iter()
            .map(|r| r.listing.attraction_code.as_str())
            .collect();
        assert_eq!(codes, ["A"]);
        assert_eq!(featured[0].weighted_rating, 4.5);
    }

    #[tokio::test]
    async fn test_featured_preserves_rating_rank_order() {
        let (service, _, _) = service(
            vec![
                attraction("A", ListingStatus::Active),
                attraction("C", ListingStatus::Active),
            ],
            vec![summary("A", 4.5), summary("C", 4.9)],
        );

        let featured = service.featured_attractions(2).await.unwrap();
        let codes: Vec<&str> = featured
            .iter()
            .map(|r| r.listing.attraction_code.as_str())
            .collect();
        assert_eq!(codes, ["C", "A"]);
    }

    #[tokio::test]
    async fn test_featured_with_no_summaries_returns_empty() {
        let (service, _, _) = service(vec![attraction("A", ListingStatus::Active)], Vec::new());
        assert!(service.featured_attractions(4).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_featured_propagates_ranking_query_failure() {
        let (service, _, reviews) = service(vec![], vec![summary("A", 4.5)]);
        reviews.set_fail(true);
        assert!(service.featured_attractions(2).await.is_err());
    }

    // =========================================================================
    // Rating Merge
    // =========================================================================

    #[tokio::test]
    async fn test_list_with_ratings_defaults_missing_summaries() {
        let (service, _, _) = service(
            vec![
                attraction("A", ListingStatus::Active),
                attraction("B", ListingStatus::Active),
            ],
            vec![summary("A", 4.2)],
        );

        let rated = service.list_with_ratings(None).await.unwrap();

        assert_eq!(rated.len(), 2);
        assert_eq!(rated[0].listing.attraction_code, "A");
        assert_eq!(rated[0].weighted_rating, 4.2);
        assert_eq!(rated[1].listing.attraction_code, "B");
        assert_eq!(rated[1].avg_rating, 0.0);
        assert_eq!(rated[1].total_reviews, 0);
    }

    #[tokio::test]
    async fn test_list_with_ratings_survives_summary_failure() {
        let (service, _, reviews) = service(
            vec![attraction("A", ListingStatus::Active)],
            vec![summary("A", 4.2)],
        );
        reviews.set_fail(true);

        let rated = service.list_with_ratings(None).await.unwrap();

        assert_eq!(rated.len(), 1);
        assert_eq!(rated[0].avg_rating, 0.0);
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    #[tokio::test]
    async fn test_get_attraction_missing_reports_not_found() {
        let (service, _, _) = service(Vec::new(), Vec::new());
        let err = service.get_attraction("NOPE").await.unwrap_err();
        assert!(matches!(err, Error::Gateway(GatewayError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_attraction_rejects_blank_code() {
        let (service, repository, _) = service(Vec::new(), Vec::new());

        let err = service
            .create_attraction(NewAttraction {
                attraction_code: "  ".to_string(),
                name: "Fushimi Inari".to_string(),
                location: "Kyoto".to_string(),
                description: None,
                price: dec!(0),
                status: ListingStatus::Active,
                image_url: Vec::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert!(repository.attractions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_attraction_normalizes_images() {
        let (service, _, _) = service(Vec::new(), Vec::new());

        let created = service
            .create_attraction(NewAttraction {
                attraction_code: " FI-01 ".to_string(),
                name: "Fushimi Inari".to_string(),
                location: "Kyoto".to_string(),
                description: None,
                price: dec!(10),
                status: ListingStatus::Active,
                image_url: vec![" https://img/1.jpg ".to_string(), "".to_string()],
            })
            .await
            .unwrap();

        assert_eq!(created.attraction_code, "FI-01");
        assert_eq!(created.image_url, vec!["https://img/1.jpg"]);
    }
}
