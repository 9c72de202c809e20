#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    use crate::bookings::bookings_model::{Booking, BookingStatus, BookingUpdate, NewBooking};
    use crate::bookings::bookings_service::BookingService;
    use crate::bookings::bookings_traits::{BookingRepositoryTrait, BookingServiceTrait};
    use crate::errors::{Error, Result};

    #[derive(Clone, Default)]
    struct MockBookingRepository {
        bookings: Arc<Mutex<Vec<Booking>>>,
        fail_update: bool,
    }

    impl MockBookingRepository {
        fn with_bookings(bookings: Vec<Booking>) -> Self {
            Self {
                bookings: Arc::new(Mutex::new(bookings)),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl BookingRepositoryTrait for MockBookingRepository {
        async fn list(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>> {
            let bookings = self.bookings.lock().unwrap();
            Ok(bookings
                .iter()
                .filter(|b| status.map_or(true, |s| b.status == s))
                .cloned()
                .collect())
        }

        async fn list_for_package(&self, package_id: i64) -> Result<Vec<Booking>> {
            let bookings = self.bookings.lock().unwrap();
            Ok(bookings
                .iter()
                .filter(|b| b.package_id == package_id)
                .cloned()
                .collect())
        }

        async fn get_by_id(&self, booking_id: i64) -> Result<Option<Booking>> {
            let bookings = self.bookings.lock().unwrap();
            Ok(bookings.iter().find(|b| b.booking_id == booking_id).cloned())
        }

        async fn insert(&self, new_booking: NewBooking) -> Result<Booking> {
            let mut bookings = self.bookings.lock().unwrap();
            let booking = Booking {
                booking_id: bookings.len() as i64 + 1,
                package_id: new_booking.package_id,
                customer_id: new_booking.customer_id,
                agent_id: new_booking.agent_id,
                booking_date: new_booking.booking_date,
                pax: new_booking.pax,
                total_price: new_booking.total_price,
                status: new_booking.status,
                created_at: Utc::now(),
            };
            bookings.push(booking.clone());
            Ok(booking)
        }

        async fn update(&self, booking_id: i64, patch: BookingUpdate) -> Result<Booking> {
            if self.fail_update {
                return Err(Error::Repository(
                    "Intentional booking update failure".to_string(),
                ));
            }
            let mut bookings = self.bookings.lock().unwrap();
            let booking = bookings
                .iter_mut()
                .find(|b| b.booking_id == booking_id)
                .ok_or_else(|| Error::Repository("Booking not found".to_string()))?;
            if let Some(agent_id) = patch.agent_id {
                booking.agent_id = Some(agent_id);
            }
            if let Some(booking_date) = patch.booking_date {
                booking.booking_date = booking_date;
            }
            if let Some(pax) = patch.pax {
                booking.pax = pax;
            }
            if let Some(total_price) = patch.total_price {
                booking.total_price = total_price;
            }
            if let Some(status) = patch.status {
                booking.status = status;
            }
            Ok(booking.clone())
        }

        async fn delete(&self, booking_id: i64) -> Result<()> {
            let mut bookings = self.bookings.lock().unwrap();
            bookings.retain(|b| b.booking_id != booking_id);
            Ok(())
        }
    }

    fn sample_booking(booking_id: i64, status: BookingStatus) -> Booking {
        Booking {
            booking_id,
            package_id: 7,
            customer_id: 21,
            agent_id: None,
            booking_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            pax: 2,
            total_price: dec!(1800.00),
            status,
            created_at: Utc::now(),
        }
    }

    // ==================== Booking Creation Tests ====================

    #[tokio::test]
    async fn test_create_booking_success() {
        let repository = MockBookingRepository::default();
        let service = BookingService::new(Arc::new(repository));

        let created = service
            .create_booking(NewBooking {
                package_id: 7,
                customer_id: 21,
                agent_id: Some(3),
                booking_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                pax: 4,
                total_price: dec!(3600.00),
                status: BookingStatus::default(),
            })
            .await
            .unwrap();

        assert_eq!(created.status, BookingStatus::Pending);
        assert_eq!(created.pax, 4);
        assert_eq!(created.agent_id, Some(3));
    }

    #[tokio::test]
    async fn test_create_booking_rejects_zero_travelers() {
        let repository = MockBookingRepository::default();
        let bookings = repository.bookings.clone();
        let service = BookingService::new(Arc::new(repository));

        let result = service
            .create_booking(NewBooking {
                package_id: 7,
                customer_id: 21,
                agent_id: None,
                booking_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                pax: 0,
                total_price: dec!(0),
                status: BookingStatus::default(),
            })
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(bookings.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_booking_rejects_negative_price() {
        let repository = MockBookingRepository::default();
        let service = BookingService::new(Arc::new(repository));

        let result = service
            .create_booking(NewBooking {
                package_id: 7,
                customer_id: 21,
                agent_id: None,
                booking_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                pax: 1,
                total_price: dec!(-10.00),
                status: BookingStatus::default(),
            })
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    // ==================== Booking Status Tests ====================

    #[tokio::test]
    async fn test_set_booking_status_updates_only_status() {
        let repository =
            MockBookingRepository::with_bookings(vec![sample_booking(1, BookingStatus::Pending)]);
        let service = BookingService::new(Arc::new(repository));

        let updated = service
            .set_booking_status(1, BookingStatus::Confirmed)
            .await
            .unwrap();

        assert_eq!(updated.status, BookingStatus::Confirmed);
        assert_eq!(updated.pax, 2);
        assert_eq!(updated.total_price, dec!(1800.00));
    }

    #[tokio::test]
    async fn test_list_bookings_filters_by_status() {
        let repository = MockBookingRepository::with_bookings(vec![
            sample_booking(1, BookingStatus::Pending),
            sample_booking(2, BookingStatus::Confirmed),
            sample_booking(3, BookingStatus::Pending),
        ]);
        let service = BookingService::new(Arc::new(repository));

        let pending = service
            .list_bookings(Some(BookingStatus::Pending))
            .await
            .unwrap();
        let all = service.list_bookings(None).await.unwrap();

        assert_eq!(pending.len(), 2);
        assert_eq!(all.len(), 3);
    }

    // ==================== Booking Lookup Tests ====================

    #[tokio::test]
    async fn test_get_booking_not_found() {
        let repository = MockBookingRepository::default();
        let service = BookingService::new(Arc::new(repository));

        let result = service.get_booking(99).await;

        assert!(matches!(result, Err(Error::Gateway(_))));
    }

    #[tokio::test]
    async fn test_update_booking_rejects_invalid_patch_before_write() {
        let repository = MockBookingRepository {
            fail_update: true,
            ..Default::default()
        };
        let service = BookingService::new(Arc::new(repository));

        // Validation runs first, so the failing repository is never reached.
        let result = service
            .update_booking(
                1,
                BookingUpdate {
                    pax: Some(0),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
