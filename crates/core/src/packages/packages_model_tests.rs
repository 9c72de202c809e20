//! Tests for package domain models and the diffing helpers.

#[cfg(test)]
mod tests {
    use crate::packages::{
        dates_equal_unordered, diff_details, diff_package, NewPackageDate, Package,
        PackageAggregate, PackageDate, PackageDetails, PackagePatch, PackageStatus, TourType,
        WriteStage,
    };
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn sample_package() -> Package {
        Package {
            package_id: 7,
            main_location: "Kyoto".to_string(),
            price: dec!(1000),
            duration: 5,
            nights: 4,
            status: PackageStatus::Active,
            tour_type: TourType::International,
            bookings: 12,
            revenue: dec!(12000),
            rating: 4.5,
            created_at: Utc::now(),
        }
    }

    fn sample_details() -> PackageDetails {
        PackageDetails {
            id: 3,
            package_id: 7,
            itinerary: Some("Day 1: arrival".to_string()),
            side_locations: vec!["Nara".to_string(), "Osaka".to_string()],
            inclusions: vec!["Hotel (No breakfast)".to_string()],
            image_url: vec!["https://img/1.jpg".to_string()],
        }
    }

    fn window(start: NaiveDate, end: NaiveDate, slots: i32) -> PackageDate {
        PackageDate {
            id: 0,
            package_id: 7,
            start_date: start,
            end_date: end,
            remaining_slots: slots,
        }
    }

    fn proposed(start: NaiveDate, end: NaiveDate, slots: i32) -> NewPackageDate {
        NewPackageDate {
            start_date: start,
            end_date: end,
            remaining_slots: slots,
        }
    }

    // ==================== Enum Serialization Tests ====================

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PackageStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&PackageStatus::Draft).unwrap(),
            "\"draft\""
        );
        assert_eq!(
            serde_json::from_str::<PackageStatus>("\"inactive\"").unwrap(),
            PackageStatus::Inactive
        );
    }

    #[test]
    fn test_tour_type_serializes_capitalized() {
        assert_eq!(
            serde_json::to_string(&TourType::Domestic).unwrap(),
            "\"Domestic\""
        );
        assert_eq!(
            serde_json::from_str::<TourType>("\"International\"").unwrap(),
            TourType::International
        );
    }

    #[test]
    fn test_write_stage_display() {
        assert_eq!(WriteStage::Package.to_string(), "package");
        assert_eq!(WriteStage::Refetch.to_string(), "refetch");
    }

    // ==================== Package Diff Tests ====================

    #[test]
    fn test_diff_package_includes_only_changed_fields() {
        let current = sample_package();
        let patch = PackagePatch {
            price: Some(dec!(1200)),
            duration: Some(5),
            status: Some(PackageStatus::Active),
            ..Default::default()
        };

        let table_patch = diff_package(&current, &patch);
        assert_eq!(table_patch.price, Some(dec!(1200)));
        assert_eq!(table_patch.duration, None);
        assert_eq!(table_patch.status, None);
        assert!(!table_patch.is_empty());
    }

    #[test]
    fn test_diff_package_unmentioned_fields_stay_untouched() {
        let current = sample_package();
        let patch = PackagePatch::default();

        let table_patch = diff_package(&current, &patch);
        assert!(table_patch.is_empty());
    }

    #[test]
    fn test_diff_package_serializes_only_populated_columns() {
        let current = sample_package();
        let patch = PackagePatch {
            nights: Some(3),
            ..Default::default()
        };

        let table_patch = diff_package(&current, &patch);
        let payload = serde_json::to_value(&table_patch).unwrap();
        let map = payload.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["nights"], 3);
    }

    // ==================== Details Diff Tests ====================

    #[test]
    fn test_scalar_only_patch_never_creates_details() {
        let patch = PackagePatch {
            price: Some(dec!(999)),
            ..Default::default()
        };
        assert!(diff_details(None, &patch).is_none());
    }

    #[test]
    fn test_equal_side_locations_issue_no_details_write() {
        let stored = sample_details();
        let patch = PackagePatch {
            side_locations: Some(vec!["Nara".to_string(), "Osaka".to_string()]),
            ..Default::default()
        };
        assert!(diff_details(Some(&stored), &patch).is_none());
    }

    #[test]
    fn test_reordered_side_locations_count_as_changed() {
        let stored = sample_details();
        let patch = PackagePatch {
            side_locations: Some(vec!["Osaka".to_string(), "Nara".to_string()]),
            ..Default::default()
        };

        let details_patch = diff_details(Some(&stored), &patch).unwrap();
        assert_eq!(
            details_patch.side_locations,
            Some(vec!["Osaka".to_string(), "Nara".to_string()])
        );
        assert_eq!(details_patch.itinerary, None);
    }

    #[test]
    fn test_missing_row_with_content_forces_full_insert() {
        let patch = PackagePatch {
            itinerary: Some("Day 1: temples".to_string()),
            side_locations: Some(Vec::new()),
            ..Default::default()
        };

        let details_patch = diff_details(None, &patch).unwrap();
        assert_eq!(details_patch.itinerary.as_deref(), Some("Day 1: temples"));
        assert_eq!(details_patch.side_locations, Some(Vec::new()));
    }

    #[test]
    fn test_missing_row_with_only_empty_values_skips_insert() {
        let patch = PackagePatch {
            itinerary: Some("   ".to_string()),
            inclusions: Some(Vec::new()),
            ..Default::default()
        };
        assert!(diff_details(None, &patch).is_none());
    }

    #[test]
    fn test_unchanged_itinerary_is_not_written() {
        let stored = sample_details();
        let patch = PackagePatch {
            itinerary: Some("Day 1: arrival".to_string()),
            image_url: Some(vec!["https://img/2.jpg".to_string()]),
            ..Default::default()
        };

        let details_patch = diff_details(Some(&stored), &patch).unwrap();
        assert_eq!(details_patch.itinerary, None);
        assert_eq!(
            details_patch.image_url,
            Some(vec!["https://img/2.jpg".to_string()])
        );
    }

    // ==================== Date Window Comparison Tests ====================

    #[test]
    fn test_permuted_equal_windows_compare_equal() {
        let current = vec![
            window(date(2025, 1, 1), date(2025, 1, 5), 10),
            window(date(2025, 2, 1), date(2025, 2, 5), 8),
        ];
        let replacement = vec![
            proposed(date(2025, 2, 1), date(2025, 2, 5), 8),
            proposed(date(2025, 1, 1), date(2025, 1, 5), 10),
        ];
        assert!(dates_equal_unordered(&current, &replacement));
    }

    #[test]
    fn test_changed_slots_compare_unequal() {
        let current = vec![window(date(2025, 1, 1), date(2025, 1, 5), 10)];
        let replacement = vec![proposed(date(2025, 1, 1), date(2025, 1, 5), 9)];
        assert!(!dates_equal_unordered(&current, &replacement));
    }

    #[test]
    fn test_different_window_counts_compare_unequal() {
        let current = vec![window(date(2025, 1, 1), date(2025, 1, 5), 10)];
        assert!(!dates_equal_unordered(&current, &[]));
        assert!(dates_equal_unordered(&[], &[]));
    }

    // ==================== Aggregate Assembly Tests ====================

    #[test]
    fn test_assemble_mirrors_detail_aliases() {
        let aggregate =
            PackageAggregate::assemble(sample_package(), Some(sample_details()), Vec::new());

        assert_eq!(aggregate.itinerary.as_deref(), Some("Day 1: arrival"));
        assert_eq!(aggregate.side_locations, vec!["Nara", "Osaka"]);
        assert_eq!(aggregate.inclusions, vec!["Hotel (No breakfast)"]);
        assert!(aggregate.package_details.is_some());
    }

    #[test]
    fn test_assemble_without_details_defaults_to_empty() {
        let aggregate = PackageAggregate::assemble(sample_package(), None, Vec::new());

        assert_eq!(aggregate.itinerary, None);
        assert!(aggregate.side_locations.is_empty());
        assert!(aggregate.inclusions.is_empty());
        assert!(aggregate.package_details.is_none());
    }

    #[test]
    fn test_assemble_sorts_windows_by_start_date() {
        let aggregate = PackageAggregate::assemble(
            sample_package(),
            None,
            vec![
                window(date(2025, 3, 1), date(2025, 3, 5), 5),
                window(date(2025, 1, 1), date(2025, 1, 5), 10),
            ],
        );

        assert_eq!(aggregate.available_dates[0].start_date, date(2025, 1, 1));
        assert_eq!(aggregate.available_dates[1].start_date, date(2025, 3, 1));
    }

    #[test]
    fn test_aggregate_serialization_never_leaks_raw_join_key() {
        let aggregate = PackageAggregate::assemble(
            sample_package(),
            Some(sample_details()),
            vec![window(date(2025, 1, 1), date(2025, 1, 5), 10)],
        );

        let payload = serde_json::to_value(&aggregate).unwrap();
        let map = payload.as_object().unwrap();
        assert!(map.contains_key("available_dates"));
        assert!(map.contains_key("package_details"));
        assert!(!map.contains_key("package_dates"));
        assert_eq!(map["main_location"], "Kyoto");
    }

    // ==================== Normalization and Validation Tests ====================

    #[test]
    fn test_patch_normalization_tidies_list_fields() {
        let patch = PackagePatch {
            side_locations: Some(vec![
                " Nara ".to_string(),
                "".to_string(),
                "Nara".to_string(),
                "Osaka".to_string(),
            ]),
            image_url: Some(vec![" https://img/1.jpg ".to_string(), "  ".to_string()]),
            ..Default::default()
        }
        .normalized();

        assert_eq!(patch.side_locations, Some(vec!["Nara".to_string(), "Osaka".to_string()]));
        assert_eq!(
            patch.image_url,
            Some(vec!["https://img/1.jpg".to_string()])
        );
    }

    #[test]
    fn test_patch_validation_rejects_negative_price() {
        let patch = PackagePatch {
            price: Some(dec!(-1)),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_window_validation_rejects_inverted_range() {
        let window = NewPackageDate {
            start_date: date(2025, 2, 1),
            end_date: date(2025, 1, 1),
            remaining_slots: 5,
        };
        assert!(window.validate().is_err());
    }
}
