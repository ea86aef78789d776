/*
 * Unit tests for the time summary
 *
 * Tests:
 *  - test_summary_empty
 *  - test_summary_statistics
 *  - test_summary_display
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod summary_tests {
    use crate::passenger::Passenger;
    use crate::shared::PassengerId;
    use crate::system::{Stats, TimeSummary};

    fn finished(id: u64, request: u64, pickup: u64, dropoff: u64) -> Passenger {
        let mut p = Passenger::new(PassengerId::new(id), 1, 2, request).unwrap();
        p.mark_pickup(pickup).unwrap();
        p.mark_dropoff(dropoff).unwrap();
        p
    }

    #[test]
    fn test_summary_empty() {
        // Purpose: No processed passengers gives no statistics

        // Act
        let summary = TimeSummary::from_passengers(&[]);

        // Assert
        assert!(summary.passengers.is_empty());
        assert_eq!(summary.wait_time, None);
        assert_eq!(summary.total_time, None);
        assert_eq!(summary.to_string(), "No processed passengers");
    }

    #[test]
    fn test_summary_statistics() {
        // Purpose: Min, max and mean are taken over wait and total time

        // Arrange
        let passengers = vec![finished(1, 0, 1, 4), finished(2, 0, 2, 5), finished(3, 2, 2, 4)];

        // Act
        let summary = TimeSummary::from_passengers(&passengers);

        // Assert
        assert_eq!(summary.passengers.len(), 3);
        assert_eq!(summary.wait_time, Some(Stats { min: 0.0, max: 2.0, mean: 1.0 }));
        assert_eq!(summary.total_time, Some(Stats { min: 2.0, max: 5.0, mean: 11.0 / 3.0 }));
    }

    #[test]
    fn test_summary_display() {
        // Purpose: The rendered summary has one labelled line per statistic

        // Arrange
        let summary = TimeSummary::from_passengers(&[finished(1, 0, 0, 2)]);

        // Act
        let text = summary.to_string();

        // Assert
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            vec![
                "Min Wait Time 0.0",
                "Max Wait Time 0.0",
                "Mean Wait Time 0.0",
                "Min Total Time 2.0",
                "Max Total Time 2.0",
                "Mean Total Time 2.0",
            ]
        );
    }
}
